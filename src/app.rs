use std::borrow::Cow;

use tracing::{debug, info};

use crate::{
    command::{command_queue, Command, CommandReceiver, CommandSender},
    config::{MatchMode, PickerConfig},
    hex::{format_hex_u16, format_hex_u8, parse_hex_u8, CharFilter},
    picker::Picker,
    source::{Choices, IndexableSource},
    ui::PickerPopup,
};

const RAM_START: u16 = 0x80;
const RAM_SIZE: usize = 0x80;

const REGISTER_PICKER_KEY: &str = "register_picker";
const ADDRESS_PICKER_KEY: &str = "address_picker";

const TIA_REGISTERS: [&str; 20] = [
    "VSYNC", "VBLANK", "WSYNC", "RSYNC", "NUSIZ0", "NUSIZ1", "COLUP0", "COLUP1", "COLUPF",
    "COLUBK", "CTRLPF", "REFP0", "REFP1", "PF0", "PF1", "PF2", "RESP0", "RESP1", "RESM0",
    "RESM1",
];

/// RAM addresses, one label per byte, produced on demand.
struct RamAddresses;

impl IndexableSource for RamAddresses {
    fn len(&self) -> usize {
        RAM_SIZE
    }

    fn string_at(&self, idx: usize) -> Cow<'_, str> {
        Cow::Owned(format!("{:02X}", RAM_START as usize + idx))
    }
}

pub struct PickerDemoApp {
    registers: Vec<String>,
    register_picker: Picker,
    register_popup: PickerPopup,
    chosen_register: Option<usize>,

    address_picker: Picker,
    address_popup: PickerPopup,
    poke_value: String,
    poke_error: Option<String>,

    ram: [u8; RAM_SIZE],
    commands: CommandSender<u8>,
    pending: CommandReceiver<u8>,
}

impl PickerDemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let stored = |key: &str| {
            cc.storage
                .and_then(|storage| eframe::get_value::<PickerConfig>(storage, key))
        };
        let register_config = stored(REGISTER_PICKER_KEY).unwrap_or_else(PickerConfig::type_ahead);
        let address_config = stored(ADDRESS_PICKER_KEY).unwrap_or_else(|| {
            PickerConfig::filter()
                .with_match_mode(MatchMode::Prefix {
                    case_sensitive: false,
                })
                .with_char_filter(CharFilter::Hex)
        });
        debug!(
            "register picker {:?}, address picker {:?}",
            register_config, address_config
        );

        let (commands, pending) = command_queue();
        Self {
            registers: TIA_REGISTERS.iter().map(|r| r.to_string()).collect(),
            register_picker: Picker::new(register_config),
            register_popup: PickerPopup::new("register_picker"),
            chosen_register: None,
            address_picker: Picker::new(address_config),
            address_popup: PickerPopup::new("address_picker").with_max_height(300.0),
            poke_value: "00".to_string(),
            poke_error: None,
            ram: [0; RAM_SIZE],
            commands,
            pending,
        }
    }

    fn apply_pending(&mut self) {
        for Command { target, value } in self.pending.drain() {
            if let Some(byte) = self.ram.get_mut(target) {
                *byte = value;
                info!(
                    "poked {} into {}",
                    format_hex_u8(value),
                    format_hex_u16(RAM_START + target as u16)
                );
            }
        }
    }

    fn show_register_picker(&mut self, ui: &mut egui::Ui) {
        ui.heading("TIA register");
        match_mode_options(ui, &mut self.register_picker);

        let hint = match self.chosen_register {
            Some(idx) => self.registers[idx].clone(),
            None => "type a register name".to_string(),
        };
        self.register_popup.set_hint(hint);

        let mut committed = None;
        let choices = Choices::from(self.registers.as_slice());
        self.register_popup
            .show(ui, &mut self.register_picker, &choices, |idx| {
                committed = Some(idx)
            });
        if committed.is_some() {
            self.chosen_register = committed;
        }
    }

    fn show_address_picker(&mut self, ui: &mut egui::Ui) {
        ui.heading("Poke RAM");
        ui.horizontal(|ui| {
            ui.label("value $");
            ui.add(egui::TextEdit::singleline(&mut self.poke_value).desired_width(30.0));
        });
        if let Some(error) = &self.poke_error {
            ui.colored_label(ui.visuals().error_fg_color, error.as_str());
        }

        self.address_popup.set_hint("filter by address");
        let mut committed = None;
        let addresses = RamAddresses;
        let choices = Choices::indexable(&addresses);
        self.address_popup
            .show(ui, &mut self.address_picker, &choices, |idx| {
                committed = Some(idx)
            });

        if let Some(target) = committed {
            self.poke_error = match parse_hex_u8(&self.poke_value) {
                Ok(value) => self
                    .commands
                    .submit(Command::new(target, value))
                    .err()
                    .map(|e| e.to_string()),
                Err(e) => Some(e.to_string()),
            };
        }
    }

    fn show_ram(&self, ui: &mut egui::Ui) {
        egui::Grid::new("ram_grid").striped(true).show(ui, |ui| {
            for (row, bytes) in self.ram.chunks(16).enumerate() {
                ui.monospace(format_hex_u16(RAM_START + (row * 16) as u16));
                for byte in bytes {
                    ui.monospace(format!("{:02X}", byte));
                }
                ui.end_row();
            }
        });
    }
}

// Fuzzy matching ignores case, so the case option only exists for prefix
// matching.
fn match_mode_options(ui: &mut egui::Ui, picker: &mut Picker) {
    let mut config = *picker.config();
    let mut fuzzy = config.match_mode == MatchMode::Fuzzy;
    let mut case_sensitive = config.match_mode.is_case_sensitive();

    ui.horizontal(|ui| {
        ui.checkbox(&mut fuzzy, "fuzzy");
        ui.add_enabled(
            !fuzzy,
            egui::Checkbox::new(&mut case_sensitive, "case sensitive"),
        );
    });

    config.match_mode = match fuzzy {
        true => MatchMode::Fuzzy,
        false => MatchMode::Prefix { case_sensitive },
    };
    picker.set_config(config);
}

impl eframe::App for PickerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_pending();

        egui::SidePanel::left("pickers_panel").show(ctx, |ui| {
            self.show_register_picker(ui);
            ui.separator();
            self.show_address_picker(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("RAM");
            ui.separator();
            self.show_ram(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, REGISTER_PICKER_KEY, self.register_picker.config());
        eframe::set_value(storage, ADDRESS_PICKER_KEY, self.address_picker.config());
    }
}
