use egui::{text::LayoutJob, Align, Key, Response, TextFormat, Ui};

use crate::{
    event::{PickerEvent, PointerTarget},
    picker::{DisplayedEntry, EntryRenderer, Picker},
    source::Choices,
};

/// Draws a [`Picker`] as a single line edit box with the displayed choices
/// listed below it, and turns egui input into picker events.
pub struct PickerPopup {
    id_source: &'static str,
    buffer: String,
    hint: String,
    max_height: f32,
}

impl PickerPopup {
    pub fn new(id_source: &'static str) -> Self {
        Self {
            id_source,
            buffer: String::new(),
            hint: String::new(),
            max_height: 200.0,
        }
    }

    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    /// Text shown in the empty edit box, usually the current value.
    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint = hint.into();
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        picker: &mut Picker,
        choices: &Choices<'_>,
        on_commit: impl FnOnce(usize),
    ) -> Response {
        let mut events = vec![];

        let inner = ui.vertical(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.buffer)
                    .hint_text(self.hint.as_str())
                    .id_source(self.id_source),
            );

            if response.gained_focus() {
                events.push(PickerEvent::Activate);
            }
            if response.changed() {
                events.push(PickerEvent::QueryReplaced(self.buffer.clone()));
            }
            if response.has_focus() {
                ui.input(|i| {
                    if i.key_pressed(Key::ArrowUp) {
                        events.push(PickerEvent::Up);
                    }
                    if i.key_pressed(Key::ArrowDown) {
                        events.push(PickerEvent::Down);
                    }
                });
            }
            if response.lost_focus() {
                ui.input(|i| {
                    if i.key_pressed(Key::Enter) {
                        events.push(PickerEvent::Enter);
                    } else if i.key_pressed(Key::Escape) {
                        events.push(PickerEvent::Cancel);
                    }
                });
            }

            if picker.is_active() || picker.config().allow_empty_filter {
                let scroll = picker.take_scroll_request();
                egui::ScrollArea::vertical()
                    .id_source((self.id_source, "entries"))
                    .max_height(self.max_height)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        let mut rows = EguiRows {
                            ui,
                            events: &mut events,
                            scroll,
                            activate_on_click: !picker.is_active(),
                        };
                        picker.render(choices, &mut rows);
                    });
            }
            response
        });

        let bounds = inner.response.rect;
        let response = inner.inner;

        let outside_click = ui.input(|i| {
            i.pointer.any_click() && i.pointer.interact_pos().is_some_and(|p| !bounds.contains(p))
        });
        if outside_click {
            events.push(PickerEvent::Click(PointerTarget::Outside));
        }

        let was_active = picker.is_active();
        let open = picker.tick(events, choices, on_commit);
        self.buffer = picker.query().to_owned();

        if was_active && !open && response.has_focus() {
            response.surrender_focus();
        }
        if was_active != open {
            ui.ctx().request_repaint();
        }
        response
    }
}

struct EguiRows<'u> {
    ui: &'u mut Ui,
    events: &'u mut Vec<PickerEvent>,
    scroll: bool,
    // an inactive filter still lists every choice, a click there opens it
    activate_on_click: bool,
}

impl EntryRenderer for EguiRows<'_> {
    fn entry(&mut self, entry: &DisplayedEntry<'_>) {
        let job = highlighted_label(self.ui, &entry.label, entry.matched);
        let response = self.ui.selectable_label(entry.highlighted, job);

        if entry.highlighted && self.scroll {
            response.scroll_to_me(Some(Align::Center));
        }
        if response.hovered() && self.ui.input(|i| i.pointer.is_moving()) {
            self.events
                .push(PickerEvent::Hover(PointerTarget::Entry(entry.position)));
        }
        if response.clicked() {
            if self.activate_on_click {
                self.events.push(PickerEvent::Activate);
            }
            self.events
                .push(PickerEvent::Click(PointerTarget::Entry(entry.position)));
        }
    }

    fn no_matches(&mut self) {
        self.ui.label(egui::RichText::new("no matches").weak().italics());
    }
}

fn highlighted_label(ui: &Ui, label: &str, matched: &[usize]) -> LayoutJob {
    let normal = TextFormat {
        color: ui.visuals().text_color(),
        ..Default::default()
    };
    let strong = TextFormat {
        color: ui.visuals().strong_text_color(),
        underline: ui.visuals().widgets.active.fg_stroke,
        ..Default::default()
    };

    let mut job = LayoutJob::default();
    let mut buf = [0u8; 4];
    for (idx, c) in label.chars().enumerate() {
        let format = match matched.contains(&idx) {
            true => strong.clone(),
            false => normal.clone(),
        };
        job.append(c.encode_utf8(&mut buf), 0.0, format);
    }
    job
}
