mod picker_popup;

pub use picker_popup::PickerPopup;
