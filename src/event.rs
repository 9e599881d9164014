/// Where a pointer click or hover landed, as resolved by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// a displayed entry, by its position in the displayed list
    Entry(usize),
    /// the picker's own input field
    Control,
    /// anywhere outside the picker's bounds
    Outside,
}

/// Toolkit independent input forwarded to [`crate::picker::Picker::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    Activate,
    Char(char),
    Backspace,
    /// The host's text field holds a new query (paste, IME, word deletion).
    QueryReplaced(String),
    Up,
    Down,
    Enter,
    Cancel,
    Hover(PointerTarget),
    Click(PointerTarget),
}

impl PickerEvent {
    /// Expands typed text into one `Char` event per character.
    pub fn typed(text: &str) -> impl Iterator<Item = PickerEvent> + '_ {
        text.chars().map(PickerEvent::Char)
    }
}
