use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Activate,
    MoveUp,
    MoveDown,
    TextChanged,
    PointerSelect(usize),
    Commit,
    Cancel,
}

/// Highlight and activity of a picker. `highlighted` is a position in the
/// currently displayed list, never an index into the choices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    active: bool,
    highlighted: usize,
    scroll_to_highlighted: bool,
}

impl Selection {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Returns the pending scroll request, clearing it.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_highlighted)
    }

    /// Applies a transition against a list of `displayed_count` entries.
    /// Returns the committed position when the transition finalized a choice;
    /// the selection is then inactive again.
    pub fn apply(&mut self, transition: Transition, displayed_count: usize) -> Option<usize> {
        if !self.active {
            if transition == Transition::Activate {
                debug!("picker activated");
                self.active = true;
                self.highlighted = 0;
                self.scroll_to_highlighted = true;
            }
            return None;
        }

        match transition {
            Transition::Activate => {}
            Transition::MoveUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
                self.scroll_to_highlighted = true;
            }
            Transition::MoveDown => {
                if displayed_count > 0 {
                    self.highlighted = (self.highlighted + 1).min(displayed_count - 1);
                    self.scroll_to_highlighted = true;
                }
            }
            Transition::TextChanged => {
                self.highlighted = 0;
                self.scroll_to_highlighted = true;
            }
            Transition::PointerSelect(position) => {
                if position < displayed_count {
                    self.highlighted = position;
                }
            }
            Transition::Commit => {
                if self.highlighted < displayed_count {
                    let committed = self.highlighted;
                    debug!("picker committed position {}", committed);
                    self.reset();
                    return Some(committed);
                }
            }
            Transition::Cancel => {
                debug!("picker cancelled");
                self.reset();
            }
        }
        None
    }

    /// Pulls the highlight back inside the displayed list after it shrank.
    pub fn clamp(&mut self, displayed_count: usize) {
        if displayed_count == 0 {
            self.highlighted = 0;
        } else if self.highlighted >= displayed_count {
            self.highlighted = displayed_count - 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
