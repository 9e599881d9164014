//! The per-frame picker controller.
//!
//! The host forwards raw input as [`PickerEvent`]s once per redraw, the picker
//! narrows the choices and moves the highlight, and a finalized choice is
//! reported through the commit callback by its index in the choice source.

use std::borrow::Cow;

use tracing::debug;

use crate::{
    cache::MatchCache,
    config::PickerConfig,
    event::{PickerEvent, PointerTarget},
    scorer::ModeScorer,
    selection::{Selection, Transition},
    source::Choices,
};

/// One row of the displayed list, handed to an [`EntryRenderer`].
#[derive(Debug, PartialEq, Eq)]
pub struct DisplayedEntry<'a> {
    pub position: usize,
    /// index into the choice source
    pub index: usize,
    pub label: Cow<'a, str>,
    pub highlighted: bool,
    /// char indices of the label that matched the query
    pub matched: &'a [usize],
}

/// Host supplied drawing of the displayed list.
pub trait EntryRenderer {
    fn entry(&mut self, entry: &DisplayedEntry<'_>);

    /// Called instead of `entry` when a query is typed but nothing matches.
    fn no_matches(&mut self) {}
}

#[derive(Clone, Copy, Debug)]
enum CommitRequest {
    Highlighted,
    Entry(usize),
}

pub struct Picker {
    config: PickerConfig,
    scorer: ModeScorer,
    query: String,
    selection: Selection,
    cache: MatchCache,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl Picker {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            scorer: config.match_mode.into(),
            query: String::new(),
            selection: Selection::default(),
            cache: MatchCache::default(),
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PickerConfig) {
        if config == self.config {
            return;
        }
        debug!("picker config changed to {:?}", config);
        if config.match_mode != self.config.match_mode {
            self.scorer = config.match_mode.into();
        }
        self.config = config;
        self.query.retain(|c| config.char_filter.accepts(c));
        self.cache.invalidate();
        self.selection.apply(Transition::TextChanged, 0);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        self.selection.is_active()
    }

    pub fn highlighted(&self) -> usize {
        self.selection.highlighted()
    }

    /// Returns whether the host should scroll the highlighted entry into
    /// view, clearing the request.
    pub fn take_scroll_request(&mut self) -> bool {
        self.selection.take_scroll_request()
    }

    pub fn activate(&mut self) {
        if !self.selection.is_active() {
            self.query.clear();
            self.cache.invalidate();
            self.selection.apply(Transition::Activate, 0);
        }
    }

    pub fn deactivate(&mut self) {
        if self.selection.is_active() {
            debug!("picker deactivated");
        }
        self.query.clear();
        self.cache.invalidate();
        self.selection.reset();
    }

    pub fn displayed_count(&mut self, choices: &Choices<'_>) -> usize {
        if self.query.is_empty() {
            return match self.config.allow_empty_filter {
                true => choices.len(),
                false => 0,
            };
        }
        self.cache
            .get_matches(&self.query, choices, &self.scorer)
            .len()
    }

    /// Maps a displayed position back to its index in the choice source.
    pub fn displayed_index(&mut self, choices: &Choices<'_>, position: usize) -> Option<usize> {
        if self.query.is_empty() {
            return (self.config.allow_empty_filter && position < choices.len()).then_some(position);
        }
        self.cache
            .get_matches(&self.query, choices, &self.scorer)
            .get(position)
            .map(|m| m.index)
    }

    /// Processes one redraw worth of input. Events apply in order, except that
    /// a commit is resolved after every other event of the tick. `on_commit`
    /// receives the committed choice index. Returns whether the picker is
    /// open.
    pub fn tick(
        &mut self,
        events: impl IntoIterator<Item = PickerEvent>,
        choices: &Choices<'_>,
        on_commit: impl FnOnce(usize),
    ) -> bool {
        self.clamp(choices);

        let mut commit: Option<CommitRequest> = None;
        for event in events {
            match event {
                PickerEvent::Activate | PickerEvent::Click(PointerTarget::Control) => {
                    self.activate()
                }
                PickerEvent::Char(c) => self.push_char(c),
                PickerEvent::Backspace => {
                    if self.selection.is_active() && self.query.pop().is_some() {
                        self.selection.apply(Transition::TextChanged, 0);
                    }
                }
                PickerEvent::QueryReplaced(text) => self.replace_query(&text),
                PickerEvent::Up => self.navigate(Transition::MoveUp, choices),
                PickerEvent::Down => self.navigate(Transition::MoveDown, choices),
                PickerEvent::Hover(PointerTarget::Entry(position)) => {
                    self.navigate(Transition::PointerSelect(position), choices)
                }
                PickerEvent::Hover(_) => {}
                PickerEvent::Enter => {
                    commit.get_or_insert(CommitRequest::Highlighted);
                }
                PickerEvent::Click(PointerTarget::Entry(position)) => {
                    commit.get_or_insert(CommitRequest::Entry(position));
                }
                PickerEvent::Cancel | PickerEvent::Click(PointerTarget::Outside) => {
                    if self.selection.is_active() {
                        self.deactivate();
                    }
                }
            }
        }

        self.clamp(choices);
        if let Some(request) = commit {
            if let Some(index) = self.commit(request, choices) {
                on_commit(index);
            }
        }
        self.selection.is_active()
    }

    /// Walks the displayed list, handing each entry to `renderer`.
    pub fn render(&mut self, choices: &Choices<'_>, renderer: &mut impl EntryRenderer) {
        // an idle picker has nothing highlighted
        let highlighted = match self.selection.is_active() {
            true => Some(self.selection.highlighted()),
            false => None,
        };

        if self.query.is_empty() {
            if self.config.allow_empty_filter {
                for (index, label) in choices.iter() {
                    renderer.entry(&DisplayedEntry {
                        position: index,
                        index,
                        label,
                        highlighted: highlighted == Some(index),
                        matched: &[],
                    });
                }
            }
            return;
        }

        let matches = self.cache.get_matches(&self.query, choices, &self.scorer);
        if matches.is_empty() {
            renderer.no_matches();
            return;
        }
        for (position, m) in matches.iter().enumerate() {
            renderer.entry(&DisplayedEntry {
                position,
                index: m.index,
                label: choices.string_at(m.index),
                highlighted: highlighted == Some(position),
                matched: &m.positions,
            });
        }
    }

    fn push_char(&mut self, c: char) {
        if !self.config.char_filter.accepts(c) {
            return;
        }
        self.activate();
        self.query.push(c);
        self.selection.apply(Transition::TextChanged, 0);
    }

    fn replace_query(&mut self, text: &str) {
        let filtered: String = text
            .chars()
            .filter(|c| self.config.char_filter.accepts(*c))
            .collect();
        if filtered == self.query {
            return;
        }
        self.activate();
        self.query = filtered;
        self.selection.apply(Transition::TextChanged, 0);
    }

    fn navigate(&mut self, transition: Transition, choices: &Choices<'_>) {
        if self.selection.is_active() {
            let displayed = self.displayed_count(choices);
            self.selection.apply(transition, displayed);
        }
    }

    fn clamp(&mut self, choices: &Choices<'_>) {
        if self.selection.is_active() {
            let displayed = self.displayed_count(choices);
            self.selection.clamp(displayed);
        }
    }

    fn commit(&mut self, request: CommitRequest, choices: &Choices<'_>) -> Option<usize> {
        if !self.selection.is_active() {
            return None;
        }
        let displayed = self.displayed_count(choices);
        if let CommitRequest::Entry(position) = request {
            if position >= displayed {
                return None;
            }
            self.selection
                .apply(Transition::PointerSelect(position), displayed);
        }

        let index = self.displayed_index(choices, self.selection.highlighted())?;
        self.selection.apply(Transition::Commit, displayed)?;
        debug!("committed choice {} for query {:?}", index, self.query);
        self.deactivate();
        Some(index)
    }
}
