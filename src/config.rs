use serde::{Deserialize, Serialize};

use crate::hex::CharFilter;

/// How the query is compared against each choice.
///
/// Fuzzy matching is always case-insensitive, so only prefix matching carries a
/// case flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    #[default]
    Fuzzy,
    Prefix { case_sensitive: bool },
}

impl MatchMode {
    pub fn is_case_sensitive(&self) -> bool {
        match self {
            MatchMode::Fuzzy => false,
            MatchMode::Prefix { case_sensitive } => *case_sensitive,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// With an empty query, show every choice in its original order instead of
    /// nothing.
    pub allow_empty_filter: bool,
    pub match_mode: MatchMode,
    pub char_filter: CharFilter,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::filter()
    }
}

impl PickerConfig {
    /// Narrows a visible collection; everything is shown until a query is typed.
    pub fn filter() -> Self {
        Self {
            allow_empty_filter: true,
            match_mode: MatchMode::Fuzzy,
            char_filter: CharFilter::Any,
        }
    }

    /// Type-ahead combo: nothing is offered, and so nothing can be committed,
    /// until a query is typed.
    pub fn type_ahead() -> Self {
        Self {
            allow_empty_filter: false,
            ..Self::filter()
        }
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_char_filter(mut self, char_filter: CharFilter) -> Self {
        self.char_filter = char_filter;
        self
    }
}

#[test]
fn test_presets() {
    assert!(PickerConfig::filter().allow_empty_filter);
    assert!(!PickerConfig::type_ahead().allow_empty_filter);
    assert_eq!(PickerConfig::type_ahead().match_mode, MatchMode::Fuzzy);
}

#[test]
fn test_fuzzy_is_never_case_sensitive() {
    assert!(!MatchMode::Fuzzy.is_case_sensitive());
    assert!(MatchMode::Prefix {
        case_sensitive: true
    }
    .is_case_sensitive());
    assert!(!MatchMode::Prefix {
        case_sensitive: false
    }
    .is_case_sensitive());
}
