use tracing::trace;

use crate::{
    scorer::{rank, MatchResult, Scorer},
    source::Choices,
};

#[derive(PartialEq, Eq)]
struct CacheKey {
    query: String,
    choices_len: usize,
}

/// Remembers the matches of the last scoring pass so that redrawing an
/// unchanged query does not score every choice again.
#[derive(Default)]
pub struct MatchCache {
    key: Option<CacheKey>,
    matches: MatchResult,
}

impl MatchCache {
    pub fn get_matches(
        &mut self,
        query: &str,
        choices: &Choices<'_>,
        scorer: &dyn Scorer,
    ) -> &MatchResult {
        let fresh = self
            .key
            .as_ref()
            .is_some_and(|k| k.query == query && k.choices_len == choices.len());

        if !fresh {
            self.matches = rank(query, choices, scorer);
            trace!(
                "scored {} choices for {:?}, {} matched",
                choices.len(),
                query,
                self.matches.len()
            );
            self.key = Some(CacheKey {
                query: query.to_string(),
                choices_len: choices.len(),
            });
        }
        &self.matches
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.matches.clear();
    }
}
