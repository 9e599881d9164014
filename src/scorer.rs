use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};

use crate::{config::MatchMode, source::Choices};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scored {
    pub score: i64,
    /// char indices of the matched characters in the candidate
    pub positions: Vec<usize>,
}

/// Scores a single candidate against a query. Higher scores rank first;
/// `None` means the candidate does not match at all.
pub trait Scorer {
    fn score(&self, query: &str, candidate: &str) -> Option<Scored>;
}

pub struct FuzzyScorer {
    matcher: SkimMatcherV2,
}

impl Default for FuzzyScorer {
    fn default() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl Scorer for FuzzyScorer {
    fn score(&self, query: &str, candidate: &str) -> Option<Scored> {
        self.matcher
            .fuzzy_indices(candidate, query)
            .map(|(score, positions)| Scored { score, positions })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PrefixScorer {
    case_sensitive: bool,
}

impl PrefixScorer {
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }
}

impl Scorer for PrefixScorer {
    fn score(&self, query: &str, candidate: &str) -> Option<Scored> {
        let mut candidate_chars = candidate.chars();
        let mut matched = 0;
        for q in query.chars() {
            let c = candidate_chars.next()?;
            let same = if self.case_sensitive {
                q == c
            } else {
                q.to_lowercase().eq(c.to_lowercase())
            };
            if !same {
                return None;
            }
            matched += 1;
        }
        // every prefix match ranks the same, so the original order decides
        Some(Scored {
            score: 0,
            positions: (0..matched).collect(),
        })
    }
}

/// The scorer selected by a [`MatchMode`].
pub enum ModeScorer {
    Fuzzy(FuzzyScorer),
    Prefix(PrefixScorer),
}

impl From<MatchMode> for ModeScorer {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Fuzzy => ModeScorer::Fuzzy(FuzzyScorer::default()),
            MatchMode::Prefix { case_sensitive } => {
                ModeScorer::Prefix(PrefixScorer::new(case_sensitive))
            }
        }
    }
}

impl Scorer for ModeScorer {
    fn score(&self, query: &str, candidate: &str) -> Option<Scored> {
        match self {
            ModeScorer::Fuzzy(s) => s.score(query, candidate),
            ModeScorer::Prefix(s) => s.score(query, candidate),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// index into the choice source
    pub index: usize,
    pub score: i64,
    pub positions: Vec<usize>,
}

pub type MatchResult = Vec<Match>;

/// Scores every choice and orders the matches by score, best first. Equal
/// scores keep the original order of the choices.
pub fn rank(query: &str, choices: &Choices<'_>, scorer: &dyn Scorer) -> MatchResult {
    if query.is_empty() {
        return vec![];
    }

    let mut matches: MatchResult = choices
        .iter()
        .filter_map(|(index, candidate)| {
            scorer.score(query, &candidate).map(|s| Match {
                index,
                score: s.score,
                positions: s.positions,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn is_subsequence(query: &str, candidate: &str) -> bool {
        let mut candidate = candidate.chars().flat_map(char::to_lowercase);
        query
            .chars()
            .flat_map(char::to_lowercase)
            .all(|q| candidate.any(|c| c == q))
    }

    // scores by candidate length, so ties are easy to construct
    struct LengthScorer;

    impl Scorer for LengthScorer {
        fn score(&self, query: &str, candidate: &str) -> Option<Scored> {
            candidate.contains(query).then(|| Scored {
                score: candidate.len() as i64,
                positions: vec![],
            })
        }
    }

    #[test]
    fn test_fuzzy_matches_are_subsequences() {
        let items = labels(&["Alpha", "Beta", "Gamma", "Gap", "RESP0", "resm1", "HMOVE"]);
        let choices = Choices::from(items.as_slice());
        let scorer = FuzzyScorer::default();
        for query in ["Ga", "re", "mv", "A", "xyz"] {
            for m in rank(query, &choices, &scorer) {
                assert!(is_subsequence(query, &items[m.index]), "{query} {}", items[m.index]);
            }
        }
    }

    #[test]
    fn test_fuzzy_ga() {
        let items = labels(&["Alpha", "Beta", "Gamma", "Gap"]);
        let choices = Choices::from(items.as_slice());
        let matches = rank("Ga", &choices, &FuzzyScorer::default());
        // Gamma and Gap score the same, so the original order decides
        assert_eq!(matches[0].score, matches[1].score);
        let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![2, 3]);
        assert_eq!(matches[0].positions, vec![0, 1]);
    }

    #[test]
    fn test_fuzzy_ignores_case() {
        let scorer = FuzzyScorer::default();
        assert!(scorer.score("ga", "GAMMA").is_some());
        assert!(scorer.score("GA", "gamma").is_some());
        assert!(scorer.score("ag", "gamma").is_none());
    }

    #[test]
    fn test_prefix_case_sensitivity() {
        let insensitive = PrefixScorer::new(false);
        let sensitive = PrefixScorer::new(true);
        assert_eq!(
            insensitive.score("gam", "Gamma"),
            Some(Scored {
                score: 0,
                positions: vec![0, 1, 2]
            })
        );
        assert!(sensitive.score("gam", "Gamma").is_none());
        assert!(sensitive.score("Gam", "Gamma").is_some());
        assert!(insensitive.score("amm", "Gamma").is_none());
        assert!(insensitive.score("Gammas", "Gamma").is_none());
    }

    #[test]
    fn test_ties_keep_original_order() {
        let items = labels(&["abcd", "ab", "xxab", "cdab", "zab"]);
        let choices = Choices::from(items.as_slice());
        let indices: Vec<usize> = rank("ab", &choices, &LengthScorer)
            .into_iter()
            .map(|m| m.index)
            .collect();
        assert_eq!(indices, vec![0, 2, 3, 4, 1]);
    }

    #[test]
    fn test_empty_query_ranks_nothing() {
        let items = labels(&["a", "b"]);
        let choices = Choices::from(items.as_slice());
        assert!(rank("", &choices, &FuzzyScorer::default()).is_empty());
    }

    #[test]
    fn test_mode_scorer() {
        let prefix = ModeScorer::from(MatchMode::Prefix {
            case_sensitive: false,
        });
        assert!(prefix.score("gm", "Gamma").is_none());
        let fuzzy = ModeScorer::from(MatchMode::Fuzzy);
        assert!(fuzzy.score("gm", "Gamma").is_some());
    }
}
