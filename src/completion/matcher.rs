//! Matching between a partially typed name and completion labels.
//!
//! The registry stays agnostic of how a label matches; callers hand it a
//! [`CompletionFilter`]. The default is a case-sensitive prefix match.

use nucleo_matcher::{
    pattern::{self, AtomKind, Normalization},
    Matcher, Utf32Str,
};
use serde::Deserialize;

/// How a filter string is compared with a label.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Label starts with the filter.
    #[default]
    Prefix,
    /// Label contains the filter anywhere.
    Substring,
    /// Filter characters appear in order (scored by nucleo).
    Fuzzy,
}

/// Case sensitivity of a match.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub enum Case {
    Ignore,
    /// Case-insensitive unless the filter contains an uppercase character.
    Smart,
    #[default]
    Respect,
}

impl Case {
    fn ignores_case_for(self, filter: &str) -> bool {
        match self {
            Case::Ignore => true,
            Case::Smart => !filter.chars().any(char::is_uppercase),
            Case::Respect => false,
        }
    }
}

impl From<Case> for pattern::CaseMatching {
    fn from(case: Case) -> Self {
        match case {
            Case::Ignore => pattern::CaseMatching::Ignore,
            Case::Smart => pattern::CaseMatching::Smart,
            Case::Respect => pattern::CaseMatching::Respect,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionFilter {
    pub strategy: MatchStrategy,
    pub case: Case,
}

impl CompletionFilter {
    pub fn new(strategy: MatchStrategy, case: Case) -> Self {
        Self { strategy, case }
    }

    /// Whether `label` should be offered for `filter`. An empty filter
    /// matches every label.
    pub fn matches(&self, label: &str, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }

        let ignore_case = self.case.ignores_case_for(filter);
        let normalize = |text: &str| match ignore_case {
            true => text.to_lowercase(),
            false => text.to_string(),
        };

        match self.strategy {
            MatchStrategy::Prefix => normalize(label).starts_with(&normalize(filter)),
            MatchStrategy::Substring => normalize(label).contains(&normalize(filter)),
            MatchStrategy::Fuzzy => fuzzy_score(label, filter, self.case).is_some(),
        }
    }
}

fn fuzzy_score(label: &str, filter: &str, case: Case) -> Option<u32> {
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);
    // Taken literally: no `!`, `^`, `$` or `'` query operators
    let pattern = pattern::Pattern::new(filter, case.into(), Normalization::Smart, AtomKind::Fuzzy);
    let mut buf = Vec::new();
    pattern.score(Utf32Str::new(label, &mut buf), &mut matcher)
}
