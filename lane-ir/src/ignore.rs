//! Option keys excluded from emission, per action.

use indexmap::{IndexMap, IndexSet};

/// Options of `precheck` that only make sense as nested rule objects.
const PRECHECK_IGNORED: &[&str] = &[
    "negative_apple_sentiment",
    "placeholder_text",
    "other_platforms",
    "future_functionality",
    "test_words",
    "curse_words",
    "custom_text",
    "copyright_date",
    "unreachable_urls",
];

/// Mapping from action name to the option keys that must not be emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreRules {
    rules: IndexMap<String, IndexSet<String>>,
}

impl IgnoreRules {
    /// No exclusions.
    pub fn none() -> Self {
        Self::default()
    }

    /// The built-in exclusions.
    pub fn defaults() -> Self {
        Self::none().ignore("precheck", PRECHECK_IGNORED.iter().copied())
    }

    /// Exclude `keys` from the binding of `action`.
    pub fn ignore<I, S>(mut self, action: &str, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules
            .entry(action.to_string())
            .or_default()
            .extend(keys.into_iter().map(Into::into));
        self
    }

    /// Merge another rule set into this one.
    pub fn merge(mut self, other: IgnoreRules) -> Self {
        for (action, keys) in other.rules {
            self.rules.entry(action).or_default().extend(keys);
        }
        self
    }

    pub fn is_ignored(&self, action: &str, key: &str) -> bool {
        self.rules
            .get(action)
            .is_some_and(|keys| keys.contains(key))
    }

    /// Iterate `(action, key)` pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().flat_map(|(action, keys)| {
            keys.iter().map(move |key| (action.as_str(), key.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rules.values().all(IndexSet::is_empty)
    }
}
