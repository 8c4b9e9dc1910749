use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordering applied on top of a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Lenient parse used for query strings; unknown values yield `None` so the
    /// key's default direction applies.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search, filter, sort and page state for one directory grid.
///
/// An empty selection set for a categorical filter means "match all", and a flag
/// set to `false` imposes no restriction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub categorical_filters: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    pub boolean_flags: BTreeMap<String, bool>,
    #[serde(default)]
    pub sort_key: Option<String>,
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,
    #[serde(default = "first_page")]
    pub page: i64,
}

fn first_page() -> i64 {
    1
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            categorical_filters: BTreeMap::new(),
            boolean_flags: BTreeMap::new(),
            sort_key: None,
            sort_direction: None,
            page: first_page(),
        }
    }
}

impl DirectoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Adds values to a categorical filter, merging with any existing selection.
    pub fn filter<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.categorical_filters
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn flag(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.boolean_flags.insert(name.into(), enabled);
        self
    }

    pub fn sort_by(mut self, key: impl Into<String>, direction: Option<SortDirection>) -> Self {
        self.sort_key = Some(key.into());
        self.sort_direction = direction;
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Builds a query from URL-style key/value pairs.
    ///
    /// Recognised keys: `search`, `sort`, `direction`, `page`, repeated `flag=<name>`
    /// and repeated `filter.<name>=a,b`. Anything else is ignored, and values that do
    /// not parse fall back to their defaults.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        for (key, value) in params {
            let key = key.as_ref();
            let value = value.as_ref();
            match key {
                "search" | "q" => query.search_term = value.to_string(),
                "sort" if !value.trim().is_empty() => {
                    query.sort_key = Some(value.trim().to_string());
                }
                "direction" => query.sort_direction = SortDirection::parse(value),
                "page" => query.page = value.trim().parse().unwrap_or_else(|_| first_page()),
                "flag" if !value.trim().is_empty() => {
                    query.boolean_flags.insert(value.trim().to_string(), true);
                }
                other => {
                    if let Some(name) = other.strip_prefix("filter.") {
                        let selection = query
                            .categorical_filters
                            .entry(name.to_string())
                            .or_default();
                        selection.extend(
                            value
                                .split(',')
                                .map(str::trim)
                                .filter(|part| !part.is_empty())
                                .map(str::to_string),
                        );
                    }
                }
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_params_collects_filters_and_flags() {
        let query = DirectoryQuery::from_params([
            ("search", "fin"),
            ("filter.industries", "Fintech, AI"),
            ("filter.industries", "Climate"),
            ("flag", "verified"),
            ("sort", "rating"),
            ("direction", "ASC"),
            ("page", "3"),
            ("utm_source", "newsletter"),
        ]);

        assert_eq!(query.search_term, "fin");
        let industries = query
            .categorical_filters
            .get("industries")
            .expect("industries filter present");
        assert_eq!(industries.len(), 3);
        assert!(industries.contains("AI"));
        assert_eq!(query.boolean_flags.get("verified"), Some(&true));
        assert_eq!(query.sort_key.as_deref(), Some("rating"));
        assert_eq!(query.sort_direction, Some(SortDirection::Ascending));
        assert_eq!(query.page, 3);
    }

    #[test]
    fn from_params_defaults_malformed_values() {
        let query = DirectoryQuery::from_params([
            ("page", "two"),
            ("direction", "sideways"),
            ("sort", "  "),
        ]);

        assert_eq!(query.page, 1);
        assert_eq!(query.sort_direction, None);
        assert_eq!(query.sort_key, None);
    }
}
