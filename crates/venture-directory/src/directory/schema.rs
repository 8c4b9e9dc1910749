use super::query::SortDirection;

/// Value a record exposes for a categorical filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FacetValue<'a> {
    Scalar(&'a str),
    List(&'a [String]),
}

impl<'a> FacetValue<'a> {
    pub fn values(self) -> Vec<&'a str> {
        match self {
            FacetValue::Scalar(value) if !value.is_empty() => vec![value],
            FacetValue::Scalar(_) => Vec::new(),
            FacetValue::List(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Categorical filter declared by an entity kind.
pub struct Facet<T> {
    pub name: &'static str,
    pub value: fn(&T) -> FacetValue<'_>,
}

/// Boolean restriction declared by an entity kind.
pub struct Flag<T> {
    pub name: &'static str,
    pub value: fn(&T) -> bool,
}

/// How records compare under a sort key.
pub enum SortOrder<T> {
    /// Missing and non-finite values compare as `0`.
    Numeric(fn(&T) -> Option<f64>),
    /// Case-insensitive by Unicode lowercase, ties broken by exact bytes. No locale
    /// collation, so accented initials sort after `z`.
    Text(fn(&T) -> &str),
    /// Position in the source collection; descending yields newest-first when the
    /// collection is appended to over time.
    Insertion,
}

pub struct SortSpec<T> {
    pub key: &'static str,
    pub order: SortOrder<T>,
    pub default_direction: SortDirection,
}

/// Priority predicate and weight behind "recommended" and "featured" strips.
pub struct Recommendation<T> {
    pub eligible: fn(&T) -> bool,
    pub weight: fn(&T) -> Option<f64>,
}

/// Per-entity configuration consumed by the generic engine.
pub struct DirectorySchema<T: 'static> {
    pub name: &'static str,
    pub page_size: usize,
    pub search_fields: fn(&T) -> Vec<&str>,
    pub facets: &'static [Facet<T>],
    pub flags: &'static [Flag<T>],
    pub sorts: &'static [SortSpec<T>],
    pub recommendation: Recommendation<T>,
}

impl<T: 'static> DirectorySchema<T> {
    pub fn facet(&self, name: &str) -> Option<&Facet<T>> {
        self.facets.iter().find(|facet| facet.name == name)
    }

    pub fn flag(&self, name: &str) -> Option<&Flag<T>> {
        self.flags.iter().find(|flag| flag.name == name)
    }

    pub fn sort(&self, key: &str) -> Option<&SortSpec<T>> {
        self.sorts.iter().find(|spec| spec.key == key)
    }

    pub fn facet_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.facets.iter().map(|facet| facet.name)
    }

    pub fn flag_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.flags.iter().map(|flag| flag.name)
    }

    pub fn sort_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sorts.iter().map(|spec| spec.key)
    }
}
