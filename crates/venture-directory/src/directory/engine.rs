use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use super::query::{DirectoryQuery, SortDirection};
use super::schema::{DirectorySchema, Facet, FacetValue, Flag, SortOrder};

/// A record that passed the filters, tagged with its position in the source
/// collection so ties and insertion-order sorts stay reproducible.
#[derive(Debug)]
pub struct Match<'a, T> {
    pub position: usize,
    pub record: &'a T,
}

impl<T> Clone for Match<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Match<'_, T> {}

/// One page of results plus the metadata a grid needs to render its pager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryPage<U> {
    pub items: Vec<U>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<U> DirectoryPage<U> {
    pub fn map<V>(self, f: impl FnMut(U) -> V) -> DirectoryPage<V> {
        DirectoryPage {
            items: self.items.into_iter().map(f).collect(),
            total_matches: self.total_matches,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Filter, sort and paginate `records` for `query`.
pub fn run<'a, T: 'static>(
    schema: &DirectorySchema<T>,
    records: &'a [T],
    query: &DirectoryQuery,
) -> DirectoryPage<&'a T> {
    let matches = filter(schema, records, query);
    let ordered = sort(
        schema,
        matches,
        query.sort_key.as_deref(),
        query.sort_direction,
    );
    paginate(ordered, query.page, schema.page_size).map(|found| found.record)
}

pub fn filter<'a, T: 'static>(
    schema: &DirectorySchema<T>,
    records: &'a [T],
    query: &DirectoryQuery,
) -> Vec<Match<'a, T>> {
    let needle = query.search_term.to_lowercase();

    let mut facets: Vec<(&Facet<T>, &BTreeSet<String>)> = Vec::new();
    for (name, selection) in &query.categorical_filters {
        if selection.is_empty() {
            continue;
        }
        match schema.facet(name) {
            Some(facet) => facets.push((facet, selection)),
            None => debug!(directory = schema.name, filter = %name, "ignoring undeclared filter"),
        }
    }

    let mut flags: Vec<&Flag<T>> = Vec::new();
    for (name, enabled) in &query.boolean_flags {
        if !enabled {
            continue;
        }
        match schema.flag(name) {
            Some(flag) => flags.push(flag),
            None => debug!(directory = schema.name, flag = %name, "ignoring undeclared flag"),
        }
    }

    records
        .iter()
        .enumerate()
        .filter(|&(_, record)| {
            matches_search(schema, record, &needle)
                && facets
                    .iter()
                    .all(|(facet, selection)| matches_facet((facet.value)(record), selection))
                && flags.iter().all(|flag| (flag.value)(record))
        })
        .map(|(position, record)| Match { position, record })
        .collect()
}

fn matches_search<T: 'static>(schema: &DirectorySchema<T>, record: &T, needle: &str) -> bool {
    needle.is_empty()
        || (schema.search_fields)(record)
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
}

fn matches_facet(value: FacetValue<'_>, selection: &BTreeSet<String>) -> bool {
    value
        .values()
        .into_iter()
        .any(|candidate| selection.contains(candidate))
}

/// Stable sort under `key`. Unknown or absent keys keep insertion order.
pub fn sort<'a, T: 'static>(
    schema: &DirectorySchema<T>,
    mut matches: Vec<Match<'a, T>>,
    key: Option<&str>,
    direction: Option<SortDirection>,
) -> Vec<Match<'a, T>> {
    let Some(spec) = key.and_then(|key| schema.sort(key)) else {
        if let Some(key) = key {
            debug!(directory = schema.name, sort = key, "unknown sort key, keeping insertion order");
        }
        matches.sort_by_key(|found| found.position);
        return matches;
    };

    let direction = direction.unwrap_or(spec.default_direction);
    matches.sort_by(|left, right| {
        let ordering = compare(&spec.order, left, right);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    matches
}

fn compare<T>(order: &SortOrder<T>, left: &Match<'_, T>, right: &Match<'_, T>) -> Ordering {
    match order {
        SortOrder::Numeric(value) => {
            sort_number(value(left.record)).total_cmp(&sort_number(value(right.record)))
        }
        SortOrder::Text(value) => {
            let left = value(left.record);
            let right = value(right.record);
            left.to_lowercase()
                .cmp(&right.to_lowercase())
                .then_with(|| left.cmp(right))
        }
        SortOrder::Insertion => left.position.cmp(&right.position),
    }
}

/// Missing and non-finite numbers rank as `0`; adding `0.0` folds `-0.0` into it.
fn sort_number(value: Option<f64>) -> f64 {
    value.filter(|number| number.is_finite()).unwrap_or(0.0) + 0.0
}

/// Slice `ordered` to the requested page, clamping the page into range.
pub fn paginate<U>(ordered: Vec<U>, page: i64, page_size: usize) -> DirectoryPage<U> {
    let page_size = page_size.max(1);
    let total_matches = ordered.len();
    let total_pages = total_matches.div_ceil(page_size).max(1);
    let page = usize::try_from(page.max(1))
        .unwrap_or(usize::MAX)
        .min(total_pages);

    let items = ordered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    DirectoryPage {
        items,
        total_matches,
        total_pages,
        page,
        page_size,
    }
}

/// Highest-weighted eligible records across the whole collection, ignoring any
/// active query.
pub fn recommend<'a, T: 'static>(
    schema: &DirectorySchema<T>,
    records: &'a [T],
    limit: usize,
) -> Vec<&'a T> {
    let rule = &schema.recommendation;
    let mut eligible: Vec<&T> = records.iter().filter(|record| (rule.eligible)(record)).collect();
    eligible.sort_by(|left, right| {
        sort_number((rule.weight)(right)).total_cmp(&sort_number((rule.weight)(left)))
    });
    eligible.truncate(limit);
    eligible
}

/// Distinct values a facet takes across `records`, in first-seen order.
pub fn facet_options<T>(facet: &Facet<T>, records: &[T]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut options = Vec::new();
    for record in records {
        for value in (facet.value)(record).values() {
            if seen.insert(value) {
                options.push(value.to_string());
            }
        }
    }
    options
}
