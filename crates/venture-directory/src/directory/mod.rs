//! Generic directory query engine: free-text search, categorical filters, boolean
//! flags, stable sorting and clamped pagination over an in-memory collection.
//!
//! Each entity kind supplies a [`DirectorySchema`] describing which fields are
//! searched, filtered and sorted; the engine itself has no knowledge of concrete
//! record types.

pub mod engine;
pub mod query;
pub mod schema;
pub mod suggestions;

#[cfg(test)]
mod tests;

pub use engine::{facet_options, filter, paginate, recommend, run, sort, DirectoryPage, Match};
pub use query::{DirectoryQuery, SortDirection};
pub use schema::{
    DirectorySchema, Facet, FacetValue, Flag, Recommendation, SortOrder, SortSpec,
};
pub use suggestions::suggestions;
