//! Directory listings for the startup ecosystem: a generic query engine shared by
//! every entity kind, profile completion scoring, and the service/router glue that
//! exposes both over HTTP.

pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod profile;
pub mod router;
pub mod service;
pub mod telemetry;

pub use catalog::{Catalog, CatalogError, EntityKind, Listing, SchemaSummary};
pub use config::AppConfig;
pub use directory::{DirectoryPage, DirectoryQuery, SortDirection};
pub use error::AppError;
pub use profile::{
    CompletionResult, CompletionSchema, ProfileDraft, ProfileStore, ProfileStoreError,
};
pub use router::directory_router;
pub use service::{DirectoryService, DirectoryServiceError, ProfileView};
