//! Profile completion scoring and the storage port for "my profile" drafts.

pub mod completion;
pub mod repository;

pub use completion::{
    is_filled, score, CompletionResult, CompletionSchema, FieldDescriptor, FieldStatus,
    SectionChecklist,
};
pub use repository::{ProfileDraft, ProfileStore, ProfileStoreError};
