use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::catalog::{Catalog, EntityKind, Listing, SchemaSummary};
use crate::directory::{DirectoryPage, DirectoryQuery};
use crate::profile::{CompletionResult, ProfileDraft, ProfileStore, ProfileStoreError};

/// Service composing the immutable catalog with the profile draft store.
pub struct DirectoryService<S> {
    catalog: Arc<Catalog>,
    store: Arc<S>,
    recommendation_limit: usize,
}

/// A saved draft together with its completion checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub kind: EntityKind,
    pub draft: ProfileDraft,
    pub completion: CompletionResult,
    /// Whether the draft already shows up in directory results.
    pub listed: bool,
}

impl<S> DirectoryService<S>
where
    S: ProfileStore + 'static,
{
    pub fn new(catalog: Arc<Catalog>, store: Arc<S>, recommendation_limit: usize) -> Self {
        Self {
            catalog,
            store,
            recommendation_limit: recommendation_limit.max(1),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recommendation_limit(&self) -> usize {
        self.recommendation_limit
    }

    pub fn summary(&self, kind: EntityKind) -> SchemaSummary {
        Catalog::summary(kind)
    }

    /// One page of `kind`, with the saved draft spliced in when listable.
    pub fn browse(
        &self,
        kind: EntityKind,
        query: &DirectoryQuery,
    ) -> Result<DirectoryPage<Listing>, DirectoryServiceError> {
        let draft = self.store.get(kind)?;
        let page = self.catalog.browse(kind, query, draft.as_ref());
        debug!(
            %kind,
            search = %query.search_term,
            matches = page.total_matches,
            page = page.page,
            "directory query"
        );
        Ok(page)
    }

    /// Featured strip for `kind`; independent of any active query.
    pub fn recommended(&self, kind: EntityKind, limit: Option<usize>) -> Vec<Listing> {
        let limit = limit.unwrap_or(self.recommendation_limit);
        self.catalog.recommend(kind, limit)
    }

    pub fn suggestions(&self, kind: EntityKind, limit: Option<usize>) -> Vec<Listing> {
        let limit = limit.unwrap_or(self.recommendation_limit);
        self.catalog
            .suggestions(kind, limit, &mut rand::thread_rng())
    }

    pub fn facet_options(
        &self,
        kind: EntityKind,
        facet: &str,
    ) -> Result<Vec<String>, DirectoryServiceError> {
        self.catalog
            .facet_options(kind, facet)
            .ok_or_else(|| DirectoryServiceError::UnknownFacet {
                kind,
                facet: facet.to_string(),
            })
    }

    pub fn record(&self, kind: EntityKind, id: &str) -> Result<Listing, DirectoryServiceError> {
        let draft = self.store.get(kind)?;
        self.catalog
            .record(kind, id, draft.as_ref())
            .ok_or_else(|| DirectoryServiceError::RecordNotFound {
                kind,
                id: id.to_string(),
            })
    }

    pub fn profile(&self, kind: EntityKind) -> Result<ProfileView, DirectoryServiceError> {
        let draft = self
            .store
            .get(kind)?
            .ok_or(DirectoryServiceError::ProfileNotFound(kind))?;
        Ok(view(draft))
    }

    /// Replaces the draft for `kind` with `fields`, scoring the result.
    pub fn save_profile(
        &self,
        kind: EntityKind,
        fields: Value,
    ) -> Result<ProfileView, DirectoryServiceError> {
        let Value::Object(fields) = fields else {
            return Err(DirectoryServiceError::InvalidDraft(
                "profile must be a JSON object".to_string(),
            ));
        };
        validate_draft_fields(&fields)?;

        let draft = ProfileDraft::new(kind, fields);
        self.store.put(draft.clone())?;

        let view = view(draft);
        info!(
            %kind,
            percent = view.completion.percent,
            complete = view.completion.is_complete,
            listed = view.listed,
            "profile draft saved"
        );
        Ok(view)
    }
}

fn view(draft: ProfileDraft) -> ProfileView {
    let kind = draft.kind;
    let completion = kind.completion_schema().score(&draft.fields);
    let listed = Catalog::is_listable(&draft);
    ProfileView {
        kind,
        draft,
        completion,
        listed,
    }
}

fn validate_draft_fields(fields: &Map<String, Value>) -> Result<(), DirectoryServiceError> {
    match fields.get("id") {
        None | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(DirectoryServiceError::InvalidDraft(
            "field 'id' must be a string".to_string(),
        )),
    }
}

/// Error raised by the directory service.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryServiceError {
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
    #[error("{kind} has no facet '{facet}'")]
    UnknownFacet { kind: EntityKind, facet: String },
    #[error("no {kind} record with id '{id}'")]
    RecordNotFound { kind: EntityKind, id: String },
    #[error("no {0} profile has been saved")]
    ProfileNotFound(EntityKind),
    #[error("invalid profile draft: {0}")]
    InvalidDraft(String),
}

impl DirectoryServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DirectoryServiceError::UnknownFacet { .. }
            | DirectoryServiceError::RecordNotFound { .. }
            | DirectoryServiceError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            DirectoryServiceError::InvalidDraft(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}
