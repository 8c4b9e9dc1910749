use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::EntityKind;

/// Locally edited "my profile" record for one entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub kind: EntityKind,
    pub fields: Map<String, Value>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileDraft {
    pub fn new(kind: EntityKind, fields: Map<String, Value>) -> Self {
        Self {
            kind,
            fields,
            updated_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }
}

/// Storage port for profile drafts, one draft per entity kind.
pub trait ProfileStore: Send + Sync {
    fn get(&self, kind: EntityKind) -> Result<Option<ProfileDraft>, ProfileStoreError>;
    fn put(&self, draft: ProfileDraft) -> Result<(), ProfileStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}
