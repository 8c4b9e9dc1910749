use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use venture_directory::config::DirectoryConfig;
use venture_directory::error::AppError;
use venture_directory::profile::{ProfileDraft, ProfileStore, ProfileStoreError};
use venture_directory::{Catalog, DirectoryService, EntityKind};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps one "my profile" draft per directory for the lifetime of the process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileStore {
    drafts: Arc<Mutex<HashMap<EntityKind, ProfileDraft>>>,
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, kind: EntityKind) -> Result<Option<ProfileDraft>, ProfileStoreError> {
        let guard = self.drafts.lock().map_err(poisoned)?;
        Ok(guard.get(&kind).cloned())
    }

    fn put(&self, draft: ProfileDraft) -> Result<(), ProfileStoreError> {
        let mut guard = self.drafts.lock().map_err(poisoned)?;
        guard.insert(draft.kind, draft);
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> ProfileStoreError {
    ProfileStoreError::Unavailable("profile mutex poisoned".to_string())
}

pub(crate) fn directory_service(
    config: &DirectoryConfig,
) -> Result<Arc<DirectoryService<InMemoryProfileStore>>, AppError> {
    let catalog = Catalog::load(config.catalog_dir.as_deref())?;
    Ok(Arc::new(DirectoryService::new(
        Arc::new(catalog),
        Arc::new(InMemoryProfileStore::default()),
        config.recommendation_limit,
    )))
}

/// Parses `name=value1,value2` into a facet name and its selected values.
pub(crate) fn parse_filter(raw: &str) -> Result<(String, Vec<String>), String> {
    let (name, values) = raw
        .split_once('=')
        .ok_or_else(|| format!("filter '{raw}' must look like name=value1,value2"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("filter '{raw}' is missing a facet name"));
    }

    let values = values
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    Ok((name.to_string(), values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[test]
    fn parse_filter_splits_values() {
        let (name, values) = parse_filter("stage= Seed, Series A ,").expect("parses");
        assert_eq!(name, "stage");
        assert_eq!(values, vec!["Seed", "Series A"]);
    }

    #[test]
    fn parse_filter_requires_a_name() {
        assert!(parse_filter("=Seed").is_err());
        assert!(parse_filter("Seed").is_err());
    }

    #[test]
    fn store_keeps_latest_draft_per_kind() {
        let store = InMemoryProfileStore::default();
        assert!(store.get(EntityKind::Mentors).expect("get").is_none());

        let mut fields = Map::new();
        fields.insert("name".to_string(), "First".into());
        store
            .put(ProfileDraft::new(EntityKind::Mentors, fields.clone()))
            .expect("put");
        fields.insert("name".to_string(), "Second".into());
        store
            .put(ProfileDraft::new(EntityKind::Mentors, fields))
            .expect("put");

        let draft = store
            .get(EntityKind::Mentors)
            .expect("get")
            .expect("draft saved");
        assert_eq!(draft.fields["name"], "Second");
        assert!(store.get(EntityKind::Experts).expect("get").is_none());
    }
}
