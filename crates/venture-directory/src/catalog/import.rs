//! Loading directory contents: bundled JSON seeds, optionally replaced per kind by
//! CSV exports dropped into a catalog directory.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{Catalog, CatalogError, DirectoryEntity};

const STARTUPS_SEED: &str = include_str!("../../data/startups.json");
const INVESTORS_SEED: &str = include_str!("../../data/investors.json");
const MENTORS_SEED: &str = include_str!("../../data/mentors.json");
const INCUBATORS_SEED: &str = include_str!("../../data/incubators.json");
const EXPERTS_SEED: &str = include_str!("../../data/experts.json");
const AGENCIES_SEED: &str = include_str!("../../data/agencies.json");
const TEACHERS_SEED: &str = include_str!("../../data/teachers.json");

impl Catalog {
    /// Directory contents shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self {
            startups: parse_seed(STARTUPS_SEED)?,
            investors: parse_seed(INVESTORS_SEED)?,
            mentors: parse_seed(MENTORS_SEED)?,
            incubators: parse_seed(INCUBATORS_SEED)?,
            experts: parse_seed(EXPERTS_SEED)?,
            agencies: parse_seed(AGENCIES_SEED)?,
            teachers: parse_seed(TEACHERS_SEED)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Bundled contents, with any `<kind>.csv` found in `dir` replacing that kind.
    pub fn load(dir: Option<&Path>) -> Result<Self, CatalogError> {
        let mut catalog = Self::bundled()?;
        let Some(dir) = dir else {
            return Ok(catalog);
        };

        replace_from_dir(&mut catalog.startups, dir)?;
        replace_from_dir(&mut catalog.investors, dir)?;
        replace_from_dir(&mut catalog.mentors, dir)?;
        replace_from_dir(&mut catalog.incubators, dir)?;
        replace_from_dir(&mut catalog.experts, dir)?;
        replace_from_dir(&mut catalog.agencies, dir)?;
        replace_from_dir(&mut catalog.teachers, dir)?;

        catalog.validate()?;
        Ok(catalog)
    }
}

fn parse_seed<T: DirectoryEntity>(raw: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Seed {
        kind: T::KIND,
        source,
    })
}

fn replace_from_dir<T: DirectoryEntity>(records: &mut Vec<T>, dir: &Path) -> Result<(), CatalogError> {
    let kind = T::KIND;
    let path = dir.join(format!("{}.csv", kind.slug()));
    if !path.is_file() {
        debug!(%kind, path = %path.display(), "no CSV override, keeping bundled data");
        return Ok(());
    }

    let file = File::open(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    *records = read_csv(file).map_err(|source| CatalogError::Csv {
        kind,
        path: path.clone(),
        source,
    })?;

    info!(%kind, count = records.len(), path = %path.display(), "loaded directory CSV");
    Ok(())
}

/// Parses CSV rows with a header line into records. List columns hold
/// `;`-separated values.
pub fn read_csv<T, R>(reader: R) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    reader.deserialize().collect()
}
