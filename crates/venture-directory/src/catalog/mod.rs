//! Entity records for every directory kind, their query/completion schemas, and
//! the in-memory [`Catalog`] that the service layer browses.

mod entities;
mod fields;
pub mod import;
mod profiles;
pub mod schemas;

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::directory::{self, DirectoryPage, DirectoryQuery, DirectorySchema};
use crate::profile::{CompletionSchema, ProfileDraft};

pub use entities::{
    GovernmentAgency, Incubator, IndustryExpert, Investor, Mentor, Startup, Teacher,
};

/// Directory kinds, addressed by their plural slug in URLs and on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Startups,
    Investors,
    Mentors,
    Incubators,
    Experts,
    Agencies,
    Teachers,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Startups,
        EntityKind::Investors,
        EntityKind::Mentors,
        EntityKind::Incubators,
        EntityKind::Experts,
        EntityKind::Agencies,
        EntityKind::Teachers,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Startups => "startups",
            Self::Investors => "investors",
            Self::Mentors => "mentors",
            Self::Incubators => "incubators",
            Self::Experts => "experts",
            Self::Agencies => "agencies",
            Self::Teachers => "teachers",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Startups => "Startups",
            Self::Investors => "Investors",
            Self::Mentors => "Mentors",
            Self::Incubators => "Incubators & Accelerators",
            Self::Experts => "Industry Experts",
            Self::Agencies => "Government Agencies",
            Self::Teachers => "Teachers",
        }
    }

    pub fn completion_schema(self) -> &'static CompletionSchema {
        match self {
            Self::Startups => &profiles::STARTUP_PROFILE,
            Self::Investors => &profiles::INVESTOR_PROFILE,
            Self::Mentors => &profiles::MENTOR_PROFILE,
            Self::Incubators => &profiles::INCUBATOR_PROFILE,
            Self::Experts => &profiles::EXPERT_PROFILE,
            Self::Agencies => &profiles::AGENCY_PROFILE,
            Self::Teachers => &profiles::TEACHER_PROFILE,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == normalized)
            .ok_or_else(|| UnknownEntityKind(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown directory '{0}'")]
pub struct UnknownEntityKind(pub String);

/// A record from any directory, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing {
    Startup(Startup),
    Investor(Investor),
    Mentor(Mentor),
    Incubator(Incubator),
    Expert(IndustryExpert),
    Agency(GovernmentAgency),
    Teacher(Teacher),
}

impl Listing {
    pub fn kind(&self) -> EntityKind {
        match self {
            Listing::Startup(_) => EntityKind::Startups,
            Listing::Investor(_) => EntityKind::Investors,
            Listing::Mentor(_) => EntityKind::Mentors,
            Listing::Incubator(_) => EntityKind::Incubators,
            Listing::Expert(_) => EntityKind::Experts,
            Listing::Agency(_) => EntityKind::Agencies,
            Listing::Teacher(_) => EntityKind::Teachers,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Listing::Startup(record) => &record.id,
            Listing::Investor(record) => &record.id,
            Listing::Mentor(record) => &record.id,
            Listing::Incubator(record) => &record.id,
            Listing::Expert(record) => &record.id,
            Listing::Agency(record) => &record.id,
            Listing::Teacher(record) => &record.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Listing::Startup(record) => &record.name,
            Listing::Investor(record) => &record.name,
            Listing::Mentor(record) => &record.name,
            Listing::Incubator(record) => &record.name,
            Listing::Expert(record) => &record.name,
            Listing::Agency(record) => &record.name,
            Listing::Teacher(record) => &record.name,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Listing::Startup(record) => &record.location,
            Listing::Investor(record) => &record.location,
            Listing::Mentor(record) => &record.location,
            Listing::Incubator(record) => &record.location,
            Listing::Expert(record) => &record.location,
            Listing::Agency(record) => &record.location,
            Listing::Teacher(record) => &record.location,
        }
    }

    pub fn rating(&self) -> Option<f64> {
        match self {
            Listing::Startup(record) => record.rating,
            Listing::Investor(record) => record.rating,
            Listing::Mentor(record) => record.rating,
            Listing::Incubator(record) => record.rating,
            Listing::Expert(record) => record.rating,
            Listing::Agency(record) => record.rating,
            Listing::Teacher(record) => record.rating,
        }
    }

    /// Short line shown under the name on a directory card.
    pub fn headline(&self) -> String {
        match self {
            Listing::Startup(record) => format!("{} · {}", record.industry, record.stage),
            Listing::Investor(record) => format!("{} · {}", record.investor_type, record.focus),
            Listing::Mentor(record) => format!("{} at {}", record.title, record.company),
            Listing::Incubator(record) => record.program_type.clone(),
            Listing::Expert(record) => format!("{}, {}", record.title, record.organization),
            Listing::Agency(record) => format!("{} · {}", record.level, record.agency_type),
            Listing::Teacher(record) => format!("{} at {}", record.subject, record.institution),
        }
    }
}

/// Binds a record type to its kind, identity and query schema.
pub trait DirectoryEntity: Clone + Serialize + DeserializeOwned + Into<Listing> + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn schema() -> &'static DirectorySchema<Self>;
}

macro_rules! directory_entity {
    ($record:ty, $kind:ident, $variant:ident, $schema:ident) => {
        impl DirectoryEntity for $record {
            const KIND: EntityKind = EntityKind::$kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn schema() -> &'static DirectorySchema<Self> {
                &schemas::$schema
            }
        }

        impl From<$record> for Listing {
            fn from(record: $record) -> Self {
                Listing::$variant(record)
            }
        }
    };
}

directory_entity!(Startup, Startups, Startup, STARTUPS);
directory_entity!(Investor, Investors, Investor, INVESTORS);
directory_entity!(Mentor, Mentors, Mentor, MENTORS);
directory_entity!(Incubator, Incubators, Incubator, INCUBATORS);
directory_entity!(IndustryExpert, Experts, Expert, EXPERTS);
directory_entity!(GovernmentAgency, Agencies, Agency, AGENCIES);
directory_entity!(Teacher, Teachers, Teacher, TEACHERS);

/// Expands `$body` once per kind with `$records` bound to that kind's slice.
macro_rules! with_records {
    ($catalog:expr, $kind:expr, |$records:ident| $body:expr) => {
        match $kind {
            EntityKind::Startups => {
                let $records = &$catalog.startups[..];
                $body
            }
            EntityKind::Investors => {
                let $records = &$catalog.investors[..];
                $body
            }
            EntityKind::Mentors => {
                let $records = &$catalog.mentors[..];
                $body
            }
            EntityKind::Incubators => {
                let $records = &$catalog.incubators[..];
                $body
            }
            EntityKind::Experts => {
                let $records = &$catalog.experts[..];
                $body
            }
            EntityKind::Agencies => {
                let $records = &$catalog.agencies[..];
                $body
            }
            EntityKind::Teachers => {
                let $records = &$catalog.teachers[..];
                $body
            }
        }
    };
}

/// Immutable directory contents, one collection per kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub startups: Vec<Startup>,
    pub investors: Vec<Investor>,
    pub mentors: Vec<Mentor>,
    pub incubators: Vec<Incubator>,
    pub experts: Vec<IndustryExpert>,
    pub agencies: Vec<GovernmentAgency>,
    pub teachers: Vec<Teacher>,
}

/// Query capabilities of one kind, for building filter pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaSummary {
    pub kind: EntityKind,
    pub label: &'static str,
    pub page_size: usize,
    pub facets: Vec<&'static str>,
    pub flags: Vec<&'static str>,
    pub sort_keys: Vec<&'static str>,
}

impl Catalog {
    pub fn len(&self, kind: EntityKind) -> usize {
        with_records!(self, kind, |records| records.len())
    }

    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.into_iter().all(|kind| self.len(kind) == 0)
    }

    pub fn summary(kind: EntityKind) -> SchemaSummary {
        fn describe<T: DirectoryEntity>(kind: EntityKind) -> SchemaSummary {
            let schema = T::schema();
            SchemaSummary {
                kind,
                label: kind.label(),
                page_size: schema.page_size,
                facets: schema.facet_names().collect(),
                flags: schema.flag_names().collect(),
                sort_keys: schema.sort_keys().collect(),
            }
        }

        match kind {
            EntityKind::Startups => describe::<Startup>(kind),
            EntityKind::Investors => describe::<Investor>(kind),
            EntityKind::Mentors => describe::<Mentor>(kind),
            EntityKind::Incubators => describe::<Incubator>(kind),
            EntityKind::Experts => describe::<IndustryExpert>(kind),
            EntityKind::Agencies => describe::<GovernmentAgency>(kind),
            EntityKind::Teachers => describe::<Teacher>(kind),
        }
    }

    /// Runs `query` against `kind`, with `draft` spliced in when it forms a
    /// complete record of that kind.
    pub fn browse(
        &self,
        kind: EntityKind,
        query: &DirectoryQuery,
        draft: Option<&ProfileDraft>,
    ) -> DirectoryPage<Listing> {
        with_records!(self, kind, |records| browse_records(records, query, draft))
    }

    pub fn recommend(&self, kind: EntityKind, limit: usize) -> Vec<Listing> {
        with_records!(self, kind, |records| to_listings(directory::recommend(
            schema_of(records),
            records,
            limit
        )))
    }

    pub fn suggestions<R>(&self, kind: EntityKind, limit: usize, rng: &mut R) -> Vec<Listing>
    where
        R: Rng + ?Sized,
    {
        with_records!(self, kind, |records| to_listings(directory::suggestions(
            schema_of(records),
            records,
            limit,
            rng
        )))
    }

    /// Distinct values of `facet`, or `None` when the kind does not declare it.
    pub fn facet_options(&self, kind: EntityKind, facet: &str) -> Option<Vec<String>> {
        with_records!(self, kind, |records| schema_of(records)
            .facet(facet)
            .map(|facet| directory::facet_options(facet, records)))
    }

    pub fn record(
        &self,
        kind: EntityKind,
        id: &str,
        draft: Option<&ProfileDraft>,
    ) -> Option<Listing> {
        with_records!(self, kind, |records| overlay(records, draft)
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .map(Into::into))
    }

    /// Whether `draft` deserializes into a full record of its kind.
    pub fn is_listable(draft: &ProfileDraft) -> bool {
        fn parses<T: DirectoryEntity>(draft: &ProfileDraft) -> bool {
            parse_draft::<T>(draft).is_ok()
        }

        match draft.kind {
            EntityKind::Startups => parses::<Startup>(draft),
            EntityKind::Investors => parses::<Investor>(draft),
            EntityKind::Mentors => parses::<Mentor>(draft),
            EntityKind::Incubators => parses::<Incubator>(draft),
            EntityKind::Experts => parses::<IndustryExpert>(draft),
            EntityKind::Agencies => parses::<GovernmentAgency>(draft),
            EntityKind::Teachers => parses::<Teacher>(draft),
        }
    }

    /// Rejects collections that reuse an id within one kind.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for kind in EntityKind::ALL {
            with_records!(self, kind, |records| ensure_unique_ids(kind, records))?;
        }
        Ok(())
    }
}

fn schema_of<T: DirectoryEntity>(_records: &[T]) -> &'static DirectorySchema<T> {
    T::schema()
}

fn to_listings<T: DirectoryEntity>(records: Vec<&T>) -> Vec<Listing> {
    records.into_iter().cloned().map(Into::into).collect()
}

fn browse_records<T: DirectoryEntity>(
    records: &[T],
    query: &DirectoryQuery,
    draft: Option<&ProfileDraft>,
) -> DirectoryPage<Listing> {
    let records = overlay(records, draft);
    directory::run(T::schema(), &records, query).map(|record| record.clone().into())
}

fn parse_draft<T: DirectoryEntity>(draft: &ProfileDraft) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(draft.fields.clone()))
}

fn overlay<'a, T: DirectoryEntity>(
    records: &'a [T],
    draft: Option<&ProfileDraft>,
) -> Cow<'a, [T]> {
    let Some(draft) = draft.filter(|draft| draft.kind == T::KIND) else {
        return Cow::Borrowed(records);
    };

    match parse_draft::<T>(draft) {
        Ok(mine) => {
            let mut spliced = records.to_vec();
            match spliced.iter().position(|record| record.id() == mine.id()) {
                Some(index) => spliced[index] = mine,
                None => spliced.insert(0, mine),
            }
            Cow::Owned(spliced)
        }
        Err(err) => {
            let kind = T::KIND;
            debug!(%kind, error = %err, "profile draft not listable yet");
            Cow::Borrowed(records)
        }
    }
}

fn ensure_unique_ids<T: DirectoryEntity>(
    kind: EntityKind,
    records: &[T],
) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("bundled {kind} data is malformed: {source}")]
    Seed {
        kind: EntityKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {kind} CSV at {}: {source}", .path.display())]
    Csv {
        kind: EntityKind,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: String },
}
