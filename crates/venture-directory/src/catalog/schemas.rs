//! Search, filter, sort and recommendation wiring for each entity kind.
//!
//! "newest" uses the founding/establishment year where a kind records one and
//! falls back to reverse insertion order otherwise.

use crate::directory::{
    DirectorySchema, Facet, FacetValue, Flag, Recommendation, SortDirection, SortOrder, SortSpec,
};

use super::entities::{
    GovernmentAgency, Incubator, IndustryExpert, Investor, Mentor, Startup, Teacher,
};

const COMPACT_PAGE: usize = 9;
const WIDE_PAGE: usize = 12;

const MENTOR_ACTIVE_SESSIONS: u32 = 50;
const EXPERT_ACTIVE_CONSULTATIONS: u32 = 100;
const TEACHER_ACTIVE_STUDENTS: u32 = 500;

fn with_list<'a>(mut fields: Vec<&'a str>, list: &'a [String]) -> Vec<&'a str> {
    fields.extend(list.iter().map(String::as_str));
    fields
}

pub static STARTUPS: DirectorySchema<Startup> = DirectorySchema {
    name: "startups",
    page_size: COMPACT_PAGE,
    search_fields: |startup| {
        with_list(
            vec![
                startup.name.as_str(),
                startup.tagline.as_str(),
                startup.description.as_str(),
                startup.industry.as_str(),
            ],
            &startup.tags,
        )
    },
    facets: &[
        Facet {
            name: "industry",
            value: |startup| FacetValue::Scalar(&startup.industry),
        },
        Facet {
            name: "stage",
            value: |startup| FacetValue::Scalar(&startup.stage),
        },
        Facet {
            name: "location",
            value: |startup| FacetValue::Scalar(&startup.location),
        },
        Facet {
            name: "tags",
            value: |startup| FacetValue::List(&startup.tags),
        },
    ],
    flags: &[
        Flag {
            name: "featured",
            value: |startup| startup.featured,
        },
        Flag {
            name: "verified",
            value: |startup| startup.verified,
        },
        Flag {
            name: "hiring",
            value: |startup| startup.hiring,
        },
    ],
    sorts: &[
        SortSpec {
            key: "rating",
            order: SortOrder::Numeric(|startup| startup.rating),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "name",
            order: SortOrder::Text(|startup| startup.name.as_str()),
            default_direction: SortDirection::Ascending,
        },
        SortSpec {
            key: "newest",
            order: SortOrder::Numeric(|startup| startup.founded_year.map(f64::from)),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "team_size",
            order: SortOrder::Numeric(|startup| startup.team_size.map(f64::from)),
            default_direction: SortDirection::Descending,
        },
    ],
    recommendation: Recommendation {
        eligible: |startup| startup.featured,
        weight: |startup| startup.rating,
    },
};

pub static INVESTORS: DirectorySchema<Investor> = DirectorySchema {
    name: "investors",
    page_size: COMPACT_PAGE,
    search_fields: |investor| {
        with_list(
            vec![
                investor.name.as_str(),
                investor.focus.as_str(),
                investor.description.as_str(),
            ],
            &investor.industries,
        )
    },
    facets: &[
        Facet {
            name: "investor_type",
            value: |investor| FacetValue::Scalar(&investor.investor_type),
        },
        Facet {
            name: "industries",
            value: |investor| FacetValue::List(&investor.industries),
        },
        Facet {
            name: "stages",
            value: |investor| FacetValue::List(&investor.stages),
        },
        Facet {
            name: "location",
            value: |investor| FacetValue::Scalar(&investor.location),
        },
    ],
    flags: &[
        Flag {
            name: "featured",
            value: |investor| investor.featured,
        },
        Flag {
            name: "verified",
            value: |investor| investor.verified,
        },
    ],
    sorts: &[
        SortSpec {
            key: "rating",
            order: SortOrder::Numeric(|investor| investor.rating),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "name",
            order: SortOrder::Text(|investor| investor.name.as_str()),
            default_direction: SortDirection::Ascending,
        },
        SortSpec {
            key: "newest",
            order: SortOrder::Insertion,
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "portfolio",
            order: SortOrder::Numeric(|investor| investor.portfolio_count.map(f64::from)),
            default_direction: SortDirection::Descending,
        },
    ],
    recommendation: Recommendation {
        eligible: |investor| investor.featured,
        weight: |investor| investor.rating,
    },
};

pub static MENTORS: DirectorySchema<Mentor> = DirectorySchema {
    name: "mentors",
    page_size: COMPACT_PAGE,
    search_fields: |mentor| {
        with_list(
            vec![
                mentor.name.as_str(),
                mentor.title.as_str(),
                mentor.company.as_str(),
                mentor.bio.as_str(),
            ],
            &mentor.expertise,
        )
    },
    facets: &[
        Facet {
            name: "expertise",
            value: |mentor| FacetValue::List(&mentor.expertise),
        },
        Facet {
            name: "languages",
            value: |mentor| FacetValue::List(&mentor.languages),
        },
        Facet {
            name: "location",
            value: |mentor| FacetValue::Scalar(&mentor.location),
        },
    ],
    flags: &[
        Flag {
            name: "available",
            value: |mentor| mentor.available,
        },
        Flag {
            name: "verified",
            value: |mentor| mentor.verified,
        },
    ],
    sorts: &[
        SortSpec {
            key: "rating",
            order: SortOrder::Numeric(|mentor| mentor.rating),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "name",
            order: SortOrder::Text(|mentor| mentor.name.as_str()),
            default_direction: SortDirection::Ascending,
        },
        SortSpec {
            key: "newest",
            order: SortOrder::Insertion,
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "sessions",
            order: SortOrder::Numeric(|mentor| mentor.sessions.map(f64::from)),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "price",
            order: SortOrder::Numeric(|mentor| mentor.hourly_rate),
            default_direction: SortDirection::Ascending,
        },
    ],
    recommendation: Recommendation {
        eligible: |mentor| mentor.sessions.unwrap_or(0) >= MENTOR_ACTIVE_SESSIONS,
        weight: |mentor| mentor.sessions.map(f64::from),
    },
};

pub static INCUBATORS: DirectorySchema<Incubator> = DirectorySchema {
    name: "incubators",
    page_size: WIDE_PAGE,
    search_fields: |incubator| {
        with_list(
            vec![
                incubator.name.as_str(),
                incubator.description.as_str(),
                incubator.program_type.as_str(),
            ],
            &incubator.focus_areas,
        )
    },
    facets: &[
        Facet {
            name: "program_type",
            value: |incubator| FacetValue::Scalar(&incubator.program_type),
        },
        Facet {
            name: "focus_areas",
            value: |incubator| FacetValue::List(&incubator.focus_areas),
        },
        Facet {
            name: "location",
            value: |incubator| FacetValue::Scalar(&incubator.location),
        },
    ],
    flags: &[
        Flag {
            name: "featured",
            value: |incubator| incubator.featured,
        },
        Flag {
            name: "funding_offered",
            value: |incubator| incubator.funding_offered,
        },
        Flag {
            name: "remote_friendly",
            value: |incubator| incubator.remote_friendly,
        },
    ],
    sorts: &[
        SortSpec {
            key: "rating",
            order: SortOrder::Numeric(|incubator| incubator.rating),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "name",
            order: SortOrder::Text(|incubator| incubator.name.as_str()),
            default_direction: SortDirection::Ascending,
        },
        SortSpec {
            key: "newest",
            order: SortOrder::Numeric(|incubator| incubator.established_year.map(f64::from)),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "startups_supported",
            order: SortOrder::Numeric(|incubator| incubator.startups_supported.map(f64::from)),
            default_direction: SortDirection::Descending,
        },
    ],
    recommendation: Recommendation {
        eligible: |incubator| incubator.featured,
        weight: |incubator| incubator.startups_supported.map(f64::from),
    },
};

pub static EXPERTS: DirectorySchema<IndustryExpert> = DirectorySchema {
    name: "experts",
    page_size: COMPACT_PAGE,
    search_fields: |expert| {
        let fields = with_list(
            vec![
                expert.name.as_str(),
                expert.title.as_str(),
                expert.organization.as_str(),
                expert.bio.as_str(),
            ],
            &expert.industries,
        );
        with_list(fields, &expert.expertise)
    },
    facets: &[
        Facet {
            name: "industries",
            value: |expert| FacetValue::List(&expert.industries),
        },
        Facet {
            name: "expertise",
            value: |expert| FacetValue::List(&expert.expertise),
        },
        Facet {
            name: "location",
            value: |expert| FacetValue::Scalar(&expert.location),
        },
    ],
    flags: &[
        Flag {
            name: "available",
            value: |expert| expert.available,
        },
        Flag {
            name: "verified",
            value: |expert| expert.verified,
        },
    ],
    sorts: &[
        SortSpec {
            key: "rating",
            order: SortOrder::Numeric(|expert| expert.rating),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "name",
            order: SortOrder::Text(|expert| expert.name.as_str()),
            default_direction: SortDirection::Ascending,
        },
        SortSpec {
            key: "newest",
            order: SortOrder::Insertion,
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "experience",
            order: SortOrder::Numeric(|expert| expert.years_experience.map(f64::from)),
            default_direction: SortDirection::Descending,
        },
    ],
    recommendation: Recommendation {
        eligible: |expert| expert.consultations.unwrap_or(0) >= EXPERT_ACTIVE_CONSULTATIONS,
        weight: |expert| expert.consultations.map(f64::from),
    },
};

pub static AGENCIES: DirectorySchema<GovernmentAgency> = DirectorySchema {
    name: "agencies",
    page_size: WIDE_PAGE,
    search_fields: |agency| {
        let fields = with_list(
            vec![agency.name.as_str(), agency.description.as_str()],
            &agency.sectors,
        );
        with_list(fields, &agency.programs)
    },
    facets: &[
        Facet {
            name: "agency_type",
            value: |agency| FacetValue::Scalar(&agency.agency_type),
        },
        Facet {
            name: "level",
            value: |agency| FacetValue::Scalar(&agency.level),
        },
        Facet {
            name: "sectors",
            value: |agency| FacetValue::List(&agency.sectors),
        },
        Facet {
            name: "location",
            value: |agency| FacetValue::Scalar(&agency.location),
        },
    ],
    flags: &[
        Flag {
            name: "featured",
            value: |agency| agency.featured,
        },
        Flag {
            name: "accepting_applications",
            value: |agency| agency.accepting_applications,
        },
    ],
    sorts: &[
        SortSpec {
            key: "rating",
            order: SortOrder::Numeric(|agency| agency.rating),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "name",
            order: SortOrder::Text(|agency| agency.name.as_str()),
            default_direction: SortDirection::Ascending,
        },
        SortSpec {
            key: "newest",
            order: SortOrder::Numeric(|agency| agency.established_year.map(f64::from)),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "programs",
            order: SortOrder::Numeric(|agency| agency.active_programs.map(f64::from)),
            default_direction: SortDirection::Descending,
        },
    ],
    recommendation: Recommendation {
        eligible: |agency| agency.featured,
        weight: |agency| agency.active_programs.map(f64::from),
    },
};

pub static TEACHERS: DirectorySchema<Teacher> = DirectorySchema {
    name: "teachers",
    page_size: COMPACT_PAGE,
    search_fields: |teacher| {
        with_list(
            vec![
                teacher.name.as_str(),
                teacher.subject.as_str(),
                teacher.institution.as_str(),
                teacher.bio.as_str(),
            ],
            &teacher.specializations,
        )
    },
    facets: &[
        Facet {
            name: "subject",
            value: |teacher| FacetValue::Scalar(&teacher.subject),
        },
        Facet {
            name: "specializations",
            value: |teacher| FacetValue::List(&teacher.specializations),
        },
        Facet {
            name: "location",
            value: |teacher| FacetValue::Scalar(&teacher.location),
        },
    ],
    flags: &[
        Flag {
            name: "online",
            value: |teacher| teacher.online,
        },
        Flag {
            name: "verified",
            value: |teacher| teacher.verified,
        },
    ],
    sorts: &[
        SortSpec {
            key: "rating",
            order: SortOrder::Numeric(|teacher| teacher.rating),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "name",
            order: SortOrder::Text(|teacher| teacher.name.as_str()),
            default_direction: SortDirection::Ascending,
        },
        SortSpec {
            key: "newest",
            order: SortOrder::Insertion,
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "students",
            order: SortOrder::Numeric(|teacher| teacher.students.map(f64::from)),
            default_direction: SortDirection::Descending,
        },
    ],
    recommendation: Recommendation {
        eligible: |teacher| teacher.students.unwrap_or(0) >= TEACHER_ACTIVE_STUDENTS,
        weight: |teacher| teacher.students.map(f64::from),
    },
};
