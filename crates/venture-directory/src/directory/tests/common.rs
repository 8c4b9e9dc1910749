use crate::directory::query::SortDirection;
use crate::directory::schema::{
    DirectorySchema, Facet, FacetValue, Flag, Recommendation, SortOrder, SortSpec,
};

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Sample {
    pub(super) id: String,
    pub(super) name: String,
    pub(super) description: String,
    pub(super) city: String,
    pub(super) tags: Vec<String>,
    pub(super) rating: Option<f64>,
    pub(super) featured: bool,
    pub(super) verified: bool,
}

pub(super) static SAMPLE_SCHEMA: DirectorySchema<Sample> = DirectorySchema {
    name: "samples",
    page_size: 9,
    search_fields: |sample| {
        let mut fields = vec![sample.name.as_str(), sample.description.as_str()];
        fields.extend(sample.tags.iter().map(String::as_str));
        fields
    },
    facets: &[
        Facet {
            name: "city",
            value: |sample| FacetValue::Scalar(&sample.city),
        },
        Facet {
            name: "tags",
            value: |sample| FacetValue::List(&sample.tags),
        },
    ],
    flags: &[
        Flag {
            name: "featured",
            value: |sample| sample.featured,
        },
        Flag {
            name: "verified",
            value: |sample| sample.verified,
        },
    ],
    sorts: &[
        SortSpec {
            key: "rating",
            order: SortOrder::Numeric(|sample| sample.rating),
            default_direction: SortDirection::Descending,
        },
        SortSpec {
            key: "name",
            order: SortOrder::Text(|sample| sample.name.as_str()),
            default_direction: SortDirection::Ascending,
        },
        SortSpec {
            key: "newest",
            order: SortOrder::Insertion,
            default_direction: SortDirection::Descending,
        },
    ],
    recommendation: Recommendation {
        eligible: |sample| sample.featured,
        weight: |sample| sample.rating,
    },
};

pub(super) fn sample(id: &str, name: &str, city: &str, tags: &[&str], rating: Option<f64>) -> Sample {
    Sample {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} builds products in {city}"),
        city: city.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        rating,
        featured: false,
        verified: false,
    }
}

pub(super) fn roster() -> Vec<Sample> {
    let mut records = vec![
        sample("s1", "Harbor Labs", "Lagos", &["Fintech", "Payments"], Some(4.2)),
        sample("s2", "apex robotics", "Nairobi", &["Robotics"], Some(4.8)),
        sample("s3", "Cedar Health", "Lagos", &["Healthtech"], None),
        sample("s4", "Beacon Grid", "Accra", &["Energy", "Climate"], Some(4.8)),
        sample("s5", "Delta Farms", "Nairobi", &["Agritech", "Climate"], Some(3.9)),
        sample("s6", "Ember Learning", "Kigali", &["Edtech"], Some(4.5)),
    ];
    records[1].verified = true;
    records[3].verified = true;
    records[3].featured = true;
    records[5].featured = true;
    records[0].featured = true;
    records
}

pub(super) fn numbered(count: usize) -> Vec<Sample> {
    (0..count)
        .map(|index| sample(&format!("n{index}"), &format!("Venture {index:02}"), "Cairo", &[], None))
        .collect()
}

pub(super) fn ids<'a>(records: impl IntoIterator<Item = &'a Sample>) -> Vec<&'a str> {
    records.into_iter().map(|record| record.id.as_str()).collect()
}
