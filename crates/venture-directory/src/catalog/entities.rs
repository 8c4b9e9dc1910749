use serde::{Deserialize, Serialize};

use super::fields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Startup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub founded_year: Option<u16>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default, deserialize_with = "fields::list")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub hiring: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investor {
    pub id: String,
    pub name: String,
    /// Venture capital, angel, corporate, ...
    #[serde(default)]
    pub investor_type: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "fields::list")]
    pub industries: Vec<String>,
    #[serde(default, deserialize_with = "fields::list")]
    pub stages: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub portfolio_count: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "fields::list")]
    pub expertise: Vec<String>,
    #[serde(default, deserialize_with = "fields::list")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub sessions: Option<u32>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incubator {
    pub id: String,
    pub name: String,
    /// Incubator, accelerator, venture studio, ...
    #[serde(default)]
    pub program_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "fields::list")]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub established_year: Option<u16>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub startups_supported: Option<u32>,
    #[serde(default)]
    pub funding_offered: bool,
    #[serde(default)]
    pub remote_friendly: bool,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryExpert {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "fields::list")]
    pub industries: Vec<String>,
    #[serde(default, deserialize_with = "fields::list")]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub consultations: Option<u32>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernmentAgency {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub agency_type: String,
    /// Federal, state, municipal.
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "fields::list")]
    pub sectors: Vec<String>,
    #[serde(default, deserialize_with = "fields::list")]
    pub programs: Vec<String>,
    #[serde(default)]
    pub established_year: Option<u16>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub active_programs: Option<u32>,
    #[serde(default)]
    pub accepting_applications: bool,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "fields::list")]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub students: Option<u32>,
    #[serde(default)]
    pub courses: Option<u32>,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub verified: bool,
}
