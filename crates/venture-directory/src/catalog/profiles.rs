use crate::profile::{CompletionSchema, FieldDescriptor as Field};

pub static STARTUP_PROFILE: CompletionSchema = CompletionSchema {
    fields: &[
        Field::required("name", "Company name", "Basics"),
        Field::required("tagline", "Tagline", "Basics"),
        Field::required("industry", "Industry", "Basics"),
        Field::required("location", "Location", "Basics"),
        Field::required("description", "Description", "About"),
        Field::recommended("stage", "Funding stage", "About"),
        Field::recommended("founded_year", "Founded", "About"),
        Field::recommended("team_size", "Team size", "About"),
        Field::recommended("tags", "Tags", "About"),
        Field::recommended("website", "Website", "Links"),
        Field::recommended("logo_url", "Logo", "Media"),
        Field::recommended("faqs", "Frequently asked questions", "FAQ"),
    ],
};

pub static INVESTOR_PROFILE: CompletionSchema = CompletionSchema {
    fields: &[
        Field::required("name", "Name", "Basics"),
        Field::required("investor_type", "Investor type", "Basics"),
        Field::required("focus", "Investment focus", "Basics"),
        Field::required("location", "Location", "Basics"),
        Field::recommended("description", "About", "About"),
        Field::recommended("industries", "Industries", "Thesis"),
        Field::recommended("stages", "Stages", "Thesis"),
        Field::recommended("portfolio_count", "Portfolio size", "Thesis"),
        Field::recommended("ticket_size", "Ticket size", "Thesis"),
        Field::recommended("website", "Website", "Links"),
    ],
};

pub static MENTOR_PROFILE: CompletionSchema = CompletionSchema {
    fields: &[
        Field::required("name", "Name", "Basics"),
        Field::required("title", "Title", "Basics"),
        Field::required("expertise", "Expertise", "Basics"),
        Field::required("bio", "Bio", "About"),
        Field::recommended("company", "Company", "About"),
        Field::recommended("location", "Location", "About"),
        Field::recommended("languages", "Languages", "About"),
        Field::recommended("hourly_rate", "Hourly rate", "Sessions"),
        Field::recommended("availability", "Availability", "Sessions"),
        Field::recommended("linkedin", "LinkedIn", "Links"),
    ],
};

pub static INCUBATOR_PROFILE: CompletionSchema = CompletionSchema {
    fields: &[
        Field::required("name", "Program name", "Basics"),
        Field::required("program_type", "Program type", "Basics"),
        Field::required("location", "Location", "Basics"),
        Field::required("description", "Description", "About"),
        Field::recommended("focus_areas", "Focus areas", "Program"),
        Field::recommended("established_year", "Established", "Program"),
        Field::recommended("startups_supported", "Startups supported", "Program"),
        Field::recommended("application_deadline", "Application deadline", "Program"),
        Field::recommended("website", "Website", "Links"),
        Field::recommended("faqs", "Frequently asked questions", "FAQ"),
    ],
};

pub static EXPERT_PROFILE: CompletionSchema = CompletionSchema {
    fields: &[
        Field::required("name", "Name", "Basics"),
        Field::required("title", "Title", "Basics"),
        Field::required("industries", "Industries", "Basics"),
        Field::required("bio", "Bio", "About"),
        Field::recommended("organization", "Organization", "About"),
        Field::recommended("location", "Location", "About"),
        Field::recommended("expertise", "Expertise", "About"),
        Field::recommended("years_experience", "Years of experience", "About"),
        Field::recommended("certifications", "Certifications", "Credentials"),
        Field::recommended("linkedin", "LinkedIn", "Links"),
    ],
};

pub static AGENCY_PROFILE: CompletionSchema = CompletionSchema {
    fields: &[
        Field::required("name", "Agency name", "Basics"),
        Field::required("agency_type", "Agency type", "Basics"),
        Field::required("level", "Government level", "Basics"),
        Field::required("description", "Mandate", "About"),
        Field::recommended("location", "Location", "About"),
        Field::recommended("sectors", "Sectors", "Programs"),
        Field::recommended("programs", "Programs", "Programs"),
        Field::recommended("contact_email", "Contact e-mail", "Contact"),
        Field::recommended("website", "Website", "Contact"),
    ],
};

pub static TEACHER_PROFILE: CompletionSchema = CompletionSchema {
    fields: &[
        Field::required("name", "Name", "Basics"),
        Field::required("subject", "Subject", "Basics"),
        Field::required("institution", "Institution", "Basics"),
        Field::required("bio", "Bio", "About"),
        Field::recommended("location", "Location", "About"),
        Field::recommended("specializations", "Specializations", "Teaching"),
        Field::recommended("courses", "Courses", "Teaching"),
        Field::recommended("online", "Teaches online", "Teaching"),
        Field::recommended("website", "Website", "Links"),
    ],
};
