use serde::Serialize;
use serde_json::{Map, Value};

/// Field considered when scoring how complete a profile is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub field_id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub section: &'static str,
}

impl FieldDescriptor {
    pub const fn required(field_id: &'static str, label: &'static str, section: &'static str) -> Self {
        Self {
            field_id,
            label,
            required: true,
            section,
        }
    }

    pub const fn recommended(
        field_id: &'static str,
        label: &'static str,
        section: &'static str,
    ) -> Self {
        Self {
            field_id,
            label,
            required: false,
            section,
        }
    }
}

/// Fixed, ordered field list for one entity kind.
#[derive(Debug, Clone, Copy)]
pub struct CompletionSchema {
    pub fields: &'static [FieldDescriptor],
}

impl CompletionSchema {
    pub const fn new(fields: &'static [FieldDescriptor]) -> Self {
        Self { fields }
    }

    pub fn score(&self, record: &Map<String, Value>) -> CompletionResult {
        score(record, self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldStatus {
    pub field_id: &'static str,
    pub label: &'static str,
    pub section: &'static str,
    pub required: bool,
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    pub fields: Vec<FieldStatus>,
    pub required_filled: usize,
    pub required_total: usize,
    pub recommended_filled: usize,
    pub recommended_total: usize,
    pub percent: u8,
    pub is_complete: bool,
}

/// Checklist entries grouped under one dialog section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionChecklist<'a> {
    pub section: &'static str,
    pub fields: Vec<&'a FieldStatus>,
}

impl CompletionResult {
    pub fn missing_required(&self) -> Vec<&FieldStatus> {
        self.fields
            .iter()
            .filter(|field| field.required && !field.filled)
            .collect()
    }

    /// Groups the checklist by section, sections in first-seen order.
    pub fn sections(&self) -> Vec<SectionChecklist<'_>> {
        let mut sections: Vec<SectionChecklist<'_>> = Vec::new();
        for field in &self.fields {
            match sections.iter_mut().find(|entry| entry.section == field.section) {
                Some(entry) => entry.fields.push(field),
                None => sections.push(SectionChecklist {
                    section: field.section,
                    fields: vec![field],
                }),
            }
        }
        sections
    }
}

/// Scores `record` against `schema`. Completeness depends only on required
/// fields; recommended fields only move the percentage.
pub fn score(record: &Map<String, Value>, schema: &CompletionSchema) -> CompletionResult {
    let fields: Vec<FieldStatus> = schema
        .fields
        .iter()
        .map(|descriptor| FieldStatus {
            field_id: descriptor.field_id,
            label: descriptor.label,
            section: descriptor.section,
            required: descriptor.required,
            filled: record.get(descriptor.field_id).is_some_and(is_filled),
        })
        .collect();

    let tally = |required: bool| {
        let scoped = fields.iter().filter(|field| field.required == required);
        let total = scoped.clone().count();
        let filled = scoped.filter(|field| field.filled).count();
        (filled, total)
    };
    let (required_filled, required_total) = tally(true);
    let (recommended_filled, recommended_total) = tally(false);

    let percent = percent(
        required_filled + recommended_filled,
        required_total + recommended_total,
    );

    CompletionResult {
        fields,
        required_filled,
        required_total,
        recommended_filled,
        recommended_total,
        percent,
        is_complete: required_filled == required_total,
    }
}

/// Whether a draft value counts as filled in.
pub fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Number(_) => true,
        Value::Array(items) => {
            if items.iter().any(Value::is_object) {
                items.iter().any(|item| match item {
                    Value::Object(entry) => entry.values().any(non_blank_text),
                    other => is_filled(other),
                })
            } else {
                !items.is_empty()
            }
        }
        Value::Bool(_) | Value::Object(_) => true,
    }
}

fn non_blank_text(value: &Value) -> bool {
    matches!(value, Value::String(text) if !text.trim().is_empty())
}

// Half rounds up, matching how the edit dialogs display progress.
fn percent(filled: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let rounded = (200 * filled + total) / (2 * total);
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::required("name", "Name", "Basics"),
        FieldDescriptor::required("tagline", "Tagline", "Basics"),
        FieldDescriptor::required("description", "Description", "About"),
        FieldDescriptor::recommended("team_size", "Team size", "About"),
        FieldDescriptor::recommended("faqs", "FAQ", "FAQ"),
    ];
    const SCHEMA: CompletionSchema = CompletionSchema::new(FIELDS);

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn partially_filled_profile_scores_sixty_percent() {
        let record = object(json!({
            "name": "Harbor Labs",
            "tagline": "Payments for ports",
            "description": "   ",
            "team_size": 12,
        }));

        let result = SCHEMA.score(&record);

        assert_eq!(result.required_filled, 2);
        assert_eq!(result.required_total, 3);
        assert_eq!(result.recommended_filled, 1);
        assert_eq!(result.recommended_total, 2);
        assert_eq!(result.percent, 60);
        assert!(!result.is_complete);
    }

    #[test]
    fn recommended_fields_do_not_affect_completeness() {
        let record = object(json!({
            "name": "Harbor Labs",
            "tagline": "Payments for ports",
            "description": "Port logistics payments",
        }));

        let result = SCHEMA.score(&record);

        assert!(result.is_complete);
        assert_eq!(result.percent, 60);
    }

    #[test]
    fn zero_counts_as_filled() {
        assert!(is_filled(&json!(0)));
        assert!(is_filled(&json!(0.0)));
        assert!(is_filled(&json!(false)));
        assert!(!is_filled(&Value::Null));
        assert!(!is_filled(&json!("\t \n")));
        assert!(!is_filled(&json!([])));
        assert!(is_filled(&json!(["AI"])));
    }

    #[test]
    fn structured_arrays_need_one_non_blank_entry() {
        assert!(!is_filled(&json!([{ "question": " ", "answer": "" }])));
        assert!(is_filled(&json!([
            { "question": "", "answer": "" },
            { "question": "Do you ship abroad?", "answer": "" }
        ])));
    }

    #[test]
    fn empty_schema_is_fully_complete() {
        let result = CompletionSchema::new(&[]).score(&Map::new());
        assert_eq!(result.percent, 100);
        assert!(result.is_complete);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(5, 5), 100);
    }

    #[test]
    fn filling_required_fields_never_lowers_the_score() {
        let mut record = object(json!({ "name": "Harbor Labs", "faqs": [] }));
        let mut previous = SCHEMA.score(&record);

        for (field, value) in [
            ("tagline", json!("Payments for ports")),
            ("description", json!("Port logistics payments")),
        ] {
            record.insert(field.to_string(), value);
            let next = SCHEMA.score(&record);
            assert!(next.percent >= previous.percent);
            assert!(!previous.is_complete || next.is_complete);
            previous = next;
        }

        assert!(previous.is_complete);
    }

    #[test]
    fn checklist_groups_by_section_and_lists_missing_required() {
        let record = object(json!({ "name": "Harbor Labs" }));
        let result = SCHEMA.score(&record);

        let sections: Vec<&str> = result.sections().iter().map(|entry| entry.section).collect();
        assert_eq!(sections, vec!["Basics", "About", "FAQ"]);

        let missing: Vec<&str> = result
            .missing_required()
            .iter()
            .map(|field| field.field_id)
            .collect();
        assert_eq!(missing, vec!["tagline", "description"]);
    }
}
