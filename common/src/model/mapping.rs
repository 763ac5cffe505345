//! Template field to spreadsheet column mappings.
//!
//! The mapping step shows one selector per template field. Each selector is
//! pre-filled with a suggested column: the last header that contains the
//! field name, or is contained in it, ignoring case. Suggestions are rebuilt
//! every time the step is entered. The user can override any suggestion,
//! including clearing it, before moving on.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Fields the certificate templates expose, in the order they are shown.
pub const TEMPLATE_FIELDS: [&str; 4] = ["name", "course", "completion date", "instructor"];

/// One row of the mapping table. An empty `column` means "unmapped".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub field: String,
    pub column: String,
}

impl FieldMapping {
    pub fn is_mapped(&self) -> bool {
        !self.column.is_empty()
    }

    /// Field name with its first letter capitalised, as shown in the table.
    pub fn label(&self) -> String {
        let mut chars = self.field.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Ordered mapping from template field to chosen column.
///
/// Serializes as a JSON object keyed by field name, in field order, which is
/// the shape `/preview` and `/generate` expect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mappings {
    entries: Vec<FieldMapping>,
}

impl Mappings {
    /// Builds a fresh mapping for `fields`, suggesting a column for each one.
    pub fn suggest<S: AsRef<str>>(fields: &[S], headers: &[String]) -> Self {
        let entries = fields
            .iter()
            .map(|field| {
                let field = field.as_ref();
                FieldMapping {
                    field: field.to_string(),
                    column: suggest_column(field, headers)
                        .map(str::to_string)
                        .unwrap_or_default(),
                }
            })
            .collect();
        Self { entries }
    }

    /// Sets the column for `field`. Returns `false` if the field is unknown.
    pub fn set(&mut self, field: &str, column: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.field == field) {
            Some(entry) => {
                entry.column = column.into();
                true
            }
            None => false,
        }
    }

    /// The chosen column for `field`, or `None` when unmapped or unknown.
    pub fn column(&self, field: &str) -> Option<&str> {
        self.entry(field)
            .filter(|e| e.is_mapped())
            .map(|e| e.column.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldMapping> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, field: &str) -> Option<&FieldMapping> {
        self.entries.iter().find(|e| e.field == field)
    }
}

impl Serialize for Mappings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.field, &entry.column)?;
        }
        map.end()
    }
}

/// Case-insensitive substring match in either direction; the last matching
/// header wins.
pub fn suggest_column<'a>(field: &str, headers: &'a [String]) -> Option<&'a str> {
    let field = field.trim().to_lowercase();
    if field.is_empty() {
        return None;
    }
    headers
        .iter()
        .rev()
        .find(|header| {
            let header = header.trim().to_lowercase();
            !header.is_empty() && (header.contains(&field) || field.contains(&header))
        })
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn suggests_columns_by_substring_ignoring_case() {
        let headers = headers(&["Full Name", "Course Title", "Date", "Teacher"]);
        let mappings = Mappings::suggest(&TEMPLATE_FIELDS, &headers);

        assert_eq!(mappings.column("name"), Some("Full Name"));
        assert_eq!(mappings.column("course"), Some("Course Title"));
        assert_eq!(mappings.column("completion date"), Some("Date"));
        assert_eq!(mappings.column("instructor"), None);
    }

    #[test]
    fn field_without_matching_header_stays_unmapped() {
        let headers = headers(&["Full Name", "Title", "Teacher"]);
        let mappings = Mappings::suggest(&TEMPLATE_FIELDS, &headers);

        assert_eq!(mappings.column("course"), None);
        assert_eq!(mappings.len(), TEMPLATE_FIELDS.len());
    }

    #[test]
    fn blank_headers_never_match() {
        let headers = headers(&["   ", "NAME"]);
        assert_eq!(suggest_column("name", &headers), Some("NAME"));
    }

    #[test]
    fn later_header_wins_when_several_match() {
        let names = headers(&["Name", "Full Name"]);
        let mappings = Mappings::suggest(&TEMPLATE_FIELDS, &names);
        assert_eq!(mappings.column("name"), Some("Full Name"));

        let courses = headers(&["Course Title", "Course"]);
        assert_eq!(suggest_column("course", &courses), Some("Course"));
    }

    #[test]
    fn labels_capitalise_the_first_letter() {
        let mappings = Mappings::suggest(&TEMPLATE_FIELDS, &[]);
        let labels: Vec<String> = mappings.iter().map(FieldMapping::label).collect();
        assert_eq!(labels, vec!["Name", "Course", "Completion date", "Instructor"]);
    }

    #[test]
    fn set_rejects_unknown_fields() {
        let mut mappings = Mappings::suggest(&TEMPLATE_FIELDS, &[]);
        assert!(!mappings.set("signature", "Name"));
        assert!(mappings.set("course", "Course"));
        assert_eq!(mappings.column("course"), Some("Course"));
    }

    #[test]
    fn serializes_as_object_in_field_order() {
        let headers = headers(&["Name"]);
        let mappings = Mappings::suggest(&TEMPLATE_FIELDS, &headers);
        let json = serde_json::to_string(&mappings).unwrap();

        assert_eq!(
            json,
            r#"{"name":"Name","course":"","completion date":"","instructor":""}"#
        );
    }
}
