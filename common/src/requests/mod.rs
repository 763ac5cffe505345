use serde::Serialize;

use crate::model::mapping::Mappings;

/// Body of `POST /preview`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRequest {
    pub excel_filename: String,
    pub template_filename: String,
    pub mappings: Mappings,
    /// 0-based data row, not counting the header row.
    pub row_index: usize,
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub excel_filename: String,
    pub template_filename: String,
    pub mappings: Mappings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mapping::TEMPLATE_FIELDS;

    #[test]
    fn preview_request_wire_shape() {
        let headers = vec!["Name".to_string()];
        let request = PreviewRequest {
            excel_filename: "people.xlsx".into(),
            template_filename: "cert.docx".into(),
            mappings: Mappings::suggest(&TEMPLATE_FIELDS, &headers),
            row_index: 3,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["excel_filename"], "people.xlsx");
        assert_eq!(value["template_filename"], "cert.docx");
        assert_eq!(value["mappings"]["name"], "Name");
        assert_eq!(value["row_index"], 3);
    }
}
