//! Label template types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stored label template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelTemplate {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub content: String,
    #[serde(with = "crate::types::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::types::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a template; the server assigns id and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLabelTemplate {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub content: String,
}

/// Partial update of a template. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelTemplatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Query string for the template list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

/// Render a template with sample data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub template_id: String,
    pub data: Map<String, Value>,
}

/// Rendered preview, typically a data URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewImage {
    pub image: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn patch_omits_unset_fields() {
        let patch = LabelTemplatePatch { name: Some("Shipping".into()), ..Default::default() };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "name": "Shipping" }));
    }

    #[test]
    fn template_reads_camel_case_timestamps() {
        let template: LabelTemplate = serde_json::from_value(json!({
            "id": "t-1",
            "name": "Asset tag",
            "width": 50.0,
            "height": 30.0,
            "content": "<label/>",
            "createdAt": "2024-12-12T08:00:00Z",
            "updatedAt": "2024-12-12T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(template.name, "Asset tag");
        assert!(template.updated_at > template.created_at);
    }

    #[test]
    fn template_accepts_naive_backend_timestamps() {
        let template: LabelTemplate = serde_json::from_value(json!({
            "id": "t-2",
            "name": "Pallet",
            "width": 100.0,
            "height": 150.0,
            "content": "<label/>",
            "createdAt": "2024-12-12T08:00:00.123456",
            "updatedAt": "2024-12-12T08:00:00"
        }))
        .unwrap();
        assert!(template.created_at > template.updated_at);
        assert_eq!(
            serde_json::to_value(&template).unwrap()["updatedAt"],
            json!("2024-12-12T08:00:00+00:00")
        );
    }
}
