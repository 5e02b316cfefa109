//! Label template endpoints

use std::sync::Arc;

use labelprint_core::{ClassifiedError, RequestOptions};
use labelprint_domain::{
    LabelTemplate, LabelTemplatePatch, NewLabelTemplate, PaginatedResponse, PreviewImage,
    PreviewRequest, TemplateQuery,
};
use serde::de::IgnoredAny;

use super::client::ApiClient;

/// `/label-templates` resource
#[derive(Clone)]
pub struct LabelTemplateApi {
    client: Arc<ApiClient>,
}

impl LabelTemplateApi {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        query: &TemplateQuery,
    ) -> Result<PaginatedResponse<LabelTemplate>, ClassifiedError> {
        let options = RequestOptions::new().with_query(query);
        self.client.get("/label-templates", &options).await
    }

    pub async fn get(&self, id: &str) -> Result<LabelTemplate, ClassifiedError> {
        self.client.get(&format!("/label-templates/{id}"), &RequestOptions::default()).await
    }

    pub async fn create(
        &self,
        template: &NewLabelTemplate,
    ) -> Result<LabelTemplate, ClassifiedError> {
        self.client.post("/label-templates", template, &RequestOptions::default()).await
    }

    /// Only the fields set in `patch` are sent.
    pub async fn update(
        &self,
        id: &str,
        patch: &LabelTemplatePatch,
    ) -> Result<LabelTemplate, ClassifiedError> {
        self.client
            .put(&format!("/label-templates/{id}"), patch, &RequestOptions::default())
            .await
    }

    /// Whatever payload the server returns is discarded.
    pub async fn delete(&self, id: &str) -> Result<(), ClassifiedError> {
        let _: IgnoredAny = self
            .client
            .delete(&format!("/label-templates/{id}"), &RequestOptions::default())
            .await?;
        Ok(())
    }

    /// Render a template with sample data. The image is returned as the
    /// server encodes it (typically a data URL).
    pub async fn preview(
        &self,
        request: &PreviewRequest,
    ) -> Result<PreviewImage, ClassifiedError> {
        self.client.post("/label-templates/preview", request, &RequestOptions::default()).await
    }
}
