//! Print job endpoints

use std::sync::Arc;

use labelprint_core::{ClassifiedError, RequestOptions};
use labelprint_domain::{JobQuery, NewPrintJob, PaginatedResponse, PrintJob};
use serde::de::IgnoredAny;

use super::client::ApiClient;

/// `/print-jobs` resource
#[derive(Clone)]
pub struct PrintJobApi {
    client: Arc<ApiClient>,
}

impl PrintJobApi {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        query: &JobQuery,
    ) -> Result<PaginatedResponse<PrintJob>, ClassifiedError> {
        let options = RequestOptions::new().with_query(query);
        self.client.get("/print-jobs", &options).await
    }

    pub async fn create(&self, job: &NewPrintJob) -> Result<PrintJob, ClassifiedError> {
        self.client.post("/print-jobs", job, &RequestOptions::default()).await
    }

    pub async fn cancel(&self, id: &str) -> Result<(), ClassifiedError> {
        let _: IgnoredAny = self
            .client
            .post_empty(&format!("/print-jobs/{id}/cancel"), &RequestOptions::default())
            .await?;
        Ok(())
    }

    /// Re-queue a failed job; the server answers with the job's new state.
    pub async fn retry(&self, id: &str) -> Result<PrintJob, ClassifiedError> {
        self.client
            .post_empty(&format!("/print-jobs/{id}/retry"), &RequestOptions::default())
            .await
    }
}
