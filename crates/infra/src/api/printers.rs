//! Printer device endpoints

use std::sync::Arc;

use labelprint_core::{ClassifiedError, RequestOptions};
use labelprint_domain::{PrinterDevice, PrinterStatus, PrinterStatusUpdate, PrinterTestResult};

use super::client::ApiClient;

/// `/printers` resource
#[derive(Clone)]
pub struct PrinterApi {
    client: Arc<ApiClient>,
}

impl PrinterApi {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<PrinterDevice>, ClassifiedError> {
        self.client.get("/printers", &RequestOptions::default()).await
    }

    /// Ask the server to probe the device. A reachable server reporting a
    /// dead printer is a successful call with `success == false`.
    pub async fn test(&self, id: &str) -> Result<PrinterTestResult, ClassifiedError> {
        self.client.post_empty(&format!("/printers/{id}/test"), &RequestOptions::default()).await
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: PrinterStatus,
    ) -> Result<PrinterDevice, ClassifiedError> {
        self.client
            .put(
                &format!("/printers/{id}/status"),
                &PrinterStatusUpdate { status },
                &RequestOptions::default(),
            )
            .await
    }
}
