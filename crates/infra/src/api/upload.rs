//! Multipart upload payloads

use std::path::Path;

use futures::stream;
use futures::StreamExt;
use labelprint_core::{ProgressCallback, UploadProgress};
use labelprint_domain::constants::{UPLOAD_CHUNK_SIZE, UPLOAD_FIELD_NAME};
use labelprint_domain::LabelPrintError;
use reqwest::multipart::{Form, Part};
use reqwest::Body;

use crate::errors::InfraError;

/// In-memory file handed to [`ApiClient::upload`](super::ApiClient::upload)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    file_name: String,
    bytes: Vec<u8>,
    mime: Option<String>,
    announce_length: bool,
}

impl UploadFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { file_name: file_name.into(), bytes: bytes.into(), mime: None, announce_length: true }
    }

    /// Read a file from disk. The file name is taken from the last path
    /// component.
    ///
    /// # Errors
    /// Returns a storage error when the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, LabelPrintError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| LabelPrintError::from(InfraError::from(err)))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UPLOAD_FIELD_NAME.to_string());
        Ok(Self::new(file_name, bytes))
    }

    #[must_use]
    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Stream the part without a length, as for a source whose size is not
    /// known up front. No progress is reported for such uploads.
    #[must_use]
    pub fn without_length(mut self) -> Self {
        self.announce_length = false;
        self
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Total reported to the progress tracker
    fn total(&self) -> Option<u64> {
        self.announce_length.then(|| self.len())
    }

    /// Build the multipart form with the payload under the `file` field.
    ///
    /// The body is handed to the transport in fixed-size chunks; progress is
    /// advanced as each chunk is taken.
    pub(crate) fn into_form(
        self,
        progress: Option<ProgressCallback>,
    ) -> Result<Form, LabelPrintError> {
        let total = self.total();
        let length = self.len();
        let mut tracker = progress.map(|callback| UploadProgress::new(total, callback));

        let chunks: Vec<Vec<u8>> =
            self.bytes.chunks(UPLOAD_CHUNK_SIZE).map(<[u8]>::to_vec).collect();
        let body = Body::wrap_stream(stream::iter(chunks).map(move |chunk| {
            if let Some(tracker) = tracker.as_mut() {
                tracker.advance(chunk.len() as u64);
            }
            Ok::<_, std::io::Error>(chunk)
        }));

        let part = if self.announce_length {
            Part::stream_with_length(body, length)
        } else {
            Part::stream(body)
        };
        let mut part = part.file_name(self.file_name);
        if let Some(mime) = self.mime {
            part = part
                .mime_str(&mime)
                .map_err(|err| LabelPrintError::from(InfraError::from(err)))?;
        }

        Ok(Form::new().part(UPLOAD_FIELD_NAME, part))
    }
}
