//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use labelprint_domain::LabelPrintError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LabelPrintError);

impl From<InfraError> for LabelPrintError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LabelPrintError> for InfraError {
    fn from(value: LabelPrintError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoLabelPrintError {
    fn into_labelprint(self) -> LabelPrintError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → LabelPrintError */
/* -------------------------------------------------------------------------- */

impl IntoLabelPrintError for IoError {
    fn into_labelprint(self) -> LabelPrintError {
        use std::io::ErrorKind as K;

        match self.kind() {
            K::NotFound => LabelPrintError::Storage(format!("file not found: {self}")),
            K::PermissionDenied => LabelPrintError::Storage(format!("permission denied: {self}")),
            _ => LabelPrintError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_labelprint())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → LabelPrintError */
/* -------------------------------------------------------------------------- */

impl IntoLabelPrintError for JsonError {
    fn into_labelprint(self) -> LabelPrintError {
        LabelPrintError::Serialization(format!(
            "invalid JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_labelprint())
    }
}

impl IntoLabelPrintError for TomlError {
    fn into_labelprint(self) -> LabelPrintError {
        LabelPrintError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_labelprint())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → LabelPrintError */
/* -------------------------------------------------------------------------- */

impl IntoLabelPrintError for UrlError {
    fn into_labelprint(self) -> LabelPrintError {
        LabelPrintError::Config(format!("invalid API endpoint: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_labelprint())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LabelPrintError */
/* -------------------------------------------------------------------------- */

// Only client construction errors reach this path; request failures are
// classified by the gateway instead.
impl IntoLabelPrintError for HttpError {
    fn into_labelprint(self) -> LabelPrintError {
        if self.is_builder() {
            return LabelPrintError::Config(format!("failed to build HTTP client: {self}"));
        }
        LabelPrintError::Internal(format!("HTTP client error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_labelprint())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
