//! Client preference types

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Colour scheme of the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl_domain_status_conversions!(Theme {
    Light => "light",
    Dark => "dark",
});

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
