//! The core model fields that loading hooks populate.

use serde::{Deserialize, Serialize};

/// Kinetics parameters derived from case settings.
///
/// `beta_components` and `beta_decay_constants` are either both present with
/// equal lengths or both absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreParameters {
    pub beta: Option<f64>,
    pub beta_components: Option<Vec<f64>>,
    pub beta_decay_constants: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Core {
    pub name: String,
    pub p: CoreParameters,
}

impl Core {
    /// A core with no derived parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            p: CoreParameters::default(),
        }
    }
}

impl Default for Core {
    fn default() -> Self {
        Self::new("core")
    }
}
