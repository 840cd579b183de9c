//! Validation reports.

use crate::inspector::Inspector;
use serde::{Deserialize, Serialize};

pub const VALIDATION_CHECK_KIND: &str = "casecfg.settings_validation.v1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryFinding {
    pub index: usize,
    pub family: String,
    pub setting: String,
    pub current_value: String,
    pub statement: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub check_kind: String,
    pub result: String,
    pub settings_digest: String,
    pub families: Vec<String>,
    pub query_count: usize,
    pub findings: Vec<QueryFinding>,
}

impl ValidationReport {
    /// Report the active queries of `inspector`, in query order.
    pub fn from_inspector(inspector: &Inspector) -> Self {
        let cs = inspector.settings();
        let findings: Vec<QueryFinding> = inspector
            .active()
            .map(|(index, query)| QueryFinding {
                index,
                family: query.family().name().to_string(),
                setting: query.setting().to_string(),
                current_value: cs
                    .get(query.setting())
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                statement: query.statement().to_string(),
                question: query.question().to_string(),
            })
            .collect();
        Self {
            check_kind: VALIDATION_CHECK_KIND.to_string(),
            result: if findings.is_empty() {
                "accepted".to_string()
            } else {
                "rejected".to_string()
            },
            settings_digest: cs.digest(),
            families: inspector
                .families()
                .iter()
                .map(|family| family.name().to_string())
                .collect(),
            query_count: inspector.len(),
            findings,
        }
    }

    pub fn accepted(&self) -> bool {
        self.result == "accepted"
    }
}
