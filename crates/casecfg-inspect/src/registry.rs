//! Rule family registry.
//!
//! Each family names a generator that builds its queries from the current
//! store. Generation is deterministic and side-effect free, so building the
//! same family twice against the same store yields equal query lists.

use crate::error::InspectError;
use crate::inspector::Inspector;
use crate::query::Query;
use crate::rules::{cross_sections, neutronics};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

pub type RuleGenerator = fn(&Inspector) -> Vec<Query>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleFamily {
    Neutronics,
    CrossSections,
}

/// Canonical family table: family, stable name, summary, generator.
pub const RULE_FAMILY_REGISTRY: &[(RuleFamily, &str, &str, RuleGenerator)] = &[
    (
        RuleFamily::Neutronics,
        "neutronics",
        "Legacy neutronics option spellings and input paths",
        neutronics::neutronics_queries,
    ),
    (
        RuleFamily::CrossSections,
        "crossSections",
        "Cross-section ID conventions",
        cross_sections::cross_section_queries,
    ),
];

impl RuleFamily {
    pub const ALL: &'static [RuleFamily] = &[RuleFamily::Neutronics, RuleFamily::CrossSections];

    // Registry rows are laid out in declaration order.
    fn row(self) -> &'static (RuleFamily, &'static str, &'static str, RuleGenerator) {
        &RULE_FAMILY_REGISTRY[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.row().1
    }

    pub fn summary(self) -> &'static str {
        self.row().2
    }

    pub fn generate(self, inspector: &Inspector) -> Vec<Query> {
        (self.row().3)(inspector)
    }
}

impl fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleFamily {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RULE_FAMILY_REGISTRY
            .iter()
            .find_map(|(family, name, _, _)| (*name == s).then_some(*family))
            .ok_or_else(|| InspectError::UnknownFamily(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleFamilyRow {
    pub family: &'static str,
    pub summary: &'static str,
}

pub fn rule_family_registry() -> Vec<RuleFamilyRow> {
    RULE_FAMILY_REGISTRY
        .iter()
        .map(|(_, family, summary, _)| RuleFamilyRow { family, summary })
        .collect()
}

pub fn rule_family_registry_json() -> Value {
    json!({
        "schema": 1,
        "registryKind": "casecfg.rule_family_registry.v1",
        "families": rule_family_registry(),
    })
}
