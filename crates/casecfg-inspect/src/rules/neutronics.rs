//! Neutronics settings migrations.
//!
//! The family always builds the same eight queries, in a fixed order; each
//! query's condition decides whether it applies to a given store.

use crate::inspector::Inspector;
use crate::query::{Correction, Query};
use crate::registry::RuleFamily;
use casecfg_settings::{DEFAULT_GROUP_STRUCTURE, GROUP_STRUCTURES, Settings, names};

pub const BOUNDARY_RENAMES: &[(&str, &str)] = &[("Normal", "Extrapolated")];

/// Boolean spellings of particle-type settings and their replacements.
pub const PARTICLE_FLAG_MIGRATIONS: &[(&str, &str)] = &[("True", "Neutron"), ("False", "")];

pub const DPA_XS_SET_ALIASES: &[(&str, &str)] = &[
    ("dpaHT9_33", "dpaHT9_ANL33_TwrBol"),
    ("dpa_SS316", "dpaSS316_ANL33_TwrBol"),
];

pub const KERNEL_RENAMES: &[(&str, &str)] = &[("DIF3D", "DIF3D-Nodal")];

fn current(cs: &Settings, name: &str) -> String {
    cs.get(name)
        .map(ToString::to_string)
        .unwrap_or_else(|| "<unset>".to_string())
}

fn particle_flag_query(cs: &Settings, setting: &'static str) -> Query {
    Query::new(
        RuleFamily::Neutronics,
        Correction::Remap {
            setting,
            table: PARTICLE_FLAG_MIGRATIONS,
        },
        format!(
            "`{setting}` is {}; it now lists particle types (`Neutron`, `Neutron and Gamma`, or empty to disable) instead of True/False.",
            current(cs, setting)
        ),
        format!("Migrate `{setting}` to `Neutron` (True) or empty (False)?"),
    )
}

fn dpa_query(cs: &Settings, setting: &'static str) -> Query {
    Query::new(
        RuleFamily::Neutronics,
        Correction::Remap {
            setting,
            table: DPA_XS_SET_ALIASES,
        },
        format!(
            "`{setting}` is {}, a shortened DPA cross-section set name.",
            current(cs, setting)
        ),
        format!("Replace `{setting}` with the fully qualified set name?"),
    )
}

/// The neutronics query list for `inspector`'s current store.
pub fn neutronics_queries(inspector: &Inspector) -> Vec<Query> {
    let cs = inspector.settings();
    vec![
        Query::new(
            RuleFamily::Neutronics,
            Correction::Remap {
                setting: names::BOUNDARIES,
                table: BOUNDARY_RENAMES,
            },
            "The `Normal` boundary condition has been renamed to `Extrapolated`.",
            "Update `boundaries` to `Extrapolated`?",
        ),
        particle_flag_query(cs, names::GEN_XS),
        particle_flag_query(cs, names::GLOBAL_FLUX_ACTIVE),
        Query::new(
            RuleFamily::Neutronics,
            Correction::CanonicalName {
                setting: names::GROUP_STRUCTURE,
                known: GROUP_STRUCTURES,
                fallback: DEFAULT_GROUP_STRUCTURE,
            },
            format!(
                "The group structure {} is not one of: {}.",
                current(cs, names::GROUP_STRUCTURE),
                GROUP_STRUCTURES.join(", ")
            ),
            format!(
                "Use the matching known structure, or `{DEFAULT_GROUP_STRUCTURE}` if none matches?"
            ),
        ),
        dpa_query(cs, names::DPA_XS_SET),
        dpa_query(cs, names::GRID_PLATE_DPA_XS_SET),
        Query::new(
            RuleFamily::Neutronics,
            Correction::Remap {
                setting: names::NEUTRONICS_KERNEL,
                table: KERNEL_RENAMES,
            },
            "The `DIF3D` kernel option is now spelled `DIF3D-Nodal`.",
            "Update `neutronicsKernel` to `DIF3D-Nodal`?",
        ),
        Query::new(
            RuleFamily::Neutronics,
            Correction::ResolveInputPath {
                setting: names::EXISTING_FIXED_SOURCE,
            },
            format!(
                "`existingFixedSource` ({}) is relative to the input directory {}.",
                current(cs, names::EXISTING_FIXED_SOURCE),
                inspector.input_dir().display()
            ),
            "Store `existingFixedSource` as an absolute path?",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_builds_eight_queries_in_order() {
        let inspector = Inspector::with_families(Settings::new(), &[]);
        let settings: Vec<&str> = neutronics_queries(&inspector)
            .iter()
            .map(Query::setting)
            .collect();
        assert_eq!(
            settings,
            vec![
                names::BOUNDARIES,
                names::GEN_XS,
                names::GLOBAL_FLUX_ACTIVE,
                names::GROUP_STRUCTURE,
                names::DPA_XS_SET,
                names::GRID_PLATE_DPA_XS_SET,
                names::NEUTRONICS_KERNEL,
                names::EXISTING_FIXED_SOURCE,
            ]
        );
    }

    #[test]
    fn statements_mention_current_values() {
        let cs = Settings::new()
            .modified([(names::GEN_XS, "True"), (names::GROUP_STRUCTURE, "bad_value")])
            .unwrap();
        let inspector = Inspector::with_families(cs, &[]);
        let queries = neutronics_queries(&inspector);
        assert!(queries[1].statement().contains("\"True\""), "{}", queries[1].statement());
        assert!(queries[3].statement().contains("\"bad_value\""));
        assert!(queries[3].statement().contains("ARMI45"));
    }

    #[test]
    fn defaults_trigger_nothing() {
        let inspector = Inspector::with_families(Settings::new(), &[]);
        let cs = inspector.settings();
        assert!(neutronics_queries(&inspector).iter().all(|q| !q.is_active(cs)));
    }
}
