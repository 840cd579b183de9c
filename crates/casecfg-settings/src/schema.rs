//! Registered setting definitions and their defaults.

use crate::store::Setting;
use crate::value::{SettingType, SettingValue};
use crate::xs::CrossSectionSettings;

/// Stable setting names.
pub mod names {
    pub const BETA: &str = "beta";
    pub const DECAY_CONSTANTS: &str = "decayConstants";
    pub const BOUNDARIES: &str = "boundaries";
    pub const GEN_XS: &str = "genXS";
    pub const GLOBAL_FLUX_ACTIVE: &str = "globalFluxActive";
    pub const GROUP_STRUCTURE: &str = "groupStructure";
    pub const DPA_XS_SET: &str = "dpaXsSet";
    pub const GRID_PLATE_DPA_XS_SET: &str = "gridPlateDpaXsSet";
    pub const NEUTRONICS_KERNEL: &str = "neutronicsKernel";
    pub const EXISTING_FIXED_SOURCE: &str = "existingFixedSource";
    pub const INNERS: &str = "inners";
    pub const OUTERS: &str = "outers";
    pub const EPS_EIGENVALUE: &str = "epsEigenvalue";
    pub const CROSS_SECTIONS: &str = "crossSections";
}

pub const DEFAULT_GROUP_STRUCTURE: &str = "ANL33";

/// Known energy group structure names, in canonical spelling.
pub const GROUP_STRUCTURES: &[&str] = &[
    "2", "ANL9", "ANL33", "ANL70", "ANL116", "ANL230", "ANL703", "ANL1041", "ANL2082", "ARMI33",
    "ARMI45", "CINDER63", "348",
];

fn def(
    name: &str,
    ty: SettingType,
    default: impl Into<SettingValue>,
    description: &str,
) -> Setting {
    Setting::new(name, ty, default.into(), description)
}

/// All registered settings at their defaults.
pub fn definitions() -> Vec<Setting> {
    use SettingType as T;
    vec![
        def(
            names::BETA,
            T::FloatOrList,
            SettingValue::Null,
            "Effective delayed neutron fraction; a list gives group-wise components",
        ),
        def(
            names::DECAY_CONSTANTS,
            T::OptionalFloatList,
            SettingValue::Null,
            "Delayed neutron precursor decay constants, one per precursor group",
        ),
        def(
            names::BOUNDARIES,
            T::Str,
            "Extrapolated",
            "Neutronic boundary condition applied to the core",
        ),
        def(
            names::GEN_XS,
            T::Str,
            "",
            "Particle types for which cross sections are generated (empty disables)",
        ),
        def(
            names::GLOBAL_FLUX_ACTIVE,
            T::Str,
            "Neutron",
            "Particle types for which the global flux solve runs (empty disables)",
        ),
        def(
            names::GROUP_STRUCTURE,
            T::Str,
            DEFAULT_GROUP_STRUCTURE,
            "Energy group structure of the cross-section library",
        ),
        def(
            names::DPA_XS_SET,
            T::Str,
            "dpaHT9_ANL33_TwrBol",
            "Displacement cross-section set for cladding and duct",
        ),
        def(
            names::GRID_PLATE_DPA_XS_SET,
            T::Str,
            "dpaSS316_ANL33_TwrBol",
            "Displacement cross-section set for the grid plate",
        ),
        def(
            names::NEUTRONICS_KERNEL,
            T::Str,
            "DIF3D-Nodal",
            "Global flux solver kernel",
        ),
        def(
            names::EXISTING_FIXED_SOURCE,
            T::Str,
            "",
            "Path to an existing fixed-source input file",
        ),
        def(names::INNERS, T::Int, 0_i64, "Inner iterations per outer (0 lets the solver pick)"),
        def(names::OUTERS, T::Int, 100_i64, "Maximum number of outer iterations"),
        def(
            names::EPS_EIGENVALUE,
            T::Float,
            1e-7,
            "Convergence criterion for the eigenvalue",
        ),
        def(
            names::CROSS_SECTIONS,
            T::CrossSections,
            CrossSectionSettings::default(),
            "Per cross-section ID modeling options",
        ),
    ]
}
