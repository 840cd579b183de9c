//! Cross-section ID conventions.

use crate::inspector::Inspector;
use crate::query::{Correction, Query};
use crate::registry::RuleFamily;

pub fn cross_section_queries(inspector: &Inspector) -> Vec<Query> {
    let lower: Vec<&str> = inspector
        .settings()
        .cross_sections()
        .map(|xs| xs.ids().filter(|id| *id != id.to_uppercase()).collect())
        .unwrap_or_default();
    let statement = if lower.is_empty() {
        "Cross-section IDs must be upper case.".to_string()
    } else {
        format!(
            "Cross-section IDs must be upper case; found {}.",
            lower.join(", ")
        )
    };
    vec![Query::new(
        RuleFamily::CrossSections,
        Correction::UppercaseCrossSectionIds,
        statement,
        "Upper-case every cross-section ID?",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use casecfg_settings::{Settings, names, xs};

    #[test]
    fn lower_case_ids_are_listed_and_corrected() {
        let parsed = xs::parse("aa:\n    geometry: 0D\nBA:\n    geometry: 1D slab\n").unwrap();
        let cs = Settings::new()
            .modified([(names::CROSS_SECTIONS, parsed)])
            .unwrap();
        let mut inspector = Inspector::with_families(cs, &[RuleFamily::CrossSections]);
        assert_eq!(inspector.len(), 1);
        assert!(inspector.queries()[0].statement().ends_with("found aa."));
        assert_eq!(inspector.active().count(), 1);

        inspector.correct(0).unwrap();
        let ids: Vec<String> = inspector
            .settings()
            .cross_sections()
            .map(|xs| xs.ids().map(str::to_string).collect())
            .unwrap_or_default();
        assert_eq!(ids, vec!["AA", "BA"]);
        assert_eq!(inspector.active().count(), 0);
    }
}
