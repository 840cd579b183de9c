//! Cross-section block text is stable under serialize -> parse -> serialize.

use casecfg_settings::{
    BlockRepresentation, CrossSectionSettings, XsGeometry, XsModelingOptions, xs,
};
use proptest::prelude::*;

/// Words and shapes a YAML reader would resolve to something other than a
/// string when left unquoted.
const AWKWARD_TEXT: &[&str] = &[
    "", "true", "False", "null", "~", "yes", "off", "0", "007", "0x1F", "1e5", "1e-7", ".inf",
    "-.nan", "e5", " padded ", "- dash", "a: b", "a:", "# hash", "'quote'", "\"dq\"", "---",
    "[list]", "{map}", "&anchor", "*alias", "!tag", "@at", "0D", "1D slab",
];

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(AWKWARD_TEXT).prop_map(str::to_string),
        "[A-Za-z0-9 _:#'\"./\\-\t\u{7}\u{1b}é漢]{0,12}",
    ]
}

fn geometry() -> impl Strategy<Value = XsGeometry> {
    prop_oneof![
        Just(XsGeometry::ZeroD),
        Just(XsGeometry::OneDSlab),
        Just(XsGeometry::OneDCylinder),
        Just(XsGeometry::TwoDHex),
    ]
}

fn block_representation() -> impl Strategy<Value = BlockRepresentation> {
    prop_oneof![
        Just(BlockRepresentation::Average),
        Just(BlockRepresentation::Median),
        Just(BlockRepresentation::ComponentAverage1DSlab),
        Just(BlockRepresentation::ComponentAverage1DCylinder),
        Just(BlockRepresentation::FluxWeightedAverage),
    ]
}

prop_compose! {
    fn modeling_options()(
        geometry in geometry(),
        critical_buckling in any::<Option<bool>>(),
        block_representation in prop::option::of(block_representation()),
        driver_id in prop::option::of(text()),
        external_driver in any::<Option<bool>>(),
        num_internal_rings in any::<Option<u32>>(),
        num_external_rings in any::<Option<u32>>(),
        xs_file_location in prop::collection::vec(text(), 0..3),
    ) -> XsModelingOptions {
        let mut options = XsModelingOptions::new(geometry);
        options.critical_buckling = critical_buckling;
        options.block_representation = block_representation;
        options.driver_id = driver_id;
        options.external_driver = external_driver;
        options.num_internal_rings = num_internal_rings;
        options.num_external_rings = num_external_rings;
        options.xs_file_location = xs_file_location;
        options
    }
}

fn cross_sections() -> impl Strategy<Value = CrossSectionSettings> {
    prop::collection::vec((text(), modeling_options()), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn serialized_text_is_a_fixed_point(value in cross_sections()) {
        let first = xs::serialize(&value);
        let reparsed = match xs::parse(&first) {
            Ok(reparsed) => reparsed,
            Err(err) => return Err(TestCaseError::fail(format!("{err}\n{first}"))),
        };
        prop_assert_eq!(&reparsed, &value, "{}", first);
        prop_assert_eq!(xs::serialize(&reparsed), first);
    }

    #[test]
    fn ids_keep_insertion_order(ids in prop::collection::vec(text(), 1..6)) {
        let value: CrossSectionSettings = ids
            .iter()
            .map(|id| (id.clone(), XsModelingOptions::new(XsGeometry::ZeroD)))
            .collect();
        let reparsed = xs::parse(&xs::serialize(&value))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(
            reparsed.ids().collect::<Vec<_>>(),
            value.ids().collect::<Vec<_>>()
        );
    }
}
