//! Structured settings survive assignment, file writes, and re-reads.

use casecfg_settings::{
    Settings, WriteStyle, XsGeometry, names, read_settings_from_path, write_settings_to_path, xs,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const XS_EXAMPLE: &str = "AA:
  geometry: 0D
  criticalBuckling: true
  blockRepresentation: Median
BA:
  geometry: 1D slab
  blockRepresentation: Median
";

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "casecfg-settings-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[test]
fn structured_setting_builds_objects_and_writes() {
    let tmp = TempDirGuard::new("obj-io");
    let mut cs = Settings::new();
    cs.set(names::CROSS_SECTIONS, xs::parse(XS_EXAMPLE).expect("example parses"))
        .expect("cross sections assign");
    assert_eq!(
        cs.cross_sections().and_then(|xs| xs.get("AA")).map(|o| o.geometry),
        Some(XsGeometry::ZeroD)
    );

    let path = tmp.path().join("test_setting_obj_io_.yaml");
    write_settings_to_path(&path, &cs, WriteStyle::Short).expect("settings write");
    let text = fs::read_to_string(&path).expect("settings file readable");
    assert!(text.contains("geometry: 0D"), "{text}");
}

#[test]
fn structured_setting_reassignment_round_trips() {
    let tmp = TempDirGuard::new("round");
    let mut cs = Settings::new();
    cs.set(names::CROSS_SECTIONS, xs::parse(XS_EXAMPLE).expect("example parses"))
        .expect("cross sections assign");
    let same = cs.cross_sections().cloned().expect("cross sections present");
    cs.set(names::CROSS_SECTIONS, same).expect("reassign");

    let path = tmp.path().join("test_setting_obj_io_round.yaml");
    write_settings_to_path(&path, &cs, WriteStyle::Short).expect("settings write");
    let text = fs::read_to_string(&path).expect("settings file readable");
    assert!(text.contains("geometry: 0D"), "{text}");
    assert!(text.contains("geometry: 1D"), "{text}");

    let reread = read_settings_from_path(&path).expect("settings re-read");
    assert_eq!(reread, cs);
    assert_eq!(
        reread.cross_sections().map(xs::serialize).as_deref(),
        Some(XS_EXAMPLE)
    );
}
