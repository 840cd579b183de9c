use crate::config::EngineConfig;
use crate::support::{families_or_exit, input_dir_for, load_settings_or_exit, print_json_or_exit};
use casecfg_inspect::{AutoCorrectSummary, Inspector, auto_correct_all};
use casecfg_settings::{WriteStyle, write_settings_to_path};
use serde::Serialize;
use std::path::PathBuf;

pub const MIGRATION_KIND: &str = "casecfg.settings_migration.v1";

pub struct Args {
    pub settings: PathBuf,
    pub out: Option<PathBuf>,
    pub families: Vec<String>,
    pub input_dir: Option<PathBuf>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MigrationReport {
    migration_kind: &'static str,
    source: String,
    output: String,
    settings_digest: String,
    changed: Vec<String>,
    skipped: Vec<SkippedRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SkippedRow {
    setting: String,
    reason: String,
}

pub fn run(args: Args, config: &EngineConfig) {
    let cs = load_settings_or_exit(&args.settings);
    let families = families_or_exit(&args.families, config);
    let input_dir = input_dir_for(&args.settings, args.input_dir);

    let mut inspector = Inspector::with_input_dir(cs, input_dir, &families);
    let summary = auto_correct_all(&mut inspector).unwrap_or_else(|err| {
        eprintln!("error: migration failed: {err}");
        std::process::exit(2);
    });
    let migrated = inspector.into_settings();

    let out = args.out.unwrap_or_else(|| args.settings.clone());
    write_settings_to_path(&out, &migrated, WriteStyle::Short).unwrap_or_else(|err| {
        eprintln!("error: failed to write {}: {err}", out.display());
        std::process::exit(2);
    });

    let report = migration_report(&args.settings, &out, migrated.digest(), &summary);
    if args.json {
        print_json_or_exit(&report, "migration report");
        return;
    }
    println!("casecfg migrate");
    println!("  Source: {}", report.source);
    println!("  Output: {}", report.output);
    println!("  Changed: {}", report.changed.len());
    for change in &report.changed {
        println!("    - {change}");
    }
    if !report.skipped.is_empty() {
        println!("  Skipped: {}", report.skipped.len());
        for row in &report.skipped {
            println!("    - {}: {}", row.setting, row.reason);
        }
    }
}

fn migration_report(
    source: &std::path::Path,
    output: &std::path::Path,
    settings_digest: String,
    summary: &AutoCorrectSummary,
) -> MigrationReport {
    MigrationReport {
        migration_kind: MIGRATION_KIND,
        source: source.display().to_string(),
        output: output.display().to_string(),
        settings_digest,
        changed: summary
            .outcomes
            .iter()
            .filter(|outcome| outcome.is_changed())
            .map(ToString::to_string)
            .collect(),
        skipped: summary
            .skipped
            .iter()
            .map(|skip| SkippedRow {
                setting: skip.setting.clone(),
                reason: skip.reason.clone(),
            })
            .collect(),
    }
}
