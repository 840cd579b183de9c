use crate::config::EngineConfig;
use crate::support::{families_or_exit, input_dir_for, load_settings_or_exit, print_json_or_exit};
use casecfg_inspect::{Inspector, ValidationReport};
use std::path::{Path, PathBuf};

pub struct Args {
    pub settings: PathBuf,
    pub families: Vec<String>,
    pub input_dir: Option<PathBuf>,
    pub json: bool,
}

pub fn run(args: Args, config: &EngineConfig) {
    let cs = load_settings_or_exit(&args.settings);
    let families = families_or_exit(&args.families, config);
    let input_dir = input_dir_for(&args.settings, args.input_dir);

    let inspector = Inspector::with_input_dir(cs, input_dir, &families);
    let report = ValidationReport::from_inspector(&inspector);

    if args.json {
        print_json_or_exit(&report, "validation report");
    } else {
        print_human_summary(&args.settings, &report);
    }

    if !report.accepted() {
        std::process::exit(1);
    }
}

fn print_human_summary(path: &Path, report: &ValidationReport) {
    println!("casecfg validate");
    println!("  Settings: {}", path.display());
    println!("  Settings Digest: {}", report.settings_digest);
    println!("  Families: {}", report.families.join(", "));
    println!("  Queries: {}", report.query_count);
    println!("  Result: {}", report.result);
    if report.findings.is_empty() {
        return;
    }
    println!("  Findings:");
    for finding in &report.findings {
        println!(
            "    - [{}] {} = {}",
            finding.family, finding.setting, finding.current_value
        );
        println!("      {}", finding.statement);
        println!("      {}", finding.question);
    }
}
