use crate::config::{EngineConfig, parse_families};
use casecfg_inspect::RuleFamily;
use casecfg_settings::{Settings, read_settings_from_path};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub fn load_settings_or_exit(path: &Path) -> Settings {
    read_settings_from_path(path).unwrap_or_else(|err| {
        eprintln!("error: failed to load {}: {err}", path.display());
        std::process::exit(2);
    })
}

/// Families named on the command line, or the configured ones.
pub fn families_or_exit(requested: &[String], config: &EngineConfig) -> Vec<RuleFamily> {
    let result = if requested.is_empty() {
        config.rule_families()
    } else {
        parse_families(requested)
    };
    result.unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(2);
    })
}

/// The explicit input directory, else the settings file's directory.
pub fn input_dir_for(settings_path: &Path, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| match settings_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    })
}

pub fn print_json_or_exit<T: Serialize>(payload: &T, what: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {what} json: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}
