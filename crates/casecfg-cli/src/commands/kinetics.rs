use crate::config::EngineConfig;
use crate::support::{load_settings_or_exit, print_json_or_exit};
use casecfg_hooks::{Core, CoreParameters, PersistedLoadPolicy, default_hooks};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KineticsReport<'a> {
    core: &'a str,
    db_load: bool,
    persisted_load: PersistedLoadPolicy,
    parameters: &'a CoreParameters,
}

pub fn run(settings: PathBuf, db_load: bool, json_output: bool, config: &EngineConfig) {
    let cs = load_settings_or_exit(&settings);
    let policy = config.kinetics.persisted_load;
    let hooks = default_hooks(policy);

    let mut core = Core::default();
    hooks
        .process_core_loading(&mut core, &cs, db_load)
        .unwrap_or_else(|err| {
            eprintln!("error: core loading failed: {err}");
            std::process::exit(2);
        });

    if json_output {
        print_json_or_exit(
            &KineticsReport {
                core: &core.name,
                db_load,
                persisted_load: policy,
                parameters: &core.p,
            },
            "kinetics",
        );
        return;
    }

    println!("casecfg kinetics");
    println!("  Core: {}", core.name);
    println!("  Hooks: {}", hooks.names().join(", "));
    println!("  DB Load: {db_load} (persisted load: {policy})");
    println!("  Beta: {}", optional(core.p.beta.map(|b| format!("{b:?}"))));
    println!(
        "  Beta Components: {}",
        optional(core.p.beta_components.as_deref().map(list))
    );
    println!(
        "  Decay Constants: {}",
        optional(core.p.beta_decay_constants.as_deref().map(list))
    );
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "unset".to_string())
}

fn list(items: &[f64]) -> String {
    let rendered: Vec<String> = items.iter().map(|x| format!("{x:?}")).collect();
    format!("[{}]", rendered.join(", "))
}
