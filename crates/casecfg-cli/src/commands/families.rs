use crate::support::print_json_or_exit;
use casecfg_inspect::{rule_family_registry, rule_family_registry_json};

pub fn run(json_output: bool) {
    if json_output {
        print_json_or_exit(&rule_family_registry_json(), "rule-family registry");
        return;
    }

    let rows = rule_family_registry();
    println!("casecfg families");
    println!("  Registry kind: casecfg.rule_family_registry.v1");
    println!("  Families: {}", rows.len());
    for row in rows {
        println!("    - {}: {}", row.family, row.summary);
    }
}
