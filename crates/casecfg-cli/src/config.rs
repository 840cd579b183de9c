//! Engine configuration (`casecfg.toml`).

use casecfg_hooks::PersistedLoadPolicy;
use casecfg_inspect::RuleFamily;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "casecfg.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    ParseFailed {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Rule families run when a command names none.
    pub families: Vec<String>,
    /// Log filter used when neither `--log` nor `RUST_LOG` is set.
    pub log: Option<String>,
    pub kinetics: KineticsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KineticsConfig {
    pub persisted_load: PersistedLoadPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            families: RuleFamily::ALL
                .iter()
                .map(|family| family.name().to_string())
                .collect(),
            log: None,
            kinetics: KineticsConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let parsed: Self = toml::from_str(text).map_err(|source| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })?;
        parsed.rule_families()?;
        Ok(parsed)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Load `explicit` if given, else `./casecfg.toml` if it exists, else
    /// defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = Path::new(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            return Self::load(candidate);
        }
        Ok(Self::default())
    }

    pub fn rule_families(&self) -> Result<Vec<RuleFamily>, ConfigError> {
        parse_families(&self.families)
    }
}

/// Parse stable family names, keeping order and dropping repeats.
pub fn parse_families(names: &[String]) -> Result<Vec<RuleFamily>, ConfigError> {
    let mut families = Vec::new();
    for name in names {
        let family = name
            .parse::<RuleFamily>()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        if !families.contains(&family) {
            families.push(family);
        }
    }
    Ok(families)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<EngineConfig, ConfigError> {
        EngineConfig::parse(text, Path::new("casecfg.toml"))
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.rule_families().unwrap(), RuleFamily::ALL);
        assert_eq!(config.kinetics.persisted_load, PersistedLoadPolicy::Skip);
    }

    #[test]
    fn full_file_round_trips_fields() {
        let config = parse(
            r#"
families = ["crossSections"]
log = "info"

[kinetics]
persisted_load = "rederive"
"#,
        )
        .unwrap();
        assert_eq!(config.rule_families().unwrap(), vec![RuleFamily::CrossSections]);
        assert_eq!(config.log.as_deref(), Some("info"));
        assert_eq!(config.kinetics.persisted_load, PersistedLoadPolicy::Rederive);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            parse("verbose = true\n"),
            Err(ConfigError::ParseFailed { .. })
        ));
        assert!(matches!(
            parse("[kinetics]\npolicy = \"skip\"\n"),
            Err(ConfigError::ParseFailed { .. })
        ));
    }

    #[test]
    fn unknown_family_is_invalid() {
        let err = parse("families = [\"thermal\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("thermal"), "{err}");
    }

    #[test]
    fn repeated_families_collapse() {
        let names = vec!["neutronics".to_string(), "neutronics".to_string()];
        assert_eq!(parse_families(&names).unwrap(), vec![RuleFamily::Neutronics]);
    }
}
