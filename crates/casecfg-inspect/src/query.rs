//! Queries and the corrections they carry.
//!
//! A [`Query`] pairs a human-facing statement and question with a
//! [`Correction`]: a tagged description of a settings migration. Conditions
//! are derived from the correction, so a query whose trigger value is absent
//! is inert and its correction is a no-op. Every correction is idempotent:
//! once the store no longer matches the trigger, applying it again changes
//! nothing.

use crate::error::InspectError;
use crate::registry::RuleFamily;
use casecfg_settings::{CrossSectionSettings, SettingValue, Settings, SettingsError, names};
use std::fmt;
use std::path::Path;

/// A settings migration, described as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correction {
    /// Replace the value of `setting` when it appears as a key of `table`.
    Remap {
        setting: &'static str,
        table: &'static [(&'static str, &'static str)],
    },
    /// Replace a value that is not spelled exactly as one of `known` with
    /// its case-insensitive match, or with `fallback` when none matches.
    CanonicalName {
        setting: &'static str,
        known: &'static [&'static str],
        fallback: &'static str,
    },
    /// Resolve a relative path against the inspector's input directory.
    ResolveInputPath { setting: &'static str },
    /// Upper-case every cross-section ID.
    UppercaseCrossSectionIds,
}

impl Correction {
    pub fn setting(&self) -> &'static str {
        match self {
            Self::Remap { setting, .. }
            | Self::CanonicalName { setting, .. }
            | Self::ResolveInputPath { setting } => *setting,
            Self::UppercaseCrossSectionIds => names::CROSS_SECTIONS,
        }
    }

    /// Whether the store currently holds a value this correction would
    /// change. Missing or mistyped settings never trigger.
    pub fn is_needed(&self, cs: &Settings) -> bool {
        match self {
            Self::Remap { setting, table } => cs
                .get_str(setting)
                .is_some_and(|value| lookup(table, value).is_some()),
            Self::CanonicalName { setting, known, .. } => cs
                .get_str(setting)
                .is_some_and(|value| !known.contains(&value)),
            Self::ResolveInputPath { setting } => cs
                .get_str(setting)
                .is_some_and(|value| !value.is_empty() && Path::new(value).is_relative()),
            Self::UppercaseCrossSectionIds => cs
                .cross_sections()
                .is_some_and(|xs| xs.ids().any(|id| id != id.to_uppercase())),
        }
    }

    /// Apply the correction to `cs`.
    ///
    /// Returns [`CorrectionOutcome::Unchanged`] when the trigger is absent.
    pub fn apply(
        &self,
        cs: &mut Settings,
        input_dir: &Path,
    ) -> Result<CorrectionOutcome, InspectError> {
        let setting = self.setting();
        let replacement = match self {
            Self::Remap { table, .. } => {
                let current = current_str(cs, setting)?;
                lookup(table, current).map(SettingValue::from)
            }
            Self::CanonicalName {
                known, fallback, ..
            } => {
                let current = current_str(cs, setting)?;
                if known.contains(&current) {
                    None
                } else {
                    let canonical = known
                        .iter()
                        .find(|name| name.eq_ignore_ascii_case(current))
                        .copied()
                        .unwrap_or(*fallback);
                    Some(SettingValue::from(canonical))
                }
            }
            Self::ResolveInputPath { .. } => {
                let current = current_str(cs, setting)?;
                resolve_input_path(setting, current, input_dir)?.map(SettingValue::from)
            }
            Self::UppercaseCrossSectionIds => match cs.cross_sections() {
                Some(xs) => uppercase_ids(xs)?.map(SettingValue::from),
                None => None,
            },
        };

        match replacement {
            None => Ok(CorrectionOutcome::Unchanged {
                setting: setting.to_string(),
            }),
            Some(to) => {
                let from = cs.set(setting, to.clone())?;
                Ok(CorrectionOutcome::Changed {
                    setting: setting.to_string(),
                    from,
                    to,
                })
            }
        }
    }
}

fn lookup(table: &[(&'static str, &'static str)], value: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == value)
        .map(|(_, to)| *to)
}

fn current_str<'a>(cs: &'a Settings, setting: &str) -> Result<&'a str, InspectError> {
    let value = cs
        .get(setting)
        .ok_or_else(|| SettingsError::UnknownSetting(setting.to_string()))?;
    value.as_str().ok_or_else(|| {
        SettingsError::TypeMismatch {
            name: setting.to_string(),
            expected: "str",
            actual: value.kind(),
        }
        .into()
    })
}

fn resolve_input_path(
    setting: &str,
    current: &str,
    input_dir: &Path,
) -> Result<Option<String>, InspectError> {
    if current.is_empty() || Path::new(current).is_absolute() {
        return Ok(None);
    }
    let candidate = input_dir.join(current);
    let not_found = || InspectError::ResourceNotFound {
        setting: setting.to_string(),
        path: candidate.display().to_string(),
    };
    if !candidate.exists() {
        return Err(not_found());
    }
    let resolved = candidate.canonicalize().map_err(|_| not_found())?;
    Ok(Some(resolved.display().to_string()))
}

fn uppercase_ids(xs: &CrossSectionSettings) -> Result<Option<CrossSectionSettings>, InspectError> {
    if xs.ids().all(|id| id == id.to_uppercase()) {
        return Ok(None);
    }
    let mut renamed = CrossSectionSettings::new();
    for (id, options) in xs.iter() {
        let upper = id.to_uppercase();
        if renamed.insert(upper.clone(), options.clone()).is_some() {
            return Err(InspectError::CorrectionConflict {
                setting: names::CROSS_SECTIONS.to_string(),
                detail: format!("`{id}` collides with an existing ID once upper-cased to `{upper}`"),
            });
        }
    }
    Ok(Some(renamed))
}

/// What applying a correction did to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrectionOutcome {
    Changed {
        setting: String,
        from: SettingValue,
        to: SettingValue,
    },
    Unchanged {
        setting: String,
    },
    /// The query's correction already ran once.
    AlreadyCorrected {
        setting: String,
    },
}

impl CorrectionOutcome {
    pub fn setting(&self) -> &str {
        match self {
            Self::Changed { setting, .. }
            | Self::Unchanged { setting }
            | Self::AlreadyCorrected { setting } => setting,
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

impl fmt::Display for CorrectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed { setting, from, to } => write!(f, "{setting}: {from} -> {to}"),
            Self::Unchanged { setting } => write!(f, "{setting}: unchanged"),
            Self::AlreadyCorrected { setting } => write!(f, "{setting}: already corrected"),
        }
    }
}

/// How an interactive pass answers a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultAnswer {
    /// Defer to the resolver.
    #[default]
    Ask,
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryState {
    #[default]
    Pending,
    Corrected,
}

/// A validation question bound to a correction.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    family: RuleFamily,
    statement: String,
    question: String,
    correction: Correction,
    default_answer: DefaultAnswer,
    state: QueryState,
}

impl Query {
    pub fn new(
        family: RuleFamily,
        correction: Correction,
        statement: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            family,
            statement: statement.into(),
            question: question.into(),
            correction,
            default_answer: DefaultAnswer::Ask,
            state: QueryState::Pending,
        }
    }

    pub fn with_default_answer(mut self, answer: DefaultAnswer) -> Self {
        self.default_answer = answer;
        self
    }

    pub fn family(&self) -> RuleFamily {
        self.family
    }

    pub fn setting(&self) -> &'static str {
        self.correction.setting()
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn correction(&self) -> &Correction {
        &self.correction
    }

    pub fn default_answer(&self) -> DefaultAnswer {
        self.default_answer
    }

    pub fn state(&self) -> QueryState {
        self.state
    }

    pub fn is_corrected(&self) -> bool {
        self.state == QueryState::Corrected
    }

    /// Pending and triggered by the current store.
    pub fn is_active(&self, cs: &Settings) -> bool {
        !self.is_corrected() && self.correction.is_needed(cs)
    }

    /// Run the correction once. Later calls report
    /// [`CorrectionOutcome::AlreadyCorrected`] without touching `cs`.
    pub(crate) fn correct(
        &mut self,
        cs: &mut Settings,
        input_dir: &Path,
    ) -> Result<CorrectionOutcome, InspectError> {
        if self.is_corrected() {
            return Ok(CorrectionOutcome::AlreadyCorrected {
                setting: self.setting().to_string(),
            });
        }
        let outcome = self.correction.apply(cs, input_dir)?;
        self.state = QueryState::Corrected;
        Ok(outcome)
    }
}
