//! The configuration store: named, typed settings with defaults.
//!
//! Assignments are type-checked against each setting's declared type. The
//! sanctioned way to derive a variant of a store is [`Settings::modified`],
//! which deep-copies the receiver and leaves it untouched; in-place
//! [`Settings::set`] is reserved for corrections that own the store for the
//! duration of a validation pass.

use crate::error::SettingsError;
use crate::schema;
use crate::value::{SettingType, SettingValue};
use crate::xs::CrossSectionSettings;
use crate::yaml::{WriteStyle, write_settings};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// A named, typed configuration entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    name: String,
    ty: SettingType,
    default: SettingValue,
    value: SettingValue,
    description: String,
}

impl Setting {
    pub fn new(
        name: impl Into<String>,
        ty: SettingType,
        default: SettingValue,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            value: default.clone(),
            default,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> SettingType {
        self.ty
    }

    pub fn default_value(&self) -> &SettingValue {
        &self.default
    }

    pub fn value(&self) -> &SettingValue {
        &self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_default(&self) -> bool {
        self.value == self.default
    }
}

/// Case settings keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    entries: BTreeMap<String, Setting>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Every registered setting at its default value.
    pub fn new() -> Self {
        Self::from_definitions(schema::definitions())
    }

    /// Build a store from explicit definitions. Later duplicates win.
    pub fn from_definitions(definitions: Vec<Setting>) -> Self {
        let entries = definitions
            .into_iter()
            .map(|setting| (setting.name.clone(), setting))
            .collect();
        Self { entries }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.entries.get(name)
    }

    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.entries.get(name).map(Setting::value)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(SettingValue::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            SettingValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn cross_sections(&self) -> Option<&CrossSectionSettings> {
        match self.get(schema::names::CROSS_SECTIONS)? {
            SettingValue::CrossSections(xs) => Some(xs),
            _ => None,
        }
    }

    /// Assign a value after checking it against the declared type.
    ///
    /// Returns the previous value.
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<SettingValue>,
    ) -> Result<SettingValue, SettingsError> {
        let setting = self
            .entries
            .get_mut(name)
            .ok_or_else(|| SettingsError::UnknownSetting(name.to_string()))?;
        let value = setting
            .ty
            .coerce(value.into())
            .map_err(|actual| SettingsError::TypeMismatch {
                name: name.to_string(),
                expected: setting.ty.as_str(),
                actual,
            })?;
        tracing::trace!(setting = name, value = %value, "assign setting");
        Ok(std::mem::replace(&mut setting.value, value))
    }

    /// Restore a setting to its default value.
    pub fn reset(&mut self, name: &str) -> Result<SettingValue, SettingsError> {
        let setting = self
            .entries
            .get_mut(name)
            .ok_or_else(|| SettingsError::UnknownSetting(name.to_string()))?;
        let default = setting.default.clone();
        Ok(std::mem::replace(&mut setting.value, default))
    }

    pub fn is_default(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(Setting::is_default)
    }

    /// A new store equal to this one except for `overrides`.
    ///
    /// The receiver is never mutated; a failed override discards the copy.
    pub fn modified<I, K, V>(&self, overrides: I) -> Result<Settings, SettingsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<SettingValue>,
    {
        let mut copy = self.clone();
        for (name, value) in overrides {
            copy.set(name.as_ref(), value)?;
        }
        Ok(copy)
    }

    /// Settings in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// SHA-256 over the full canonical settings text.
    pub fn digest(&self) -> String {
        let hash = Sha256::digest(write_settings(self, WriteStyle::Full).as_bytes());
        format!("{hash:x}")
    }
}
