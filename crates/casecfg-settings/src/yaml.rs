//! Settings files: a YAML document with a top-level `settings:` mapping.
//!
//! ```text
//! settings:
//!   beta:
//!   - 0.0021
//!   - 0.0014
//!   boundaries: Extrapolated
//!   crossSections:
//!     AA:
//!       geometry: 0D
//! ```
//!
//! Reading starts from the registered defaults and assigns every entry
//! through the store, so unknown names and type mismatches surface as
//! [`SettingsError`]s. Cross-section blocks are decoded from the document
//! text by the same deserializer [`crate::xs::parse`] uses. Writing is
//! deterministic (name order, canonical scalars) and file writes are atomic.

use crate::error::{FormatError, SettingsError};
use crate::store::{Setting, Settings};
use crate::value::{SettingType, SettingValue};
use crate::xs::CrossSectionSettings;
use indexmap::IndexMap;
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, Visitor};
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const SETTINGS_KEY: &str = "settings";

/// Which settings a writer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStyle {
    /// Only settings that differ from their defaults.
    #[default]
    Short,
    /// Every registered setting.
    Full,
}

/// Read settings text on top of the registered defaults.
pub fn read_settings(text: &str) -> Result<Settings, SettingsError> {
    read_settings_over(Settings::new(), text)
}

/// Read settings text on top of `base`.
pub fn read_settings_over(base: Settings, text: &str) -> Result<Settings, SettingsError> {
    if text.trim().is_empty() {
        return Ok(base);
    }
    let mut reader = Reader {
        settings: base,
        failure: None,
    };
    let result = Document(&mut reader).deserialize(serde_yaml::Deserializer::from_str(text));
    match (result, reader.failure) {
        (Ok(()), _) => Ok(reader.settings),
        (Err(_), Some(failure)) => Err(failure),
        (Err(err), None) => Err(FormatError::from(err).into()),
    }
}

struct Reader {
    settings: Settings,
    // Store errors raised mid-document; serde only carries a message.
    failure: Option<SettingsError>,
}

impl Reader {
    fn fail<E: de::Error>(&mut self, err: SettingsError) -> E {
        let message = err.to_string();
        self.failure = Some(err);
        E::custom(message)
    }

    fn assign<'de, A: MapAccess<'de>>(
        &mut self,
        name: String,
        map: &mut A,
    ) -> Result<(), A::Error> {
        let Some(ty) = self.settings.setting(&name).map(Setting::ty) else {
            return Err(self.fail(SettingsError::UnknownSetting(name)));
        };
        let value = if ty == SettingType::CrossSections {
            let xs = map.next_value::<Option<CrossSectionSettings>>()?;
            SettingValue::CrossSections(xs.unwrap_or_default())
        } else {
            let raw = map.next_value::<Value>()?;
            value_from_yaml(&name, ty, raw).map_err(|err| self.fail::<A::Error>(err))?
        };
        self.settings
            .set(&name, value)
            .map(drop)
            .map_err(|err| self.fail(err))
    }
}

/// The document root: a mapping whose only key is `settings`.
struct Document<'a>(&'a mut Reader);

impl<'de> DeserializeSeed<'de> for Document<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for Document<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a mapping with a `{SETTINGS_KEY}` key")
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        Ok(())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        let mut seen = false;
        while let Some(key) = map.next_key::<String>()? {
            if key != SETTINGS_KEY {
                return Err(de::Error::custom(format!("unexpected top-level key `{key}`")));
            }
            if seen {
                return Err(de::Error::custom(format!("duplicate key `{SETTINGS_KEY}`")));
            }
            seen = true;
            map.next_value_seed(Body(&mut *self.0))?;
        }
        Ok(())
    }
}

/// The `settings:` mapping of setting name to value.
struct Body<'a>(&'a mut Reader);

impl<'de> DeserializeSeed<'de> for Body<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for Body<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{SETTINGS_KEY}` to be a mapping")
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        Ok(())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        let mut seen = BTreeSet::new();
        while let Some(name) = map.next_key::<String>()? {
            if !seen.insert(name.clone()) {
                return Err(de::Error::custom(format!("duplicate setting `{name}`")));
            }
            self.0.assign(name, &mut map)?;
        }
        Ok(())
    }
}

fn value_from_yaml(name: &str, ty: SettingType, raw: Value) -> Result<SettingValue, SettingsError> {
    let mismatch = |actual: &'static str| SettingsError::TypeMismatch {
        name: name.to_string(),
        expected: ty.as_str(),
        actual,
    };
    match raw {
        Value::Null => Ok(SettingValue::Null),
        // Legacy files carry unquoted True/False and bare numbers in text settings.
        Value::Bool(b) if ty == SettingType::Str => Ok(SettingValue::Str(
            if b { "True" } else { "False" }.to_string(),
        )),
        Value::Bool(b) => Ok(SettingValue::Bool(b)),
        Value::Number(n) if ty == SettingType::Str => Ok(SettingValue::Str(n.to_string())),
        Value::Number(n) => n
            .as_i64()
            .map(SettingValue::Int)
            .or_else(|| n.as_f64().map(SettingValue::Float))
            .ok_or_else(|| mismatch("number")),
        Value::String(s) => Ok(SettingValue::Str(s)),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Number(n) => n.as_f64().ok_or_else(|| mismatch("list")),
                _ => Err(mismatch("list")),
            })
            .collect::<Result<Vec<f64>, _>>()
            .map(SettingValue::FloatList),
        Value::Mapping(_) => Err(mismatch("mapping")),
        Value::Tagged(_) => Err(mismatch("tagged value")),
    }
}

#[derive(Serialize)]
struct SettingsDocument<'a> {
    settings: IndexMap<&'a str, &'a SettingValue>,
}

/// Render settings as settings-file text.
pub fn write_settings(settings: &Settings, style: WriteStyle) -> String {
    let document = SettingsDocument {
        settings: settings
            .iter()
            .filter(|setting| style == WriteStyle::Full || !setting.is_default())
            .map(|setting| (setting.name(), setting.value()))
            .collect(),
    };
    // Setting values are plain scalars, float lists, and string-keyed blocks.
    serde_yaml::to_string(&document).expect("settings document should serialize")
}

/// Read a settings file on top of the registered defaults.
pub fn read_settings_from_path(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| SettingsError::Io(format!("{}: {e}", path.display())))?;
    let text = validate_settings_bytes(path, &bytes)?;
    read_settings(text)
}

/// Write a settings file atomically (temp file, fsync, rename).
pub fn write_settings_to_path(
    path: impl AsRef<Path>,
    settings: &Settings,
    style: WriteStyle,
) -> Result<(), SettingsError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| SettingsError::Io(format!("{}: {e}", parent.display())))?;
        }
    }

    let text = write_settings(settings, style);
    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> Result<(), SettingsError> {
        let mut file = File::create(&tmp_path)
            .map_err(|e| SettingsError::Io(format!("{}: {e}", tmp_path.display())))?;
        file.write_all(text.as_bytes())
            .map_err(|e| SettingsError::Io(format!("{}: {e}", tmp_path.display())))?;
        file.sync_all()
            .map_err(|e| SettingsError::Io(format!("{}: {e}", tmp_path.display())))?;
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        SettingsError::Io(format!(
            "{} -> {}: {e}",
            tmp_path.display(),
            path.display()
        ))
    })?;
    tracing::debug!(path = %path.display(), ?style, "wrote settings file");
    Ok(())
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}

fn validate_settings_bytes<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str, SettingsError> {
    if bytes.contains(&0) {
        return Err(SettingsError::Corrupt(format!(
            "{}: contains NUL byte(s)",
            path.display()
        )));
    }
    std::str::from_utf8(bytes).map_err(|_| {
        SettingsError::Corrupt(format!(
            "{}: contains non-UTF-8 byte sequence(s)",
            path.display()
        ))
    })
}
