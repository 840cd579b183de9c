//! # casecfg-settings
//!
//! Case-settings layer: the configuration store that validation passes and
//! model-loading hooks read from.
//!
//! This crate provides:
//! - `Setting` / `Settings` (typed store with defaults and `modified` clones)
//! - `SettingType` / `SettingValue` (declared types and the values they admit)
//! - the structured cross-section codec (`xs::parse` / `xs::serialize`)
//! - settings-file read/write (YAML, deterministic, atomic on disk)
//!
//! ## Data model
//!
//! ```text
//! settings file (YAML)
//!     ↕  read_settings / write_settings
//! Settings ── crossSections ↔ xs block text
//! ```

pub mod error;
pub mod schema;
pub mod store;
pub mod value;
pub mod xs;
pub mod yaml;

pub use error::{FormatError, SettingsError};
pub use schema::{DEFAULT_GROUP_STRUCTURE, GROUP_STRUCTURES, names};
pub use store::{Setting, Settings};
pub use value::{SettingType, SettingValue};
pub use xs::{BlockRepresentation, CrossSectionSettings, XsGeometry, XsModelingOptions};
pub use yaml::{
    SETTINGS_KEY, WriteStyle, read_settings, read_settings_from_path, read_settings_over,
    write_settings, write_settings_to_path,
};
