pub mod families;
pub mod kinetics;
pub mod migrate;
pub mod settings;
pub mod validate;
