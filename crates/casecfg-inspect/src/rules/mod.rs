//! Rule families. Each module exposes one query generator.

pub mod cross_sections;
pub mod neutronics;
