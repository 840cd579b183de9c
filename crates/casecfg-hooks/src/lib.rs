//! # casecfg-hooks
//!
//! Model-loading hooks and the kinetics parameters they derive from case
//! settings.
//!
//! A [`HookManager`] calls each registered [`CoreLoadingHook`] in order while
//! a [`Core`] loads. [`KineticsHook`] reads `beta` and `decayConstants` and
//! assigns the core's kinetics parameters with [`derive_kinetics`].

pub mod error;
pub mod hook;
pub mod kinetics;
pub mod model;

pub use error::HookError;
pub use hook::{CoreLoadingHook, HookManager, PersistedLoadPolicy};
pub use kinetics::{
    KineticsAssignment, KineticsHook, KineticsInput, ScalarOrList, derive_kinetics,
};
pub use model::{Core, CoreParameters};

/// A manager with the built-in hooks registered.
pub fn default_hooks(policy: PersistedLoadPolicy) -> HookManager {
    let mut manager = HookManager::new();
    manager.register(KineticsHook::new(policy));
    manager
}
