//! Model-loading hooks.

use crate::error::HookError;
use crate::model::Core;
use casecfg_settings::Settings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A handler run while a core model is being loaded.
///
/// `db_load` is true when the core is restored from persisted state rather
/// than built fresh.
pub trait CoreLoadingHook {
    fn name(&self) -> &str;

    fn on_process_core_loading(
        &self,
        core: &mut Core,
        cs: &Settings,
        db_load: bool,
    ) -> Result<(), HookError>;
}

/// What derived-parameter hooks do when a core is restored from persisted
/// state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistedLoadPolicy {
    /// Keep the persisted parameters.
    #[default]
    Skip,
    /// Re-derive parameters from the current settings.
    Rederive,
}

impl fmt::Display for PersistedLoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("skip"),
            Self::Rederive => f.write_str("rederive"),
        }
    }
}

/// Runs registered hooks in registration order.
#[derive(Default)]
pub struct HookManager {
    hooks: Vec<Box<dyn CoreLoadingHook>>,
}

impl HookManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: impl CoreLoadingHook + 'static) -> &mut Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.hooks.iter().map(|hook| hook.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Call every hook in order. The first error stops the pass.
    pub fn process_core_loading(
        &self,
        core: &mut Core,
        cs: &Settings,
        db_load: bool,
    ) -> Result<(), HookError> {
        for hook in &self.hooks {
            tracing::debug!(hook = hook.name(), db_load, "processing core loading");
            hook.on_process_core_loading(core, cs, db_load)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HookManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookManager")
            .field("hooks", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl CoreLoadingHook for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn on_process_core_loading(
            &self,
            _core: &mut Core,
            _cs: &Settings,
            db_load: bool,
        ) -> Result<(), HookError> {
            self.log.borrow_mut().push(format!("{}:{db_load}", self.name));
            if self.fail {
                return Err(HookError::ShapeMismatch {
                    beta: 1,
                    decay_constants: 2,
                });
            }
            Ok(())
        }
    }

    fn recorder(name: &'static str, log: &Rc<RefCell<Vec<String>>>, fail: bool) -> Recorder {
        Recorder {
            name,
            log: Rc::clone(log),
            fail,
        }
    }

    #[test]
    fn hooks_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = HookManager::new();
        manager
            .register(recorder("first", &log, false))
            .register(recorder("second", &log, false));
        assert_eq!(manager.names(), vec!["first", "second"]);

        manager
            .process_core_loading(&mut Core::default(), &Settings::new(), true)
            .unwrap();
        assert_eq!(*log.borrow(), vec!["first:true", "second:true"]);
    }

    #[test]
    fn first_error_stops_the_pass() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = HookManager::new();
        manager
            .register(recorder("boom", &log, true))
            .register(recorder("after", &log, false));
        let err = manager
            .process_core_loading(&mut Core::default(), &Settings::new(), false)
            .unwrap_err();
        assert!(matches!(err, HookError::ShapeMismatch { .. }));
        assert_eq!(*log.borrow(), vec!["boom:false"]);
    }

    #[test]
    fn policy_defaults_to_skip() {
        assert_eq!(PersistedLoadPolicy::default(), PersistedLoadPolicy::Skip);
        assert_eq!(PersistedLoadPolicy::Rederive.to_string(), "rederive");
    }
}
