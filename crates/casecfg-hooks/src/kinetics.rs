//! Delayed neutron kinetics parameters.
//!
//! The total delayed neutron fraction (`beta`) may be given as a scalar or as
//! group-wise components. Components are only meaningful alongside one decay
//! constant per precursor group, so the two lists are taken together or not
//! at all:
//!
//! | `beta`  | `decayConstants` | result                                  |
//! |---------|------------------|-----------------------------------------|
//! | list    | list, same len   | beta = sum, components and decay set    |
//! | list    | list, other len  | [`HookError::ShapeMismatch`]            |
//! | list    | absent           | nothing assigned                        |
//! | scalar  | anything         | beta = scalar, lists cleared            |
//! | absent  | absent           | beta = None, lists cleared              |
//! | absent  | list             | nothing assigned                        |

use crate::error::HookError;
use crate::hook::{CoreLoadingHook, PersistedLoadPolicy};
use crate::model::{Core, CoreParameters};
use casecfg_settings::{SettingValue, Settings, SettingsError, names};

/// A setting that may be unset, a single number, or a list of numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScalarOrList {
    #[default]
    Absent,
    Scalar(f64),
    List(Vec<f64>),
}

impl ScalarOrList {
    pub fn from_value(name: &str, value: &SettingValue) -> Result<Self, SettingsError> {
        match value {
            SettingValue::Null => Ok(Self::Absent),
            SettingValue::Float(x) => Ok(Self::Scalar(*x)),
            SettingValue::Int(i) => Ok(Self::Scalar(*i as f64)),
            SettingValue::FloatList(items) => Ok(Self::List(items.clone())),
            other => Err(SettingsError::TypeMismatch {
                name: name.to_string(),
                expected: "float, float list, or null",
                actual: other.kind(),
            }),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Option<f64>> for ScalarOrList {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Absent, Self::Scalar)
    }
}

impl From<Vec<f64>> for ScalarOrList {
    fn from(value: Vec<f64>) -> Self {
        Self::List(value)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KineticsInput {
    pub beta: ScalarOrList,
    pub decay_constants: ScalarOrList,
}

impl KineticsInput {
    pub fn new(beta: impl Into<ScalarOrList>, decay_constants: impl Into<ScalarOrList>) -> Self {
        Self {
            beta: beta.into(),
            decay_constants: decay_constants.into(),
        }
    }

    /// Read `beta` and `decayConstants` from the store. Unregistered names
    /// read as absent.
    pub fn from_settings(cs: &Settings) -> Result<Self, SettingsError> {
        let read = |name: &str| match cs.get(name) {
            Some(value) => ScalarOrList::from_value(name, value),
            None => Ok(ScalarOrList::Absent),
        };
        Ok(Self {
            beta: read(names::BETA)?,
            decay_constants: read(names::DECAY_CONSTANTS)?,
        })
    }
}

/// What the kinetics rule writes onto the core.
#[derive(Debug, Clone, PartialEq)]
pub enum KineticsAssignment {
    /// Leave the core's parameters as they are.
    Unchanged,
    Assign(CoreParameters),
}

impl KineticsAssignment {
    pub fn apply(self, params: &mut CoreParameters) {
        if let Self::Assign(derived) = self {
            *params = derived;
        }
    }
}

/// Decide the kinetics parameters for `input`.
pub fn derive_kinetics(input: &KineticsInput) -> Result<KineticsAssignment, HookError> {
    // A scalar decay constant stands for a single precursor group.
    let decay = match &input.decay_constants {
        ScalarOrList::Absent => None,
        ScalarOrList::Scalar(x) => Some(vec![*x]),
        ScalarOrList::List(items) => Some(items.clone()),
    };
    match (&input.beta, decay) {
        (ScalarOrList::List(beta), Some(decay)) => {
            if beta.len() != decay.len() {
                return Err(HookError::ShapeMismatch {
                    beta: beta.len(),
                    decay_constants: decay.len(),
                });
            }
            Ok(KineticsAssignment::Assign(CoreParameters {
                beta: Some(beta.iter().sum()),
                beta_components: Some(beta.clone()),
                beta_decay_constants: Some(decay),
            }))
        }
        (ScalarOrList::List(_), None) => Ok(KineticsAssignment::Unchanged),
        (ScalarOrList::Scalar(beta), _) => Ok(KineticsAssignment::Assign(CoreParameters {
            beta: Some(*beta),
            ..CoreParameters::default()
        })),
        (ScalarOrList::Absent, None) => Ok(KineticsAssignment::Assign(CoreParameters::default())),
        (ScalarOrList::Absent, Some(_)) => Ok(KineticsAssignment::Unchanged),
    }
}

/// Applies [`derive_kinetics`] to the core while it loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KineticsHook {
    policy: PersistedLoadPolicy,
}

impl KineticsHook {
    pub fn new(policy: PersistedLoadPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PersistedLoadPolicy {
        self.policy
    }
}

impl CoreLoadingHook for KineticsHook {
    fn name(&self) -> &str {
        "kinetics"
    }

    fn on_process_core_loading(
        &self,
        core: &mut Core,
        cs: &Settings,
        db_load: bool,
    ) -> Result<(), HookError> {
        if db_load && self.policy == PersistedLoadPolicy::Skip {
            tracing::debug!(core = %core.name, "keeping persisted kinetics parameters");
            return Ok(());
        }
        let input = KineticsInput::from_settings(cs)?;
        let assignment = derive_kinetics(&input)?;
        tracing::debug!(core = %core.name, ?assignment, "derived kinetics parameters");
        assignment.apply(&mut core.p);
        Ok(())
    }
}
