//! Kinetics parameters assigned to a freshly loaded core from case settings.

use casecfg_hooks::{
    Core, CoreParameters, HookError, KineticsHook, PersistedLoadPolicy, default_hooks,
};
use casecfg_settings::{SettingValue, Settings, names};

fn load(beta: SettingValue, decay: SettingValue) -> Result<CoreParameters, HookError> {
    let cs = Settings::new()
        .modified([(names::BETA, beta), (names::DECAY_CONSTANTS, decay)])
        .expect("kinetics settings should be valid");
    let mut core = Core::default();
    default_hooks(PersistedLoadPolicy::Skip).process_core_loading(&mut core, &cs, false)?;
    Ok(core.p)
}

fn unset() -> CoreParameters {
    CoreParameters::default()
}

#[test]
fn fresh_core_has_no_kinetics_parameters() {
    let core = Core::default();
    assert_eq!(core.p, unset());
}

#[test]
fn group_wise_beta_and_decay_constants_are_assigned() {
    let p = load(vec![0.0; 6].into(), vec![1.0; 6].into()).unwrap();
    assert_eq!(p.beta, Some(0.0));
    assert_eq!(p.beta_components, Some(vec![0.0; 6]));
    assert_eq!(p.beta_decay_constants, Some(vec![1.0; 6]));
}

#[test]
fn components_sum_to_total_beta() {
    let beta = vec![0.000215, 0.001424, 0.001274, 0.002568, 0.000748, 0.000273];
    let p = load(beta.clone().into(), vec![0.0124, 0.0305, 0.111, 0.301, 1.14, 3.01].into())
        .unwrap();
    assert_eq!(p.beta, Some(beta.iter().sum::<f64>()));
    assert_eq!(p.beta_components, Some(beta));
}

#[test]
fn scalar_beta_is_assigned_as_total() {
    let p = load(0.00670.into(), SettingValue::Null).unwrap();
    assert_eq!(p.beta, Some(0.00670));
    assert_eq!(p.beta_components, None);
    assert_eq!(p.beta_decay_constants, None);
}

#[test]
fn group_wise_beta_without_decay_constants_assigns_nothing() {
    let p = load(vec![0.0; 6].into(), SettingValue::Null).unwrap();
    assert_eq!(p, unset());
}

#[test]
fn single_group_lists_are_assigned() {
    let p = load(vec![0.0].into(), vec![1.0].into()).unwrap();
    assert_eq!(p.beta, Some(0.0));
    assert_eq!(p.beta_components, Some(vec![0.0]));
    assert_eq!(p.beta_decay_constants, Some(vec![1.0]));
}

#[test]
fn decay_constants_without_beta_assign_nothing() {
    let p = load(SettingValue::Null, vec![1.0; 6].into()).unwrap();
    assert_eq!(p, unset());
}

#[test]
fn scalar_beta_ignores_decay_constants() {
    let p = load(0.0.into(), vec![1.0; 6].into()).unwrap();
    assert_eq!(p.beta, Some(0.0));
    assert_eq!(p.beta_components, None);
    assert_eq!(p.beta_decay_constants, None);
}

#[test]
fn absent_inputs_leave_beta_unset() {
    let p = load(SettingValue::Null, SettingValue::Null).unwrap();
    assert_eq!(p.beta, None);
    assert_eq!(p.beta_components, None);
    assert_eq!(p.beta_decay_constants, None);
}

#[test]
fn single_group_beta_with_six_decay_constants_is_rejected() {
    let err = load(vec![0.0].into(), vec![1.0; 6].into()).unwrap_err();
    assert!(
        matches!(err, HookError::ShapeMismatch { beta: 1, decay_constants: 6 }),
        "{err}"
    );
}

#[test]
fn five_group_beta_with_six_decay_constants_is_rejected() {
    let err = load(vec![0.0; 5].into(), vec![1.0; 6].into()).unwrap_err();
    assert!(
        matches!(err, HookError::ShapeMismatch { beta: 5, decay_constants: 6 }),
        "{err}"
    );
}

#[test]
fn persisted_load_policy_controls_db_loads() {
    let cs = Settings::new()
        .modified([
            (names::BETA, SettingValue::from(vec![0.002, 0.003])),
            (names::DECAY_CONSTANTS, SettingValue::from(vec![0.1, 1.0])),
        ])
        .unwrap();
    let persisted = CoreParameters {
        beta: Some(0.0071),
        beta_components: None,
        beta_decay_constants: None,
    };

    let mut core = Core::default();
    core.p = persisted.clone();
    default_hooks(PersistedLoadPolicy::Skip)
        .process_core_loading(&mut core, &cs, true)
        .unwrap();
    assert_eq!(core.p, persisted);

    let mut manager = casecfg_hooks::HookManager::new();
    manager.register(KineticsHook::new(PersistedLoadPolicy::Rederive));
    manager.process_core_loading(&mut core, &cs, true).unwrap();
    assert_eq!(core.p.beta_components, Some(vec![0.002, 0.003]));
    assert_eq!(core.p.beta_decay_constants, Some(vec![0.1, 1.0]));
}
