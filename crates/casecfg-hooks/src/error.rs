use casecfg_settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// Group-wise delayed neutron fractions and precursor decay constants
    /// disagree in length.
    #[error(
        "`beta` has {beta} group-wise components but `decayConstants` has {decay_constants}; both lists must have the same length"
    )]
    ShapeMismatch { beta: usize, decay_constants: usize },

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
