//! Bulk auto-correction.

use crate::error::InspectError;
use crate::inspector::Inspector;
use crate::query::CorrectionOutcome;

/// A correction skipped because its external resource was missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCorrection {
    pub index: usize,
    pub setting: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoCorrectSummary {
    pub outcomes: Vec<CorrectionOutcome>,
    pub skipped: Vec<SkippedCorrection>,
}

impl AutoCorrectSummary {
    pub fn changed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_changed()).count()
    }
}

/// Execute every query's correction in order, ignoring conditions.
///
/// Each correction is a no-op when its trigger is absent, so this is safe on
/// any store. `ResourceNotFound` failures are skipped; any other error is
/// returned and leaves earlier corrections applied.
pub fn auto_correct_all(inspector: &mut Inspector) -> Result<AutoCorrectSummary, InspectError> {
    let mut summary = AutoCorrectSummary::default();
    for index in 0..inspector.len() {
        match inspector.correct(index) {
            Ok(outcome) => summary.outcomes.push(outcome),
            Err(err) if err.is_resource_not_found() => {
                let setting = inspector.queries()[index].setting().to_string();
                tracing::warn!(index, setting = %setting, error = %err, "skipping correction");
                summary.skipped.push(SkippedCorrection {
                    index,
                    setting,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }
    tracing::info!(
        queries = inspector.len(),
        changed = summary.changed(),
        skipped = summary.skipped.len(),
        "auto-correction finished"
    );
    Ok(summary)
}
