//! The inspector: owns a settings store for the duration of a validation
//! pass and the queries generated against it.

use crate::error::InspectError;
use crate::query::{CorrectionOutcome, DefaultAnswer, Query};
use crate::registry::RuleFamily;
use casecfg_settings::Settings;
use std::path::{Path, PathBuf};

/// Answers queries whose default answer is [`DefaultAnswer::Ask`].
pub trait Resolver {
    /// Return `true` to apply the query's correction.
    fn resolve(&mut self, query: &Query) -> bool;
}

/// A resolver that gives the same answer to every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedResolver(pub bool);

impl Resolver for FixedResolver {
    fn resolve(&mut self, _query: &Query) -> bool {
        self.0
    }
}

/// Summary of an interactive pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub corrected: Vec<CorrectionOutcome>,
    pub declined: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Inspector {
    settings: Settings,
    input_dir: PathBuf,
    families: Vec<RuleFamily>,
    queries: Vec<Query>,
}

impl Inspector {
    /// An inspector running every registered rule family.
    pub fn new(settings: Settings) -> Self {
        Self::with_families(settings, RuleFamily::ALL)
    }

    pub fn with_families(settings: Settings, families: &[RuleFamily]) -> Self {
        Self::build(settings, PathBuf::from("."), families)
    }

    /// An inspector that resolves relative input paths against `input_dir`.
    pub fn with_input_dir(
        settings: Settings,
        input_dir: impl Into<PathBuf>,
        families: &[RuleFamily],
    ) -> Self {
        Self::build(settings, input_dir.into(), families)
    }

    fn build(settings: Settings, input_dir: PathBuf, families: &[RuleFamily]) -> Self {
        let mut inspector = Self {
            settings,
            input_dir,
            families: families.to_vec(),
            queries: Vec::new(),
        };
        inspector.queries = inspector.generate();
        tracing::debug!(
            families = ?inspector.families,
            queries = inspector.queries.len(),
            "generated validation queries"
        );
        inspector
    }

    /// Build the query list for the current store without installing it.
    pub fn generate(&self) -> Vec<Query> {
        self.families
            .iter()
            .flat_map(|family| family.generate(self))
            .collect()
    }

    /// Replace the query list with one generated against the current store.
    pub fn regenerate(&mut self) {
        self.queries = self.generate();
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn families(&self) -> &[RuleFamily] {
        &self.families
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Queries whose condition holds against the current store, with their
    /// indexes.
    pub fn active(&self) -> impl Iterator<Item = (usize, &Query)> {
        self.queries
            .iter()
            .enumerate()
            .filter(|(_, query)| query.is_active(&self.settings))
    }

    /// Execute the correction of query `index`.
    pub fn correct(&mut self, index: usize) -> Result<CorrectionOutcome, InspectError> {
        let query = self
            .queries
            .get_mut(index)
            .ok_or(InspectError::NoSuchQuery(index))?;
        let outcome = query.correct(&mut self.settings, &self.input_dir)?;
        tracing::debug!(index, outcome = %outcome, "applied correction");
        Ok(outcome)
    }

    /// Walk the active queries in order, applying corrections the resolver
    /// (or the query's default answer) accepts.
    ///
    /// Conditions are re-evaluated after every correction. Missing external
    /// resources are recorded as skipped; any other error ends the pass.
    pub fn run(&mut self, resolver: &mut dyn Resolver) -> Result<RunSummary, InspectError> {
        let mut summary = RunSummary::default();
        for index in 0..self.queries.len() {
            let query = &self.queries[index];
            if !query.is_active(&self.settings) {
                continue;
            }
            let accept = match query.default_answer() {
                DefaultAnswer::Yes => true,
                DefaultAnswer::No => false,
                DefaultAnswer::Ask => resolver.resolve(query),
            };
            if !accept {
                summary.declined.push(query.setting().to_string());
                continue;
            }
            match self.correct(index) {
                Ok(outcome) => summary.corrected.push(outcome),
                Err(err) if err.is_resource_not_found() => {
                    tracing::warn!(index, error = %err, "skipping correction");
                    summary.skipped.push(err.to_string());
                }
                Err(err) => return Err(err),
            }
        }
        Ok(summary)
    }
}
