//! # casecfg-inspect
//!
//! Settings validation and migration.
//!
//! An [`Inspector`] owns a settings store and the [`Query`] list its rule
//! families generate against it. Each query carries a [`Correction`]: data
//! describing one migration, applied by a single generic routine and
//! idempotent by construction.
//!
//! ```text
//! Settings ──► Inspector::new ──► [Query; n] ──► active() ──► ValidationReport
//!                                      │
//!                         correct(i) / run(resolver) / auto_correct_all
//! ```

pub mod error;
pub mod harness;
pub mod inspector;
pub mod query;
pub mod registry;
pub mod report;
pub mod rules;

pub use error::InspectError;
pub use harness::{AutoCorrectSummary, SkippedCorrection, auto_correct_all};
pub use inspector::{FixedResolver, Inspector, Resolver, RunSummary};
pub use query::{Correction, CorrectionOutcome, DefaultAnswer, Query, QueryState};
pub use registry::{
    RULE_FAMILY_REGISTRY, RuleFamily, RuleFamilyRow, RuleGenerator, rule_family_registry,
    rule_family_registry_json,
};
pub use report::{QueryFinding, VALIDATION_CHECK_KIND, ValidationReport};
pub use rules::neutronics::neutronics_queries;
