//! Interactive flows driven by the presentation shell.
//!
//! Each flow is a step sequence with precondition-gated `advance()`,
//! `retreat()` that closes at the first step, string-keyed `set_field()`
//! and `close()`. The shell only reads state and forwards events.

pub mod career;
pub mod compare;
pub mod planner;
pub mod sequencer;

pub use career::{CareerSnapshot, CareerStep, CareerWizard, RoadmapView};
pub use compare::{CompareStep, ComparePrograms};
pub use planner::{CostField, FinancialPlanner, PlannerStep};
pub use sequencer::{Advance, Retreat, StepSequencer, WizardStep};
