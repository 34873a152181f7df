//! Sequential execution of the steps and the resulting report.

use std::io::Write;

use serde::{Serialize, Serializer};
use tracing::{debug, error, info, warn};

use crate::error::{RuntimeError, StepError};
use crate::session::Session;
use crate::steps::{Step, STEPS};

/// What to do when a step returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop at the first failing step; later steps are skipped
    #[default]
    Halt,
    /// Record the failure and run the remaining steps
    Continue,
}

/// Final state of a step within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Ran to completion
    Passed,
    /// Returned an error
    Failed,
    /// Never ran because an earlier step halted the run
    Skipped,
}

/// Outcome of one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    /// Step id
    pub step: &'static str,
    /// Whether the step is known to fail
    pub expected_failure: bool,
    /// Final status
    pub status: StepStatus,
    /// Error returned by the step, if it failed
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<RuntimeError>,
}

fn serialize_error<S: Serializer>(
    error: &Option<RuntimeError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Everything a run produced besides its printed lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Policy the run used
    pub policy: ErrorPolicy,
    /// One entry per step, in execution order
    pub outcomes: Vec<StepOutcome>,
    /// Lines written to the sink
    pub lines_printed: usize,
}

impl Report {
    /// The first step that failed.
    pub fn first_failure(&self) -> Option<StepError> {
        self.failures().next()
    }

    /// Every failure, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = StepError> + '_ {
        self.outcomes.iter().filter_map(|o| {
            o.error
                .as_ref()
                .map(|e| StepError::new(o.step, e.clone()))
        })
    }

    /// True when no step failed.
    pub fn is_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.status != StepStatus::Failed)
    }

    /// Number of steps that ended in `status`.
    pub fn count(&self, status: StepStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// Failures that were not marked as expected.
    pub fn unexpected_failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == StepStatus::Failed && !o.expected_failure)
    }
}

/// Runs a list of steps in order against a fresh session.
#[derive(Debug, Clone)]
pub struct Runner {
    policy: ErrorPolicy,
    steps: &'static [Step],
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(ErrorPolicy::default())
    }
}

impl Runner {
    /// Runner over every step using `policy`.
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            steps: &STEPS,
        }
    }

    /// Runner over a custom step list.
    pub fn with_steps(policy: ErrorPolicy, steps: &'static [Step]) -> Self {
        Self { policy, steps }
    }

    /// Run every step, writing printed lines to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Report {
        info!(policy = ?self.policy, steps = self.steps.len(), "starting run");
        let mut session = Session::new(out);
        let mut outcomes = Vec::with_capacity(self.steps.len());
        let mut halted = false;

        for step in self.steps {
            if halted {
                debug!(step = step.id, "skipped");
                outcomes.push(StepOutcome {
                    step: step.id,
                    expected_failure: step.expected_failure,
                    status: StepStatus::Skipped,
                    error: None,
                });
                continue;
            }

            debug!(step = step.id, "running step");
            let (status, err) = match step.run(&mut session) {
                Ok(()) => {
                    debug!(step = step.id, "step passed");
                    (StepStatus::Passed, None)
                }
                Err(e) => {
                    match self.policy {
                        ErrorPolicy::Halt => {
                            error!(step = step.id, error = %e, "step failed, halting run");
                            halted = true;
                        }
                        ErrorPolicy::Continue => {
                            warn!(step = step.id, error = %e, "step failed, continuing");
                        }
                    }
                    (StepStatus::Failed, Some(e))
                }
            };
            outcomes.push(StepOutcome {
                step: step.id,
                expected_failure: step.expected_failure,
                status,
                error: err,
            });
        }

        if let Err(e) = session.flush() {
            warn!(error = %e, "failed to flush output");
        }

        let report = Report {
            policy: self.policy,
            outcomes,
            lines_printed: session.lines_printed(),
        };
        info!(
            passed = report.count(StepStatus::Passed),
            failed = report.count(StepStatus::Failed),
            skipped = report.count(StepStatus::Skipped),
            "run finished"
        );
        report
    }
}
