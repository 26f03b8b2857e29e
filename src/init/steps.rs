//! Ordered step execution.

use tracing::{info, warn};

use crate::error::EntrypointError;
use crate::init::runner::{CommandRunner, CommandSpec};

/// One bootstrap step: a named child invocation with a failure policy.
#[derive(Debug, Clone)]
pub struct Step {
    pub name: &'static str,
    /// Fatal steps abort the bootstrap; tolerated ones log and continue
    /// (already-exists races and absent preconditions are benign).
    pub fatal: bool,
    pub command: CommandSpec,
}

impl Step {
    pub fn fatal(name: &'static str, command: CommandSpec) -> Self {
        Self { name, fatal: true, command }
    }

    pub fn tolerated(name: &'static str, command: CommandSpec) -> Self {
        Self { name, fatal: false, command }
    }
}

/// Execute steps in declared order: stop at the first fatal failure,
/// log-and-continue past tolerated ones.
pub fn run_steps(runner: &dyn CommandRunner, steps: &[Step]) -> Result<(), EntrypointError> {
    for step in steps {
        info!(step = step.name, command = %step.command.display(), "running step");
        match runner.run(&step.command) {
            Ok(outcome) if outcome.success => {}
            Ok(outcome) if step.fatal => {
                return Err(EntrypointError::StepFailed { step: step.name, code: outcome.code });
            }
            Ok(outcome) => {
                warn!(step = step.name, code = ?outcome.code, "step failed; continuing");
            }
            Err(source) if step.fatal => {
                return Err(EntrypointError::Spawn { command: step.command.display(), source });
            }
            Err(source) => {
                warn!(step = step.name, error = %source, "step could not be spawned; continuing");
            }
        }
    }
    Ok(())
}
