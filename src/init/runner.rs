//! Child-process invocation seam.

use std::io;
use std::process::Command;

/// A fully described child invocation: program, arguments and environment.
///
/// Derived values reach child processes through here, never through this
/// process's own ambient environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), env: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// One-line rendering for logs.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Result of a completed (not necessarily successful) child process.
#[derive(Debug, Clone, Copy)]
pub struct CommandOutcome {
    pub success: bool,
    pub code: Option<i32>,
}

/// Seam between the step list and the operating system.
pub trait CommandRunner {
    /// Run the command to completion, blocking. `Err` means the process
    /// could not be spawned at all.
    fn run(&self, spec: &CommandSpec) -> io::Result<CommandOutcome>;
}

/// Runs commands as real child processes, inheriting stdio so the wrapped
/// application's output lands in the add-on log.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<CommandOutcome> {
        let status = Command::new(&spec.program)
            .args(&spec.args)
            .envs(spec.env.iter().map(|(k, v)| (k, v)))
            .status()?;
        Ok(CommandOutcome { success: status.success(), code: status.code() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_display() {
        let spec = CommandSpec::new("superset").arg("db").arg("upgrade");
        assert_eq!(spec.display(), "superset db upgrade");
    }

    #[test]
    fn test_system_runner_reports_exit_code() {
        let ok = SystemRunner.run(&CommandSpec::new("true")).unwrap();
        assert!(ok.success);

        let failed = SystemRunner.run(&CommandSpec::new("false")).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.code, Some(1));

        assert!(SystemRunner.run(&CommandSpec::new("/nonexistent-program")).is_err());
    }
}
