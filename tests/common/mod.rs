//! Shared helpers for the bootstrap integration tests.

use std::io;
use std::path::Path;
use std::sync::Mutex;

use superset_entrypoint::init::{CommandOutcome, CommandRunner, CommandSpec};
use superset_entrypoint::Paths;

/// Records every invocation instead of spawning anything. Commands whose
/// rendered form starts with the configured prefix report exit code 1.
pub struct RecordingRunner {
    invoked: Mutex<Vec<String>>,
    failing_prefix: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self { invoked: Mutex::new(Vec::new()), failing_prefix: None }
    }

    pub fn failing(prefix: &str) -> Self {
        Self { invoked: Mutex::new(Vec::new()), failing_prefix: Some(prefix.to_string()) }
    }

    pub fn invocations(&self) -> Vec<String> {
        self.invoked.lock().unwrap().clone()
    }

    pub fn count_matching(&self, prefix: &str) -> usize {
        self.invocations().iter().filter(|cmd| cmd.starts_with(prefix)).count()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<CommandOutcome> {
        let rendered = spec.display();
        self.invoked.lock().unwrap().push(rendered.clone());
        let failed = self.failing_prefix.as_deref().is_some_and(|p| rendered.starts_with(p));
        Ok(CommandOutcome { success: !failed, code: Some(if failed { 1 } else { 0 }) })
    }
}

/// Filesystem surface rooted in a temp directory, mirroring the container
/// layout.
pub fn temp_paths(root: &Path) -> Paths {
    let paths = Paths {
        options_file: root.join("options.json"),
        data_dir: root.join("data"),
        config_dir: root.join("etc/superset"),
        dashboards_archive: root.join("share/dashboards.zip"),
    };
    std::fs::create_dir_all(&paths.data_dir).unwrap();
    std::fs::create_dir_all(&paths.config_dir).unwrap();
    paths
}
