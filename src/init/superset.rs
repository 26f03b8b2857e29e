//! Superset-specific initialization steps.

use tracing::{debug, info};

use crate::error::EntrypointError;
use crate::init::runner::{CommandRunner, CommandSpec};
use crate::init::sentinel::Sentinel;
use crate::init::steps::{run_steps, Step};
use crate::paths::Paths;

/// Account created on first run and used for dashboard/data-source
/// ownership.
pub const ADMIN_USERNAME: &str = "admin";

/// Display name of the registered Home Assistant database. Registration is
/// idempotent on this name.
pub const DATASOURCE_NAME: &str = "Home Assistant";

fn superset(paths: &Paths) -> CommandSpec {
    CommandSpec::new("superset")
        .env("SUPERSET_CONFIG_PATH", paths.superset_config().display().to_string())
}

/// Schema migration; part of every startup, not just the first one, so the
/// add-on picks up Superset version upgrades. A failure here aborts the
/// bootstrap: the server must not come up against a broken schema.
fn migration_step(paths: &Paths) -> Step {
    Step::fatal("schema migration", superset(paths).arg("db").arg("upgrade"))
}

/// First-run steps guarded by the init sentinel. Ordering matters: role
/// sync comes after the data-source registration it depends on.
fn first_run_steps(paths: &Paths, admin_password: &str) -> Vec<Step> {
    vec![
        Step::tolerated(
            "admin account",
            superset(paths)
                .arg("fab")
                .arg("create-admin")
                .arg("--username")
                .arg(ADMIN_USERNAME)
                .arg("--firstname")
                .arg("Superset")
                .arg("--lastname")
                .arg("Admin")
                .arg("--email")
                .arg("admin@homeassistant.local")
                .arg("--password")
                .arg(admin_password),
        ),
        Step::tolerated(
            "database registration",
            CommandSpec::new("python3")
                .arg(paths.register_helper().display().to_string())
                .env("SUPERSET_CONFIG_PATH", paths.superset_config().display().to_string()),
        ),
        Step::tolerated("role sync", superset(paths).arg("init")),
    ]
}

fn import_step(paths: &Paths) -> Step {
    Step::tolerated(
        "dashboard import",
        superset(paths)
            .arg("import-dashboards")
            .arg("-p")
            .arg(paths.dashboards_archive.display().to_string())
            .arg("-u")
            .arg(ADMIN_USERNAME),
    )
}

/// Run both sentinel-guarded initialization phases.
pub fn run_initializer(
    runner: &dyn CommandRunner,
    paths: &Paths,
    admin_password: &str,
) -> Result<(), EntrypointError> {
    let init_done = Sentinel::new(paths.init_done_flag());
    let first_run = !init_done.is_set();

    let mut steps = vec![migration_step(paths)];
    if first_run {
        info!("first run; performing one-time setup");
        steps.extend(first_run_steps(paths, admin_password));
    } else {
        debug!(flag = %init_done.path().display(), "setup already done; migration only");
    }
    run_steps(runner, &steps)?;
    if first_run {
        init_done.set()?;
    }

    // Dashboard import is guarded independently: the bundle may appear in a
    // later image revision, after first-run setup already happened.
    let imported = Sentinel::new(paths.dashboards_imported_flag());
    if !imported.is_set() {
        if paths.dashboards_archive.exists() {
            run_steps(runner, &[import_step(paths)])?;
            imported.set()?;
        } else {
            debug!(archive = %paths.dashboards_archive.display(), "no dashboard bundle to import");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Paths {
        Paths {
            options_file: "/tmp/options.json".into(),
            data_dir: "/tmp/data".into(),
            config_dir: "/tmp/etc".into(),
            dashboards_archive: "/tmp/dashboards.zip".into(),
        }
    }

    #[test]
    fn test_children_receive_config_path() {
        let steps = first_run_steps(&paths(), "pw");
        for step in &steps {
            assert!(
                step.command
                    .env
                    .iter()
                    .any(|(k, v)| k == "SUPERSET_CONFIG_PATH" && v.ends_with("superset_config.py")),
                "{} lacks SUPERSET_CONFIG_PATH",
                step.name
            );
        }
    }

    #[test]
    fn test_role_sync_comes_after_registration() {
        let steps = first_run_steps(&paths(), "pw");
        let names: Vec<_> = steps.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["admin account", "database registration", "role sync"]);
    }

    #[test]
    fn test_only_migration_is_fatal() {
        assert!(migration_step(&paths()).fatal);
        assert!(first_run_steps(&paths(), "pw").iter().all(|s| !s.fatal));
        assert!(!import_step(&paths()).fatal);
    }

    #[test]
    fn test_admin_password_is_passed_through() {
        let steps = first_run_steps(&paths(), "s3cret");
        assert!(steps[0].command.args.iter().any(|a| a == "s3cret"));
    }
}
