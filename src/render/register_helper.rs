//! Database-registration helper script template.

use crate::init::superset::{ADMIN_USERNAME, DATASOURCE_NAME};
use crate::render::superset_config::py_escape;

/// Render the Python helper that registers the Home Assistant database in
/// Superset's metadata store.
///
/// The script looks the record up by display name first, so it is a no-op
/// on a metadata store that already carries the connection, including one
/// reused from elsewhere where the init sentinel may be absent. A created
/// record gets read-only capability flags and, when the admin account
/// exists, admin ownership.
pub fn render_register_helper(datasource_uri: &str) -> String {
    format!(
        r#"# Rendered by the add-on entrypoint on every start; edits are overwritten.
from superset.app import create_app

app = create_app()
with app.app_context():
    from superset import db, security_manager
    from superset.models.core import Database

    session = db.session
    existing = (
        session.query(Database)
        .filter_by(database_name="{name}")
        .one_or_none()
    )
    if existing is None:
        database = Database(
            database_name="{name}",
            sqlalchemy_uri="{uri}",
            expose_in_sqllab=True,
            allow_run_async=False,
            allow_ctas=False,
            allow_cvas=False,
            allow_dml=False,
        )
        admin = security_manager.find_user(username="{admin}")
        if admin is not None:
            database.owners = [admin]
        session.add(database)
        session.commit()
"#,
        name = py_escape(DATASOURCE_NAME),
        uri = py_escape(datasource_uri),
        admin = py_escape(ADMIN_USERNAME),
    )
}
