//! Database migration command.
//!
//! Migration files live in `crates/storefront/migrations/` and are embedded
//! into the binary at compile time, so the command only needs a database URL:
//!
//! ```bash
//! GRANJA_DATABASE_URL=postgres://... granja-cli migrate
//! ```

use tracing::info;

use granja_storefront::db;

use super::{CommandError, database_url};

/// Run the storefront database migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails, or
/// a migration fails to apply.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Running migrations...");
    sqlx::migrate!("../storefront/migrations").run(&pool).await?;

    info!("Migrations complete");
    Ok(())
}
