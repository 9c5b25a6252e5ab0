use crate::db::connect;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;



/// Connect and migrate, or `None` when no database is configured for tests.
pub(crate) async fn setup_test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        println!("Skipping database tests (SKIP_DB_TESTS set or DATABASE_URL missing)");
        return Ok(None);
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}
