use sea_orm_migration::prelude::*;

// DATABASE_URL is read by the CLI, e.g. `migration up` / `migration down`
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
