//! Migration CLI tool.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI reads DATABASE_URL and installs its own tracing subscriber
    cli::run_cli(migration::Migrator).await;
}
