use migration::db::load_config_from_env;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = logging::init("info", "compact", None) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if std::env::var("DATABASE_URL").is_err() {
        let config = load_config_from_env();
        tracing::info!(
            host = %config.host,
            database = %config.database,
            "Using SIGNIEL_DATABASE_* settings"
        );
        // SAFETY: no other thread reads the environment before the CLI starts
        unsafe {
            std::env::set_var("DATABASE_URL", config.build_connection_string());
        }
    }

    cli::run_cli(migration::Migrator).await;
}
