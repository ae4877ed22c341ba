//! Weight Control - interactive console for tracking product weights

use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::io;
use std::process::ExitCode;
use tracing::{info, warn};

mod app;
mod cli;
mod config;
mod menu;
mod render;
mod seed;

use app::App;
use cli::CommandLine;
use config::Config;
use menu::Menu;

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    install_color_eyre();

    let commands = CommandLine::parse_args();
    let config = Config::from_env()?.with_overrides(commands.database_url.clone(), commands.no_seed);
    init_tracing(&config.environment);

    info!(url = config.sqlite.url(), "Opening product database");

    let db = database::sqlite::connect_from_config_with_retry(config.sqlite.clone(), None).await?;
    database::sqlite::run_migrations::<migration::Migrator>(&db, "weight-control").await?;
    database::sqlite::check_health(&db).await?;

    let app = App::new(
        domain_products::sqlite::dispatcher(db.clone()),
        config.request_timeout,
    );

    if config.seed_database {
        if let Err(e) = seed::seed_if_empty(&app).await {
            warn!(error = %e, "Failed to seed products table");
        }
    }

    let succeeded = match commands.command {
        Some(command) => {
            let mut stdout = io::stdout().lock();
            cli::run_command(&app, command, commands.json, &mut stdout).await?
        }
        None => {
            Menu::new(&app, io::stdin().lock(), io::stdout())
                .clear_screen(true)
                .run()
                .await?;
            true
        }
    };

    db.close().await?;
    info!("Weight Control shutdown complete");

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
