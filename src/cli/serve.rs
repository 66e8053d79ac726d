//! Handler for the `serve` command.

use tokio::signal;
use tracing::{error, info};

use crate::app::App;
use crate::cli::{Cli, ServeArgs};
use crate::config::Config;
use crate::error::Result;

/// Execute the serve command.
pub async fn execute(cli: &Cli, args: &ServeArgs) -> Result<()> {
    let mut config = Config::load_or_default(&cli.config)?;

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    if let Some(ref bind) = args.bind {
        config.server.bind = bind.clone();
    }

    config.validate()?;
    config.init_logging();
    info!("hedgebook starting");

    tokio::select! {
        result = App::run(config) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                return Err(e);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("hedgebook stopped");
    Ok(())
}
