//! Handler for the `analyze` command: one-shot slip extraction.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::app::App;
use crate::cli::{AnalyzeArgs, Cli};
use crate::config::Config;
use crate::error::Result;

/// Execute the analyze command.
pub async fn execute(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    config.init_logging();

    let bytes = std::fs::read(&args.image)?;
    let encoded = BASE64.encode(bytes);

    let extractor = App::build_extractor(&config)?;
    let image = extractor.image_from_base64(&encoded)?;

    if args.raw {
        println!("{}", extractor.analyze_raw(&image).await?);
    } else {
        let data = extractor.analyze(&image).await?;
        println!("{}", serde_json::to_string_pretty(&data)?);
    }
    Ok(())
}
