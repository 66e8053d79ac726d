//! Configuration validation command.

use std::path::Path;

use crate::config::{Config, VisionProvider};

/// Validate the configuration file without starting the service.
pub fn execute_config<P: AsRef<Path>>(config_path: P) {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    if !path.exists() {
        println!("⚠ Configuration file not found, built-in defaults apply");
        println!();
    }

    match Config::load_or_default(path) {
        Ok(config) => {
            if let Err(e) = config.validate() {
                eprintln!("✗ Configuration is invalid: {e}");
                std::process::exit(1);
            }

            println!("✓ Configuration is valid");
            println!();
            println!("Summary:");
            println!("  Bind address: {}", config.server.bind);
            println!("  Database: {}", config.database.url);
            println!(
                "  Vision: {} ({})",
                config.vision.model,
                match config.vision.provider {
                    VisionProvider::Anthropic => "anthropic",
                    VisionProvider::OpenAi => "openai",
                }
            );
            println!("  Known betting houses: {}", config.vocabulary.houses.len());
            println!();

            let key_var = match config.vision.provider {
                VisionProvider::Anthropic => "ANTHROPIC_API_KEY",
                VisionProvider::OpenAi => "OPENAI_API_KEY",
            };
            if std::env::var(key_var).is_ok() {
                println!("✓ {key_var} found in environment");
            } else {
                println!("⚠ {key_var} not set; slip analysis will fail at startup");
            }
        }
        Err(e) => {
            eprintln!("✗ Failed to load configuration: {e}");
            std::process::exit(1);
        }
    }
}
