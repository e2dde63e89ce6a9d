//! Yggdrasil CLI entry point.

use clap::Parser;

use yggdrasil::cli::{commands, handle_error, Cli, Commands};
use yggdrasil::infrastructure::config::ConfigLoader;
use yggdrasil::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();

    // Nothing else starts if the configuration cannot be loaded.
    let config = match ConfigLoader::load_with(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&config.logging, config.settings.debug) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let settings = &config.settings;
    let result = match cli.command {
        Commands::Show => commands::show::execute(settings, cli.json),
        Commands::Get { key } => commands::get::execute(settings, key, cli.json),
        Commands::Check => commands::check::execute(settings, cli.json),
        Commands::Codes => commands::codes::execute(settings, cli.json),
        Commands::Template => commands::template::execute(&config, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
