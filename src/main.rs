use std::io;
use std::process;

use log::error;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

use catalog_index::catalog::Catalog;
use catalog_index::config::Config;
use catalog_index::error::{CatalogError, Result};
use catalog_index::menu::{self, MenuConfig};

/// What the program was doing when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Load,
    Menu,
}

fn failure_message(stage: Stage, err: &CatalogError) -> String {
    match stage {
        Stage::Load => format!("Error loading products: {}", err),
        Stage::Menu => format!("Error: {}", err),
    }
}

fn initialize_logging(config: &Config) {
    // Only fails if a logger is already installed.
    let _ = TermLogger::init(
        config.log_level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn load(config: &Config) -> Result<Catalog> {
    println!("Product Search Program");
    println!("=====================");
    println!("Using file: {}", config.path.display());
    println!("Loading products...");

    let mut catalog = Catalog::new();
    let report = catalog.load_csv(&config.path)?;
    println!("Loaded {} products.", catalog.len());
    if !report.skipped.is_empty() {
        println!("Skipped {} malformed records.", report.skipped.len());
    }
    Ok(catalog)
}

fn interact(catalog: &Catalog, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    menu::run(catalog, stdin.lock(), io::stdout(), &MenuConfig::from(config))?;
    Ok(())
}

fn fail(stage: Stage, err: CatalogError) -> ! {
    error!("{}", err);
    eprintln!("{}", failure_message(stage, &err));
    process::exit(err.exit_code());
}

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err @ CatalogError::Help) => {
            println!("{}", err);
            process::exit(err.exit_code());
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(err.exit_code());
        }
    };
    initialize_logging(&config);

    let catalog = match load(&config) {
        Ok(catalog) => catalog,
        Err(err) => fail(Stage::Load, err),
    };
    if let Err(err) = interact(&catalog, &config) {
        fail(Stage::Menu, err);
    }
}
