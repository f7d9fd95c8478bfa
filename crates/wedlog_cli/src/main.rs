//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `wedlog_core` linkage with deterministic output.
//! - Validate an address book file and print category counts.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use wedlog_core::{
    init_logging, AddressBookStorage, BookService, CoreConfig, JsonAddressBookStorage,
};

#[derive(Debug, Parser)]
#[command(name = "wedlog_cli", version, about = "Validate a WedLog address book file")]
struct Cli {
    /// Address book file; defaults to the configured `data_file`
    data_file: Option<PathBuf>,

    /// JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn resolve_data_file(&self, config: &CoreConfig) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| config.data_file.clone())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    println!("wedlog_core ping={}", wedlog_core::ping());
    println!("wedlog_core version={}", wedlog_core::core_version());

    let config = match cli.config.as_deref() {
        Some(path) => match CoreConfig::load_or_default(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("config error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => CoreConfig::default(),
    };

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let data_file = cli.resolve_data_file(&config);
    let mut service = BookService::new(JsonAddressBookStorage::new(data_file));
    match service.load() {
        Ok(()) => {
            let book = service.book();
            println!(
                "file={} persons={} guests={} vendors={}",
                service.storage().file_path().display(),
                book.persons().len(),
                book.guests().len(),
                book.vendors().len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("load error: {err}");
            ExitCode::FAILURE
        }
    }
}
