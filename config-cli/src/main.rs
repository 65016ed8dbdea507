use clap::{Parser, Subcommand};
use ledstrip_config::{
    topics::{Feature, TopicSet},
    Config, LoadError,
};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::error;

/// Tool to inspect and validate LED strip controller configuration files.
#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a configuration file, reporting the first problem found
    Validate {
        /// Configuration file
        file: PathBuf,
    },
    /// Print the MQTT topics and OTA hostname a configuration derives
    Topics {
        /// Configuration file
        file: PathBuf,
    },
    /// Print a placeholder configuration to be edited per deployment
    Template,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        error!("{e}");
        ::std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), LoadError> {
    match command {
        Command::Validate { file } => {
            let config = Config::from_path(&file)?;
            println!(
                "{}: module {} is valid",
                file.display(),
                config.device.module_name
            );
        }
        Command::Topics { file } => {
            let config = Config::from_path(&file)?;
            let topics = TopicSet::derive(&config.device)?;

            println!("base                  {}", topics.base());
            for feature in Feature::iter() {
                let segment = feature.topic_segment();
                println!("{segment:<8} state        {}", topics.state(feature)?);
                println!("{segment:<8} command      {}", topics.command(feature)?);
            }
            println!("availability          {}", topics.availability()?);
            println!("ota hostname          {}", config.ota.hostname(&config.device)?);
        }
        Command::Template => {
            print!("{}", Config::template().to_toml_string()?);
        }
    }

    Ok(())
}
