//! evonet - CLI entry point
//!
//! Train, inspect, and initialize evolvable feed-forward networks.

use clap::{Parser, Subcommand};
use evonet::{Network, NetworkConfig, NetworkExport, TrainingExample};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "evonet")]
#[command(version)]
#[command(about = "Evolvable feed-forward neural network engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },

    /// Train a network on a JSON dataset
    Train {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Dataset file: JSON array of {input, output} examples
        #[arg(short, long)]
        data: PathBuf,

        /// Number of passes over the dataset
        #[arg(short, long, default_value = "1000")]
        epochs: u64,

        /// Resume from a previously exported network
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Where to write the trained network
        #[arg(short, long, default_value = "network.bin")]
        output: PathBuf,
    },

    /// Print a summary of an exported network
    Inspect {
        /// Export file
        export: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { output } => {
            let config = NetworkConfig::default();
            config.save(&output)?;
            log::info!("Wrote default config to {}", output.display());
            Ok(())
        }

        Commands::Train { config, data, epochs, resume, output } => {
            train(config, data, epochs, resume, output)
        }

        Commands::Inspect { export } => inspect(export),
    }
}

fn train(
    config_path: PathBuf,
    data_path: PathBuf,
    epochs: u64,
    resume: Option<PathBuf>,
    output: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(&data_path)?;
    let examples: Vec<TrainingExample> = serde_json::from_str(&contents)?;
    if examples.is_empty() {
        return Err("dataset is empty".into());
    }

    let mut net = match resume {
        Some(path) => {
            log::info!("Resuming from {}", path.display());
            Network::from_export(&NetworkExport::load(path)?)?
        }
        None => {
            let config = NetworkConfig::from_file(&config_path)?;
            Network::new(config)?
        }
    };

    log::info!(
        "Training on {} examples for {} epochs ({} inputs, {} outputs)",
        examples.len(),
        epochs,
        net.input_count(),
        net.output_count()
    );

    let report_every = (epochs / 10).max(1);
    for epoch in 0..epochs {
        let mut squared_error = 0.0;
        for example in &examples {
            let out = net.train(example)?;
            squared_error += out
                .iter()
                .zip(&example.output)
                .map(|(o, ideal)| (o - ideal).powi(2))
                .sum::<f64>();
        }
        if epoch % report_every == 0 || epoch + 1 == epochs {
            log::info!("epoch {:>6}: mse {:.6}", epoch, squared_error / examples.len() as f64);
        }
    }

    net.export().save(&output)?;
    log::info!("Saved trained network to {}", output.display());
    Ok(())
}

fn inspect(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let export = NetworkExport::load(&path)?;
    let net = Network::from_export(&export)?;

    println!("=== Network Export: {} ===", path.display());
    println!("Learning rate: {}", export.config.learning_rate);
    println!("Momentum: {}", export.config.momentum);
    println!(
        "Nodes: {} live ({} input / {} hidden / {} output), {} disabled",
        net.nodes().len(),
        net.input_count(),
        net.hidden_count(),
        net.output_count(),
        net.junk_nodes().len()
    );
    println!(
        "Connections: {} live, {} disabled",
        net.connections().len(),
        net.junk_connections().len()
    );

    if let Some(max) = net.connections().iter().map(|c| c.innovation()).max() {
        println!("Highest innovation number: {}", max);
    }

    Ok(())
}
