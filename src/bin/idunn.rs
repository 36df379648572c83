//! idunn - Smart Grocery Assistant CLI
//!
//! Uploads grocery images to the Prediction Service and prints what it
//! thinks they are.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};

use idunn::{Config, IdunnError, PredictClient, Session, render};

/// Smart Grocery Assistant client
#[derive(Parser)]
#[command(name = "idunn")]
#[command(version = idunn::PKG_VERSION)]
#[command(about = "Smart Grocery Assistant client")]
struct Args {
    /// Prediction Service base URL (overrides the config file)
    #[arg(short, long, env = "IDUNN_ENDPOINT")]
    endpoint: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload an image and print the prediction
    Predict {
        /// Image file to upload
        file: Option<PathBuf>,
    },

    /// Check that the service is reachable
    Health,

    /// Select images and request predictions interactively
    Interactive,
}

#[tokio::main]
async fn main() {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    let endpoint = args.endpoint.unwrap_or(config.service.base_url);
    let client = PredictClient::with_base_url(endpoint);

    match args.command {
        Command::Predict { file } => predict(client, file).await,
        Command::Health => health(client).await,
        Command::Interactive => interactive(client).await,
    }
}

async fn predict(client: PredictClient, file: Option<PathBuf>) {
    let mut session = Session::new(client);
    if let Some(path) = file {
        session.select_file(path);
    }

    match session.submit().await {
        Ok(prediction) => println!("{}", render::prediction_text(prediction)),
        Err(e) => fail(&e),
    }
}

async fn health(client: PredictClient) {
    match client.health().await {
        Ok(status) => println!("{}", status.message),
        Err(e) => fail(&e),
    }
}

/// Interactive loop over one session: select an image, predict, repeat.
/// Request errors are reported and the loop continues; only end-of-input
/// from the terminal exits.
async fn interactive(client: PredictClient) {
    println!("idunn {}", idunn::version::version_string());
    println!("service: {}", client.base_url());

    let mut session = Session::new(client);

    loop {
        println!();
        match session.selected_file() {
            Some(file) => println!("selected: {}", file.name()),
            None => println!("selected: (none)"),
        }
        if let Some(prediction) = session.result() {
            println!();
            println!("{}", render::prediction_text(prediction));
        }

        let Ok(choice) = Select::new()
            .with_prompt("action")
            .items(&["select image", "predict", "service status", "quit"])
            .default(0)
            .interact()
        else {
            return;
        };

        match choice {
            0 => {
                let Ok(path) = Input::<String>::new()
                    .with_prompt("image path")
                    .interact_text()
                else {
                    continue;
                };
                let file = session.select_file(path.trim());
                if !file.is_image() {
                    println!("note: '{}' does not look like an image file", file.name());
                }
            }
            1 => {
                if let Err(e) = session.submit().await {
                    report(&e);
                }
            }
            2 => match session.client().health().await {
                Ok(status) => println!("{}", status.message),
                Err(e) => report(&e),
            },
            _ => return,
        }
    }
}

/// Print the user-facing message for an error.
fn report(e: &IdunnError) {
    if e.is_validation() {
        eprintln!("Please select an image");
    } else {
        eprintln!("Error: {e}");
    }
}

fn fail(e: &IdunnError) -> ! {
    report(e);
    process::exit(1);
}
