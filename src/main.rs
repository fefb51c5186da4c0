//! Command-line front for the Ink and Feather upload client.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkfeather_upload::acquire;
use inkfeather_upload::config::Config;
use inkfeather_upload::controller::UploadController;
use inkfeather_upload::webhook::HttpWebhookClient;

#[derive(Parser)]
#[command(name = "inkfeather-upload")]
#[command(about = "Upload a handwritten document image for text extraction")]
#[command(version)]
struct Cli {
    /// Path to the document image (JPG, PNG, WebP, HEIC)
    file: PathBuf,

    /// Email address the extracted text is sent to
    #[arg(short, long, env = "INKFEATHER_EMAIL")]
    email: String,

    /// Optional phone number
    #[arg(short, long, env = "INKFEATHER_PHONE", default_value = "")]
    phone: String,

    /// Print the submission receipt as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkfeather_upload=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(environment = ?config.environment, endpoint = %config.webhook_url(), "starting upload");

    let file = match acquire::from_path(&cli.file).await {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    println!("{} ({:.2} MB)", file.name, file.size_mb());

    let client = HttpWebhookClient::new(config.webhook_url());
    let mut controller = UploadController::new(client, &config);

    if let Err(err) = controller.select_from_picker(file) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    controller.set_email(cli.email);
    controller.set_phone(cli.phone);

    match controller.submit().await {
        Ok(receipt) => {
            if cli.json {
                match serde_json::to_string_pretty(&receipt) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(err) => {
                        eprintln!("Failed to render receipt: {}", err);
                        return ExitCode::FAILURE;
                    }
                }
            } else if let Some(message) = &controller.status().success {
                println!("{}", message);
            }
            ExitCode::SUCCESS
        }
        Err(_) => {
            // The status object carries the user-facing message
            if let Some(message) = &controller.status().error {
                eprintln!("{}", message);
            }
            ExitCode::FAILURE
        }
    }
}
