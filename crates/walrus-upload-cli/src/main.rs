//! walrus-upload — command-line client for storing blobs on Walrus.
//!
//! Uploads each file to the publisher and prints the storage receipt:
//! certification status, the aggregator read link, the Sui explorer link,
//! and the epoch the blob is stored until. Endpoints come from
//! WALRUS_PUBLISHER_URL / WALRUS_AGGREGATOR_URL / SUI_NETWORK or flags,
//! defaulting to testnet.

use anyhow::Result;
use clap::Parser;

use walrus_upload_cli::{init_tracing, read_selected_file};
use walrus_upload_client::{BlobUploader, SubmitOutcome};
use walrus_upload_core::{EndpointConfig, UploadedBlob};

#[derive(Parser)]
#[command(name = "walrus-upload", about = "Upload blobs to a Walrus publisher")]
struct Cli {
    /// Files to upload, one store request per file
    #[arg(required = true)]
    files: Vec<std::path::PathBuf>,

    /// Walrus publisher URL (write endpoint)
    #[arg(long)]
    publisher_url: Option<String>,

    /// Walrus aggregator URL (read endpoint)
    #[arg(long)]
    aggregator_url: Option<String>,

    /// Number of epochs the blobs should be stored for
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    epochs: u64,

    /// Print the upload history as JSON instead of result cards
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = EndpointConfig::from_env();
    if let Some(url) = cli.publisher_url {
        config.publisher_url = url;
    }
    if let Some(url) = cli.aggregator_url {
        config.aggregator_url = url;
    }

    let mut uploader = BlobUploader::new(&config);
    uploader.form.epochs = cli.epochs;

    let mut failures = 0usize;
    for path in &cli.files {
        let file = read_selected_file(path)?;
        println!("Uploading {}...", path.display());
        uploader.form.select_file(file);

        match uploader.submit().await {
            SubmitOutcome::Stored => {}
            _ => {
                failures += 1;
                if let Some(message) = uploader.error() {
                    eprintln!("{}", message);
                }
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(uploader.history())?);
    } else {
        for blob in uploader.history() {
            print_card(blob);
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} uploads failed", failures, cli.files.len());
    }
    Ok(())
}

fn print_card(blob: &UploadedBlob) {
    println!();
    println!("{}", blob.status);
    println!("  Blob ID: {} ({})", blob.blob_id, blob.blob_url);
    println!("  {}: {} ({})", blob.sui_ref_kind, blob.sui_ref, blob.sui_url);
    println!("  Stored until epoch: {}", blob.end_epoch);
}
