//! ayah-widget - resolve the payload of an embeddable verse widget
//!
//! Runs the data-assembly pipeline against the live content API and prints
//! the resulting payload as JSON on stdout.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use ayah_widget::{telemetry, Args, HttpQuranApi, WidgetPipeline};

/// Exit code for requests rejected by the pipeline
const EXIT_BAD_REQUEST: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    telemetry::init_tracing(&args.log_level, args.log_json);

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }
    let request = args
        .request
        .widget_request()
        .map_err(anyhow::Error::msg)?;

    info!(api = %args.api_url, qna = %args.qna_url, "Starting widget data assembly");

    let api = HttpQuranApi::new(args.api_config())?;
    let pipeline = WidgetPipeline::new(Arc::new(api));

    match pipeline.assemble_widget_data(request).await {
        Ok(data) => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&data)?
            } else {
                serde_json::to_string(&data)?
            };
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            error!(status = e.status(), "{}", e);
            eprintln!("{} {}", e.status(), e);
            std::process::exit(EXIT_BAD_REQUEST);
        }
    }
}
