//! # Siren Sample
//!
//! Requests `GET app://self/root?id=5` and prints the action-augmented body.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p siren-sample
//! ```

use serde_json::json;
use siren_actions::tracing::setup_tracing;
use siren_actions::RequestMethod;
use siren_sample::lifecycle::SirenSystem;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting siren sample");
    let system = SirenSystem::new().map_err(|e| e.to_string())?;

    let span = tracing::info_span!("root_request");
    let root = async {
        info!("Requesting root");
        system
            .request(RequestMethod::Get, "app://self/root", vec![json!("5")])
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let rendered = serde_json::to_string_pretty(&root.body).map_err(|e| e.to_string())?;
    println!("{rendered}");

    info!(actions = root.actions().map(|a| a.len()).unwrap_or_default(), "Done");
    Ok(())
}
