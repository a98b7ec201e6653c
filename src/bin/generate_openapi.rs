//! Writes the OpenAPI document for the premium API to disk.
//!
//! Usage: `cargo run --bin generate-openapi [output-path]` (default `openapi.json`).

use car_premium_api::api::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "openapi.json".to_string());

    let spec = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(&path, spec)?;

    println!("OpenAPI document written to {}", path);
    Ok(())
}
