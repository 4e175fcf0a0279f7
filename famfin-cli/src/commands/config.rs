use std::fs;

use anyhow::{Context, Result};
use shared::config::client::ClientConfig;

/// Writes `famfin.<format>` with the default client settings to the current
/// directory.
///
/// # Errors
/// Returns an error if the format is unsupported or if writing the file fails.
pub fn generate_config(format: &str) -> Result<()> {
    let serialized = ClientConfig::with_defaults().render(format)?;
    let file_name = format!("famfin.{format}");

    fs::write(&file_name, serialized.as_bytes())
        .with_context(|| format!("failed to write {file_name}"))?;

    println!("Configuration file '{file_name}' generated successfully.");
    Ok(())
}
