// Host harness: load a batch from disk, drive the model lifecycle, write the result.
// The model itself never touches I/O; everything file-related lives here.

use crate::config::AppConfig;
use crate::models::Record;
use crate::plugin::ModelPlugin;
use crate::sci_m::SciMModel;
use anyhow::Context;
use serde_json::Value;
use std::path::Path;

/// Read and parse the JSON batch at `path`. Shape is checked by the model, not here.
pub fn load_batch(path: impl AsRef<Path>) -> anyhow::Result<Value> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading batch {}", path.display()))?;
    let batch = serde_json::from_str(&s)
        .with_context(|| format!("parsing batch {}", path.display()))?;
    Ok(batch)
}

/// Build a model from config: name, then `configure`, then `authenticate` if creds exist.
pub fn build_model(config: &AppConfig) -> anyhow::Result<SciMModel> {
    let mut model = SciMModel::new().with_name(config.model.name.clone());
    model.configure(config.model.static_params_json()?);
    if let Some(auth) = config.model.auth_json()? {
        model.authenticate(auth);
    }
    Ok(model)
}

/// Load the configured batch and run it through the model.
pub async fn run(config: &AppConfig) -> anyhow::Result<Vec<Record>> {
    let model = build_model(config)?;
    let batch = load_batch(&config.run.input_path)?;
    let records = model
        .execute_value(batch)
        .await
        .with_context(|| {
            format!(
                "model {} rejected {}",
                config.model.name, config.run.input_path
            )
        })?;
    tracing::info!(
        model = %config.model.name,
        records = records.len(),
        "batch enriched"
    );
    Ok(records)
}

pub fn render(records: &[Record], pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(out)
}

/// Write rendered output to `output_path`, or stdout when unset.
pub fn write_output(config: &AppConfig, records: &[Record]) -> anyhow::Result<()> {
    let out = render(records, config.run.pretty)?;
    match &config.run.output_path {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, out).with_context(|| format!("writing {}", path))?;
            tracing::info!(path = %path, "output written");
        }
        None => println!("{}", out),
    }
    Ok(())
}
