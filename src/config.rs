use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_name")]
    pub name: String,
    /// Static parameters handed to `configure`. Stored by the model, never interpreted.
    #[serde(default, rename = "static")]
    pub static_params: Option<toml::Table>,
    /// Passed to `authenticate` when present.
    #[serde(default)]
    pub auth: Option<toml::Table>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            static_params: None,
            auth: None,
        }
    }
}

fn default_model_name() -> String {
    "sci-m".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// JSON file holding the batch (an array of records).
    pub input_path: String,
    /// Where to write the enriched batch; stdout when unset.
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl ModelConfig {
    /// Static params as JSON, the shape models receive them in.
    pub fn static_params_json(&self) -> anyhow::Result<Option<Value>> {
        self.static_params
            .as_ref()
            .map(|t| serde_json::to_value(t).map_err(Into::into))
            .transpose()
    }

    pub fn auth_json(&self) -> anyhow::Result<Option<Value>> {
        self.auth
            .as_ref()
            .map(|t| serde_json::to_value(t).map_err(Into::into))
            .transpose()
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.model.name.trim().is_empty(),
            "model.name must be non-empty"
        );
        anyhow::ensure!(
            !self.run.input_path.is_empty(),
            "run.input_path must be non-empty"
        );
        if let Some(out) = &self.run.output_path {
            anyhow::ensure!(
                !out.is_empty(),
                "run.output_path must be non-empty when set"
            );
        }
        Ok(())
    }
}
