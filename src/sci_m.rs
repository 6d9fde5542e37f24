// SCI-M: embodied carbon apportioned to a workload.
// M = TE * (TiR / EL) * (RR / ToR)

use serde_json::Value;

use crate::error::InputValidationError;
use crate::models::{NumberOrString, Quantity, Record};
use crate::plugin::{ModelPlugin, records_from_value};

/// Carbon apportionment calculator. Stateless apart from the params the host hands it.
#[derive(Debug, Clone, Default)]
pub struct SciMModel {
    name: Option<String>,
    static_params: Option<Value>,
    auth_params: Option<Value>,
}

impl SciMModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn static_params(&self) -> Option<&Value> {
        self.static_params.as_ref()
    }

    pub fn auth_params(&self) -> Option<&Value> {
        self.auth_params.as_ref()
    }

    /// Execute on an untyped batch; anything but an array of objects is a shape error.
    pub async fn execute_value(
        &self,
        inputs: Value,
    ) -> Result<Vec<Record>, InputValidationError> {
        let records = records_from_value(inputs)?;
        self.execute(records).await
    }

    /// Validate and enrich every record. The first invalid record rejects the whole batch.
    pub fn enrich(&self, mut records: Vec<Record>) -> Result<Vec<Record>, InputValidationError> {
        tracing::debug!(records = records.len(), "sci-m: executing batch");
        for (index, record) in records.iter_mut().enumerate() {
            validate(record, index)?;
            let m = embodied_carbon(
                resolve(record, Quantity::TotalEmbodiedEmissions),
                resolve(record, Quantity::Duration),
                resolve(record, Quantity::ExpectedLifespan),
                resolve(record, Quantity::ResourcesReserved),
                resolve(record, Quantity::TotalResources),
            );
            if !m.is_finite() {
                tracing::warn!(index, embodied_carbon = m, "sci-m: non-finite embodied carbon");
            } else {
                tracing::debug!(index, embodied_carbon = m, "sci-m: record enriched");
            }
            record.set_embodied_carbon(m);
        }
        Ok(records)
    }
}

impl ModelPlugin for SciMModel {
    fn authenticate(&mut self, auth_params: Value) {
        self.auth_params = Some(auth_params);
    }

    fn configure(&mut self, static_params: Option<Value>) -> &mut Self {
        self.static_params = static_params;
        self
    }

    async fn execute(&self, inputs: Vec<Record>) -> Result<Vec<Record>, InputValidationError> {
        self.enrich(inputs)
    }
}

/// `M = TE * (TiR / EL) * (RR / ToR)`. No zero guard: IEEE-754 results pass through.
pub fn embodied_carbon(te: f64, tir: f64, el: f64, rr: f64, tor: f64) -> f64 {
    te * (tir / el) * (rr / tor)
}

/// Presence check in reporting order; a quantity is present if any accepted key is.
fn validate(record: &Record, index: usize) -> Result<(), InputValidationError> {
    for quantity in Quantity::PRESENCE_ORDER {
        let present = quantity
            .accepted_keys()
            .iter()
            .any(|key| record.contains_key(key));
        if !present {
            return Err(InputValidationError::MissingField {
                field: quantity.reported_key(),
                index,
                unit: quantity.unit(),
            });
        }
    }
    Ok(())
}

/// Value of `quantity`: first candidate key that qualifies, coerced to f64; 0.0 if none.
fn resolve(record: &Record, quantity: Quantity) -> f64 {
    quantity
        .value_keys()
        .iter()
        .filter_map(|key| record.get(key))
        .map(NumberOrString::from_value)
        .find(|value| !quantity.is_aliased() || value.is_number_or_string())
        .map_or(0.0, |value| value.to_f64())
}
