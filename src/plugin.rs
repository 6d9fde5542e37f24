// Hosting contract every pipeline model conforms to.

use std::future::Future;

use serde_json::Value;

use crate::error::InputValidationError;
use crate::models::Record;

/// Lifecycle a host pipeline drives: `configure` once, optionally `authenticate`, then any
/// number of `execute` calls.
pub trait ModelPlugin {
    /// Store credentials. Models that need none just keep them for inspection.
    fn authenticate(&mut self, auth_params: Value);

    /// Store static parameters and hand the model back for chained setup.
    fn configure(&mut self, static_params: Option<Value>) -> &mut Self;

    /// Enrich a batch of records. Resolves to the same records, same order.
    fn execute(
        &self,
        inputs: Vec<Record>,
    ) -> impl Future<Output = Result<Vec<Record>, InputValidationError>> + Send;
}

/// Turn an untyped batch into records, rejecting anything that is not an array of objects.
pub fn records_from_value(inputs: Value) -> Result<Vec<Record>, InputValidationError> {
    let Value::Array(items) = inputs else {
        return Err(InputValidationError::MissingInput);
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(Record::from(fields)),
            _ => Err(InputValidationError::NotARecord { index }),
        })
        .collect()
}
