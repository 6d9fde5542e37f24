// Observation record passed between pipeline models.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use super::quantity::EMBODIED_CARBON;

/// An open-ended, insertion-ordered mapping of hyphenated keys to JSON values, plus the
/// derived embodied-carbon value once computed.
///
/// The derived value is kept as an `f64` so NaN and infinities survive in memory; in the
/// JSON view (and on the wire) non-finite values become `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Record {
    fields: Map<String, Value>,
    embodied_carbon: Option<f64>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite a field. Overwriting keeps the key's original position.
    /// Writing `embodied-carbon` directly replaces the derived value too.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if key == EMBODIED_CARBON {
            self.embodied_carbon = value.as_f64();
        }
        self.fields.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Derived value: set by the model, or read from an incoming numeric `embodied-carbon`.
    pub fn embodied_carbon(&self) -> Option<f64> {
        self.embodied_carbon
    }

    /// Attach the derived value under `embodied-carbon`.
    pub fn set_embodied_carbon(&mut self, value: f64) {
        let json = Number::from_f64(value).map_or(Value::Null, Value::Number);
        self.fields.insert(EMBODIED_CARBON.to_string(), json);
        self.embodied_carbon = Some(value);
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        let embodied_carbon = fields.get(EMBODIED_CARBON).and_then(Value::as_f64);
        Self {
            fields,
            embodied_carbon,
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.into_fields())
    }
}

/// Equal when the JSON views match and the derived values agree, NaN included.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        let derived_eq = match (self.embodied_carbon, other.embodied_carbon) {
            (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
            (a, b) => a.is_none() && b.is_none(),
        };
        self.fields == other.fields && derived_eq
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
