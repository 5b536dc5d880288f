//! Portable, self-describing representation of analyzer configuration.
//!
//! Every analyzer dumps itself to a [`SerializedForm`]: a JSON object whose
//! reserved `_class` key names the analyzer kind, and whose other keys hold
//! the analyzer's configuration. Composite analyzers nest the forms of their
//! children in an array, so the whole analysis tree becomes one value.
//!
//! ```text
//! {
//!   "_class": "PolyAnalyzer",
//!   "language": "en",
//!   "analyzers": [
//!     { "_class": "LowercaseFilter" },
//!     { "_class": "RegexTokenizer", "pattern": "\\w+(?:['\\x{2019}]\\w+)*" },
//!     { "_class": "SnowballStemmer", "language": "en" }
//!   ]
//! }
//! ```
//!
//! Keys are kept sorted, so two forms built from equal analyzers are equal
//! values and encode to identical JSON text.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::serialized::SerializedForm;
//!
//! let form = SerializedForm::new("SnowballStemmer").with_field("language", "en");
//! assert_eq!(form.class().unwrap(), "SnowballStemmer");
//! assert_eq!(form.get_str("language").unwrap(), "en");
//!
//! let json = form.to_json().unwrap();
//! assert_eq!(SerializedForm::from_json(&json).unwrap(), form);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SarissaError};

/// Key holding the analyzer kind tag.
pub const CLASS_KEY: &str = "_class";

/// A tagged mapping from field name to value describing one analyzer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializedForm {
    fields: Map<String, Value>,
}

impl SerializedForm {
    /// Create a form carrying only the kind tag.
    pub fn new<S: Into<String>>(class: S) -> Self {
        let mut fields = Map::new();
        fields.insert(CLASS_KEY.to_string(), Value::String(class.into()));
        SerializedForm { fields }
    }

    /// Add a field to the form.
    pub fn with_field<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field holding an ordered sequence of nested forms.
    pub fn with_forms<K, I>(self, key: K, forms: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = SerializedForm>,
    {
        let values: Vec<Value> = forms.into_iter().map(Value::from).collect();
        self.with_field(key, values)
    }

    /// Get the kind tag of this form.
    pub fn class(&self) -> Result<&str> {
        match self.fields.get(CLASS_KEY) {
            Some(Value::String(class)) => Ok(class),
            Some(_) => Err(SarissaError::malformed(format!(
                "'{CLASS_KEY}' must be a string"
            ))),
            None => Err(SarissaError::malformed(format!(
                "missing '{CLASS_KEY}' type tag"
            ))),
        }
    }

    /// Check that this form carries the given kind tag.
    pub fn expect_class(&self, expected: &str) -> Result<()> {
        let class = self.class()?;
        if class == expected {
            Ok(())
        } else {
            Err(SarissaError::malformed(format!(
                "expected a '{expected}' form, found '{class}'"
            )))
        }
    }

    /// Get a raw field value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Check whether a field is present.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterate over all fields, including the kind tag, in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Get a required string field.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.get_opt_str(key)?
            .ok_or_else(|| self.missing(key))
    }

    /// Get an optional string field. A present non-string value is an error.
    pub fn get_opt_str(&self, key: &str) -> Result<Option<&str>> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(self.mistyped(key, "a string")),
        }
    }

    /// Get a required boolean field.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        match self.fields.get(key) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.mistyped(key, "a boolean")),
            None => Err(self.missing(key)),
        }
    }

    /// Get a required array of strings.
    pub fn get_strings(&self, key: &str) -> Result<Vec<String>> {
        let values = self.get_array(key)?;
        values
            .iter()
            .map(|value| match value {
                Value::String(s) => Ok(s.clone()),
                _ => Err(self.mistyped(key, "an array of strings")),
            })
            .collect()
    }

    /// Get a required array of nested forms, in order.
    pub fn get_forms(&self, key: &str) -> Result<Vec<SerializedForm>> {
        let values = self.get_array(key)?;
        values
            .iter()
            .map(|value| SerializedForm::try_from(value.clone()))
            .collect()
    }

    fn get_array(&self, key: &str) -> Result<&Vec<Value>> {
        match self.fields.get(key) {
            Some(Value::Array(values)) => Ok(values),
            Some(_) => Err(self.mistyped(key, "an array")),
            None => Err(self.missing(key)),
        }
    }

    fn missing(&self, key: &str) -> SarissaError {
        SarissaError::malformed(format!(
            "{} is missing required field '{key}'",
            self.describe()
        ))
    }

    fn mistyped(&self, key: &str, expected: &str) -> SarissaError {
        SarissaError::malformed(format!(
            "field '{key}' of {} must be {expected}",
            self.describe()
        ))
    }

    fn describe(&self) -> String {
        match self.class() {
            Ok(class) => format!("'{class}'"),
            Err(_) => "untagged form".to_string(),
        }
    }

    /// Encode this form as compact JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode this form as pretty-printed JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a form from JSON text.
    ///
    /// Text that is not JSON fails with a JSON error. A JSON value that is not
    /// a tagged object fails with `MalformedSerializedForm`.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        SerializedForm::try_from(value)
    }
}

impl TryFrom<Value> for SerializedForm {
    type Error = SarissaError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => {
                let form = SerializedForm { fields };
                form.class()?;
                Ok(form)
            }
            other => Err(SarissaError::malformed(format!(
                "expected an object, found {other}"
            ))),
        }
    }
}

impl From<SerializedForm> for Value {
    fn from(form: SerializedForm) -> Self {
        Value::Object(form.fields)
    }
}
