use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Age assigned when a create request omits it or sends a falsy value
pub const DEFAULT_AGE: i64 = 18;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned id, unique among current records
    pub id: i64,
    pub name: String,
    /// Unique at insertion time (exact, case-sensitive)
    pub email: String,
    pub age: i64,
    /// Whether the account is active
    pub active: bool,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>, age: i64, active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            active,
        }
    }
}

/// Body of `POST /usuarios`
///
/// Fields are kept as raw JSON so presence can be judged by truthiness:
/// `null`, `false`, `0` and `""` all count as missing.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, alias = "nome")]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default, alias = "idade")]
    pub age: Option<Value>,
}

impl CreateUserRequest {
    /// Build a request from a decoded JSON body.
    /// Anything other than a well-formed object reads as `{}`.
    pub fn from_body(body: Value) -> Self {
        if !body.is_object() {
            return Self::default();
        }
        serde_json::from_value(body).unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        non_empty_str(self.name.as_ref())
    }

    pub fn email(&self) -> Option<&str> {
        non_empty_str(self.email.as_ref())
    }

    /// Whole-number age, or [`DEFAULT_AGE`] when absent, zero or not a whole number.
    /// `25.0` counts as 25.
    pub fn age_or_default(&self) -> i64 {
        self.age
            .as_ref()
            .and_then(whole_number)
            .filter(|age| *age != 0)
            .unwrap_or(DEFAULT_AGE)
    }
}

fn whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let n = value.as_f64()?;
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
