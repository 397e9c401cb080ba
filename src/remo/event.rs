use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading<T> {
    pub val: T,

    pub created_at: DateTime<Utc>,
}

impl<T: Default> Default for Reading<T> {
    fn default() -> Self {
        Self {
            val: T::default(),
            created_at: DateTime::UNIX_EPOCH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NewestEvents {
    #[serde(rename = "hu", default)]
    pub humidity: Reading<i64>,

    #[serde(rename = "il", default)]
    pub illuminance: Reading<f64>,

    #[serde(rename = "te", default)]
    pub temperature: Reading<f64>,
}
