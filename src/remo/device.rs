use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::remo::NewestEvents;

// Ref: https://swagger.nature.global/ (GET /1/devices)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,

    pub name: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    pub firmware_version: String,

    pub temperature_offset: i64,

    pub humidity_offset: i64,

    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub newest_events: NewestEvents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    pub nickname: String,

    pub superuser: bool,
}

pub fn decode_devices(body: &[u8]) -> Result<Vec<Device>> {
    serde_json::from_slice(body).context("failed to decode device list")
}
