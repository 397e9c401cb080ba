use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::remo::Device;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCondition {
    pub temperature: f64,

    pub temperature_created_at: DateTime,

    pub illuminance: f64,

    pub illuminance_created_at: DateTime,

    pub humidity: i64,

    pub humidity_created_at: DateTime,

    pub measured_at: DateTime,

    pub device: DeviceRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRef {
    pub id: String,

    pub name: String,
}

impl RoomCondition {
    pub fn new(device: &Device, measured_at: DateTime) -> Self {
        let events = &device.newest_events;

        Self {
            temperature: events.temperature.val,
            temperature_created_at: DateTime::from_chrono(events.temperature.created_at),
            illuminance: events.illuminance.val,
            illuminance_created_at: DateTime::from_chrono(events.illuminance.created_at),
            humidity: events.humidity.val,
            humidity_created_at: DateTime::from_chrono(events.humidity.created_at),
            measured_at,
            device: DeviceRef {
                id: device.id.clone(),
                name: device.name.clone(),
            },
        }
    }
}
