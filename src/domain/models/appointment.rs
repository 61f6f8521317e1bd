#[cfg(test)]
#[path = "appointment_test.rs"]
mod tests;

use std::fmt;

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDateTime;
use chrono::SecondsFormat;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserializer;
use serde::Serializer;
use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    Scheduled,
    Cancelled,
    /// Any other state the backend reports, kept verbatim.
    Other(String),
}

impl From<String> for AppointmentStatus {
    fn from(value: String) -> AppointmentStatus {
        match value.as_str() {
            "Agendado" | "Scheduled" => return AppointmentStatus::Scheduled,
            "Cancelado" | "Cancelled" | "Canceled" => return AppointmentStatus::Cancelled,
            _ => return AppointmentStatus::Other(value),
        }
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> String {
        match status {
            AppointmentStatus::Scheduled => return "Agendado".to_string(),
            AppointmentStatus::Cancelled => return "Cancelado".to_string(),
            AppointmentStatus::Other(value) => return value,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => return write!(f, "Scheduled"),
            AppointmentStatus::Cancelled => return write!(f, "Cancelled"),
            AppointmentStatus::Other(value) => return write!(f, "{value}"),
        }
    }
}

/// Parses backend timestamps. Offset-aware values are taken as is, naive ones
/// are read as local wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| return NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()?;

    return Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| return local.with_timezone(&Utc));
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
    return parse_timestamp(&raw)
        .ok_or_else(|| return <D::Error as serde::de::Error>::custom(format!("invalid timestamp: {raw}")));
}

fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    return serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true));
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub user_id: i64,
    pub professional_id: i64,
    pub service_id: i64,
    #[serde(
        deserialize_with = "deserialize_timestamp",
        serialize_with = "serialize_timestamp"
    )]
    pub start_time: DateTime<Utc>,
    #[serde(
        deserialize_with = "deserialize_timestamp",
        serialize_with = "serialize_timestamp"
    )]
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn is_scheduled(&self) -> bool {
        return self.status == AppointmentStatus::Scheduled;
    }

    pub fn is_cancelled(&self) -> bool {
        return self.status == AppointmentStatus::Cancelled;
    }
}

/// Stable ascending sort by start time. Appointments sharing a start time keep
/// the order the backend returned them in.
pub fn sort_by_start(appointments: &mut [Appointment]) {
    appointments.sort_by_key(|appointment| return appointment.start_time);
}

/// Booking request as sent to the backend. `start_time` is already in the
/// interchange format (UTC, millisecond precision, `Z` suffix).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub user_id: i64,
    pub professional_id: i64,
    pub service_id: i64,
    pub start_time: String,
}
