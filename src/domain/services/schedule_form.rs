#[cfg(test)]
#[path = "schedule_form_test.rs"]
mod tests;

use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::SecondsFormat;
use chrono::TimeZone;
use chrono::Utc;

use crate::domain::models::NewAppointment;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Invalid date or time.")]
    InvalidDateTime,
}

/// Raw booking form values. Selections of `None` are the placeholder option.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleForm {
    pub professional_id: Option<i64>,
    pub service_id: Option<i64>,
    pub date: String,
    pub time: String,
}

impl ScheduleForm {
    pub fn validate(&self, user_id: i64) -> Result<NewAppointment, FormError> {
        return self.validate_in(user_id, &Local);
    }

    /// Presence check only, then the date and time are read as wall-clock
    /// time in `tz`.
    pub fn validate_in<Tz: TimeZone>(
        &self,
        user_id: i64,
        tz: &Tz,
    ) -> Result<NewAppointment, FormError> {
        let (professional_id, service_id) = match (self.professional_id, self.service_id) {
            (Some(professional_id), Some(service_id)) => (professional_id, service_id),
            _ => return Err(FormError::MissingFields),
        };

        if self.date.trim().is_empty() || self.time.trim().is_empty() {
            return Err(FormError::MissingFields);
        }

        return Ok(NewAppointment {
            user_id,
            professional_id,
            service_id,
            start_time: interchange_timestamp(&self.date, &self.time, tz)?,
        });
    }
}

/// Combines a `YYYY-MM-DD` date and a `HH:MM` time into the UTC interchange
/// format, e.g. `2026-10-20T17:30:00.000Z`.
pub fn interchange_timestamp<Tz: TimeZone>(
    date: &str,
    time: &str,
    tz: &Tz,
) -> Result<String, FormError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| return FormError::InvalidDateTime)?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .or_else(|_| return NaiveTime::parse_from_str(time.trim(), "%H:%M:%S"))
        .map_err(|_| return FormError::InvalidDateTime)?;

    let local = tz
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or(FormError::InvalidDateTime)?;

    return Ok(local
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true));
}
