#[cfg(test)]
#[path = "view_models_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;
use chrono::Utc;

use super::ReferenceCache;
use crate::domain::models::sort_by_start;
use crate::domain::models::Appointment;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_APPOINTMENTS: &str = "You have no appointments.";
pub const APPOINTMENTS_FAILED: &str = "Failed to load appointments.";
pub const PROFESSIONAL_PLACEHOLDER: &str = "Select a professional";
pub const SERVICE_PLACEHOLDER: &str = "Select a service";

/// What the client last learned about the user's appointments.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AppointmentsState {
    #[default]
    Pending,
    Failed,
    Loaded(Vec<Appointment>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: Option<i64>,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentRow {
    pub id: i64,
    pub service: String,
    pub professional: String,
    pub when: String,
    pub status: String,
    pub cancellable: bool,
    pub cancelled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppointmentsView {
    Pending,
    Empty(String),
    Failed(String),
    Rows(Vec<AppointmentRow>),
}

impl AppointmentsView {
    pub fn rows(&self) -> &[AppointmentRow] {
        if let AppointmentsView::Rows(rows) = self {
            return rows;
        }

        return &[];
    }
}

pub fn format_price(currency: &str, price: f64) -> String {
    return format!("{currency} {price:.2}");
}

pub fn professional_items(cache: &ReferenceCache) -> Vec<String> {
    return cache
        .professionals()
        .iter()
        .map(|professional| {
            return format!("{} ({})", professional.name, professional.specialty);
        })
        .collect();
}

pub fn service_items(cache: &ReferenceCache, currency: &str) -> Vec<String> {
    return cache
        .services()
        .iter()
        .map(|service| {
            return format!(
                "{} ({} min) - {}",
                service.name,
                service.duration_minutes,
                format_price(currency, service.price)
            );
        })
        .collect();
}

/// Selection options, rebuilt from scratch with the placeholder first.
pub fn professional_options(cache: &ReferenceCache) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: None,
        label: PROFESSIONAL_PLACEHOLDER.to_string(),
    }];
    options.extend(cache.professionals().iter().map(|professional| {
        return SelectOption {
            value: Some(professional.id),
            label: professional.name.to_string(),
        };
    }));

    return options;
}

pub fn service_options(cache: &ReferenceCache, currency: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: None,
        label: SERVICE_PLACEHOLDER.to_string(),
    }];
    options.extend(cache.services().iter().map(|service| {
        return SelectOption {
            value: Some(service.id),
            label: format!("{} ({})", service.name, format_price(currency, service.price)),
        };
    }));

    return options;
}

pub fn format_when<Tz: TimeZone>(start: &DateTime<Utc>, end: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    return format!(
        "{} - {}",
        start.with_timezone(tz).format("%d/%m/%Y %H:%M"),
        end.with_timezone(tz).format("%H:%M")
    );
}

fn service_name(cache: &ReferenceCache, id: i64) -> String {
    return cache
        .service(id)
        .map(|service| return service.name.to_string())
        .unwrap_or_else(|| return NOT_AVAILABLE.to_string());
}

fn professional_name(cache: &ReferenceCache, id: i64) -> String {
    return cache
        .professional(id)
        .map(|professional| return professional.name.to_string())
        .unwrap_or_else(|| return NOT_AVAILABLE.to_string());
}

pub fn appointment_row<Tz: TimeZone>(
    appointment: &Appointment,
    cache: &ReferenceCache,
    tz: &Tz,
) -> AppointmentRow
where
    Tz::Offset: std::fmt::Display,
{
    return AppointmentRow {
        id: appointment.id,
        service: service_name(cache, appointment.service_id),
        professional: professional_name(cache, appointment.professional_id),
        when: format_when(&appointment.start_time, &appointment.end_time, tz),
        status: appointment.status.to_string(),
        cancellable: appointment.is_scheduled(),
        cancelled: appointment.is_cancelled(),
    };
}

pub fn appointments_view(state: &AppointmentsState, cache: &ReferenceCache) -> AppointmentsView {
    return appointments_view_in(state, cache, &Local);
}

pub fn appointments_view_in<Tz: TimeZone>(
    state: &AppointmentsState,
    cache: &ReferenceCache,
    tz: &Tz,
) -> AppointmentsView
where
    Tz::Offset: std::fmt::Display,
{
    match state {
        AppointmentsState::Pending => return AppointmentsView::Pending,
        AppointmentsState::Failed => {
            return AppointmentsView::Failed(APPOINTMENTS_FAILED.to_string());
        }
        AppointmentsState::Loaded(appointments) if appointments.is_empty() => {
            return AppointmentsView::Empty(NO_APPOINTMENTS.to_string());
        }
        AppointmentsState::Loaded(appointments) => {
            let mut sorted = appointments.to_vec();
            sort_by_start(&mut sorted);

            return AppointmentsView::Rows(
                sorted
                    .iter()
                    .map(|appointment| return appointment_row(appointment, cache, tz))
                    .collect(),
            );
        }
    }
}

/// Multi-line summary shown when a single appointment is opened.
pub fn appointment_details<Tz: TimeZone>(
    appointment: &Appointment,
    cache: &ReferenceCache,
    currency: &str,
    tz: &Tz,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let row = appointment_row(appointment, cache, tz);
    let mut lines = vec![
        format!("Appointment #{}", row.id),
        format!("Service: {}", row.service),
        format!("Professional: {}", row.professional),
        format!("When: {}", row.when),
        format!("Status: {}", row.status),
    ];

    if let Some(service) = cache.service(appointment.service_id) {
        lines.push(format!("Price: {}", format_price(currency, service.price)));
        if let Some(description) = &service.description {
            lines.push(format!("Details: {description}"));
        }
    }

    return lines.join("\n");
}
