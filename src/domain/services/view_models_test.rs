use anyhow::Result;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use test_utils::appointments_fixture;
use test_utils::professionals_fixture;
use test_utils::services_fixture;

use super::*;
use crate::domain::models::Appointment;
use crate::domain::models::AppointmentStatus;
use crate::domain::models::Professional;
use crate::domain::models::Service;

fn loaded_cache() -> Result<ReferenceCache> {
    let mut cache = ReferenceCache::default();
    cache.replace_professionals(serde_json::from_str::<Vec<Professional>>(
        professionals_fixture(),
    )?);
    cache.replace_services(serde_json::from_str::<Vec<Service>>(services_fixture())?);

    return Ok(cache);
}

fn loaded_appointments() -> Result<AppointmentsState> {
    let appointments: Vec<Appointment> = serde_json::from_str(appointments_fixture())?;
    return Ok(AppointmentsState::Loaded(appointments));
}

fn render_rows(view: &AppointmentsView) -> String {
    return view
        .rows()
        .iter()
        .map(|row| {
            let mut marker = "-";
            if row.cancellable {
                marker = "cancellable";
            }
            if row.cancelled {
                marker = "cancelled";
            }
            return format!(
                "#{} | {} | {} | {} | {} | {}",
                row.id, row.service, row.professional, row.when, row.status, marker
            );
        })
        .collect::<Vec<String>>()
        .join("\n");
}

#[test]
fn it_lists_professionals() -> Result<()> {
    let cache = loaded_cache()?;
    assert_eq!(
        professional_items(&cache),
        vec![
            "Carlos O Barbeiro (Classic cuts and beard)".to_string(),
            "Ana Estilista (Colouring)".to_string(),
        ]
    );

    return Ok(());
}

#[test]
fn it_lists_services_with_prices() -> Result<()> {
    let cache = loaded_cache()?;
    assert_eq!(
        service_items(&cache, "R$"),
        vec![
            "Men's cut (45 min) - R$ 50.00".to_string(),
            "Full beard (30 min) - R$ 40.50".to_string(),
        ]
    );

    return Ok(());
}

#[test]
fn it_builds_options_with_a_placeholder() -> Result<()> {
    let cache = loaded_cache()?;

    let professionals = professional_options(&cache);
    assert_eq!(professionals.len(), 3);
    assert_eq!(professionals[0].value, None);
    assert_eq!(professionals[0].label, PROFESSIONAL_PLACEHOLDER);
    assert_eq!(professionals[2].value, Some(2));

    let services = service_options(&cache, "€");
    assert_eq!(services[0].label, SERVICE_PLACEHOLDER);
    assert_eq!(services[1].label, "Men's cut (€ 50.00)");

    let empty = professional_options(&ReferenceCache::default());
    assert_eq!(empty.len(), 1);

    return Ok(());
}

#[test]
fn it_renders_sorted_rows() -> Result<()> {
    let view = appointments_view_in(&loaded_appointments()?, &loaded_cache()?, &Utc);

    insta::assert_snapshot!(render_rows(&view), @r###"
    #1 | Full beard | Carlos O Barbeiro | 01/05/2031 09:00 - 09:30 | Cancelled | cancelled
    #2 | Men's cut | N/A | 02/05/2031 10:00 - 10:45 | Concluído | -
    #3 | Men's cut | Ana Estilista | 03/05/2031 15:00 - 15:45 | Scheduled | cancellable
    "###);

    return Ok(());
}

#[test]
fn it_renders_placeholders_without_reference_data() -> Result<()> {
    let view = appointments_view_in(&loaded_appointments()?, &ReferenceCache::default(), &Utc);

    for row in view.rows() {
        assert_eq!(row.service, NOT_AVAILABLE);
        assert_eq!(row.professional, NOT_AVAILABLE);
    }
    assert_eq!(view.rows().len(), 3);

    return Ok(());
}

#[test]
fn it_sorts_any_input_order() -> Result<()> {
    let base = Utc.with_ymd_and_hms(2031, 1, 1, 8, 0, 0).unwrap();
    let offsets = [7, 3, 9, 3, 1, 5, 3];
    let appointments = offsets
        .iter()
        .enumerate()
        .map(|(idx, hours)| {
            let start_time = base + Duration::hours(*hours);
            return Appointment {
                id: idx as i64,
                user_id: 1,
                professional_id: 1,
                service_id: 1,
                start_time,
                end_time: start_time + Duration::minutes(30),
                status: AppointmentStatus::Scheduled,
            };
        })
        .collect::<Vec<Appointment>>();

    let view = appointments_view_in(
        &AppointmentsState::Loaded(appointments),
        &ReferenceCache::default(),
        &Utc,
    );
    let ids = view.rows().iter().map(|row| return row.id).collect::<Vec<i64>>();

    assert_eq!(ids, vec![4, 1, 3, 6, 5, 0, 2]);
    return Ok(());
}

#[test]
fn it_only_allows_cancelling_scheduled_appointments() -> Result<()> {
    let view = appointments_view_in(&loaded_appointments()?, &loaded_cache()?, &Utc);
    let cancellable = view
        .rows()
        .iter()
        .filter(|row| return row.cancellable)
        .map(|row| return row.id)
        .collect::<Vec<i64>>();

    assert_eq!(cancellable, vec![3]);
    return Ok(());
}

#[test]
fn it_shows_an_informational_message_when_empty() {
    let view = appointments_view_in(
        &AppointmentsState::Loaded(vec![]),
        &ReferenceCache::default(),
        &Utc,
    );

    assert_eq!(view, AppointmentsView::Empty(NO_APPOINTMENTS.to_string()));
    assert!(view.rows().is_empty());
}

#[test]
fn it_shows_failures_and_pending_states() {
    let cache = ReferenceCache::default();
    assert_eq!(
        appointments_view_in(&AppointmentsState::Failed, &cache, &Utc),
        AppointmentsView::Failed(APPOINTMENTS_FAILED.to_string())
    );
    assert_eq!(
        appointments_view_in(&AppointmentsState::Pending, &cache, &Utc),
        AppointmentsView::Pending
    );
}

#[test]
fn it_describes_a_single_appointment() -> Result<()> {
    let appointments: Vec<Appointment> = serde_json::from_str(appointments_fixture())?;
    let details = appointment_details(&appointments[0], &loaded_cache()?, "R$", &Utc);

    insta::assert_snapshot!(details, @r###"
    Appointment #3
    Service: Men's cut
    Professional: Ana Estilista
    When: 03/05/2031 15:00 - 15:45
    Status: Scheduled
    Price: R$ 50.00
    Details: Classic men's haircut.
    "###);

    return Ok(());
}
