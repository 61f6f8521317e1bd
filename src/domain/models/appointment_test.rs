use anyhow::Result;
use chrono::TimeZone;
use chrono::Utc;
use test_utils::appointments_fixture;

use super::parse_timestamp;
use super::sort_by_start;
use super::Appointment;
use super::AppointmentStatus;

fn appointment(id: i64, hour: u32) -> Appointment {
    let start_time = Utc.with_ymd_and_hms(2031, 5, 1, hour, 0, 0).unwrap();
    return Appointment {
        id,
        user_id: 1,
        professional_id: 1,
        service_id: 1,
        start_time,
        end_time: start_time + chrono::Duration::minutes(30),
        status: AppointmentStatus::Scheduled,
    };
}

#[test]
fn it_maps_backend_statuses() {
    assert_eq!(
        AppointmentStatus::from("Agendado".to_string()),
        AppointmentStatus::Scheduled
    );
    assert_eq!(
        AppointmentStatus::from("Cancelado".to_string()),
        AppointmentStatus::Cancelled
    );
    assert_eq!(
        AppointmentStatus::from("Concluído".to_string()),
        AppointmentStatus::Other("Concluído".to_string())
    );
}

#[test]
fn it_displays_statuses() {
    assert_eq!(AppointmentStatus::Scheduled.to_string(), "Scheduled");
    assert_eq!(AppointmentStatus::Cancelled.to_string(), "Cancelled");
    assert_eq!(
        AppointmentStatus::Other("Concluído".to_string()).to_string(),
        "Concluído"
    );
}

#[test]
fn it_parses_offset_timestamps() {
    let parsed = parse_timestamp("2031-05-01T12:30:00-03:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2031, 5, 1, 15, 30, 0).unwrap());
}

#[test]
fn it_parses_millisecond_timestamps() {
    let parsed = parse_timestamp("2031-05-01T15:30:00.000Z").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2031, 5, 1, 15, 30, 0).unwrap());
}

#[test]
fn it_parses_naive_timestamps() {
    assert!(parse_timestamp("2031-05-01T15:30:00").is_some());
    assert!(parse_timestamp("2031-05-01T15:30:00.123456").is_some());
    assert!(parse_timestamp("2031-05-01T15:30").is_some());
}

#[test]
fn it_rejects_garbage_timestamps() {
    assert!(parse_timestamp("tomorrow at noon").is_none());
}

#[test]
fn it_deserializes_backend_appointments() -> Result<()> {
    let appointments: Vec<Appointment> = serde_json::from_str(appointments_fixture())?;

    assert_eq!(appointments.len(), 3);
    assert_eq!(appointments[0].id, 3);
    assert!(appointments[0].is_scheduled());
    assert!(appointments[1].is_cancelled());
    assert_eq!(
        appointments[2].status,
        AppointmentStatus::Other("Concluído".to_string())
    );

    return Ok(());
}

#[test]
fn it_sorts_by_start_time() {
    let mut appointments = vec![appointment(1, 15), appointment(2, 9), appointment(3, 12)];
    sort_by_start(&mut appointments);

    let ids = appointments.iter().map(|a| return a.id).collect::<Vec<i64>>();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn it_keeps_order_for_equal_start_times() {
    let mut appointments = vec![
        appointment(5, 10),
        appointment(4, 9),
        appointment(6, 10),
        appointment(7, 10),
    ];
    sort_by_start(&mut appointments);

    let ids = appointments.iter().map(|a| return a.id).collect::<Vec<i64>>();
    assert_eq!(ids, vec![4, 5, 6, 7]);
}
