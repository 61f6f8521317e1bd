use anyhow::Result;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use test_utils::appointments_fixture;
use test_utils::professionals_fixture;
use tokio::sync::mpsc;

use super::dialog_height;
use super::render;
use super::BookingInputs;
use crate::domain::models::Action;
use crate::domain::models::Appointment;
use crate::domain::models::Event;
use crate::domain::models::Professional;
use crate::domain::models::Session;
use crate::domain::services::AppState;

fn screen(terminal: &Terminal<TestBackend>) -> String {
    return terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| return cell.symbol.to_string())
        .collect::<String>();
}

#[test]
fn it_sizes_dialogs_to_their_text() {
    assert_eq!(dialog_height("one line"), 5);
    assert_eq!(dialog_height("one\ntwo\nthree"), 7);
}

#[test]
fn it_saturates_dialog_height_for_huge_texts() {
    let text = "line\n".repeat(70_000);
    assert_eq!(dialog_height(&text), u16::MAX);
}

#[test]
fn it_renders_the_dashboard() -> Result<()> {
    let (action_tx, _action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, _event_rx) = mpsc::unbounded_channel::<Event>();
    let mut app_state = AppState::new(
        Session::new(1, "mock-jwt-token-for-user-1"),
        "R$",
        action_tx,
        event_tx,
    );
    app_state.handle_event(Event::ProfessionalsLoaded(serde_json::from_str::<
        Vec<Professional>,
    >(professionals_fixture())?))?;
    app_state.handle_event(Event::AppointmentsLoaded(serde_json::from_str::<
        Vec<Appointment>,
    >(appointments_fixture())?))?;

    let mut terminal = Terminal::new(TestBackend::new(120, 30))?;
    let inputs = BookingInputs::new();
    terminal.draw(|frame| {
        render(frame, &app_state, &inputs);
    })?;
    let dashboard = screen(&terminal);
    assert!(dashboard.contains("user #1"));
    assert!(dashboard.contains("Carlos O Barbeiro"));

    app_state.alert = Some("line\n".repeat(200));
    terminal.draw(|frame| {
        render(frame, &app_state, &inputs);
    })?;
    assert!(screen(&terminal).contains("Notice"));

    return Ok(());
}
