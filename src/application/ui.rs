#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::TextArea;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Command;
use crate::domain::models::Event;
use crate::domain::models::Flow;
use crate::domain::models::NoticeKind;
use crate::domain::models::NoticeTarget;
use crate::domain::models::Session;
use crate::domain::models::TextInput;
use crate::domain::services::actions::ActionsService;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppointmentsView;
use crate::domain::services::BookingField;
use crate::domain::services::KeyBinding;
use crate::domain::services::Keymap;
use crate::domain::services::Mode;
use crate::domain::services::CANCEL_CONFIRMATION;
use crate::infrastructure::gateway::GatewayManager;

const BROWSE_HELP: &str =
    "j/k select · enter details · n book · c cancel · r refresh · l log out · q quit";
const BOOKING_HELP: &str = "tab/↑↓ move · ←→ choose · enter book · esc close";

struct BookingInputs<'a> {
    date: TextArea<'a>,
    time: TextArea<'a>,
}

impl<'a> BookingInputs<'a> {
    fn new() -> BookingInputs<'a> {
        return BookingInputs {
            date: TextInput::new("Date", "YYYY-MM-DD"),
            time: TextInput::new("Time", "HH:MM"),
        };
    }

    fn focus(&mut self, mode: Mode) {
        TextInput::focus(&mut self.date, mode == Mode::Booking(BookingField::Date));
        TextInput::focus(&mut self.time, mode == Mode::Booking(BookingField::Time));
    }

    fn submit(&self) -> Command {
        return Command::SubmitBooking {
            date: TextInput::value(&self.date),
            time: TextInput::value(&self.time),
        };
    }
}

fn notice_style(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Success => return Style::default().fg(Color::Green),
        NoticeKind::Error => return Style::default().fg(Color::Red),
    }
}

fn bordered(title: &str) -> Block<'static> {
    return Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title.to_string());
}

fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    return Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
}

fn render_header<B: Backend>(frame: &mut Frame<B>, app_state: &AppState, area: Rect) {
    let user = match app_state.session.authenticated_user() {
        Some(user_id) => format!("user #{user_id}"),
        None => "signed out".to_string(),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled("trimslot", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {user}")),
    ]))
    .block(bordered("Dashboard"));

    frame.render_widget(header, area);
}

fn render_reference<B: Backend>(frame: &mut Frame<B>, app_state: &AppState, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let professionals = app_state
        .professional_items()
        .into_iter()
        .map(ListItem::new)
        .collect::<Vec<ListItem>>();
    frame.render_widget(
        List::new(professionals).block(bordered("Professionals")),
        layout[0],
    );

    let services = app_state
        .service_items()
        .into_iter()
        .map(ListItem::new)
        .collect::<Vec<ListItem>>();
    frame.render_widget(List::new(services).block(bordered("Services")), layout[1]);
}

fn render_appointments<B: Backend>(frame: &mut Frame<B>, app_state: &AppState, area: Rect) {
    let block = bordered("My appointments");

    let rows = match app_state.appointments_view() {
        AppointmentsView::Pending => {
            frame.render_widget(Paragraph::new("Loading...").block(block), area);
            return;
        }
        AppointmentsView::Empty(message) => {
            frame.render_widget(Paragraph::new(message).block(block), area);
            return;
        }
        AppointmentsView::Failed(message) => {
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }
        AppointmentsView::Rows(rows) => rows,
    };

    let items = rows
        .iter()
        .map(|row| {
            let mut style = Style::default();
            if row.cancelled {
                style = style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
            }
            let mut spans = vec![
                Span::styled(row.when.to_string(), style.add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {} with {}  ", row.service, row.professional),
                    style,
                ),
                Span::styled(format!("[{}]", row.status), style),
            ];
            if row.cancellable {
                spans.push(Span::styled("  c: cancel", Style::default().fg(Color::Yellow)));
            }

            return ListItem::new(Line::from(spans));
        })
        .collect::<Vec<ListItem>>();

    let mut state = ListState::default();
    state.select(Some(app_state.selected));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer<B: Backend>(frame: &mut Frame<B>, app_state: &AppState, area: Rect) {
    let line = match app_state.notices.get(NoticeTarget::Schedule) {
        Some(notice) if app_state.booking.is_none() => {
            Line::from(Span::styled(notice.text.to_string(), notice_style(notice.kind)))
        }
        _ => Line::from(Span::styled(
            BROWSE_HELP,
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_select<B: Backend>(
    frame: &mut Frame<B>,
    title: &str,
    label: &str,
    focused: bool,
    area: Rect,
) {
    let mut block = bordered(title);
    if focused {
        block = block
            .border_type(BorderType::Double)
            .title_style(Style::default().add_modifier(Modifier::BOLD));
    }

    frame.render_widget(Paragraph::new(format!("◀ {label} ▶")).block(block), area);
}

fn render_booking<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &AppState,
    inputs: &BookingInputs,
    area: Rect,
) {
    let booking = match &app_state.booking {
        Some(booking) => booking,
        None => return,
    };

    let popup = centered(60, 17, area);
    frame.render_widget(Clear, popup);
    let block = bordered("Book an appointment");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let professional_label = app_state
        .professional_options()
        .get(booking.professional)
        .map(|option| return option.label.to_string())
        .unwrap_or_default();
    let service_label = app_state
        .service_options()
        .get(booking.service)
        .map(|option| return option.label.to_string())
        .unwrap_or_default();

    render_select(
        frame,
        "Professional",
        &professional_label,
        booking.focus == BookingField::Professional,
        layout[0],
    );
    render_select(
        frame,
        "Service",
        &service_label,
        booking.focus == BookingField::Service,
        layout[1],
    );
    frame.render_widget(inputs.date.widget(), layout[2]);
    frame.render_widget(inputs.time.widget(), layout[3]);

    let line = match app_state.notices.get(NoticeTarget::Schedule) {
        Some(notice) => {
            Line::from(Span::styled(notice.text.to_string(), notice_style(notice.kind)))
        }
        None => Line::from(Span::styled(
            BOOKING_HELP,
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), layout[4]);
}

/// Text lines plus borders and padding, saturating for huge texts.
fn dialog_height(text: &str) -> u16 {
    return u16::try_from(text.lines().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
}

fn render_dialog<B: Backend>(frame: &mut Frame<B>, title: &str, text: &str, area: Rect) {
    let popup = centered(60, dialog_height(text), area);
    let paragraph = Paragraph::new(text.to_string())
        .wrap(Wrap { trim: false })
        .block(bordered(title));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn render<B: Backend>(frame: &mut Frame<B>, app_state: &AppState, inputs: &BookingInputs) {
    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout[1]);

    render_header(frame, app_state, layout[0]);
    render_reference(frame, app_state, body[0]);
    render_appointments(frame, app_state, body[1]);
    render_footer(frame, app_state, layout[2]);
    render_booking(frame, app_state, inputs, area);

    if app_state.pending_cancel.is_some() {
        render_dialog(
            frame,
            "Cancel appointment",
            &format!("{CANCEL_CONFIRMATION}\n\ny: yes · any other key: no"),
            area,
        );
    }
    if let Some(alert) = &app_state.alert {
        render_dialog(frame, "Notice", alert, area);
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    events: &mut EventsService,
) -> Result<Flow> {
    let mut inputs = BookingInputs::new();
    app_state.load()?;

    loop {
        inputs.focus(app_state.mode());
        terminal.draw(|frame| {
            render(frame, app_state, &inputs);
        })?;

        let booking_open = app_state.booking.is_some();
        let flow = match events.next().await? {
            Event::KeyboardInput(input) => {
                match Keymap::command_for(&app_state.mode(), &input) {
                    KeyBinding::Command(command) => app_state.dispatch(command)?,
                    KeyBinding::Submit => app_state.dispatch(inputs.submit())?,
                    KeyBinding::TextInput => {
                        match app_state.mode() {
                            Mode::Booking(BookingField::Date) => {
                                inputs.date.input(input);
                            }
                            Mode::Booking(BookingField::Time) => {
                                inputs.time.input(input);
                            }
                            _ => {}
                        }
                        Flow::Continue
                    }
                    KeyBinding::Ignored => Flow::Continue,
                }
            }
            event => app_state.handle_event(event)?,
        };

        if booking_open && app_state.booking.is_none() {
            inputs = BookingInputs::new();
        }

        if flow != Flow::Continue {
            return Ok(flow);
        }
    }
}

pub fn destruct_terminal_for_panic() {
    if let Err(err) = disable_raw_mode() {
        tracing::error!(error = ?err, "Failed to disable raw mode");
    }
    if let Err(err) = crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
        tracing::error!(error = ?err, "Failed to restore terminal");
    }
}

/// Runs the dashboard until the user quits or logs out.
pub async fn start(session: Session) -> Result<Flow> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let worker_tx = event_tx.clone();
    let worker = tokio::spawn(async move {
        return ActionsService::start(GatewayManager::get(), worker_tx, &mut action_rx).await;
    });

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut app_state = AppState::new(
        session,
        &Config::get(ConfigKey::Currency),
        action_tx,
        event_tx,
    );
    let mut events = EventsService::new(event_rx);

    let res = start_loop(&mut terminal, &mut app_state, &mut events).await;

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    worker.abort();

    return res;
}
