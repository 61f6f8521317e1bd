#[cfg(test)]
#[path = "keymap_test.rs"]
mod tests;

use tui_textarea::Input;
use tui_textarea::Key;

use super::BookingField;
use super::Mode;
use crate::domain::models::Command;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyBinding {
    Command(Command),
    /// Submit the booking form. The UI fills in the date and time text.
    Submit,
    /// Forward the key to the focused text input.
    TextInput,
    Ignored,
}

pub struct Keymap {}

impl Keymap {
    pub fn command_for(mode: &Mode, input: &Input) -> KeyBinding {
        match mode {
            Mode::Alert => return KeyBinding::Command(Command::DismissAlert()),
            Mode::ConfirmCancel => return Keymap::confirm(input),
            Mode::Booking(field) => return Keymap::booking(*field, input),
            Mode::Browse => return Keymap::browse(input),
        }
    }

    fn confirm(input: &Input) -> KeyBinding {
        match input {
            Input {
                key: Key::Char('y' | 'Y'),
                ctrl: false,
                ..
            } => return KeyBinding::Command(Command::ConfirmCancel(true)),
            _ => return KeyBinding::Command(Command::ConfirmCancel(false)),
        }
    }

    fn booking(field: BookingField, input: &Input) -> KeyBinding {
        match input {
            Input { key: Key::Esc, .. } => return KeyBinding::Command(Command::CloseBooking()),
            Input {
                key: Key::Enter, ..
            } => return KeyBinding::Submit,
            Input {
                key: Key::Tab | Key::Down,
                ..
            } => return KeyBinding::Command(Command::FocusNextField()),
            Input { key: Key::Up, .. } => {
                return KeyBinding::Command(Command::FocusPreviousField());
            }
            _ if field.is_text() => return KeyBinding::TextInput,
            Input {
                key: Key::Right | Key::Char('l'),
                ..
            } => return KeyBinding::Command(Command::CycleNext()),
            Input {
                key: Key::Left | Key::Char('h'),
                ..
            } => return KeyBinding::Command(Command::CyclePrevious()),
            _ => return KeyBinding::Ignored,
        }
    }

    fn browse(input: &Input) -> KeyBinding {
        match input {
            Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            }
            | Input {
                key: Key::Char('q'),
                ..
            } => return KeyBinding::Command(Command::Quit()),
            Input {
                key: Key::Down | Key::Char('j'),
                ..
            } => return KeyBinding::Command(Command::SelectNext()),
            Input {
                key: Key::Up | Key::Char('k'),
                ..
            } => return KeyBinding::Command(Command::SelectPrevious()),
            Input {
                key: Key::Char('r'),
                ..
            } => return KeyBinding::Command(Command::Refresh()),
            Input {
                key: Key::Char('n'),
                ..
            } => return KeyBinding::Command(Command::OpenBooking()),
            Input {
                key: Key::Char('c'),
                ..
            } => return KeyBinding::Command(Command::RequestCancel()),
            Input {
                key: Key::Enter, ..
            } => return KeyBinding::Command(Command::ShowDetails()),
            Input {
                key: Key::Char('l'),
                ..
            } => return KeyBinding::Command(Command::Logout()),
            _ => return KeyBinding::Ignored,
        }
    }
}
