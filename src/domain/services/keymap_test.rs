use tui_textarea::Input;
use tui_textarea::Key;

use super::KeyBinding;
use super::Keymap;
use crate::domain::models::Command;
use crate::domain::services::BookingField;
use crate::domain::services::Mode;

fn key(key: Key) -> Input {
    return Input {
        key,
        ctrl: false,
        alt: false,
    };
}

fn ctrl(key: Key) -> Input {
    return Input {
        key,
        ctrl: true,
        alt: false,
    };
}

#[test]
fn it_dismisses_alerts_with_any_key() {
    for input in [key(Key::Enter), key(Key::Char('q')), key(Key::Esc)] {
        assert_eq!(
            Keymap::command_for(&Mode::Alert, &input),
            KeyBinding::Command(Command::DismissAlert())
        );
    }
}

#[test]
fn it_only_confirms_cancellation_with_yes() {
    assert_eq!(
        Keymap::command_for(&Mode::ConfirmCancel, &key(Key::Char('y'))),
        KeyBinding::Command(Command::ConfirmCancel(true))
    );
    assert_eq!(
        Keymap::command_for(&Mode::ConfirmCancel, &key(Key::Enter)),
        KeyBinding::Command(Command::ConfirmCancel(false))
    );
    assert_eq!(
        Keymap::command_for(&Mode::ConfirmCancel, &key(Key::Char('n'))),
        KeyBinding::Command(Command::ConfirmCancel(false))
    );
}

#[test]
fn it_maps_the_dashboard_keys() {
    let cases = [
        (key(Key::Char('q')), Command::Quit()),
        (ctrl(Key::Char('c')), Command::Quit()),
        (key(Key::Char('j')), Command::SelectNext()),
        (key(Key::Up), Command::SelectPrevious()),
        (key(Key::Char('r')), Command::Refresh()),
        (key(Key::Char('n')), Command::OpenBooking()),
        (key(Key::Char('c')), Command::RequestCancel()),
        (key(Key::Enter), Command::ShowDetails()),
        (key(Key::Char('l')), Command::Logout()),
    ];

    for (input, command) in cases {
        assert_eq!(
            Keymap::command_for(&Mode::Browse, &input),
            KeyBinding::Command(command)
        );
    }
    assert_eq!(
        Keymap::command_for(&Mode::Browse, &key(Key::Char('z'))),
        KeyBinding::Ignored
    );
}

#[test]
fn it_cycles_select_fields() {
    let mode = Mode::Booking(BookingField::Service);

    assert_eq!(
        Keymap::command_for(&mode, &key(Key::Right)),
        KeyBinding::Command(Command::CycleNext())
    );
    assert_eq!(
        Keymap::command_for(&mode, &key(Key::Left)),
        KeyBinding::Command(Command::CyclePrevious())
    );
    assert_eq!(
        Keymap::command_for(&mode, &key(Key::Char('x'))),
        KeyBinding::Ignored
    );
}

#[test]
fn it_forwards_typing_to_text_fields() {
    let mode = Mode::Booking(BookingField::Date);

    assert_eq!(
        Keymap::command_for(&mode, &key(Key::Char('2'))),
        KeyBinding::TextInput
    );
    assert_eq!(
        Keymap::command_for(&mode, &key(Key::Left)),
        KeyBinding::TextInput
    );
    assert_eq!(
        Keymap::command_for(&mode, &key(Key::Tab)),
        KeyBinding::Command(Command::FocusNextField())
    );
    assert_eq!(Keymap::command_for(&mode, &key(Key::Enter)), KeyBinding::Submit);
    assert_eq!(
        Keymap::command_for(&mode, &key(Key::Esc)),
        KeyBinding::Command(Command::CloseBooking())
    );
}
