/// User intents on the dashboard, decoupled from the keys that trigger them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    CloseBooking(),
    ConfirmCancel(bool),
    CycleNext(),
    CyclePrevious(),
    DismissAlert(),
    FocusNextField(),
    FocusPreviousField(),
    Logout(),
    OpenBooking(),
    Quit(),
    Refresh(),
    RequestCancel(),
    SelectNext(),
    SelectPrevious(),
    ShowDetails(),
    SubmitBooking { date: String, time: String },
}

/// What the UI loop should do once a command or event has been handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Logout,
    Quit,
}
