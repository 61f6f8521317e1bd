#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    /// Register and log in. Only reachable while signed out.
    Login,
    /// Professionals, services and the user's appointments. Requires a session.
    Dashboard,
}

impl Page {
    pub fn is_protected(&self) -> bool {
        return *self == Page::Dashboard;
    }
}
