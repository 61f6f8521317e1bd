#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;

use crate::domain::models::Page;
use crate::domain::models::Session;

pub struct Navigator {}

impl Navigator {
    /// Route guard run on every page load, before anything is fetched. Signed
    /// in users never see the login page, anonymous users never see a
    /// protected one.
    pub fn guard(requested: Page, session: &Session) -> Page {
        let resolved = match (requested, session.is_authenticated()) {
            (Page::Login, true) => Page::Dashboard,
            (page, false) if page.is_protected() => Page::Login,
            (page, _) => page,
        };

        if resolved != requested {
            tracing::debug!(%requested, %resolved, "Redirecting");
        }

        return resolved;
    }
}
