#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;

use anyhow::Result;
use yansi::Paint;

use super::cli::Launch;
use super::login;
use super::ui;
use crate::domain::models::Flow;
use crate::domain::models::Page;
use crate::domain::models::Session;
use crate::domain::services::Navigator;
use crate::domain::services::SessionStore;
use crate::infrastructure::gateway::GatewayManager;

pub const ALREADY_LOGGED_IN: &str =
    "Already logged in, opening the dashboard. Run `trimslot logout` first to switch accounts.";

/// Note shown when the route guard skips a login or register request.
fn skipped_launch_note(launch: Option<&Launch>, page: Page) -> Option<&'static str> {
    match (launch, page) {
        (Some(Launch::Login { .. } | Launch::Register { .. }), Page::Dashboard) => {
            return Some(ALREADY_LOGGED_IN);
        }
        _ => return None,
    }
}

/// Page loop. Every page load restores the session from disk and runs the
/// route guard before anything is fetched.
pub async fn run(launch: Launch) -> Result<()> {
    let gateway = GatewayManager::get();
    let mut store = SessionStore::default();

    let mut requested = match launch {
        Launch::Dashboard => Page::Dashboard,
        _ => Page::Login,
    };
    let mut pending = Some(launch);
    let mut signed_out = false;

    loop {
        // A logout that could not remove the file still signs out this run.
        let session = if signed_out {
            Session::anonymous()
        } else {
            store.restore().await
        };
        signed_out = false;
        let page = Navigator::guard(requested, &session);
        tracing::debug!(%page, "Loading page");

        if let Some(note) = skipped_launch_note(pending.as_ref(), page) {
            println!("{}", Paint::yellow(note));
            pending = None;
        }

        match page {
            Page::Login => match login::run(&gateway, &mut store, pending.take()).await? {
                Some(next) => requested = next,
                None => return Ok(()),
            },
            Page::Dashboard => match ui::start(session).await? {
                Flow::Logout => {
                    if let Err(err) = store.clear().await {
                        tracing::error!(error = ?err, "Failed to clear session");
                        eprintln!(
                            "{}",
                            Paint::red(format!("Could not remove the stored session: {err}"))
                        );
                        signed_out = true;
                    }
                    requested = Page::Login;
                    pending = None;
                }
                Flow::Quit | Flow::Continue => return Ok(()),
            },
        }
    }
}
