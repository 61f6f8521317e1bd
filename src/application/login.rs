use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use dialoguer::Password;
use dialoguer::Select;
use tokio::time;
use yansi::Paint;

use super::cli::Launch;
use crate::domain::models::Credentials;
use crate::domain::models::GatewayBox;
use crate::domain::models::Notice;
use crate::domain::models::NoticeKind;
use crate::domain::models::Page;
use crate::domain::models::Registration;
use crate::domain::services::AuthOutcome;
use crate::domain::services::AuthService;
use crate::domain::services::SessionStore;

const MENU: [&str; 3] = ["Log in", "Register", "Quit"];

fn print_notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Success => println!("{}", Paint::green(&notice.text)),
        NoticeKind::Error => println!("{}", Paint::red(&notice.text)),
    }
}

fn prompt_text(label: &str, value: Option<String>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    let res = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;

    return Ok(res);
}

fn prompt_password(value: Option<String>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    let res = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    return Ok(res);
}

/// Prints the outcome and waits out the redirect delay, if there is one.
async fn follow(outcome: AuthOutcome) -> Option<Page> {
    print_notice(&outcome.notice);

    if let Some(redirect) = outcome.redirect {
        time::sleep(redirect.after).await;
        return Some(redirect.page);
    }

    return None;
}

async fn login(
    gateway: &GatewayBox,
    store: &mut SessionStore,
    email: Option<String>,
    password: Option<String>,
) -> Result<Option<Page>> {
    let credentials = Credentials {
        email: prompt_text("Email", email)?,
        password: prompt_password(password)?,
    };
    let outcome = AuthService::login(gateway, store, &credentials).await;

    return Ok(follow(outcome).await);
}

async fn register(
    gateway: &GatewayBox,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let registration = Registration {
        name: prompt_text("Name", name)?,
        email: prompt_text("Email", email)?,
        password: prompt_password(password)?,
    };
    let outcome = AuthService::register(gateway, &registration).await;
    follow(outcome).await;

    return Ok(());
}

/// Login page. Flags from the `login` and `register` subcommands make a single
/// attempt, otherwise an interactive menu runs until login succeeds or the
/// user quits. Returns the page to open next.
pub async fn run(
    gateway: &GatewayBox,
    store: &mut SessionStore,
    launch: Option<Launch>,
) -> Result<Option<Page>> {
    match launch {
        Some(Launch::Login { email, password }) => {
            return login(gateway, store, email, password).await;
        }
        Some(Launch::Register {
            name,
            email,
            password,
        }) => {
            register(gateway, name, email, password).await?;
            return Ok(None);
        }
        Some(Launch::Dashboard) | None => {}
    }

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Welcome! What would you like to do?")
            .default(0)
            .items(&MENU)
            .interact_opt()?;

        match choice {
            Some(0) => {
                if let Some(page) = login(gateway, store, None, None).await? {
                    return Ok(Some(page));
                }
            }
            Some(1) => {
                register(gateway, None, None, None).await?;
            }
            _ => return Ok(None),
        }
    }
}
