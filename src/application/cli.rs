#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::env;
use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::cache_dir;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::SessionStore;

/// Where the user asked to land once configuration is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Launch {
    Dashboard,
    Login {
        email: Option<String>,
        password: Option<String>,
    },
    Register {
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    },
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

async fn print_session() -> Result<()> {
    let mut store = SessionStore::default();
    let session = store.restore().await;

    match session.authenticated_user() {
        Some(user_id) => {
            println!(
                "Logged in as user {user_id}. Session stored at {}",
                store.file_path().display()
            );
        }
        None => println!("No session stored."),
    }

    return Ok(());
}

async fn logout() -> Result<()> {
    SessionStore::default().clear().await?;
    println!("{}", Paint::green("Logged out."));

    return Ok(());
}

fn flag(matches: &ArgMatches, name: &str) -> Option<String> {
    return matches
        .get_one::<String>(name)
        .map(|val| return val.to_string());
}

fn arg_email() -> Arg {
    return Arg::new("email")
        .short('e')
        .long("email")
        .num_args(1)
        .help("Account email. Prompted for when omitted.");
}

fn arg_password() -> Arg {
    return Arg::new("password")
        .short('p')
        .long("password")
        .env("TRIMSLOT_PASSWORD")
        .hide_env_values(true)
        .num_args(1)
        .help("Account password. Prompted for when omitted.");
}

fn subcommand_login() -> Command {
    return Command::new("login")
        .about("Log in and open the dashboard.")
        .arg(arg_email())
        .arg(arg_password());
}

fn subcommand_register() -> Command {
    return Command::new("register")
        .about("Create a new account.")
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .num_args(1)
                .help("Your name. Prompted for when omitted."),
        )
        .arg(arg_email())
        .arg(arg_password());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for trimslot")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running trimslot with environment variable RUST_LOG=trimslot")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("trimslot")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(subcommand_login())
        .subcommand(subcommand_register())
        .subcommand(Command::new("logout").about("Forget the stored session."))
        .subcommand(Command::new("session").about("Show whether a session is stored."))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .long(ConfigKey::ApiURL.to_string())
                .env("TRIMSLOT_API_URL")
                .num_args(1)
                .help(format!("Base URL of the scheduling API. [default: {}]", Config::default(ConfigKey::ApiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("TRIMSLOT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Currency.to_string())
                .long(ConfigKey::Currency.to_string())
                .env("TRIMSLOT_CURRENCY")
                .num_args(1)
                .help(format!("Currency symbol shown in front of service prices. [default: {}]", Config::default(ConfigKey::Currency)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::SessionFile.to_string())
                .long(ConfigKey::SessionFile.to_string())
                .env("TRIMSLOT_SESSION_FILE")
                .num_args(1)
                .help(format!("Where the logged in session is persisted. [default: {}]", Config::default(ConfigKey::SessionFile)))
                .global(true),
        );
}

/// Handles one-shot subcommands. Returns where to start when the interactive
/// client should run.
pub async fn parse() -> Result<Option<Launch>> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_dir = env::var("TRIMSLOT_LOG_DIR")
                        .map(path::PathBuf::from)
                        .unwrap_or_else(|_| return cache_dir());
                    println!("{}", log_dir.join("debug.log").display());
                }
                Some(("enum-config", _)) => {
                    println!("{}", ConfigKey::VARIANTS.join("\n"));
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(None);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }

            return Ok(None);
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("create", _)) => {
                    create_config_file().await?;
                }
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default(build()));
                }
                Some(("path", _)) => {
                    println!("{}", Config::default(ConfigKey::ConfigFile));
                }
                _ => {
                    subcommand_config().print_long_help()?;
                }
            }

            return Ok(None);
        }
        Some(("session", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            print_session().await?;
            return Ok(None);
        }
        Some(("logout", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            logout().await?;
            return Ok(None);
        }
        Some(("login", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            return Ok(Some(Launch::Login {
                email: flag(subcmd_matches, "email"),
                password: flag(subcmd_matches, "password"),
            }));
        }
        Some(("register", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            return Ok(Some(Launch::Register {
                name: flag(subcmd_matches, "name"),
                email: flag(subcmd_matches, "email"),
                password: flag(subcmd_matches, "password"),
            }));
        }
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(Some(Launch::Dashboard));
}
