pub mod actions;
mod app_state;
mod auth;
pub mod events;
mod keymap;
mod navigation;
mod notices;
mod reference_cache;
mod schedule_form;
mod session_store;
mod view_models;

pub use app_state::*;
pub use auth::*;
pub use keymap::*;
pub use navigation::*;
pub use notices::*;
pub use reference_cache::*;
pub use schedule_form::*;
pub use session_store::*;
pub use view_models::*;
