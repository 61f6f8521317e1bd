mod action;
mod appointment;
mod command;
mod event;
mod gateway;
mod notice;
mod page;
mod professional;
mod service;
mod session;
mod textarea;

pub use action::*;
pub use appointment::*;
pub use command::*;
pub use event::*;
pub use gateway::*;
pub use notice::*;
pub use page::*;
pub use professional::*;
pub use service::*;
pub use session::*;
pub use textarea::*;
