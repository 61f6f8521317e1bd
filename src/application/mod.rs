pub mod cli;
pub mod login;
pub mod pages;
pub mod ui;
