//! Terminal presentation layer

pub mod screens;
pub mod session;
pub mod setup;
pub mod ui;
