//! `tasklist`: a terminal to-do list.

pub mod app;
pub mod config;
pub mod timer;
pub mod ui;
