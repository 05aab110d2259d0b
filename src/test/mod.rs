mod app;
mod commands;
mod fake;
mod ui;
mod utils;
