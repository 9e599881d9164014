#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod cache;
pub mod command;
pub mod config;
pub mod event;
pub mod hex;
pub mod picker;
pub mod scorer;
pub mod selection;
pub mod source;
pub mod ui;
pub use app::PickerDemoApp;
