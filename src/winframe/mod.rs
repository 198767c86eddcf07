#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub type Result<T> = anyhow::Result<T>;

pub mod action;
pub mod borders;
pub mod button;
pub mod connection;
pub mod control;
pub mod cursor;
pub mod event;
pub mod geometry;
pub mod grab;
pub mod input;
pub mod interaction;
pub mod preferences;
pub mod theme;
pub mod window;
pub mod xdata;
