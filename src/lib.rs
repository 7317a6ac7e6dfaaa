pub mod assets;
pub mod cli;
pub mod config;
pub mod consts;
pub mod error;
pub mod gui;
pub mod logging;
pub mod model;

pub use error::{Error, Result};
