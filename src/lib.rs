//! JOY Zoo management: an animal roster browsed through a numbered console menu.

pub mod console;
pub mod error;
pub mod menu;
pub mod models;
pub mod zoo;

pub use error::{Result, ZooError};
