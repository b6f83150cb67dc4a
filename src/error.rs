use thiserror::Error;

use crate::models::{FoodType, Species};

/// Errors raised by the zoo library.
///
/// Values are plain data. Printing the console diagnostic for a rejected
/// meal is the menu's job, done once where the error is handled.
#[derive(Debug, Error)]
pub enum ZooError {
    #[error("{species} can only eat {}", .species.diet().preferred_food().as_str())]
    InvalidFood { species: Species, food: FoodType },

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ZooError>;
