use std::fmt;

use super::diet::{DietInfo, FoodType};

/// The animal kinds the zoo keeps.
///
/// Each species fixes its diet and the extra behaviors it supports, so the
/// set is closed rather than open for extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Elephant,
    Shark,
    Buffalo,
    Godzilla,
}

/// An extra behavior a species supports beyond eating, moving and sounding off.
///
/// `Fly` is part of the vocabulary but no current species carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Climb,
    Swim,
    Fly,
}

impl Species {
    /// Catalogue order, as shown on the "animals in the zoo" listing.
    pub const ALL: [Species; 4] = [Self::Elephant, Self::Shark, Self::Buffalo, Self::Godzilla];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elephant => "Elephant",
            Self::Shark => "Shark",
            Self::Buffalo => "Buffalo",
            Self::Godzilla => "Godzilla",
        }
    }

    /// Case-insensitive lookup by species name.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(s))
    }

    /// Default diet assigned when an animal of this species is created.
    pub fn diet(&self) -> DietInfo {
        match self {
            Self::Elephant => DietInfo::new(FoodType::Vegetation, "Twice a day"),
            Self::Shark => DietInfo::new(FoodType::Meat, "Once a day"),
            Self::Buffalo => DietInfo::new(FoodType::Vegetation, "Three times a day"),
            Self::Godzilla => DietInfo::new(FoodType::Mixed, "One huge Lion a day"),
        }
    }

    /// The single food category this species insists on, if it is picky.
    ///
    /// Buffalo and Godzilla will eat anything offered.
    pub fn required_food(&self) -> Option<FoodType> {
        match self {
            Self::Elephant => Some(FoodType::Vegetation),
            Self::Shark => Some(FoodType::Meat),
            Self::Buffalo | Self::Godzilla => None,
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Self::Elephant => &[Capability::Climb],
            Self::Shark => &[Capability::Swim],
            Self::Buffalo => &[],
            Self::Godzilla => &[Capability::Climb, Capability::Swim],
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    pub(crate) fn movement(&self) -> &'static str {
        match self {
            Self::Shark => "swimming",
            _ => "moving",
        }
    }

    pub(crate) fn sound(&self) -> &'static str {
        match self {
            Self::Elephant => "trumpeting",
            _ => "making sound",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Climb => "climbing",
            Self::Swim => "swimming",
            Self::Fly => "flying",
        }
    }
}
