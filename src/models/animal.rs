use crate::error::{Result, ZooError};

use super::diet::{DietInfo, FoodType};
use super::species::{Capability, Species};

/// An animal living in the zoo.
///
/// The diet is fixed by the species when the animal is created. Weight is
/// only range-checked where it is typed in, not here.
///
/// Behaviors return the line they would announce instead of printing it, so
/// the caller decides where output goes.
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    pub species: Species,
    pub name: String,
    pub age: u32,
    pub weight: f64,
    pub habitat: String,
    diet: DietInfo,
}

impl Animal {
    pub fn new(
        species: Species,
        name: impl Into<String>,
        age: u32,
        weight: f64,
        habitat: impl Into<String>,
    ) -> Self {
        Self {
            species,
            name: name.into(),
            age,
            weight,
            habitat: habitat.into(),
            diet: species.diet(),
        }
    }

    pub fn diet(&self) -> DietInfo {
        self.diet
    }

    /// Offer food to the animal.
    ///
    /// Elephants and sharks refuse anything but their one food category;
    /// buffalo and Godzilla eat whatever they are given.
    pub fn eat(&self, food: FoodType) -> Result<String> {
        match self.species.required_food() {
            Some(required) if required != food => Err(ZooError::InvalidFood {
                species: self.species,
                food,
            }),
            _ => Ok(format!("{} is eating...", self.species)),
        }
    }

    pub fn move_around(&self) -> String {
        format!("{} is {}...", self.species, self.species.movement())
    }

    pub fn make_sound(&self) -> String {
        format!("{} is {}...", self.species, self.species.sound())
    }

    pub fn display_info(&self) -> String {
        format!(
            "Name: {}, Age: {}, Weight: {}, Habitat: {}",
            self.name, self.age, self.weight, self.habitat
        )
    }

    /// Perform an extra behavior. Returns `None` when the species lacks it.
    pub fn perform(&self, capability: Capability) -> Option<String> {
        self.species
            .can(capability)
            .then(|| format!("{} is {}...", self.species, capability.as_str()))
    }

    pub fn climb(&self) -> Option<String> {
        self.perform(Capability::Climb)
    }

    pub fn swim(&self) -> Option<String> {
        self.perform(Capability::Swim)
    }
}
