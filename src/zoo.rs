//! In-memory animal registry for a single program run.

use crate::models::{Animal, Species};

/// Ordered collection of the animals currently in the zoo.
///
/// Nothing is persisted; the registry lives as long as the menu session.
#[derive(Debug, Clone, Default)]
pub struct Zoo {
    animals: Vec<Animal>,
}

impl Zoo {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A zoo holding the four resident animals.
    pub fn with_residents() -> Self {
        Self {
            animals: residents(),
        }
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn add(&mut self, animal: Animal) {
        tracing::debug!(name = %animal.name, species = %animal.species, "animal registered");
        self.animals.push(animal);
    }
}

/// The fixed roster shown by Track, Interaction and Show Food Schedule.
pub fn residents() -> Vec<Animal> {
    vec![
        Animal::new(Species::Elephant, "Filly", 24, 4000.0, "Zoo Forest"),
        Animal::new(Species::Shark, "Killer", 17, 105.0, "Aquaria"),
        Animal::new(Species::Buffalo, "Cyril", 67, 78.0, "Besides Entrance 1"),
        Animal::new(Species::Godzilla, "Goerge", 1532, 8000.0, "Zoo Forest"),
    ]
}
