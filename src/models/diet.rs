/// The category of food an animal is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodType {
    Meat,
    Vegetation,
    Mixed,
}

impl FoodType {
    pub const ALL: [FoodType; 3] = [Self::Meat, Self::Vegetation, Self::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meat => "meat",
            Self::Vegetation => "vegetation",
            Self::Mixed => "mixed",
        }
    }
}

/// Dietary information attached to an animal: what it prefers and how often
/// it is fed.
///
/// Fields are private so a descriptor cannot change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietInfo {
    preferred_food: FoodType,
    feeding_schedule: &'static str,
}

impl DietInfo {
    pub const fn new(preferred_food: FoodType, feeding_schedule: &'static str) -> Self {
        Self {
            preferred_food,
            feeding_schedule,
        }
    }

    pub fn preferred_food(&self) -> FoodType {
        self.preferred_food
    }

    pub fn feeding_schedule(&self) -> &'static str {
        self.feeding_schedule
    }
}
