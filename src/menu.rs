//! The main menu: renders the options and dispatches a numeric choice.

use std::io::{BufRead, Write};

use crate::console::{parse_option, Console};
use crate::error::Result;
use crate::models::{Animal, FoodType, Species};
use crate::zoo::Zoo;

pub const BANNER: [&str; 2] = [
    "Welcome to JOY ZOO Management APP <3",
    "THE GREATNESS OF A NATION CAN BE JUDGED BY THE WAY ITS ANIMALS ARE TREATED",
];

const OPTIONS: [&str; 6] = [
    "1. Animals that can be seen in JOY Zoo",
    "2. Add Animal",
    "3. Track",
    "4. Interaction",
    "5. Show Food Schedule",
    "6. Exit",
];

/// Printed once, by the menu, when an animal refuses its food.
pub const INVALID_FOOD_DIAGNOSTIC: &str = "Animal cannot eat that";

/// Runtime switches for a menu session.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Show the menu again after each action instead of ending.
    pub repeat: bool,
    pub banner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repeat: false,
            banner: true,
        }
    }
}

/// A menu choice. Every integer maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AvailableAnimals,
    AddAnimal,
    Track,
    Interaction,
    FoodSchedule,
    Exit,
    Invalid(i32),
}

impl MenuOption {
    pub fn from_choice(choice: i32) -> Self {
        match choice {
            1 => Self::AvailableAnimals,
            2 => Self::AddAnimal,
            3 => Self::Track,
            4 => Self::Interaction,
            5 => Self::FoodSchedule,
            6 => Self::Exit,
            other => Self::Invalid(other),
        }
    }

    fn acknowledgement(&self) -> &'static str {
        match self {
            Self::AvailableAnimals => "You selected option 1",
            Self::AddAnimal => "You selected Option 2.",
            Self::Track => "You selected Option 3.",
            Self::Interaction => "You selected Option 4.",
            Self::FoodSchedule => "You selected Option 5.",
            Self::Exit => "Exiting...",
            Self::Invalid(_) => "Invalid option. Please select a valid option.",
        }
    }
}

/// Where the menu stands after handling a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    Terminated,
}

pub struct Menu<R, W> {
    console: Console<R, W>,
    zoo: Zoo,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(console: Console<R, W>, zoo: Zoo) -> Self {
        Self { console, zoo }
    }

    pub fn zoo(&self) -> &Zoo {
        &self.zoo
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run a full session: banner, menu, and one dispatch (or several when
    /// `settings.repeat` is set). Returns the state the menu ended in.
    pub fn run(&mut self, settings: Settings) -> Result<MenuState> {
        if settings.banner {
            for line in BANNER {
                self.console.line(line)?;
            }
            self.console.blank()?;
        }

        loop {
            self.display()?;

            let Some(input) = self.console.read_line()? else {
                if !settings.repeat {
                    self.console
                        .line("Invalid option. Please enter a valid number.")?;
                }
                return Ok(MenuState::AwaitingChoice);
            };

            let state = match parse_option(&input) {
                Some(choice) => self.process_option(choice)?,
                None => {
                    tracing::debug!(input = %input, "menu choice is not a number");
                    self.console
                        .line("Invalid option. Please enter a valid number.")?;
                    MenuState::AwaitingChoice
                }
            };

            if state == MenuState::Terminated || !settings.repeat {
                return Ok(state);
            }
        }
    }

    pub fn display(&mut self) -> Result<()> {
        self.console.line("Please choose an option:")?;
        self.console.blank()?;
        for option in OPTIONS {
            self.console.line(option)?;
        }
        Ok(())
    }

    pub fn process_option(&mut self, choice: i32) -> Result<MenuState> {
        let option = MenuOption::from_choice(choice);
        tracing::debug!(?option, "dispatching menu choice");
        self.console.line(option.acknowledgement())?;

        match option {
            MenuOption::AvailableAnimals => self.available_animals()?,
            MenuOption::AddAnimal => self.add_animal()?,
            MenuOption::Track => self.track()?,
            MenuOption::Interaction => self.interaction()?,
            MenuOption::FoodSchedule => self.food_schedule()?,
            MenuOption::Exit => return Ok(MenuState::Terminated),
            MenuOption::Invalid(_) => {}
        }
        Ok(MenuState::AwaitingChoice)
    }

    fn available_animals(&mut self) -> Result<()> {
        self.console
            .line("These are the animals you'll find in JOY ZOO")?;
        self.console.blank()?;
        for species in Species::ALL {
            self.console.line(species.as_str())?;
        }
        Ok(())
    }

    fn add_animal(&mut self) -> Result<()> {
        let classification = self.console.ask("What is the animal's classification :")?;
        let name = self.console.ask("Name of animal : ")?;
        let age = self.console.ask("Age  : ")?;
        let weight = self.console.ask_weight()?;
        let habitat = self
            .console
            .ask("Habitat (Place where animal makes home)  :")?;

        match (Species::from_str(&classification), age.trim().parse::<u32>()) {
            (Some(species), Ok(age)) => {
                self.zoo
                    .add(Animal::new(species, name.clone(), age, weight, habitat));
            }
            _ => tracing::debug!(
                classification = %classification,
                age = %age,
                "entry not registered: unknown species or unreadable age"
            ),
        }

        self.console.line(format!(
            "Animal added successfully, {} is part of the JOY ZOO",
            name
        ))?;
        self.console.line("THANK YOU <3.")
    }

    fn track(&mut self) -> Result<()> {
        self.console.line("Location of all animals in JOY ZOO")?;
        self.console.blank()?;
        for animal in self.zoo.animals() {
            self.console.line(animal.display_info())?;
            self.console.blank()?;
        }
        Ok(())
    }

    fn interaction(&mut self) -> Result<()> {
        self.console.line("Interacting with animals in JOY ZOO")?;
        let animals = self.zoo.animals().to_vec();
        for animal in &animals {
            self.console.blank()?;
            self.console.line(format!(
                "Interacting with {}:",
                animal.species.as_str().to_lowercase()
            ))?;
            self.console.line(animal.display_info())?;
            self.feed(animal, animal.diet().preferred_food())?;
            self.console.line(animal.move_around())?;
            self.console.line(animal.make_sound())?;
        }
        Ok(())
    }

    /// Offer `food` to `animal` and report the outcome on the console.
    ///
    /// A refused meal is logged and printed here and nowhere else; only
    /// console failures are returned.
    pub fn feed(&mut self, animal: &Animal, food: FoodType) -> Result<()> {
        match animal.eat(food) {
            Ok(line) => self.console.line(line),
            Err(err) => {
                tracing::warn!(name = %animal.name, "{err}");
                self.console.line(INVALID_FOOD_DIAGNOSTIC)
            }
        }
    }

    fn food_schedule(&mut self) -> Result<()> {
        self.console
            .line("Feeding schedule for animals in JOY ZOO")?;
        self.console.blank()?;
        for animal in self.zoo.animals() {
            self.console.line(format!(
                "{} - Feeding Schedule: {}",
                animal.name,
                animal.diet().feeding_schedule()
            ))?;
        }
        Ok(())
    }
}
