use joy_zoo::models::*;
use joy_zoo::zoo::{residents, Zoo};
use joy_zoo::ZooError;
use speculate2::speculate;

fn animal(species: Species) -> Animal {
    Animal::new(species, "Test", 3, 120.5, "Pen 4")
}

speculate! {
    describe "display_info" {
        it "formats name, age, weight and habitat for every species" {
            for species in Species::ALL {
                assert_eq!(
                    animal(species).display_info(),
                    "Name: Test, Age: 3, Weight: 120.5, Habitat: Pen 4"
                );
            }
        }

        it "prints whole weights without a fractional part" {
            let filly = Animal::new(Species::Elephant, "Filly", 24, 4000.0, "Zoo Forest");
            assert_eq!(
                filly.display_info(),
                "Name: Filly, Age: 24, Weight: 4000, Habitat: Zoo Forest"
            );
        }
    }

    describe "eat" {
        it "lets an elephant eat vegetation only" {
            let elephant = animal(Species::Elephant);
            assert_eq!(elephant.eat(FoodType::Vegetation).unwrap(), "Elephant is eating...");

            for food in [FoodType::Meat, FoodType::Mixed] {
                match elephant.eat(food) {
                    Err(ZooError::InvalidFood { species, food: offered }) => {
                        assert_eq!(species, Species::Elephant);
                        assert_eq!(offered, food);
                    }
                    other => panic!("expected InvalidFood, got {:?}", other),
                }
            }
        }

        it "lets a shark eat meat only" {
            let shark = animal(Species::Shark);
            assert_eq!(shark.eat(FoodType::Meat).unwrap(), "Shark is eating...");
            assert!(matches!(shark.eat(FoodType::Vegetation), Err(ZooError::InvalidFood { .. })));
            assert!(matches!(shark.eat(FoodType::Mixed), Err(ZooError::InvalidFood { .. })));
        }

        it "lets buffalo and godzilla eat anything" {
            for species in [Species::Buffalo, Species::Godzilla] {
                for food in FoodType::ALL {
                    assert_eq!(
                        animal(species).eat(food).unwrap(),
                        format!("{} is eating...", species)
                    );
                }
            }
        }

        it "describes the refusal in the error message" {
            let err = animal(Species::Elephant).eat(FoodType::Meat).unwrap_err();
            assert_eq!(err.to_string(), "Elephant can only eat vegetation");

            let err = animal(Species::Shark).eat(FoodType::Vegetation).unwrap_err();
            assert_eq!(err.to_string(), "Shark can only eat meat");
        }
    }

    describe "movement and sound" {
        it "announces species specific movement" {
            assert_eq!(animal(Species::Elephant).move_around(), "Elephant is moving...");
            assert_eq!(animal(Species::Shark).move_around(), "Shark is swimming...");
            assert_eq!(animal(Species::Buffalo).move_around(), "Buffalo is moving...");
            assert_eq!(animal(Species::Godzilla).move_around(), "Godzilla is moving...");
        }

        it "announces species specific sounds" {
            assert_eq!(animal(Species::Elephant).make_sound(), "Elephant is trumpeting...");
            assert_eq!(animal(Species::Shark).make_sound(), "Shark is making sound...");
            assert_eq!(animal(Species::Buffalo).make_sound(), "Buffalo is making sound...");
            assert_eq!(animal(Species::Godzilla).make_sound(), "Godzilla is making sound...");
        }
    }

    describe "capabilities" {
        it "tags each species with exactly its capabilities" {
            assert_eq!(Species::Elephant.capabilities(), &[Capability::Climb]);
            assert_eq!(Species::Shark.capabilities(), &[Capability::Swim]);
            assert!(Species::Buffalo.capabilities().is_empty());
            assert_eq!(Species::Godzilla.capabilities(), &[Capability::Climb, Capability::Swim]);
        }

        it "gives no species the ability to fly" {
            for species in Species::ALL {
                assert!(!species.can(Capability::Fly));
                assert!(animal(species).perform(Capability::Fly).is_none());
            }
        }

        it "performs only the behaviors a species supports" {
            assert_eq!(animal(Species::Elephant).climb().as_deref(), Some("Elephant is climbing..."));
            assert!(animal(Species::Elephant).swim().is_none());

            assert_eq!(animal(Species::Shark).swim().as_deref(), Some("Shark is swimming..."));
            assert!(animal(Species::Shark).climb().is_none());

            assert!(animal(Species::Buffalo).climb().is_none());
            assert!(animal(Species::Buffalo).swim().is_none());

            assert_eq!(animal(Species::Godzilla).climb().as_deref(), Some("Godzilla is climbing..."));
            assert_eq!(animal(Species::Godzilla).swim().as_deref(), Some("Godzilla is swimming..."));
        }
    }

    describe "diet" {
        it "fixes the default diet per species" {
            let expected = [
                (Species::Elephant, FoodType::Vegetation, "Twice a day"),
                (Species::Shark, FoodType::Meat, "Once a day"),
                (Species::Buffalo, FoodType::Vegetation, "Three times a day"),
                (Species::Godzilla, FoodType::Mixed, "One huge Lion a day"),
            ];
            for (species, food, schedule) in expected {
                let diet = animal(species).diet();
                assert_eq!(diet.preferred_food(), food);
                assert_eq!(diet.feeding_schedule(), schedule);
            }
        }

        it "gives two animals of the same species identical diets" {
            for species in Species::ALL {
                let a = Animal::new(species, "A", 1, 10.0, "Here");
                let b = Animal::new(species, "B", 50, 900.0, "There");
                assert_eq!(a.diet(), b.diet());
            }
        }
    }

    describe "species lookup" {
        it "matches names case-insensitively" {
            assert_eq!(Species::from_str("elephant"), Some(Species::Elephant));
            assert_eq!(Species::from_str(" GODZILLA "), Some(Species::Godzilla));
            assert_eq!(Species::from_str("Mammal"), None);
        }
    }

    describe "zoo" {
        it "seeds the four residents in order" {
            let zoo = Zoo::with_residents();
            let names: Vec<_> = zoo.animals().iter().map(|a| a.name.as_str()).collect();
            assert_eq!(names, ["Filly", "Killer", "Cyril", "Goerge"]);

            let species: Vec<_> = zoo.animals().iter().map(|a| a.species).collect();
            assert_eq!(species, Species::ALL);
        }

        it "appends added animals after the residents" {
            let mut zoo = Zoo::with_residents();
            zoo.add(Animal::new(Species::Shark, "Bruce", 5, 900.0, "Reef Tank"));
            assert_eq!(zoo.len(), 5);
            assert_eq!(zoo.animals()[4].name, "Bruce");
        }

        it "starts empty when asked" {
            assert!(Zoo::empty().is_empty());
            assert_eq!(residents().len(), 4);
        }
    }
}
