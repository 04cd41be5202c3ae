//! Pre-built people and pets for grouping and join scenarios.

use serde::{Deserialize, Serialize};

/// A person, ordered by age and then name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Person {
    pub age: u32,
    pub name: String,
}

impl Person {
    /// Build from borrowed strings.
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            age,
            name: name.to_string(),
        }
    }
}

/// A pet referring to its owner by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pet {
    pub name: String,
    pub owner: String,
}

impl Pet {
    /// Build from borrowed strings.
    pub fn new(name: &str, owner: &str) -> Self {
        Self {
            name: name.to_string(),
            owner: owner.to_string(),
        }
    }
}

/// Nine people; "Robbie" (23) appears twice.
///
/// # Example
///
/// ```
/// use lava::testing::sample_people;
///
/// let people = sample_people();
/// assert_eq!(people.len(), 9);
/// ```
#[must_use]
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("Robbie", 23),
        Person::new("Robbie", 23),
        Person::new("Stephanie", 24),
        Person::new("Alex", 1),
        Person::new("Todd", 34),
        Person::new("Mark", 21),
        Person::new("Dan", 28),
        Person::new("Justin", 42),
        Person::new("Brian", 44),
    ]
}

/// Pets owned by people in [`sample_people`]; Alex owns none and one pet has
/// an owner who is not in the sample.
#[must_use]
pub fn sample_pets() -> Vec<Pet> {
    vec![
        Pet::new("Rex", "Robbie"),
        Pet::new("Whiskers", "Stephanie"),
        Pet::new("Tom", "Todd"),
        Pet::new("Spot", "Robbie"),
        Pet::new("Goldie", "Dan"),
        Pet::new("Stray", "Nobody"),
    ]
}

/// `per_person(p)` pets for each person, named `"{owner}-{i}"`.
#[must_use]
pub fn pets_for(people: &[Person], per_person: impl Fn(&Person) -> usize) -> Vec<Pet> {
    people
        .iter()
        .flat_map(|p| (0..per_person(p)).map(move |i| Pet::new(&format!("{}-{i}", p.name), &p.name)))
        .collect()
}
