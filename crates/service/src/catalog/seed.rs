//! Demo catalog contents for a fresh process.

use models::pet::{Gender, Pet, PetSize, Species};

fn pet(id: u64, name: &str, species: Species, age: &str, gender: Gender, size: PetSize) -> Pet {
    Pet {
        id,
        name: name.to_string(),
        species,
        age: age.to_string(),
        gender,
        size,
        location: "São Paulo/SP".to_string(),
        description: format!("{name} is looking for a home."),
        image: format!("/assets/pets/{}.jpg", name.to_lowercase()),
        adopted: false,
        shelter: "ONG Mock de Teste".to_string(),
    }
}

/// The five demo animals every fresh process starts with.
pub fn pets() -> Vec<Pet> {
    vec![
        pet(1, "Rex", Species::Dog, "2 years", Gender::Male, PetSize::Large),
        pet(2, "Mia", Species::Cat, "1 year", Gender::Female, PetSize::Small),
        pet(3, "Bolt", Species::Dog, "3 years", Gender::Male, PetSize::Medium),
        pet(4, "Luna", Species::Dog, "4 months", Gender::Female, PetSize::Small),
        pet(5, "Nina", Species::Cat, "6 months", Gender::Female, PetSize::Small),
    ]
}
