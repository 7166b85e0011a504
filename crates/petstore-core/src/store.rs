use crate::error::{PetstoreError, Result};
use crate::pet::Pet;

/// In-memory pet collection
///
/// Pets are kept in insertion order. Ids come from a monotonic counter,
/// so an id is never reused within the process lifetime, even after the
/// pet it belonged to is deleted.
#[derive(Debug, Clone)]
pub struct PetStore {
    pets: Vec<Pet>,
    next_id: u64,
}

impl PetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            pets: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the three seed pets
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.insert("cat", "cute");
        store.insert("dog", "gentle");
        store.insert("wolf", "dangerous");
        store
    }

    /// List pets in insertion order
    ///
    /// When `tags` is given, only pets whose tag is one of them are
    /// returned. `limit` caps the result count after filtering.
    pub fn list(&self, tags: Option<&[String]>, limit: Option<usize>) -> Vec<Pet> {
        let mut pets: Vec<Pet> = match tags {
            Some(tags) => self
                .pets
                .iter()
                .filter(|pet| tags.iter().any(|tag| *tag == pet.tag))
                .cloned()
                .collect(),
            None => self.pets.clone(),
        };

        if let Some(limit) = limit {
            pets.truncate(limit);
        }

        pets
    }

    /// Look up a pet by id
    pub fn get(&self, id: u64) -> Result<&Pet> {
        self.pets
            .iter()
            .find(|pet| pet.id == id)
            .ok_or_else(|| PetstoreError::pet_not_found(id.to_string()))
    }

    /// Insert a new pet, assigning it the next id
    pub fn insert(&mut self, name: impl Into<String>, tag: impl Into<String>) -> Pet {
        let pet = Pet::new(self.next_id, name, tag);
        self.next_id += 1;
        self.pets.push(pet.clone());
        pet
    }

    /// Overwrite the name and tag of an existing pet
    pub fn update(&mut self, id: u64, name: impl Into<String>, tag: impl Into<String>) -> Result<Pet> {
        let pet = self
            .pets
            .iter_mut()
            .find(|pet| pet.id == id)
            .ok_or_else(|| PetstoreError::pet_not_found(id.to_string()))?;

        pet.name = name.into();
        pet.tag = tag.into();
        Ok(pet.clone())
    }

    /// Remove a pet by id, returning the removed record
    pub fn remove(&mut self, id: u64) -> Result<Pet> {
        let index = self
            .pets
            .iter()
            .position(|pet| pet.id == id)
            .ok_or_else(|| PetstoreError::pet_not_found(id.to_string()))?;

        Ok(self.pets.remove(index))
    }

    /// Number of pets currently stored
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    /// Whether the store holds no pets
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

impl Default for PetStore {
    fn default() -> Self {
        Self::new()
    }
}
