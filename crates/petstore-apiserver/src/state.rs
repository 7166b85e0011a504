use petstore_core::PetStore;
use tokio::sync::RwLock;

/// Shared application state
///
/// The pet collection lives behind one `RwLock`, so every handler sees
/// it change atomically. Reads share the lock, mutations take it
/// exclusively for the whole operation.
pub struct AppState {
    /// The process-lifetime pet collection
    pub store: RwLock<PetStore>,
}

impl AppState {
    /// Create state holding the three seed pets
    pub fn new() -> Self {
        Self::with_store(PetStore::seeded())
    }

    /// Create state over an explicit store
    pub fn with_store(store: PetStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_state_is_seeded() {
        let state = AppState::new();
        assert_eq!(state.store.read().await.len(), 3);
    }

    #[tokio::test]
    async fn test_with_store() {
        let state = AppState::with_store(PetStore::new());
        assert!(state.store.read().await.is_empty());
    }
}
