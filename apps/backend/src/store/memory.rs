//! In-memory game record store, used by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::{GameRecord, NewGame};
use crate::error::AppError;
use crate::store::GameStore;

#[derive(Default)]
pub struct MemoryGameStore {
    games: RwLock<HashMap<String, GameRecord>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, bypassing the create flow.
    pub fn insert(&self, record: GameRecord) {
        self.games.write().insert(record.id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn create(&self, game: &NewGame) -> Result<String, AppError> {
        let id = Uuid::new_v4().to_string();
        let record = GameRecord {
            id: id.clone(),
            author: game.author.clone(),
            truth1: game.truth1.clone(),
            truth2: game.truth2.clone(),
            lie: game.lie.clone(),
        };
        self.games.write().insert(id.clone(), record);
        Ok(id)
    }

    async fn fetch(&self, id: &str) -> Result<Option<GameRecord>, AppError> {
        Ok(self.games.read().get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> NewGame {
        NewGame {
            author: "Ann".into(),
            truth1: "I can swim".into(),
            truth2: "I own a cat".into(),
            lie: "I hate coffee".into(),
        }
    }

    #[tokio::test]
    async fn create_then_fetch_returns_the_fields_verbatim() {
        let store = MemoryGameStore::new();
        let id = store.create(&new_game()).await.unwrap();

        let record = store.fetch(&id).await.unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.author, "Ann");
        assert_eq!(record.lie, "I hate coffee");
    }

    #[tokio::test]
    async fn fetch_of_unknown_id_is_none() {
        let store = MemoryGameStore::new();
        assert!(store.fetch("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn repeated_create_yields_distinct_ids() {
        let store = MemoryGameStore::new();
        let a = store.create(&new_game()).await.unwrap();
        let b = store.create(&new_game()).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
