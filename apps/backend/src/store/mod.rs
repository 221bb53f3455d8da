//! Game record store interface and implementations.

pub mod memory;
pub mod redis;

use async_trait::async_trait;

use crate::domain::{GameRecord, NewGame};
use crate::error::AppError;

/// Opaque key-value record store for games.
///
/// `create` generates a fresh id per call. Duplicate confirm
/// invocations therefore create distinct records; the protocol does
/// not guarantee at-most-once delivery of confirm, and this store
/// keeps that documented non-idempotence visible instead of masking it.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn create(&self, game: &NewGame) -> Result<String, AppError>;

    async fn fetch(&self, id: &str) -> Result<Option<GameRecord>, AppError>;
}

pub use self::memory::MemoryGameStore;
pub use self::redis::RedisGameStore;
