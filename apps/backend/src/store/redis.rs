//! Redis-backed game record store.
//!
//! Records are hashes keyed by the game id. Connections are
//! request-scoped: acquired at the start of each call and dropped on
//! every exit path.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::domain::{GameRecord, NewGame};
use crate::error::AppError;
use crate::store::GameStore;

const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

pub struct RedisGameStore {
    client: redis::Client,
}

impl RedisGameStore {
    /// Build a store from `REDIS_URL` (defaults to a local instance).
    pub fn from_env() -> Result<Self, AppError> {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());
        let client = redis::Client::open(url.as_str())
            .map_err(|e| AppError::config(format!("invalid REDIS_URL `{url}`: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GameStore for RedisGameStore {
    async fn create(&self, game: &NewGame) -> Result<String, AppError> {
        let id = Uuid::new_v4().to_string();
        let fields = [
            ("username", game.author.as_str()),
            ("truth1", game.truth1.as_str()),
            ("truth2", game.truth2.as_str()),
            ("lie", game.lie.as_str()),
        ];

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.hset_multiple(&id, &fields).await?;
        Ok(id)
    }

    async fn fetch(&self, id: &str) -> Result<Option<GameRecord>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let fields: HashMap<String, String> = conn.hgetall(id).await?;
        if fields.is_empty() {
            return Ok(None);
        }

        let field = |name: &str| {
            fields.get(name).cloned().ok_or_else(|| {
                AppError::store(format!("game `{id}` is missing field `{name}`"))
            })
        };

        Ok(Some(GameRecord {
            id: id.to_string(),
            author: field("username")?,
            truth1: field("truth1")?,
            truth2: field("truth2")?,
            lie: field("lie")?,
        }))
    }
}
