use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, ErrorKind, RedisError, RedisResult};
use tokio::sync::OnceCell;
use tracing::{debug, error, warn};

use business::domain::cart::cache::CartCache;
use business::domain::cart::model::Cart;
use business::domain::errors::CacheError;
use business::domain::shared::value_objects::CartId;

use super::entity::CartEntity;

const WRONG_TYPE_CODE: &str = "WRONGTYPE";

/// Cart snapshots stored as JSON strings keyed by cart id.
///
/// The connection is opened on first use. Until Redis answers, every
/// command fails with `CacheError::Connection` and `alive` reports false.
pub struct RedisCartCache {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    timeout: Duration,
}

impl RedisCartCache {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            connection: OnceCell::new(),
            timeout,
        }
    }

    /// Opens the shared connection if it is not open yet.
    pub async fn connect(&self) -> Result<ConnectionManager, CacheError> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                match tokio::time::timeout(
                    self.timeout,
                    ConnectionManager::new(self.client.clone()),
                )
                .await
                {
                    Ok(Ok(manager)) => Ok(manager),
                    Ok(Err(e)) => {
                        warn!(cache_error = %e, "Cache connection failed");
                        Err(CacheError::Connection)
                    }
                    Err(_) => {
                        warn!(timeout = ?self.timeout, "Cache connection timed out");
                        Err(CacheError::Connection)
                    }
                }
            })
            .await?;
        Ok(manager.clone())
    }

    async fn run<T>(&self, command: impl Future<Output = RedisResult<T>>) -> Result<T, CacheError> {
        match tokio::time::timeout(self.timeout, command).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                error!(cache_error = %e, "Cache command failed");
                Err(classify(&e))
            }
            Err(_) => {
                error!(timeout = ?self.timeout, "Cache command timed out");
                Err(CacheError::Timeout)
            }
        }
    }
}

/// A value of the wrong shape under a cart key is unreadable, not an outage.
fn classify(err: &RedisError) -> CacheError {
    if err.kind() == ErrorKind::TypeError || err.code() == Some(WRONG_TYPE_CODE) {
        CacheError::Serialization
    } else {
        CacheError::Connection
    }
}

#[async_trait]
impl CartCache for RedisCartCache {
    async fn save(&self, cart: &Cart, ttl: Option<Duration>) -> Result<(), CacheError> {
        let payload = CartEntity::encode(cart)?;
        debug!(cache_action = "save", key = %cart.id, value = %payload);

        let mut conn = self.connect().await?;
        let key = cart.id.as_str();
        match ttl {
            Some(ttl) => {
                self.run(conn.set_ex::<_, _, ()>(key, payload, ttl.as_secs().max(1)))
                    .await
            }
            None => self.run(conn.set::<_, _, ()>(key, payload)).await,
        }
    }

    async fn get(&self, id: &CartId) -> Result<Cart, CacheError> {
        debug!(cache_action = "get", key = %id);

        let mut conn = self.connect().await?;
        let raw: Option<Vec<u8>> = self.run(conn.get(id.as_str())).await?;
        let raw = raw.ok_or(CacheError::NotFound)?;

        CartEntity::decode(&raw).inspect_err(|_| {
            error!(key = %id, "Stored cart snapshot could not be decoded");
        })
    }

    async fn delete(&self, id: &CartId) -> Result<(), CacheError> {
        debug!(cache_action = "delete", key = %id);

        let mut conn = self.connect().await?;
        let erased: i64 = self.run(conn.del(id.as_str())).await?;
        if erased == 0 {
            return Err(CacheError::NotFound);
        }
        Ok(())
    }

    async fn alive(&self) -> bool {
        debug!(cache_action = "ping");

        let Ok(mut conn) = self.connect().await else {
            return false;
        };
        let pong: Result<String, CacheError> = self
            .run(async move { redis::cmd("PING").query_async(&mut conn).await })
            .await;
        pong.is_ok()
    }
}
