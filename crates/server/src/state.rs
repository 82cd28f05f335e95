use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use deadpool_redis::Runtime;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynJwtService,
    cache::{CacheStore, SessionStore},
    config::{Config, ConnectionManager, ConnectionPool, JwtConfig, RedisClient},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub session: Arc<SessionStore>,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub db: ConnectionPool,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;

        info!("Connecting to Postgres");
        let db = ConnectionManager::new_pool(&config.database_url)
            .await
            .context("Failed to create database pool")?;

        if config.run_migrations {
            info!("Running database migrations");
            sqlx::migrate!("../../migrations")
                .run(&db)
                .await
                .context("Failed to run migrations")?;
        }

        info!("Connecting to Redis");
        let redis = RedisClient::new(&config.redis).context("Failed to create Redis client")?;
        redis.ping().context("Failed to ping Redis server")?;

        let session = Arc::new(SessionStore::new(redis.client.clone()));

        let redis_pool = deadpool_redis::Config::from_url(config.redis.url())
            .create_pool(Some(Runtime::Tokio1))
            .context("Failed to create Redis connection pool")?;
        let cache_store = Arc::new(CacheStore::new(redis_pool));

        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(
            db.clone(),
            jwt_config.clone(),
            session.clone(),
            cache_store,
            &mut registry,
        );

        Ok(Self {
            jwt_config,
            session,
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            db,
        })
    }
}
