use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, DynUserRepository},
    cache::{CacheStore, Session, SessionStore},
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use chrono::Duration;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info, warn};

const MAX_LOGIN_ATTEMPTS: i32 = 5;
const SESSION_TTL_MINUTES: i64 = 30;

pub struct AuthService {
    hash: DynHashing,
    jwt: DynJwtService,
    user_repository: DynUserRepository,
    session_store: Arc<SessionStore>,
    cache_store: Arc<CacheStore>,
    metrics: Metrics,
}

pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub user_repository: DynUserRepository,
    pub session_store: Arc<SessionStore>,
    pub cache_store: Arc<CacheStore>,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "auth_service_request_counter",
            "Total number of requests to the AuthService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "auth_service_request_duration",
            "Histogram of request durations for the AuthService",
            metrics.request_duration.clone(),
        );

        Self {
            hash: deps.hash,
            jwt: deps.jwt,
            user_repository: deps.user_repository,
            session_store: deps.session_store,
            cache_store: deps.cache_store,
            metrics,
        }
    }

    fn record(&self, method: Method, started: Instant, ok: bool) {
        let status = if ok { Status::Success } else { Status::Error };
        self.metrics
            .record(method, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("📝 Registering new account for email: {}", req.email);
        let started = Instant::now();

        if let Some(_existing) = self.user_repository.find_by_email(&req.email).await? {
            warn!("❌ Email already registered: {}", req.email);
            self.record(Method::Post, started, false);
            return Err(ServiceError::Custom("Email already registered".to_string()));
        }

        let password_hash = self.hash.hash_password(&req.password).await?;

        let user = match self.user_repository.create_user(req, &password_hash).await {
            Ok(user) => user,
            Err(e) => {
                error!("❌ Failed to create user {}: {e:?}", req.email);
                self.record(Method::Post, started, false);
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Registered user ID {}", user.user_id);
        self.record(Method::Post, started, true);

        Ok(ApiResponse::success(
            "User registered successfully",
            UserResponse::from(user),
        ))
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("🔐 Attempting login for email: {}", req.email);
        let started = Instant::now();

        let failed_attempts_key = format!("auth:login_attempts:{}", req.email);
        let current_attempts = self
            .cache_store
            .get_from_cache::<i32>(&failed_attempts_key)
            .await
            .unwrap_or(0);

        if current_attempts >= MAX_LOGIN_ATTEMPTS {
            warn!("❌ Too many failed login attempts for {}", req.email);
            self.record(Method::Post, started, false);
            return Err(ServiceError::Custom(
                "Too many failed attempts. Try again later.".to_string(),
            ));
        }

        let user = match self.user_repository.find_by_email(&req.email).await? {
            Some(user) => user,
            None => {
                error!("❌ Unknown email: {}", req.email);
                self.cache_store
                    .set_to_cache(
                        &failed_attempts_key,
                        &(current_attempts + 1),
                        Duration::minutes(15),
                    )
                    .await;
                self.record(Method::Post, started, false);
                return Err(ServiceError::InvalidCredentials);
            }
        };

        if self
            .hash
            .compare_password(&user.password, &req.password)
            .await
            .is_err()
        {
            error!("❌ Invalid password for user: {}", req.email);
            self.cache_store
                .set_to_cache(
                    &failed_attempts_key,
                    &(current_attempts + 1),
                    Duration::minutes(15),
                )
                .await;
            self.record(Method::Post, started, false);
            return Err(ServiceError::InvalidCredentials);
        }

        self.cache_store.delete_from_cache(&failed_attempts_key).await;

        let access_token = self.jwt.generate_token(i64::from(user.user_id), "access")?;
        let refresh_token = self.jwt.generate_token(i64::from(user.user_id), "refresh")?;

        let session = Session {
            user_id: user.user_id,
            email: user.email.clone(),
        };
        self.session_store.create_session(
            &format!("session:{}", user.user_id),
            &session,
            Duration::minutes(SESSION_TTL_MINUTES),
        );

        info!("✅ Login successful for email: {}", req.email);
        self.record(Method::Post, started, true);

        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse {
                access_token,
                refresh_token,
            },
        ))
    }

    async fn me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let started = Instant::now();

        let user = match self.user_repository.find_by_id(user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                self.record(Method::Get, started, false);
                return Err(ServiceError::NotFound(format!(
                    "User with id {user_id} not found"
                )));
            }
            Err(e) => {
                self.record(Method::Get, started, false);
                return Err(e.into());
            }
        };

        self.record(Method::Get, started, true);

        Ok(ApiResponse::success("User fetched", UserResponse::from(user)))
    }

    async fn logout(&self, user_id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let started = Instant::now();

        self.session_store
            .delete_session(&format!("session:{user_id}"));

        info!("👋 Logged out user ID {user_id}");
        self.record(Method::Post, started, true);

        Ok(ApiResponse::success("Logged out", ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::UserRepositoryTrait,
        config::{Hashing, JwtConfig},
        errors::RepositoryError,
        model::User as UserModel,
    };
    use deadpool_redis::Runtime;
    use prometheus_client::encoding::text::encode;

    struct EmptyUsers;

    #[async_trait]
    impl UserRepositoryTrait for EmptyUsers {
        async fn create_user(
            &self,
            _req: &RegisterRequest,
            _password_hash: &str,
        ) -> Result<UserModel, RepositoryError> {
            unimplemented!("not exercised by these tests")
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<UserModel>, RepositoryError> {
            Ok(None)
        }

        async fn find_by_id(&self, _user_id: i32) -> Result<Option<UserModel>, RepositoryError> {
            Ok(None)
        }
    }

    // Redis handles connect lazily, so no server is needed here.
    fn service(registry: &mut Registry) -> AuthService {
        let redis_client =
            redis::Client::open("redis://127.0.0.1:1/0").expect("static redis url is valid");
        let redis_pool = deadpool_redis::Config::from_url("redis://127.0.0.1:1/0")
            .create_pool(Some(Runtime::Tokio1))
            .expect("static redis url is valid");

        AuthService::new(
            AuthServiceDeps {
                hash: Arc::new(Hashing::new()),
                jwt: Arc::new(JwtConfig::new("test-secret")),
                user_repository: Arc::new(EmptyUsers),
                session_store: Arc::new(SessionStore::new(redis_client)),
                cache_store: Arc::new(CacheStore::new(redis_pool)),
            },
            registry,
        )
    }

    #[tokio::test]
    async fn me_for_unknown_user_records_an_error_sample() {
        let mut registry = Registry::default();
        let svc = service(&mut registry);

        let err = svc.me(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();
        assert!(
            buffer.contains("auth_service_request_counter_total{method=\"Get\",status=\"Error\"} 1")
        );
    }
}
