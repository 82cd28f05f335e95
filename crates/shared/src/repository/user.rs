use crate::{
    abstract_trait::UserRepositoryTrait, config::ConnectionPool,
    domain::requests::RegisterRequest, errors::RepositoryError, model::User as UserModel,
    repository::map_constraint,
};
use async_trait::async_trait;
use tracing::{error, info};

const USER_COLUMNS: &str = "user_id, name, email, password, created_at, updated_at";

#[derive(Clone)]
pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(
        &self,
        req: &RegisterRequest,
        password_hash: &str,
    ) -> Result<UserModel, RepositoryError> {
        let sql = format!(
            "INSERT INTO users (name, email, password)
             VALUES ($1, $2, $3)
             RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(&req.name)
            .bind(&req.email)
            .bind(password_hash)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create user {}: {:?}", req.email, err);
                map_constraint(err)
            })?;

        info!("✅ Created user ID {} ({})", user.user_id, user.email);
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(email)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(user)
    }

    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserModel>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1");

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(user_id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(user)
    }
}
