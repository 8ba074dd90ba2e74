use crate::{
    error::{AppError, AppResult},
    models::{resolve_id, user, User, UserModel, UserRole},
    response::{DeleteOutcome, UpdateOutcome},
};
use sea_orm::{
    sea_query::Expr, ActiveEnum, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Statement,
};

/// Profile fields a client sends on login.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Option<UserRole>,
}

pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert-if-absent keyed by email.
    ///
    /// An existing user comes back untouched, creation timestamp included.
    pub async fn upsert_by_email(&self, email: &str, profile: UserProfile) -> AppResult<UserModel> {
        if let Some(existing) = User::find_by_email(email).one(&self.db).await? {
            return Ok(existing);
        }

        let role = profile.role.unwrap_or_default();
        // Two first logins racing on the same email both land here.
        self.db
            .execute(Statement::from_sql_and_values(
                sea_orm::DatabaseBackend::Postgres,
                "INSERT INTO users (id, email, name, photo, role, created_at)
                 VALUES ($1, $2, $3, $4, $5, NOW())
                 ON CONFLICT (email) DO NOTHING",
                vec![
                    resolve_id(None).into(),
                    email.into(),
                    profile.name.into(),
                    profile.photo.into(),
                    role.to_value().into(),
                ],
            ))
            .await?;

        User::find_by_email(email)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn list_all(&self) -> AppResult<Vec<UserModel>> {
        let users = User::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(users)
    }

    pub async fn list_agents(&self) -> AppResult<Vec<UserModel>> {
        let agents = User::find_by_role(UserRole::Agent).all(&self.db).await?;
        Ok(agents)
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<UserModel> {
        User::find_by_email(email)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: &str) -> AppResult<DeleteOutcome> {
        let result = User::delete_by_id(id.to_string()).exec(&self.db).await?;
        Ok(result.into())
    }

    pub async fn update_role(&self, id: &str, role: UserRole) -> AppResult<UpdateOutcome> {
        let result = User::update_many()
            .col_expr(user::Column::Role, Expr::value(role.to_value()))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.into())
    }
}
