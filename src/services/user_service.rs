use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::User,
    models::dto::request::{CreateUserRequest, ExtendAccessRequest},
    repositories::UserRepository,
    services::access_window::AccessWindow,
};

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        request.validate()?;

        if self
            .users
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "User with username '{}' already exists",
                request.username
            )));
        }

        let user = User::new(&request.username, request.role, request.expires_at);
        self.users.create(user).await
    }

    pub async fn get_user(&self, id: &Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))
    }

    /// Extends a student's access window. The new expiration anchors at the
    /// later of the current expiration and now, so an expired account
    /// restarts its clock instead of crediting dead time.
    pub async fn extend_access(
        &self,
        user_id: &Uuid,
        request: ExtendAccessRequest,
    ) -> AppResult<DateTime<Utc>> {
        request.validate()?;

        let user = self.get_user(user_id).await?;
        let new_expiration = AccessWindow::extended_expiration(&user, request.hours, Utc::now());

        self.users
            .set_expiration(user_id, Some(new_expiration))
            .await?;

        log::info!(
            "extended access for user '{}' by {}h, now expires {}",
            user.username,
            request.hours,
            new_expiration
        );
        Ok(new_expiration)
    }
}
