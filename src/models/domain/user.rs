use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Student,
}

/// A service account. Credentials are handled by the authentication
/// collaborator and are not stored here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    /// `None` means unrestricted access.
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: &str, role: UserRole, expires_at: Option<DateTime<Utc>>) -> Self {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            role,
            expires_at,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("student1", UserRole::Student, None);
        assert_eq!(user.username, "student1");
        assert_eq!(user.role, UserRole::Student);
        assert!(user.expires_at.is_none());
    }

    #[test]
    fn test_user_with_expiration() {
        let expires = Utc::now() + Duration::hours(48);
        let user = User::new("student2", UserRole::Student, Some(expires));
        assert_eq!(user.expires_at, Some(expires));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&UserRole::Student).unwrap(),
            "\"student\""
        );
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }
}
