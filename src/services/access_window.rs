use chrono::{DateTime, Duration, Utc};

use crate::models::domain::User;

/// Timed-access rules for student accounts. A `None` expiration means
/// unrestricted access.
pub struct AccessWindow;

impl AccessWindow {
    pub fn is_active(user: &User) -> bool {
        Self::is_active_at(user, Utc::now())
    }

    /// Re-evaluated on every check; nothing is cached.
    pub fn is_active_at(user: &User, now: DateTime<Utc>) -> bool {
        match user.expires_at {
            None => true,
            Some(expires_at) => expires_at > now,
        }
    }

    /// New expiration after an extension: `max(expires_at, now) + hours`.
    /// Extending an already-expired account restarts the clock from now, so
    /// purchased hours are never spent on dead time.
    pub fn extended_expiration(user: &User, hours: i64, now: DateTime<Utc>) -> DateTime<Utc> {
        let base = match user.expires_at {
            Some(expires_at) if expires_at > now => expires_at,
            _ => now,
        };
        base + Duration::hours(hours)
    }
}
