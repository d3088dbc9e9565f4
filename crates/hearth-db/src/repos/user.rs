//! User repository and caller-context resolution.

use hearth_core::entities::User;
use hearth_core::enums::EntityType;
use hearth_core::errors::CoreError;
use hearth_core::identity::CallerContext;
use hearth_core::ids::PREFIX_USER;
use hearth_core::validate::{normalize_email, require_text};

use crate::error::{DatabaseError, conflict_on_unique};
use crate::helpers::{get_opt_string, now, parse_datetime, timestamp};
use crate::service::HearthService;

pub(crate) const USER_COLS: &str = "id, email, display_name, house_id, created_at, updated_at";

pub(crate) fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        display_name: row.get(2)?,
        house_id: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl HearthService {
    /// Register a user. Credentials are managed elsewhere.
    pub async fn create_user(
        &self,
        email: &str,
        display_name: &str,
    ) -> Result<User, DatabaseError> {
        let email = normalize_email(email)?;
        let display_name = require_text(display_name, "display_name")?;
        let now = now();
        let id = self.db().generate_id(PREFIX_USER).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO users ({USER_COLS}) VALUES (?1, ?2, ?3, NULL, ?4, ?5)"),
                libsql::params![
                    id.as_str(),
                    email.as_str(),
                    display_name.as_str(),
                    timestamp(now),
                    timestamp(now)
                ],
            )
            .await
            .map_err(|e| conflict_on_unique(e, || format!("email '{email}' is already in use")))?;

        tracing::debug!(user_id = %id, "user created");
        self.get_user(&id).await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {USER_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::User.as_str(), id))?;
        row_to_user(&row)
    }

    /// Build the caller context for `user_id` from current database state.
    ///
    /// Called once per invocation so membership changes are always reflected.
    pub async fn caller_for(&self, user_id: &str) -> Result<CallerContext, DatabaseError> {
        let user = self.get_user(user_id.trim()).await?;
        Ok(CallerContext {
            user_id: user.id,
            email: user.email,
            house_id: user.house_id,
        })
    }
}
