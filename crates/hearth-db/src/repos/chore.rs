//! Chore repository: recurring house tasks and their completions.

use hearth_core::entities::{Chore, ChoreCompletion};
use hearth_core::enums::{ChoreFrequency, EntityType};
use hearth_core::errors::CoreError;
use hearth_core::identity::CallerContext;
use hearth_core::ids::{PREFIX_CHORE, PREFIX_CHORE_COMPLETION};
use hearth_core::validate::{optional_text, require_text};

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, now, parse_datetime, parse_enum, timestamp};
use crate::service::HearthService;

const SELECT_COLS: &str =
    "id, house_id, title, frequency, assigned_to_id, is_archived, created_at, updated_at";

fn row_to_chore(row: &libsql::Row) -> Result<Chore, DatabaseError> {
    Ok(Chore {
        id: row.get(0)?,
        house_id: row.get(1)?,
        title: row.get(2)?,
        frequency: parse_enum(&row.get::<String>(3)?)?,
        assigned_to_id: get_opt_string(row, 4)?,
        is_archived: get_bool(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl HearthService {
    pub async fn create_chore(
        &self,
        caller: &CallerContext,
        title: &str,
        frequency: ChoreFrequency,
        assigned_to: Option<&str>,
    ) -> Result<Chore, DatabaseError> {
        let house_id = caller.require_house()?;
        let title = require_text(title, "title")?;
        let assigned_to = optional_text(assigned_to);
        if let Some(ref user_id) = assigned_to {
            self.ensure_assignee(house_id, user_id).await?;
        }

        let now = now();
        let id = self.db().generate_id(PREFIX_CHORE).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO chores ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    house_id,
                    title.as_str(),
                    frequency.as_str(),
                    assigned_to.as_deref(),
                    timestamp(now),
                    timestamp(now)
                ],
            )
            .await?;

        Ok(Chore {
            id,
            house_id: house_id.to_string(),
            title,
            frequency,
            assigned_to_id: assigned_to,
            is_archived: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Chores with the given archived flag, most recently updated first.
    pub async fn list_chores(
        &self,
        caller: &CallerContext,
        archived: bool,
    ) -> Result<Vec<Chore>, DatabaseError> {
        let house_id = caller.require_house()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM chores WHERE house_id = ?1 AND is_archived = ?2 \
                     ORDER BY updated_at DESC, id ASC"
                ),
                libsql::params![house_id, i64::from(archived)],
            )
            .await?;

        let mut chores = Vec::new();
        while let Some(row) = rows.next().await? {
            chores.push(row_to_chore(&row)?);
        }
        Ok(chores)
    }

    /// Record that the caller did the chore.
    pub async fn complete_chore(
        &self,
        caller: &CallerContext,
        chore_id: &str,
        note: Option<&str>,
    ) -> Result<ChoreCompletion, DatabaseError> {
        let house_id = caller.require_house()?;
        let chore = self.fetch_chore(house_id, chore_id).await?;
        if chore.is_archived {
            return Err(CoreError::validation(format!("chore {chore_id} is archived")).into());
        }

        let note = optional_text(note);
        let completed_at = now();
        let id = self.db().generate_id(PREFIX_CHORE_COMPLETION).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO chore_completions (id, chore_id, completed_by_id, note, completed_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    chore_id,
                    caller.user_id.as_str(),
                    note.as_deref(),
                    timestamp(completed_at)
                ],
            )
            .await?;

        tracing::debug!(chore_id, user_id = %caller.user_id, "chore completed");
        Ok(ChoreCompletion {
            id,
            chore_id: chore_id.to_string(),
            completed_by_id: caller.user_id.clone(),
            note,
            completed_at,
        })
    }

    pub async fn archive_chore(
        &self,
        caller: &CallerContext,
        chore_id: &str,
    ) -> Result<Chore, DatabaseError> {
        let house_id = caller.require_house()?;
        self.fetch_chore(house_id, chore_id).await?;
        self.db()
            .conn()
            .execute(
                "UPDATE chores SET is_archived = 1, updated_at = ?1 WHERE id = ?2",
                libsql::params![timestamp(now()), chore_id],
            )
            .await?;
        self.fetch_chore(house_id, chore_id).await
    }

    /// Assign the chore to a house member, or unassign it with `None`.
    pub async fn reassign_chore(
        &self,
        caller: &CallerContext,
        chore_id: &str,
        assigned_to: Option<&str>,
    ) -> Result<Chore, DatabaseError> {
        let house_id = caller.require_house()?;
        self.fetch_chore(house_id, chore_id).await?;
        let assigned_to = optional_text(assigned_to);
        if let Some(ref user_id) = assigned_to {
            self.ensure_assignee(house_id, user_id).await?;
        }

        self.db()
            .conn()
            .execute(
                "UPDATE chores SET assigned_to_id = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![assigned_to.as_deref(), timestamp(now()), chore_id],
            )
            .await?;
        self.fetch_chore(house_id, chore_id).await
    }

    async fn ensure_assignee(&self, house_id: &str, user_id: &str) -> Result<(), DatabaseError> {
        if self.is_member(house_id, user_id).await? {
            Ok(())
        } else {
            Err(
                CoreError::validation(format!("assignee {user_id} is not a member of this house"))
                    .into(),
            )
        }
    }

    async fn fetch_chore(&self, house_id: &str, id: &str) -> Result<Chore, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM chores WHERE id = ?1 AND house_id = ?2"),
                libsql::params![id, house_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Chore.as_str(), id))?;
        row_to_chore(&row)
    }
}
