//! House repository: creation, membership, and member listing.

use hearth_core::entities::{House, HouseDetail};
use hearth_core::enums::EntityType;
use hearth_core::errors::CoreError;
use hearth_core::identity::CallerContext;
use hearth_core::ids::PREFIX_HOUSE;
use hearth_core::validate::require_text;

use crate::error::DatabaseError;
use crate::helpers::{now, parse_datetime, timestamp};
use crate::repos::user::{USER_COLS, row_to_user};
use crate::service::HearthService;

const SELECT_COLS: &str = "id, name, created_at, updated_at";

fn row_to_house(row: &libsql::Row) -> Result<House, DatabaseError> {
    Ok(House {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
        updated_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl HearthService {
    /// Create a house and make the caller its first member.
    pub async fn create_house(
        &self,
        caller: &CallerContext,
        name: &str,
    ) -> Result<House, DatabaseError> {
        let name = require_text(name, "name")?;
        self.ensure_houseless(caller).await?;

        let now = now();
        let id = self.db().generate_id(PREFIX_HOUSE).await?;

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            &format!("INSERT INTO houses ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
            libsql::params![id.as_str(), name.as_str(), timestamp(now), timestamp(now)],
        )
        .await?;
        tx.execute(
            "UPDATE users SET house_id = ?1, updated_at = ?2 WHERE id = ?3",
            libsql::params![id.as_str(), timestamp(now), caller.user_id.as_str()],
        )
        .await?;
        tx.commit().await?;

        tracing::debug!(house_id = %id, user_id = %caller.user_id, "house created");
        Ok(House {
            id,
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Join an existing house.
    pub async fn join_house(
        &self,
        caller: &CallerContext,
        house_id: &str,
    ) -> Result<House, DatabaseError> {
        self.ensure_houseless(caller).await?;
        let house = self.fetch_house(house_id.trim()).await?;

        self.db()
            .conn()
            .execute(
                "UPDATE users SET house_id = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![house.id.as_str(), timestamp(now()), caller.user_id.as_str()],
            )
            .await?;

        tracing::debug!(house_id = %house.id, user_id = %caller.user_id, "house joined");
        Ok(house)
    }

    /// Leave the current house. A no-op for callers without one.
    pub async fn leave_house(&self, caller: &CallerContext) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE users SET house_id = NULL, updated_at = ?1 \
                 WHERE id = ?2 AND house_id IS NOT NULL",
                libsql::params![timestamp(now()), caller.user_id.as_str()],
            )
            .await?;
        if changed > 0 {
            tracing::debug!(user_id = %caller.user_id, "house left");
        }
        Ok(())
    }

    /// The caller's house with its members, ordered by display name.
    pub async fn get_house(&self, caller: &CallerContext) -> Result<HouseDetail, DatabaseError> {
        let house_id = caller.require_house()?;
        let house = self.fetch_house(house_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {USER_COLS} FROM users WHERE house_id = ?1 \
                     ORDER BY display_name COLLATE NOCASE, id"
                ),
                [house_id],
            )
            .await?;

        let mut members = Vec::new();
        while let Some(row) = rows.next().await? {
            members.push(row_to_user(&row)?);
        }
        Ok(HouseDetail { house, members })
    }

    /// Whether `user_id` currently belongs to `house_id`.
    pub(crate) async fn is_member(
        &self,
        house_id: &str,
        user_id: &str,
    ) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT 1 FROM users WHERE id = ?1 AND house_id = ?2",
                libsql::params![user_id, house_id],
            )
            .await?;
        Ok(rows.next().await?.is_some())
    }

    async fn fetch_house(&self, id: &str) -> Result<House, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM houses WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::House.as_str(), id))?;
        row_to_house(&row)
    }

    /// Membership is checked against stored state, not the passed-in context.
    async fn ensure_houseless(&self, caller: &CallerContext) -> Result<(), DatabaseError> {
        let user = self.get_user(&caller.user_id).await?;
        if let Some(current) = user.house_id {
            return Err(
                CoreError::Conflict(format!("user is already a member of house {current}")).into(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::{houseless_caller, seeded_caller, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_house_assigns_caller() {
        let svc = test_service().await;
        let caller = seeded_caller(&svc, "ann@example.com", "Maple St").await;

        let house_id = caller.house_id.clone().unwrap();
        assert!(house_id.starts_with("hse-"));

        let detail = svc.get_house(&caller).await.unwrap();
        assert_eq!(detail.house.name, "Maple St");
        assert_eq!(detail.members.len(), 1);
        assert_eq!(detail.members[0].id, caller.user_id);
    }

    #[tokio::test]
    async fn create_house_twice_conflicts() {
        let svc = test_service().await;
        let caller = seeded_caller(&svc, "ann@example.com", "Maple St").await;
        let err = svc.create_house(&caller, "Second").await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn join_and_leave() {
        let svc = test_service().await;
        let owner = seeded_caller(&svc, "ann@example.com", "Maple St").await;
        let house_id = owner.house_id.clone().unwrap();

        let guest = houseless_caller(&svc, "zed@example.com").await;
        let joined = svc.join_house(&guest, &house_id).await.unwrap();
        assert_eq!(joined.id, house_id);

        let members: Vec<String> = svc
            .get_house(&owner)
            .await
            .unwrap()
            .members
            .into_iter()
            .map(|u| u.display_name)
            .collect();
        assert_eq!(members, vec!["ann@example.com", "zed@example.com"]);

        svc.leave_house(&guest).await.unwrap();
        let guest = svc.caller_for(&guest.user_id).await.unwrap();
        assert!(guest.house_id.is_none());

        // Leaving again is a no-op.
        svc.leave_house(&guest).await.unwrap();
    }

    #[tokio::test]
    async fn join_unknown_house_is_not_found() {
        let svc = test_service().await;
        let guest = houseless_caller(&svc, "zed@example.com").await;
        let err = svc.join_house(&guest, "hse-00000000").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn get_house_requires_membership() {
        let svc = test_service().await;
        let guest = houseless_caller(&svc, "zed@example.com").await;
        assert!(svc.get_house(&guest).await.unwrap_err().is_not_in_house());
    }
}
