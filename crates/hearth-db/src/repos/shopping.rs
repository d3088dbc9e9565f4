//! Shopping list repository.
//!
//! Lines merge the same way recipe ingredients do: one row per (list, item),
//! quantities added exactly on repeat.

use hearth_core::entities::{
    ShoppingLine, ShoppingLineDetail, ShoppingList, ShoppingListDetail, ShoppingListSummary,
};
use hearth_core::enums::EntityType;
use hearth_core::errors::CoreError;
use hearth_core::identity::CallerContext;
use hearth_core::ids::{PREFIX_SHOPPING_LINE, PREFIX_SHOPPING_LIST};
use hearth_core::validate::{optional_text, parse_quantity, require_text};

use crate::error::{DatabaseError, conflict_on_unique};
use crate::helpers::{
    decimal_to_text, get_bool, get_count, get_opt_string, now, parse_datetime, parse_decimal,
    timestamp,
};
use crate::repos::item::{ITEM_REF_COLS, row_to_item_ref};
use crate::service::HearthService;

const LIST_COLS: &str = "id, house_id, title, is_archived, created_at, updated_at";
const LINE_COLS: &str =
    "li.id, li.list_id, li.item_id, li.quantity, li.unit_override, li.note, \
         li.created_at, li.updated_at";

fn row_to_list(row: &libsql::Row) -> Result<ShoppingList, DatabaseError> {
    Ok(ShoppingList {
        id: row.get(0)?,
        house_id: row.get(1)?,
        title: row.get(2)?,
        is_archived: get_bool(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

fn row_to_line(row: &libsql::Row) -> Result<ShoppingLine, DatabaseError> {
    Ok(ShoppingLine {
        id: row.get(0)?,
        list_id: row.get(1)?,
        item_id: row.get(2)?,
        quantity: parse_decimal(&row.get::<String>(3)?)?,
        unit_override: get_opt_string(row, 4)?,
        note: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl HearthService {
    /// Create a list. An archived list with the same title is revived.
    pub async fn create_list(
        &self,
        caller: &CallerContext,
        title: &str,
    ) -> Result<ShoppingList, DatabaseError> {
        let house_id = caller.require_house()?;
        let title = require_text(title, "title")?;
        let now = timestamp(now());

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {LIST_COLS} FROM shopping_lists WHERE house_id = ?1 AND title = ?2"
                ),
                libsql::params![house_id, title.as_str()],
            )
            .await?;
        if let Some(row) = rows.next().await? {
            let existing = row_to_list(&row)?;
            if !existing.is_archived {
                return Err(
                    CoreError::Conflict(format!("shopping list '{title}' already exists")).into(),
                );
            }
            self.db()
                .conn()
                .execute(
                    "UPDATE shopping_lists SET is_archived = 0, updated_at = ?1 WHERE id = ?2",
                    libsql::params![now.as_str(), existing.id.as_str()],
                )
                .await?;
            tracing::debug!(list_id = %existing.id, "archived shopping list revived");
            return self.fetch_list(house_id, &existing.id).await;
        }

        let id = self.db().generate_id(PREFIX_SHOPPING_LIST).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO shopping_lists ({LIST_COLS}) VALUES (?1, ?2, ?3, 0, ?4, ?5)"),
                libsql::params![id.as_str(), house_id, title.as_str(), now.as_str(), now.as_str()],
            )
            .await
            .map_err(|e| {
                conflict_on_unique(e, || format!("shopping list '{title}' already exists"))
            })?;

        self.fetch_list(house_id, &id).await
    }

    /// Add an item to a list, merging with an existing line for the same item.
    pub async fn add_line(
        &self,
        caller: &CallerContext,
        list_id: &str,
        item_id: &str,
        quantity: &str,
        unit_override: Option<&str>,
        note: Option<&str>,
    ) -> Result<ShoppingLine, DatabaseError> {
        let house_id = caller.require_house()?;
        let list = self.fetch_list(house_id, list_id).await?;
        if list.is_archived {
            return Err(
                CoreError::validation(format!("shopping list {list_id} is archived")).into(),
            );
        }
        self.fetch_item(house_id, item_id).await?;
        let qty = parse_quantity(quantity)?;
        let unit_override = optional_text(unit_override);
        let note = optional_text(note);

        let new_id = self.db().generate_id(PREFIX_SHOPPING_LINE).await?;
        let now = timestamp(now());

        let tx = self
            .db()
            .conn()
            .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
            .await?;

        let mut rows = tx
            .query(
                "SELECT id, quantity FROM shopping_list_items WHERE list_id = ?1 AND item_id = ?2",
                libsql::params![list_id, item_id],
            )
            .await?;
        let existing = match rows.next().await? {
            Some(row) => Some((row.get::<String>(0)?, parse_decimal(&row.get::<String>(1)?)?)),
            None => None,
        };
        drop(rows);

        let line_id = if let Some((id, current)) = existing {
            let merged = current + &qty;
            tx.execute(
                "UPDATE shopping_list_items \
                 SET quantity = ?1, unit_override = ?2, note = ?3, updated_at = ?4 \
                 WHERE id = ?5",
                libsql::params![
                    decimal_to_text(&merged),
                    unit_override.as_deref(),
                    note.as_deref(),
                    now.as_str(),
                    id.as_str()
                ],
            )
            .await?;
            tracing::debug!(line_id = %id, quantity = %merged, "shopping line merged");
            id
        } else {
            tx.execute(
                "INSERT INTO shopping_list_items \
                 (id, list_id, item_id, quantity, unit_override, note, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    new_id.as_str(),
                    list_id,
                    item_id,
                    decimal_to_text(&qty),
                    unit_override.as_deref(),
                    note.as_deref(),
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await
            .map_err(|e| {
                conflict_on_unique(e, || {
                    format!("item {item_id} was added to list {list_id} concurrently")
                })
            })?;
            new_id
        };

        tx.commit().await?;
        self.fetch_line(house_id, list_id, &line_id).await
    }

    /// Lists with their line counts, most recently updated first.
    pub async fn list_lists(
        &self,
        caller: &CallerContext,
        archived: bool,
    ) -> Result<Vec<ShoppingListSummary>, DatabaseError> {
        let house_id = caller.require_house()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT l.id, l.house_id, l.title, l.is_archived, l.created_at, l.updated_at, \
                 (SELECT COUNT(*) FROM shopping_list_items li WHERE li.list_id = l.id) \
                 FROM shopping_lists l \
                 WHERE l.house_id = ?1 AND l.is_archived = ?2 \
                 ORDER BY l.updated_at DESC, l.id ASC",
                libsql::params![house_id, i64::from(archived)],
            )
            .await?;

        let mut lists = Vec::new();
        while let Some(row) = rows.next().await? {
            lists.push(ShoppingListSummary {
                list: row_to_list(&row)?,
                line_count: get_count(&row, 6)?,
            });
        }
        Ok(lists)
    }

    /// A list with its lines ordered by creation, each carrying item detail.
    pub async fn get_list(
        &self,
        caller: &CallerContext,
        list_id: &str,
    ) -> Result<ShoppingListDetail, DatabaseError> {
        let house_id = caller.require_house()?;
        let list = self.fetch_list(house_id, list_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {LINE_COLS}, {ITEM_REF_COLS} FROM shopping_list_items li \
                     JOIN items i ON i.id = li.item_id \
                     WHERE li.list_id = ?1 \
                     ORDER BY li.created_at ASC, li.id ASC"
                ),
                [list_id],
            )
            .await?;

        let mut lines = Vec::new();
        while let Some(row) = rows.next().await? {
            lines.push(ShoppingLineDetail {
                line: row_to_line(&row)?,
                item: row_to_item_ref(&row, 8)?,
            });
        }
        Ok(ShoppingListDetail { list, lines })
    }

    pub async fn remove_line(
        &self,
        caller: &CallerContext,
        list_id: &str,
        line_id: &str,
    ) -> Result<(), DatabaseError> {
        let house_id = caller.require_house()?;
        self.fetch_line(house_id, list_id, line_id).await?;
        self.db()
            .conn()
            .execute("DELETE FROM shopping_list_items WHERE id = ?1", [line_id])
            .await?;
        Ok(())
    }

    /// Drop every line and archive the list, atomically.
    pub async fn archive_list(
        &self,
        caller: &CallerContext,
        list_id: &str,
    ) -> Result<ShoppingList, DatabaseError> {
        let house_id = caller.require_house()?;
        self.fetch_list(house_id, list_id).await?;

        let tx = self.db().conn().transaction().await?;
        let removed = tx
            .execute("DELETE FROM shopping_list_items WHERE list_id = ?1", [list_id])
            .await?;
        tx.execute(
            "UPDATE shopping_lists SET is_archived = 1, updated_at = ?1 WHERE id = ?2",
            libsql::params![timestamp(now()), list_id],
        )
        .await?;
        tx.commit().await?;

        tracing::debug!(list_id, removed, "shopping list archived");
        self.fetch_list(house_id, list_id).await
    }

    async fn fetch_list(&self, house_id: &str, id: &str) -> Result<ShoppingList, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {LIST_COLS} FROM shopping_lists WHERE id = ?1 AND house_id = ?2"),
                libsql::params![id, house_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::ShoppingList.as_str(), id))?;
        row_to_list(&row)
    }

    async fn fetch_line(
        &self,
        house_id: &str,
        list_id: &str,
        line_id: &str,
    ) -> Result<ShoppingLine, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {LINE_COLS} FROM shopping_list_items li \
                     JOIN shopping_lists l ON l.id = li.list_id \
                     WHERE li.id = ?1 AND li.list_id = ?2 AND l.house_id = ?3"
                ),
                libsql::params![line_id, list_id, house_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::ShoppingLine.as_str(), line_id))?;
        row_to_line(&row)
    }
}
