//! Item repository: the per-house catalog recipes and shopping lines refer to.

use hearth_core::entities::{Item, ItemRef};
use hearth_core::enums::EntityType;
use hearth_core::errors::CoreError;
use hearth_core::identity::CallerContext;
use hearth_core::ids::PREFIX_ITEM;
use hearth_core::validate::{normalize_tags, optional_text, require_text};

use crate::error::{DatabaseError, conflict_on_unique};
use crate::helpers::{fold_case, get_bool, now, parse_datetime, parse_tags, tags_to_json, timestamp};
use crate::service::HearthService;

const SELECT_COLS: &str =
    "id, house_id, name, category, unit, tags, is_archived, created_at, updated_at";

/// Input for [`HearthService::add_item`].
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub tags: Vec<String>,
}

impl NewItem {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit: unit.into(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Filter for listing items in the caller's house.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive substring of the name.
    pub q: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// List archived items instead of active ones.
    pub archived: bool,
}

fn row_to_item(row: &libsql::Row) -> Result<Item, DatabaseError> {
    Ok(Item {
        id: row.get(0)?,
        house_id: row.get(1)?,
        name: row.get(2)?,
        category: row.get(3)?,
        unit: row.get(4)?,
        tags: parse_tags(&row.get::<String>(5)?)?,
        is_archived: get_bool(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

/// Columns to select (in order) for [`row_to_item_ref`], with `i` aliasing `items`.
pub(crate) const ITEM_REF_COLS: &str = "i.id, i.name, i.unit, i.category, i.tags";

/// Read the item summary starting at column `start`.
pub(crate) fn row_to_item_ref(row: &libsql::Row, start: i32) -> Result<ItemRef, DatabaseError> {
    Ok(ItemRef {
        id: row.get(start)?,
        name: row.get(start + 1)?,
        unit: row.get(start + 2)?,
        category: row.get(start + 3)?,
        tags: parse_tags(&row.get::<String>(start + 4)?)?,
    })
}

impl HearthService {
    /// Add an item to the caller's house.
    ///
    /// An archived item with the same name is revived with the new details
    /// instead of creating a second row; an active one is a conflict.
    pub async fn add_item(
        &self,
        caller: &CallerContext,
        input: &NewItem,
    ) -> Result<Item, DatabaseError> {
        let house_id = caller.require_house()?;
        let name = require_text(&input.name, "name")?;
        let category = require_text(&input.category, "category")?;
        let unit = require_text(&input.unit, "unit")?;
        let tags = tags_to_json(&normalize_tags(&input.tags))?;
        let now = timestamp(now());

        if let Some(existing) = self.find_item_by_name(house_id, &name).await? {
            if !existing.is_archived {
                return Err(CoreError::Conflict(format!("item '{name}' already exists")).into());
            }
            self.db()
                .conn()
                .execute(
                    "UPDATE items SET is_archived = 0, category = ?1, unit = ?2, tags = ?3, \
                     updated_at = ?4 \
                     WHERE id = ?5",
                    libsql::params![
                        category.as_str(),
                        unit.as_str(),
                        tags.as_str(),
                        now.as_str(),
                        existing.id.as_str()
                    ],
                )
                .await?;
            tracing::debug!(item_id = %existing.id, "archived item revived");
            return self.fetch_item(house_id, &existing.id).await;
        }

        let id = self.db().generate_id(PREFIX_ITEM).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO items ({SELECT_COLS}, name_folded) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7, ?8, ?9)"
                ),
                libsql::params![
                    id.as_str(),
                    house_id,
                    name.as_str(),
                    category.as_str(),
                    unit.as_str(),
                    tags.as_str(),
                    now.as_str(),
                    now.as_str(),
                    fold_case(&name)
                ],
            )
            .await
            .map_err(|e| conflict_on_unique(e, || format!("item '{name}' already exists")))?;

        self.fetch_item(house_id, &id).await
    }

    /// List items in the caller's house, ordered by name.
    pub async fn list_items(
        &self,
        caller: &CallerContext,
        filter: &ItemFilter,
    ) -> Result<Vec<Item>, DatabaseError> {
        let house_id = caller.require_house()?;

        let mut clauses = vec!["house_id = ?1".to_string(), "is_archived = ?2".to_string()];
        let mut params: Vec<libsql::Value> =
            vec![house_id.into(), i64::from(filter.archived).into()];
        let mut idx = 3usize;

        if let Some(q) = optional_text(filter.q.as_deref()) {
            clauses.push(format!("instr(name_folded, ?{idx}) > 0"));
            params.push(fold_case(&q).into());
            idx += 1;
        }
        if let Some(category) = optional_text(filter.category.as_deref()) {
            clauses.push(format!("category = ?{idx}"));
            params.push(category.into());
        }

        let sql = format!(
            "SELECT {SELECT_COLS} FROM items WHERE {} ORDER BY name ASC, id ASC",
            clauses.join(" AND ")
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    pub async fn get_item(&self, caller: &CallerContext, id: &str) -> Result<Item, DatabaseError> {
        let house_id = caller.require_house()?;
        self.fetch_item(house_id, id).await
    }

    /// Archive an item. Archiving an archived item returns it unchanged.
    pub async fn archive_item(
        &self,
        caller: &CallerContext,
        id: &str,
    ) -> Result<Item, DatabaseError> {
        let house_id = caller.require_house()?;
        let item = self.fetch_item(house_id, id).await?;
        if item.is_archived {
            return Ok(item);
        }

        self.db()
            .conn()
            .execute(
                "UPDATE items SET is_archived = 1, updated_at = ?1 WHERE id = ?2",
                libsql::params![timestamp(now()), id],
            )
            .await?;
        self.fetch_item(house_id, id).await
    }

    /// Look up an item inside `house_id`; other houses' items are not found.
    pub(crate) async fn fetch_item(&self, house_id: &str, id: &str) -> Result<Item, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM items WHERE id = ?1 AND house_id = ?2"),
                libsql::params![id, house_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Item.as_str(), id))?;
        row_to_item(&row)
    }

    async fn find_item_by_name(
        &self,
        house_id: &str,
        name: &str,
    ) -> Result<Option<Item>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM items WHERE house_id = ?1 AND name = ?2"),
                libsql::params![house_id, name],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_item(&row)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{houseless_caller, seeded_caller, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn add_item_roundtrip() {
        let svc = test_service().await;
        let caller = seeded_caller(&svc, "ann@example.com", "Maple").await;

        let input =
            NewItem::new(" Flour ", "pantry", "g").with_tags(vec!["baking".into(), " ".into()]);
        let item = svc.add_item(&caller, &input).await.unwrap();

        assert!(item.id.starts_with("itm-"));
        assert_eq!(item.name, "Flour");
        assert_eq!(item.tags, vec!["baking"]);
        assert!(!item.is_archived);
        assert_eq!(svc.get_item(&caller, &item.id).await.unwrap(), item);
    }

    #[tokio::test]
    async fn duplicate_active_name_conflicts() {
        let svc = test_service().await;
        let caller = seeded_caller(&svc, "ann@example.com", "Maple").await;

        svc.add_item(&caller, &NewItem::new("Flour", "pantry", "g")).await.unwrap();
        let err = svc
            .add_item(&caller, &NewItem::new("Flour", "pantry", "kg"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn archived_name_is_revived() {
        let svc = test_service().await;
        let caller = seeded_caller(&svc, "ann@example.com", "Maple").await;

        let first = svc.add_item(&caller, &NewItem::new("Flour", "pantry", "g")).await.unwrap();
        svc.archive_item(&caller, &first.id).await.unwrap();

        let revived = svc.add_item(&caller, &NewItem::new("Flour", "baking", "kg")).await.unwrap();
        assert_eq!(revived.id, first.id);
        assert!(!revived.is_archived);
        assert_eq!(revived.category, "baking");
        assert_eq!(revived.unit, "kg");
    }

    #[tokio::test]
    async fn blank_fields_are_validation_errors() {
        let svc = test_service().await;
        let caller = seeded_caller(&svc, "ann@example.com", "Maple").await;
        let err = svc.add_item(&caller, &NewItem::new("Flour", " ", "g")).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn list_items_name_search_folds_accents() {
        let svc = test_service().await;
        let caller = seeded_caller(&svc, "ann@example.com", "Maple").await;
        svc.add_item(&caller, &NewItem::new("Crème fraîche", "dairy", "ml")).await.unwrap();
        svc.add_item(&caller, &NewItem::new("Cream", "dairy", "ml")).await.unwrap();

        let filter = ItemFilter {
            q: Some("CRÈME".into()),
            ..ItemFilter::default()
        };
        let items = svc.list_items(&caller, &filter).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Crème fraîche");
    }

    #[tokio::test]
    async fn list_items_filters_and_orders() {
        let svc = test_service().await;
        let caller = seeded_caller(&svc, "ann@example.com", "Maple").await;

        svc.add_item(&caller, &NewItem::new("Sugar", "pantry", "g")).await.unwrap();
        svc.add_item(&caller, &NewItem::new("Brown sugar", "pantry", "g")).await.unwrap();
        svc.add_item(&caller, &NewItem::new("Milk", "dairy", "ml")).await.unwrap();
        let old = svc.add_item(&caller, &NewItem::new("Old sugar", "pantry", "g")).await.unwrap();
        svc.archive_item(&caller, &old.id).await.unwrap();

        let names = |items: Vec<Item>| items.into_iter().map(|i| i.name).collect::<Vec<_>>();

        let all = svc.list_items(&caller, &ItemFilter::default()).await.unwrap();
        assert_eq!(names(all), vec!["Brown sugar", "Milk", "Sugar"]);

        let sugar = ItemFilter {
            q: Some("SUGAR".into()),
            ..ItemFilter::default()
        };
        assert_eq!(
            names(svc.list_items(&caller, &sugar).await.unwrap()),
            vec!["Brown sugar", "Sugar"]
        );

        let dairy = ItemFilter {
            category: Some("dairy".into()),
            ..ItemFilter::default()
        };
        assert_eq!(names(svc.list_items(&caller, &dairy).await.unwrap()), vec!["Milk"]);

        let archived = ItemFilter {
            archived: true,
            ..ItemFilter::default()
        };
        assert_eq!(names(svc.list_items(&caller, &archived).await.unwrap()), vec!["Old sugar"]);
    }

    #[tokio::test]
    async fn archive_is_idempotent() {
        let svc = test_service().await;
        let caller = seeded_caller(&svc, "ann@example.com", "Maple").await;
        let item = svc.add_item(&caller, &NewItem::new("Flour", "pantry", "g")).await.unwrap();

        let once = svc.archive_item(&caller, &item.id).await.unwrap();
        let twice = svc.archive_item(&caller, &item.id).await.unwrap();
        assert!(once.is_archived);
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn other_house_items_are_not_found() {
        let svc = test_service().await;
        let ann = seeded_caller(&svc, "ann@example.com", "Maple").await;
        let bo = seeded_caller(&svc, "bo@example.com", "Oak").await;

        let item = svc.add_item(&ann, &NewItem::new("Flour", "pantry", "g")).await.unwrap();
        assert!(svc.get_item(&bo, &item.id).await.unwrap_err().is_not_found());
        assert!(svc.archive_item(&bo, &item.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn houseless_caller_is_rejected() {
        let svc = test_service().await;
        let caller = houseless_caller(&svc, "zed@example.com").await;
        let err = svc.list_items(&caller, &ItemFilter::default()).await.unwrap_err();
        assert!(err.is_not_in_house());
    }
}
