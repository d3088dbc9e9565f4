//! Plain recipe search: filtered, paginated listing without scoring.

use hearth_core::entities::RecipeSummary;
use hearth_core::enums::RecipeType;
use hearth_core::identity::CallerContext;
use hearth_core::responses::RecipeSearchPage;
use hearth_core::validate::{normalize_tags, optional_text};

use crate::error::DatabaseError;
use crate::helpers::{
    fold_case, get_opt_string, parse_datetime, parse_enum, parse_tags, placeholders,
};
use crate::service::HearthService;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Search filters. Every set dimension must match.
#[derive(Debug, Clone, Default)]
pub struct RecipeSearch {
    /// Case-insensitive substring of title or text, or an exact tag.
    pub q: Option<String>,
    pub recipe_type: Option<RecipeType>,
    /// Recipe carries at least one of these tags.
    pub tags_any: Vec<String>,
    /// Recipe has an ingredient referencing this item.
    pub has_item_id: Option<String>,
    /// 1-based; defaults to 1.
    pub page: Option<u32>,
    /// Defaults to 20, clamped to `1..=100`.
    pub page_size: Option<u32>,
}

impl RecipeSearch {
    /// Effective `(page, page_size)` after clamping.
    #[must_use]
    pub fn paging(&self) -> (u32, u32) {
        (
            self.page.unwrap_or(1).max(1),
            self.page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        )
    }
}

fn row_to_summary(row: &libsql::Row) -> Result<RecipeSummary, DatabaseError> {
    Ok(RecipeSummary {
        id: row.get(0)?,
        title: row.get(1)?,
        recipe_type: parse_enum(&row.get::<String>(2)?)?,
        tags: parse_tags(&row.get::<String>(3)?)?,
        text: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl HearthService {
    /// Filter the caller's recipes, most recently updated first.
    pub async fn search_recipes(
        &self,
        caller: &CallerContext,
        search: &RecipeSearch,
    ) -> Result<RecipeSearchPage, DatabaseError> {
        let house_id = caller.require_house()?;
        let (page, page_size) = search.paging();

        let mut clauses = vec!["r.house_id = ?1".to_string()];
        let mut params: Vec<libsql::Value> = vec![house_id.into()];
        let mut idx = 2usize;

        if let Some(q) = optional_text(search.q.as_deref()) {
            let tag_idx = idx + 1;
            clauses.push(format!(
                "(instr(r.title_folded, ?{idx}) > 0 \
                 OR instr(r.text_folded, ?{idx}) > 0 \
                 OR EXISTS (SELECT 1 FROM json_each(r.tags) WHERE json_each.value = ?{tag_idx}))"
            ));
            params.push(fold_case(&q).into());
            params.push(q.into());
            idx += 2;
        }
        if let Some(recipe_type) = search.recipe_type {
            clauses.push(format!("r.type = ?{idx}"));
            params.push(recipe_type.as_str().into());
            idx += 1;
        }
        let tags_any = normalize_tags(&search.tags_any);
        if !tags_any.is_empty() {
            let list = placeholders(idx, tags_any.len());
            clauses.push(format!(
                "EXISTS (SELECT 1 FROM json_each(r.tags) WHERE json_each.value IN ({list}))"
            ));
            idx += tags_any.len();
            params.extend(tags_any.into_iter().map(libsql::Value::from));
        }
        if let Some(item_id) = optional_text(search.has_item_id.as_deref()) {
            clauses.push(format!(
                "EXISTS (SELECT 1 FROM recipe_ingredients ri \
                 WHERE ri.recipe_id = r.id AND ri.item_id = ?{idx})"
            ));
            params.push(item_id.into());
        }

        let where_sql = clauses.join(" AND ");

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT COUNT(*) FROM recipes r WHERE {where_sql}"),
                libsql::params_from_iter(params.clone()),
            )
            .await?;
        let total = match rows.next().await? {
            Some(row) => u64::try_from(row.get::<i64>(0)?).unwrap_or(0),
            None => 0,
        };

        let offset = u64::from(page - 1) * u64::from(page_size);
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT r.id, r.title, r.type, r.tags, r.text, r.created_at, r.updated_at \
                     FROM recipes r WHERE {where_sql} \
                     ORDER BY r.updated_at DESC, r.id ASC \
                     LIMIT {page_size} OFFSET {offset}"
                ),
                libsql::params_from_iter(params),
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_summary(&row)?);
        }

        tracing::debug!(house_id, page, page_size, total, returned = items.len(), "recipe search");
        Ok(RecipeSearchPage {
            page,
            page_size,
            total,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::recipe::NewRecipe;
    use crate::test_support::helpers::{
        add_test_item, seeded_caller, set_recipe_updated_at, test_service,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    async fn recipe(
        svc: &HearthService,
        caller: &CallerContext,
        title: &str,
        recipe_type: RecipeType,
        tags: &[&str],
        text: Option<&str>,
        updated_at: &str,
    ) -> String {
        let mut input = NewRecipe::new(title, recipe_type);
        input.tags = tags.iter().map(|t| (*t).to_string()).collect();
        input.text = text.map(String::from);
        let id = svc.create_recipe(caller, &input).await.unwrap().id;
        set_recipe_updated_at(svc, &id, updated_at).await;
        id
    }

    fn titles(page: &RecipeSearchPage) -> Vec<&str> {
        page.items.iter().map(|r| r.title.as_str()).collect()
    }

    async fn fixture() -> (HearthService, CallerContext, String) {
        let svc = test_service().await;
        let caller = seeded_caller(&svc, "ann@example.com", "Maple").await;
        recipe(
            &svc,
            &caller,
            "Tomato soup",
            RecipeType::Meal,
            &["soup", "veg"],
            None,
            "2026-01-01T00:00:00.000000Z",
        )
        .await;
        recipe(
            &svc,
            &caller,
            "Brownies",
            RecipeType::Dessert,
            &["chocolate"],
            Some("Rich and fudgy"),
            "2026-01-03T00:00:00.000000Z",
        )
        .await;
        let stew = recipe(
            &svc,
            &caller,
            "Beef stew",
            RecipeType::Meal,
            &["winter"],
            Some("Slow cooked with TOMATO"),
            "2026-01-02T00:00:00.000000Z",
        )
        .await;
        (svc, caller, stew)
    }

    #[tokio::test]
    async fn no_filters_orders_by_updated_desc() {
        let (svc, caller, _) = fixture().await;
        let page = svc.search_recipes(&caller, &RecipeSearch::default()).await.unwrap();
        assert_eq!(titles(&page), vec!["Brownies", "Beef stew", "Tomato soup"]);
        assert_eq!(page.total, 3);
        assert_eq!((page.page, page.page_size), (1, 20));
    }

    #[tokio::test]
    async fn q_matches_title_text_case_insensitive_or_exact_tag() {
        let (svc, caller, _) = fixture().await;

        let tomato = RecipeSearch {
            q: Some("tomato".into()),
            ..RecipeSearch::default()
        };
        let page = svc.search_recipes(&caller, &tomato).await.unwrap();
        assert_eq!(titles(&page), vec!["Beef stew", "Tomato soup"]);

        let tag = RecipeSearch {
            q: Some("chocolate".into()),
            ..RecipeSearch::default()
        };
        assert_eq!(titles(&svc.search_recipes(&caller, &tag).await.unwrap()), vec!["Brownies"]);

        // Tags match exactly, not by substring.
        let partial_tag = RecipeSearch {
            q: Some("wint".into()),
            ..RecipeSearch::default()
        };
        assert!(svc.search_recipes(&caller, &partial_tag).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn q_folds_non_ascii_case() {
        let (svc, caller, _) = fixture().await;
        recipe(
            &svc,
            &caller,
            "Crème Brûlée",
            RecipeType::Dessert,
            &[],
            Some("Torch the SUCRE ÉPAIS"),
            "2026-01-04T00:00:00.000000Z",
        )
        .await;

        for q in ["CRÈME", "brûlée", "sucre épais"] {
            let search = RecipeSearch {
                q: Some(q.into()),
                ..RecipeSearch::default()
            };
            let page = svc.search_recipes(&caller, &search).await.unwrap();
            assert_eq!(page.total, 1, "query {q}");
            assert_eq!(titles(&page), vec!["Crème Brûlée"]);
        }
    }

    #[tokio::test]
    async fn folded_title_follows_updates() {
        let (svc, caller, stew) = fixture().await;
        let update = crate::updates::recipe::RecipeUpdateBuilder::new()
            .title("Bœuf Bourguignon")
            .build();
        svc.update_recipe(&caller, &stew, update).await.unwrap();

        let search = RecipeSearch {
            q: Some("BŒUF".into()),
            ..RecipeSearch::default()
        };
        let page = svc.search_recipes(&caller, &search).await.unwrap();
        assert_eq!(titles(&page), vec!["Bœuf Bourguignon"]);

        let old = RecipeSearch {
            q: Some("beef".into()),
            ..RecipeSearch::default()
        };
        assert_eq!(svc.search_recipes(&caller, &old).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn filters_combine_with_and() {
        let (svc, caller, _) = fixture().await;
        let search = RecipeSearch {
            q: Some("tomato".into()),
            recipe_type: Some(RecipeType::Meal),
            tags_any: vec!["veg".into(), "dessert".into()],
            ..RecipeSearch::default()
        };
        let page = svc.search_recipes(&caller, &search).await.unwrap();
        assert_eq!(titles(&page), vec!["Tomato soup"]);
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn has_item_filter() {
        let (svc, caller, stew) = fixture().await;
        let beef = add_test_item(&svc, &caller, "Beef").await;
        svc.add_ingredient(&caller, &stew, &beef, "500", Some("g")).await.unwrap();

        let search = RecipeSearch {
            has_item_id: Some(beef),
            ..RecipeSearch::default()
        };
        let page = svc.search_recipes(&caller, &search).await.unwrap();
        assert_eq!(titles(&page), vec!["Beef stew"]);
    }

    #[tokio::test]
    async fn pagination_reports_total() {
        let (svc, caller, _) = fixture().await;
        let search = RecipeSearch {
            page: Some(2),
            page_size: Some(2),
            ..RecipeSearch::default()
        };
        let page = svc.search_recipes(&caller, &search).await.unwrap();
        assert_eq!(titles(&page), vec!["Tomato soup"]);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn other_houses_are_invisible() {
        let (svc, _, _) = fixture().await;
        let bo = seeded_caller(&svc, "bo@example.com", "Oak").await;
        let page = svc.search_recipes(&bo, &RecipeSearch::default()).await.unwrap();
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[rstest]
    #[case(None, None, (1, 20))]
    #[case(Some(0), Some(0), (1, 1))]
    #[case(Some(3), Some(50), (3, 50))]
    #[case(Some(1), Some(500), (1, 100))]
    fn paging_is_clamped(
        #[case] page: Option<u32>,
        #[case] page_size: Option<u32>,
        #[case] expected: (u32, u32),
    ) {
        let search = RecipeSearch {
            page,
            page_size,
            ..RecipeSearch::default()
        };
        assert_eq!(search.paging(), expected);
    }
}
