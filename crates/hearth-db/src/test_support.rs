//! Shared test utilities for hearth-db unit tests.

pub(crate) mod helpers {
    use hearth_core::identity::CallerContext;

    use crate::HearthDb;
    use crate::repos::item::NewItem;
    use crate::service::HearthService;

    /// Create an in-memory HearthService.
    pub async fn test_service() -> HearthService {
        let db = HearthDb::open_local(":memory:").await.unwrap();
        HearthService::from_db(db)
    }

    /// Create a user who has founded a house and return their context.
    pub async fn seeded_caller(svc: &HearthService, email: &str, house: &str) -> CallerContext {
        let user = svc.create_user(email, email).await.unwrap();
        let caller = svc.caller_for(&user.id).await.unwrap();
        svc.create_house(&caller, house).await.unwrap();
        svc.caller_for(&user.id).await.unwrap()
    }

    /// Create a user with no house.
    pub async fn houseless_caller(svc: &HearthService, email: &str) -> CallerContext {
        let user = svc.create_user(email, email).await.unwrap();
        svc.caller_for(&user.id).await.unwrap()
    }

    /// Add an item with default category and unit, returning its id.
    pub async fn add_test_item(svc: &HearthService, caller: &CallerContext, name: &str) -> String {
        svc.add_item(caller, &NewItem::new(name, "pantry", "pcs"))
            .await
            .unwrap()
            .id
    }

    /// Force a recipe's `updated_at` so ordering tests are deterministic.
    pub async fn set_recipe_updated_at(svc: &HearthService, recipe_id: &str, ts: &str) {
        svc.db()
            .conn()
            .execute(
                "UPDATE recipes SET updated_at = ?1 WHERE id = ?2",
                libsql::params![ts, recipe_id],
            )
            .await
            .unwrap();
    }
}
