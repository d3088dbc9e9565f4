//! End-to-end flows through the public `HearthService` API.
//!
//! - On-disk database survives reopen
//! - Pantry-to-suggestion flow across items, recipes, ingredients
//! - Shopping and chores alongside recipes in one house

use std::str::FromStr;

use bigdecimal::BigDecimal;
use tempfile::TempDir;

use hearth_core::enums::{ChoreFrequency, RecipeType};
use hearth_core::identity::CallerContext;
use hearth_db::repos::item::NewItem;
use hearth_db::repos::recipe::NewRecipe;
use hearth_db::repos::search::RecipeSearch;
use hearth_db::repos::suggest::SuggestRequest;
use hearth_db::service::HearthService;

async fn founder(svc: &HearthService, email: &str, house: &str) -> CallerContext {
    let user = svc.create_user(email, email).await.unwrap();
    let caller = svc.caller_for(&user.id).await.unwrap();
    svc.create_house(&caller, house).await.unwrap();
    svc.caller_for(&user.id).await.unwrap()
}

async fn item(svc: &HearthService, caller: &CallerContext, name: &str) -> String {
    svc.add_item(caller, &NewItem::new(name, "pantry", "pcs"))
        .await
        .unwrap()
        .id
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn on_disk_database_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hearth.db");
    let path = path.to_str().unwrap();

    let (user_id, recipe_id) = {
        let svc = HearthService::new_local(path).await.unwrap();
        let caller = founder(&svc, "ann@example.com", "Maple").await;
        let flour = item(&svc, &caller, "Flour").await;
        let recipe = svc
            .create_recipe(&caller, &NewRecipe::new("Bread", RecipeType::Meal))
            .await
            .unwrap();
        svc.add_ingredient(&caller, &recipe.id, &flour, "500", Some("g"))
            .await
            .unwrap();
        (caller.user_id, recipe.id)
    };

    let svc = HearthService::new_local(path).await.unwrap();
    let caller = svc.caller_for(&user_id).await.unwrap();
    let detail = svc.get_recipe(&caller, &recipe_id).await.unwrap();
    assert_eq!(detail.recipe.title, "Bread");
    assert_eq!(detail.ingredients.len(), 1);
    assert_eq!(
        detail.ingredients[0].ingredient.quantity,
        BigDecimal::from_str("500").unwrap()
    );
}

// ---------------------------------------------------------------------------
// Suggestion flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pantry_to_suggestions() {
    let svc = HearthService::new_local(":memory:").await.unwrap();
    let caller = founder(&svc, "ann@example.com", "Maple").await;

    let pasta = item(&svc, &caller, "Pasta").await;
    let tomato = item(&svc, &caller, "Tomato").await;
    let basil = item(&svc, &caller, "Basil").await;
    let cocoa = item(&svc, &caller, "Cocoa").await;

    let marinara = svc
        .create_recipe(&caller, &NewRecipe::new("Marinara", RecipeType::Meal))
        .await
        .unwrap()
        .id;
    for id in [&pasta, &tomato, &basil] {
        svc.add_ingredient(&caller, &marinara, id, "1", None).await.unwrap();
    }
    // Adding pasta again merges rather than counting twice.
    svc.add_ingredient(&caller, &marinara, &pasta, "1", None).await.unwrap();

    let plain = svc
        .create_recipe(&caller, &NewRecipe::new("Plain pasta", RecipeType::Meal))
        .await
        .unwrap()
        .id;
    svc.add_ingredient(&caller, &plain, &pasta, "1", None).await.unwrap();

    let brownies = svc
        .create_recipe(&caller, &NewRecipe::new("Brownies", RecipeType::Dessert))
        .await
        .unwrap()
        .id;
    svc.add_ingredient(&caller, &brownies, &cocoa, "1", None).await.unwrap();

    let request = SuggestRequest {
        available_item_ids: vec![pasta.clone(), tomato.clone()],
        recipe_type: Some(RecipeType::Meal),
        missing: Some(1),
        ..SuggestRequest::default()
    };
    let suggestions = svc.suggest_recipes(&caller, &request).await.unwrap();

    let ids: Vec<&str> = suggestions.iter().map(|s| s.recipe.recipe.id.as_str()).collect();
    assert_eq!(ids, vec![plain.as_str(), marinara.as_str()]);
    assert_eq!(suggestions[1].match_stats.total, 3);
    assert_eq!(suggestions[1].match_stats.matched, 2);
    assert_eq!(suggestions[1].match_stats.missing, 1);

    let json = serde_json::to_value(&suggestions[1]).unwrap();
    assert_eq!(json["type"], "MEAL");
    assert_eq!(json["match"]["missing"], 1);
    assert_eq!(json["ingredients"][0]["item"]["name"], "Pasta");
    assert_eq!(json["ingredients"][0]["quantity"], "2");

    // Search finds the same recipes by ingredient.
    let search = RecipeSearch {
        has_item_id: Some(pasta),
        ..RecipeSearch::default()
    };
    assert_eq!(svc.search_recipes(&caller, &search).await.unwrap().total, 2);
}

// ---------------------------------------------------------------------------
// Rest of the house
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shopping_and_chores_share_the_house() {
    let svc = HearthService::new_local(":memory:").await.unwrap();
    let owner = founder(&svc, "ann@example.com", "Maple").await;

    let roommate = svc.create_user("bo@example.com", "Bo").await.unwrap();
    let roommate = svc.caller_for(&roommate.id).await.unwrap();
    svc.join_house(&roommate, owner.house_id.as_deref().unwrap())
        .await
        .unwrap();
    let roommate = svc.caller_for(&roommate.user_id).await.unwrap();

    // The roommate sees items the owner added.
    let milk = item(&svc, &owner, "Milk").await;
    let list = svc.create_list(&roommate, "Weekly").await.unwrap();
    svc.add_line(&roommate, &list.id, &milk, "2", Some("l"), None)
        .await
        .unwrap();
    assert_eq!(svc.get_list(&owner, &list.id).await.unwrap().lines.len(), 1);

    let chore = svc
        .create_chore(&owner, "Buy milk", ChoreFrequency::Weekly, Some(&roommate.user_id))
        .await
        .unwrap();
    let done = svc.complete_chore(&roommate, &chore.id, None).await.unwrap();
    assert_eq!(done.completed_by_id, roommate.user_id);

    // After leaving, the roommate can no longer reach house data.
    svc.leave_house(&roommate).await.unwrap();
    let roommate = svc.caller_for(&roommate.user_id).await.unwrap();
    let err = svc.get_list(&roommate, &list.id).await.unwrap_err();
    assert!(err.is_not_in_house());

    let members = svc.get_house(&owner).await.unwrap().members;
    assert_eq!(members.len(), 1);
}
