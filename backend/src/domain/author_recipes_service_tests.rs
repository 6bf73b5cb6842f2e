//! Tests for the author dashboard service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockRecipeRepository;

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn make_service(recipes: MockRecipeRepository) -> AuthorRecipesService<MockRecipeRepository> {
    AuthorRecipesService::new(
        Arc::new(recipes),
        Arc::new(FixtureClock {
            utc_now: fixture_timestamp(),
        }),
    )
}

#[fixture]
fn author() -> UserId {
    UserId::random()
}

#[fixture]
fn form() -> RecipeForm {
    RecipeForm {
        title: "Lemon Drizzle Cake".into(),
        description: "A sharp, syrupy loaf cake for afternoon tea.".into(),
        preparation_time: "45".into(),
        preparation_time_unit: "Minutes".into(),
        servings: "8".into(),
        servings_unit: "Portions".into(),
        preparation_steps: "Cream the butter and sugar, beat in the eggs, fold in the flour \
                            and zest, bake, then pour the lemon syrup over while warm."
            .into(),
        cover: Some("covers/lemon.jpg".into()),
    }
}

fn stored_draft(author: &UserId, form: &RecipeForm) -> Recipe {
    let draft = validate_recipe(form).expect("valid draft");
    Recipe::new_draft(
        RecipeId::random(),
        author.clone(),
        draft,
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp"),
    )
}

#[rstest]
#[tokio::test]
async fn create_stores_unpublished_draft(author: UserId, form: RecipeForm) {
    let mut recipes = MockRecipeRepository::new();
    recipes
        .expect_insert()
        .withf(|recipe| !recipe.is_published && recipe.slug == "lemon-drizzle-cake")
        .times(1)
        .return_once(|_| Ok(()));

    let recipe = make_service(recipes)
        .create(&author, form)
        .await
        .expect("draft created");

    assert_eq!(recipe.author, author);
    assert_eq!(recipe.created_at, fixture_timestamp());
    assert_eq!(recipe.cover.as_deref(), Some("covers/lemon.jpg"));
}

#[rstest]
#[tokio::test]
async fn create_rejects_invalid_form_without_storing(author: UserId, mut form: RecipeForm) {
    form.servings = "-2".into();
    let mut recipes = MockRecipeRepository::new();
    recipes.expect_insert().never();

    let error = make_service(recipes)
        .create(&author, form)
        .await
        .expect_err("invalid draft");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("field errors");
    assert_eq!(details["fieldErrors"]["servings"][0]["code"], "negative");
}

#[rstest]
#[tokio::test]
async fn list_drafts_only_requests_unpublished(author: UserId, form: RecipeForm) {
    let draft = stored_draft(&author, &form);
    let expected = vec![draft.clone()];
    let mut recipes = MockRecipeRepository::new();
    recipes
        .expect_list_by_author()
        .withf(|_, published| !*published)
        .times(1)
        .return_once(move |_, _| Ok(vec![draft]));

    let drafts = make_service(recipes)
        .list_drafts(&author)
        .await
        .expect("drafts listed");
    assert_eq!(drafts, expected);
}

#[rstest]
#[tokio::test]
async fn update_rewrites_fields_and_keeps_creation_time(author: UserId, form: RecipeForm) {
    let draft = stored_draft(&author, &form);
    let id = draft.id;
    let created_at = draft.created_at;
    let mut recipes = MockRecipeRepository::new();
    recipes
        .expect_find_by_author()
        .withf(|_, _, published| !*published)
        .return_once(move |_, _, _| Ok(Some(draft)));
    recipes
        .expect_update()
        .withf(|recipe| recipe.title == "Orange Drizzle Cake")
        .times(1)
        .return_once(|_| Ok(true));

    let mut edited = form;
    edited.title = "Orange Drizzle Cake".into();
    edited.cover = None;
    let recipe = make_service(recipes)
        .update(&author, &id, edited)
        .await
        .expect("draft updated");

    assert_eq!(recipe.slug, "orange-drizzle-cake");
    assert_eq!(recipe.created_at, created_at);
    assert_eq!(recipe.updated_at, fixture_timestamp());
    assert_eq!(recipe.cover.as_deref(), Some("covers/lemon.jpg"));
}

#[rstest]
#[tokio::test]
async fn foreign_or_published_recipes_are_not_found(author: UserId, form: RecipeForm) {
    let mut recipes = MockRecipeRepository::new();
    recipes
        .expect_find_by_author()
        .times(3)
        .returning(|_, _, _| Ok(None));
    recipes.expect_update().never();
    recipes.expect_delete().never();
    let service = make_service(recipes);
    let id = RecipeId::random();

    let get = service.get_draft(&author, &id).await.expect_err("missing");
    let update = service.update(&author, &id, form).await.expect_err("missing");
    let delete = service.delete(&author, &id).await.expect_err("missing");

    for error in [get, update, delete] {
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}

#[rstest]
#[tokio::test]
async fn delete_removes_owned_draft(author: UserId, form: RecipeForm) {
    let draft = stored_draft(&author, &form);
    let id = draft.id;
    let mut recipes = MockRecipeRepository::new();
    recipes
        .expect_find_by_author()
        .return_once(move |_, _, _| Ok(Some(draft)));
    recipes
        .expect_delete()
        .withf(move |deleted| *deleted == id)
        .times(1)
        .return_once(|_| Ok(true));

    make_service(recipes)
        .delete(&author, &id)
        .await
        .expect("draft deleted");
}

#[rstest]
#[case(RecipePersistenceError::connection("down"), ErrorCode::ServiceUnavailable)]
#[case(RecipePersistenceError::query("bad"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_failures_map_to_infrastructure_errors(
    author: UserId,
    #[case] failure: RecipePersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut recipes = MockRecipeRepository::new();
    recipes
        .expect_list_by_author()
        .return_once(move |_, _| Err(failure));

    let error = make_service(recipes)
        .list_drafts(&author)
        .await
        .expect_err("repository fails");
    assert_eq!(error.code(), expected);
}
