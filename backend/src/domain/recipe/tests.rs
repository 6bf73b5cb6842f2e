//! Regression coverage for recipe drafts and the recipe aggregate.

use super::*;
use crate::domain::{FieldErrorCode, FieldErrors};
use chrono::TimeZone;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};

#[fixture]
fn valid_form() -> RecipeForm {
    RecipeForm {
        title: "Slow Roasted Tomatoes".into(),
        description: "Sweet, jammy tomatoes for any pasta.".into(),
        preparation_time: "90".into(),
        preparation_time_unit: "Minutes".into(),
        servings: "4".into(),
        servings_unit: "Portions".into(),
        preparation_steps: "Halve the tomatoes. ".repeat(6),
        cover: Some("covers/tomatoes.jpg".into()),
    }
}

fn timestamp(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[rstest]
fn valid_form_yields_draft(valid_form: RecipeForm) {
    let draft = validate_recipe(&valid_form).expect("valid draft");

    assert_eq!(draft.preparation_time, 90);
    assert_eq!(draft.preparation_time_unit, PreparationTimeUnit::Minutes);
    assert_eq!(draft.servings_unit, ServingsUnit::Portions);
    assert_eq!(draft.cover.as_deref(), Some("covers/tomatoes.jpg"));
}

#[rstest]
#[case("1234567", true)]
#[case("12345678", false)]
#[case("çãõéíóúâ", false)]
fn title_needs_eight_characters(
    mut valid_form: RecipeForm,
    #[case] title: &str,
    #[case] fails: bool,
) {
    valid_form.title = title.into();
    let result = validate_recipe(&valid_form);
    assert_eq!(
        result
            .err()
            .is_some_and(|errors| errors.contains("title", FieldErrorCode::MinLength)),
        fails
    );
}

#[rstest]
#[case(19, true)]
#[case(20, false)]
fn description_needs_twenty_characters(
    mut valid_form: RecipeForm,
    #[case] length: usize,
    #[case] fails: bool,
) {
    valid_form.description = "d".repeat(length);
    assert_eq!(validate_recipe(&valid_form).is_err(), fails);
}

#[rstest]
#[case(99, true)]
#[case(100, false)]
fn preparation_steps_need_one_hundred_characters(
    mut valid_form: RecipeForm,
    #[case] length: usize,
    #[case] fails: bool,
) {
    valid_form.preparation_steps = "s".repeat(length);
    assert_eq!(validate_recipe(&valid_form).is_err(), fails);
}

#[rstest]
#[case("-1", FieldErrorCode::Negative, "Preparation time cannot be negative.")]
#[case("1.5", FieldErrorCode::NotWholeNumber, "Preparation time only accept whole numbers.")]
#[case("ten", FieldErrorCode::NotWholeNumber, "Preparation time only accept whole numbers.")]
#[case("", FieldErrorCode::Required, "This field must not be empty")]
#[case(
    "-99999999999999999999",
    FieldErrorCode::Negative,
    "Preparation time cannot be negative."
)]
#[case(
    "4294967296",
    FieldErrorCode::MaxValue,
    "Ensure this value is less than or equal to 4294967295."
)]
#[case(
    "99999999999999999999",
    FieldErrorCode::MaxValue,
    "Ensure this value is less than or equal to 4294967295."
)]
fn preparation_time_must_be_a_non_negative_whole_number(
    mut valid_form: RecipeForm,
    #[case] raw: &str,
    #[case] code: FieldErrorCode,
    #[case] message: &str,
) {
    valid_form.preparation_time = raw.into();

    let errors = validate_recipe(&valid_form).expect_err("invalid preparation time");
    assert!(errors.contains("preparationTime", code));
    assert_eq!(errors.messages("preparationTime"), vec![message]);
}

#[rstest]
fn servings_accept_the_largest_storable_value(mut valid_form: RecipeForm) {
    valid_form.servings = "4294967295".into();
    let draft = validate_recipe(&valid_form).expect("u32::MAX is in range");
    assert_eq!(draft.servings, u32::MAX);
}

#[rstest]
fn zero_is_an_accepted_whole_number(mut valid_form: RecipeForm) {
    valid_form.preparation_time = "0".into();
    valid_form.servings = " 0 ".into();
    assert!(validate_recipe(&valid_form).is_ok());
}

#[rstest]
#[case("Seconds")]
#[case("minutes")]
fn unknown_units_are_invalid_choices(mut valid_form: RecipeForm, #[case] unit: &str) {
    valid_form.preparation_time_unit = unit.into();

    let errors = validate_recipe(&valid_form).expect_err("unknown unit");
    assert_eq!(
        errors.messages("preparationTimeUnit"),
        vec![format!("Select a valid choice. {unit} is not one of the available choices.")]
    );
}

#[rstest]
fn blank_cover_is_dropped(mut valid_form: RecipeForm) {
    valid_form.cover = Some("  ".into());
    let draft = validate_recipe(&valid_form).expect("valid draft");
    assert!(draft.cover.is_none());
}

#[rstest]
fn new_draft_is_unpublished_plain_text(valid_form: RecipeForm) {
    let draft = validate_recipe(&valid_form).expect("valid draft");
    let recipe = Recipe::new_draft(RecipeId::random(), UserId::random(), draft, timestamp(9));

    assert!(!recipe.is_published);
    assert!(!recipe.preparation_steps_is_html);
    assert_eq!(recipe.slug, "slow-roasted-tomatoes");
    assert_eq!(recipe.created_at, recipe.updated_at);
}

#[rstest]
fn applying_a_draft_keeps_cover_when_none_is_given(valid_form: RecipeForm) {
    let draft = validate_recipe(&valid_form).expect("valid draft");
    let mut recipe = Recipe::new_draft(RecipeId::random(), UserId::random(), draft, timestamp(9));
    recipe.is_published = true;
    recipe.preparation_steps_is_html = true;

    let mut edit = valid_form.clone();
    edit.title = "Fast Roasted Tomatoes".into();
    edit.cover = None;
    recipe.apply_draft(validate_recipe(&edit).expect("valid edit"), timestamp(10));

    assert_eq!(recipe.slug, "fast-roasted-tomatoes");
    assert_eq!(recipe.cover.as_deref(), Some("covers/tomatoes.jpg"));
    assert!(!recipe.is_published);
    assert!(!recipe.preparation_steps_is_html);
    assert_eq!(recipe.updated_at, timestamp(10));
    assert_eq!(recipe.created_at, timestamp(9));
}

#[rstest]
#[case("TOMATOES", true)]
#[case("jammy", true)]
#[case("basil", false)]
fn matching_is_case_insensitive_over_title_and_description(
    valid_form: RecipeForm,
    #[case] term: &str,
    #[case] expected: bool,
) {
    let draft = validate_recipe(&valid_form).expect("valid draft");
    let recipe = Recipe::new_draft(RecipeId::random(), UserId::random(), draft, timestamp(9));
    assert_eq!(recipe.matches(term), expected);
}

#[rstest]
fn recipe_ids_parse_from_uuid_text() {
    let id = RecipeId::random();
    assert_eq!(id.to_string().parse::<RecipeId>(), Ok(id));
    assert_eq!("42".parse::<RecipeId>(), Err(InvalidRecipeId));
}

#[given("a draft failing title, description, time and servings")]
fn a_draft_failing_four_rules() -> RecipeForm {
    RecipeForm {
        title: "Soup".into(),
        description: "Too short".into(),
        preparation_time: "-10".into(),
        preparation_time_unit: "Hours".into(),
        servings: "abc".into(),
        servings_unit: "People".into(),
        preparation_steps: "Boil everything. ".repeat(8),
        cover: None,
    }
}

#[when("the draft is validated")]
fn the_draft_is_validated(form: RecipeForm) -> Result<RecipeDraft, FieldErrors> {
    validate_recipe(&form)
}

#[then("each failing field reports its own message")]
fn each_failing_field_reports_its_message(result: Result<RecipeDraft, FieldErrors>) {
    let errors = result.expect_err("draft is invalid");
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec!["description", "preparationTime", "servings", "title"]
    );
    assert_eq!(
        errors.messages("description"),
        vec!["The description must have at least 20 characters."]
    );
    assert_eq!(
        errors.messages("servings"),
        vec!["Servings only accept whole numbers."]
    );
}

#[rstest]
fn draft_validation_accumulates_every_field() {
    let result = the_draft_is_validated(a_draft_failing_four_rules());
    each_failing_field_reports_its_message(result);
}

#[rstest]
fn draft_validation_is_idempotent() {
    let form = a_draft_failing_four_rules();
    assert_eq!(validate_recipe(&form), validate_recipe(&form));
}
