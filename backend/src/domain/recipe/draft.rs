//! Recipe drafts submitted from the author dashboard.

use std::num::IntErrorKind;
use std::str::FromStr;

use super::{PreparationTimeUnit, ServingsUnit};
use crate::domain::auth::REQUIRED_MESSAGE;
use crate::domain::{FieldErrorCode, FieldErrors};

const TITLE_MIN: usize = 8;
const DESCRIPTION_MIN: usize = 20;
const PREPARATION_STEPS_MIN: usize = 100;

/// Raw draft fields as submitted; numbers and units arrive as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub preparation_time: String,
    pub preparation_time_unit: String,
    pub servings: String,
    pub servings_unit: String,
    pub preparation_steps: String,
    pub cover: Option<String>,
}

/// A draft that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub preparation_time: u32,
    pub preparation_time_unit: PreparationTimeUnit,
    pub servings: u32,
    pub servings_unit: ServingsUnit,
    pub preparation_steps: String,
    pub cover: Option<String>,
}

enum WholeNumber {
    Blank,
    Value(u32),
    Negative,
    TooLarge,
    NotWhole,
}

fn parse_whole_number(raw: &str) -> WholeNumber {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return WholeNumber::Blank;
    }
    match trimmed.parse::<i64>() {
        Ok(value) if value < 0 => WholeNumber::Negative,
        Ok(value) => u32::try_from(value).map_or(WholeNumber::TooLarge, WholeNumber::Value),
        Err(err) => match err.kind() {
            IntErrorKind::NegOverflow => WholeNumber::Negative,
            IntErrorKind::PosOverflow => WholeNumber::TooLarge,
            _ => WholeNumber::NotWhole,
        },
    }
}

/// Shared by both numeric fields; the bound is the widest stored value.
const TOO_LARGE_MESSAGE: &str = "Ensure this value is less than or equal to 4294967295.";

struct NumberField {
    name: &'static str,
    negative: &'static str,
    not_whole: &'static str,
}

const PREPARATION_TIME: NumberField = NumberField {
    name: "preparationTime",
    negative: "Preparation time cannot be negative.",
    not_whole: "Preparation time only accept whole numbers.",
};

const SERVINGS: NumberField = NumberField {
    name: "servings",
    negative: "Servings cannot be negative.",
    not_whole: "Servings only accept whole numbers.",
};

fn check_number(field: &NumberField, raw: &str, errors: &mut FieldErrors) -> Option<u32> {
    match parse_whole_number(raw) {
        WholeNumber::Value(value) => Some(value),
        WholeNumber::Blank => {
            errors.push(field.name, FieldErrorCode::Required, REQUIRED_MESSAGE);
            None
        }
        WholeNumber::Negative => {
            errors.push(field.name, FieldErrorCode::Negative, field.negative);
            None
        }
        WholeNumber::TooLarge => {
            errors.push(field.name, FieldErrorCode::MaxValue, TOO_LARGE_MESSAGE);
            None
        }
        WholeNumber::NotWhole => {
            errors.push(field.name, FieldErrorCode::NotWholeNumber, field.not_whole);
            None
        }
    }
}

fn check_text(
    field: &'static str,
    raw: &str,
    min: usize,
    message: &'static str,
    errors: &mut FieldErrors,
) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, FieldErrorCode::Required, REQUIRED_MESSAGE);
    } else if trimmed.chars().count() < min {
        errors.push(field, FieldErrorCode::MinLength, message);
    }
    trimmed.to_owned()
}

fn check_choice<T: FromStr>(field: &'static str, raw: &str, errors: &mut FieldErrors) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, FieldErrorCode::Required, REQUIRED_MESSAGE);
        return None;
    }
    let parsed = trimmed.parse::<T>().ok();
    if parsed.is_none() {
        errors.push(
            field,
            FieldErrorCode::InvalidChoice,
            format!("Select a valid choice. {trimmed} is not one of the available choices."),
        );
    }
    parsed
}

/// Apply every draft rule, reporting all failures together.
///
/// # Examples
/// ```
/// use cookbook::domain::{RecipeForm, validate_recipe};
///
/// let form = RecipeForm {
///     title: "Short".into(),
///     preparation_time: "-5".into(),
///     servings: "2.5".into(),
///     ..RecipeForm::default()
/// };
/// let errors = validate_recipe(&form).expect_err("several rules fail");
/// assert_eq!(
///     errors.messages("title"),
///     vec!["The title must have at least 8 characters."]
/// );
/// assert_eq!(
///     errors.messages("preparationTime"),
///     vec!["Preparation time cannot be negative."]
/// );
/// assert_eq!(
///     errors.messages("servings"),
///     vec!["Servings only accept whole numbers."]
/// );
/// ```
pub fn validate_recipe(form: &RecipeForm) -> Result<RecipeDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let title = check_text(
        "title",
        &form.title,
        TITLE_MIN,
        "The title must have at least 8 characters.",
        &mut errors,
    );
    let description = check_text(
        "description",
        &form.description,
        DESCRIPTION_MIN,
        "The description must have at least 20 characters.",
        &mut errors,
    );
    let preparation_time = check_number(&PREPARATION_TIME, &form.preparation_time, &mut errors);
    let preparation_time_unit: Option<PreparationTimeUnit> = check_choice(
        "preparationTimeUnit",
        &form.preparation_time_unit,
        &mut errors,
    );
    let servings = check_number(&SERVINGS, &form.servings, &mut errors);
    let servings_unit: Option<ServingsUnit> =
        check_choice("servingsUnit", &form.servings_unit, &mut errors);
    let preparation_steps = check_text(
        "preparationSteps",
        &form.preparation_steps,
        PREPARATION_STEPS_MIN,
        "The preparation_steps must have at least 100 characters.",
        &mut errors,
    );
    let cover = form
        .cover
        .as_deref()
        .map(str::trim)
        .filter(|cover| !cover.is_empty())
        .map(str::to_owned);

    match (
        preparation_time,
        preparation_time_unit,
        servings,
        servings_unit,
    ) {
        (Some(preparation_time), Some(preparation_time_unit), Some(servings), Some(servings_unit))
            if errors.is_empty() =>
        {
            Ok(RecipeDraft {
                title,
                description,
                preparation_time,
                preparation_time_unit,
                servings,
                servings_unit,
                preparation_steps,
                cover,
            })
        }
        _ => Err(errors),
    }
}
