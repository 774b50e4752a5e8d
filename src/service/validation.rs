//! Create-payload validation.

use crate::error::AppError;
use crate::model::{Building, NewBuilding};
use regex::Regex;
use std::sync::OnceLock;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 60;

/// Unicode letters and digits.
fn alphanum_unicode() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("static pattern"))
}

/// ASCII letters only.
fn alpha() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z]+$").expect("static pattern"))
}

pub struct BuildingValidator;

impl BuildingValidator {
    /// Check every constraint and produce the entity to store. First failing field wins.
    pub fn validate(body: NewBuilding) -> Result<Building, AppError> {
        let title = required_text("title", body.title, alphanum_unicode(), "letters and digits")?;
        let city = required_text("city", body.city, alpha(), "ASCII letters")?;
        let year = required_positive("year", body.year)?;
        let floors = required_positive("floors", body.floors)?;
        Ok(Building {
            title,
            city,
            year,
            floors,
        })
    }
}

fn required_text(
    field: &str,
    value: Option<String>,
    class: &Regex,
    class_name: &str,
) -> Result<String, AppError> {
    let s = match value {
        Some(s) if !s.is_empty() => s,
        _ => return Err(AppError::Validation(format!("{} is required", field))),
    };
    let len = s.chars().count();
    if len < MIN_LEN {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, MIN_LEN
        )));
    }
    if len > MAX_LEN {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, MAX_LEN
        )));
    }
    if !class.is_match(&s) {
        return Err(AppError::Validation(format!(
            "{} must contain only {}",
            field, class_name
        )));
    }
    Ok(s)
}

fn required_positive(field: &str, value: Option<i32>) -> Result<i32, AppError> {
    match value {
        None | Some(0) => Err(AppError::Validation(format!("{} is required", field))),
        Some(n) if n < 0 => Err(AppError::Validation(format!("{} must be positive", field))),
        Some(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, city: &str, year: i32, floors: i32) -> NewBuilding {
        NewBuilding {
            title: Some(title.into()),
            city: Some(city.into()),
            year: Some(year),
            floors: Some(floors),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_building() {
        let b = BuildingValidator::validate(payload("Skytower", "Berlin", 2010, 42)).unwrap();
        assert_eq!(
            b,
            Building {
                title: "Skytower".into(),
                city: "Berlin".into(),
                year: 2010,
                floors: 42,
            }
        );
    }

    #[test]
    fn title_allows_unicode_letters_and_digits() {
        assert!(BuildingValidator::validate(payload("Башня2", "Moscow", 2001, 9)).is_ok());
    }

    #[test]
    fn title_length_counts_characters() {
        // 60 two-byte characters: too long in bytes, fine in characters.
        let title = "ё".repeat(60);
        assert!(BuildingValidator::validate(payload(&title, "Kazan", 1990, 3)).is_ok());
        let title = "ё".repeat(61);
        let msg = message(BuildingValidator::validate(payload(&title, "Kazan", 1990, 3)).unwrap_err());
        assert_eq!(msg, "title must be at most 60 characters");
    }

    #[test]
    fn rejects_short_title() {
        let msg = message(BuildingValidator::validate(payload("S", "Berlin", 2010, 42)).unwrap_err());
        assert_eq!(msg, "title must be at least 2 characters");
    }

    #[test]
    fn rejects_title_with_punctuation() {
        let msg = message(BuildingValidator::validate(payload("Sky Tower", "Berlin", 2010, 42)).unwrap_err());
        assert!(msg.starts_with("title must contain only"));
    }

    #[test]
    fn rejects_non_alphabetic_city() {
        for city in ["Berlin1", "New York", "S-Petersburg"] {
            let msg = message(BuildingValidator::validate(payload("Skytower", city, 2010, 42)).unwrap_err());
            assert!(msg.starts_with("city must contain only"), "{city}: {msg}");
        }
    }

    #[test]
    fn rejects_missing_fields() {
        let mut body = payload("Skytower", "Berlin", 2010, 42);
        body.year = None;
        assert_eq!(message(BuildingValidator::validate(body).unwrap_err()), "year is required");

        let mut body = payload("Skytower", "Berlin", 2010, 42);
        body.floors = Some(0);
        assert_eq!(message(BuildingValidator::validate(body).unwrap_err()), "floors is required");

        let mut body = payload("Skytower", "Berlin", 2010, 42);
        body.city = Some(String::new());
        assert_eq!(message(BuildingValidator::validate(body).unwrap_err()), "city is required");

        assert_eq!(
            message(BuildingValidator::validate(NewBuilding::default()).unwrap_err()),
            "title is required"
        );
    }

    #[test]
    fn rejects_negative_numbers() {
        let msg = message(BuildingValidator::validate(payload("Skytower", "Berlin", -5, 42)).unwrap_err());
        assert_eq!(msg, "year must be positive");
    }
}
