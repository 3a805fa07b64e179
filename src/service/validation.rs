//! Request payload validation: pure functions over the raw JSON body.
//!
//! Bodies are validated before typed deserialization so the error messages are
//! exactly the contract's (`"<field> is required"`, `"Invalid email format"`),
//! not serde's.

use crate::error::AppError;
use regex::Regex;
use serde_json::{Map, Value};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

const USER_REQUIRED: [&str; 4] = ["displayName", "photoURL", "uid", "email"];

const MEME_REQUIRED: [&str; 5] = ["title", "src", "url", "memeId", "created_date"];

/// Validate a user payload: every required field in order, then the email shape.
pub fn validate_user(body: &Map<String, Value>) -> Result<(), AppError> {
    for key in USER_REQUIRED {
        if !is_present(body.get(key)) {
            return Err(AppError::Validation(format!("{} is required", key)));
        }
    }
    let re = Regex::new(EMAIL_PATTERN)
        .map_err(|e| AppError::Validation(format!("invalid email pattern: {}", e)))?;
    let email = body.get("email").and_then(Value::as_str).unwrap_or("");
    if !re.is_match(email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }
    Ok(())
}

/// Validate a meme payload: required fields in order, then hashtag / tags /
/// comments shape rules. First violated rule wins.
pub fn validate_meme(body: &Map<String, Value>) -> Result<(), AppError> {
    for key in MEME_REQUIRED {
        if !is_present(body.get(key)) {
            return Err(AppError::Validation(format!("{} is required", key)));
        }
    }
    if let Some(hashtag) = body.get("hashtag") {
        if !hashtag.is_null() && !hashtag.is_string() {
            return Err(AppError::Validation("hashtag must be a string".to_string()));
        }
    }
    match body.get("tags") {
        Some(v) if v.is_array() || v.is_object() => {}
        _ => return Err(AppError::Validation("tags must be an object or array".to_string())),
    }
    if let Some(comments) = body.get("comments") {
        let non_empty_list = matches!(comments, Value::Array(items) if !items.is_empty());
        if !non_empty_list {
            return Err(AppError::Validation("comments must be a non-empty array".to_string()));
        }
    }
    Ok(())
}

/// Required-field presence: absent, null, `""`, `0`, and `false` all count as missing.
fn is_present(val: Option<&Value>) -> bool {
    match val {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    fn message(err: AppError) -> String {
        err.to_string()
    }

    #[test]
    fn first_missing_user_field_wins() {
        let body = object(json!({ "displayName": "", "photoURL": "", "uid": "", "email": "" }));
        assert_eq!(message(validate_user(&body).unwrap_err()), "displayName is required");

        let body = object(json!({ "displayName": "amy", "uid": "u1", "email": "a@b.co" }));
        assert_eq!(message(validate_user(&body).unwrap_err()), "photoURL is required");
    }

    #[test]
    fn display_name_missing_regardless_of_other_fields() {
        let body = object(json!({ "photoURL": "p", "uid": "u1", "email": "a@b.co" }));
        assert_eq!(message(validate_user(&body).unwrap_err()), "displayName is required");
    }

    #[test]
    fn invalid_email_checked_after_required_fields() {
        let body = object(json!({
            "displayName": "amy",
            "photoURL": "p",
            "uid": "x",
            "email": "not-an-email"
        }));
        assert_eq!(message(validate_user(&body).unwrap_err()), "Invalid email format");
    }

    #[test]
    fn email_with_spaces_rejected() {
        let body = object(json!({
            "displayName": "amy",
            "photoURL": "p",
            "uid": "x",
            "email": "a b@c.com"
        }));
        assert_eq!(message(validate_user(&body).unwrap_err()), "Invalid email format");
    }

    #[test]
    fn valid_user_passes() {
        let body = object(json!({
            "displayName": "amy",
            "photoURL": "https://img/amy.png",
            "uid": "firebase-1",
            "email": "amy@example.com"
        }));
        assert!(validate_user(&body).is_ok());
    }

    #[test]
    fn meme_required_fields_first_failure_wins() {
        let body = object(json!({ "src": "s", "url": "u" }));
        assert_eq!(message(validate_meme(&body).unwrap_err()), "title is required");

        let body = object(json!({ "title": "t", "src": "s", "url": "u", "memeId": 0, "created_date": "d" }));
        assert_eq!(message(validate_meme(&body).unwrap_err()), "memeId is required");
    }

    #[test]
    fn hashtag_must_be_string_when_present() {
        let body = object(json!({
            "title": "t", "src": "s", "url": "u", "memeId": 1, "created_date": "d",
            "hashtag": 42, "tags": []
        }));
        assert_eq!(message(validate_meme(&body).unwrap_err()), "hashtag must be a string");
    }

    #[test]
    fn tags_must_be_structured() {
        let body = object(json!({
            "title": "t", "src": "s", "url": "u", "memeId": 1, "created_date": "d",
            "tags": "funny"
        }));
        assert_eq!(message(validate_meme(&body).unwrap_err()), "tags must be an object or array");

        let body = object(json!({
            "title": "t", "src": "s", "url": "u", "memeId": 1, "created_date": "d"
        }));
        assert_eq!(message(validate_meme(&body).unwrap_err()), "tags must be an object or array");
    }

    #[test]
    fn supplied_comments_must_be_non_empty() {
        let body = object(json!({
            "title": "t", "src": "s", "url": "u", "memeId": 1, "created_date": "d",
            "tags": [], "comments": []
        }));
        assert_eq!(message(validate_meme(&body).unwrap_err()), "comments must be a non-empty array");
    }

    #[test]
    fn valid_meme_passes() {
        let body = object(json!({
            "title": "a", "src": "s", "url": "u", "memeId": 1, "created_date": "2024-01-01",
            "tags": [], "hashtag": "#cats",
            "comments": [{ "name": "bob", "content": "lol" }]
        }));
        assert!(validate_meme(&body).is_ok());
    }
}
