//! Schema validation for create and update payloads.
//!
//! Payloads arrive as `Option<serde_json::Value>`: a body that failed to
//! parse is `None` and is reported as undecodable. Validation follows the
//! parse-don't-validate idiom: the only way to obtain a [`UserDraft`] is
//! through [`UserDraft::try_from_payload`], so handlers can never apply an
//! unchecked payload to the store.

use std::fmt;

use serde_json::{Map, Number, Value};
use utoipa::ToSchema;

/// Field names recognised by the user schema, in diagnostic order.
const ALLOWED_FIELDS: [&str; 3] = ["username", "age", "hobbies"];

/// Which schema a payload is checked against.
///
/// `Full` is the create/replace schema. `Partial` is the update schema;
/// update performs a full field replace, so both modes require the same
/// three fields. The distinction is kept at the call sites where the two
/// schemas historically diverged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Create/replace: `username`, `age`, and `hobbies` all required.
    Full,
    /// Update: identical requirements to [`ValidationMode::Full`].
    Partial,
}

/// Ordered validation messages for a rejected payload.
///
/// Unrecognised-field messages come first (in payload key order), followed by
/// per-field messages in the fixed order username → age → hobbies. The wire
/// representation joins the messages with `", "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadErrors {
    messages: Vec<String>,
}

impl PayloadErrors {
    fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    fn undecodable() -> Self {
        Self::new(vec!["the request doesn't contain valid data".to_owned()])
    }

    /// Individual violation messages in diagnostic order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl fmt::Display for PayloadErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join(", "))
    }
}

impl std::error::Error for PayloadErrors {}

/// Validated `{ username, age, hobbies }` triple ready to be applied to the
/// store.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct UserDraft {
    /// Display name.
    #[schema(example = "Ada")]
    pub username: String,
    /// Age in years; any JSON number is accepted.
    #[schema(value_type = u64, example = 36)]
    pub age: Number,
    /// Ordered list of hobby names, possibly empty.
    pub hobbies: Vec<String>,
}

impl UserDraft {
    /// Check `payload` against the user schema and extract the field values.
    ///
    /// # Errors
    /// Returns the ordered violation messages when the payload is absent,
    /// not a JSON object, carries unrecognised keys, or misses/mistypes any
    /// of the three schema fields.
    pub fn try_from_payload(
        payload: Option<&Value>,
        mode: ValidationMode,
    ) -> Result<Self, PayloadErrors> {
        let Some(object) = payload.and_then(Value::as_object) else {
            return Err(PayloadErrors::undecodable());
        };

        let mut messages = Vec::new();
        for key in object.keys() {
            if !ALLOWED_FIELDS.contains(&key.as_str()) {
                messages.push(format!(
                    "the request contains not allowed field {key}, please remove it"
                ));
            }
        }

        let (username, age, hobbies) = match mode {
            // Update replaces every field, so the partial schema converged on
            // the full one: all three fields required in both modes.
            ValidationMode::Full | ValidationMode::Partial => (
                check_username(object, &mut messages),
                check_age(object, &mut messages),
                check_hobbies(object, &mut messages),
            ),
        };

        match (username, age, hobbies) {
            (Some(username), Some(age), Some(hobbies)) if messages.is_empty() => Ok(Self {
                username,
                age,
                hobbies,
            }),
            _ => Err(PayloadErrors::new(messages)),
        }
    }
}

fn check_username(object: &Map<String, Value>, messages: &mut Vec<String>) -> Option<String> {
    match object.get("username") {
        Some(Value::String(username)) => Some(username.clone()),
        Some(_) => {
            messages.push("username value must be a string".to_owned());
            None
        }
        None => {
            messages.push("the request doesn't contain field username".to_owned());
            None
        }
    }
}

fn check_age(object: &Map<String, Value>, messages: &mut Vec<String>) -> Option<Number> {
    match object.get("age") {
        Some(Value::Number(age)) => Some(age.clone()),
        Some(_) => {
            messages.push("age value must be a number".to_owned());
            None
        }
        None => {
            messages.push("the request doesn't contain field age".to_owned());
            None
        }
    }
}

fn check_hobbies(object: &Map<String, Value>, messages: &mut Vec<String>) -> Option<Vec<String>> {
    match object.get("hobbies") {
        Some(Value::Array(items)) => {
            // One message however many elements violate the constraint.
            if items.iter().any(|item| !item.is_string()) {
                messages.push("hobby value must be a string".to_owned());
                return None;
            }
            Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect(),
            )
        }
        Some(_) => {
            messages.push("hobbies value must be an array".to_owned());
            None
        }
        None => {
            messages.push("the request doesn't contain field hobbies".to_owned());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn validate(payload: &Value, mode: ValidationMode) -> Result<UserDraft, PayloadErrors> {
        UserDraft::try_from_payload(Some(payload), mode)
    }

    #[rstest]
    #[case::full(ValidationMode::Full)]
    #[case::partial(ValidationMode::Partial)]
    fn accepts_a_complete_payload(#[case] mode: ValidationMode) {
        let payload = json!({"username": "Ada", "age": 36, "hobbies": ["maths"]});
        let draft = validate(&payload, mode).expect("payload satisfies the schema");
        assert_eq!(draft.username, "Ada");
        assert_eq!(draft.age, 36.into());
        assert_eq!(draft.hobbies, vec!["maths".to_owned()]);
    }

    #[test]
    fn accepts_empty_hobbies() {
        let payload = json!({"username": "Ada", "age": 36, "hobbies": []});
        let draft = validate(&payload, ValidationMode::Full).expect("empty hobbies are allowed");
        assert!(draft.hobbies.is_empty());
    }

    #[test]
    fn accepts_a_fractional_age() {
        let payload = json!({"username": "Ada", "age": 36.5, "hobbies": []});
        assert!(validate(&payload, ValidationMode::Full).is_ok());
    }

    #[test]
    fn absent_payload_is_undecodable() {
        let errors = UserDraft::try_from_payload(None, ValidationMode::Full)
            .expect_err("absent payload is invalid");
        assert_eq!(
            errors.messages(),
            ["the request doesn't contain valid data"]
        );
    }

    #[rstest]
    #[case::number(json!(5))]
    #[case::text(json!("users"))]
    #[case::array(json!([{"username": "Ada"}]))]
    fn non_object_payload_is_undecodable(#[case] payload: Value) {
        let errors =
            validate(&payload, ValidationMode::Full).expect_err("non-object payload is invalid");
        assert_eq!(
            errors.messages(),
            ["the request doesn't contain valid data"]
        );
    }

    #[rstest]
    #[case::missing_username(
        json!({"age": 36, "hobbies": []}),
        "the request doesn't contain field username"
    )]
    #[case::missing_age(
        json!({"username": "Ada", "hobbies": []}),
        "the request doesn't contain field age"
    )]
    #[case::missing_hobbies(
        json!({"username": "Ada", "age": 36}),
        "the request doesn't contain field hobbies"
    )]
    #[case::username_not_text(
        json!({"username": 7, "age": 36, "hobbies": []}),
        "username value must be a string"
    )]
    #[case::age_not_number(
        json!({"username": "Ada", "age": "36", "hobbies": []}),
        "age value must be a number"
    )]
    #[case::hobbies_not_array(
        json!({"username": "Ada", "age": 36, "hobbies": "maths"}),
        "hobbies value must be an array"
    )]
    #[case::hobby_not_text(
        json!({"username": "Ada", "age": 36, "hobbies": ["maths", 5]}),
        "hobby value must be a string"
    )]
    fn reports_a_single_field_violation(#[case] payload: Value, #[case] expected: &str) {
        for mode in [ValidationMode::Full, ValidationMode::Partial] {
            let errors = validate(&payload, mode).expect_err("payload violates the schema");
            assert_eq!(errors.messages(), [expected]);
        }
    }

    #[test]
    fn rejects_unrecognised_fields() {
        let payload =
            json!({"username": "Ada", "age": 36, "hobbies": [], "notAllowedField": true});
        let errors = validate(&payload, ValidationMode::Full).expect_err("stray key is invalid");
        assert_eq!(
            errors.messages(),
            ["the request contains not allowed field notAllowedField, please remove it"]
        );
    }

    #[test]
    fn stray_key_messages_precede_field_messages() {
        let payload = json!({"extra": 1, "age": "36"});
        let errors = validate(&payload, ValidationMode::Full).expect_err("payload is invalid");
        assert_eq!(
            errors.messages(),
            [
                "the request contains not allowed field extra, please remove it",
                "the request doesn't contain field username",
                "age value must be a number",
                "the request doesn't contain field hobbies",
            ]
        );
    }

    #[test]
    fn display_joins_messages_with_commas() {
        let payload = json!({"age": 36});
        let errors = validate(&payload, ValidationMode::Full).expect_err("payload is invalid");
        assert_eq!(
            errors.to_string(),
            "the request doesn't contain field username, the request doesn't contain field hobbies"
        );
    }
}
