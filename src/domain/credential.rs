//! Credential record and rejection event.

use serde::Serialize;
use serde_json::Value;

use super::sanitizer::is_valid_input;

/// A user record accepted for storage.
///
/// Both fields have passed the sanitizer and are stored unmodified as
/// `{ "username": ..., "password": ... }`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

// Don't expose password in debug output (security)
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    /// Validate a candidate username/password pair.
    ///
    /// Returns the accepted record, or the rejection event carrying both raw
    /// values when either one fails the sanitizer.
    pub fn validate(username: &Value, password: &Value) -> Result<Self, Rejection> {
        match (username, password) {
            (Value::String(u), Value::String(p))
                if is_valid_input(username) && is_valid_input(password) =>
            {
                Ok(Self {
                    username: u.clone(),
                    password: p.clone(),
                })
            }
            _ => Err(Rejection {
                username: username.clone(),
                password: password.clone(),
            }),
        }
    }
}

/// Candidate pair that failed validation.
///
/// Only ever logged, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub username: Value,
    pub password: Value,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Code injection attempt detected: {}, {}",
            render(&self.username),
            render(&self.password)
        )
    }
}

/// Strings are shown raw, everything else as compact JSON.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_accepts_plain_pair() {
        let credential = Credential::validate(&json!("admin"), &json!("securepassword")).unwrap();
        assert_eq!(credential.username, "admin");
        assert_eq!(credential.password, "securepassword");
    }

    #[test]
    fn test_validate_rejects_operator_secret() {
        let rejection = Credential::validate(&json!("intruder"), &json!({"$gt": ""})).unwrap_err();
        assert_eq!(rejection.username, json!("intruder"));
        assert_eq!(rejection.password, json!({"$gt": ""}));
    }

    #[test]
    fn test_validate_rejects_bad_username() {
        assert!(Credential::validate(&json!("root>"), &json!("pw")).is_err());
        assert!(Credential::validate(&json!(7), &json!("pw")).is_err());
    }

    #[test]
    fn test_rejection_display_shows_raw_values() {
        let rejection = Rejection {
            username: json!("intruder"),
            password: json!({"$gt": ""}),
        };
        assert_eq!(
            rejection.to_string(),
            r#"Code injection attempt detected: intruder, {"$gt":""}"#
        );
    }

    #[test]
    fn test_serializes_to_two_field_document() {
        let credential = Credential {
            username: "user1".to_string(),
            password: "anotherpassword".to_string(),
        };
        let value = serde_json::to_value(&credential).unwrap();
        assert_eq!(
            value,
            json!({"username": "user1", "password": "anotherpassword"})
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let credential = Credential {
            username: "admin".to_string(),
            password: "securepassword".to_string(),
        };
        let debug = format!("{:?}", credential);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("securepassword"));
    }
}
