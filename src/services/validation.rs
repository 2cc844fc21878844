use crate::messages;
use serde::{Deserialize, Serialize};

/// A registration submission as received over the wire. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

/// Checks every registration rule and reports all violations in rule order.
///
/// Email is only length-checked; no format validation is applied.
pub fn validate_register(request: &RegisterRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if !trimmed_len_at_least(request.username.as_deref(), 3) {
        errors.push(messages::USERNAME_TOO_SHORT.to_string());
    }

    if !trimmed_len_at_least(request.email.as_deref(), 5) {
        errors.push(messages::EMAIL_INVALID.to_string());
    }

    // Password length counts raw characters, surrounding whitespace included.
    let password_ok = request
        .password
        .as_deref()
        .map(|p| p.chars().count() >= 4)
        .unwrap_or(false);
    if !password_ok {
        errors.push(messages::PASSWORD_TOO_SHORT.to_string());
    }

    errors
}

fn trimmed_len_at_least(value: Option<&str>, min: usize) -> bool {
    value.map(|v| v.trim().chars().count() >= min).unwrap_or(false)
}
