//! Field validation rules shared by the auth forms.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

/// A single password rule shown as a live checklist item.
pub struct PasswordRequirement {
    pub pattern: &'static str,
    pub label: &'static str,
    regex: LazyLock<Regex>,
}

impl PasswordRequirement {
    pub fn is_met(&self, password: &str) -> bool {
        self.regex.is_match(password)
    }
}

macro_rules! requirement {
    ($pattern:literal, $label:literal) => {
        PasswordRequirement {
            pattern: $pattern,
            label: $label,
            regex: LazyLock::new(|| Regex::new($pattern).expect("static password pattern")),
        }
    };
}

pub static PASSWORD_REQUIREMENTS: [PasswordRequirement; 5] = [
    requirement!(".{8,}", "At least 8 characters long"),
    requirement!("[0-9]", "Contains a number"),
    requirement!("[a-z]", "Contains a lowercase letter"),
    requirement!("[A-Z]", "Contains an uppercase letter"),
    requirement!("[^A-Za-z0-9]", "Contains a special character"),
];

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("static email pattern"));

/// Whether `password` satisfies every entry of [`PASSWORD_REQUIREMENTS`].
pub fn password_is_valid(password: &str) -> bool {
    PASSWORD_REQUIREMENTS.iter().all(|req| req.is_met(password))
}

/// Per-requirement results in checklist order.
pub fn password_checklist(password: &str) -> Vec<(&'static str, bool)> {
    PASSWORD_REQUIREMENTS
        .iter()
        .map(|req| (req.label, req.is_met(password)))
        .collect()
}

/// Loose `something@something.tld` shape check.
pub fn email_is_valid(email: &str) -> bool {
    EMAIL.is_match(email)
}
