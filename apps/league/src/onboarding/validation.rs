use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static RE_EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

pub const MIN_PASSWORD_CHARS: usize = 6;

/// Field name → human-readable message. Empty means the step passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors<F: Ord>(BTreeMap<F, String>);

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        FieldErrors(BTreeMap::new())
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: F) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    // ── rule helpers ─────────────────────────────────────────────────────────

    /// Presence check on trimmed text.
    pub fn require_text(&mut self, field: F, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }

    /// Presence check, then the `\S+@\S+\.\S+` shape check.
    pub fn require_email(&mut self, field: F, value: &str) {
        if value.trim().is_empty() {
            self.insert(field, "Email krävs");
        } else if !is_valid_email(value) {
            self.insert(field, "Ogiltig email");
        }
    }

    pub fn require_password(&mut self, field: F, value: &str) {
        if value.chars().count() < MIN_PASSWORD_CHARS {
            self.insert(field, "Lösenord måste vara minst 6 tecken");
        }
    }

    pub fn require_present<T>(&mut self, field: F, value: Option<T>, message: &str) {
        if value.is_none() {
            self.insert(field, message);
        }
    }

    pub fn require_any<T>(&mut self, field: F, values: &[T], message: &str) {
        if values.is_empty() {
            self.insert(field, message);
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    RE_EMAIL.is_match(value)
}

/// Adds `value` if absent, removes it if present.
pub fn toggle<T: PartialEq>(items: &mut Vec<T>, value: T) {
    if let Some(pos) = items.iter().position(|item| *item == value) {
        items.remove(pos);
    } else {
        items.push(value);
    }
}
