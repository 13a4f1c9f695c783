//! Input validation for staged form data
//!
//! Only required-field presence and basic shape are checked here. Business
//! rules stay with the backend.

use regex::Regex;
use std::sync::OnceLock;

/// Maximum number of tags kept on a question
pub const MAX_TAGS: usize = 10;

/// Maximum length of a single tag, in characters
pub const MAX_TAG_CHARS: usize = 20;

/// Validate that a text field is present
pub fn validate_required(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{}을(를) 입력해주세요.", label));
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("이메일을 입력해주세요.".to_string());
    }

    if email.len() > 254 {
        return Err("이메일은 254자 이하로 입력해주세요.".to_string());
    }

    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    let regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

    match regex {
        Some(regex) if regex.is_match(email) => Ok(()),
        _ => Err("올바른 이메일 형식이 아닙니다.".to_string()),
    }
}

/// Validate a new password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("비밀번호를 입력해주세요.".to_string());
    }

    let length = password.chars().count();
    if length < 8 {
        return Err("비밀번호는 8자 이상이어야 합니다.".to_string());
    }

    if length > 128 {
        return Err("비밀번호는 128자 이하로 입력해주세요.".to_string());
    }

    let mut has_letter = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_ascii_alphabetic() {
            has_letter = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if !c.is_alphanumeric() && !c.is_whitespace() {
            has_special = true;
        }
    }

    if !(has_letter && has_digit && has_special) {
        return Err("비밀번호는 영문, 숫자, 특수문자를 모두 포함해야 합니다.".to_string());
    }

    Ok(())
}

/// Validate that a password confirmation matches
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if password != confirmation {
        return Err("비밀번호가 일치하지 않습니다.".to_string());
    }

    Ok(())
}

/// Clean up tag input
///
/// Trims whitespace and leading `#`, drops blank and duplicate tags, truncates
/// each tag to [`MAX_TAG_CHARS`] and keeps at most [`MAX_TAGS`] tags in
/// input order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();

    for tag in tags {
        let tag: String = tag
            .as_ref()
            .trim()
            .trim_start_matches('#')
            .trim()
            .chars()
            .take(MAX_TAG_CHARS)
            .collect();

        if tag.is_empty() || normalized.iter().any(|existing| existing == &tag) {
            continue;
        }

        normalized.push(tag);
        if normalized.len() == MAX_TAGS {
            break;
        }
    }

    normalized
}
