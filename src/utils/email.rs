use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

/// 邮箱最大长度（RFC 5321 路径上限），低于表字段的 320
pub const MAX_EMAIL_LEN: usize = 254;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("valid email regex"));

/// 去重用的邮箱键：去掉首尾空白并转小写
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 校验邮箱（调用方已 trim）：非空、不超长、形如 `local@domain`
pub fn validate_email(email: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::ValidationError("Email is required".to_string()));
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(AppError::ValidationError(format!(
            "Email must be at most {MAX_EMAIL_LEN} characters"
        )));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(AppError::ValidationError(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}
