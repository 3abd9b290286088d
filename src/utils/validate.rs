use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date regex"));

// HH:MM 或 HH:MM:SS，小时允许单个数字
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9](:[0-5][0-9])?$").expect("Invalid time regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 -]{5,19}$").expect("Invalid phone regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, dots, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_phone_number(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

/// 日期必须为 YYYY-MM-DD 且是真实存在的日期
pub fn validate_date(date: &str) -> Result<(), &'static str> {
    if !DATE_RE.is_match(date) || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err("Date must use the YYYY-MM-DD format");
    }
    Ok(())
}

pub fn validate_time(time: &str) -> Result<(), &'static str> {
    if !TIME_RE.is_match(time) {
        return Err("Time must use the HH:MM or HH:MM:SS format");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username() {
        assert!(validate_username("superadmin").is_ok());
        assert!(validate_username("john.doe_1").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("hr@example.com").is_ok());
        assert!(validate_email("hr@example").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_phone_number() {
        assert!(validate_phone_number("+62 812-3456-7890").is_ok());
        assert!(validate_phone_number("08123456789").is_ok());
        assert!(validate_phone_number("call me").is_err());
    }

    #[test]
    fn test_date() {
        assert!(validate_date("2025-03-01").is_ok());
        assert!(validate_date("2025-3-1").is_err());
        assert!(validate_date("2025-02-30").is_err());
        assert!(validate_date("01-03-2025").is_err());
    }

    #[test]
    fn test_time() {
        assert!(validate_time("09:30").is_ok());
        assert!(validate_time("9:30").is_ok());
        assert!(validate_time("23:59:59").is_ok());
        assert!(validate_time("24:00").is_err());
        assert!(validate_time("12:60").is_err());
        assert!(validate_time("12:30:60").is_err());
    }
}
