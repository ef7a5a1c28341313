//! Field-format rules shared by request DTOs
//!
//! Used through `#[validate(custom(function = "..."))]` on `Option` fields.
//! `validator` skips `None`, so an absent field passes; any present value,
//! the empty string included, has to match its pattern.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub const LINK_MESSAGE: &str = "This should have been a link";
pub const TELEGRAM_MESSAGE: &str = "Telegram contact must be in the format \"https://t.me/name\"";
pub const LOCAL_PHONE_MESSAGE: &str = "Contact phone must be in the format \"+380999999999\"";
pub const PHONE_NUMBER_MESSAGE: &str = "phone must be a valid phone number";

/// http(s) link with a dotted host and an optional path/query
pub static LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([\w-]+\.)+[\w-]{2,}(:\d{1,5})?([/?#][\w\-./?%&=#:@+~!$,;*()']*)?$")
        .expect("valid link regex")
});

/// `https://t.me/<name>`
pub static TELEGRAM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://t\.me/[A-Za-z0-9_]+/?$").expect("valid telegram regex"));

/// Ukrainian mobile number, `+380` followed by nine digits
pub static LOCAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+380\d{9}$").expect("valid phone regex"));

/// International number in E.164 form
pub static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{7,14}$").expect("valid phone regex"));

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn check(
    value: &str,
    regex: &Regex,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(rule_error(code, message))
    }
}

pub fn link(value: &str) -> Result<(), ValidationError> {
    check(value, &LINK_REGEX, "link", LINK_MESSAGE)
}

pub fn telegram_link(value: &str) -> Result<(), ValidationError> {
    check(value, &TELEGRAM_REGEX, "telegram", TELEGRAM_MESSAGE)
}

pub fn local_phone(value: &str) -> Result<(), ValidationError> {
    check(value, &LOCAL_PHONE_REGEX, "phone", LOCAL_PHONE_MESSAGE)
}

pub fn phone_number(value: &str) -> Result<(), ValidationError> {
    check(value, &PHONE_NUMBER_REGEX, "phone_number", PHONE_NUMBER_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links() {
        for ok in [
            "https://drive.google.com/drive/u/0/my-drive",
            "https://www.linkedin.com/in/user/",
            "https://github.com/user",
            "https://www.facebook.com/profile.php?id=100",
            "http://localhost.dev:3000/cv",
            "https://my-site.netlify.app?id=a70fdfe5-c1b5-4c1c-b603-b4847358d102",
            "www.instagram.com",
        ] {
            assert!(link(ok).is_ok(), "{ok} should be a link");
        }
        for bad in ["", "not a link", "https://", "github", "ftp//x.y"] {
            assert!(link(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn empty_string_is_not_a_match() {
        assert_eq!(link("").unwrap_err().message.as_deref(), Some(LINK_MESSAGE));
        assert!(telegram_link("").is_err());
        assert!(super::local_phone("").is_err());
        assert!(phone_number("").is_err());
    }

    #[test]
    fn telegram() {
        assert!(telegram_link("https://t.me/validname").is_ok());
        assert!(telegram_link("https://telegram.me/x").is_err());
        assert!(telegram_link("http://t.me/name").is_err());
        assert!(telegram_link("@name").is_err());

        let err = telegram_link("t.me/name").unwrap_err();
        assert_eq!(err.message.as_deref(), Some(TELEGRAM_MESSAGE));
    }

    #[test]
    fn local_phone() {
        assert!(super::local_phone("+380999999999").is_ok());
        assert!(super::local_phone("380999999999").is_err());
        assert!(super::local_phone("+38099999999").is_err());
        assert!(super::local_phone("+3809999999999").is_err());
        assert!(super::local_phone("+14155550100").is_err());
    }

    #[test]
    fn international_phone() {
        assert!(phone_number("+380998887776").is_ok());
        assert!(phone_number("+14155550100").is_ok());
        assert!(phone_number("0998887776").is_err());
        assert!(phone_number("+0123456789").is_err());
        assert!(phone_number("+38099abc7776").is_err());
    }
}
