use std::borrow::Cow;
use std::collections::HashMap;

use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    lazy_static! {
        static ref PHONE_VALIDATION_RE: Regex = Regex::new(r"^\+?\d{7}\d*$").unwrap();
    }

    if PHONE_VALIDATION_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError {
            code: Cow::from("phone"),
            message: Some(Cow::from("Incorrect phone format")),
            params: HashMap::new(),
        })
    }
}

pub fn validate_non_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        Err(ValidationError {
            code: Cow::from("value"),
            message: Some(Cow::from("Value must be non negative.")),
            params: HashMap::new(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn phone_accepts_digits_with_optional_plus() {
        assert!(validate_phone("+79031234567").is_ok());
        assert!(validate_phone("1234567").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("phone").is_err());
    }

    #[test]
    fn negative_amounts_are_rejected() {
        assert!(validate_non_negative(&Decimal::new(50000, 2)).is_ok());
        assert!(validate_non_negative(&Decimal::new(0, 2)).is_ok());
        assert!(validate_non_negative(&Decimal::new(-1, 2)).is_err());
    }
}
