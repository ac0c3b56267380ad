//! Canadian phone number validation.
//!
//! A valid number is exactly `"AAA BBB-CCCC"`: a known area code, a space, three digits, a
//! hyphen and four digits. Nothing is normalised; `"418.666.6666"` or `" 418 666-6666"` are
//! rejected as written.

use crate::constants::{AREA_CODES, AREA_CODE_LEN, PHONE_LEN};
use crate::{ValidationError, ValidationResult};

/// What a single position of the local number must hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Digit,
    Literal(char),
}

impl Slot {
    fn accepts(self, c: char) -> bool {
        match self {
            Slot::Digit => c.is_ascii_digit(),
            Slot::Literal(expected) => c == expected,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Slot::Digit => "a digit",
            Slot::Literal(' ') => "a space",
            Slot::Literal('-') => "a hyphen",
            Slot::Literal(_) => "a separator",
        }
    }
}

/// Rule table for the 9 characters following the area code (`" BBB-CCCC"`).
const LOCAL_TEMPLATE: [Slot; PHONE_LEN - AREA_CODE_LEN] = [
    Slot::Literal(' '),
    Slot::Digit,
    Slot::Digit,
    Slot::Digit,
    Slot::Literal('-'),
    Slot::Digit,
    Slot::Digit,
    Slot::Digit,
    Slot::Digit,
];

/// Returns `true` if `code` is one of the known Canadian area codes.
pub fn is_known_area_code(code: &str) -> bool {
    AREA_CODES.binary_search(&code).is_ok()
}

/// Iterates over the known area codes in ascending order.
pub fn known_area_codes() -> impl Iterator<Item = &'static str> {
    AREA_CODES.iter().copied()
}

/// Checks a phone number and reports the first rule it breaks.
///
/// # Errors
///
/// - [`ValidationError::PhoneLength`] if the input is not 12 characters long.
/// - [`ValidationError::UnknownAreaCode`] if the first 3 characters are not a known area code.
/// - [`ValidationError::PhoneLocalFormat`] for the first position of the local number that does
///   not match the template. `position` is 0-based within the local number.
pub fn check_phone(phone: &str) -> ValidationResult<()> {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() != PHONE_LEN {
        return Err(ValidationError::PhoneLength(chars.len()));
    }

    let area_code: String = chars[..AREA_CODE_LEN].iter().collect();
    if !is_known_area_code(&area_code) {
        return Err(ValidationError::UnknownAreaCode(area_code));
    }

    let local = &chars[PHONE_LEN - LOCAL_TEMPLATE.len()..];
    for (position, (&slot, &found)) in LOCAL_TEMPLATE.iter().zip(local).enumerate() {
        if !slot.accepts(found) {
            return Err(ValidationError::PhoneLocalFormat {
                position,
                expected: slot.describe(),
                found,
            });
        }
    }

    Ok(())
}

/// Returns `true` if `phone` is a structurally valid Canadian phone number.
///
/// Never panics; any malformed input yields `false`.
pub fn validate_phone(phone: &str) -> bool {
    match check_phone(phone) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "phone number rejected");
            false
        }
    }
}
