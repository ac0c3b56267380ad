//! Quebec health-insurance (RAMQ) number validation.
//!
//! A RAMQ number looks like `POIG 9758 0316`. Its first 12 characters are derived from the
//! holder:
//!
//! - the first three letters of the last name,
//! - the first letter of the first name,
//! - a space,
//! - the last two digits of the birth year,
//! - the birth month, plus 50 for women,
//! - a space,
//! - the birth day.
//!
//! The two trailing digits are administrative and are not checked here.

use crate::constants::{MIN_BIRTH_YEAR, RAMQ_LAST_NAME_LETTERS, RAMQ_LEN, RAMQ_PREFIX_LEN};
use crate::{ValidationError, ValidationResult};
use qcid_types::Sex;

/// A RAMQ number together with the identity it is expected to encode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RamqRecord {
    pub number: String,
    pub last_name: String,
    pub first_name: String,
    pub day: u8,
    pub month: u8,
    pub year: i32,
    /// Raw sex code as entered. Only `m`, `M`, `f` and `F` validate.
    pub sex: char,
}

impl RamqRecord {
    pub fn new(
        number: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        day: u8,
        month: u8,
        year: i32,
        sex: char,
    ) -> Self {
        Self {
            number: number.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            day,
            month,
            year,
            sex,
        }
    }

    /// See [`check_ramq`].
    pub fn check(&self) -> ValidationResult<()> {
        check_ramq(self)
    }

    /// See [`expected_ramq_prefix`].
    pub fn expected_prefix(&self) -> ValidationResult<String> {
        expected_ramq_prefix(self)
    }

    /// Returns `true` if the number matches the identity. Never panics.
    pub fn validate(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "RAMQ number rejected");
                false
            }
        }
    }
}

/// Letters only: alphabetic characters that are not also numerals such as `Ⅻ`.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// Rebuilds the 12-character prefix a RAMQ number must start with, in uppercase.
///
/// The record's `number` is ignored.
///
/// # Errors
///
/// - [`ValidationError::NamePrefix`] if the first name does not start with a letter or the last
///   name does not start with three letters (this includes empty names).
/// - [`ValidationError::NameCharacter`] if either name holds anything but letters, spaces and
///   hyphens.
/// - [`ValidationError::BirthDay`], [`ValidationError::BirthMonth`],
///   [`ValidationError::BirthYear`] for an out-of-range birth date.
/// - [`ValidationError::Sex`] if the sex code is not `m`, `M`, `f` or `F`.
pub fn expected_ramq_prefix(record: &RamqRecord) -> ValidationResult<String> {
    let first_initial = record
        .first_name
        .chars()
        .next()
        .filter(|&c| is_letter(c))
        .ok_or(ValidationError::NamePrefix)?;

    let last_letters: String = record
        .last_name
        .chars()
        .take(RAMQ_LAST_NAME_LETTERS)
        .collect();
    if last_letters.chars().count() != RAMQ_LAST_NAME_LETTERS
        || !last_letters.chars().all(is_letter)
    {
        return Err(ValidationError::NamePrefix);
    }

    if let Some(bad) = record
        .first_name
        .chars()
        .chain(record.last_name.chars())
        .find(|&c| !(is_letter(c) || c == ' ' || c == '-'))
    {
        return Err(ValidationError::NameCharacter(bad));
    }

    if !(1..=31).contains(&record.day) {
        return Err(ValidationError::BirthDay(record.day));
    }
    if !(1..=12).contains(&record.month) {
        return Err(ValidationError::BirthMonth(record.month));
    }
    if record.year < MIN_BIRTH_YEAR {
        return Err(ValidationError::BirthYear(record.year));
    }

    let sex = Sex::try_from(record.sex)?;
    let encoded_month = record.month + sex.month_offset();

    let prefix = format!(
        "{last_letters}{first_initial} {:02}{:02} {:02}",
        record.year % 100,
        encoded_month,
        record.day
    );
    Ok(prefix.to_uppercase())
}

/// Checks a RAMQ number against the identity in `record`.
///
/// # Errors
///
/// - [`ValidationError::RamqLength`] if the number is not 14 characters long.
/// - Any error from [`expected_ramq_prefix`].
/// - [`ValidationError::RamqMismatch`] if the first 12 characters of the uppercased number
///   differ from the expected prefix.
pub fn check_ramq(record: &RamqRecord) -> ValidationResult<()> {
    let len = record.number.chars().count();
    if len != RAMQ_LEN {
        return Err(ValidationError::RamqLength(len));
    }

    let expected = expected_ramq_prefix(record)?;
    let found: String = record
        .number
        .to_uppercase()
        .chars()
        .take(RAMQ_PREFIX_LEN)
        .collect();

    if expected != found {
        return Err(ValidationError::RamqMismatch { expected, found });
    }

    Ok(())
}

/// Returns `true` if `number` is a RAMQ number consistent with the given identity.
///
/// Never panics; empty or too-short names yield `false`.
pub fn validate_ramq(
    number: &str,
    last_name: &str,
    first_name: &str,
    day: u8,
    month: u8,
    year: i32,
    sex: char,
) -> bool {
    RamqRecord::new(number, last_name, first_name, day, month, year, sex).validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcid_types::SexError;

    fn poitras() -> RamqRecord {
        RamqRecord::new("POIG 9758 0316", "Poitras", "Ginette", 3, 8, 1997, 'F')
    }

    #[test]
    fn accepts_female_sample() {
        assert!(validate_ramq(
            "POIG 9758 0316",
            "Poitras",
            "Ginette",
            3,
            8,
            1997,
            'F'
        ));
        assert_eq!(poitras().expected_prefix().expect("prefix"), "POIG 9758 03");
    }

    #[test]
    fn accepts_male_with_padded_month_and_day() {
        let record = RamqRecord::new("TREJ 8501 0512", "Tremblay", "Jean", 5, 1, 1985, 'm');
        assert_eq!(record.expected_prefix().expect("prefix"), "TREJ 8501 05");
        assert!(record.validate());
    }

    #[test]
    fn pads_year_of_century() {
        let record = RamqRecord::new("GAGM 0562 3101", "Gagnon", "Marie", 31, 12, 2005, 'f');
        assert_eq!(record.expected_prefix().expect("prefix"), "GAGM 0562 31");
        assert!(record.validate());
    }

    #[test]
    fn comparison_ignores_case() {
        for number in ["POIG 9758 0316", "poig 9758 0316", "PoIg 9758 0316"] {
            let mut record = poitras();
            record.number = number.to_string();
            assert!(record.validate(), "{number} should validate");
        }

        let record = RamqRecord::new("POIG 9758 0316", "poitras", "ginette", 3, 8, 1997, 'f');
        assert!(record.validate());
    }

    #[test]
    fn rejects_wrong_length() {
        let mut record = poitras();
        record.number = "POIG 9758 031".to_string();
        assert!(matches!(record.check(), Err(ValidationError::RamqLength(13))));

        record.number = String::new();
        assert!(!record.validate());
    }

    #[test]
    fn rejects_unknown_sex() {
        let mut record = poitras();
        record.sex = 'X';
        assert!(matches!(
            record.check(),
            Err(ValidationError::Sex(SexError::UnknownCode('X')))
        ));
        assert!(!validate_ramq("POIG 9758 0316", "Poitras", "Ginette", 3, 8, 1997, 'X'));
    }

    #[test]
    fn sex_changes_the_expected_month() {
        let mut record = poitras();
        record.sex = 'M';
        let err = record.check().expect_err("male encoding should not match");
        assert!(matches!(
            err,
            ValidationError::RamqMismatch { expected, .. } if expected == "POIG 9708 03"
        ));
    }

    #[test]
    fn rejects_digits_in_names() {
        assert!(!validate_ramq("POIG 9758 0316", "Poitras", "Gin3tte", 3, 8, 1997, 'F'));
        assert!(!validate_ramq("POIG 9758 0316", "Poi7ras", "Ginette", 3, 8, 1997, 'F'));

        let mut record = poitras();
        record.last_name = "Poitras2".to_string();
        assert!(matches!(record.check(), Err(ValidationError::NameCharacter('2'))));

        assert!(!validate_ramq("POIG 9758 0316", "Poitras", "GinetteⅫ", 3, 8, 1997, 'F'));
        assert!(!validate_ramq("POIG 9758 0316", "PoitrasⅣ", "Ginette", 3, 8, 1997, 'F'));

        let mut record = poitras();
        record.first_name = "GinetteⅫ".to_string();
        assert!(matches!(record.check(), Err(ValidationError::NameCharacter('Ⅻ'))));

        let mut record = poitras();
        record.last_name = "ⅣPoitras".to_string();
        assert!(matches!(record.check(), Err(ValidationError::NamePrefix)));
    }

    #[test]
    fn allows_hyphens_and_spaces_after_the_prefix() {
        let record = RamqRecord::new(
            "SAIM 9758 0316",
            "Saint-Pierre",
            "Marie Eve",
            3,
            8,
            1997,
            'F',
        );
        assert!(record.validate());
    }

    #[test]
    fn accented_letters_count_as_letters() {
        let record = RamqRecord::new("bélé 9001 0112", "Bélanger", "Éloïse", 1, 1, 1990, 'M');
        assert_eq!(record.expected_prefix().expect("prefix"), "BÉLÉ 9001 01");
        assert!(record.validate());
    }

    #[test]
    fn number_is_uppercased_before_taking_the_prefix() {
        // 'ß' uppercases to "SS", which shifts the 12-character window of the number.
        let record = RamqRecord::new("POIß 9758 0316", "Poitras", "ßabine", 3, 8, 1997, 'F');
        assert_eq!(record.expected_prefix().expect("prefix"), "POISS 9758 03");
        let err = record.check().expect_err("shifted window should not match");
        assert!(matches!(
            err,
            ValidationError::RamqMismatch { found, .. } if found == "POISS 9758 0"
        ));
    }

    #[test]
    fn rejects_punctuation_in_names() {
        let mut record = poitras();
        record.first_name = "Ginette.".to_string();
        assert!(matches!(record.check(), Err(ValidationError::NameCharacter('.'))));
    }

    #[test]
    fn empty_or_short_names_are_rejected_without_panicking() {
        let mut record = poitras();
        record.first_name = String::new();
        assert!(matches!(record.check(), Err(ValidationError::NamePrefix)));

        let mut record = poitras();
        record.last_name = String::new();
        assert!(matches!(record.check(), Err(ValidationError::NamePrefix)));

        let mut record = poitras();
        record.last_name = "Po".to_string();
        assert!(!record.validate());

        assert!(!validate_ramq("POIG 9758 0316", "", "", 3, 8, 1997, 'F'));
    }

    #[test]
    fn name_prefix_must_be_letters() {
        let mut record = poitras();
        record.last_name = "Po-itras".to_string();
        assert!(matches!(record.check(), Err(ValidationError::NamePrefix)));

        let mut record = poitras();
        record.first_name = " Ginette".to_string();
        assert!(matches!(record.check(), Err(ValidationError::NamePrefix)));
    }

    #[test]
    fn rejects_out_of_range_birth_dates() {
        let mut record = poitras();
        record.day = 0;
        assert!(matches!(record.check(), Err(ValidationError::BirthDay(0))));
        record.day = 32;
        assert!(matches!(record.check(), Err(ValidationError::BirthDay(32))));

        let mut record = poitras();
        record.month = 0;
        assert!(matches!(record.check(), Err(ValidationError::BirthMonth(0))));
        record.month = 13;
        assert!(matches!(record.check(), Err(ValidationError::BirthMonth(13))));

        let mut record = poitras();
        record.year = 1909;
        assert!(matches!(record.check(), Err(ValidationError::BirthYear(1909))));
    }

    #[test]
    fn earliest_birth_year_is_accepted() {
        let record = RamqRecord::new("POIG 1058 0316", "Poitras", "Ginette", 3, 8, 1910, 'F');
        assert!(record.validate());
    }

    #[test]
    fn trailing_digits_are_not_checked() {
        let mut record = poitras();
        record.number = "POIG 9758 03XY".to_string();
        assert!(record.validate());
    }

    #[test]
    fn is_deterministic() {
        let record = poitras();
        assert_eq!(record.validate(), record.validate());
    }
}
