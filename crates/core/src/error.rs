/// Reasons a phone number, RAMQ number or intake sheet is rejected.
///
/// The boolean contract functions ([`crate::validate_phone`], [`crate::validate_ramq`]) collapse
/// all of these to `false`; the `check_*` functions surface the first failing rule.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("phone number must be 12 characters, got {0}")]
    PhoneLength(usize),
    #[error("unknown area code '{0}'")]
    UnknownAreaCode(String),
    #[error("local number position {position}: expected {expected}, found '{found}'")]
    PhoneLocalFormat {
        position: usize,
        expected: &'static str,
        found: char,
    },

    #[error("RAMQ number must be 14 characters, got {0}")]
    RamqLength(usize),
    #[error("first name must start with a letter and last name with three letters")]
    NamePrefix,
    #[error("names may only contain letters, spaces and hyphens, found '{0}'")]
    NameCharacter(char),
    #[error("birth day {0} is outside 1..=31")]
    BirthDay(u8),
    #[error("birth month {0} is outside 1..=12")]
    BirthMonth(u8),
    #[error("birth year {0} is before 1910")]
    BirthYear(i32),
    #[error("sex: {0}")]
    Sex(#[from] qcid_types::SexError),
    #[error("RAMQ number does not match: expected prefix '{expected}', found '{found}'")]
    RamqMismatch { expected: String, found: String },

    #[error("failed to read intake sheet: {0}")]
    FileRead(std::io::Error),
    #[error("intake sheet schema mismatch at {path}: {message}")]
    Intake { path: String, message: String },
    #[error("failed to serialize intake sheet: {0}")]
    YamlSerialization(serde_yaml::Error),
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
