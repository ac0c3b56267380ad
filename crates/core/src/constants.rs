//! Fixed values used by the validators.

/// Known Canadian area codes, sorted so membership is a binary search.
pub const AREA_CODES: [&str; 30] = [
    "204", "236", "250", "289", "306", "403", "416", "418", "438", "450", "506", "514", "519",
    "579", "581", "604", "613", "647", "705", "709", "778", "780", "800", "807", "819", "867",
    "873", "902", "905", "966",
];

/// Length of `"AAA BBB-CCCC"`.
pub const PHONE_LEN: usize = 12;

/// Length of the area code at the start of a phone number.
pub const AREA_CODE_LEN: usize = 3;

/// Length of `"AAAA YYMM DDNN"`.
pub const RAMQ_LEN: usize = 14;

/// Characters of a RAMQ number derived from the holder's name, birth date and sex.
pub const RAMQ_PREFIX_LEN: usize = 12;

/// Letters of the last name copied into a RAMQ number.
pub const RAMQ_LAST_NAME_LETTERS: usize = 3;

/// Earliest birth year accepted for a RAMQ number.
pub const MIN_BIRTH_YEAR: i32 = 1910;

/// Log filter used when `QCID_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "qcid=info";
