//! Intake sheets: YAML batches of phone and RAMQ numbers captured at data entry.
//!
//! Responsibilities:
//! - Define a strict wire model for the on-disk YAML sheet
//! - Translate between the wire model and domain types
//! - Validate every entry and collect the outcomes into a serialisable report
//!
//! Only structural problems (unknown keys, a day that is not a number) fail parsing. Values
//! that are well-formed but invalid, such as sex `X` or day `40`, are reported as invalid
//! entries.
//!
//! Example sheet:
//!
//! ```yaml
//! phones:
//!   - "418 666-6666"
//! ramq:
//!   - number: POIG 9758 0316
//!     last_name: Poitras
//!     first_name: Ginette
//!     day: 3
//!     month: 8
//!     year: 1997
//!     sex: F
//! ```

use crate::phone::check_phone;
use crate::ramq::{check_ramq, RamqRecord};
use crate::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Public domain-level types
// ============================================================================

/// Entries of an intake sheet, in the order they were written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeData {
    pub phones: Vec<String>,
    pub ramq: Vec<RamqRecord>,
}

/// Result of validating one intake entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    /// The phone number or RAMQ number as written in the sheet.
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EntryOutcome {
    fn from_check(input: &str, result: ValidationResult<()>) -> Self {
        match result {
            Ok(()) => Self {
                input: input.to_owned(),
                valid: true,
                reason: None,
            },
            Err(err) => Self {
                input: input.to_owned(),
                valid: false,
                reason: Some(err.to_string()),
            },
        }
    }
}

/// Outcomes for a whole intake sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IntakeReport {
    pub phones: Vec<EntryOutcome>,
    pub ramq: Vec<EntryOutcome>,
}

impl IntakeReport {
    fn outcomes(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.phones.iter().chain(self.ramq.iter())
    }

    pub fn valid_count(&self) -> usize {
        self.outcomes().filter(|o| o.valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.outcomes().filter(|o| !o.valid).count()
    }

    /// `true` when every entry is valid, including for an empty sheet.
    pub fn all_valid(&self) -> bool {
        self.invalid_count() == 0
    }
}

/// Validates every entry of an intake sheet.
pub fn validate_intake(data: &IntakeData) -> IntakeReport {
    let phones = data
        .phones
        .iter()
        .map(|phone| EntryOutcome::from_check(phone, check_phone(phone)))
        .collect();

    let ramq = data
        .ramq
        .iter()
        .map(|record| EntryOutcome::from_check(&record.number, check_ramq(record)))
        .collect();

    let report = IntakeReport { phones, ramq };
    tracing::debug!(
        valid = report.valid_count(),
        invalid = report.invalid_count(),
        "intake sheet validated"
    );
    report
}

// ============================================================================
// Public IntakeSheet operations
// ============================================================================

/// Intake sheet file operations.
///
/// Zero-sized namespace for the parse/load/render associated functions.
pub struct IntakeSheet;

impl IntakeSheet {
    /// Parse an intake sheet from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface the path of the failing field (for example
    /// `ramq[0].day`) when the YAML does not match the wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Intake`] if the YAML is malformed, a field has the wrong
    /// type, a required field is missing or an unknown key is present.
    pub fn parse(yaml_text: &str) -> ValidationResult<IntakeData> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, IntakeWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>".to_string()
                } else {
                    path
                };
                return Err(ValidationError::Intake {
                    path,
                    message: source.to_string(),
                });
            }
        };

        Ok(wire_to_domain(wire))
    }

    /// Read and parse an intake sheet from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::FileRead`] if the file cannot be read, otherwise the errors of
    /// [`IntakeSheet::parse`].
    pub fn load(path: &Path) -> ValidationResult<IntakeData> {
        let text = std::fs::read_to_string(path).map_err(ValidationError::FileRead)?;
        Self::parse(&text)
    }

    /// Render an intake sheet as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::YamlSerialization`] if serialisation fails.
    pub fn render(data: &IntakeData) -> ValidationResult<String> {
        serde_yaml::to_string(&domain_to_wire(data)).map_err(ValidationError::YamlSerialization)
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct IntakeWire {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ramq: Vec<RamqEntryWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct RamqEntryWire {
    number: String,
    last_name: String,
    first_name: String,
    day: u8,
    month: u8,
    year: i32,
    sex: char,
}

fn wire_to_domain(wire: IntakeWire) -> IntakeData {
    IntakeData {
        phones: wire.phones,
        ramq: wire
            .ramq
            .into_iter()
            .map(|entry| RamqRecord {
                number: entry.number,
                last_name: entry.last_name,
                first_name: entry.first_name,
                day: entry.day,
                month: entry.month,
                year: entry.year,
                sex: entry.sex,
            })
            .collect(),
    }
}

fn domain_to_wire(data: &IntakeData) -> IntakeWire {
    IntakeWire {
        phones: data.phones.clone(),
        ramq: data
            .ramq
            .iter()
            .map(|record| RamqEntryWire {
                number: record.number.clone(),
                last_name: record.last_name.clone(),
                first_name: record.first_name.clone(),
                day: record.day,
                month: record.month,
                year: record.year,
                sex: record.sex,
            })
            .collect(),
    }
}
