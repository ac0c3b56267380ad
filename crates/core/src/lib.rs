//! # qcid core
//!
//! Validation of Canadian phone numbers and Quebec health-insurance (RAMQ) numbers.
//!
//! The two contract functions are pure predicates:
//! - [`validate_phone`] checks `"AAA BBB-CCCC"` against the known Canadian area codes
//! - [`validate_ramq`] checks that a RAMQ number encodes the holder's name, birth date and sex
//!
//! Each has a `check_*` counterpart returning the [`ValidationError`] for the first rule that
//! fails. [`intake`] validates YAML batches of both kinds of entry.
//!
//! **No I/O concerns** beyond reading an intake sheet on request: argument parsing, logging
//! setup and environment handling belong to the `qcid` CLI and the `qcid-run` runner.

pub mod config;
pub mod constants;
mod error;
pub mod intake;
pub mod phone;
pub mod ramq;

pub use config::RunConfig;
pub use error::{ValidationError, ValidationResult};
pub use intake::{validate_intake, EntryOutcome, IntakeData, IntakeReport, IntakeSheet};
pub use phone::{check_phone, is_known_area_code, known_area_codes, validate_phone};
pub use qcid_types::{Sex, SexError};
pub use ramq::{check_ramq, expected_ramq_prefix, validate_ramq, RamqRecord};
