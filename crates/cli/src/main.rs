use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use qcid_core::{
    check_phone, check_ramq, config::LOG_ENV, expected_ramq_prefix, known_area_codes,
    validate_intake, IntakeSheet, RamqRecord, RunConfig, Sex, ValidationResult,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qcid")]
#[command(about = "Canadian phone and Quebec RAMQ number validation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a phone number written as "AAA BBB-CCCC"
    Phone {
        /// Phone number (quote it: "418 666-6666")
        number: String,
    },
    /// Validate a RAMQ number against its holder
    Ramq {
        /// RAMQ number (quote it: "POIG 9758 0316")
        number: String,
        /// Last name
        last_name: String,
        /// First name
        first_name: String,
        /// Date of birth (YYYY-MM-DD)
        birth_date: String,
        /// Sex (M or F)
        sex: Sex,
        /// Print the expected 12-character prefix instead of validating
        #[arg(long)]
        prefix: bool,
    },
    /// Validate every entry of a YAML intake sheet
    Intake {
        /// Path to the intake sheet
        file: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the known area codes
    AreaCodes,
}

fn main() -> ExitCode {
    let config = RunConfig::from_env_values(None, std::env::var(LOG_ENV).ok());
    let filter = match tracing_subscriber::EnvFilter::try_new(config.log_filter()) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Error: invalid {} value: {}", LOG_ENV, e);
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Phone { number }) => report(check_phone(&number)),
        Some(Commands::Ramq {
            number,
            last_name,
            first_name,
            birth_date,
            sex,
            prefix,
        }) => {
            let record = match ramq_record(number, last_name, first_name, &birth_date, sex) {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            if prefix {
                match expected_ramq_prefix(&record) {
                    Ok(expected) => {
                        println!("{}", expected);
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        eprintln!("Error computing RAMQ prefix: {}", e);
                        ExitCode::FAILURE
                    }
                }
            } else {
                report(check_ramq(&record))
            }
        }
        Some(Commands::Intake { file, json }) => {
            let data = match IntakeSheet::load(&file) {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("Error loading intake sheet {}: {}", file.display(), e);
                    return ExitCode::FAILURE;
                }
            };
            let report = validate_intake(&data);
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Error serialising report: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                for outcome in report.phones.iter().chain(report.ramq.iter()) {
                    match &outcome.reason {
                        None => println!("{}: valid", outcome.input),
                        Some(reason) => println!("{}: invalid: {}", outcome.input, reason),
                    }
                }
                println!(
                    "{} valid, {} invalid",
                    report.valid_count(),
                    report.invalid_count()
                );
            }
            if report.all_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Some(Commands::AreaCodes) => {
            for code in known_area_codes() {
                println!("{}", code);
            }
            ExitCode::SUCCESS
        }
        None => {
            println!("Use 'qcid --help' for commands");
            ExitCode::SUCCESS
        }
    }
}

fn report(result: ValidationResult<()>) -> ExitCode {
    match result {
        Ok(()) => {
            println!("valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Build a record from CLI arguments, splitting the birth date into its parts.
fn ramq_record(
    number: String,
    last_name: String,
    first_name: String,
    birth_date: &str,
    sex: Sex,
) -> Result<RamqRecord, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d")?;
    // chrono guarantees day 1..=31 and month 1..=12, so the casts are lossless.
    Ok(RamqRecord::new(
        number,
        last_name,
        first_name,
        date.day() as u8,
        date.month() as u8,
        date.year(),
        sex.code(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ramq_arguments() {
        let cli = Cli::try_parse_from([
            "qcid",
            "ramq",
            "POIG 9758 0316",
            "Poitras",
            "Ginette",
            "1997-08-03",
            "F",
        ])
        .expect("parse args");
        match cli.command {
            Some(Commands::Ramq { sex, prefix, .. }) => {
                assert_eq!(sex, Sex::Female);
                assert!(!prefix);
            }
            _ => panic!("expected ramq command"),
        }
    }

    #[test]
    fn birth_date_is_split_into_parts() {
        let record = ramq_record(
            "POIG 9758 0316".into(),
            "Poitras".into(),
            "Ginette".into(),
            "1997-08-03",
            Sex::Female,
        )
        .expect("valid date");
        assert_eq!((record.day, record.month, record.year), (3, 8, 1997));
        assert!(record.validate());
    }

    #[test]
    fn rejects_malformed_birth_date() {
        let result = ramq_record(
            "POIG 9758 0316".into(),
            "Poitras".into(),
            "Ginette".into(),
            "03/08/1997",
            Sex::Female,
        );
        assert!(result.is_err());
    }

    #[test]
    fn sex_must_be_a_known_single_character() {
        let result = Cli::try_parse_from([
            "qcid",
            "ramq",
            "POIG 9758 0316",
            "Poitras",
            "Ginette",
            "1997-08-03",
            "Female",
        ]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "qcid",
            "ramq",
            "POIG 9758 0316",
            "Poitras",
            "Ginette",
            "1997-08-03",
            "X",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn lowercase_sex_is_accepted() {
        let cli = Cli::try_parse_from([
            "qcid",
            "ramq",
            "POIG 9758 0316",
            "Poitras",
            "Ginette",
            "1997-08-03",
            "f",
        ])
        .expect("parse args");
        assert!(matches!(
            cli.command,
            Some(Commands::Ramq { sex: Sex::Female, .. })
        ));
    }
}
