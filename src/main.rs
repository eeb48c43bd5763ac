//! segcheck - TCP Segment Checksum Verifier
//!
//! Batch CLI over capture directories: one verdict line per unit.
//! Usage: segcheck [OPTIONS] [DIR]

use std::process::ExitCode;

use segcheck::loader::{self, CaptureDir, UnitOutcome};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let mut count: Option<usize> = None;
    let mut quiet = false;
    #[cfg(feature = "json")]
    let mut json = false;

    // Parse leading options, positional DIR comes after
    let mut i = 1;
    while i < args.len() && args[i].starts_with('-') {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            "-V" | "--version" => {
                println!("segcheck {}", env!("CARGO_PKG_VERSION"));
                return ExitCode::SUCCESS;
            }
            "-q" | "--quiet" => {
                quiet = true;
            }
            "-c" | "--count" => {
                i += 1;
                count = match args.get(i).and_then(|value| value.parse::<usize>().ok()) {
                    Some(value) => Some(value),
                    None => {
                        eprintln!("--count needs a non-negative numeric argument");
                        return ExitCode::from(1);
                    }
                };
            }
            "--json" => {
                #[cfg(feature = "json")]
                {
                    json = true;
                }
                #[cfg(not(feature = "json"))]
                {
                    eprintln!("This build carries no JSON support (rebuild with --features json)");
                    return ExitCode::from(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_usage();
                return ExitCode::from(1);
            }
        }
        i += 1;
    }

    init_logging(quiet);

    let dir = match args.len().saturating_sub(i) {
        0 => "files",
        1 => args[i].as_str(),
        _ => {
            eprintln!("Unexpected argument: {}", args[i + 1]);
            print_usage();
            return ExitCode::from(1);
        }
    };

    let capture = CaptureDir::new(dir);
    if !capture.root().is_dir() {
        eprintln!("Capture directory not found: {}", dir);
        return ExitCode::from(1);
    }

    log::info!("segcheck v{} validating {}", segcheck::VERSION, capture.root().display());

    let outcomes = loader::run_units(&capture, count);
    if outcomes.is_empty() {
        log::warn!("No capture units under {}", capture.root().display());
    }

    #[cfg(feature = "json")]
    if json {
        return match render_json(&outcomes) {
            Ok(()) => ExitCode::from(exit_code(&outcomes)),
            Err(err) => {
                eprintln!("Failed to render JSON report: {}", err);
                ExitCode::from(1)
            }
        };
    }

    for unit in &outcomes {
        match &unit.outcome {
            Ok(true) => println!("PASS"),
            Ok(false) => println!("FAIL"),
            Err(err) => println!("ERROR: {}", err),
        }
    }
    ExitCode::from(exit_code(&outcomes))
}

/// Exit 0 when every unit produced a verdict. PASS and FAIL both count,
/// a unit that could not be checked does not.
fn exit_code(outcomes: &[UnitOutcome]) -> u8 {
    if outcomes.iter().any(|unit| unit.outcome.is_err()) {
        1
    } else {
        0
    }
}

fn init_logging(quiet: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if quiet {
        builder.filter_level(log::LevelFilter::Off);
    }
    builder.init();
}

#[cfg(feature = "json")]
#[derive(serde::Serialize)]
struct UnitReport {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[cfg(feature = "json")]
fn render_json(outcomes: &[UnitOutcome]) -> serde_json::Result<()> {
    let report: Vec<UnitReport> = outcomes
        .iter()
        .map(|unit| match &unit.outcome {
            Ok(true) => UnitReport {
                index: unit.index,
                verdict: Some("pass"),
                error: None,
            },
            Ok(false) => UnitReport {
                index: unit.index,
                verdict: Some("fail"),
                error: None,
            },
            Err(err) => UnitReport {
                index: unit.index,
                verdict: None,
                error: Some(err.to_string()),
            },
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_usage() {
    println!("segcheck - TCP Segment Checksum Verifier");
    println!();
    println!("USAGE:");
    println!("    segcheck [OPTIONS] [DIR]");
    println!();
    println!("ARGS:");
    println!("    DIR    Capture directory holding tcp_addrs_<n>.txt / tcp_data_<n>.dat");
    println!("           pairs (default: files)");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help         Show this help message");
    println!("    -V, --version      Show version information");
    println!("    -c, --count <N>    Validate exactly units 0..N instead of scanning");
    println!("    -q, --quiet        Suppress log output (verdict lines still print)");
    println!("    --json             Emit a JSON report instead of verdict lines");
    println!();
    println!("OUTPUT:");
    println!("    One line per unit, in index order: PASS, FAIL, or ERROR: <reason>.");
    println!("    Exit code 0 when every unit produced a verdict, 1 otherwise.");
    println!();
    println!("EXAMPLES:");
    println!("    segcheck");
    println!("    segcheck captures/");
    println!("    segcheck -c 10 captures/");
    println!("    RUST_LOG=debug segcheck captures/");
}

#[cfg(test)]
mod tests {
    use super::*;
    use segcheck::loader::LoaderError;

    fn unit(index: usize, outcome: Result<bool, LoaderError>) -> UnitOutcome {
        UnitOutcome { index, outcome }
    }

    #[test]
    fn test_exit_code_zero_when_every_unit_has_a_verdict() {
        assert_eq!(exit_code(&[]), 0);
        assert_eq!(exit_code(&[unit(0, Ok(true))]), 0);
        // A FAIL verdict is a successful validation, not an error.
        assert_eq!(exit_code(&[unit(0, Ok(true)), unit(1, Ok(false))]), 0);
    }

    #[test]
    fn test_exit_code_one_when_any_unit_cannot_be_checked() {
        let outcomes = [
            unit(0, Ok(true)),
            unit(1, Err(LoaderError::AddressLine("localhost".into()))),
            unit(2, Ok(false)),
        ];
        assert_eq!(exit_code(&outcomes), 1);
    }
}
