//! Subcommands and their pure implementations.
//!
//! Each command produces a `CommandResult`; printing and exit status are left
//! to `CliConfig::run` so the logic can be tested without a terminal.

use std::cmp::Ordering;

use anyhow::Context;
use clap::Subcommand;
use nodeid::{NodeId, VALID_LENGTHS};
use tracing::{debug, warn};

/// Operations on hex-encoded node ids.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Report whether each id is valid
    Check {
        /// Hex-encoded ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Compare two ids byte-wise
    Compare {
        /// Left-hand id
        a: String,
        /// Right-hand id
        b: String,
    },
    /// Print the valid ids in ascending order
    Sort {
        /// Hex-encoded ids
        ids: Vec<String>,
    },
    /// Print the permitted id lengths in bytes
    Lengths,
}

/// Output of a command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Lines to print on stdout.
    pub lines: Vec<String>,
    /// Number of inputs that failed validation.
    pub invalid: usize,
}

impl Command {
    /// Run the command.
    pub fn execute(&self) -> anyhow::Result<CommandResult> {
        match self {
            Command::Check { ids } => Ok(check(ids)),
            Command::Compare { a, b } => compare(a, b),
            Command::Sort { ids } => Ok(sort(ids)),
            Command::Lengths => Ok(CommandResult {
                lines: VALID_LENGTHS.iter().map(|len| len.to_string()).collect(),
                invalid: 0,
            }),
        }
    }
}

fn check(ids: &[String]) -> CommandResult {
    let mut result = CommandResult::default();
    for raw in ids {
        match raw.parse::<NodeId>() {
            Ok(id) => {
                debug!(len = id.len(), "valid id");
                result.lines.push(format!("{}: ok ({} bytes)", raw, id.len()));
            }
            Err(err) => {
                result.invalid += 1;
                result.lines.push(format!("{}: {}", raw, err));
            }
        }
    }
    result
}

fn compare(a: &str, b: &str) -> anyhow::Result<CommandResult> {
    let left: NodeId = a.parse().with_context(|| format!("parsing {}", a))?;
    let right: NodeId = b.parse().with_context(|| format!("parsing {}", b))?;
    let symbol = match left.cmp(&right) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    Ok(CommandResult {
        lines: vec![symbol.to_string()],
        invalid: 0,
    })
}

fn sort(ids: &[String]) -> CommandResult {
    let mut result = CommandResult::default();
    let mut parsed = Vec::with_capacity(ids.len());
    for raw in ids {
        match raw.parse::<NodeId>() {
            Ok(id) => parsed.push(id),
            Err(err) => {
                warn!(input = %raw, error = %err, "skipping invalid id");
                result.invalid += 1;
            }
        }
    }
    parsed.sort();
    result.lines = parsed.iter().map(NodeId::to_string).collect();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_of(byte: u8, len: usize) -> String {
        format!("{:02x}", byte).repeat(len)
    }

    #[test]
    fn test_check_counts_invalid() {
        let result = Command::Check {
            ids: vec![hex_of(0, 20), "626172".to_string(), "xyz".to_string()],
        }
        .execute()
        .unwrap();
        assert_eq!(result.invalid, 2);
        assert_eq!(result.lines.len(), 3);
        assert!(result.lines[0].ends_with("ok (20 bytes)"));
        assert!(result.lines[1].contains("invalid length 3"));
    }

    #[test]
    fn test_compare_symbols() {
        let lo = hex_of(5, 32);
        let hi = hex_of(6, 32);
        let run = |a: &str, b: &str| {
            Command::Compare {
                a: a.to_string(),
                b: b.to_string(),
            }
            .execute()
            .unwrap()
            .lines
        };
        assert_eq!(run(&lo, &hi), vec!["<"]);
        assert_eq!(run(&hi, &lo), vec![">"]);
        assert_eq!(run(&lo, &lo), vec!["="]);
    }

    #[test]
    fn test_compare_rejects_invalid() {
        let result = Command::Compare {
            a: hex_of(0, 19),
            b: hex_of(0, 20),
        }
        .execute();
        assert!(result.is_err());
    }

    #[test]
    fn test_sort_orders_and_skips() {
        let result = Command::Sort {
            ids: vec![hex_of(9, 20), "00".to_string(), hex_of(1, 32)],
        }
        .execute()
        .unwrap();
        assert_eq!(result.lines, vec![hex_of(1, 32), hex_of(9, 20)]);
        assert_eq!(result.invalid, 1);
    }

    #[test]
    fn test_lengths() {
        let result = Command::Lengths.execute().unwrap();
        assert_eq!(result.lines, vec!["20", "32"]);
    }
}
