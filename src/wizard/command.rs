//! Line Commands
//!
//! Grammar for driving a wizard session from a terminal, one command per line:
//!
//! ```text
//! next | back | reset | show | share | quit
//! location <free text>
//! region <urban|suburban|rural|...>
//! acres <number> | + | -
//! soil|access|utilities|zoning <number>
//! export [directory]
//! ```
//!
//! `share` and `export` only apply once the estimate is on the Result step.

use super::machine::WizardStateMachine;
use super::step::WizardStep;
use crate::parcel::{FactorKind, Region};
use std::path::PathBuf;
use thiserror::Error;

/// Parsed session command
#[derive(Debug, Clone, PartialEq)]
pub enum WizardCommand {
    Next,
    Back,
    Reset,
    Show,
    Share,
    Quit,
    Location(String),
    Region(Region),
    Acres(f64),
    IncrementAcres,
    DecrementAcres,
    Factor(FactorKind, f64),
    Export(Option<PathBuf>),
}

/// Why a line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingArgument(String),

    #[error("'{value}' is not a number for '{command}'")]
    InvalidNumber { command: String, value: String },
}

impl WizardCommand {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = head.to_ascii_lowercase();
        match command.as_str() {
            "" => Err(CommandError::Empty),
            "next" | "n" | "continue" => Ok(WizardCommand::Next),
            "back" | "b" => Ok(WizardCommand::Back),
            "reset" => Ok(WizardCommand::Reset),
            "show" => Ok(WizardCommand::Show),
            "share" => Ok(WizardCommand::Share),
            "quit" | "q" | "exit" => Ok(WizardCommand::Quit),
            "+" => Ok(WizardCommand::IncrementAcres),
            "-" => Ok(WizardCommand::DecrementAcres),
            "location" => Ok(WizardCommand::Location(rest.to_string())),
            "region" => {
                let label = required(&command, rest)?;
                Ok(WizardCommand::Region(Region::from_label(label)))
            }
            "acres" => Ok(WizardCommand::Acres(number(&command, rest)?)),
            "export" => Ok(WizardCommand::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            other => match FactorKind::from_key(other) {
                Some(kind) => Ok(WizardCommand::Factor(kind, number(&command, rest)?)),
                None => Err(CommandError::Unknown(head.to_string())),
            },
        }
    }
}

/// What applying a command did to the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    /// Step or draft changed
    Applied,
    /// Valid command, but not allowed in the current step
    Ignored,
    /// Handled by the session front end (`share`/`export` only on Result)
    Passthrough,
}

/// Apply navigation and edit commands to a wizard
pub fn apply_command(wizard: &mut WizardStateMachine, command: &WizardCommand) -> CommandEffect {
    let applied = match command {
        WizardCommand::Next => wizard.advance(),
        WizardCommand::Back => wizard.back(),
        WizardCommand::Reset => {
            wizard.reset();
            true
        }
        WizardCommand::Location(text) => wizard.set_location(text),
        WizardCommand::Region(region) => wizard.set_region(region.clone()),
        WizardCommand::Acres(acres) => wizard.set_acres(*acres).is_some(),
        WizardCommand::IncrementAcres => wizard.increment_acres().is_some(),
        WizardCommand::DecrementAcres => wizard.decrement_acres().is_some(),
        WizardCommand::Factor(kind, value) => wizard.set_factor(*kind, *value).is_some(),
        WizardCommand::Share | WizardCommand::Export(_) if wizard.step() != WizardStep::Result => {
            tracing::warn!("{:?} ignored outside the Result step", command);
            false
        }
        WizardCommand::Show | WizardCommand::Share | WizardCommand::Quit | WizardCommand::Export(_) => {
            return CommandEffect::Passthrough;
        }
    };

    if applied {
        CommandEffect::Applied
    } else {
        CommandEffect::Ignored
    }
}

fn required<'a>(command: &str, rest: &'a str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command.to_string()))
    } else {
        Ok(rest)
    }
}

fn number(command: &str, rest: &str) -> Result<f64, CommandError> {
    let raw = required(command, rest)?;
    raw.parse::<f64>().map_err(|_| CommandError::InvalidNumber {
        command: command.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(WizardCommand::parse("next"), Ok(WizardCommand::Next));
        assert_eq!(WizardCommand::parse("  BACK "), Ok(WizardCommand::Back));
        assert_eq!(WizardCommand::parse("+"), Ok(WizardCommand::IncrementAcres));
    }

    #[test]
    fn test_parse_with_arguments() {
        assert_eq!(
            WizardCommand::parse("location 123 Meadow Lane, Palo Alto"),
            Ok(WizardCommand::Location("123 Meadow Lane, Palo Alto".to_string()))
        );
        assert_eq!(
            WizardCommand::parse("region rural"),
            Ok(WizardCommand::Region(Region::Rural))
        );
        assert_eq!(
            WizardCommand::parse("region Rural"),
            Ok(WizardCommand::Region(Region::Other("Rural".to_string())))
        );
        assert_eq!(WizardCommand::parse("acres 2.5"), Ok(WizardCommand::Acres(2.5)));
        assert_eq!(
            WizardCommand::parse("zoning 1.25"),
            Ok(WizardCommand::Factor(FactorKind::Zoning, 1.25))
        );
        assert_eq!(WizardCommand::parse("export"), Ok(WizardCommand::Export(None)));
        assert_eq!(
            WizardCommand::parse("export /tmp/out"),
            Ok(WizardCommand::Export(Some(PathBuf::from("/tmp/out"))))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(WizardCommand::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            WizardCommand::parse("fly"),
            Err(CommandError::Unknown("fly".to_string()))
        );
        assert_eq!(
            WizardCommand::parse("acres"),
            Err(CommandError::MissingArgument("acres".to_string()))
        );
        assert!(matches!(
            WizardCommand::parse("soil lots"),
            Err(CommandError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_apply_command() {
        let mut wizard = WizardStateMachine::new();
        assert_eq!(
            apply_command(&mut wizard, &WizardCommand::Acres(3.0)),
            CommandEffect::Ignored
        );
        assert_eq!(apply_command(&mut wizard, &WizardCommand::Next), CommandEffect::Applied);
        assert_eq!(
            apply_command(&mut wizard, &WizardCommand::Acres(3.0)),
            CommandEffect::Applied
        );
        assert_eq!(apply_command(&mut wizard, &WizardCommand::Show), CommandEffect::Passthrough);
        assert_eq!(apply_command(&mut wizard, &WizardCommand::Back), CommandEffect::Applied);
        assert_eq!(apply_command(&mut wizard, &WizardCommand::Back), CommandEffect::Ignored);
    }

    #[test]
    fn test_share_and_export_only_on_result() {
        let mut wizard = WizardStateMachine::new();
        let export = WizardCommand::Export(None);

        for _ in 0..3 {
            assert_eq!(apply_command(&mut wizard, &WizardCommand::Share), CommandEffect::Ignored);
            assert_eq!(apply_command(&mut wizard, &export), CommandEffect::Ignored);
            apply_command(&mut wizard, &WizardCommand::Next);
        }

        assert_eq!(wizard.step(), WizardStep::Result);
        assert_eq!(apply_command(&mut wizard, &WizardCommand::Share), CommandEffect::Passthrough);
        assert_eq!(apply_command(&mut wizard, &export), CommandEffect::Passthrough);
        assert_eq!(apply_command(&mut wizard, &WizardCommand::Show), CommandEffect::Passthrough);
    }
}
