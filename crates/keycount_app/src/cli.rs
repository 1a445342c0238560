//! Command-line surface: flag parsing and validation, kept apart from
//! process termination so the rules stay testable.

use std::path::PathBuf;

use thiserror::Error;

pub const CMD_MODE: &str = "cmdmode";
pub const FILE_MODE: &str = "filemode";

/// The validated run configuration. File mode always carries its path, so a
/// missing path cannot survive past parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Command,
    File(PathBuf),
}

impl Mode {
    pub fn flag_value(&self) -> &'static str {
        match self {
            Mode::Command => CMD_MODE,
            Mode::File(_) => FILE_MODE,
        }
    }
}

/// Every way an invocation can be rejected. All of these are fatal: the
/// caller prints the message, prints help, and exits with failure status.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("unexpected number of arguments")]
    NoArguments,
    #[error("unrecognized option {0}")]
    UnknownOption(String),
    #[error("missing value for {0} parameter")]
    MissingValue(&'static str),
    #[error("unexpected value for -m parameter")]
    BadMode(String),
    #[error("mode not provided - please provide -m parameter")]
    MissingMode,
    #[error("filepath not provided - please provide -f parameter")]
    MissingFilepath,
    #[error("file does not exist - check -f parameter")]
    NoSuchFile(PathBuf),
}

enum ModeFlag {
    Command,
    File,
}

/// Parses the arguments after the program name.
///
/// `-f` is recorded but ignored entirely in command mode, existence check
/// included; the check runs only once file mode is selected.
pub fn parse<I>(args: I) -> Result<Mode, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    if args.peek().is_none() {
        return Err(UsageError::NoArguments);
    }

    let mut mode: Option<ModeFlag> = None;
    let mut filepath: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-m" => {
                let value = args.next().ok_or(UsageError::MissingValue("-m"))?;
                mode = Some(match value.as_str() {
                    CMD_MODE => ModeFlag::Command,
                    FILE_MODE => ModeFlag::File,
                    _ => return Err(UsageError::BadMode(value)),
                });
            }
            "-f" => {
                let value = args.next().ok_or(UsageError::MissingValue("-f"))?;
                filepath = Some(PathBuf::from(value));
            }
            other => return Err(UsageError::UnknownOption(other.to_string())),
        }
    }

    match mode {
        Some(ModeFlag::Command) => Ok(Mode::Command),
        Some(ModeFlag::File) => {
            let path = filepath.ok_or(UsageError::MissingFilepath)?;
            if !path.exists() {
                return Err(UsageError::NoSuchFile(path));
            }
            Ok(Mode::File(path))
        }
        None => Err(UsageError::MissingMode),
    }
}

/// Help text, printed to stdout. Printing help always precedes a failure
/// exit; there is no help-and-continue path.
pub fn help_text(program: &str) -> String {
    format!(
        "Help:\n    {program}\n    Options:\n      -m [{CMD_MODE} | {FILE_MODE}]\n      -f [filepath (only for filemode)]\n"
    )
}
