use crate::domain::model::Pose;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoverError {
    #[error("Invalid command '{command}' (expected L, R, or M)")]
    InvalidCommand { command: char },

    #[error("Rover #{rover} invalid instructions (expected only L, R, M): \"{instructions}\"")]
    InvalidInstructions { rover: usize, instructions: String },

    #[error(
        "Rover #{rover} instruction {instruction} out of bounds from {}",
        .pose.bracketed()
    )]
    OutOfBounds {
        rover: usize,
        instruction: usize,
        pose: Pose,
    },

    #[error("{message}")]
    ParseError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Mission text could not be understood.
    Input,
    /// A rover left the plateau under the strict policy.
    Execution,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RoverError {
    pub fn parse(message: impl Into<String>) -> Self {
        RoverError::ParseError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        RoverError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RoverError::InvalidCommand { .. }
            | RoverError::InvalidInstructions { .. }
            | RoverError::ParseError { .. } => ErrorCategory::Input,
            RoverError::OutOfBounds { .. } => ErrorCategory::Execution,
            RoverError::ConfigError { .. } | RoverError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RoverError::IoError(_)
            | RoverError::SerializationError(_)
            | RoverError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Execution => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code: configuration problems count as usage errors.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            _ => 1,
        }
    }

    /// Single stderr line shown to the operator.
    pub fn user_friendly_message(&self) -> String {
        let prefix = match self.category() {
            ErrorCategory::Input => "Parse Error",
            ErrorCategory::Execution => "Execution Error",
            ErrorCategory::Configuration => "Config Error",
            ErrorCategory::System => "Input Error",
        };
        format!("{}: {}", prefix, self)
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RoverError::InvalidCommand { .. } | RoverError::InvalidInstructions { .. } => {
                "Instruction lines may only contain L, R and M"
            }
            RoverError::OutOfBounds { .. } => {
                "Fix the instructions or rerun with --ignore-oob, --stop-on-oob or --wrap"
            }
            RoverError::ParseError { .. } => {
                "Expect a plateau line \"X Y\" followed by pairs of \"X Y HEADING\" and instruction lines"
            }
            RoverError::ConfigError { .. } | RoverError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line options"
            }
            RoverError::IoError(_) => "Check that the input file exists and is readable",
            RoverError::SerializationError(_) | RoverError::CsvError(_) => {
                "Try another --format or check that stdout is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RoverError>;
