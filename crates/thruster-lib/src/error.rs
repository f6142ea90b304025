use thiserror::Error;

use crate::device::ThrusterFamily;

/// Convenient result alias for the thruster library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a configuration field is missing, malformed or out of range.
    #[error("invalid configuration{}: {field}: {message}", format_family(.family))]
    Configuration {
        family: Option<ThrusterFamily>,
        field: String,
        message: String,
    },

    /// Raised when an operating point lies outside the domain of a model equation.
    #[error("{family} operating point outside model domain: {quantity} = {value}")]
    PhysicsDomain {
        family: ThrusterFamily,
        quantity: &'static str,
        value: f64,
    },

    /// Raised when a configured gas is absent from the gas table.
    #[error("unknown gas: {name}{}", format_suggestions(.suggestions))]
    UnknownGas {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when duplicate gas names are encountered.
    #[error("duplicate gas name encountered: {name}")]
    DuplicateGas { name: String },

    /// Raised when gas property data fails validation.
    #[error("invalid gas data: {message}")]
    GasData { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for CSV errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Build a [`Error::Configuration`] for a field of the given family block.
    pub fn configuration(
        family: Option<ThrusterFamily>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::Configuration {
            family,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the error stems from a configuration defect rather than I/O or physics.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Configuration { .. } | Error::UnknownGas { .. } | Error::DuplicateGas { .. }
        )
    }
}

fn format_family(family: &Option<ThrusterFamily>) -> String {
    match family {
        Some(family) => format!(" for {family}"),
        None => String::new(),
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
