use thiserror::Error;

/// Convenient result alias for the airnav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when inserting a point whose identity key is already taken.
    #[error("point {name} already exists")]
    DuplicateNode { name: String },

    /// Raised when inserting a segment whose ordered endpoint pair already exists.
    #[error("segment {origin} -> {destination} already exists")]
    DuplicateSegment { origin: String, destination: String },

    /// Raised when an identity key does not resolve to a point in the store.
    #[error("unknown point: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no directed segment matches the given endpoint pair.
    #[error("no segment from {origin} to {destination}")]
    UnknownSegment { origin: String, destination: String },

    /// Raised when a caller supplies a negative segment cost.
    #[error("segment cost must be non-negative, got {cost}")]
    NegativeCost { cost: f64 },

    /// Raised when a coordinate is NaN or infinite.
    #[error("coordinate is not a finite number: {value}")]
    InvalidCoordinate { value: f64 },

    /// Raised when the search space was exhausted without reaching the goal.
    /// Distinct from [`Error::UnknownNode`]: both endpoints exist.
    #[error("no route found between {start} and {goal}")]
    NoRoute { start: String, goal: String },

    /// Raised when a computed route plan lacks any points.
    #[error("route plan was empty")]
    EmptyRoute,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::UnknownNode`] without suggestions.
    pub fn unknown_node(name: impl Into<String>) -> Self {
        Error::UnknownNode {
            name: name.into(),
            suggestions: Vec::new(),
        }
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
