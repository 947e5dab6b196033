//! Error types for Velcross Chronicles

use thiserror::Error;

/// Main error type for the fallible operations in the core crate
#[derive(Error, Debug)]
pub enum ChronicleError {
    /// Error while exporting the catalogue
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A data anomaly found by [`crate::audit`].
///
/// None of these stop the site from rendering. They only degrade how a card
/// or chart looks, so the binary reports them as warnings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogueIssue {
    /// A stat value larger than its own maximum
    #[error("{character}: stat '{subject}' is {value}, above its full mark of {full_mark}")]
    StatAboveFullMark {
        character: String,
        subject: String,
        value: f64,
        full_mark: f64,
    },

    /// Stats of one character plotted against different maxima
    #[error("{character}: stats use mixed full marks {marks:?}")]
    MixedFullMarks { character: String, marks: Vec<f64> },

    /// Character with nothing to show in the trait chips
    #[error("{character}: trait list is empty")]
    NoTraits { character: String },

    /// Two records sharing one id
    #[error("duplicate character id '{0}'")]
    DuplicateId(String),
}

/// Result type alias for core operations
pub type ChronicleResult<T> = Result<T, ChronicleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_messages_name_the_character() {
        let issue = CatalogueIssue::StatAboveFullMark {
            character: "Aria".to_string(),
            subject: "Wit".to_string(),
            value: 12.0,
            full_mark: 10.0,
        };
        assert_eq!(
            issue.to_string(),
            "Aria: stat 'Wit' is 12, above its full mark of 10"
        );
        assert_eq!(
            CatalogueIssue::NoTraits { character: "Aria".to_string() }.to_string(),
            "Aria: trait list is empty"
        );
    }

    #[test]
    fn json_failures_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ChronicleError = json_err.into();
        assert!(err.to_string().starts_with("Serialization error: "));
    }
}
