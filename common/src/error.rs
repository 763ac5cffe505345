use thiserror::Error;

use crate::wizard::sequence::RequestKind;

/// Why a request to the document service did not produce a usable result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The service answered `success: false`.
    #[error("{message}")]
    Rejected { kind: RequestKind, message: String },
    /// The request never got a response.
    #[error("network error: {0}")]
    Transport(String),
    /// A response arrived but its body was not what the endpoint promises.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl WizardError {
    /// Builds a rejection, substituting the operation's generic message when
    /// the service did not explain itself.
    pub fn rejected(kind: RequestKind, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| kind.fallback_message().to_string());
        WizardError::Rejected { kind, message }
    }

    /// Text shown to the user in the error banner.
    pub fn banner_message(&self, kind: RequestKind) -> String {
        match self {
            WizardError::Rejected { message, .. } => message.clone(),
            WizardError::Transport(detail) | WizardError::Decode(detail) => {
                format!("{}: {}", kind.fallback_message(), detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_server_message_falls_back() {
        let err = WizardError::rejected(RequestKind::Preview, Some("  ".into()));
        assert_eq!(err.banner_message(RequestKind::Preview), "Error generating preview");
    }

    #[test]
    fn transport_failures_are_prefixed_with_the_operation() {
        let err = WizardError::Transport("connection refused".into());
        assert_eq!(
            err.banner_message(RequestKind::SpreadsheetUpload),
            "Error uploading Excel file: connection refused"
        );
    }
}
