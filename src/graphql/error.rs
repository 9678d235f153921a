use thiserror::Error;

/// Transport-level failure: the request did not produce usable data
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("{}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("Response is missing field `{0}`")]
    MissingField(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_messages_are_joined() {
        let err = TransportError::GraphQl(vec!["Project not found".into(), "Bad id".into()]);
        assert_eq!(err.to_string(), "Project not found; Bad id");
        assert_eq!(TransportError::Status(502).to_string(), "Server responded with status 502");
    }
}
