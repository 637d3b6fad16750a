use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the client can surface
/// Nothing is retried or swallowed; callers decide what to do
#[derive(Debug, Error)]
pub enum Error
{   /// Invalid builder input or missing user content at build time
    #[error("Invalid request: {0}")]
    BuildValidation(String)
  , /// No API key stored and none passed explicitly
    #[error(
      "API key is not set: call set_api_key() or pass a key explicitly"
    )]
    MissingCredential
  , /// Non-200 reply or a transport failure
    #[error("Generation failed: {detail}")]
    Generation
    {   status: Option<u16>
      , detail: String
      , #[source]
        source: Option<reqwest::Error>
    }
  , /// Reply body absent, blank, or not a JSON object
    #[error("Failed to parse response: {0}")]
    ResponseParse(String)
  , /// Field missing from an otherwise valid response
    #[error("Field lookup failed for '{path}': {reason}")]
    FieldLookup
    {   path: String
      , reason: String
    }
  , /// Most recent response requested before any send succeeded
    #[error("Response history is empty")]
    EmptyHistory
  , /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error)
  , /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String)
}

impl Error
{   pub(crate) fn build(msg: impl Into<String>) -> Self
    {   Error::BuildValidation(msg.into())
    }

    pub(crate) fn lookup(
      path: impl Into<String>
    , reason: impl Into<String>
    ) -> Self
    {   Error::FieldLookup
        {   path: path.into()
          , reason: reason.into()
        }
    }

    /// HTTP status carried by a `Generation` error, if any
    pub fn status(&self) -> Option<u16>
    {   match self
        {   Error::Generation { status, .. } => *status
          , _ => None
        }
    }
}
