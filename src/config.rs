//! Configuration for the chat-completion client

use serde::{Deserialize, Serialize};

/// Chat-completion endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str
  = "https://api.openai.com/v1/chat/completions";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig
{   /// Full URL of the chat-completion endpoint
    pub endpoint: String
  , /// Request timeout in seconds, none means the transport default
    pub timeout_secs: Option<u64>
  , /// Log request and response bodies at trace level
    pub verbose: bool
}

impl ClientConfig
{   pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self
    {   self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self
    {   self.timeout_secs = Some(secs);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self
    {   self.verbose = verbose;
        self
    }
}

impl Default for ClientConfig
{   fn default() -> Self
    {   ClientConfig
        {   endpoint: DEFAULT_ENDPOINT.to_string()
          , timeout_secs: None
          , verbose: false
        }
    }
}
