pub mod error;
pub mod config;
pub mod request;
pub mod builder;
pub mod response;
pub mod history;
pub mod client;
use serde::{Deserialize, Serialize};
use std::fmt;

/*

chatgen: a small async client for the OpenAI chat-completion
endpoint. Build a request, send it, read typed fields back.

chatgen/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and model identifiers
│   ├── error.rs        # Error enum and Result alias
│   ├── config.rs       # Endpoint / timeout configuration
│   ├── builder.rs      # Validating request builder
│   ├── request.rs      # Immutable request and wire encoding
│   ├── response.rs     # Typed lookups over the JSON reply
│   ├── history.rs      # Append-only response log
│   └── client.rs       # HTTP client, credential, history
├── demos/              # Example usage
└── tests/              # Integration tests

*/

pub use builder::TextRequestBuilder;
pub use client::ChatClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use history::ResponseHistory;
pub use request::{ChatMessage, MessageRole, TextRequest};
pub use response::TextResponse;

/// What a backend model produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality
{   Text
  , Image
}

/// Backend models addressable through the chat endpoint
/// https://platform.openai.com/docs/models
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default
, Deserialize, Serialize
)]
pub enum ModelType
{   /// GPT-4o flagship model
    #[serde(rename = "gpt-4o")]
    Gpt4o
  , /// GPT-4o mini, cheapest general-purpose text model
    #[default]
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini
  , /// o1 reasoning model
    #[serde(rename = "o1")]
    O1
  , /// o1-mini reasoning model
    #[serde(rename = "o1-mini")]
    O1Mini
  , /// DALL-E 3 image generation
    #[serde(rename = "dall-e-3")]
    DallE3
  , /// DALL-E 2 image generation
    #[serde(rename = "dall-e-2")]
    DallE2
}

impl ModelType
{   pub const ALL: [ModelType; 6] = [
      ModelType::Gpt4o
    , ModelType::Gpt4oMini
    , ModelType::O1
    , ModelType::O1Mini
    , ModelType::DallE3
    , ModelType::DallE2
    ];

    /// Identifier sent on the wire
    pub fn as_str(&self) -> &'static str
    {   match self
        {   ModelType::Gpt4o => "gpt-4o"
          , ModelType::Gpt4oMini => "gpt-4o-mini"
          , ModelType::O1 => "o1"
          , ModelType::O1Mini => "o1-mini"
          , ModelType::DallE3 => "dall-e-3"
          , ModelType::DallE2 => "dall-e-2"
        }
    }

    pub fn modality(&self) -> Modality
    {   match self
        {   ModelType::DallE3 | ModelType::DallE2 => Modality::Image
          , _ => Modality::Text
        }
    }

    pub fn is_text(&self) -> bool
    {   self.modality() == Modality::Text
    }
}

impl fmt::Display for ModelType
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str(self.as_str())
    }
}
