//! Immutable chat request and its wire encoding

use serde::Serialize;
use crate::ModelType;

/// Origin of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole
{   User
  , System
  , Assistant
}

/// One `{role, content}` entry of the `messages` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage
{   pub role: MessageRole
  , pub content: String
}

/// Wire body for the chat-completion endpoint
/// Field order here is the key order on the wire.
#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a>
{   model: &'a str
  , temperature: f64
  , n: u32
  , messages: Vec<ChatMessage>
}

/// A validated text-generation request
///
/// Only [`crate::TextRequestBuilder::build`] creates one, so the
/// user content is always present and non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest
{   model: ModelType
  , temperature: f64
  , n: u32
  , user_content: String
  , system_content: Option<String>
  , assistant_content: Option<String>
}

impl TextRequest
{   pub(crate) fn new(
      model: ModelType
    , temperature: f64
    , n: u32
    , user_content: String
    , system_content: Option<String>
    , assistant_content: Option<String>
    ) -> Self
    {   TextRequest
        {   model
          , temperature
          , n
          , user_content
          , system_content
          , assistant_content
        }
    }

    pub fn model(&self) -> ModelType
    {   self.model
    }

    pub fn temperature(&self) -> f64
    {   self.temperature
    }

    /// Number of completions to generate
    pub fn n(&self) -> u32
    {   self.n
    }

    pub fn user_content(&self) -> &str
    {   &self.user_content
    }

    pub fn system_content(&self) -> Option<&str>
    {   self.system_content.as_deref()
    }

    pub fn assistant_content(&self) -> Option<&str>
    {   self.assistant_content.as_deref()
    }

    /// Messages in wire order: user, then system, then assistant
    pub fn messages(&self) -> Vec<ChatMessage>
    {   let mut messages = vec![
          ChatMessage
          {   role: MessageRole::User
            , content: self.user_content.clone()
          }
        ];
        if let Some(system) = &self.system_content
        {   messages.push(ChatMessage
            {   role: MessageRole::System
              , content: system.clone()
            });
        }
        if let Some(assistant) = &self.assistant_content
        {   messages.push(ChatMessage
            {   role: MessageRole::Assistant
              , content: assistant.clone()
            });
        }
        messages
    }

    /// Encode as the JSON body expected by the endpoint
    pub fn to_json(&self) -> crate::Result<String>
    {   let body = ChatCompletionBody
        {   model: self.model.as_str()
          , temperature: self.temperature
          , n: self.n
          , messages: self.messages()
        };
        Ok(serde_json::to_string(&body)?)
    }
}
