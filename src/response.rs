//! Typed lookups over a chat-completion reply

use serde_json::{Map, Value};
use std::str::FromStr;
use crate::error::{Error, Result};

const CONTENT_PATH: &str = "choices[0].message.content";

/// Parsed reply from the chat-completion endpoint
///
/// Construction fails unless the body is a JSON object, so every
/// accessor works against a real tree. Accessors never default:
/// a missing key or a value of the wrong type is a
/// [`Error::FieldLookup`] naming the dotted path.
#[derive(Debug, Clone, PartialEq)]
pub struct TextResponse
{   raw: String
  , root: Map<String, Value>
}

impl TextResponse
{   /// Parse a raw reply body
    pub fn parse(body: &str) -> Result<Self>
    {   if body.trim().is_empty()
        {   return Err(Error::ResponseParse(
              "Body of response is empty or blank".to_string()
            ));
        }
        let value: Value = serde_json::from_str(body)
          .map_err(|e| Error::ResponseParse(e.to_string()))?;
        match value
        {   Value::Object(root) => Ok(TextResponse
            {   raw: body.to_string()
              , root
            })
          , other => Err(Error::ResponseParse(format!(
              "expected a JSON object, got {}", kind_of(&other)
            )))
        }
    }

    /// The body exactly as received
    pub fn full_response(&self) -> &str
    {   &self.raw
    }

    pub fn as_json(&self) -> &Map<String, Value>
    {   &self.root
    }

    pub fn id(&self) -> Result<&str>
    {   self.str_at(&["id"])
    }

    pub fn model(&self) -> Result<&str>
    {   self.str_at(&["model"])
    }

    /// Unix timestamp of creation
    pub fn created(&self) -> Result<u64>
    {   self.u64_at(&["created"])
    }

    pub fn object(&self) -> Result<&str>
    {   self.str_at(&["object"])
    }

    pub fn system_fingerprint(&self) -> Result<&str>
    {   self.str_at(&["system_fingerprint"])
    }

    pub fn choices(&self) -> Result<&[Value]>
    {   self.field(&["choices"])?
          .as_array()
          .map(Vec::as_slice)
          .ok_or_else(|| Error::lookup("choices", "expected an array"))
    }

    /// Message content of the first choice
    pub fn content(&self) -> Result<&str>
    {   let first = self.choices()?
          .first()
          .ok_or_else(|| {
            Error::lookup(CONTENT_PATH, "choices array is empty")
          })?;
        first.get("message")
          .and_then(|message| message.get("content"))
          .ok_or_else(|| Error::lookup(CONTENT_PATH, "missing key"))?
          .as_str()
          .ok_or_else(|| Error::lookup(CONTENT_PATH, "expected a string"))
    }

    pub fn prompt_tokens(&self) -> Result<u64>
    {   self.u64_at(&["usage", "prompt_tokens"])
    }

    pub fn completion_tokens(&self) -> Result<u64>
    {   self.u64_at(&["usage", "completion_tokens"])
    }

    pub fn total_tokens(&self) -> Result<u64>
    {   self.u64_at(&["usage", "total_tokens"])
    }

    pub fn cached_tokens(&self) -> Result<u64>
    {   self.u64_at(&["usage", "prompt_tokens_details", "cached_tokens"])
    }

    /// Audio tokens on the prompt side
    pub fn audio_tokens(&self) -> Result<u64>
    {   self.u64_at(&["usage", "prompt_tokens_details", "audio_tokens"])
    }

    pub fn reasoning_tokens(&self) -> Result<u64>
    {   self.u64_at(&[
          "usage", "completion_tokens_details", "reasoning_tokens"
        ])
    }

    pub fn accepted_prediction_tokens(&self) -> Result<u64>
    {   self.u64_at(&[
          "usage", "completion_tokens_details", "accepted_prediction_tokens"
        ])
    }

    pub fn rejected_prediction_tokens(&self) -> Result<u64>
    {   self.u64_at(&[
          "usage", "completion_tokens_details", "rejected_prediction_tokens"
        ])
    }

    /// Walk nested objects along `path`
    fn field(&self, path: &[&str]) -> Result<&Value>
    {   let mut current = &self.root;
        let mut found: Option<&Value> = None;
        for (depth, key) in path.iter().enumerate()
        {   if let Some(parent) = found
            {   current = parent.as_object().ok_or_else(|| {
                  Error::lookup(path[..depth].join("."), "expected an object")
                })?;
            }
            found = Some(current.get(*key).ok_or_else(|| {
              Error::lookup(path[..=depth].join("."), "missing key")
            })?);
        }
        found.ok_or_else(|| Error::lookup("", "empty path"))
    }

    fn str_at(&self, path: &[&str]) -> Result<&str>
    {   self.field(path)?
          .as_str()
          .ok_or_else(|| Error::lookup(path.join("."), "expected a string"))
    }

    fn u64_at(&self, path: &[&str]) -> Result<u64>
    {   self.field(path)?
          .as_u64()
          .ok_or_else(|| {
            Error::lookup(path.join("."), "expected a non-negative integer")
          })
    }
}

impl FromStr for TextResponse
{   type Err = Error;

    fn from_str(body: &str) -> Result<Self>
    {   TextResponse::parse(body)
    }
}

fn kind_of(value: &Value) -> &'static str
{   match value
    {   Value::Null => "null"
      , Value::Bool(_) => "a boolean"
      , Value::Number(_) => "a number"
      , Value::String(_) => "a string"
      , Value::Array(_) => "an array"
      , Value::Object(_) => "an object"
    }
}
