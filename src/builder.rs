//! Validating builder for [`TextRequest`]

use crate::error::{Error, Result};
use crate::request::TextRequest;
use crate::ModelType;

const DEFAULT_TEMPERATURE: f64 = 1.0;
const DEFAULT_N: u32 = 1;
const MAX_TEMPERATURE: f64 = 2.0;

/// Stages request fields and checks each one as it is set
///
/// ```
/// use chatgen::{ModelType, TextRequestBuilder};
///
/// # fn main() -> chatgen::Result<()> {
/// let request = TextRequestBuilder::new()
///     .model(ModelType::Gpt4o)?
///     .temperature(0.7)?
///     .system_content("Answer in one sentence")?
///     .user_content("What is Rust?")?
///     .build()?;
/// assert_eq!(request.n(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextRequestBuilder
{   model: Option<ModelType>
  , temperature: Option<f64>
  , n: Option<u32>
  , user_content: Option<String>
  , system_content: Option<String>
  , assistant_content: Option<String>
}

impl TextRequestBuilder
{   pub fn new() -> Self
    {   Self::default()
    }

    /// Select the backend model; image models are rejected
    pub fn model(mut self, model: ModelType) -> Result<Self>
    {   if !model.is_text()
        {   return Err(Error::build(format!(
              "Model '{}' does not generate text", model
            )));
        }
        self.model = Some(model);
        Ok(self)
    }

    /// Sampling temperature, must lie in (0, 2]
    pub fn temperature(mut self, temperature: f64) -> Result<Self>
    {   if temperature.is_nan() || temperature <= 0.0
        {   return Err(Error::build(
              "Invalid temperature value: must be greater than 0"
            ));
        }
        if temperature > MAX_TEMPERATURE
        {   return Err(Error::build(
              "Invalid temperature value: must not exceed 2"
            ));
        }
        self.temperature = Some(temperature);
        Ok(self)
    }

    /// Number of completions, at least 1
    pub fn n(mut self, n: u32) -> Result<Self>
    {   if n < 1
        {   return Err(Error::build(
              "Invalid 'n' value: must be at least 1"
            ));
        }
        self.n = Some(n);
        Ok(self)
    }

    pub fn user_content(
      mut self
    , content: impl Into<String>
    ) -> Result<Self>
    {   self.user_content = Some(non_blank(
          content.into()
        , "User content cannot be blank. Please provide a valid prompt"
        )?);
        Ok(self)
    }

    pub fn system_content(
      mut self
    , content: impl Into<String>
    ) -> Result<Self>
    {   self.system_content = Some(non_blank(
          content.into()
        , "System content cannot be blank. \
           Please provide valid system instructions"
        )?);
        Ok(self)
    }

    pub fn assistant_content(
      mut self
    , content: impl Into<String>
    ) -> Result<Self>
    {   self.assistant_content = Some(non_blank(
          content.into()
        , "Assistant content cannot be blank. \
           Please provide a valid response"
        )?);
        Ok(self)
    }

    pub fn get_model(&self) -> Option<ModelType>
    {   self.model
    }

    pub fn get_temperature(&self) -> Option<f64>
    {   self.temperature
    }

    pub fn get_n(&self) -> Option<u32>
    {   self.n
    }

    pub fn get_user_content(&self) -> Option<&str>
    {   self.user_content.as_deref()
    }

    pub fn get_system_content(&self) -> Option<&str>
    {   self.system_content.as_deref()
    }

    pub fn get_assistant_content(&self) -> Option<&str>
    {   self.assistant_content.as_deref()
    }

    /// Finish the request, filling defaults for model,
    /// temperature and n. User content has no default.
    pub fn build(self) -> Result<TextRequest>
    {   let user_content = self.user_content.ok_or_else(|| {
          Error::build(
            "'userContent' must be set before build(). \
             Provide a valid prompt"
          )
        })?;
        Ok(TextRequest::new(
          self.model.unwrap_or_default()
        , self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
        , self.n.unwrap_or(DEFAULT_N)
        , user_content
        , self.system_content
        , self.assistant_content
        ))
    }
}

fn non_blank(content: String, msg: &str) -> Result<String>
{   if content.trim().is_empty()
    {   return Err(Error::build(msg));
    }
    Ok(content)
}
