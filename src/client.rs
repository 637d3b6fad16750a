use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use log::{debug, trace, error};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::history::ResponseHistory;
use crate::request::TextRequest;
use crate::response::TextResponse;

/// Client for the chat-completion endpoint
///
/// Owns its API key and its response history. Both sit behind a
/// mutex, so one client can be shared across tasks; history order
/// across concurrent sends is completion order.
pub struct ChatClient
{   http_client: reqwest::Client
  , endpoint: String
  , verbose: bool
  , api_key: Mutex<Option<String>>
  , history: Mutex<ResponseHistory>
}

impl ChatClient
{   /// Client for the default endpoint with transport defaults
    pub fn new() -> Self
    {   debug!("Creating ChatClient with default configuration");
        let config = ClientConfig::default();
        ChatClient::from_parts(reqwest::Client::new(), config)
    }

    /// Client for a custom endpoint and timeout
    pub fn with_config(config: ClientConfig) -> Result<Self>
    {   debug!("Creating ChatClient for endpoint: {}", config.endpoint);
        validate_endpoint(&config.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(ChatClient::from_parts(http_client, config))
    }

    fn from_parts(
      http_client: reqwest::Client
    , config: ClientConfig
    ) -> Self
    {   ChatClient
        {   http_client
          , endpoint: config.endpoint
          , verbose: config.verbose
          , api_key: Mutex::new(None)
          , history: Mutex::new(ResponseHistory::new())
        }
    }

    pub fn endpoint(&self) -> &str
    {   &self.endpoint
    }

    /// Store the key used by [`ChatClient::send`]
    pub fn set_api_key(&self, key: impl Into<String>)
    {   debug!("Setting API key");
        *lock(&self.api_key) = Some(key.into());
    }

    pub fn clear_api_key(&self)
    {   debug!("Clearing API key");
        *lock(&self.api_key) = None;
    }

    pub fn has_api_key(&self) -> bool
    {   lock(&self.api_key).is_some()
    }

    /// Send using the stored API key
    ///
    /// Fails with [`Error::MissingCredential`] before touching the
    /// network when no key is stored.
    pub async fn send(
      &self
    , request: &TextRequest
    ) -> Result<Arc<TextResponse>>
    {   let api_key = lock(&self.api_key)
          .clone()
          .ok_or_else(|| {
            debug!("send called without a stored API key");
            Error::MissingCredential
          })?;
        self.send_with_key(request, &api_key).await
    }

    /// Send using an explicit API key, ignoring the stored one
    pub async fn send_with_key(
      &self
    , request: &TextRequest
    , api_key: &str
    ) -> Result<Arc<TextResponse>>
    {   debug!("Sending request for model: {}", request.model());

        let body = request.to_json()?;
        if self.verbose
        {   trace!("Request body: {}", body);
        }

        let response = self.http_client
          .post(self.endpoint.as_str())
          .header(AUTHORIZATION, format!("Bearer {}", api_key))
          .header(CONTENT_TYPE, "application/json")
          .body(body)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::Generation
            {   status: None
              , detail: format!("Request error: {}", e)
              , source: Some(e)
            }
          })?;

        let status = response.status();
        trace!("Response status: {}", status);

        let text = response.text().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          Error::Generation
          {   status: Some(status.as_u16())
            , detail: format!("Failed to read response body: {}", e)
            , source: Some(e)
          }
        })?;
        if self.verbose
        {   trace!("Response body: {}", text);
        }

        if status != StatusCode::OK
        {   error!("API error: status {}", status);
            return Err(Error::Generation
            {   status: Some(status.as_u16())
              , detail: format!("Error Details: {}", text)
              , source: None
            });
        }

        let parsed = Arc::new(TextResponse::parse(&text)?);
        lock(&self.history).push(Arc::clone(&parsed));
        Ok(parsed)
    }

    /// Most recent successful response
    pub fn last_response(&self) -> Result<Arc<TextResponse>>
    {   lock(&self.history).last().map(Arc::clone)
    }

    /// Every successful response, oldest first
    pub fn history(&self) -> Vec<Arc<TextResponse>>
    {   lock(&self.history).iter().cloned().collect()
    }

    pub fn history_len(&self) -> usize
    {   lock(&self.history).len()
    }
}

impl Default for ChatClient
{   fn default() -> Self
    {   ChatClient::new()
    }
}

impl fmt::Debug for ChatClient
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("ChatClient")
          .field("endpoint", &self.endpoint)
          .field("verbose", &self.verbose)
          .field("has_api_key", &self.has_api_key())
          .field("history_len", &self.history_len())
          .finish()
    }
}

// Guarded state stays consistent even if a holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T>
{   mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn validate_endpoint(endpoint: &str) -> Result<()>
{   if endpoint.trim().is_empty()
    {   return Err(Error::InvalidConfiguration(
          "Endpoint cannot be empty".to_string()
        ));
    }
    let url = reqwest::Url::parse(endpoint).map_err(|e| {
      Error::InvalidConfiguration(format!(
        "Invalid endpoint '{}': {}", endpoint, e
      ))
    })?;
    match url.scheme()
    {   "http" | "https" => Ok(())
      , scheme => Err(Error::InvalidConfiguration(format!(
          "Unsupported endpoint scheme '{}'", scheme
        )))
    }
}
