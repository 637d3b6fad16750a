//! Append-only log of received responses

use std::sync::Arc;
use log::trace;
use crate::error::{Error, Result};
use crate::response::TextResponse;

#[derive(Debug, Clone, Default)]
pub struct ResponseHistory
{   entries: Vec<Arc<TextResponse>>
}

impl ResponseHistory
{   pub fn new() -> Self
    {   Self::default()
    }

    pub fn push(&mut self, response: Arc<TextResponse>)
    {   self.entries.push(response);
        trace!("History now holds {} responses", self.entries.len());
    }

    /// Most recently appended response
    pub fn last(&self) -> Result<&Arc<TextResponse>>
    {   self.entries.last().ok_or(Error::EmptyHistory)
    }

    pub fn len(&self) -> usize
    {   self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {   self.entries.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TextResponse>>
    {   self.entries.iter()
    }
}
