//! Verb selection.

use std::fmt;
use std::str::FromStr;

use crate::error::UnsupportedAction;
use crate::transport::{Transport, TransportRequest};

/// The four actions the console accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Put,
    Post,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Put => "PUT",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        }
    }

    /// Run the transport operation matching this verb.
    pub fn invoke<T: Transport + ?Sized>(
        self,
        transport: &T,
        request: TransportRequest,
    ) -> Result<T::Response, T::Error> {
        match self {
            Verb::Get => transport.get(request),
            Verb::Put => transport.put(request),
            Verb::Post => transport.post(request),
            Verb::Delete => transport.delete(request),
        }
    }
}

impl FromStr for Verb {
    type Err = UnsupportedAction;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "PUT" => Ok(Verb::Put),
            "POST" => Ok(Verb::Post),
            "DELETE" => Ok(Verb::Delete),
            _ => Err(UnsupportedAction(s.to_string())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
