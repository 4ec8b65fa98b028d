// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! JSON encoding for the controller ↔ fetcher messages, for when the two halves run
//! across a real process or network boundary (and for `isl --headless --json`).
//!
//! Decoding is lenient about message kinds and strict about syntax:
//! - A well formed JSON object whose `type` is not one this end understands decodes to
//!   [`None`], and the caller ignores it.
//! - Bytes that are not JSON, or a known `type` whose fields don't fit, are a
//!   [`ProtocolError`].

use serde::{Serialize, de::DeserializeOwned};

use crate::{ControllerMessage, FetcherResponse};

/// Type aliases for the payload buffer type.
pub type Buffer = Vec<BufferAtom>;
pub type BufferAtom = u8;

/// The key that carries the message kind in every wire message.
pub const MESSAGE_TYPE_KEY: &str = "type";

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ProtocolError {
    #[error("Could not encode message as JSON")]
    #[diagnostic(code(r3bl_infinite_scroll::protocol::encode))]
    Encode(#[source] serde_json::Error),

    #[error("Could not decode message from JSON")]
    #[diagnostic(code(r3bl_infinite_scroll::protocol::decode))]
    Decode(#[source] serde_json::Error),
}

/// A message that can cross the controller ↔ fetcher boundary as JSON.
pub trait WireMessage: Serialize + DeserializeOwned {
    /// The `type` values this message enum understands.
    const KNOWN_TYPES: &'static [&'static str];

    /// # Errors
    ///
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn try_encode(&self) -> Result<Buffer, ProtocolError> {
        serde_json::to_vec(self).map_err(ProtocolError::Encode)
    }

    /// Returns `Ok(None)` for messages with a missing or unrecognized `type`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Decode`] if `buffer` is not valid JSON, or if a message
    /// of a known `type` has the wrong shape.
    fn try_decode(buffer: &[BufferAtom]) -> Result<Option<Self>, ProtocolError> {
        let value: serde_json::Value =
            serde_json::from_slice(buffer).map_err(ProtocolError::Decode)?;

        let is_known = value
            .get(MESSAGE_TYPE_KEY)
            .and_then(serde_json::Value::as_str)
            .is_some_and(|it| Self::KNOWN_TYPES.contains(&it));
        if !is_known {
            tracing::debug!(message = "🙈 ignoring unrecognized message", ?value);
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(ProtocolError::Decode)
    }
}

impl WireMessage for ControllerMessage {
    const KNOWN_TYPES: &'static [&'static str] = &["load"];
}

impl WireMessage for FetcherResponse {
    const KNOWN_TYPES: &'static [&'static str] = &["data", "error"];
}
