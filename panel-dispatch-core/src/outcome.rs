//! Normalized dispatch results
//!
//! Whatever happens on the wire (a healthy response, a backend-reported
//! failure, or no response at all), each dispatch produces exactly one
//! [`Outcome`]. Renderers never see transport details.

use serde_json::Value;

/// Structured data returned by specific actions.
///
/// Opaque to the core: the records are passed through to the renderer
/// exactly as the backend sent them.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// Identifier of a newly created user (string or number on the wire).
    UserId(Value),
    /// User records; each optionally exposes `user_id` and `data`.
    Users(Vec<Value>),
}

/// The normalized result of one dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub success: bool,
    /// Human-readable server message, or a synthesized transport-error
    /// message.
    pub message: String,
    pub payload: Option<Payload>,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            payload: None,
        }
    }

    pub fn success_with(message: impl Into<String>, payload: Payload) -> Self {
        Self {
            success: true,
            message: message.into(),
            payload: Some(payload),
        }
    }

    /// A failure the backend reported itself; the message passes through
    /// verbatim.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            payload: None,
        }
    }

    /// A failure synthesized at the transport boundary (network unreachable,
    /// non-2xx status, malformed body).
    pub fn transport(diagnostic: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("Error: {diagnostic}"),
            payload: None,
        }
    }

    /// The user records, when this outcome carries a list payload.
    pub fn users(&self) -> Option<&[Value]> {
        match &self.payload {
            Some(Payload::Users(users)) => Some(users),
            _ => None,
        }
    }

    /// The created user id, when this outcome carries one.
    pub fn user_id(&self) -> Option<&Value> {
        match &self.payload {
            Some(Payload::UserId(id)) => Some(id),
            _ => None,
        }
    }
}
