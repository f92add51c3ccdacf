//! HTTP dispatch and outcome classification
//!
//! The dispatcher is the only place the panel touches the network. It is
//! invoked once per accepted trigger, and it is total: every transport
//! failure and every backend-reported failure folds into an [`Outcome`];
//! nothing escapes as an error. Rendering and state transitions are the
//! caller's responsibility, which keeps this module pure with respect to
//! UI state.

use serde::Deserialize;
use serde_json::Value;

use crate::descriptor::{ActionDescriptor, FieldValues, Method};
use crate::endpoints::Endpoints;
use crate::outcome::{Outcome, Payload};

/// Response body shared by every panel endpoint.
///
/// Every action answers with at least `{success, message}`; user creation
/// adds `user_id` and user listing adds `users`. The extra fields stay
/// `serde_json::Value`: the panel passes them through untouched.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub users: Option<Vec<Value>>,
}

/// Classify a parsed response body into an outcome.
///
/// `success: false` passes the backend's message through verbatim; a
/// successful body carries whichever structured payload it exposes.
pub fn classify(response: ApiResponse) -> Outcome {
    if !response.success {
        return Outcome::failure(response.message);
    }
    let payload = match (response.users, response.user_id) {
        (Some(users), _) => Some(Payload::Users(users)),
        (None, Some(user_id)) => Some(Payload::UserId(user_id)),
        (None, None) => None,
    };
    Outcome {
        success: true,
        message: response.message,
        payload,
    }
}

/// Issues the network request for an action and classifies the result.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl Dispatcher {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Dispatch one action and await its outcome.
    ///
    /// Non-2xx statuses, unreachable hosts, and non-JSON bodies all come
    /// back uniformly as a failed outcome whose message starts with
    /// `"Error: "`; there is no status-code-specific branching.
    pub async fn dispatch(&self, descriptor: &ActionDescriptor, fields: &FieldValues) -> Outcome {
        let url = match self.endpoints.resolve(descriptor.id) {
            Ok(url) => url,
            Err(err) => {
                tracing::error!(action = %descriptor.id, "no route for action");
                return Outcome::transport(err);
            }
        };

        let request = match descriptor.method {
            Method::Get => self.client.get(&url),
            Method::Post => {
                let body = descriptor
                    .payload
                    .map(|build| build(fields))
                    .unwrap_or_else(|| Value::Object(Default::default()));
                self.client.post(&url).json(&body)
            }
        };

        tracing::debug!(action = %descriptor.id, method = descriptor.method.as_str(), %url, "dispatching");

        let parsed = async {
            let response = request.send().await?.error_for_status()?;
            response.json::<ApiResponse>().await
        }
        .await;

        match parsed {
            Ok(body) => {
                let outcome = classify(body);
                tracing::debug!(action = %descriptor.id, success = outcome.success, "dispatch settled");
                outcome
            }
            Err(err) => {
                tracing::warn!(action = %descriptor.id, error = %err, "transport failure");
                Outcome::transport(err)
            }
        }
    }
}
