//! Action descriptors and the startup registry
//!
//! Every dispatchable action is described once, at startup, by an
//! [`ActionDescriptor`]; the [`ActionTable`] is the read-only registry the
//! rest of the system looks actions up in. This is what replaces a
//! hand-written handler per trigger control: one table, one code path.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Symbolic name of a dispatchable action (e.g. `"set"`, `"loadDb"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(&'static str);

impl ActionId {
    /// Create an action id.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Get the id name.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl From<&'static str> for ActionId {
    fn from(s: &'static str) -> Self {
        Self(s)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// HTTP method an action dispatches with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Raw form/field values as the user entered them.
///
/// Values are strings straight from the input fields. Payload builders
/// coerce them where an action's wire contract wants a number or a flag;
/// nothing validates them beyond that coercion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    fields: BTreeMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a field value; missing fields read as empty.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Coerce a field to an integer. Unparsable or missing values yield
    /// `None`; the field is then left out of the request body rather than
    /// rejected locally.
    pub fn parse_i64(&self, name: &str) -> Option<i64> {
        self.get(name).trim().parse().ok()
    }

    /// Coerce a field to a flag (`"true"` is set, anything else is not).
    pub fn flag(&self, name: &str) -> bool {
        self.get(name) == "true"
    }

    /// Remove every field.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

/// Builds a JSON request body from the current field values.
pub type PayloadBuilder = fn(&FieldValues) -> serde_json::Value;

/// Static description of one dispatchable action.
///
/// Created at startup, never mutated. The cooldown is the minimum time the
/// trigger stays disabled after settlement before the action returns to
/// idle; zero means the trigger re-arms as soon as the outcome renders.
#[derive(Clone, Debug)]
pub struct ActionDescriptor {
    pub id: ActionId,
    pub method: Method,
    /// Builds the request body; absent for parameterless actions.
    pub payload: Option<PayloadBuilder>,
    /// Display text for the trigger control when the action is idle.
    pub idle_label: &'static str,
    /// Display text while a dispatch is outstanding.
    pub busy_label: &'static str,
    pub cooldown: Duration,
}

impl ActionDescriptor {
    /// A parameterless GET action with no cooldown.
    pub fn get(id: impl Into<ActionId>, idle_label: &'static str, busy_label: &'static str) -> Self {
        Self {
            id: id.into(),
            method: Method::Get,
            payload: None,
            idle_label,
            busy_label,
            cooldown: Duration::ZERO,
        }
    }

    /// A POST action whose body is built from the current field values.
    pub fn post(
        id: impl Into<ActionId>,
        idle_label: &'static str,
        busy_label: &'static str,
        payload: PayloadBuilder,
    ) -> Self {
        Self {
            id: id.into(),
            method: Method::Post,
            payload: Some(payload),
            idle_label,
            busy_label,
            cooldown: Duration::ZERO,
        }
    }

    /// Set the post-settlement cooldown.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }
}

/// Lookup failure for an id that was never registered.
///
/// This is a programmer error: with correct wiring every id reaching the
/// table came out of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownAction(pub ActionId);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

/// Read-only registry of action descriptors, populated once at startup.
///
/// Iteration preserves registration order, which doubles as display order
/// for hosts that render the table as a list of trigger controls.
#[derive(Clone, Debug, Default)]
pub struct ActionTable {
    entries: Vec<ActionDescriptor>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. Re-registering an id replaces the previous
    /// descriptor.
    pub fn register(&mut self, descriptor: ActionDescriptor) -> &mut Self {
        if let Some(existing) = self.entries.iter_mut().find(|d| d.id == descriptor.id) {
            tracing::warn!(action = %descriptor.id, "descriptor re-registered");
            *existing = descriptor;
        } else {
            self.entries.push(descriptor);
        }
        self
    }

    /// Look up a descriptor by id.
    pub fn lookup(&self, id: ActionId) -> Result<&ActionDescriptor, UnknownAction> {
        self.entries
            .iter()
            .find(|d| d.id == id)
            .ok_or(UnknownAction(id))
    }

    /// All registered ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.entries.iter().map(|d| d.id)
    }

    /// All descriptors, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload(fields: &FieldValues) -> serde_json::Value {
        json!({ "key": fields.get("key") })
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let mut table = ActionTable::new();
        table.register(ActionDescriptor::get("load", "Load Cache", "Loading..."));

        let descriptor = table.lookup(ActionId::new("load")).expect("registered");
        assert_eq!(descriptor.method, Method::Get);
        assert_eq!(descriptor.idle_label, "Load Cache");

        let err = table.lookup(ActionId::new("nope")).unwrap_err();
        assert_eq!(err, UnknownAction(ActionId::new("nope")));
        assert_eq!(err.to_string(), "unknown action: nope");
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let mut table = ActionTable::new();
        table
            .register(ActionDescriptor::get("load", "Load Cache", "Loading..."))
            .register(ActionDescriptor::post("set", "Set Key", "Saving...", sample_payload))
            .register(ActionDescriptor::get("listUsers", "List Users", "Listing..."));

        let ids: Vec<_> = table.ids().map(|id| id.name()).collect();
        assert_eq!(ids, vec!["load", "set", "listUsers"]);
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut table = ActionTable::new();
        table.register(ActionDescriptor::get("load", "Load Cache", "Loading..."));
        table.register(
            ActionDescriptor::get("load", "Load Cache", "Working...")
                .with_cooldown(Duration::from_secs(5)),
        );

        assert_eq!(table.len(), 1);
        let descriptor = table.lookup(ActionId::new("load")).unwrap();
        assert_eq!(descriptor.busy_label, "Working...");
        assert_eq!(descriptor.cooldown, Duration::from_secs(5));
    }

    #[test]
    fn test_field_values_coercion() {
        let fields = FieldValues::new()
            .with("age", " 42 ")
            .with("bad_age", "forty-two")
            .with("married", "true");

        assert_eq!(fields.parse_i64("age"), Some(42));
        assert_eq!(fields.parse_i64("bad_age"), None);
        assert_eq!(fields.parse_i64("missing"), None);
        assert!(fields.flag("married"));
        assert!(!fields.flag("missing"));
        assert_eq!(fields.get("missing"), "");
    }

    #[test]
    fn test_payload_builder_reads_fields() {
        let descriptor = ActionDescriptor::post("set", "Set Key", "Saving...", sample_payload);
        let fields = FieldValues::new().with("key", "a");
        let body = (descriptor.payload.expect("post has payload"))(&fields);
        assert_eq!(body, json!({ "key": "a" }));
    }
}
