//! The concrete control panel: actions, routes, payload builders
//!
//! This table is the whole configuration surface of the panel. Every
//! trigger control, its wire shape, and its cooldown is one entry here;
//! there is no per-button handler anywhere else.

use std::time::Duration;

use panel_dispatch::{ActionDescriptor, ActionId, ActionTable, Endpoints, FieldValues};
use serde_json::{json, Value};

pub const SET: ActionId = ActionId::new("set");
pub const LOAD: ActionId = ActionId::new("load");
pub const LOAD_DB: ActionId = ActionId::new("loadDb");
pub const USER: ActionId = ActionId::new("user");
pub const LIST_USERS: ActionId = ActionId::new("listUsers");
/// Link-only: the metrics page is shown in the footer, never dispatched.
pub const METRICS: ActionId = ActionId::new("metrics");

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// The load jobs keep their trigger disabled for five seconds after
/// settlement; the backend job itself runs for minutes regardless.
const LOAD_COOLDOWN: Duration = Duration::from_secs(5);

/// Form fields, in visual order.
pub const SET_FIELDS: &[&str] = &["key", "value"];
pub const USER_FIELDS: &[&str] = &["first_name", "last_name", "age", "marital_status"];

pub const MARITAL_STATUS: &str = "marital_status";

pub fn action_table() -> ActionTable {
    let mut table = ActionTable::new();
    table
        .register(ActionDescriptor::post(SET, "Set Key", "Saving...", set_payload))
        .register(
            ActionDescriptor::get(LOAD, "Load Cache", "Loading...").with_cooldown(LOAD_COOLDOWN),
        )
        .register(
            ActionDescriptor::get(LOAD_DB, "Load Database", "Loading...")
                .with_cooldown(LOAD_COOLDOWN),
        )
        .register(ActionDescriptor::post(USER, "Create User", "Creating...", user_payload))
        .register(ActionDescriptor::get(LIST_USERS, "List Users", "Listing..."));
    table
}

pub fn endpoints(base_url: &str) -> Endpoints {
    Endpoints::new(base_url)
        .route(SET, "/api/set")
        .route(LOAD, "/api/load")
        .route(LOAD_DB, "/api/load-db")
        .route(USER, "/api/user")
        .route(LIST_USERS, "/api/users")
        .route(METRICS, "/metrics")
}

fn set_payload(fields: &FieldValues) -> Value {
    json!({
        "key": fields.get("key"),
        "value": fields.get("value"),
    })
}

fn user_payload(fields: &FieldValues) -> Value {
    let mut body = json!({
        "first_name": fields.get("first_name"),
        "last_name": fields.get("last_name"),
        "marital_status": fields.flag(MARITAL_STATUS),
    });
    // An unparsable age is left out of the body, not rejected locally.
    if let Some(age) = fields.parse_i64("age") {
        body["age"] = json!(age);
    }
    body
}

/// The action a form field submits to on Enter.
pub fn form_action(field: &str) -> Option<ActionId> {
    if SET_FIELDS.contains(&field) {
        Some(SET)
    } else if USER_FIELDS.contains(&field) {
        Some(USER)
    } else {
        None
    }
}
