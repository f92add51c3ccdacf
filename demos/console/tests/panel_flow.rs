//! Dispatch-flow tests on the reducer and machines, no network
//!
//! The reducer's `Dispatch` effects are the only path to the network, so
//! counting them IS counting network calls. Completions are played back
//! through the harness channel the way the spawned tasks would send them.

use panel_dispatch::{assert_emitted, assert_not_emitted, count_emitted};
use panel_dispatch::{Outcome, Payload, Status, TestHarness, Transition};
use serde_json::json;

use console_panel::action::Action;
use console_panel::effect::Effect;
use console_panel::panel;
use console_panel::reducer::reducer;
use console_panel::state::AppState;

/// Feed every `Dispatch` effect a canned outcome, emitting the completion
/// the spawned task would have sent.
fn complete_dispatches(
    harness: &TestHarness<AppState, Action>,
    transition: &Transition<Effect>,
    outcome: &Outcome,
) {
    for effect in &transition.effects {
        if let Effect::Dispatch { id, generation, .. } = effect {
            harness.emit(Action::DidSettle {
                id: *id,
                generation: *generation,
                outcome: outcome.clone(),
            });
        }
    }
}

#[test]
fn test_scenario_set_renders_stored() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState::default());
    harness.state.fields.set("key", "a");
    harness.state.fields.set("value", "b");

    let transition = reducer(&mut harness.state, Action::Trigger(panel::SET));
    assert_eq!(count_emitted!(transition.effects, Effect::Dispatch { .. }), 1);

    complete_dispatches(&harness, &transition, &Outcome::success("stored"));
    let completions = harness.drain_emitted();
    assert_emitted!(completions, Action::DidSettle { .. });

    for completion in completions {
        let _ = reducer(&mut harness.state, completion);
    }

    let line = harness.state.display.line(panel::SET).expect("rendered");
    assert_eq!(line.status, Status::Success);
    assert!(line.text.contains("stored"));
}

#[test]
fn test_scenario_double_load_db_issues_one_call() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState::default());

    let first = reducer(&mut harness.state, Action::Trigger(panel::LOAD_DB));
    let second = reducer(&mut harness.state, Action::Trigger(panel::LOAD_DB));

    // Exactly one dispatch effect across both triggers; the second is
    // rejected locally without a render.
    assert_eq!(count_emitted!(first.effects, Effect::Dispatch { .. }), 1);
    assert!(second.effects.is_empty());
    assert!(!second.changed);
    assert_eq!(
        harness.state.machine(panel::LOAD_DB).unwrap().generation().value(),
        1
    );
}

#[test]
fn test_scenario_stale_response_never_renders() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState::default());

    // Generation 1 goes out and settles; generation 2 goes out.
    let t1 = reducer(&mut harness.state, Action::Trigger(panel::SET));
    complete_dispatches(&harness, &t1, &Outcome::failure("first attempt"));
    for completion in harness.drain_emitted() {
        let _ = reducer(&mut harness.state, completion);
    }
    let t2 = reducer(&mut harness.state, Action::Trigger(panel::SET));
    assert_eq!(count_emitted!(t2.effects, Effect::Dispatch { .. }), 1);

    // Generation 1's response arrives again, late. It must not displace
    // the pending indication of generation 2.
    complete_dispatches(&harness, &t1, &Outcome::success("stale ghost"));
    for completion in harness.drain_emitted() {
        let transition = reducer(&mut harness.state, completion);
        assert!(!transition.changed);
    }
    let line = harness.state.display.line(panel::SET).unwrap();
    assert_eq!(line.status, Status::Info);

    // Generation 2's own response renders normally.
    complete_dispatches(&harness, &t2, &Outcome::success("stored"));
    for completion in harness.drain_emitted() {
        let _ = reducer(&mut harness.state, completion);
    }
    let line = harness.state.display.line(panel::SET).unwrap();
    assert_eq!(line.status, Status::Success);
    assert!(line.text.contains("stored"));
    assert!(!line.text.contains("stale ghost"));
}

#[test]
fn test_scenario_empty_user_list_is_explicit() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState::default());

    let transition = reducer(&mut harness.state, Action::Trigger(panel::LIST_USERS));
    complete_dispatches(
        &harness,
        &transition,
        &Outcome::success_with("Retrieved 0 users", Payload::Users(vec![])),
    );
    for completion in harness.drain_emitted() {
        let _ = reducer(&mut harness.state, completion);
    }

    // The renderer received an empty sequence, not an absent one.
    assert_eq!(harness.state.display.users(), Some(&[][..]));
}

#[test]
fn test_slow_action_cooldown_cycle() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState::default());

    let transition = reducer(&mut harness.state, Action::Trigger(panel::LOAD));
    complete_dispatches(&harness, &transition, &Outcome::success("Load started"));

    let completions = harness.drain_emitted();
    let mut cooldowns = Vec::new();
    for completion in completions {
        let transition = reducer(&mut harness.state, completion);
        cooldowns.extend(transition.effects);
    }

    // Settlement of a slow action arms exactly one cooldown timer.
    assert_eq!(count_emitted!(cooldowns, Effect::Cooldown { .. }), 1);
    assert_not_emitted!(cooldowns, Effect::Dispatch { .. });
    let Some(Effect::Cooldown { generation, delay, .. }) = cooldowns.first() else {
        panic!("expected cooldown effect");
    };

    // Still guarded while cooling down.
    let retrigger = reducer(&mut harness.state, Action::Trigger(panel::LOAD));
    assert!(retrigger.effects.is_empty());

    // The expiry wakeup re-arms the trigger.
    assert_eq!(*delay, std::time::Duration::from_secs(5));
    let transition = reducer(
        &mut harness.state,
        Action::CooldownDidExpire {
            id: panel::LOAD,
            generation: *generation,
        },
    );
    assert!(transition.changed);
    let transition = reducer(&mut harness.state, Action::Trigger(panel::LOAD));
    assert_eq!(count_emitted!(transition.effects, Effect::Dispatch { .. }), 1);
}

#[test]
fn test_dispatch_effect_snapshots_fields_at_trigger_time() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState::default());
    harness.state.fields.set("key", "before");

    let transition = reducer(&mut harness.state, Action::Trigger(panel::SET));
    harness.state.fields.set("key", "after");

    let Some(Effect::Dispatch { fields, .. }) = transition.effects.first() else {
        panic!("expected dispatch effect");
    };
    assert_eq!(fields.get("key"), "before");
}

#[test]
fn test_user_payload_from_form_input() {
    // The create-user body is built from whatever the form holds; an
    // unparsable age travels as an absent field, not a local rejection.
    let mut harness = TestHarness::<AppState, Action>::new(AppState::default());
    harness.state.fields.set("first_name", "Ada");
    harness.state.fields.set("age", "not-a-number");

    let transition = reducer(&mut harness.state, Action::Trigger(panel::USER));
    let Some(Effect::Dispatch { id, fields, .. }) = transition.effects.first() else {
        panic!("expected dispatch effect");
    };
    assert_eq!(*id, panel::USER);

    let descriptor = harness.state.table.lookup(panel::USER).unwrap();
    let body = (descriptor.payload.unwrap())(fields);
    assert_eq!(body["first_name"], json!("Ada"));
    assert!(body.get("age").is_none());
}
