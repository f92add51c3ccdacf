//! Host state store with an effect-emitting reducer
//!
//! The store holds whatever state the host renders from and funnels every
//! mutation through one reducer. Reducers stay pure: side effects (issue a
//! dispatch, arm a cooldown timer) are returned as data in the
//! [`Transition`] and performed by the host's event loop.

use std::fmt::Debug;
use std::marker::PhantomData;

/// Marker trait for actions flowing through the store.
///
/// Actions describe things that happened or were requested: a trigger, a
/// dispatch completion, a keystroke. They are cloned for middleware and may
/// cross task boundaries, hence the bounds.
pub trait Action: Clone + Debug + Send + 'static {
    /// Action name for logging and filtering.
    fn name(&self) -> &'static str;
}

/// Result of reducing one action: whether state changed (and a re-render is
/// due) plus any effects the host must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<E> {
    pub changed: bool,
    pub effects: Vec<E>,
}

impl<E> Default for Transition<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> Transition<E> {
    /// No state change, no effects.
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed with one effect.
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Append an effect.
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer: mutates state for an action and declares the effects to run.
pub type Reducer<S, A, E> = fn(&mut S, A) -> Transition<E>;

/// Middleware hooks around each dispatch, for cross-cutting concerns like
/// action logging.
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);
    fn after(&mut self, action: &A, changed: bool);
}

/// Middleware that traces every action at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionLogger;

impl<A: Action> Middleware<A> for ActionLogger {
    fn before(&mut self, action: &A) {
        tracing::debug!(action = %action.name(), "reducing");
    }

    fn after(&mut self, action: &A, changed: bool) {
        tracing::debug!(action = %action.name(), changed, "reduced");
    }
}

/// State container with a single dispatch entry point.
pub struct Store<S, A: Action, E> {
    state: S,
    reducer: Reducer<S, A, E>,
    middleware: Option<Box<dyn Middleware<A>>>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A: Action, E> Store<S, A, E> {
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            middleware: None,
            _marker: PhantomData,
        }
    }

    /// Attach middleware to the store.
    pub fn with_middleware(mut self, middleware: impl Middleware<A> + 'static) -> Self {
        self.middleware = Some(Box::new(middleware));
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable state access, for initialization; prefer dispatching actions.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Run one action through the reducer (and middleware, when attached).
    pub fn dispatch(&mut self, action: A) -> Transition<E> {
        match &mut self.middleware {
            Some(middleware) => {
                middleware.before(&action);
                let transition = (self.reducer)(&mut self.state, action.clone());
                middleware.after(&action, transition.changed);
                transition
            }
            None => (self.reducer)(&mut self.state, action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Bump,
        Emit,
        NoOp,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Bump => "Bump",
                TestAction::Emit => "Emit",
                TestAction::NoOp => "NoOp",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestEffect {
        Ping,
    }

    #[derive(Default)]
    struct TestState {
        count: i32,
    }

    fn reducer(state: &mut TestState, action: TestAction) -> Transition<TestEffect> {
        match action {
            TestAction::Bump => {
                state.count += 1;
                Transition::changed()
            }
            TestAction::Emit => Transition::changed_with(TestEffect::Ping),
            TestAction::NoOp => Transition::unchanged(),
        }
    }

    #[test]
    fn test_dispatch_reduces_and_reports_effects() {
        let mut store = Store::new(TestState::default(), reducer);

        let transition = store.dispatch(TestAction::Bump);
        assert!(transition.changed);
        assert!(!transition.has_effects());
        assert_eq!(store.state().count, 1);

        let transition = store.dispatch(TestAction::Emit);
        assert_eq!(transition.effects, vec![TestEffect::Ping]);

        let transition = store.dispatch(TestAction::NoOp);
        assert!(!transition.changed);
        assert_eq!(store.state().count, 1);
    }

    #[test]
    fn test_transition_builders() {
        let t: Transition<TestEffect> = Transition::unchanged();
        assert!(!t.changed && t.effects.is_empty());

        let t: Transition<TestEffect> = Transition::changed().with(TestEffect::Ping);
        assert!(t.changed);
        assert_eq!(t.effects.len(), 1);

        let t: Transition<TestEffect> = Transition::default();
        assert!(!t.changed);
    }

    #[derive(Default)]
    struct Counting {
        seen: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl Middleware<TestAction> for Counting {
        fn before(&mut self, _action: &TestAction) {
            self.seen.set(self.seen.get() + 1);
        }

        fn after(&mut self, _action: &TestAction, _changed: bool) {}
    }

    #[test]
    fn test_middleware_sees_every_action() {
        let seen = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut store = Store::new(TestState::default(), reducer)
            .with_middleware(Counting { seen: seen.clone() });

        store.dispatch(TestAction::Bump);
        store.dispatch(TestAction::NoOp);
        assert_eq!(seen.get(), 2);
    }
}
