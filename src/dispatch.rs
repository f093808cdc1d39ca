//! Fan-out of key events to the registered listeners.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use tracing::{trace, warn};

use crate::event::{DownState, KeyEvent};

/// Whether an event should continue to other applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    #[default]
    Continue,
    /// Ask the key server to swallow the event.
    Stop,
}

impl From<bool> for Propagation {
    fn from(stop: bool) -> Self {
        if stop {
            Propagation::Stop
        } else {
            Propagation::Continue
        }
    }
}

impl From<()> for Propagation {
    fn from(_: ()) -> Self {
        Propagation::Continue
    }
}

/// Receives every key event the bridge decodes.
///
/// Implemented for any `Fn(&KeyEvent, &DownState) -> R` where `R` is `bool`, `()` or
/// [`Propagation`].
pub trait KeyEventHandler: Send + Sync {
    fn handle_event(&self, event: &KeyEvent, down: &DownState) -> Propagation;
}

impl<F, R> KeyEventHandler for F
where
    F: Fn(&KeyEvent, &DownState) -> R + Send + Sync,
    R: Into<Propagation>,
{
    fn handle_event(&self, event: &KeyEvent, down: &DownState) -> Propagation {
        self(event, down).into()
    }
}

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// The result of invoking one listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerOutcome {
    Returned(Propagation),
    /// The listener panicked; the payload message, if it had one.
    Panicked(String),
}

/// Combine the outcomes of every listener for one event.
///
/// The event is suppressed if any listener asked for it. Failed listeners do not count.
pub fn aggregate(outcomes: &[ListenerOutcome]) -> Propagation {
    let stop = outcomes
        .iter()
        .any(|o| matches!(o, ListenerOutcome::Returned(Propagation::Stop)));

    Propagation::from(stop)
}

type Listener = (ListenerId, Arc<dyn KeyEventHandler>);

/// Owns the listener list and the down-state map for one bridge.
#[derive(Default)]
pub(crate) struct Dispatcher {
    listeners: RwLock<Vec<Listener>>,
    down: Mutex<DownState>,
    next_id: AtomicU64,
}

impl Dispatcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&self, handler: Arc<dyn KeyEventHandler>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));

        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, handler));

        id
    }

    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();

        listeners.retain(|(other, _)| *other != id);

        listeners.len() != before
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub(crate) fn down_state(&self) -> DownState {
        self.lock_down().clone()
    }

    /// Record `event` in the down-state map, then invoke every listener in registration order.
    ///
    /// Every listener runs, even after one has asked for suppression. A panicking listener does
    /// not stop the ones after it.
    pub(crate) fn dispatch(&self, event: &KeyEvent) -> Propagation {
        // Snapshot so listeners may register or remove listeners while being invoked.
        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        // Listeners get a snapshot so they may call back into the bridge without deadlocking.
        let down = {
            let mut down = self.lock_down();
            down.apply(event);
            down.clone()
        };

        let outcomes = listeners
            .iter()
            .map(|(id, handler)| invoke(*id, handler.as_ref(), event, &down))
            .collect::<Vec<_>>();

        let propagation = aggregate(&outcomes);
        trace!(key = %event.name, state = ?event.state, ?propagation, "dispatched");

        propagation
    }

    fn lock_down(&self) -> MutexGuard<'_, DownState> {
        self.down.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listeners", &self.listener_count())
            .field("down", &*self.lock_down())
            .finish()
    }
}

fn invoke(
    id: ListenerId,
    handler: &dyn KeyEventHandler,
    event: &KeyEvent,
    down: &DownState,
) -> ListenerOutcome {
    match panic::catch_unwind(AssertUnwindSafe(|| handler.handle_event(event, down))) {
        Ok(propagation) => ListenerOutcome::Returned(propagation),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(listener = ?id, key = %event.name, %message, "listener panicked");
            ListenerOutcome::Panicked(message)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::key_event;
    use crate::event::KeyState;
    use crate::key::CanonicalKey;
    use crate::keymap::WINDOWS;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl Fn(&KeyEvent, &DownState) -> bool) {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        (calls, move |_: &KeyEvent, _: &DownState| {
            seen.fetch_add(1, Ordering::SeqCst);
            false
        })
    }

    #[test]
    fn aggregate_is_any_stop() {
        use ListenerOutcome::*;

        assert_eq!(aggregate(&[]), Propagation::Continue);
        assert_eq!(aggregate(&[Returned(Propagation::Continue)]), Propagation::Continue);
        assert_eq!(aggregate(&[Returned(Propagation::Stop)]), Propagation::Stop);
        assert_eq!(
            aggregate(&[
                Returned(Propagation::Continue),
                Panicked("boom".into()),
                Returned(Propagation::Stop),
                Returned(Propagation::Continue),
            ]),
            Propagation::Stop
        );
        assert_eq!(
            aggregate(&[Panicked("boom".into()), Returned(Propagation::Continue)]),
            Propagation::Continue
        );
    }

    #[test]
    fn no_listeners_means_continue() {
        let dispatcher = Dispatcher::new();

        assert_eq!(
            dispatcher.dispatch(&key_event(&WINDOWS, 0x41, KeyState::Down)),
            Propagation::Continue
        );
    }

    #[test]
    fn every_listener_runs_after_a_stop() {
        let dispatcher = Dispatcher::new();
        let (before, first) = counter();
        let (after, last) = counter();

        dispatcher.add(Arc::new(first));
        dispatcher.add(Arc::new(|_: &KeyEvent, _: &DownState| true));
        dispatcher.add(Arc::new(last));

        let propagation = dispatcher.dispatch(&key_event(&WINDOWS, 0x41, KeyState::Down));

        assert_eq!(propagation, Propagation::Stop);
        assert_eq!(before.load(Ordering::SeqCst), 1);
        assert_eq!(after.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn a_panicking_listener_is_isolated() {
        let dispatcher = Dispatcher::new();
        let (calls, last) = counter();

        dispatcher.add(Arc::new(|_: &KeyEvent, _: &DownState| -> bool {
            panic!("listener failure")
        }));
        dispatcher.add(Arc::new(last));

        let propagation = dispatcher.dispatch(&key_event(&WINDOWS, 0x41, KeyState::Down));

        assert_eq!(propagation, Propagation::Continue);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // The bridge keeps working for later events.
        dispatcher.dispatch(&key_event(&WINDOWS, 0x41, KeyState::Up));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let dispatcher = Dispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for n in 0..4 {
            let order = Arc::clone(&order);
            dispatcher.add(Arc::new(move |_: &KeyEvent, _: &DownState| {
                order.lock().unwrap().push(n);
            }));
        }

        dispatcher.dispatch(&key_event(&WINDOWS, 0x20, KeyState::Down));

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn listeners_see_the_state_including_the_current_event() {
        let dispatcher = Dispatcher::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        dispatcher.add(Arc::new(move |event: &KeyEvent, down: &DownState| {
            sink.lock()
                .unwrap()
                .push((event.name, down.is_down(CanonicalKey::LeftShift)));
        }));

        dispatcher.dispatch(&key_event(&WINDOWS, 0xA0, KeyState::Down));
        dispatcher.dispatch(&key_event(&WINDOWS, 0x41, KeyState::Down));
        dispatcher.dispatch(&key_event(&WINDOWS, 0xA0, KeyState::Up));

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (CanonicalKey::LeftShift, true),
                (CanonicalKey::A, true),
                (CanonicalKey::LeftShift, false),
            ]
        );
        assert!(dispatcher.down_state().is_down(CanonicalKey::A));
    }

    #[test]
    fn removed_listeners_are_not_invoked() {
        let dispatcher = Dispatcher::new();
        let (calls, listener) = counter();

        let id = dispatcher.add(Arc::new(listener));
        assert!(dispatcher.remove(id));
        assert!(!dispatcher.remove(id));

        dispatcher.dispatch(&key_event(&WINDOWS, 0x41, KeyState::Down));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(dispatcher.listener_count(), 0);
    }

    #[test]
    fn listeners_may_register_listeners() {
        let dispatcher = Arc::new(Dispatcher::new());
        let inner = Arc::clone(&dispatcher);

        dispatcher.add(Arc::new(move |_: &KeyEvent, _: &DownState| {
            inner.add(Arc::new(|_: &KeyEvent, _: &DownState| false));
        }));

        dispatcher.dispatch(&key_event(&WINDOWS, 0x41, KeyState::Down));

        assert_eq!(dispatcher.listener_count(), 2);
    }
}
