//! # Event registry - named handler storage and dispatch.
//!
//! [`Registry`] maps event names to an ordered set of [`Listener`]s that all
//! share one [`Signature`]. Handlers are registered with [`Registry::on`] and
//! invoked with [`Registry::fire`] (synchronous, ordered) or
//! [`Registry::fire_background`] (concurrent, unordered).
//!
//! ## Architecture
//! ```text
//! on(event, handler)
//!   └─► lock ─► events[event] ─┬─ new       → HandlerSet { signature, [listener] }
//!                              ├─ same sig  → push(listener)
//!                              └─ other sig → unlock, panic!
//!
//! fire(event, args)
//!   ├─► lock ─► clone listeners ─► unlock
//!   ├─► check every listener's signature against args (panic on mismatch)
//!   └─► listener1.call(args) → listener2.call(args) → ... (caller's thread)
//!
//! fire_background(event, args)
//!   ├─► same lookup and checks as fire
//!   └─► Dispatcher::launch() per listener (blocking pool, tracked)
//! ```
//!
//! ## Rules
//! - The map lock is **never** held while handler code runs; handlers may call
//!   back into the registry.
//! - Insertion order is fire order for [`Registry::fire`].
//! - Signature and argument mismatches are contract violations: they **panic**
//!   (after releasing the lock) instead of returning an error.
//! - All argument checks finish before the first handler runs.

use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::builder::RegistryBuilder;
use super::dispatch::Dispatcher;
use crate::config::Config;
use crate::error::TriggerError;
use crate::handlers::{ArgMismatch, Args, Handler, Listener, Signature};

/// Handlers registered under one event name.
struct HandlerSet {
    /// Signature of the first handler; every later one must match.
    signature: Signature,
    listeners: Vec<Listener>,
}

/// Thread-safe registry of named event handlers.
pub struct Registry {
    events: Mutex<HashMap<String, HandlerSet>>,
    dispatcher: Dispatcher,
    cfg: Config,
}

impl Registry {
    /// Creates an empty registry with the default [`Config`].
    #[must_use]
    pub fn new() -> Self {
        Self::builder(Config::default()).build()
    }

    /// Returns a builder for a registry with custom settings.
    #[must_use]
    pub fn builder(cfg: Config) -> RegistryBuilder {
        RegistryBuilder::new(cfg)
    }

    pub(crate) fn from_parts(cfg: Config, dispatcher: Dispatcher) -> Self {
        Self {
            events: Mutex::new(HashMap::new()),
            dispatcher,
            cfg,
        }
    }

    /// Registers `handler` for `event`.
    ///
    /// The first handler fixes the event's signature.
    ///
    /// # Errors
    /// [`TriggerError::EmptyEventName`] if `event` is empty.
    ///
    /// # Panics
    /// If `event` already has handlers with a different signature.
    ///
    /// # Example
    /// ```
    /// let reg = trigger::Registry::new();
    /// reg.on("greet", |name: &str| println!("hello {name}")).unwrap();
    /// assert!(reg.has_event("greet"));
    /// ```
    pub fn on<H, P>(&self, event: &str, handler: H) -> Result<(), TriggerError>
    where
        H: Handler<P>,
    {
        self.insert(event, Listener::new(handler))
    }

    /// Registers a type-erased handler.
    ///
    /// `value` must hold a [`Listener`]; anything else is rejected.
    ///
    /// # Errors
    /// [`TriggerError::InvalidHandlerKind`] if `value` is not a `Listener`,
    /// [`TriggerError::EmptyEventName`] if `event` is empty.
    ///
    /// # Panics
    /// Same as [`Registry::on`].
    pub fn on_any(&self, event: &str, value: Box<dyn Any + Send + Sync>) -> Result<(), TriggerError> {
        let listener = value
            .downcast::<Listener>()
            .map_err(|_| TriggerError::InvalidHandlerKind)?;
        self.insert(event, *listener)
    }

    fn insert(&self, event: &str, listener: Listener) -> Result<(), TriggerError> {
        if event.is_empty() {
            return Err(TriggerError::EmptyEventName);
        }

        let outcome = {
            let mut events = self.events.lock();
            match events.entry(event.to_owned()) {
                Entry::Occupied(mut slot) => {
                    let set = slot.get_mut();
                    if set.signature == *listener.signature() {
                        set.listeners.push(listener);
                        Ok(set.listeners.len())
                    } else {
                        Err((listener, set.signature.clone()))
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(HandlerSet {
                        signature: listener.signature().clone(),
                        listeners: vec![listener],
                    });
                    Ok(1)
                }
            }
        };

        match outcome {
            Ok(handlers) => {
                debug!(event = %event, handlers, "listener registered");
                Ok(())
            }
            Err((listener, previous)) => panic!(
                "could not register \"{}\" event listener as {} previously registered as {}",
                event,
                listener.signature(),
                previous
            ),
        }
    }

    /// Invokes every handler of `event` on the calling thread, in registration
    /// order, and returns once all of them have returned.
    ///
    /// # Errors
    /// [`TriggerError::EventNotFound`] if nothing is registered for `event`.
    ///
    /// # Panics
    /// If the arguments do not fit the event's signature, or if a handler panics.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let reg = trigger::Registry::new();
    /// let seen = Arc::new(AtomicUsize::new(0));
    /// let s = seen.clone();
    /// reg.on("add", move |n: usize| { s.fetch_add(n, Ordering::SeqCst); }).unwrap();
    ///
    /// reg.fire("add", (3_usize,)).unwrap();
    /// assert_eq!(seen.load(Ordering::SeqCst), 3);
    /// ```
    pub fn fire(&self, event: &str, args: impl Into<Args>) -> Result<(), TriggerError> {
        let args = args.into();
        let listeners = self.read(event, &args)?;

        debug!(event = %event, handlers = listeners.len(), "firing event");
        for listener in &listeners {
            listener.call(&args);
        }
        Ok(())
    }

    /// Launches every handler of `event` as an independent background task and
    /// returns without waiting for any of them.
    ///
    /// Handlers run on the tokio blocking pool of the configured runtime (see
    /// [`RegistryBuilder::with_runtime`]) or of the ambient one. A panicking
    /// handler is logged and otherwise ignored.
    ///
    /// # Errors
    /// [`TriggerError::EventNotFound`] if nothing is registered for `event`,
    /// [`TriggerError::RuntimeUnavailable`] if there is no runtime to launch on.
    ///
    /// # Panics
    /// If the arguments do not fit the event's signature (checked before
    /// anything is launched).
    pub fn fire_background(&self, event: &str, args: impl Into<Args>) -> Result<(), TriggerError> {
        let args = args.into();
        let listeners = self.read(event, &args)?;
        let runtime = self.dispatcher.runtime()?;

        debug!(event = %event, handlers = listeners.len(), "firing event in background");
        let name: Arc<str> = Arc::from(event);
        for listener in listeners {
            self.dispatcher
                .launch(&runtime, Arc::clone(&name), listener, args.clone());
        }
        Ok(())
    }

    /// Removes `event` and all of its handlers.
    ///
    /// # Errors
    /// [`TriggerError::EventNotFound`] if `event` is not registered.
    pub fn clear(&self, event: &str) -> Result<(), TriggerError> {
        let removed = self.events.lock().remove(event);
        match removed {
            Some(set) => {
                debug!(event = %event, handlers = set.listeners.len(), "event cleared");
                Ok(())
            }
            None => Err(TriggerError::EventNotFound {
                event: event.to_owned(),
            }),
        }
    }

    /// Removes every event.
    pub fn clear_events(&self) {
        let removed = std::mem::take(&mut *self.events.lock());
        debug!(events = removed.len(), "all events cleared");
    }

    /// Returns `true` if `event` has at least one handler.
    pub fn has_event(&self, event: &str) -> bool {
        self.events.lock().contains_key(event)
    }

    /// Snapshot of event name → rendered signature (e.g. `fn(&str)`).
    pub fn events(&self) -> HashMap<String, String> {
        let events = self.events.lock();
        events
            .iter()
            .map(|(name, set)| (name.clone(), set.signature.to_string()))
            .collect()
    }

    /// Number of distinct registered events.
    pub fn event_count(&self) -> usize {
        self.events.lock().len()
    }

    /// Number of handlers registered for `event` (0 if none).
    pub fn handler_count(&self, event: &str) -> usize {
        self.events
            .lock()
            .get(event)
            .map_or(0, |set| set.listeners.len())
    }

    /// Recorded signature of `event`, if registered.
    pub fn signature(&self, event: &str) -> Option<Signature> {
        self.events.lock().get(event).map(|set| set.signature.clone())
    }

    /// Background handler tasks launched by this registry that are still running.
    pub fn pending_background(&self) -> usize {
        self.dispatcher.pending()
    }

    /// Waits for every background handler launched so far, up to [`Config::grace`].
    ///
    /// The registry stays fully usable afterwards. Returns immediately when no
    /// handler is pending; concurrent calls are served one at a time.
    ///
    /// # Errors
    /// [`TriggerError::GraceExceeded`] if handlers were still running when the
    /// grace period ran out.
    ///
    /// # Panics
    /// If handlers are pending, the grace is non-zero and the runtime driving
    /// this future was built without the time driver (`enable_time`).
    pub async fn shutdown(&self) -> Result<(), TriggerError> {
        self.dispatcher.wait(self.cfg.shutdown_grace()).await
    }

    /// Settings this registry was built with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Clones the listeners of `event` under the lock, then validates `args`
    /// against each of them with the lock released.
    fn read(&self, event: &str, args: &Args) -> Result<Vec<Listener>, TriggerError> {
        let listeners = {
            let events = self.events.lock();
            events.get(event).map(|set| set.listeners.clone())
        };

        let listeners = listeners.ok_or_else(|| TriggerError::EventNotFound {
            event: event.to_owned(),
        })?;

        for listener in &listeners {
            if let Err(mismatch) = listener.signature().check(args) {
                contract_violation(event, mismatch);
            }
        }
        Ok(listeners)
    }
}

fn contract_violation(event: &str, mismatch: ArgMismatch) -> ! {
    match mismatch {
        ArgMismatch::Count { required, got } => panic!(
            "parameters count mismatched for event \"{event}\" required {required} got {got}"
        ),
        ArgMismatch::Type {
            index,
            required,
            got,
        } => panic!(
            "argument {index} mismatched for event \"{event}\" required {required} got {got}"
        ),
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("events", &self.event_count())
            .field("pending_background", &self.pending_background())
            .field("cfg", &self.cfg)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::time::Duration;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (log.clone(), log)
    }

    #[test]
    fn test_fire_invokes_once_with_args() {
        let reg = Registry::new();
        let (log, seen) = recorder();
        reg.on("greet", move |name: &str| log.lock().push(name.to_string()))
            .unwrap();

        reg.fire("greet", ("Ada",)).unwrap();
        assert_eq!(*seen.lock(), vec!["Ada".to_string()]);
    }

    #[test]
    fn test_fire_preserves_registration_order() {
        let reg = Registry::new();
        let (log_a, seen) = recorder();
        let log_b = log_a.clone();
        reg.on("greet", move |name: &str| log_a.lock().push(format!("a:{name}")))
            .unwrap();
        reg.on("greet", move |name: &str| log_b.lock().push(format!("b:{name}")))
            .unwrap();

        reg.fire("greet", crate::args!["Ada"]).unwrap();
        assert_eq!(*seen.lock(), vec!["a:Ada", "b:Ada"]);
        assert_eq!(reg.handler_count("greet"), 2);
    }

    #[test]
    fn test_multiple_arguments_and_discarded_return() {
        let reg = Registry::new();
        let total = Arc::new(AtomicUsize::new(0));
        let t = total.clone();
        reg.on("sum", move |a: usize, b: usize, c: usize| {
            t.fetch_add(a + b + c, Ordering::SeqCst);
            a + b + c
        })
        .unwrap();

        reg.fire("sum", (1_usize, 2_usize, 3_usize)).unwrap();
        assert_eq!(total.load(Ordering::SeqCst), 6);
        assert_eq!(
            reg.events().get("sum").map(String::as_str),
            Some("fn(usize, usize, usize) -> usize")
        );
    }

    #[test]
    fn test_fire_unknown_event() {
        let reg = Registry::new();
        let err = reg.fire("missing", ()).unwrap_err();
        assert_eq!(
            err,
            TriggerError::EventNotFound {
                event: "missing".into()
            }
        );
    }

    #[test]
    fn test_clear_removes_event() {
        let reg = Registry::new();
        reg.on("tick", || {}).unwrap();
        assert!(reg.has_event("tick"));

        reg.clear("tick").unwrap();
        assert!(!reg.has_event("tick"));
        assert!(reg.fire("tick", ()).unwrap_err().is_not_found());
        assert!(reg.clear("tick").unwrap_err().is_not_found());
    }

    #[test]
    fn test_clear_events_empties_registry() {
        let reg = Registry::new();
        reg.on("a", || {}).unwrap();
        reg.on("b", |_: u8| {}).unwrap();
        assert_eq!(reg.event_count(), 2);

        reg.clear_events();
        assert_eq!(reg.event_count(), 0);
        assert!(reg.events().is_empty());
    }

    #[test]
    fn test_events_snapshot_matches_count() {
        let reg = Registry::new();
        reg.on("greet", |_: &str| {}).unwrap();
        reg.on("greet", |_: &str| {}).unwrap();
        reg.on("tick", || {}).unwrap();

        let snapshot = reg.events();
        assert_eq!(snapshot.len(), reg.event_count());
        assert_eq!(snapshot["greet"], "fn(&str)");
        assert_eq!(snapshot["tick"], "fn()");
        assert_eq!(reg.signature("greet").map(|sig| sig.arity()), Some(1));
        assert!(reg.signature("nope").is_none());

        reg.clear("tick").unwrap();
        assert!(snapshot.contains_key("tick"), "snapshot is not a live view");
    }

    #[test]
    fn test_empty_event_name_rejected() {
        let reg = Registry::new();
        assert_eq!(reg.on("", || {}), Err(TriggerError::EmptyEventName));
        assert_eq!(reg.event_count(), 0);
    }

    #[test]
    fn test_on_any_accepts_listener_only() {
        let reg = Registry::new();
        let not_callable: Box<dyn Any + Send + Sync> = Box::new(42_u32);
        assert_eq!(
            reg.on_any("greet", not_callable),
            Err(TriggerError::InvalidHandlerKind)
        );
        assert!(!reg.has_event("greet"));

        let listener = Listener::new(|_: &str| {});
        reg.on_any("greet", Box::new(listener)).unwrap();
        reg.on("greet", |_: &str| {}).unwrap();
        assert_eq!(reg.handler_count("greet"), 2);
    }

    #[test]
    #[should_panic(
        expected = "could not register \"greet\" event listener as fn(i32) previously registered as fn(&str)"
    )]
    fn test_register_signature_mismatch_panics() {
        let reg = Registry::new();
        reg.on("greet", |_: &str| {}).unwrap();
        let _ = reg.on("greet", |_: i32| {});
    }

    #[test]
    #[should_panic(expected = "previously registered as fn(&str)")]
    fn test_register_return_type_mismatch_panics() {
        let reg = Registry::new();
        reg.on("greet", |_: &str| {}).unwrap();
        let _ = reg.on("greet", |_: &str| true);
    }

    #[test]
    #[should_panic(expected = "parameters count mismatched for event \"greet\" required 1 got 2")]
    fn test_fire_count_mismatch_panics() {
        let reg = Registry::new();
        reg.on("greet", |_: &str| {}).unwrap();
        let _ = reg.fire("greet", ("Ada", "Lovelace"));
    }

    #[test]
    #[should_panic(expected = "argument 0 mismatched for event \"greet\" required &str got i32")]
    fn test_fire_type_mismatch_panics() {
        let reg = Registry::new();
        reg.on("greet", |_: &str| {}).unwrap();
        let _ = reg.fire("greet", (7_i32,));
    }

    #[test]
    fn test_mismatch_runs_no_handler_and_releases_lock() {
        let reg = Registry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        reg.on("greet", move |_: &str| {
            c.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        let fired = catch_unwind(AssertUnwindSafe(|| reg.fire("greet", ())));
        assert!(fired.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let registered = catch_unwind(AssertUnwindSafe(|| reg.on("greet", || {})));
        assert!(registered.is_err());

        reg.fire("greet", ("Ada",)).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(reg.handler_count("greet"), 1);
    }

    #[test]
    fn test_handler_may_reenter_registry() {
        let reg = Arc::new(Registry::new());
        let inner = Arc::clone(&reg);
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();

        reg.on("leaf", move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        reg.on("root", move || {
            inner.on("late", || {}).unwrap();
            inner.fire("leaf", ()).unwrap();
            inner.clear("late").unwrap();
        })
        .unwrap();

        reg.fire("root", ()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!reg.has_event("late"));
    }

    #[test]
    fn test_fire_background_without_runtime() {
        let reg = Registry::new();
        reg.on("tick", || {}).unwrap();
        assert_eq!(
            reg.fire_background("tick", ()),
            Err(TriggerError::RuntimeUnavailable)
        );
        assert!(reg.fire_background("missing", ()).unwrap_err().is_not_found());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_fire_background_returns_before_completion() {
        let reg = Registry::new();
        let gate = Arc::new(Barrier::new(2));
        let done = Arc::new(AtomicUsize::new(0));
        let (g, d) = (gate.clone(), done.clone());
        reg.on("greet", move |name: &str| {
            assert_eq!(name, "Ada");
            g.wait();
            d.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        reg.fire_background("greet", ("Ada",)).unwrap();
        assert_eq!(done.load(Ordering::SeqCst), 0);

        tokio::task::spawn_blocking(move || gate.wait())
            .await
            .unwrap();
        reg.shutdown().await.unwrap();
        assert_eq!(done.load(Ordering::SeqCst), 1);
        assert_eq!(reg.pending_background(), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_background_panic_is_isolated() {
        let reg = Registry::new();
        let done = Arc::new(AtomicUsize::new(0));
        let d = done.clone();
        reg.on("job", |n: u32| {
            if n > 0 {
                panic!("handler failed");
            }
        })
        .unwrap();
        reg.on("job", move |_: u32| {
            d.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        reg.fire_background("job", (1_u32,)).unwrap();
        reg.shutdown().await.unwrap();
        assert_eq!(done.load(Ordering::SeqCst), 1);

        reg.fire_background("job", (0_u32,)).unwrap();
        reg.shutdown().await.unwrap();
        assert_eq!(done.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_shutdown_grace_exceeded() {
        let reg = Registry::builder(Config {
            grace: Duration::from_millis(20),
        })
        .build();
        let gate = Arc::new(Barrier::new(2));
        let g = gate.clone();
        reg.on("slow", move || {
            g.wait();
        })
        .unwrap();

        reg.fire_background("slow", ()).unwrap();
        match reg.shutdown().await {
            Err(TriggerError::GraceExceeded { pending, .. }) => assert_eq!(pending, 1),
            other => panic!("unexpected shutdown result: {other:?}"),
        }

        tokio::task::spawn_blocking(move || gate.wait())
            .await
            .unwrap();
        tokio::time::timeout(Duration::from_secs(5), async {
            while reg.pending_background() > 0 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();
    }

    #[test]
    fn test_builder_with_runtime_outside_async_context() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let reg = Registry::builder(Config::default())
            .with_runtime(rt.handle().clone())
            .build();
        let done = Arc::new(AtomicUsize::new(0));
        let d = done.clone();
        reg.on("tick", move || {
            d.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        reg.fire_background("tick", ()).unwrap();
        rt.block_on(reg.shutdown()).unwrap();
        assert_eq!(done.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_shutdown_idle_on_runtime_without_timers() {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let reg = Registry::builder(Config::default())
            .with_runtime(rt.handle().clone())
            .build();
        reg.on("tick", || {}).unwrap();
        reg.fire("tick", ()).unwrap();

        assert_eq!(rt.block_on(reg.shutdown()), Ok(()));
        assert_eq!(reg.pending_background(), 0);
    }

    #[tokio::test]
    #[should_panic(expected = "parameters count mismatched for event \"greet\" required 1 got 0")]
    async fn test_fire_background_count_mismatch_panics() {
        let reg = Registry::new();
        reg.on("greet", |_: &str| {}).unwrap();
        let _ = reg.fire_background("greet", ());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_fire_background_mismatch_launches_nothing() {
        let reg = Registry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let (c1, c2) = (calls.clone(), calls.clone());
        reg.on("greet", move |_: &str| {
            c1.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        reg.on("greet", move |_: &str| {
            c2.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        let fired = catch_unwind(AssertUnwindSafe(|| reg.fire_background("greet", (7_i32,))));
        assert!(fired.is_err());
        assert_eq!(reg.pending_background(), 0);

        reg.shutdown().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_zero_grace_reports_pending_without_waiting() {
        let reg = Registry::builder(Config {
            grace: Duration::ZERO,
        })
        .build();
        let gate = Arc::new(Barrier::new(2));
        let g = gate.clone();
        reg.on("slow", move || {
            g.wait();
        })
        .unwrap();

        reg.fire_background("slow", ()).unwrap();
        assert_eq!(
            reg.shutdown().await,
            Err(TriggerError::GraceExceeded {
                grace: Duration::ZERO,
                pending: 1,
            })
        );

        tokio::task::spawn_blocking(move || gate.wait())
            .await
            .unwrap();
        tokio::time::timeout(Duration::from_secs(5), async {
            while reg.pending_background() > 0 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();
        assert_eq!(reg.shutdown().await, Ok(()));
    }

    #[test]
    fn test_concurrent_register_fire_clear() {
        let reg = Registry::new();
        let calls = AtomicUsize::new(0);

        std::thread::scope(|s| {
            for t in 0..8 {
                let reg = &reg;
                let calls = &calls;
                s.spawn(move || {
                    let own = format!("own-{t}");
                    for i in 0..200_usize {
                        reg.on("shared", |_: usize| {}).unwrap();
                        reg.on(&own, |_: usize| {}).unwrap();
                        if reg.fire("shared", (i,)).is_ok() {
                            calls.fetch_add(1, Ordering::Relaxed);
                        }
                        if i % 50 == 0 {
                            let _ = reg.clear("shared");
                        }
                        let _ = reg.events();
                        let _ = reg.event_count();
                    }
                    reg.fire(&own, (0_usize,)).unwrap();
                    assert_eq!(reg.handler_count(&own), 200);
                });
            }
        });

        assert!(calls.load(Ordering::Relaxed) > 0);
        for t in 0..8 {
            assert!(reg.has_event(&format!("own-{t}")));
        }
        let snapshot = reg.events();
        assert_eq!(snapshot.len(), reg.event_count());
        assert!(snapshot.values().all(|sig| sig == "fn(usize)"));
    }
}
