//! ChangeHub: address-keyed observer registry with a dispatcher thread
//!
//! Observers register on an address and are told when data at that
//! address, or anywhere underneath it, changes. Events carry no
//! payload, only "something changed here"; observers re-query to
//! refresh. A single FIFO queue and a single dispatcher thread preserve
//! per-address delivery order.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use parking_lot::{Condvar, Mutex};
use tracing::error;

/// A registered listener interested in data changes at an address
pub trait Observer: Send + Sync {
    /// Called on the dispatcher thread after data at `address` changed
    fn on_change(&self, address: &str);
}

struct Registration {
    id: u64,
    address: String,
    active: Arc<AtomicBool>,
    observer: Arc<dyn Observer>,
}

struct HubInner {
    queue: Mutex<VecDeque<String>>,
    work_ready: Condvar,
    drain_cond: Condvar,
    delivering: AtomicBool,
    shutdown: AtomicBool,
    registry: Mutex<Vec<Registration>>,
    next_id: AtomicU64,
}

/// Process-wide change-notification registry
///
/// One hub serves one directory instance. `notify` enqueues and returns
/// immediately; delivery happens on the hub's own dispatcher thread, so
/// a slow observer delays other observers at worst, never the mutating
/// operation that triggered the notification.
pub struct ChangeHub {
    inner: Arc<HubInner>,
    dispatcher: Mutex<Option<JoinHandle<()>>>,
}

impl ChangeHub {
    /// Create a hub and spawn its dispatcher thread
    pub fn new() -> Self {
        let inner = Arc::new(HubInner {
            queue: Mutex::new(VecDeque::new()),
            work_ready: Condvar::new(),
            drain_cond: Condvar::new(),
            delivering: AtomicBool::new(false),
            shutdown: AtomicBool::new(false),
            registry: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        });

        let inner_clone = Arc::clone(&inner);
        let handle = std::thread::Builder::new()
            .name("rolodex-notify".to_string())
            .spawn(move || dispatch_loop(&inner_clone))
            .expect("failed to spawn notification dispatcher thread");

        Self {
            inner,
            dispatcher: Mutex::new(Some(handle)),
        }
    }

    /// Register an observer on an address
    ///
    /// The observer hears changes at `address` and at any descendant
    /// address. Registration lasts until the returned [`Subscription`]
    /// is cancelled or dropped.
    pub fn subscribe(
        &self,
        address: impl Into<String>,
        observer: Arc<dyn Observer>,
    ) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let active = Arc::new(AtomicBool::new(true));

        self.inner.registry.lock().push(Registration {
            id,
            address: address.into(),
            active: Arc::clone(&active),
            observer,
        });

        Subscription {
            id,
            active,
            hub: Arc::clone(&self.inner),
        }
    }

    /// Announce that data at `address` changed
    ///
    /// Fire-and-forget: enqueues the event and returns without waiting
    /// for delivery. Events fired after shutdown are dropped.
    pub fn notify(&self, address: impl Into<String>) {
        if self.inner.shutdown.load(Ordering::Acquire) {
            return;
        }
        {
            let mut queue = self.inner.queue.lock();
            queue.push_back(address.into());
        }
        self.inner.work_ready.notify_one();
    }

    /// Block until every queued event has been delivered
    ///
    /// The dispatcher keeps running afterwards; this does not shut the
    /// hub down.
    pub fn drain(&self) {
        let mut queue = self.inner.queue.lock();
        while !queue.is_empty() || self.inner.delivering.load(Ordering::Acquire) {
            self.inner.drain_cond.wait(&mut queue);
        }
    }

    /// Number of live registrations
    pub fn observer_count(&self) -> usize {
        self.inner.registry.lock().len()
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChangeHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeHub")
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}

impl Drop for ChangeHub {
    fn drop(&mut self) {
        self.inner.shutdown.store(true, Ordering::Release);

        // Lock the queue before notifying to prevent lost-wakeup: the
        // dispatcher between its shutdown check and condvar wait holds
        // this lock, so acquiring it guarantees it is either already in
        // wait() (and our notify will wake it) or will re-check the flag.
        {
            let _queue = self.inner.queue.lock();
            self.inner.work_ready.notify_all();
        }

        if let Some(handle) = self.dispatcher.lock().take() {
            let _ = handle.join();
        }
    }
}

/// Handle to a live observer registration
///
/// Cancelling (or dropping) removes the registration from the hub; the
/// observer receives nothing afterwards, including events that were
/// already queued when it cancelled.
pub struct Subscription {
    id: u64,
    active: Arc<AtomicBool>,
    hub: Arc<HubInner>,
}

impl Subscription {
    /// Deregister the observer
    ///
    /// Idempotent; safe to call while a notification is in flight.
    pub fn cancel(&self) {
        self.active.store(false, Ordering::Release);
        self.hub.registry.lock().retain(|r| r.id != self.id);
    }

    /// True until `cancel` is called (or the subscription is dropped)
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn covers(registered: &str, changed: &str) -> bool {
    changed == registered
        || (changed.len() > registered.len()
            && changed.starts_with(registered)
            && changed.as_bytes()[registered.len()] == b'/')
}

fn dispatch_loop(inner: &HubInner) {
    loop {
        let address = {
            let mut queue = inner.queue.lock();
            loop {
                if let Some(address) = queue.pop_front() {
                    inner.delivering.store(true, Ordering::Release);
                    break address;
                }
                if inner.shutdown.load(Ordering::Acquire) {
                    return;
                }
                inner.work_ready.wait(&mut queue);
            }
        };

        // Snapshot the targets, then deliver outside the registry lock so
        // an observer may subscribe/cancel from its callback.
        let targets: Vec<(Arc<AtomicBool>, Arc<dyn Observer>)> = {
            let registry = inner.registry.lock();
            registry
                .iter()
                .filter(|r| covers(&r.address, &address))
                .map(|r| (Arc::clone(&r.active), Arc::clone(&r.observer)))
                .collect()
        };

        for (active, observer) in targets {
            // Liveness is re-checked per event: a subscription cancelled
            // after this event was queued stays silent.
            if !active.load(Ordering::Acquire) {
                continue;
            }
            let addr = address.as_str();
            if let Err(e) =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| observer.on_change(addr)))
            {
                error!(
                    "observer panicked: {:?}",
                    e.downcast_ref::<&str>().copied().unwrap_or("(non-string panic)")
                );
            }
        }

        inner.delivering.store(false, Ordering::Release);
        let queue = inner.queue.lock();
        if queue.is_empty() {
            inner.drain_cond.notify_all();
        }
    }
}
