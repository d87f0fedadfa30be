//! Build-context change notifications.
//!
//! Hosts deliver change notifications through an explicit registry:
//! listeners subscribe at startup and deregister at shutdown. Dispatch is
//! serial, in subscription order; the registry performs no internal
//! parallelism.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::context::{BuildContext, Project};

/// Receiver of build-context change notifications.
pub trait BuildContextListener: Send + Sync {
    /// Called after the host switched the active build configuration.
    fn build_context_changed(&self, project: &Project, context: &BuildContext);
}

/// Handle for a registered listener; pass back to
/// [`BuildContextEvents::unsubscribe`].
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
}

/// Registry of build-context change listeners.
pub struct BuildContextEvents {
    listeners: Mutex<Vec<(u64, Arc<dyn BuildContextListener>)>>,
    next_id: AtomicU64,
}

impl BuildContextEvents {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Register a listener; the returned handle deregisters it.
    pub fn subscribe(&self, listener: Arc<dyn BuildContextListener>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.lock().unwrap().push((id, listener));
        Subscription { id }
    }

    /// Remove a previously registered listener.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.listeners
            .lock()
            .unwrap()
            .retain(|(id, _)| *id != subscription.id);
    }

    /// Deliver one change notification to every listener, in subscription
    /// order.
    pub fn dispatch(&self, project: &Project, context: &BuildContext) {
        // Listeners run outside the lock so they may re-enter the registry.
        let listeners: Vec<_> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener.build_context_changed(project, context);
        }
    }
}

impl Default for BuildContextEvents {
    fn default() -> Self {
        Self::new()
    }
}
