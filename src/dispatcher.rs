//! Synchronous publish/subscribe registry.
//!
//! Handlers are kept per event-type key in registration order. `notify`
//! runs every handler for the event's key on the caller's thread before
//! returning. There is no locking: share a dispatcher across threads by
//! wrapping it (`Mutex<EventDispatcher>`) or by confining it to one owner.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::DispatchError;
use crate::event::Event;
use crate::handler::{same_handler, HandlerRef};

#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<HandlerRef>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the list for `event_type`, creating the key if absent.
    ///
    /// The same handler may be registered more than once; it is then
    /// invoked once per registration.
    pub fn register(&mut self, event_type: impl Into<String>, handler: HandlerRef) {
        let event_type = event_type.into();
        let list = self.handlers.entry(event_type.clone()).or_default();
        list.push(handler);
        debug!(event_type = %event_type, handlers = list.len(), "handler registered");
    }

    /// Remove the first registration of `handler` under `event_type`.
    ///
    /// Unknown keys and handlers are ignored. The key stays present even
    /// when its last handler is removed.
    pub fn unregister(&mut self, event_type: &str, handler: &HandlerRef) {
        let Some(list) = self.handlers.get_mut(event_type) else {
            trace!(event_type, "unregister on unknown event type");
            return;
        };

        match list.iter().position(|h| same_handler(h, handler)) {
            Some(index) => {
                list.remove(index);
                debug!(event_type, handlers = list.len(), "handler unregistered");
            }
            None => trace!(event_type, "unregister of a handler that is not registered"),
        }
    }

    /// Drop every key and every handler.
    pub fn unregister_all(&mut self) {
        let keys = self.handlers.len();
        self.handlers.clear();
        debug!(keys, "all handlers unregistered");
    }

    /// Invoke every handler registered for the event's type, in order.
    ///
    /// Stops at the first handler that returns an error and returns it;
    /// later handlers are not invoked. No handlers registered is not an error.
    pub fn notify(&self, event: &dyn Event) -> Result<(), DispatchError> {
        let event_type = event.event_type();
        let Some(list) = self.handlers.get(event_type) else {
            trace!(event_type, "no handlers registered");
            return Ok(());
        };

        for (position, handler) in list.iter().enumerate() {
            trace!(event_type, position, "invoking handler");
            if let Err(source) = handler.handle(event) {
                warn!(event_type, position, error = %source, "handler failed, aborting dispatch");
                return Err(DispatchError::Handler {
                    event_type: event_type.to_string(),
                    position,
                    source,
                });
            }
        }

        Ok(())
    }

    /// The live registry, keyed by event type.
    pub fn get_event_handlers(&self) -> &HashMap<String, Vec<HandlerRef>> {
        &self.handlers
    }

    /// `None` if the key was never registered (or was cleared by
    /// [`unregister_all`](Self::unregister_all)); `Some(&[])` if it is
    /// known but currently has no handlers.
    pub fn handlers(&self, event_type: &str) -> Option<&[HandlerRef]> {
        self.handlers.get(event_type).map(Vec::as_slice)
    }

    /// Whether `handler` is currently registered under `event_type`.
    pub fn contains(&self, event_type: &str, handler: &HandlerRef) -> bool {
        self.handlers(event_type)
            .is_some_and(|list| list.iter().any(|h| same_handler(h, handler)))
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event_type, list) in &self.handlers {
            map.entry(event_type, &list.len());
        }
        map.finish()
    }
}
