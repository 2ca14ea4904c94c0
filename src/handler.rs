use std::sync::Arc;

use crate::error::HandlerError;
use crate::event::Event;

/// Reaction logic subscribed to one or more event types.
///
/// Handlers run synchronously on the notifying thread, one after another.
/// Any state a handler keeps must use interior mutability since the
/// dispatcher only hands out `&self`.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &dyn Event) -> Result<(), HandlerError>;
}

/// A registered handler. Identity is the `Arc` allocation: clones of one
/// `HandlerRef` are the same handler, two separately built handlers are not.
pub type HandlerRef = Arc<dyn EventHandler>;

/// Whether `a` and `b` point at the same handler allocation.
pub(crate) fn same_handler(a: &HandlerRef, b: &HandlerRef) -> bool {
    // Compare data pointers only; vtable pointers are not guaranteed unique.
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

struct FnHandler<F>(F);

impl<F> EventHandler for FnHandler<F>
where
    F: Fn(&dyn Event) -> Result<(), HandlerError> + Send + Sync,
{
    fn handle(&self, event: &dyn Event) -> Result<(), HandlerError> {
        (self.0)(event)
    }
}

/// Wrap a closure as a handler.
///
/// ```
/// use domain_events::{handler_fn, Event, EventDispatcher};
///
/// let mut dispatcher = EventDispatcher::new();
/// dispatcher.register(
///     "CustomerCreatedEvent",
///     handler_fn(|event: &dyn Event| {
///         println!("{} at {}", event.event_type(), event.occurred_at());
///         Ok(())
///     }),
/// );
/// ```
pub fn handler_fn<F>(f: F) -> HandlerRef
where
    F: Fn(&dyn Event) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    Arc::new(FnHandler(f))
}
