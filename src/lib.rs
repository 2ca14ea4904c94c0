//! In-process domain event dispatcher.
//!
//! Producers build a [`DomainEvent`] and pass it to [`EventDispatcher::notify`];
//! every [`EventHandler`] registered under the event's type key runs
//! synchronously, in registration order.
//!
//! ```
//! use domain_events::{handler_fn, DomainEvent, EventDispatcher, EventPayload};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct CustomerCreated {
//!     id: String,
//!     name: String,
//! }
//!
//! impl EventPayload for CustomerCreated {
//!     const EVENT_TYPE: &'static str = "CustomerCreatedEvent";
//! }
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.register(
//!     CustomerCreated::EVENT_TYPE,
//!     handler_fn(|event| {
//!         let created = event.payload_as::<CustomerCreated>().unwrap();
//!         assert_eq!(created.name, "Customer");
//!         Ok(())
//!     }),
//! );
//!
//! let event = DomainEvent::new(CustomerCreated {
//!     id: "1".into(),
//!     name: "Customer".into(),
//! });
//! dispatcher.notify(&event).unwrap();
//! ```

mod dispatcher;
mod error;
mod event;
mod handler;

pub use dispatcher::EventDispatcher;
pub use error::{DispatchError, HandlerError};
pub use event::{DomainEvent, Event, EventPayload};
pub use handler::{handler_fn, EventHandler, HandlerRef};
