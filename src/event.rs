use std::any::Any;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The data carried by one kind of domain event.
///
/// Every payload type names its own routing key. The dispatcher never
/// derives the key from a type name, so renaming a struct does not
/// silently reroute its events.
pub trait EventPayload: Serialize + Send + Sync + 'static {
    /// Stable identifier handlers subscribe to, e.g. `"CustomerCreatedEvent"`.
    const EVENT_TYPE: &'static str;
}

/// Something that happened in the domain, as seen by the dispatcher.
///
/// Object safe, so heterogeneous events flow through one `notify` and
/// handlers receive `&dyn Event`.
pub trait Event: Any + Send + Sync {
    fn event_type(&self) -> &str;

    /// When the event was created. Fixed at construction.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// The payload rendered as JSON.
    fn payload_json(&self) -> Result<serde_json::Value, serde_json::Error>;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Event {
    /// Recover the concrete event, e.g. `event.downcast_ref::<DomainEvent<CustomerCreated>>()`.
    pub fn downcast_ref<T: Event>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Shortcut for `downcast_ref::<DomainEvent<P>>().map(DomainEvent::payload)`.
    pub fn payload_as<P: EventPayload>(&self) -> Option<&P> {
        self.downcast_ref::<DomainEvent<P>>().map(DomainEvent::payload)
    }
}

impl fmt::Debug for dyn Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("event_type", &self.event_type())
            .field("occurred_at", &self.occurred_at())
            .finish_non_exhaustive()
    }
}

/// An immutable event: a payload stamped with the moment it occurred.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DomainEvent<P> {
    occurred_at: DateTime<Utc>,
    payload: P,
}

impl<P: EventPayload> DomainEvent<P> {
    /// Create an event stamped with the current time.
    pub fn new(payload: P) -> Self {
        Self::at(payload, Utc::now())
    }

    /// Create an event with an explicit timestamp.
    pub fn at(payload: P, occurred_at: DateTime<Utc>) -> Self {
        Self {
            occurred_at,
            payload,
        }
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P: EventPayload> Event for DomainEvent<P> {
    fn event_type(&self) -> &str {
        P::EVENT_TYPE
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn payload_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(&self.payload)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
