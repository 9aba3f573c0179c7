// SPDX-License-Identifier: MPL-2.0
//! In-process fan-out of log records.
//!
//! Every `tracing` event that passes the level filter becomes a
//! [`LogRecord`], is kept in a bounded history and handed to each subscriber.
//! Subscribing returns a [`Subscription`]; the callback stays registered
//! exactly as long as that handle lives.

use super::buffer::CircularBuffer;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5} {}: {}", self.level, self.target, self.message)
    }
}

type Callback = Arc<dyn Fn(&LogRecord) + Send + Sync>;

struct Inner {
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
    history: CircularBuffer<LogRecord>,
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared handle to the record history and subscriber list.
#[derive(Clone)]
pub struct LogBroadcaster {
    inner: Arc<Mutex<Inner>>,
}

impl fmt::Debug for LogBroadcaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("LogBroadcaster")
            .field("subscribers", &inner.subscribers.len())
            .field("history", &inner.history.len())
            .finish()
    }
}

impl Default for LogBroadcaster {
    fn default() -> Self {
        Self::with_history(CircularBuffer::default())
    }
}

impl LogBroadcaster {
    /// Creates a broadcaster keeping up to `history` records.
    #[must_use]
    pub fn new(history: usize) -> Self {
        Self::with_history(CircularBuffer::new(history))
    }

    fn with_history(history: CircularBuffer<LogRecord>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_id: 0,
                subscribers: Vec::new(),
                history,
            })),
        }
    }

    /// Registers `callback` for every future record.
    #[must_use = "dropping the subscription unregisters the callback"]
    pub fn subscribe(&self, callback: impl Fn(&LogRecord) + Send + Sync + 'static) -> Subscription {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(callback)));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Records `record` and delivers it to every subscriber.
    ///
    /// Callbacks run after the internal lock is released, so they may log.
    pub fn publish(&self, record: LogRecord) {
        let callbacks: Vec<Callback> = {
            let mut inner = lock(&self.inner);
            inner.history.push(record.clone());
            inner.subscribers.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for callback in callbacks {
            callback(&record);
        }
    }

    /// Up to `limit` most recent records, oldest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<LogRecord> {
        let inner = lock(&self.inner);
        let mut records: Vec<LogRecord> = inner.history.iter().rev().take(limit).cloned().collect();
        records.reverse();
        records
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).subscribers.len()
    }

    /// A `tracing` layer feeding this broadcaster.
    #[must_use]
    pub fn layer(&self) -> BroadcastLayer {
        BroadcastLayer {
            broadcaster: self.clone(),
        }
    }
}

/// Keeps a callback registered; dropping it unregisters the callback.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    inner: Weak<Mutex<Inner>>,
}

impl Subscription {
    /// Unregisters now instead of at drop.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Turns `tracing` events into [`LogRecord`]s.
#[derive(Debug, Clone)]
pub struct BroadcastLayer {
    broadcaster: LogBroadcaster,
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

impl<S: Subscriber> Layer<S> for BroadcastLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        self.broadcaster.publish(LogRecord {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message + &visitor.fields,
        });
    }
}
