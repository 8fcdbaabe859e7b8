//! Replay-of-one publish/subscribe
//!
//! A [`Subject`] holds the latest value of some state. A new subscriber is
//! handed that value immediately and then every value published after it,
//! in publish order. Subscribers are either callbacks, invoked synchronously
//! while publishing, or channels, whose receivers can be dropped at any time
//! to end the subscription.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

/// Callback invoked with each published value
pub type Observer<T> = Box<dyn FnMut(&T)>;

/// Handle identifying one subscription on a [`Subject`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Sink<T> {
    Callback(Observer<T>),
    Channel(Sender<T>),
}

/// Latest-value broadcaster
pub struct Subject<T: Clone> {
    current: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sink<T>)>,
}

impl<T: Clone> Subject<T> {
    /// Create a subject holding an initial value
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// The most recently published value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Subscribe a callback; it is called with the current value right away
    pub fn subscribe<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        observer(&self.current);
        self.attach(Sink::Callback(Box::new(observer)))
    }

    /// Subscribe through a channel; the current value is queued right away
    ///
    /// Dropping the receiver ends the subscription at the next publish.
    pub fn channel(&mut self) -> Receiver<T> {
        let (tx, rx) = mpsc::channel();
        // The receiver is still alive here, so this send cannot fail
        let _ = tx.send(self.current.clone());
        self.attach(Sink::Channel(tx));
        rx
    }

    /// Remove a subscription; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Replace the current value and deliver it to every subscriber
    pub fn publish(&mut self, value: T) {
        self.current = value;

        let current = &self.current;
        self.subscribers.retain_mut(|(_, sink)| match sink {
            Sink::Callback(observer) => {
                observer(current);
                true
            }
            Sink::Channel(tx) => tx.send(current.clone()).is_ok(),
        });
    }

    fn attach(&mut self, sink: Sink<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, sink));
        id
    }
}

impl<T: Clone + Default> Default for Subject<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
