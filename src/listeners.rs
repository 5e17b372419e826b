use super::traits::*;

use std::sync::*;

///
/// Set of listeners registered against a single toolkit object
///
/// Listeners are stored behind their own locks so that they can be called
/// after the registry lock has been released (a listener may well turn around
/// and read the object that is notifying it).
///
pub (crate) struct ListenerSet<TListener> {
    /// The identifier to assign to the next listener
    next_id:    u64,

    /// The active listeners, in registration order
    listeners:  Vec<(ListenerId, Arc<Mutex<TListener>>)>
}

impl<TListener> ListenerSet<TListener> {
    ///
    /// Creates an empty listener set
    ///
    pub fn new() -> ListenerSet<TListener> {
        ListenerSet {
            next_id:    0,
            listeners:  vec![]
        }
    }

    ///
    /// Adds a listener to this set and returns its identifier
    ///
    pub fn add(&mut self, listener: TListener) -> ListenerId {
        let listener_id = ListenerId(self.next_id);
        self.next_id    += 1;

        self.listeners.push((listener_id, Arc::new(Mutex::new(listener))));
        listener_id
    }

    ///
    /// Removes the listener with the specified identifier
    ///
    /// Removing an identifier that is not present has no effect.
    ///
    pub fn remove(&mut self, listener_id: ListenerId) {
        self.listeners.retain(|(id, _listener)| *id != listener_id);
    }

    ///
    /// Returns handles to the current listeners so they can be called with
    /// the registry lock released
    ///
    pub fn snapshot(&self) -> Vec<Arc<Mutex<TListener>>> {
        self.listeners.iter()
            .map(|(_id, listener)| Arc::clone(listener))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn assigns_distinct_identifiers() {
        let mut listeners = ListenerSet::<i32>::new();

        let first   = listeners.add(1);
        let second  = listeners.add(2);

        assert!(first != second);
        assert!(listeners.snapshot().len() == 2);
    }

    #[test]
    fn removes_only_the_requested_listener() {
        let mut listeners = ListenerSet::<i32>::new();

        let first   = listeners.add(1);
        let _second = listeners.add(2);

        listeners.remove(first);

        let remaining = listeners.snapshot();
        assert!(remaining.len() == 1);
        assert!(*remaining[0].lock().unwrap() == 2);
    }

    #[test]
    fn removing_twice_is_a_no_op() {
        let mut listeners = ListenerSet::<i32>::new();

        let first = listeners.add(1);

        listeners.remove(first);
        listeners.remove(first);

        assert!(listeners.snapshot().len() == 0);
    }
}
