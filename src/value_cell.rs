use super::traits::*;
use super::changes::*;
use super::listeners::*;

use std::sync::*;

///
/// The value and listeners behind a cell
///
struct ValueCellCore<TValue> {
    /// The current value of this cell
    value:      TValue,

    /// Listeners to call when the value changes
    listeners:  ListenerSet<ValueChangeListener<TValue>>
}

///
/// An in-memory observable value
///
/// This is the reference implementation of the `ObservableValue` seam: a
/// toolkit-independent property that can stand in for a widget property in
/// tests or in headless code. Cloning a cell produces a new handle to the
/// same value. Setting a value equal to the current one notifies nobody.
///
#[derive(Clone)]
pub struct ValueCell<TValue> {
    /// The shared value and listener set
    core:       Arc<Mutex<ValueCellCore<TValue>>>,

    /// The thread this cell considers its owner
    ui_thread:  Arc<dyn UiThread>
}

impl<TValue: 'static+Clone+Send+PartialEq> ValueCell<TValue> {
    ///
    /// Creates a cell with the specified initial value
    ///
    pub fn new(value: TValue, ui_thread: Arc<dyn UiThread>) -> ValueCell<TValue> {
        let core = ValueCellCore {
            value:      value,
            listeners:  ListenerSet::new()
        };

        ValueCell {
            core:       Arc::new(Mutex::new(core)),
            ui_thread:  ui_thread
        }
    }

    ///
    /// Updates the value stored in this cell, notifying the change listeners
    /// if the value actually changed
    ///
    pub fn set(&self, new_value: TValue) {
        // Update the value with the lock held
        let (change, listeners) = {
            let mut core = self.core.lock().unwrap();

            if core.value == new_value {
                // Equal-value transitions are suppressed
                return;
            }

            let old_value   = core.value.clone();
            core.value      = new_value.clone();

            (ValueChange::new(old_value, new_value), core.listeners.snapshot())
        };

        // Call the listeners outside of the lock
        for listener in listeners.iter() {
            let mut listener = listener.lock().unwrap();
            (&mut *listener)(change.clone());
        }
    }
}

impl<TValue> UiOwned for ValueCell<TValue> {
    fn ui_thread(&self) -> Arc<dyn UiThread> {
        Arc::clone(&self.ui_thread)
    }
}

impl<TValue: 'static+Clone+Send+PartialEq> ObservableValue for ValueCell<TValue> {
    type Value = TValue;

    fn value(&self) -> TValue {
        self.core.lock().unwrap().value.clone()
    }

    fn add_change_listener(&self, listener: ValueChangeListener<TValue>) -> ListenerId {
        self.core.lock().unwrap().listeners.add(listener)
    }

    fn remove_change_listener(&self, listener_id: ListenerId) {
        self.core.lock().unwrap().listeners.remove(listener_id);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::ui_thread::*;

    #[test]
    fn stores_and_updates_a_value() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let cell        = ValueCell::new(1, ui_thread);

        assert!(cell.value() == 1);

        cell.set(2);
        assert!(cell.value() == 2);
    }

    #[test]
    fn notifies_with_old_and_new_value() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let cell        = ValueCell::new(1, ui_thread);
        let changes     = Arc::new(Mutex::new(vec![]));

        let seen = Arc::clone(&changes);
        cell.add_change_listener(Box::new(move |change| seen.lock().unwrap().push(change)));

        cell.set(2);
        cell.set(3);

        assert!(*changes.lock().unwrap() == vec![ValueChange::new(1, 2), ValueChange::new(2, 3)]);
    }

    #[test]
    fn suppresses_equal_value_transitions() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let cell        = ValueCell::new(5, ui_thread);
        let changes     = Arc::new(Mutex::new(vec![]));

        let seen = Arc::clone(&changes);
        cell.add_change_listener(Box::new(move |change| seen.lock().unwrap().push(change)));

        cell.set(7);
        cell.set(7);
        cell.set(3);

        assert!(*changes.lock().unwrap() == vec![ValueChange::new(5, 7), ValueChange::new(7, 3)]);
    }

    #[test]
    fn removed_listeners_are_not_notified() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let cell        = ValueCell::new(1, ui_thread);
        let changes     = Arc::new(Mutex::new(vec![]));

        let seen        = Arc::clone(&changes);
        let listener_id = cell.add_change_listener(Box::new(move |change| seen.lock().unwrap().push(change)));

        cell.set(2);
        cell.remove_change_listener(listener_id);
        cell.set(3);

        assert!(*changes.lock().unwrap() == vec![ValueChange::new(1, 2)]);
    }

    #[test]
    fn clones_share_the_same_value() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let cell        = ValueCell::new(1, ui_thread);
        let other       = cell.clone();

        other.set(2);
        assert!(cell.value() == 2);
    }
}
