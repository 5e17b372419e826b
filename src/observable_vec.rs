use super::traits::*;
use super::changes::*;
use super::listeners::*;

use std::mem;
use std::ops::Range;
use std::sync::*;

///
/// The items and listeners behind an observable vec
///
struct ObservableVecCore<TItem> {
    /// The items currently in the list
    items:      Vec<TItem>,

    /// Listeners to call with each mutation batch
    listeners:  ListenerSet<ListListener<TItem>>
}

///
/// An in-memory observable, order-preserving list
///
/// The reference implementation of the `ObservableList` seam. Every mutation
/// notifies the list listeners with a single batch describing the change;
/// `splice` can mix removals and additions in one batch the way toolkit
/// collections do. Cloning produces a new handle to the same list.
///
#[derive(Clone)]
pub struct ObservableVec<TItem> {
    /// The shared items and listener set
    core:       Arc<Mutex<ObservableVecCore<TItem>>>,

    /// The thread this list considers its owner
    ui_thread:  Arc<dyn UiThread>
}

impl<TItem: 'static+Clone+Send> ObservableVec<TItem> {
    ///
    /// Creates an empty list
    ///
    pub fn new(ui_thread: Arc<dyn UiThread>) -> ObservableVec<TItem> {
        Self::from_items(vec![], ui_thread)
    }

    ///
    /// Creates a list with the specified initial items
    ///
    pub fn from_items(items: Vec<TItem>, ui_thread: Arc<dyn UiThread>) -> ObservableVec<TItem> {
        let core = ObservableVecCore {
            items:      items,
            listeners:  ListenerSet::new()
        };

        ObservableVec {
            core:       Arc::new(Mutex::new(core)),
            ui_thread:  ui_thread
        }
    }

    ///
    /// The number of items in the list
    ///
    pub fn len(&self) -> usize {
        self.core.lock().unwrap().items.len()
    }

    ///
    /// True if the list contains no items
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// A copy of the item at the specified index, if it exists
    ///
    pub fn get(&self, index: usize) -> Option<TItem> {
        self.core.lock().unwrap().items.get(index).cloned()
    }

    ///
    /// Appends an item to the end of the list
    ///
    pub fn push(&self, item: TItem) {
        self.mutate(|items| {
            items.push(item.clone());
            ((), vec![ListDelta::Spliced { removed: vec![], added: vec![item] }])
        })
    }

    ///
    /// Inserts an item at the specified index
    ///
    pub fn insert(&self, index: usize, item: TItem) {
        self.mutate(|items| {
            items.insert(index, item.clone());
            ((), vec![ListDelta::Spliced { removed: vec![], added: vec![item] }])
        })
    }

    ///
    /// Removes and returns the item at the specified index
    ///
    pub fn remove(&self, index: usize) -> TItem {
        self.mutate(|items| {
            let removed = items.remove(index);
            (removed.clone(), vec![ListDelta::Spliced { removed: vec![removed], added: vec![] }])
        })
    }

    ///
    /// Replaces the item at the specified index, returning the old item
    ///
    /// A replacement is a structural change: the batch reports the old item
    /// as removed and the new one as added (compare `update`).
    ///
    pub fn replace(&self, index: usize, item: TItem) -> TItem {
        self.mutate(|items| {
            let old_item = mem::replace(&mut items[index], item.clone());
            (old_item.clone(), vec![ListDelta::Spliced { removed: vec![old_item], added: vec![item] }])
        })
    }

    ///
    /// Changes the item at the specified index in place, returning the old
    /// item
    ///
    /// The batch reports this as an in-place update rather than as a removal
    /// and an addition: the element kept its position, its value changed.
    ///
    pub fn update(&self, index: usize, item: TItem) -> TItem {
        self.mutate(|items| {
            let old_item = mem::replace(&mut items[index], item.clone());
            (old_item, vec![ListDelta::Updated(vec![item])])
        })
    }

    ///
    /// Removes the items in the specified range and inserts the replacement
    /// items in their place, all as a single batch; returns the removed items
    ///
    pub fn splice(&self, range: Range<usize>, replacement: Vec<TItem>) -> Vec<TItem> {
        self.mutate(|items| {
            let removed = items.splice(range, replacement.clone()).collect::<Vec<_>>();

            if removed.is_empty() && replacement.is_empty() {
                (removed, vec![])
            } else {
                (removed.clone(), vec![ListDelta::Spliced { removed: removed, added: replacement }])
            }
        })
    }

    ///
    /// Removes every item from the list
    ///
    pub fn clear(&self) {
        self.mutate(|items| {
            let removed = items.drain(..).collect::<Vec<_>>();

            if removed.is_empty() {
                ((), vec![])
            } else {
                ((), vec![ListDelta::Spliced { removed: removed, added: vec![] }])
            }
        })
    }

    ///
    /// Applies a mutation to the items, then notifies the listeners with the
    /// resulting batch (mutations that report no deltas notify nobody)
    ///
    fn mutate<TReturn, TFn>(&self, change: TFn) -> TReturn
    where TFn: FnOnce(&mut Vec<TItem>) -> (TReturn, Vec<ListDelta<TItem>>) {
        // Apply the change with the lock held
        let (result, batch, listeners) = {
            let mut core                            = self.core.lock().unwrap();
            let ObservableVecCore { items, listeners } = &mut *core;

            let (result, deltas) = change(items);

            if deltas.is_empty() {
                return result;
            }

            (result, ListChangeBatch::new(deltas, items.clone()), listeners.snapshot())
        };

        // Call the listeners outside of the lock
        for listener in listeners.iter() {
            let mut listener = listener.lock().unwrap();
            (&mut *listener)(&batch);
        }

        result
    }
}

impl<TItem> UiOwned for ObservableVec<TItem> {
    fn ui_thread(&self) -> Arc<dyn UiThread> {
        Arc::clone(&self.ui_thread)
    }
}

impl<TItem: 'static+Clone+Send> ObservableList for ObservableVec<TItem> {
    type Item = TItem;

    fn contents(&self) -> Vec<TItem> {
        self.core.lock().unwrap().items.clone()
    }

    fn add_list_listener(&self, listener: ListListener<TItem>) -> ListenerId {
        self.core.lock().unwrap().listeners.add(listener)
    }

    fn remove_list_listener(&self, listener_id: ListenerId) {
        self.core.lock().unwrap().listeners.remove(listener_id);
    }
}
