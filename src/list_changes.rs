use super::traits::*;
use super::changes::*;
use super::event_stream::*;

use std::hash::Hash;
use std::collections::HashMap;

///
/// Attaches a stream to a list by registering a listener that turns each
/// mutation batch into zero or more stream elements
///
/// Classification runs inside the listener, on the thread the list notifies
/// on, so every view derived from the same list sees batches in the same
/// order the list reported them.
///
fn list_stream<TList, TElement, TProcess>(list: &TList, mut process: TProcess) -> EventStream<TElement>
where   TList:      'static+ObservableList+Clone+Send,
        TElement:   'static+Send,
        TProcess:   'static+Send+FnMut(&ListChangeBatch<TList::Item>, &EventFeed<TElement>) {
    let ui_thread   = list.ui_thread();
    let unregister  = list.clone();

    EventStream::attach(ui_thread,
        move |feed| list.add_list_listener(Box::new(move |batch| process(batch, &feed))),
        move |listener_id| unregister.remove_list_listener(listener_id))
}

///
/// Creates a stream that yields the entire contents of a list every time the
/// list changes
///
/// The current contents arrive as the first element, then one snapshot per
/// mutation batch.
///
pub fn list_contents<TList>(list: &TList) -> EventStream<Vec<TList::Item>>
where TList: 'static+ObservableList+Clone+Send {
    let ui_thread   = list.ui_thread();
    let unregister  = list.clone();

    EventStream::attach(ui_thread,
        move |feed| {
            feed.post(list.contents());

            list.add_list_listener(Box::new(move |batch| feed.post(batch.contents().to_vec())))
        },
        move |listener_id| unregister.remove_list_listener(listener_id))
}

///
/// Creates a stream of every item added to a list, in the order the items
/// were added
///
pub fn list_additions<TList>(list: &TList) -> EventStream<TList::Item>
where TList: 'static+ObservableList+Clone+Send {
    list_stream(list, |batch, feed| {
        for item in batch.added() {
            feed.post(item.clone());
        }
    })
}

///
/// Creates a stream of every item removed from a list, in the order the items
/// were removed
///
pub fn list_removals<TList>(list: &TList) -> EventStream<TList::Item>
where TList: 'static+ObservableList+Clone+Send {
    list_stream(list, |batch, feed| {
        for item in batch.removed() {
            feed.post(item.clone());
        }
    })
}

///
/// Creates a stream of every item updated in place in a list, in affected
/// order
///
/// Only lists that track changes to their elements report updates; for other
/// lists this stream never yields anything.
///
pub fn list_updates<TList>(list: &TList) -> EventStream<TList::Item>
where TList: 'static+ObservableList+Clone+Send {
    list_stream(list, |batch, feed| {
        for item in batch.updated() {
            feed.post(item.clone());
        }
    })
}

///
/// Creates a stream of every element-level change made to a list, tagged as
/// an addition, a removal or an in-place update
///
/// Changes appear in the order the list reported them; within one delta the
/// removals are reported ahead of the additions that take their place.
///
pub fn list_changes<TList>(list: &TList) -> EventStream<ListChange<TList::Item>>
where TList: 'static+ObservableList+Clone+Send {
    list_stream(list, |batch, feed| {
        for delta in batch.deltas() {
            match delta {
                ListDelta::Spliced { removed, added } => {
                    for item in removed.iter() {
                        feed.post(ListChange::Removed(item.clone()));
                    }
                    for item in added.iter() {
                        feed.post(ListChange::Added(item.clone()));
                    }
                },

                ListDelta::Updated(updated) => {
                    for item in updated.iter() {
                        feed.post(ListChange::Updated(item.clone()));
                    }
                }
            }
        }
    })
}

///
/// Creates a stream of the changes to the distinct values of a list
///
/// Where `list_changes` reports every occurrence, this stream counts them:
/// adding a value the list already contains yields nothing, and an addition
/// is only reported when a value appears that was not present before. The
/// same way, a removal is only reported when the last occurrence of a value
/// leaves the list. The values already in the list when the stream is created
/// are counted but not reported. Updates pass through once per underlying
/// notification, however many occurrences are tracked.
///
pub fn list_distinct_changes<TList>(list: &TList) -> EventStream<ListChange<TList::Item>>
where   TList:          'static+ObservableList+Clone+Send,
        TList::Item:    Eq+Hash {
    distinct_stream(list, |item| item.clone())
}

///
/// Creates a stream of the changes to the distinct mappings of a list's items
///
/// As `list_distinct_changes`, except that the supplied function maps every
/// item before it is counted or reported: distinctness follows the mapped
/// value, so two different items that map to the same value count as two
/// occurrences of it.
///
pub fn list_distinct_mappings<TList, TMapped, TMap>(list: &TList, map: TMap) -> EventStream<ListChange<TMapped>>
where   TList:      'static+ObservableList+Clone+Send,
        TMapped:    'static+Send+Clone+Eq+Hash,
        TMap:       'static+Send+Fn(&TList::Item) -> TMapped {
    distinct_stream(list, map)
}

///
/// The counting adapter behind the two distinct views
///
fn distinct_stream<TList, TMapped, TMap>(list: &TList, map: TMap) -> EventStream<ListChange<TMapped>>
where   TList:      'static+ObservableList+Clone+Send,
        TMapped:    'static+Send+Clone+Eq+Hash,
        TMap:       'static+Send+Fn(&TList::Item) -> TMapped {
    // Values already in the list count as existing occurrences (they were
    // never added as far as this stream is concerned)
    let mut occurrences = DistinctCounter::new();
    for item in list.contents() {
        occurrences.add(map(&item));
    }

    list_stream(list, move |batch, feed| {
        for delta in batch.deltas() {
            match delta {
                ListDelta::Spliced { removed, added } => {
                    // Removals are counted before the additions that take
                    // their place, keeping every count accurate mid-batch
                    for item in removed.iter() {
                        let mapped = map(item);

                        if occurrences.remove(&mapped) == 0 {
                            feed.post(ListChange::Removed(mapped));
                        }
                    }

                    for item in added.iter() {
                        let mapped = map(item);

                        if occurrences.add(mapped.clone()) == 1 {
                            feed.post(ListChange::Added(mapped));
                        }
                    }
                },

                ListDelta::Updated(updated) => {
                    // Updates are not deduplicated
                    for item in updated.iter() {
                        feed.post(ListChange::Updated(map(item)));
                    }
                }
            }
        }
    })
}

///
/// Tracks how many occurrences of each value a list currently holds
///
struct DistinctCounter<TValue> {
    occurrences: HashMap<TValue, usize>
}

impl<TValue: Eq+Hash> DistinctCounter<TValue> {
    fn new() -> DistinctCounter<TValue> {
        DistinctCounter {
            occurrences: HashMap::new()
        }
    }

    ///
    /// Counts an occurrence of a value, returning the new count (1 for a
    /// value that was not present before)
    ///
    fn add(&mut self, value: TValue) -> usize {
        let count = self.occurrences.entry(value).or_insert(0);
        *count += 1;

        *count
    }

    ///
    /// Discounts an occurrence of a value, returning the new count (0 once
    /// the last occurrence is gone)
    ///
    fn remove(&mut self, value: &TValue) -> usize {
        let remaining = match self.occurrences.get_mut(value) {
            Some(count) => { *count -= 1; *count },
            None        => return 0
        };

        if remaining == 0 {
            self.occurrences.remove(value);
        }

        remaining
    }
}
