use super::traits::*;
use super::changes::*;
use super::event_stream::*;

///
/// Creates a stream of the values of an observable property
///
/// The property's current value arrives first, followed by every new value in
/// transition order. Properties are expected to suppress transitions to an
/// equal value, so consecutive equal elements only appear if the property
/// reports them.
///
pub fn value_stream<TValue>(observable: &TValue) -> EventStream<TValue::Value>
where TValue: 'static+ObservableValue+Clone+Send {
    let ui_thread   = observable.ui_thread();
    let unregister  = observable.clone();

    EventStream::attach(ui_thread,
        move |feed| {
            // Whatever the property holds right now is the first element
            feed.post(observable.value());

            observable.add_change_listener(Box::new(move |change| feed.post(change.into_new_value())))
        },
        move |listener_id| unregister.remove_change_listener(listener_id))
}

///
/// Creates a stream of the transitions of an observable property, as
/// old-value/new-value records
///
/// Unlike `value_stream` there is no initial element: the first record
/// describes the first transition after the stream was created. Each native
/// change produces exactly one record; intermediate transitions are never
/// coalesced by the adapter.
///
pub fn value_changes<TValue>(observable: &TValue) -> EventStream<ValueChange<TValue::Value>>
where TValue: 'static+ObservableValue+Clone+Send {
    let ui_thread   = observable.ui_thread();
    let unregister  = observable.clone();

    EventStream::attach(ui_thread,
        move |feed| observable.add_change_listener(Box::new(move |change| feed.post(change))),
        move |listener_id| unregister.remove_change_listener(listener_id))
}
