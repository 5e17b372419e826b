use super::traits::*;
use super::event_stream::*;

///
/// Creates a stream of the events a widget raises for a particular event type
///
/// Each call registers a fresh listener on the widget, so separate calls
/// produce independent streams. Matching events are forwarded unmodified, in
/// the order the toolkit raises them; the stream never completes on its own.
/// Dropping the stream (or releasing it through its handle) removes the
/// listener on the widget's UI thread.
///
pub fn widget_events<TWidget>(widget: &TWidget, event_type: TWidget::EventType) -> EventStream<TWidget::Event>
where TWidget: 'static+Widget+Clone+Send {
    let ui_thread   = widget.ui_thread();
    let unregister  = widget.clone();

    EventStream::attach(ui_thread,
        move |feed| widget.add_event_listener(event_type, Box::new(move |event| feed.post(event))),
        move |listener_id| unregister.remove_event_listener(listener_id))
}
