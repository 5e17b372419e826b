use super::traits::*;
use super::event_stream::*;

///
/// Creates a stream of the events a window raises for a particular event type
///
/// Behaves exactly as `widget_events` does for widgets: one fresh listener per
/// call, 1:1 ordered forwarding, removal on the window's UI thread when the
/// stream is dropped or released.
///
pub fn window_events<TWindow>(window: &TWindow, event_type: TWindow::EventType) -> EventStream<TWindow::Event>
where TWindow: 'static+Window+Clone+Send {
    let ui_thread   = window.ui_thread();
    let unregister  = window.clone();

    EventStream::attach(ui_thread,
        move |feed| window.add_window_listener(event_type, Box::new(move |event| feed.post(event))),
        move |listener_id| unregister.remove_window_listener(listener_id))
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::listeners::*;
    use super::super::ui_thread::*;

    use futures::prelude::*;
    use futures::executor;

    use std::sync::*;

    #[derive(Clone, PartialEq, Debug)]
    enum WindowEvent {
        Shown,
        Hidden,
        CloseRequested
    }

    #[derive(Copy, Clone, PartialEq, Debug)]
    enum WindowEventType {
        Showing,
        Closing
    }

    ///
    /// A window whose listeners can all be discarded, as happens when a
    /// toolkit destroys the real window
    ///
    #[derive(Clone)]
    struct TestWindow {
        listeners: Arc<Mutex<ListenerSet<(WindowEventType, EventListener<WindowEvent>)>>>,
        ui_thread: Arc<UiEventLoop>
    }

    impl TestWindow {
        fn new(ui_thread: Arc<UiEventLoop>) -> TestWindow {
            TestWindow {
                listeners: Arc::new(Mutex::new(ListenerSet::new())),
                ui_thread: ui_thread
            }
        }

        fn raise(&self, event_type: WindowEventType, event: WindowEvent) {
            for listener in self.listeners.lock().unwrap().snapshot() {
                let mut listener                    = listener.lock().unwrap();
                let (listener_type, listener_fn)    = &mut *listener;

                if *listener_type == event_type {
                    (listener_fn)(event.clone());
                }
            }
        }

        fn destroy(&self) {
            *self.listeners.lock().unwrap() = ListenerSet::new();
        }
    }

    impl UiOwned for TestWindow {
        fn ui_thread(&self) -> Arc<dyn UiThread> {
            self.ui_thread.clone()
        }
    }

    impl Window for TestWindow {
        type Event      = WindowEvent;
        type EventType  = WindowEventType;

        fn add_window_listener(&self, event_type: WindowEventType, listener: EventListener<WindowEvent>) -> ListenerId {
            self.listeners.lock().unwrap().add((event_type, listener))
        }

        fn remove_window_listener(&self, listener_id: ListenerId) {
            self.listeners.lock().unwrap().remove(listener_id);
        }
    }

    #[test]
    fn forwards_window_events() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let window      = TestWindow::new(ui_thread);
        let mut events  = window_events(&window, WindowEventType::Showing);

        window.raise(WindowEventType::Showing, WindowEvent::Shown);
        window.raise(WindowEventType::Closing, WindowEvent::CloseRequested);
        window.raise(WindowEventType::Showing, WindowEvent::Hidden);

        executor::block_on(async {
            assert!(events.next().await == Some(WindowEvent::Shown));
            assert!(events.next().await == Some(WindowEvent::Hidden));
        });
    }

    #[test]
    fn stream_ends_when_the_window_is_destroyed() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let window      = TestWindow::new(ui_thread);
        let mut events  = window_events(&window, WindowEventType::Closing);

        window.raise(WindowEventType::Closing, WindowEvent::CloseRequested);
        window.destroy();

        // Events raised before destruction are still seen; the end of the
        // stream is not an error
        executor::block_on(async {
            assert!(events.next().await == Some(WindowEvent::CloseRequested));
            assert!(events.next().await == None);
        });
    }
}
