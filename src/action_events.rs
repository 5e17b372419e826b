use super::traits::*;
use super::event_stream::*;

///
/// Creates a stream of the action events an object fires when it is activated
///
/// Action sources are buttons, menu items and context menu entries: anything
/// that fires a single category of event when triggered, so there is no event
/// type to select. One fresh listener per call; removal happens on the
/// target's UI thread when the stream is dropped or released.
///
pub fn action_events<TTarget>(target: &TTarget) -> EventStream<TTarget::Action>
where TTarget: 'static+ActionTarget+Clone+Send {
    let ui_thread   = target.ui_thread();
    let unregister  = target.clone();

    EventStream::attach(ui_thread,
        move |feed| target.add_action_listener(Box::new(move |action| feed.post(action))),
        move |listener_id| unregister.remove_action_listener(listener_id))
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::listeners::*;
    use super::super::ui_thread::*;

    use futures::prelude::*;
    use futures::executor;

    use std::sync::*;

    ///
    /// A menu item that fires its name whenever it is picked
    ///
    #[derive(Clone)]
    struct TestMenuItem {
        name:       String,
        listeners:  Arc<Mutex<ListenerSet<EventListener<String>>>>,
        ui_thread:  Arc<UiEventLoop>
    }

    impl TestMenuItem {
        fn new(name: &str, ui_thread: Arc<UiEventLoop>) -> TestMenuItem {
            TestMenuItem {
                name:       name.to_string(),
                listeners:  Arc::new(Mutex::new(ListenerSet::new())),
                ui_thread:  ui_thread
            }
        }

        fn pick(&self) {
            for listener in self.listeners.lock().unwrap().snapshot() {
                let mut listener = listener.lock().unwrap();
                (&mut *listener)(self.name.clone());
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.lock().unwrap().snapshot().len()
        }
    }

    impl UiOwned for TestMenuItem {
        fn ui_thread(&self) -> Arc<dyn UiThread> {
            self.ui_thread.clone()
        }
    }

    impl ActionTarget for TestMenuItem {
        type Action = String;

        fn add_action_listener(&self, listener: EventListener<String>) -> ListenerId {
            self.listeners.lock().unwrap().add(listener)
        }

        fn remove_action_listener(&self, listener_id: ListenerId) {
            self.listeners.lock().unwrap().remove(listener_id);
        }
    }

    #[test]
    fn forwards_every_activation() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let menu_item   = TestMenuItem::new("Undo", ui_thread);
        let mut picks   = action_events(&menu_item);

        menu_item.pick();
        menu_item.pick();

        executor::block_on(async {
            assert!(picks.next().await == Some("Undo".to_string()));
            assert!(picks.next().await == Some("Undo".to_string()));
        });
    }

    #[test]
    fn dropping_the_stream_removes_the_listener() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let menu_item   = TestMenuItem::new("Redo", Arc::clone(&ui_thread));
        let picks       = action_events(&menu_item);

        assert!(menu_item.listener_count() == 1);

        drop(picks);
        ui_thread.sync(|| ());

        assert!(menu_item.listener_count() == 0);
    }
}
