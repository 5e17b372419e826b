use super::changes::*;

use std::sync::Arc;

///
/// Identifies a single listener registered against a toolkit object
///
/// Tokens are only meaningful to the toolkit object that issued them. Removing
/// a listener using a token that has already been removed (or that the toolkit
/// has discarded along with the object it was attached to) must be a no-op.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(pub u64);

/// Listener invoked with each event raised against a widget, window or scene
pub type EventListener<TEvent> = Box<dyn FnMut(TEvent) + Send>;

/// Listener invoked with the old and new value of a property transition
pub type ValueChangeListener<TValue> = Box<dyn FnMut(ValueChange<TValue>) + Send>;

/// Listener invoked with each batch of changes made to an observable list
pub type ListListener<TItem> = Box<dyn FnMut(&ListChangeBatch<TItem>) + Send>;

/// Action scheduled onto the UI thread
pub type UiAction = Box<dyn FnOnce() + Send>;

///
/// Marshals actions onto the thread that owns the user interface
///
/// Toolkits deliver their notifications on a single thread, and require that
/// listeners are added and removed on that same thread. Implementations of
/// this trait supply the 'post an action to the UI thread' operation that the
/// release mechanism uses when a stream is disposed of from somewhere else.
///
pub trait UiThread : Send+Sync {
    ///
    /// True if the calling thread is the thread that owns the user interface
    ///
    fn is_ui_thread(&self) -> bool;

    ///
    /// Queues an action to be performed on the UI thread
    ///
    /// Actions are performed in the order that they are posted.
    ///
    fn post(&self, action: UiAction);
}

///
/// Trait implemented by toolkit objects that are owned by a UI thread
///
pub trait UiOwned {
    ///
    /// The thread that owns this object
    ///
    /// Listener removal for this object is marshaled onto this thread.
    ///
    fn ui_thread(&self) -> Arc<dyn UiThread>;
}

///
/// Trait implemented by toolkit widgets that raise events
///
/// A widget delivers every event matching the requested event type to each of
/// its registered listeners, in the order the events are raised, on the UI
/// thread. Dropping the widget (or destroying it in the toolkit) drops its
/// listeners.
///
pub trait Widget : UiOwned {
    /// The events this widget raises
    type Event: Send + 'static;

    /// Token describing a category of event (clicks, key presses, and so on)
    type EventType: Clone + Send + 'static;

    ///
    /// Registers a listener for events of the specified type
    ///
    fn add_event_listener(&self, event_type: Self::EventType, listener: EventListener<Self::Event>) -> ListenerId;

    ///
    /// Removes a listener registered by `add_event_listener`
    ///
    fn remove_event_listener(&self, listener_id: ListenerId);
}

///
/// Trait implemented by toolkit windows that raise events
///
pub trait Window : UiOwned {
    /// The events this window raises
    type Event: Send + 'static;

    /// Token describing a category of window event
    type EventType: Clone + Send + 'static;

    ///
    /// Registers a listener for window events of the specified type
    ///
    fn add_window_listener(&self, event_type: Self::EventType, listener: EventListener<Self::Event>) -> ListenerId;

    ///
    /// Removes a listener registered by `add_window_listener`
    ///
    fn remove_window_listener(&self, listener_id: ListenerId);
}

///
/// Trait implemented by toolkit scenes (the content trees hosted by windows)
/// that raise events
///
pub trait Scene : UiOwned {
    /// The events this scene raises
    type Event: Send + 'static;

    /// Token describing a category of scene event
    type EventType: Clone + Send + 'static;

    ///
    /// Registers a listener for scene events of the specified type
    ///
    fn add_scene_listener(&self, event_type: Self::EventType, listener: EventListener<Self::Event>) -> ListenerId;

    ///
    /// Removes a listener registered by `add_scene_listener`
    ///
    fn remove_scene_listener(&self, listener_id: ListenerId);
}

///
/// Trait implemented by toolkit objects that fire an action when activated
/// (buttons, menu items, context menu entries)
///
pub trait ActionTarget : UiOwned {
    /// The action events this object fires
    type Action: Send + 'static;

    ///
    /// Registers a listener for this object's action events
    ///
    fn add_action_listener(&self, listener: EventListener<Self::Action>) -> ListenerId;

    ///
    /// Removes a listener registered by `add_action_listener`
    ///
    fn remove_action_listener(&self, listener_id: ListenerId);
}

///
/// Trait implemented by observable property values
///
/// A change listener receives the old and the new value of every transition as
/// a single record: both are captured at the moment the property changes.
/// Toolkit properties are expected to suppress transitions where the new value
/// equals the old one.
///
pub trait ObservableValue : UiOwned {
    /// The type of the value stored by this property
    type Value: Clone + Send + 'static;

    ///
    /// The current value of this property
    ///
    fn value(&self) -> Self::Value;

    ///
    /// Registers a listener that is called for every value transition
    ///
    fn add_change_listener(&self, listener: ValueChangeListener<Self::Value>) -> ListenerId;

    ///
    /// Removes a listener registered by `add_change_listener`
    ///
    fn remove_change_listener(&self, listener_id: ListenerId);
}

///
/// Trait implemented by observable, order-preserving collections
///
/// Each mutation produces one `ListChangeBatch` describing every element-level
/// change in the batch, delivered to every list listener on the UI thread.
///
pub trait ObservableList : UiOwned {
    /// The type of the elements stored in this list
    type Item: Clone + Send + 'static;

    ///
    /// The current contents of this list
    ///
    fn contents(&self) -> Vec<Self::Item>;

    ///
    /// Registers a listener that is called with every mutation batch
    ///
    fn add_list_listener(&self, listener: ListListener<Self::Item>) -> ListenerId;

    ///
    /// Removes a listener registered by `add_list_listener`
    ///
    fn remove_list_listener(&self, listener_id: ListenerId);
}
