//!
//! # UI event streams
//!
//! This library turns the listener registrations of a retained-mode UI
//! toolkit into streams from Rust's `futures` library, so that user
//! interface events can be composed with the usual stream operators instead
//! of being handled in nested callbacks.
//!
//! Every factory function here follows the same pattern: it registers one
//! native listener, forwards each notification the toolkit raises as one
//! stream element, and removes the listener again when the stream is dropped
//! or released. Removal always happens on the thread that owns the user
//! interface, however the stream is disposed of; a `ReleaseHandle` can cancel
//! a stream from any thread, any number of times, and the listener is removed
//! exactly once.
//!
//! The toolkit side is a set of traits (`Widget`, `Window`, `Scene`,
//! `ActionTarget`, `ObservableValue`, `ObservableList`) that a toolkit
//! integration implements against its own widget types. `ValueCell` and
//! `ObservableVec` are in-memory implementations of the two observable seams,
//! useful on their own and as stand-ins for widget state in tests; the
//! `UiEventLoop` plays the part of the toolkit's main thread when there is no
//! toolkit running.
//!
//! Watching a property:
//!
//! ```
//! # use flo_ui_events::*;
//! # use futures::prelude::*;
//! # use futures::executor;
//! # use std::sync::Arc;
//! let ui_thread   = Arc::new(UiEventLoop::new());
//! let checked     = ValueCell::new(false, ui_thread.clone());
//!
//! let mut values  = value_stream(&checked);
//! checked.set(true);
//!
//! executor::block_on(async {
//!     assert!(values.next().await == Some(false));
//!     assert!(values.next().await == Some(true));
//! });
//! ```
//!
//! Watching a collection, deduplicated by value: a value is reported as added
//! when its first occurrence arrives and as removed when its last occurrence
//! leaves, so duplicate entries never produce duplicate signals.
//!
//! ```
//! # use flo_ui_events::*;
//! # use futures::prelude::*;
//! # use futures::executor;
//! # use std::sync::Arc;
//! let ui_thread   = Arc::new(UiEventLoop::new());
//! let tags        = ObservableVec::new(ui_thread.clone());
//! let mut changes = list_distinct_changes(&tags);
//!
//! tags.push("urgent");
//! tags.push("urgent");
//! tags.remove(0);
//!
//! executor::block_on(async {
//!     assert!(changes.next().await == Some(ListChange::Added("urgent")));
//! });
//! ```
//!
//! The element-level views of a list (`list_additions`, `list_removals`,
//! `list_updates`, `list_changes` and the two distinct variants) all classify
//! the same mutation batches, preserving the order the list reported; within
//! one batch, removals are reported ahead of the additions that replace them.
//!

mod traits;
mod changes;
mod listeners;
mod releasable;
mod ui_thread;
mod event_stream;
mod widget_events;
mod window_events;
mod scene_events;
mod action_events;
mod value_changes;
mod list_changes;
mod value_cell;
mod observable_vec;

pub use self::traits::*;
pub use self::changes::*;
pub use self::releasable::*;
pub use self::ui_thread::*;
pub use self::event_stream::*;
pub use self::widget_events::*;
pub use self::window_events::*;
pub use self::scene_events::*;
pub use self::action_events::*;
pub use self::value_changes::*;
pub use self::list_changes::*;
pub use self::value_cell::*;
pub use self::observable_vec::*;
