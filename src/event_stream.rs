use super::traits::*;
use super::releasable::*;

use futures::prelude::*;
use futures::task::{Poll, Context, Waker};

use std::pin::*;
use std::sync::*;
use std::collections::VecDeque;

///
/// State shared between an activation's feed and its stream
///
struct EventStreamCore<TEvent> {
    /// Events that have been delivered but not yet read
    pending:        VecDeque<TEvent>,

    /// If the stream is waiting for an event, the task to wake
    waiting_poll:   Option<Waker>,

    /// True once no further events will be delivered
    finished:       bool
}

impl<TEvent> EventStreamCore<TEvent> {
    ///
    /// Wakes the stream if it is waiting on an event
    ///
    fn wake(&mut self) {
        self.waiting_poll.take().map(|waker| waker.wake());
    }
}

///
/// The toolkit-side half of an activation: passes events on to the stream
///
/// A feed is handed to the `register` callback of `EventStream::attach`, which
/// moves it into the listener it registers. Dropping the feed (as a toolkit
/// does when the listener is removed or its widget is destroyed) finishes the
/// stream without an error.
///
pub struct EventFeed<TEvent> {
    /// The state shared with the stream
    core: Arc<Mutex<EventStreamCore<TEvent>>>
}

impl<TEvent> EventFeed<TEvent> {
    ///
    /// Passes one event on to the stream
    ///
    /// Events posted after the stream has been released are discarded.
    ///
    pub fn post(&self, event: TEvent) {
        let mut core = self.core.lock().unwrap();

        if !core.finished {
            core.pending.push_back(event);
            core.wake();
        }
    }
}

impl<TEvent> Drop for EventFeed<TEvent> {
    fn drop(&mut self) {
        // The source is gone: anything already queued is still delivered,
        // then the stream ends
        let mut core = self.core.lock().unwrap();

        core.finished = true;
        core.wake();
    }
}

///
/// A stream of notifications from a single listener registration
///
/// Every stream returned by this crate's factory functions is one of these:
/// one activation, one native listener, one subscriber. The stream yields
/// each notification in the order the toolkit raised it, never completes
/// while the listener is registered and the source is alive, and ends with
/// `None` once it is released or the toolkit discards the listener.
///
/// Dropping the stream releases the registration; `release_handle` returns a
/// handle that can release it from any thread.
///
pub struct EventStream<TEvent> {
    /// The state shared with the feed
    core:           Arc<Mutex<EventStreamCore<TEvent>>>,

    /// Owns the listener registration; releases it when the stream is dropped
    registration:   RegistrationGuard
}

impl<TEvent: 'static+Send> EventStream<TEvent> {
    ///
    /// Creates a stream by registering a listener with a toolkit object
    ///
    /// `register` is called immediately, on the calling thread, with the feed
    /// the new listener should post into; it returns the toolkit's token for
    /// the registration. `unregister` receives that token when the stream is
    /// released, and is always performed on the supplied UI thread, at most
    /// once.
    ///
    pub fn attach<TRegister, TUnregister, TToken>(ui_thread: Arc<dyn UiThread>, register: TRegister, unregister: TUnregister) -> EventStream<TEvent>
    where   TRegister:      FnOnce(EventFeed<TEvent>) -> TToken,
            TUnregister:    'static+Send+FnOnce(TToken),
            TToken:         'static+Send {
        let core = EventStreamCore {
            pending:        VecDeque::new(),
            waiting_poll:   None,
            finished:       false
        };
        let core = Arc::new(Mutex::new(core));

        // The listener is registered synchronously: any panic from the
        // toolkit reaches the caller before a stream exists
        let feed    = EventFeed { core: Arc::clone(&core) };
        let token   = register(feed);

        // Releasing removes the listener and then finishes the stream, so the
        // subscriber observes the end of the stream even if the toolkit holds
        // on to the listener it was asked to remove
        let release_core    = Arc::clone(&core);
        let release         = ReleaseHandle::new(ui_thread, move || {
            unregister(token);

            let mut core = release_core.lock().unwrap();
            core.finished = true;
            core.wake();
        });

        EventStream {
            core:           core,
            registration:   RegistrationGuard::new(release)
        }
    }

    ///
    /// A handle that releases this stream's registration from any thread
    ///
    pub fn release_handle(&self) -> ReleaseHandle {
        self.registration.handle()
    }
}

impl<TEvent> Stream for EventStream<TEvent> {
    type Item = TEvent;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context) -> Poll<Option<TEvent>> {
        let mut core = self.core.lock().unwrap();

        if let Some(event) = core.pending.pop_front() {
            // Deliver queued events in arrival order
            Poll::Ready(Some(event))
        } else if core.finished {
            // Released, or the source has gone away
            Poll::Ready(None)
        } else {
            // Wait for the next event
            core.waiting_poll = Some(context.waker().clone());
            Poll::Pending
        }
    }
}

impl<TEvent> Drop for EventStream<TEvent> {
    fn drop(&mut self) {
        // Nobody can read the queue any more (the registration guard takes
        // care of removing the listener)
        let mut core = self.core.lock().unwrap();

        core.finished = true;
        core.pending.clear();
    }
}
