use super::traits::*;

use log::debug;

use std::collections::VecDeque;
use std::sync::*;
use std::thread;

///
/// State shared between the event loop thread and the handles posting to it
///
struct QueueState {
    /// Actions waiting to be performed, in posting order
    pending:    VecDeque<UiAction>,

    /// Set to true once the loop should stop processing actions
    shutdown:   bool
}

///
/// A minimal UI event loop: a dedicated thread draining a queue of actions
///
/// Toolkit integrations normally implement `UiThread` against the toolkit's
/// own main loop; this loop stands in for it when there is no toolkit, and is
/// what the crate's own tests run their registrations on. Actions posted from
/// any thread are performed one at a time, in order, on the loop's thread.
///
pub struct UiEventLoop {
    /// The queue feeding the loop thread
    queue:      Arc<(Mutex<QueueState>, Condvar)>,

    /// The thread draining the queue
    thread:     Option<thread::JoinHandle<()>>,

    /// Identity of the thread draining the queue
    thread_id:  thread::ThreadId
}

impl UiEventLoop {
    ///
    /// Starts a new event loop on its own thread
    ///
    pub fn new() -> UiEventLoop {
        let queue       = Arc::new((Mutex::new(QueueState { pending: VecDeque::new(), shutdown: false }), Condvar::new()));
        let loop_queue  = Arc::clone(&queue);

        let thread      = thread::spawn(move || Self::run(loop_queue));
        let thread_id   = thread.thread().id();

        UiEventLoop {
            queue:      queue,
            thread:     Some(thread),
            thread_id:  thread_id
        }
    }

    ///
    /// Drains the queue until shutdown is requested
    ///
    fn run(queue: Arc<(Mutex<QueueState>, Condvar)>) {
        let (state, available) = &*queue;

        debug!("UI event loop started");

        loop {
            // Wait for the next action (or for shutdown)
            let next_action = {
                let mut state = state.lock().unwrap();

                loop {
                    if let Some(action) = state.pending.pop_front() {
                        break Some(action);
                    } else if state.shutdown {
                        break None;
                    }

                    state = available.wait(state).unwrap();
                }
            };

            // Perform it with the queue lock released
            match next_action {
                Some(action)    => action(),
                None            => break
            }
        }

        debug!("UI event loop stopped");
    }

    ///
    /// Performs an action on the loop thread and waits for its result
    ///
    /// Runs the action inline when called from the loop thread itself, so
    /// this is safe to call from an action that is already running.
    ///
    pub fn sync<TReturn, TFn>(&self, action: TFn) -> TReturn
    where TReturn: 'static+Send, TFn: 'static+Send+FnOnce() -> TReturn {
        if self.is_ui_thread() {
            return action();
        }

        // Thread to be woken once the result is available
        let wake_thread = thread::current();

        // The result will be placed here
        let our_result  = Arc::new(Mutex::new(None));
        let loop_result = Arc::clone(&our_result);

        self.post(Box::new(move || {
            let result = action();

            *loop_result.lock().unwrap() = Some(result);

            // Unpark the waiting thread when done
            wake_thread.unpark();
        }));

        // Park the thread until the result is available
        // (If unpark is called before park, the park call returns immediately)
        while { our_result.lock().unwrap().is_none() } {
            thread::park();
        }

        let result = our_result.lock().unwrap().take();
        result.unwrap()
    }
}

impl UiThread for UiEventLoop {
    fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.thread_id
    }

    fn post(&self, action: UiAction) {
        let (state, available) = &*self.queue;

        let mut state = state.lock().unwrap();
        state.pending.push_back(action);

        available.notify_one();
    }
}

impl Drop for UiEventLoop {
    fn drop(&mut self) {
        // Ask the loop to stop once the queue is drained
        {
            let (state, available) = &*self.queue;

            state.lock().unwrap().shutdown = true;
            available.notify_one();
        }

        // Wait for it to finish (unless this is somehow dropped from one of
        // its own actions, where joining would deadlock)
        if let Some(thread) = self.thread.take() {
            if thread::current().id() != self.thread_id {
                thread.join().ok();
            }
        }
    }
}
