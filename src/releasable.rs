use super::traits::*;

use log::trace;

use std::sync::*;

///
/// Handle that runs a listener's release action at most once, on the thread
/// that owns the listener's widget
///
/// Handles can be cloned and released from any thread: if the calling thread
/// is the UI thread the action runs immediately, otherwise it is posted to
/// the UI thread. However many clones exist and however many times `release`
/// is called, the action runs exactly once; releasing a handle whose action
/// has already run (or whose source has already finished) has no effect.
///
#[derive(Clone)]
pub struct ReleaseHandle {
    /// The thread the release action must run on
    ui_thread:  Arc<dyn UiThread>,

    /// The release action, while it has not been taken yet
    action:     Arc<Mutex<Option<UiAction>>>
}

impl ReleaseHandle {
    ///
    /// Creates a handle that will perform the specified release action
    ///
    pub fn new<TAction>(ui_thread: Arc<dyn UiThread>, release: TAction) -> ReleaseHandle
    where TAction: 'static+Send+FnOnce() {
        ReleaseHandle {
            ui_thread:  ui_thread,
            action:     Arc::new(Mutex::new(Some(Box::new(release))))
        }
    }

    ///
    /// Runs the release action if it has not already run
    ///
    pub fn release(&self) {
        // Claim the action: only one caller can take it
        let action = self.action.lock().unwrap().take();

        if let Some(action) = action {
            if self.ui_thread.is_ui_thread() {
                // Already on the UI thread, so release immediately
                trace!("Releasing listener on the UI thread");
                action();
            } else {
                // Marshal the release onto the UI thread
                trace!("Posting listener release to the UI thread");
                self.ui_thread.post(action);
            }
        }
    }

    ///
    /// True once the release action has been claimed (it may still be queued
    /// on the UI thread rather than performed)
    ///
    pub fn is_released(&self) -> bool {
        self.action.lock().unwrap().is_none()
    }
}

///
/// Owns a registration on behalf of a stream: releases it when dropped
///
pub (crate) struct RegistrationGuard {
    handle: ReleaseHandle
}

impl RegistrationGuard {
    ///
    /// Creates a guard that will release the specified handle on drop
    ///
    pub fn new(handle: ReleaseHandle) -> RegistrationGuard {
        RegistrationGuard {
            handle: handle
        }
    }

    ///
    /// A handle that can release this registration from anywhere
    ///
    pub fn handle(&self) -> ReleaseHandle {
        self.handle.clone()
    }
}

impl Drop for RegistrationGuard {
    fn drop(&mut self) {
        self.handle.release();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::ui_thread::*;

    use std::thread;

    #[test]
    fn releases_exactly_once() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let count       = Arc::new(Mutex::new(0));

        let release_count   = Arc::clone(&count);
        let handle          = ReleaseHandle::new(ui_thread.clone(), move || *release_count.lock().unwrap() += 1);

        handle.release();
        handle.release();
        handle.release();

        ui_thread.sync(|| ());
        assert!(*count.lock().unwrap() == 1);
        assert!(handle.is_released());
    }

    #[test]
    fn releases_once_across_clones_and_threads() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let count       = Arc::new(Mutex::new(0));

        let release_count   = Arc::clone(&count);
        let handle          = ReleaseHandle::new(ui_thread.clone(), move || *release_count.lock().unwrap() += 1);

        let threads = (0..8)
            .map(|_| {
                let handle = handle.clone();
                thread::spawn(move || handle.release())
            })
            .collect::<Vec<_>>();

        for thread in threads {
            thread.join().unwrap();
        }

        ui_thread.sync(|| ());
        assert!(*count.lock().unwrap() == 1);
    }

    #[test]
    fn release_runs_on_the_ui_thread() {
        let ui_thread       = Arc::new(UiEventLoop::new());
        let released_on_ui  = Arc::new(Mutex::new(false));

        let check_thread    = Arc::clone(&ui_thread);
        let check_released  = Arc::clone(&released_on_ui);
        let handle          = ReleaseHandle::new(ui_thread.clone(), move || *check_released.lock().unwrap() = check_thread.is_ui_thread());

        // Released from this thread, so the action should be marshaled over
        handle.release();

        ui_thread.sync(|| ());
        assert!(*released_on_ui.lock().unwrap() == true);
    }

    #[test]
    fn guard_releases_on_drop() {
        let ui_thread   = Arc::new(UiEventLoop::new());
        let count       = Arc::new(Mutex::new(0));

        let release_count   = Arc::clone(&count);
        let handle          = ReleaseHandle::new(ui_thread.clone(), move || *release_count.lock().unwrap() += 1);

        {
            let _guard = RegistrationGuard::new(handle.clone());
        }

        ui_thread.sync(|| ());
        assert!(*count.lock().unwrap() == 1);

        // The guard already released, so releasing the handle again does nothing
        handle.release();

        ui_thread.sync(|| ());
        assert!(*count.lock().unwrap() == 1);
    }
}
