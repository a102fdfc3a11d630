/*!
 * Shared fixtures: a deterministic clock and a background counting thread
 */

#![allow(dead_code)]

use parking_lot::Mutex;
use probe_sync::Clock;
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Clock that only moves when slept on
pub struct ManualClock {
    now: Cell<Instant>,
    sleeps: Cell<u32>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
            sleeps: Cell::new(0),
        }
    }

    pub fn sleeps(&self) -> u32 {
        self.sleeps.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
        self.sleeps.set(self.sleeps.get() + 1);
    }
}

/// Count the background thread stops at
pub const COUNT_LIMIT: u64 = 501;

/// Shared counter incremented by a background thread until it reaches
/// [`COUNT_LIMIT`] or is stopped
pub struct CountingThread {
    count: Arc<Mutex<u64>>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CountingThread {
    pub fn start() -> Self {
        let count = Arc::new(Mutex::new(0u64));
        let stop = Arc::new(AtomicBool::new(false));

        let handle = {
            let count = count.clone();
            let stop = stop.clone();
            thread::spawn(move || {
                while !stop.load(Ordering::Acquire) {
                    let mut count = count.lock();
                    if *count >= COUNT_LIMIT {
                        break;
                    }
                    *count += 1;
                }
            })
        };

        Self {
            count,
            stop,
            handle: Some(handle),
        }
    }

    pub fn count(&self) -> u64 {
        *self.count.lock()
    }

    /// Sampler closure suitable for [`probe_sync::sampled`]
    pub fn sampler(&self) -> impl FnMut() -> u64 {
        let count = self.count.clone();
        move || *count.lock()
    }
}

impl Drop for CountingThread {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
