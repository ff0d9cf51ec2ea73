//! Display-refresh-aligned tick source.
//!
//! A ticker thread counts refresh intervals into an additive counter;
//! `pump` drains that counter on the main loop and fires the registered
//! callback at most once, so a slow consumer sees multiple physical
//! ticks coalesced into one logical tick.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Setup failures while creating a [`FrameClock`]. Fatal; not retried.
#[derive(Debug, Error)]
pub enum FrameClockError {
    #[error("refresh rate must be a positive number of Hz, got {0}")]
    InvalidRefreshRate(f32),
    #[error("failed to spawn tick thread")]
    Spawn(#[from] io::Error),
}

/// State shared with the ticker thread
struct Shared {
    pending: AtomicU32,
    running: AtomicBool,
    shutdown: AtomicBool,
}

/// Invokes a registered callback once per display refresh interval,
/// on whichever thread calls [`FrameClock::pump`].
///
/// `C` is the owning context handed to the callback on every tick.
pub struct FrameClock<C> {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<()>>,
    callback: Option<Box<dyn FnMut(&mut C)>>,
}

impl<C> FrameClock<C> {
    /// Create a clock ticking at `refresh_rate` Hz. The clock starts
    /// suspended; call [`FrameClock::start`] to begin tick delivery.
    pub fn new(refresh_rate: f32) -> Result<Self, FrameClockError> {
        if !refresh_rate.is_finite() || refresh_rate <= 0.0 {
            return Err(FrameClockError::InvalidRefreshRate(refresh_rate));
        }

        let interval = Duration::from_secs_f32(refresh_rate.recip());
        let shared = Arc::new(Shared {
            pending: AtomicU32::new(0),
            running: AtomicBool::new(false),
            shutdown: AtomicBool::new(false),
        });

        let handle = thread::Builder::new().name("frame-clock".into()).spawn({
            let shared = Arc::clone(&shared);
            move || tick_loop(&shared, interval)
        })?;

        Ok(Self {
            shared,
            handle: Some(handle),
            callback: None,
        })
    }

    /// Register the callback invoked once per logical tick
    pub fn set_callback(&mut self, callback: impl FnMut(&mut C) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Whether ticks are currently being delivered
    pub fn running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Begin tick delivery; no-op if already running
    pub fn start(&self) {
        if self.running() {
            return;
        }
        self.shared.running.store(true, Ordering::Release);
    }

    /// Halt tick delivery and discard pending ticks; no-op if already
    /// suspended. No callback fires until `start` is called again.
    pub fn suspend(&self) {
        if !self.running() {
            return;
        }
        self.shared.running.store(false, Ordering::Release);
        self.shared.pending.store(0, Ordering::Release);
    }

    /// Drain accumulated ticks and fire the callback at most once.
    /// Call once per frame from the designated execution context.
    pub fn pump(&mut self, ctx: &mut C) {
        if !self.running() {
            return;
        }
        if self.shared.pending.swap(0, Ordering::AcqRel) == 0 {
            return;
        }
        if let Some(callback) = self.callback.as_mut() {
            callback(ctx);
        }
    }
}

impl<C> Drop for FrameClock<C> {
    fn drop(&mut self) {
        if self.running() {
            self.suspend();
        }
        self.shared.shutdown.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn tick_loop(shared: &Shared, interval: Duration) {
    let mut next = Instant::now() + interval;
    while !shared.shutdown.load(Ordering::Acquire) {
        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
        }
        next += interval;

        if shared.running.load(Ordering::Acquire) {
            shared.pending.fetch_add(1, Ordering::AcqRel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fast clock + generous sleeps keep these deterministic on slow CI
    const TEST_HZ: f32 = 1000.0;
    const SETTLE: Duration = Duration::from_millis(50);

    fn counting_clock() -> FrameClock<u32> {
        let mut clock = FrameClock::new(TEST_HZ).unwrap();
        clock.set_callback(|count: &mut u32| *count += 1);
        clock
    }

    #[test]
    fn rejects_bad_refresh_rates() {
        for rate in [0.0, -60.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                FrameClock::<u32>::new(rate),
                Err(FrameClockError::InvalidRefreshRate(_))
            ));
        }
    }

    #[test]
    fn starts_suspended() {
        let mut clock = counting_clock();
        assert!(!clock.running());

        thread::sleep(SETTLE);
        let mut count = 0;
        clock.pump(&mut count);
        assert_eq!(count, 0);
    }

    #[test]
    fn pending_ticks_coalesce_into_one_callback() {
        let mut clock = counting_clock();
        clock.start();

        // Many physical ticks accumulate; one pump fires one callback
        thread::sleep(SETTLE);
        let mut count = 0;
        clock.pump(&mut count);
        assert_eq!(count, 1);
    }

    #[test]
    fn no_callbacks_after_suspend() {
        let mut clock = counting_clock();
        clock.start();
        thread::sleep(SETTLE);
        clock.suspend();

        thread::sleep(SETTLE);
        let mut count = 0;
        clock.pump(&mut count);
        assert_eq!(count, 0);
    }

    #[test]
    fn ticks_resume_after_restart() {
        let mut clock = counting_clock();
        clock.start();
        thread::sleep(SETTLE);
        clock.suspend();

        clock.start();
        thread::sleep(SETTLE);
        let mut count = 0;
        clock.pump(&mut count);
        assert_eq!(count, 1);
    }

    #[test]
    fn start_and_suspend_are_idempotent() {
        let clock: FrameClock<u32> = FrameClock::new(TEST_HZ).unwrap();
        clock.start();
        clock.start();
        assert!(clock.running());

        clock.suspend();
        clock.suspend();
        assert!(!clock.running());
    }
}
