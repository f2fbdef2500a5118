use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub type Task = Box<dyn FnOnce()>;
pub type FrameTask = Box<dyn FnOnce(f64)>;

/// Where delayed and per-frame work gets queued.
///
/// Tasks only ever run later than requested, never earlier. Once
/// `cancel_all` has been called nothing queued before or after it runs.
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Task);
    /// Runs `task` on the next animation frame with the frame timestamp in ms.
    fn next_frame(&self, task: FrameTask);
    fn cancel_all(&self);
}

/// Scheduler backed by browser timeouts and `requestAnimationFrame`.
pub struct BrowserScheduler {
    window: Window,
    cancelled: Rc<Cell<bool>>,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            cancelled: Rc::new(Cell::new(false)),
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, task: Task) {
        if self.cancelled.get() {
            return;
        }
        let cancelled = self.cancelled.clone();
        let timeout = Timeout::new(delay_ms, move || {
            if !cancelled.get() {
                task();
            }
        });
        timeout.forget();
    }

    fn next_frame(&self, task: FrameTask) {
        if self.cancelled.get() {
            return;
        }
        let cancelled = self.cancelled.clone();
        let callback = Closure::once_into_js(move |timestamp: f64| {
            if !cancelled.get() {
                task(timestamp);
            }
        });
        if let Err(err) = self.window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", err);
        }
    }

    fn cancel_all(&self) {
        self.cancelled.set(true);
    }
}

/// Collapses bursts of calls into one call per interval.
///
/// The first call in a quiet period schedules `f` for `interval_ms` later;
/// calls arriving while that is pending are dropped.
pub struct Throttle {
    interval_ms: u32,
    pending: Rc<Cell<bool>>,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            pending: Rc::new(Cell::new(false)),
        }
    }

    pub fn call<F>(&self, scheduler: &dyn Scheduler, f: F)
    where
        F: FnOnce() + 'static,
    {
        if self.pending.get() {
            return;
        }
        self.pending.set(true);
        let pending = self.pending.clone();
        scheduler.after(
            self.interval_ms,
            Box::new(move || {
                pending.set(false);
                f();
            }),
        );
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use super::{FrameTask, Scheduler, Task};

    #[derive(Default)]
    struct ManualState {
        now: u64,
        seq: u64,
        timers: BTreeMap<(u64, u64), Task>,
        frames: Vec<FrameTask>,
        cancelled: bool,
    }

    /// Fake-clock scheduler. Time only moves through `advance`, frames only
    /// fire through `run_frame`.
    #[derive(Default)]
    pub struct ManualScheduler {
        state: RefCell<ManualState>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.state.borrow().now
        }

        pub fn pending_timers(&self) -> usize {
            self.state.borrow().timers.len()
        }

        pub fn pending_frames(&self) -> usize {
            self.state.borrow().frames.len()
        }

        /// Moves the clock forward, running due timers in (due time, insertion) order.
        pub fn advance(&self, ms: u64) {
            let until = self.now() + ms;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    match state.timers.keys().next().copied() {
                        Some(key) if key.0 <= until => {
                            state.now = key.0;
                            state.timers.remove(&key)
                        }
                        _ => None,
                    }
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.state.borrow_mut().now = until;
        }

        /// Fires every frame callback queued so far.
        pub fn run_frame(&self, timestamp: f64) {
            let frames = std::mem::take(&mut self.state.borrow_mut().frames);
            for frame in frames {
                frame(timestamp);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn after(&self, delay_ms: u32, task: Task) {
            let mut state = self.state.borrow_mut();
            if state.cancelled {
                return;
            }
            let due = state.now + u64::from(delay_ms);
            let seq = state.seq;
            state.seq += 1;
            state.timers.insert((due, seq), task);
        }

        fn next_frame(&self, task: FrameTask) {
            let mut state = self.state.borrow_mut();
            if !state.cancelled {
                state.frames.push(task);
            }
        }

        fn cancel_all(&self) {
            let mut state = self.state.borrow_mut();
            state.cancelled = true;
            state.timers.clear();
            state.frames.clear();
        }
    }
}
