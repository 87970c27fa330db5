//! Scheduling primitives shared by the page behaviours: a replaceable
//! delayed task, a trailing-edge debouncer built on it, and a throttle that
//! coalesces high-frequency input to one update per animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// At most one pending delayed action. Scheduling a new one cancels the
/// previous one if it has not fired yet.
#[derive(Clone, Default)]
pub struct CancelableTask {
    slot: Rc<RefCell<Option<Timeout>>>,
}

impl CancelableTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, delay_ms: u32, action: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping the old Timeout clears it.
        *self.slot.borrow_mut() = Some(Timeout::new(delay_ms, action));
    }
}

/// Collapses bursts of `trigger` calls into one trailing call `wait_ms`
/// after the last trigger.
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    task: CancelableTask,
    callback: Rc<dyn Fn()>,
}

impl Debouncer {
    pub fn new<F>(wait_ms: u32, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        Debouncer {
            wait_ms,
            task: CancelableTask::new(),
            callback: Rc::new(callback),
        }
    }

    pub fn trigger(&self) {
        let callback = self.callback.clone();
        self.task.schedule(self.wait_ms, move || callback());
    }
}

/// Holds the latest value offered between two frames.
#[derive(Debug)]
pub struct Coalescer<T> {
    latest: Option<T>,
    scheduled: bool,
}

impl<T> Default for Coalescer<T> {
    fn default() -> Self {
        Coalescer {
            latest: None,
            scheduled: false,
        }
    }
}

impl<T> Coalescer<T> {
    /// Stores `value`, replacing any unflushed one. Returns true when the
    /// caller has to request a frame.
    pub fn offer(&mut self, value: T) -> bool {
        self.latest = Some(value);
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    pub fn flush(&mut self) -> Option<T> {
        self.scheduled = false;
        self.latest.take()
    }
}

struct ThrottleInner<T> {
    pending: RefCell<Coalescer<T>>,
    handler: RefCell<Box<dyn FnMut(T)>>,
    frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl<T: 'static> ThrottleInner<T> {
    fn run_frame(&self) {
        let next = self.pending.borrow_mut().flush();
        if let Some(value) = next {
            (self.handler.borrow_mut())(value);
        }
    }
}

/// Runs `handler` at most once per animation frame with the most recent
/// value pushed since the previous frame.
pub struct FrameThrottle<T: 'static> {
    inner: Rc<ThrottleInner<T>>,
}

impl<T: 'static> Clone for FrameThrottle<T> {
    fn clone(&self) -> Self {
        FrameThrottle {
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> FrameThrottle<T> {
    pub fn new<F>(handler: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        let inner = Rc::new(ThrottleInner {
            pending: RefCell::new(Coalescer::default()),
            handler: RefCell::new(Box::new(handler)),
            frame: RefCell::new(None),
        });
        let frame_inner = inner.clone();
        *inner.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_inner.run_frame();
        }) as Box<dyn FnMut()>));
        FrameThrottle { inner }
    }

    pub fn push(&self, value: T) {
        let needs_frame = self.inner.pending.borrow_mut().offer(value);
        if !needs_frame {
            return;
        }
        let requested = web_sys::window().and_then(|window| {
            let frame = self.inner.frame.borrow();
            frame.as_ref().and_then(|callback| {
                window
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .ok()
            })
        });
        if requested.is_none() {
            // No frame scheduler, apply right away.
            self.inner.run_frame();
        }
    }
}
