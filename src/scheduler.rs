// Host scheduling behind a trait: next-frame callbacks and one-shot timers,
// both cancellable, so the loop driver runs under a fake clock in tests.

pub type Handle = u64;

pub trait Scheduler {
    /// Arm a callback for the next display refresh.
    fn schedule_frame(&mut self) -> Handle;
    /// Arm a one-shot timer `delay_ms` from now.
    fn schedule_timeout(&mut self, delay_ms: f64) -> Handle;
    /// Disarm a pending handle. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: Handle);
    /// The handle that has come due since the last poll, if any.
    fn poll(&mut self) -> Option<Handle>;
}

/// Production scheduler backed by the real frame loop and wall clock: an
/// armed frame handle fires on the next poll (the host loop polls once per
/// `next_frame()`), timers fire once `get_time()` passes their deadline.
/// The simulation only ever has one callback outstanding, so one slot of
/// each kind is enough.
pub struct DisplayScheduler {
    next_handle: Handle,
    frame: Option<Handle>,
    timeout: Option<(Handle, f64)>,
}

impl DisplayScheduler {
    pub fn new() -> Self {
        DisplayScheduler {
            next_handle: 0,
            frame: None,
            timeout: None,
        }
    }

    fn alloc(&mut self) -> Handle {
        self.next_handle += 1;
        self.next_handle
    }

    fn now_ms() -> f64 {
        macroquad::time::get_time() * 1000.0
    }
}

impl Scheduler for DisplayScheduler {
    fn schedule_frame(&mut self) -> Handle {
        let h = self.alloc();
        self.frame = Some(h);
        h
    }

    fn schedule_timeout(&mut self, delay_ms: f64) -> Handle {
        let h = self.alloc();
        self.timeout = Some((h, Self::now_ms() + delay_ms));
        h
    }

    fn cancel(&mut self, handle: Handle) {
        if self.frame == Some(handle) {
            self.frame = None;
        }
        if let Some((h, _)) = self.timeout {
            if h == handle {
                self.timeout = None;
            }
        }
    }

    fn poll(&mut self) -> Option<Handle> {
        if let Some(h) = self.frame.take() {
            return Some(h);
        }
        if let Some((h, deadline)) = self.timeout {
            if Self::now_ms() >= deadline {
                self.timeout = None;
                return Some(h);
            }
        }
        None
    }
}
