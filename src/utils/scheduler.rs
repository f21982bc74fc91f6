//! Timer scheduling with explicit cancellation.
//!
//! Every scheduled task is owned by the handle returned from the [`Scheduler`];
//! dropping that handle cancels the task. Controllers hold handles in plain
//! fields so that at most one timer per purpose can be live.

use std::cell::Cell;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler {
    type Handle;

    /// Run `task` every `period_ms` until the handle is dropped.
    fn repeat(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Handle;

    /// Run `task` once after `delay_ms` unless the handle is dropped first.
    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Handle for a browser timer. Dropping it clears the timer.
pub enum TimerHandle {
    Interval(Interval),
    Timeout(Timeout),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimerHandle;

    fn repeat(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TimerHandle {
        TimerHandle::Interval(Interval::new(period_ms, task))
    }

    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::Timeout(Timeout::new(delay_ms, task))
    }
}

/// Resolves once `delay_ms` has passed on `scheduler`.
pub async fn sleep<S: Scheduler>(scheduler: &S, delay_ms: u32) {
    let (done, elapsed) = oneshot::channel::<()>();
    let _timer = scheduler.once(
        delay_ms,
        Box::new(move || {
            let _ = done.send(());
        }),
    );
    // A cancelled timer drops the sender, which also ends the wait.
    let _ = elapsed.await;
}

/// A recurring task with at most one live timer.
pub struct Repeater<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    live: Option<S::Handle>,
}

impl<S: Scheduler> Repeater<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            live: None,
        }
    }

    /// Start ticking `task`. Any timer started earlier is cancelled first.
    pub fn start(&mut self, task: Box<dyn FnMut()>) {
        self.stop();
        self.live = Some(self.scheduler.repeat(self.period_ms, task));
    }

    /// Cancel the live timer. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.live.take().is_some()
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.live.is_some()
    }
}

/// Runs only the last of a burst of calls, `wait_ms` after it arrived.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, wait_ms: u32) -> Self {
        Self {
            scheduler,
            wait_ms,
            pending: None,
        }
    }

    pub fn call(&mut self, task: Box<dyn FnOnce()>) {
        // Replacing the handle cancels the previous call.
        self.pending = Some(self.scheduler.once(self.wait_ms, task));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Admits one pending animation-frame callback at a time.
#[derive(Debug, Clone, Default)]
pub struct FrameThrottle {
    ticking: Rc<Cell<bool>>,
}

impl FrameThrottle {
    /// Returns true when the caller should request a new frame.
    pub fn request(&self) -> bool {
        !self.ticking.replace(true)
    }

    /// Called from the frame callback once its work is done.
    pub fn complete(&self) {
        self.ticking.set(false);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    use super::Scheduler;

    type Task = Rc<RefCell<Box<dyn FnMut()>>>;

    struct Entry {
        task: Weak<RefCell<Box<dyn FnMut()>>>,
        period_ms: u32,
        due_ms: u64,
        repeating: bool,
    }

    /// Manual clock scheduler. Tasks run only when [`FakeScheduler::advance`] is called.
    #[derive(Clone, Default)]
    pub struct FakeScheduler {
        now_ms: Rc<Cell<u64>>,
        scheduled: Rc<Cell<usize>>,
        entries: Rc<RefCell<Vec<Entry>>>,
    }

    pub struct FakeHandle {
        _task: Task,
    }

    impl FakeScheduler {
        /// Total number of `repeat`/`once` calls so far.
        pub fn scheduled(&self) -> usize {
            self.scheduled.get()
        }

        /// Tasks whose handle is still alive and that have not finished.
        pub fn live(&self) -> usize {
            self.entries
                .borrow()
                .iter()
                .filter(|entry| entry.task.strong_count() > 0)
                .count()
        }

        /// Move the clock forward, firing every task that becomes due, in due order.
        pub fn advance(&self, ms: u64) {
            let target = self.now_ms.get() + ms;
            loop {
                let next = {
                    let mut entries = self.entries.borrow_mut();
                    entries.retain(|entry| entry.task.strong_count() > 0);
                    entries
                        .iter_mut()
                        .filter(|entry| entry.due_ms <= target)
                        .min_by_key(|entry| entry.due_ms)
                        .map(|entry| {
                            let due = entry.due_ms;
                            let task = entry.task.clone();
                            if entry.repeating {
                                entry.due_ms += u64::from(entry.period_ms.max(1));
                            } else {
                                entry.task = Weak::new();
                            }
                            (due, task)
                        })
                };
                match next {
                    Some((due, task)) => {
                        self.now_ms.set(due);
                        if let Some(task) = task.upgrade() {
                            let mut run = task.borrow_mut();
                            (*run)();
                        }
                    }
                    None => break,
                }
            }
            self.now_ms.set(target);
        }

        fn push(&self, period_ms: u32, repeating: bool, task: Box<dyn FnMut()>) -> FakeHandle {
            self.scheduled.set(self.scheduled.get() + 1);
            let task: Task = Rc::new(RefCell::new(task));
            self.entries.borrow_mut().push(Entry {
                task: Rc::downgrade(&task),
                period_ms,
                due_ms: self.now_ms.get() + u64::from(period_ms),
                repeating,
            });
            FakeHandle { _task: task }
        }
    }

    impl Scheduler for FakeScheduler {
        type Handle = FakeHandle;

        fn repeat(&self, period_ms: u32, task: Box<dyn FnMut()>) -> FakeHandle {
            self.push(period_ms, true, task)
        }

        fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> FakeHandle {
            let mut task = Some(task);
            self.push(
                delay_ms,
                false,
                Box::new(move || {
                    if let Some(task) = task.take() {
                        task();
                    }
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeScheduler;
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
        let count = Rc::new(Cell::new(0));
        let task = {
            let count = count.clone();
            Box::new(move || count.set(count.get() + 1)) as Box<dyn FnMut()>
        };
        (count, task)
    }

    #[test]
    fn test_repeater_start_twice_keeps_one_timer() {
        let scheduler = FakeScheduler::default();
        let mut repeater = Repeater::new(scheduler.clone(), 5000);

        let (first, task) = counter();
        repeater.start(task);
        let (second, task) = counter();
        repeater.start(task);

        assert_eq!(scheduler.scheduled(), 2);
        assert_eq!(scheduler.live(), 1);

        scheduler.advance(10_000);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_repeater_stop() {
        let scheduler = FakeScheduler::default();
        let mut repeater = Repeater::new(scheduler.clone(), 100);
        assert!(!repeater.stop());

        let (count, task) = counter();
        repeater.start(task);
        scheduler.advance(250);
        assert!(repeater.stop());
        assert!(!repeater.is_running());

        scheduler.advance(1000);
        assert_eq!(count.get(), 2);
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn test_debouncer_runs_only_last_call() {
        let scheduler = FakeScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 100);
        let hits = Rc::new(Cell::new(0));

        for _ in 0..5 {
            let hits = hits.clone();
            debouncer.call(Box::new(move || hits.set(hits.get() + 1)));
            scheduler.advance(50);
        }
        assert_eq!(hits.get(), 0);

        scheduler.advance(100);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_debouncer_cancel() {
        let scheduler = FakeScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 100);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            debouncer.call(Box::new(move || hits.set(hits.get() + 1)));
        }
        debouncer.cancel();
        scheduler.advance(500);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_sleep_waits_for_the_clock() {
        use futures::FutureExt;

        let scheduler = FakeScheduler::default();
        let mut wait = Box::pin(sleep(&scheduler, 250));

        assert!(wait.as_mut().now_or_never().is_none());
        assert_eq!(scheduler.live(), 1);
        scheduler.advance(249);
        assert!(wait.as_mut().now_or_never().is_none());
        scheduler.advance(1);
        assert!(wait.as_mut().now_or_never().is_some());
    }

    #[test]
    fn test_frame_throttle() {
        let throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.clone().request());
        throttle.complete();
        assert!(throttle.request());
    }
}
