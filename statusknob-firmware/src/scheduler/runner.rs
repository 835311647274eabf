//! Task driver
//!
//! Turns a [`CooperativeTask`] into the body of an embassy task: lock the
//! shared context, poll once, release it, then await an embassy timer for
//! the delay the task asked for.

use embassy_time::{Instant, Timer};
use log::{error, info, warn};
use statusknob_hal::MonotonicClock;

use super::{CooperativeTask, TaskError, TaskFailure};
use crate::context::SharedContext;

/// Millisecond clock on the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Wraps like a hardware tick counter
        Instant::now().as_millis() as u32
    }
}

/// Poll `task` until it fails fatally
///
/// Recoverable errors are logged and the task keeps its cadence.
pub async fn run_task<T: CooperativeTask>(mut task: T, ctx: &SharedContext) -> TaskFailure {
    let name = task.name();
    info!("{} task started", name);

    loop {
        let now_ms = EmbassyClock.now_ms();
        let (result, delay_ms) = ctx.lock(|cell| {
            let mut ctx = cell.borrow_mut();
            let result = task.poll(&mut ctx, now_ms);
            (result, task.next_delay_ms(&ctx))
        });

        match result {
            Ok(()) => {}
            Err(TaskError::Recoverable(reason)) => warn!("{} task: {}", name, reason),
            Err(TaskError::Fatal(reason)) => {
                error!("{} task failed: {}", name, reason);
                return TaskFailure { task: name, reason };
            }
        }

        Timer::after_millis(u64::from(delay_ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_futures::select::{select, Either};

    use crate::context::AppContext;
    use crate::tasks::test_support::context;

    /// Records every poll into a shared log
    struct Scripted {
        name: &'static str,
        delay_ms: u32,
        polls: u32,
        fail_at: Option<(u32, bool)>,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Scripted {
        fn new(name: &'static str, delay_ms: u32, log: &Rc<RefCell<Vec<&'static str>>>) -> Self {
            Self {
                name,
                delay_ms,
                polls: 0,
                fail_at: None,
                log: log.clone(),
            }
        }

        fn failing_at(mut self, poll: u32, fatal: bool) -> Self {
            self.fail_at = Some((poll, fatal));
            self
        }
    }

    impl CooperativeTask for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        fn poll(&mut self, _ctx: &mut AppContext, _now_ms: u32) -> Result<(), TaskError> {
            self.polls += 1;
            self.log.borrow_mut().push(self.name);
            match self.fail_at {
                Some((at, true)) if self.polls >= at => Err(TaskError::fatal("history full")),
                Some((at, false)) if self.polls >= at => Err(TaskError::recoverable("bus busy")),
                _ => Ok(()),
            }
        }

        fn next_delay_ms(&self, _ctx: &AppContext) -> u32 {
            self.delay_ms
        }
    }

    fn count(log: &Rc<RefCell<Vec<&'static str>>>, name: &str) -> usize {
        log.borrow().iter().filter(|n| **n == name).count()
    }

    #[test]
    fn test_fatal_error_ends_task() {
        let ctx = context(3).into_shared();
        let log = Rc::default();
        let task = Scripted::new("Gesture", 1, &log).failing_at(3, true);

        let failure = block_on(run_task(task, &ctx));
        assert_eq!(failure.task, "Gesture");
        assert_eq!(failure.reason, "history full");
        assert_eq!(count(&log, "Gesture"), 3);
    }

    #[test]
    fn test_recoverable_error_keeps_polling() {
        let ctx = context(3).into_shared();
        let log = Rc::default();
        let task = Scripted::new("Display", 5, &log).failing_at(1, false);

        let outcome = block_on(select(run_task(task, &ctx), Timer::after_millis(60)));
        assert!(matches!(outcome, Either::Second(())));
        assert!(count(&log, "Display") >= 2);
    }

    #[test]
    fn test_tasks_paced_by_requested_delay() {
        let ctx = context(3).into_shared();
        let log = Rc::default();
        let fast = Scripted::new("Fast", 10, &log);
        let slow = Scripted::new("Slow", 100, &log);

        let outcome = block_on(select(
            join(run_task(fast, &ctx), run_task(slow, &ctx)),
            Timer::after_millis(250),
        ));
        assert!(matches!(outcome, Either::Second(())));

        // Delays are lower bounds, so only the upper counts are exact
        let fast_polls = count(&log, "Fast");
        let slow_polls = count(&log, "Slow");
        assert!((3..=26).contains(&fast_polls), "fast polled {fast_polls} times");
        assert!((1..=3).contains(&slow_polls), "slow polled {slow_polls} times");
        assert!(fast_polls > slow_polls);
    }

    #[test]
    fn test_embassy_clock_advances() {
        let start = EmbassyClock.now_ms();
        block_on(Timer::after_millis(15));
        assert!(EmbassyClock.now_ms().wrapping_sub(start) >= 15);
    }
}
