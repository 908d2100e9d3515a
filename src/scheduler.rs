//! Deciding when to invoke protothreads again.
//!
//! The core of scheduling is the [`schedule`] predicate: a task which reports
//! [`PtState::Waiting`] or [`PtState::Yielded`] wants to be invoked again, and
//! a task which reports [`PtState::Exited`] or [`PtState::Ended`] is done. How
//! often, and in what order, tasks are invoked is up to the caller. The
//! simplest driver is a loop:
//!
//! ```
//! use hyphae::{Flow, Pt, PtState};
//!
//! let mut pt = Pt::<()>::new();
//! let mut calls = 0;
//! while hyphae::schedule(pt.run(|at| match at {
//!     None => Flow::Yield(()),
//!     Some(()) => Flow::End,
//! })) {
//!     calls += 1;
//! }
//! assert_eq!(calls, 1);
//! ```
//!
//! With the "alloc" feature flag enabled, this module also provides a
//! round-robin [`Scheduler`] which drives a set of [`Task`]s together.
use crate::PtState;


/// Returns `true` if a task that reported `state` should be invoked again.
///
/// This is `true` for [`PtState::Waiting`] and [`PtState::Yielded`], and
/// `false` for [`PtState::Exited`] and [`PtState::Ended`].
#[inline]
#[must_use]
pub const fn schedule(state: PtState) -> bool {
    state.is_schedulable()
}

feature! {
    #![feature = "alloc"]

    use crate::Task;
    use alloc::vec::Vec;
    use core::fmt;

    /// A round-robin driver for a set of borrowed [`Task`]s.
    ///
    /// Each [`tick`](Self::tick) invokes every task which has not yet finished
    /// exactly once, in the order the tasks were [spawned](Self::spawn).
    /// Finished tasks are dropped from the run list.
    ///
    /// # Examples
    ///
    /// ```
    /// use hyphae::{scheduler::Scheduler, Flow, Pt};
    ///
    /// let (mut pt_a, mut pt_b) = (Pt::<()>::new(), Pt::<()>::new());
    /// let mut a = hyphae::from_fn(|| pt_a.run(|at| match at {
    ///     None => Flow::Yield(()),
    ///     Some(()) => Flow::End,
    /// }));
    /// let mut b = hyphae::from_fn(|| pt_b.run(|_| Flow::Exit));
    ///
    /// let mut scheduler = Scheduler::new();
    /// scheduler.spawn(&mut a);
    /// scheduler.spawn(&mut b);
    ///
    /// let ticks = scheduler.run(10).expect("tasks should finish");
    /// assert_eq!(ticks, 2);
    /// assert!(scheduler.is_empty());
    /// ```
    pub struct Scheduler<'a> {
        tasks: Vec<&'a mut dyn Task>,
    }

    /// Metrics recorded during a call to [`Scheduler::tick`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    #[non_exhaustive]
    pub struct Tick {
        /// The total number of tasks invoked on this tick.
        pub polled: usize,

        /// The number of invoked tasks that reported [`PtState::Ended`] on this
        /// tick.
        pub completed: usize,

        /// The number of invoked tasks that reported [`PtState::Exited`] on
        /// this tick.
        pub exited: usize,

        /// `true` if any task remains schedulable after this tick.
        pub has_remaining: bool,
    }

    /// Returned by [`Scheduler::run`] when its tasks did not all finish within
    /// the allowed number of ticks.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
    #[error("{remaining} task(s) still schedulable after {ticks} ticks")]
    pub struct Stalled {
        /// The number of ticks that were run.
        pub ticks: usize,
        /// The number of tasks that had not finished.
        pub remaining: usize,
    }

    // === impl Scheduler ===

    impl<'a> Scheduler<'a> {
        /// Returns a new `Scheduler` with no tasks.
        #[must_use]
        pub const fn new() -> Self {
            Self { tasks: Vec::new() }
        }

        /// Adds `task` to the end of the run list.
        ///
        /// The task is invoked for the first time on the next
        /// [`tick`](Self::tick). It is not initialized by the scheduler.
        pub fn spawn(&mut self, task: &'a mut dyn Task) {
            self.tasks.push(task);
            test_trace!(tasks = self.tasks.len(), "Scheduler::spawn");
        }

        /// Returns the number of tasks which have not yet finished.
        #[must_use]
        pub fn len(&self) -> usize {
            self.tasks.len()
        }

        /// Returns `true` if every spawned task has finished.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.tasks.is_empty()
        }

        /// Invokes every unfinished task once, in spawn order.
        pub fn tick(&mut self) -> Tick {
            let mut tick = Tick::default();
            self.tasks.retain_mut(|task| {
                let state = task.run();
                tick.polled += 1;
                match state {
                    PtState::Ended => tick.completed += 1,
                    PtState::Exited => tick.exited += 1,
                    PtState::Waiting | PtState::Yielded => {}
                }
                test_trace!(task = tick.polled, %state);
                schedule(state)
            });
            tick.has_remaining = !self.tasks.is_empty();

            debug!(
                tick.polled,
                tick.completed,
                tick.exited,
                tick.has_remaining
            );

            tick
        }

        /// Ticks the scheduler until every task has finished, running at most
        /// `max_ticks` ticks.
        ///
        /// Returns the number of ticks run, or [`Stalled`] if tasks remain
        /// after `max_ticks` ticks. Protothreads have no timeouts of their
        /// own; this bound is how a caller keeps a task that never finishes
        /// from spinning forever.
        pub fn run(&mut self, max_ticks: usize) -> Result<usize, Stalled> {
            let mut ticks = 0;
            while !self.is_empty() {
                if ticks == max_ticks {
                    return Err(Stalled {
                        ticks,
                        remaining: self.len(),
                    });
                }
                self.tick();
                ticks += 1;
            }
            Ok(ticks)
        }
    }

    impl Default for Scheduler<'_> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl fmt::Debug for Scheduler<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Scheduler")
                .field("tasks", &self.tasks.len())
                .finish()
        }
    }
}
