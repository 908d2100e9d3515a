/// Blocks at the suspension point `$at` until `$cond` is true.
///
/// This belongs at the head of the body arm for `$at`. If `$cond` is false,
/// the enclosing body returns [`Flow::Wait`]`($at)` and the task reports
/// [`PtState::Waiting`]; the next invocation resumes at `$at` and evaluates
/// `$cond` again. Once `$cond` is true, execution falls through to the rest of
/// the arm.
///
/// The point is usually reached by returning [`Flow::Goto`]`($at)` from the
/// preceding segment, so that a condition which already holds does not cost
/// an invocation.
///
/// [`Flow::Wait`]: crate::Flow::Wait
/// [`Flow::Goto`]: crate::Flow::Goto
/// [`PtState::Waiting`]: crate::PtState::Waiting
#[macro_export]
macro_rules! wait_until {
    ($at:expr, $cond:expr $(,)?) => {
        if !$cond {
            return $crate::Flow::Wait($at);
        }
    };
}

/// Blocks at the suspension point `$at` while `$cond` is true.
///
/// This is [`wait_until!`]`($at, !$cond)`.
#[macro_export]
macro_rules! wait_while {
    ($at:expr, $cond:expr $(,)?) => {
        $crate::wait_until!($at, !$cond)
    };
}

/// Yields at the suspension point `$at` until `$cond` is true.
///
/// A yield-until always yields at least once: the segment that reaches `$at`
/// returns [`Flow::Yield`]`($at)` unconditionally, and this macro, at the head
/// of the arm for `$at`, keeps yielding on each re-entry until `$cond` holds.
///
/// # Reaching the point
///
/// Unlike [`wait_until!`], the point must be reached with
/// [`Flow::Yield`]`($at)`, **not** [`Flow::Goto`]`($at)`. The macro itself
/// only yields while `$cond` is false, so a yield-until point reached with
/// `Goto` while `$cond` already holds falls straight through without ever
/// yielding.
///
/// ```
/// use hyphae::{yield_until, Flow, Pt, PtState};
///
/// #[derive(Copy, Clone, Debug)]
/// struct Polled;
///
/// let mut pt = Pt::new();
/// let step = |pt: &mut Pt<Polled>, ready: bool| {
///     pt.run(|at| match at {
///         // not `Flow::Goto(Polled)`!
///         None => Flow::Yield(Polled),
///         Some(Polled) => {
///             yield_until!(Polled, ready);
///             Flow::End
///         }
///     })
/// };
///
/// // the first invocation yields even though the task is already ready.
/// assert_eq!(step(&mut pt, true), PtState::Yielded);
/// assert_eq!(step(&mut pt, true), PtState::Ended);
/// ```
///
/// [`Flow::Yield`]: crate::Flow::Yield
/// [`Flow::Goto`]: crate::Flow::Goto
#[macro_export]
macro_rules! yield_until {
    ($at:expr, $cond:expr $(,)?) => {
        if !$cond {
            return $crate::Flow::Yield($at);
        }
    };
}

/// Blocks at the suspension point `$at` until a child task finishes.
///
/// `$child` is evaluated exactly once each time the arm is entered, and should
/// invoke the child for one step (e.g. `self.child.run()`). While the child
/// reports a [schedulable](crate::schedule) state, the enclosing task reports
/// [`PtState::Waiting`]. On the invocation where the child exits or ends, the
/// enclosing task falls through and continues.
///
/// The child's control block must already be initialized; see
/// [`spawn`](crate::spawn) for a version that does so.
///
/// [`PtState::Waiting`]: crate::PtState::Waiting
#[macro_export]
macro_rules! wait_thread {
    ($at:expr, $child:expr $(,)?) => {
        if $crate::schedule($child) {
            return $crate::Flow::Wait($at);
        }
    };
}

/// Blocks at the suspension point `$at` until the [`Sem`] `$sem` has a
/// nonzero count, then decrements it.
///
/// The count is decremented exactly once, on the invocation that passes the
/// wait; invocations which remain blocked leave it untouched.
///
/// [`Sem`]: crate::sync::Sem
#[macro_export]
macro_rules! sem_wait {
    ($at:expr, $sem:expr $(,)?) => {
        if !$crate::sync::Sem::try_wait(&$sem) {
            return $crate::Flow::Wait($at);
        }
    };
}
