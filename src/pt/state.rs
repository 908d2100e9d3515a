use core::fmt;

/// The result of a single invocation of a protothread.
///
/// Every call to [`Task::run`](crate::Task::run) (or [`Pt::run`](crate::Pt::run))
/// reports exactly one `PtState`. [`Waiting`](Self::Waiting) and
/// [`Yielded`](Self::Yielded) mean that the task should be invoked again;
/// [`Exited`](Self::Exited) and [`Ended`](Self::Ended) mean that it has
/// finished. See [`schedule`](crate::schedule).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PtState {
    /// The task is blocked on a condition, or asked to be restarted.
    Waiting = 0,
    /// The task yielded control voluntarily.
    Yielded = 1,
    /// The task exited before reaching the end of its body.
    Exited = 2,
    /// The task ran to the end of its body.
    Ended = 3,
}

impl PtState {
    /// Returns `true` if a task reporting this state should be invoked again.
    #[inline]
    #[must_use]
    pub const fn is_schedulable(self) -> bool {
        matches!(self, Self::Waiting | Self::Yielded)
    }

    /// Returns `true` if a task reporting this state has finished.
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        !self.is_schedulable()
    }
}

impl fmt::Display for PtState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Waiting => "waiting",
            Self::Yielded => "yielded",
            Self::Exited => "exited",
            Self::Ended => "ended",
        })
    }
}
