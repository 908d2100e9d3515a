//! Local continuations.
//!
//! A local continuation ([`Lc`]) is the only piece of state a protothread
//! keeps between invocations: a marker naming the suspension point at which
//! the task last stopped. Each invocation of a task *dispatches* on that marker
//! to pick up where it left off, and each suspension point *captures* a new
//! marker before returning.
//!
//! The marker's type parameter `P` is the resume-point encoding. Two
//! encodings are supported, and a task picks whichever it prefers:
//!
//! - **Tagged** points: a field-less `enum` local to the task, with one variant
//!   per suspension point. Points are distinct by construction, and the
//!   compiler checks that every point is handled when dispatching.
//! - **Numbered** points: [`NonZeroU16`], built with [`point`]. A
//!   [`LineLc`] is exactly as large as a `u16`, with `0` reserved as the
//!   "not started" sentinel.
//!
//! Dispatching is an ordinary `match` on [`Lc::resume`], so it may be nested
//! inside any other control flow in the task body.
use core::{fmt, num::NonZeroU16};


/// A local continuation: the point at which a protothread last suspended.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Lc<P> {
    at: Option<P>,
}

/// A local continuation using numbered resume points.
pub type LineLc = Lc<NonZeroU16>;

/// Returns the numbered resume point `n`.
///
/// # Panics
///
/// If `n` is 0, which is reserved for a continuation that has not started. In
/// a `const` context, this is a compile-time error.
#[must_use]
pub const fn point(n: u16) -> NonZeroU16 {
    match NonZeroU16::new(n) {
        Some(point) => point,
        None => panic!("resume point 0 is reserved for `Lc::NOT_STARTED`"),
    }
}

// === impl Lc ===

impl<P> Lc<P> {
    /// A continuation that has not captured any point yet.
    pub const NOT_STARTED: Self = Self { at: None };

    /// Returns a new continuation that has not started.
    #[must_use]
    pub const fn new() -> Self {
        Self::NOT_STARTED
    }

    /// Returns `true` if this continuation has captured a resume point.
    #[inline]
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.at.is_some()
    }
}

impl<P: Copy> Lc<P> {
    /// Resets the continuation, so that the next dispatch starts from the top.
    ///
    /// Any in-flight suspension is discarded.
    #[inline]
    pub fn init(&mut self) {
        self.at = None;
    }

    /// Captures `point` as the location at which the next dispatch resumes.
    #[inline]
    pub fn set(&mut self, point: P) {
        self.at = Some(point);
    }

    /// Returns the point to resume from, or `None` if execution should start
    /// from the top of the task body.
    #[inline]
    #[must_use]
    pub fn resume(&self) -> Option<P> {
        self.at
    }
}

impl LineLc {
    /// Returns the raw encoded resume point, with `0` meaning "not started".
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> u16 {
        match self.at {
            Some(point) => point.get(),
            None => 0,
        }
    }
}

impl<P> Default for Lc<P> {
    fn default() -> Self {
        Self::NOT_STARTED
    }
}

impl<P: fmt::Debug> fmt::Debug for Lc<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.at {
            Some(ref point) => f.debug_tuple("Lc").field(point).finish(),
            None => f.pad("Lc(NOT_STARTED)"),
        }
    }
}
