//! Protothread control blocks and the task state machine.
//!
//! A protothread is an ordinary function that is invoked repeatedly, and
//! which picks up from wherever it last suspended on each invocation. Its body
//! is written as a `match` on the point it is resuming from (see
//! [`Lc`](crate::lc::Lc)): the arm for `None` is the top of the body, and every
//! suspension point gets its own arm that starts at that point. Each arm
//! returns a [`Flow`] saying what happens next:
//!
//! | `Flow`          | effect                                              | reports    |
//! |-----------------|-----------------------------------------------------|------------|
//! | [`Goto(p)`]     | capture `p` and keep running at `p` in this call    |            |
//! | [`Wait(p)`]     | capture `p` and stop                                | `Waiting`  |
//! | [`Yield(p)`]    | capture `p` and stop                                | `Yielded`  |
//! | [`Exit`]        | reset the continuation and stop                     | `Exited`   |
//! | [`Restart`]     | reset the continuation and stop                     | `Waiting`  |
//! | [`End`]         | reset the continuation and stop                     | `Ended`    |
//!
//! Blocking conditions are checked at the head of the arm they guard, with
//! the [`wait_until!`], [`wait_while!`], [`yield_until!`], [`wait_thread!`]
//! and [`sem_wait!`] macros. Because the head of an arm runs both when the
//! point is first reached (via [`Goto`]) and on every later invocation that
//! resumes there, the condition is re-evaluated each time.
//!
//! Variables which must survive a suspension cannot live on the stack of the
//! body, since every invocation re-enters it from scratch. They belong in the
//! struct implementing [`Protothread`], or in whatever scope owns the
//! closure passed to [`Pt::run`].
//!
//! [`Goto(p)`]: Flow::Goto
//! [`Goto`]: Flow::Goto
//! [`Wait(p)`]: Flow::Wait
//! [`Yield(p)`]: Flow::Yield
//! [`Exit`]: Flow::Exit
//! [`Restart`]: Flow::Restart
//! [`End`]: Flow::End
//! [`wait_until!`]: crate::wait_until
//! [`wait_while!`]: crate::wait_while
//! [`yield_until!`]: crate::yield_until
//! [`wait_thread!`]: crate::wait_thread
//! [`sem_wait!`]: crate::sem_wait
use crate::lc::Lc;
use core::{fmt, ops::ControlFlow};

mod state;
pub use self::state::PtState;


/// A protothread control block.
///
/// This holds the task's [local continuation](Lc), and nothing else. Any other
/// state a task needs across suspensions is stored alongside it by the task's
/// owner.
#[derive(Clone, PartialEq, Eq)]
pub struct Pt<P> {
    lc: Lc<P>,
}

/// What a protothread body does after running one segment.
///
/// See [the module-level documentation](self) for details.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use = "a `Flow` does nothing unless it is returned to the task driver"]
pub enum Flow<P> {
    /// Reach the suspension point `P` and continue executing there, within the
    /// current invocation.
    Goto(P),
    /// Suspend at `P`, reporting [`PtState::Waiting`].
    Wait(P),
    /// Suspend at `P`, reporting [`PtState::Yielded`].
    Yield(P),
    /// Stop the task and reset it, reporting [`PtState::Exited`].
    Exit,
    /// Reset the task so the next invocation starts from the top, reporting
    /// [`PtState::Waiting`].
    Restart,
    /// The end of the task body: reset it, reporting [`PtState::Ended`].
    End,
}

/// A protothread with its own control block and persistent state.
///
/// Implementors hold a [`Pt`] along with every variable that must outlive a
/// suspension. The [`Task`] implementation for a `Protothread` drives
/// [`resume`](Self::resume) until it suspends or finishes.
///
/// # Examples
///
/// ```
/// use hyphae::{wait_until, Flow, Protothread, Pt, PtState, Task};
///
/// #[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// enum At {
///     Ready,
///     Again,
/// }
///
/// struct Blinky {
///     pt: Pt<At>,
///     ready: bool,
///     blinks: usize,
/// }
///
/// impl Protothread for Blinky {
///     type Point = At;
///
///     fn pt(&mut self) -> &mut Pt<At> {
///         &mut self.pt
///     }
///
///     fn resume(&mut self, at: Option<At>) -> Flow<At> {
///         match at {
///             None => Flow::Goto(At::Ready),
///             Some(At::Ready) => {
///                 wait_until!(At::Ready, self.ready);
///                 self.blinks += 1;
///                 Flow::Yield(At::Again)
///             }
///             Some(At::Again) => {
///                 self.blinks += 1;
///                 Flow::End
///             }
///         }
///     }
/// }
///
/// let mut blinky = Blinky { pt: Pt::new(), ready: false, blinks: 0 };
/// assert_eq!(blinky.run(), PtState::Waiting);
/// blinky.ready = true;
/// assert_eq!(blinky.run(), PtState::Yielded);
/// assert_eq!(blinky.run(), PtState::Ended);
/// assert_eq!(blinky.blinks, 2);
/// ```
pub trait Protothread {
    /// The type identifying this task's suspension points.
    type Point: Copy + fmt::Debug;

    /// Returns this task's control block.
    fn pt(&mut self) -> &mut Pt<Self::Point>;

    /// Runs the segment of the task body starting at `at` (or at the top of
    /// the body, if `at` is `None`).
    fn resume(&mut self, at: Option<Self::Point>) -> Flow<Self::Point>;
}

/// A unit of cooperative work that can be invoked one step at a time.
///
/// This trait is object safe, so that tasks with different resume point types
/// may be driven together (see [`Scheduler`](crate::scheduler::Scheduler)).
pub trait Task {
    /// Invokes the task once, returning the state it suspended (or finished)
    /// in.
    fn run(&mut self) -> PtState;
}

/// A [`Task`] that invokes a closure. Returned by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Returns a [`Task`] which calls `f` each time it is run.
///
/// This is the usual way to turn a closure wrapping [`Pt::run`] into a task.
///
/// # Examples
///
/// ```
/// use hyphae::{Flow, Pt, PtState, Task};
///
/// let mut pt = Pt::<()>::new();
/// let mut count = 0;
/// let mut task = hyphae::from_fn(|| {
///     pt.run(|at| match at {
///         None => {
///             count += 1;
///             Flow::Yield(())
///         }
///         Some(()) => Flow::End,
///     })
/// });
///
/// assert_eq!(task.run(), PtState::Yielded);
/// assert_eq!(task.run(), PtState::Ended);
/// drop(task);
/// assert_eq!(count, 1);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut() -> PtState,
{
    FromFn { f }
}

/// Initializes the child task control block `child`, then continues at the
/// suspension point `at`, where the parent waits for the child to finish.
///
/// The arm for `at` should start with [`wait_thread!`](crate::wait_thread),
/// invoking the child once per parent invocation:
///
/// ```
/// use hyphae::{wait_thread, Flow, Protothread, Pt, PtState, Task};
///
/// #[derive(Copy, Clone, Debug)]
/// struct Done;
///
/// struct Child {
///     pt: Pt<Done>,
/// }
///
/// impl Protothread for Child {
///     type Point = Done;
///     fn pt(&mut self) -> &mut Pt<Done> {
///         &mut self.pt
///     }
///     fn resume(&mut self, at: Option<Done>) -> Flow<Done> {
///         match at {
///             None => Flow::Yield(Done),
///             Some(Done) => Flow::End,
///         }
///     }
/// }
///
/// #[derive(Copy, Clone, Debug)]
/// struct Spawned;
///
/// let mut pt = Pt::new();
/// let mut child = Child { pt: Pt::new() };
/// let mut parent = hyphae::from_fn(|| {
///     pt.run(|at| match at {
///         None => hyphae::spawn(child.pt(), Spawned),
///         Some(Spawned) => {
///             wait_thread!(Spawned, child.run());
///             Flow::End
///         }
///     })
/// });
///
/// assert_eq!(parent.run(), PtState::Waiting);
/// assert_eq!(parent.run(), PtState::Ended);
/// ```
pub fn spawn<P, Q>(child: &mut Pt<Q>, at: P) -> Flow<P>
where
    Q: Copy + fmt::Debug,
{
    child.init();
    Flow::Goto(at)
}

// === impl Pt ===

impl<P> Pt<P> {
    /// Returns a new control block for a task that has not started.
    #[must_use]
    pub const fn new() -> Self {
        Self { lc: Lc::new() }
    }

    /// Returns `true` if the task has suspended somewhere in its body.
    #[inline]
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.lc.is_started()
    }

    /// Returns this task's local continuation.
    #[inline]
    #[must_use]
    pub const fn lc(&self) -> &Lc<P> {
        &self.lc
    }
}

impl<P: Copy + fmt::Debug> Pt<P> {
    /// Resets the control block, so that the next invocation starts at the
    /// top of the task body.
    ///
    /// This may be called at any time, and discards any in-flight suspension.
    #[inline]
    pub fn init(&mut self) {
        test_trace!(lc = ?self.lc, "Pt::init");
        self.lc.init();
    }

    /// Returns the point the next invocation will resume from, or `None` if
    /// it will start at the top of the task body.
    #[inline]
    #[must_use]
    pub fn resume_point(&self) -> Option<P> {
        self.lc.resume()
    }

    /// Invokes the task body `body` once.
    ///
    /// `body` is called with the point to resume from, and is called again
    /// each time it returns [`Flow::Goto`], until it suspends or finishes.
    /// Anything the caller does before calling `run` happens on every
    /// invocation, including those that resume in the middle of the body.
    pub fn run<F>(&mut self, mut body: F) -> PtState
    where
        F: FnMut(Option<P>) -> Flow<P>,
    {
        loop {
            let at = self.dispatch();
            if let ControlFlow::Break(state) = self.advance(body(at)) {
                return state;
            }
        }
    }

    /// Returns the point the body should resume from.
    pub(crate) fn dispatch(&self) -> Option<P> {
        let at = self.lc.resume();
        trace!(?at, "protothread dispatched");
        at
    }

    /// Applies a [`Flow`] returned by the task body to this control block.
    pub(crate) fn advance(&mut self, flow: Flow<P>) -> ControlFlow<PtState> {
        test_trace!(?flow, lc = ?self.lc, "Pt::advance");
        let state = match flow {
            Flow::Goto(at) => {
                self.lc.set(at);
                return ControlFlow::Continue(());
            }
            Flow::Wait(at) => {
                self.lc.set(at);
                PtState::Waiting
            }
            Flow::Yield(at) => {
                self.lc.set(at);
                PtState::Yielded
            }
            Flow::Exit => {
                self.lc.init();
                PtState::Exited
            }
            Flow::Restart => {
                self.lc.init();
                PtState::Waiting
            }
            Flow::End => {
                self.lc.init();
                PtState::Ended
            }
        };
        trace!(%state, lc = ?self.lc, "protothread reported state");
        ControlFlow::Break(state)
    }
}

impl<P> Default for Pt<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Debug> fmt::Debug for Pt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pt").field("lc", &self.lc).finish()
    }
}

// === impl Task ===

impl<T> Task for T
where
    T: Protothread + ?Sized,
{
    fn run(&mut self) -> PtState {
        loop {
            let at = self.pt().dispatch();
            let flow = self.resume(at);
            if let ControlFlow::Break(state) = self.pt().advance(flow) {
                return state;
            }
        }
    }
}

impl<F> Task for FromFn<F>
where
    F: FnMut() -> PtState,
{
    #[inline]
    fn run(&mut self) -> PtState {
        (self.f)()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("f", &format_args!("{}", core::any::type_name::<F>()))
            .finish()
    }
}
