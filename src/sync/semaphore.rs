//! A [counting semaphore] for protothreads.
//!
//! See the [`Sem`] type's documentation for details.
//!
//! [counting semaphore]: https://en.wikipedia.org/wiki/Semaphore_(programming)
use core::{cell::Cell, fmt};


/// A [counting semaphore] shared between protothreads.
///
/// A semaphore holds a count. [`signal`](Self::signal) increments the count
/// and never blocks. A task waits on the semaphore with the
/// [`sem_wait!`](crate::sem_wait) macro, which blocks the task (reporting
/// [`PtState::Waiting`]) until the count is nonzero, and then decrements it on
/// the same invocation that lets the task proceed. A blocked invocation never
/// touches the count.
///
/// Because protothreads run on a single flow of control, a `Sem` is shared by
/// reference (`&Sem`) rather than through any kind of lock, and it is not
/// [`Sync`]. Nothing other than `signal` and `sem_wait!` should change the
/// count while tasks are waiting on it.
///
/// Semaphores are the building block for:
///
/// - **mutual exclusion**: a semaphore created with a count of 1 is a mutex.
/// - **bounded buffers**: one semaphore counts free slots and another counts
///   filled slots.
/// - **rendezvous**: a task waits on a semaphore created with a count of 0
///   until another task signals it.
///
/// # Examples
///
/// ```
/// use hyphae::{sem_wait, sync::Sem, Flow, Pt, PtState};
///
/// #[derive(Copy, Clone, Debug)]
/// struct Acquire;
///
/// let sem = Sem::new(0);
/// let mut pt = Pt::new();
/// let mut acquired = false;
/// let mut waiter = |pt: &mut Pt<Acquire>| {
///     pt.run(|at| match at {
///         None => Flow::Goto(Acquire),
///         Some(Acquire) => {
///             sem_wait!(Acquire, sem);
///             acquired = true;
///             Flow::End
///         }
///     })
/// };
///
/// assert_eq!(waiter(&mut pt), PtState::Waiting);
/// assert_eq!(waiter(&mut pt), PtState::Waiting);
///
/// sem.signal();
/// assert_eq!(waiter(&mut pt), PtState::Ended);
/// assert_eq!(sem.count(), 0);
/// # drop(waiter);
/// # assert!(acquired);
/// ```
///
/// [counting semaphore]: https://en.wikipedia.org/wiki/Semaphore_(programming)
/// [`PtState::Waiting`]: crate::PtState::Waiting
pub struct Sem {
    count: Cell<usize>,
}

// === impl Sem ===

impl Sem {
    /// Returns a new semaphore with the count `count`.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count: Cell::new(count),
        }
    }

    /// Resets the semaphore's count to `count`.
    #[inline]
    pub fn init(&self, count: usize) {
        test_trace!(count, prev = self.count.get(), "Sem::init");
        self.count.set(count);
    }

    /// Returns the semaphore's current count.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Increments the semaphore's count, allowing one waiting task to
    /// proceed.
    ///
    /// This never blocks.
    ///
    /// # Panics
    ///
    /// If the count would overflow a `usize`.
    #[inline]
    pub fn signal(&self) {
        let count = self.count.get();
        let count = match count.checked_add(1) {
            Some(count) => count,
            None => panic!("semaphore count overflowed"),
        };
        self.count.set(count);
        trace!(count, "Sem::signal");
    }

    /// Decrements the count if it is nonzero.
    ///
    /// Returns `true` if the count was decremented. This is the committed step
    /// of a wait: [`sem_wait!`](crate::sem_wait) calls it each time the
    /// waiting task is invoked, and proceeds only once it returns `true`.
    #[inline]
    #[must_use = "if `try_wait` returns `false`, the count was not decremented"]
    pub fn try_wait(&self) -> bool {
        match self.count.get().checked_sub(1) {
            Some(count) => {
                self.count.set(count);
                trace!(count, "Sem::try_wait -> acquired");
                true
            }
            None => {
                test_trace!("Sem::try_wait -> blocked");
                false
            }
        }
    }
}

impl Default for Sem {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for Sem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sem")
            .field("count", &self.count.get())
            .finish()
    }
}
