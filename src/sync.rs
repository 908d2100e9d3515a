//! Synchronization primitives for protothreads.
//!
//! Protothreads only ever run on a single flow of control, one at a time, and
//! only switch at their suspension points. Shared state between them therefore
//! needs no locking; the primitives here only decide *when* a task may proceed.
pub mod semaphore;

#[doc(inline)]
pub use self::semaphore::Sem;
