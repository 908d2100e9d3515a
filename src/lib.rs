#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs, missing_debug_implementations)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[macro_use]
pub(crate) mod util;
#[macro_use]
mod macros;

pub mod lc;
pub mod pt;
pub mod scheduler;
pub mod sync;

#[doc(inline)]
pub use self::lc::Lc;
#[doc(inline)]
pub use self::pt::{from_fn, spawn, Flow, FromFn, Protothread, Pt, PtState, Task};
#[doc(inline)]
pub use self::scheduler::schedule;
#[doc(inline)]
pub use self::sync::Sem;
