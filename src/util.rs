//! Internal utilities: logging macros and test support.

#[cfg(any(test, feature = "tracing"))]
macro_rules! trace {
    ($($t:tt)*) => { tracing::trace!($($t)*) }
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! trace {
    ($($t:tt)*) => {};
}

#[cfg(any(test, feature = "tracing"))]
macro_rules! debug {
    ($($t:tt)*) => { tracing::debug!($($t)*) }
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! debug {
    ($($t:tt)*) => {};
}

#[cfg(not(test))]
macro_rules! test_trace {
    ($($t:tt)*) => {};
}

#[cfg(test)]
macro_rules! test_trace {
    ($($t:tt)*) => { tracing::trace!($($t)*) }
}

macro_rules! feature {
    (
        #![$meta:meta]
        $($item:item)*
    ) => {
        $(
            #[cfg($meta)]
            #[cfg_attr(docsrs, doc(cfg($meta)))]
            $item
        )*
    }
}

#[cfg(test)]
pub(crate) use self::test::trace_init;
