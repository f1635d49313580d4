#[cfg(feature = "tracing")]
macro_rules! vgtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "virtual_grid", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vgtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! vgdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "virtual_grid", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vgdebug {
    ($($tt:tt)*) => {};
}
