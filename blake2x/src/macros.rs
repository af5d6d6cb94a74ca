macro_rules! std {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "std")]
            #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
            $item
        )*
    };
}

macro_rules! alloc {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "alloc")]
            #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
            $item
        )*
    };
}

macro_rules! panic_api {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "can-panic")]
            #[cfg_attr(docsrs, doc(cfg(feature = "can-panic")))]
            $item
        )*
    };
}

macro_rules! io_impls {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "embedded-io")]
            #[cfg_attr(docsrs, doc(cfg(feature = "embedded-io")))]
            $item
        )*
    };
}

/// Emits a `tracing` event at the given level, compiled out entirely without the `tracing`
/// feature. Only lengths and counts may be passed, never key or message bytes.
macro_rules! event {
    ($lvl:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        { ::tracing::$lvl!($($arg)+); }
    };
}
