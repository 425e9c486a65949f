/// Ship a formatted message through the process-wide shipper.
///
/// Fire-and-forget: failures go to the shipper's failure sink, never to the
/// caller.
#[macro_export]
macro_rules! printf {
    ($($arg:tt)*) => {
        $crate::global::printf(::core::format_args!($($arg)*))
    };
}

/// Ship a formatted message, trimming one trailing line separator.
#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => {
        $crate::global::println(::core::format_args!($($arg)*))
    };
}

/// Ship a formatted message and return it as `Option<ShippedError>` for local
/// propagation. `None` when the process-wide shipper is disabled or closed.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::global::errorf(::core::format_args!($($arg)*))
    };
}
