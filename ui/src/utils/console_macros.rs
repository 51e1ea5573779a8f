/// Browser console logging for components.
///
/// Each line is prefixed with a `js_sys::Date::now()` timestamp and formatted
/// up front, so gloo_console never has to serialize Rust values itself.
/// These only work on wasm32; services log through `tracing` instead.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_at {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] [party] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!(
            "[{}] [party] {}",
            js_sys::Date::now(),
            format!($fmt, $($arg)*)
        ))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => { $crate::__console_at!(info, $($arg)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => { $crate::__console_at!(warn, $($arg)*) };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => { $crate::__console_at!(error, $($arg)*) };
}
