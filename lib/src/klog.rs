//! Leveled logging with a pluggable sink.
//!
//! Every log line funnels through a single **backend** function. There is no
//! universal console on a microcontroller, so until the application registers
//! one (a UART writer, an RTT channel, a test capture buffer) log lines are
//! dropped after the level check.
//!
//! # Backend contract
//!
//! The backend receives the pre-formatted arguments for a **single log line**
//! and is responsible for writing the text followed by a line terminator.
//!
//! # Registration
//!
//! ```ignore
//! tinycanvas_lib::klog::klog_register_backend(uart_log_line);
//! ```

use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use spin::RwLock;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum KlogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl KlogLevel {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => KlogLevel::Error,
            1 => KlogLevel::Warn,
            2 => KlogLevel::Info,
            3 => KlogLevel::Debug,
            _ => KlogLevel::Trace,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KlogLevel::Error => "error",
            KlogLevel::Warn => "warn",
            KlogLevel::Info => "info",
            KlogLevel::Debug => "debug",
            KlogLevel::Trace => "trace",
        }
    }

    /// Parse a level name (case-insensitive). Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        [
            KlogLevel::Error,
            KlogLevel::Warn,
            KlogLevel::Info,
            KlogLevel::Debug,
            KlogLevel::Trace,
        ]
        .into_iter()
        .find(|level| name.eq_ignore_ascii_case(level.as_str()))
    }
}

impl fmt::Display for KlogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(KlogLevel::Info as u8);

#[inline(always)]
fn is_enabled(level: KlogLevel) -> bool {
    level as u8 <= CURRENT_LEVEL.load(Ordering::Relaxed)
}

// ---------------------------------------------------------------------------
// Backend dispatch
// ---------------------------------------------------------------------------

/// Signature of a klog backend.
pub type KlogBackend = fn(KlogLevel, fmt::Arguments<'_>);

static BACKEND: RwLock<Option<KlogBackend>> = RwLock::new(None);

#[inline]
fn dispatch(level: KlogLevel, args: fmt::Arguments<'_>) {
    let backend = *BACKEND.read();
    if let Some(backend) = backend {
        backend(level, args);
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Register the sink that receives every enabled log line. Replaces any
/// previously registered backend.
pub fn klog_register_backend(backend: KlogBackend) {
    *BACKEND.write() = Some(backend);
}

/// Drop the registered backend; subsequent lines are discarded.
pub fn klog_clear_backend() {
    *BACKEND.write() = None;
}

/// Reset the level to the default (`Info`).
pub fn klog_init() {
    CURRENT_LEVEL.store(KlogLevel::Info as u8, Ordering::Relaxed);
}

pub fn klog_set_level(level: KlogLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn klog_get_level() -> KlogLevel {
    KlogLevel::from_raw(CURRENT_LEVEL.load(Ordering::Relaxed))
}

pub fn is_enabled_level(level: KlogLevel) -> bool {
    is_enabled(level)
}

/// Emit a formatted log line at the given level.
///
/// The backend appends the line terminator; callers should **not** include
/// one in their format string.
pub fn log_args(level: KlogLevel, args: fmt::Arguments<'_>) {
    if !is_enabled(level) {
        return;
    }
    dispatch(level, args);
}

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

#[macro_export]
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {{
        $crate::klog::log_args($level, ::core::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_warn {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Warn, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_info {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Info, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Debug, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_trace {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Trace, ::core::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;
    use std::vec::Vec;

    static CAPTURED: spin::Mutex<Vec<(KlogLevel, String)>> = spin::Mutex::new(Vec::new());

    fn capture(level: KlogLevel, args: fmt::Arguments<'_>) {
        CAPTURED.lock().push((level, std::format!("{}", args)));
    }

    // One test owns the global level and backend so parallel test threads
    // cannot observe each other's settings.
    #[test]
    fn level_filter_and_backend_lifecycle() {
        klog_register_backend(capture);
        klog_set_level(KlogLevel::Warn);
        assert_eq!(klog_get_level(), KlogLevel::Warn);

        crate::klog_error!("panel {} offline", 2);
        crate::klog_warn!("scale clamped");
        crate::klog_info!("hidden");
        crate::klog_trace!("hidden too");

        klog_set_level(KlogLevel::Trace);
        assert!(is_enabled_level(KlogLevel::Trace));
        crate::klog!(KlogLevel::Debug, "x={}", 7);

        klog_clear_backend();
        crate::klog_error!("dropped");
        klog_init();
        assert_eq!(klog_get_level(), KlogLevel::Info);

        let captured = CAPTURED.lock();
        let lines: Vec<_> = captured.iter().map(|(l, s)| (*l, s.as_str())).collect();
        assert_eq!(
            lines,
            [
                (KlogLevel::Error, "panel 2 offline"),
                (KlogLevel::Warn, "scale clamped"),
                (KlogLevel::Debug, "x=7"),
            ]
        );
    }

    #[test]
    fn level_names_parse() {
        assert_eq!(KlogLevel::from_name("DEBUG"), Some(KlogLevel::Debug));
        assert_eq!(KlogLevel::from_name("warn"), Some(KlogLevel::Warn));
        assert_eq!(KlogLevel::from_name("loud"), None);
        assert_eq!(KlogLevel::from_raw(9), KlogLevel::Trace);
    }
}
