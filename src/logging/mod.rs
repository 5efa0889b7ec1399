pub mod level;
pub mod logger;
pub mod sink;

pub use level::{Level, ParseLevelError};
pub use logger::TagLogger;
pub use sink::{LogRecord, LogSink, MemorySink, TracingSink};

/// Debug line, emitted when the build is debuggable or the tag allows debug
#[macro_export]
macro_rules! log_d {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $logger.d($tag, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_i {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $logger.i($tag, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_e {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $logger.e($tag, format_args!($($arg)+))
    };
}
