//! Log tag formatting and tag-gated logging helpers.

pub mod config;
pub mod debug;
pub mod logging;
pub mod text;

pub use config::{LogSettings, Settings};
pub use debug::DebugState;
pub use logging::{Level, TagLogger};
pub use text::{get_class_tag, get_tag, get_type_tag, is_blank, text_equals, TagError};
