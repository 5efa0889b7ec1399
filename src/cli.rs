use anyhow::Result;
use serde_json::json;

use taglog::logging::{Level, LogSink, TagLogger};
use taglog::{get_tag, is_blank, text_equals, DebugState, Settings};

/// Render a result either as a bare line or as a JSON object
fn render(json: bool, key: &str, value: serde_json::Value) -> String {
    if json {
        let mut object = serde_json::Map::new();
        object.insert(key.to_string(), value);
        serde_json::Value::Object(object).to_string()
    } else {
        match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        }
    }
}

pub fn tag(prefix: Option<&str>, class_name: &str, json: bool) -> Result<String> {
    let tag = get_tag(prefix, Some(class_name))?;
    Ok(render(json, "tag", json!(tag)))
}

pub fn blank(value: Option<&str>, json: bool) -> String {
    render(json, "blank", json!(is_blank(value)))
}

pub fn equals(a: Option<&str>, b: Option<&str>, json: bool) -> String {
    render(json, "equal", json!(text_equals(a, b)))
}

pub struct LogRequest<'a> {
    pub level: Level,
    pub tag: &'a str,
    pub message: &'a str,
    pub debuggable: bool,
    pub signers: &'a [String],
}

/// Route one line through the logger; returns the bytes written
pub fn log<S: LogSink>(settings: &Settings, request: &LogRequest<'_>, sink: S) -> usize {
    let state = if request.debuggable || settings.logging.debuggable {
        DebugState::debug()
    } else {
        DebugState::from_signers(request.signers)
    };
    tracing::debug!("Logging as {:?}", state);

    let logger = TagLogger::with_sink(state, settings.logging.clone(), sink);
    match request.level {
        Level::Debug => logger.d(request.tag, format_args!("{}", request.message)),
        level => logger.log(level, request.tag, format_args!("{}", request.message)),
    }
}
