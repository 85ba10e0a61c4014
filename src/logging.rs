use std::cmp::Ordering;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str, default: LogLevel) -> LogLevel {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" => LogLevel::Warn,
            _ => default,
        }
    }
}

/// Builds one structured log line: `ts`, `level`, `event`, then the event's
/// own fields. Returns `None` when the event is below `threshold`.
pub fn format_event(
    threshold: LogLevel,
    level: LogLevel,
    ts: u64,
    event: &str,
    fields: serde_json::Value,
) -> Option<String> {
    if level < threshold {
        return None;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(serde_json::Value::Object(payload).to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    use std::time::{SystemTime, UNIX_EPOCH};

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0);

    if let Some(line) = format_event(threshold, level, ts, event, fields) {
        println!("{line}");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    let ts = (js_sys::Date::now() / 1_000.0) as u64;

    let Some(line) = format_event(threshold, level, ts, event, fields) else {
        return;
    };

    let line = wasm_bindgen::JsValue::from_str(&line);
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_below_threshold_are_dropped() {
        assert!(format_event(LogLevel::Info, LogLevel::Debug, 1, "noise", serde_json::json!({})).is_none());
        assert!(format_event(LogLevel::Info, LogLevel::Warn, 1, "loud", serde_json::json!({})).is_some());
    }

    #[test]
    fn event_line_merges_fields_after_envelope() {
        let line = format_event(
            LogLevel::Debug,
            LogLevel::Info,
            1_700_000_000,
            "language_changed",
            serde_json::json!({ "language": "ua" }),
        )
        .expect("info passes a debug threshold");

        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");
        assert_eq!(parsed["ts"], 1_700_000_000);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "language_changed");
        assert_eq!(parsed["language"], "ua");
    }

    #[test]
    fn unknown_level_falls_back_to_default() {
        assert_eq!(LogLevel::parse(" DEBUG ", LogLevel::Info), LogLevel::Debug);
        assert_eq!(LogLevel::parse("verbose", LogLevel::Info), LogLevel::Info);
    }
}
