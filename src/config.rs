use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::Deserialize;

use haru_core::{HaruError, HaruResult};

fn default_timezone() -> Tz {
    chrono_tz::Asia::Seoul
}

fn default_work_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap()
}

fn default_work_end() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap()
}

fn default_event_minutes() -> i64 {
    60
}

fn default_slide_ms() -> u32 {
    300
}

fn default_fade_ms() -> u32 {
    200
}

fn default_zoom_ms() -> u32 {
    300
}

/// Interpreter configuration.
///
/// Every field has a default so the embedding application can deserialize a
/// partial config, or just use `InterpreterConfig::default()`.
#[derive(Debug, Clone, Deserialize)]
pub struct InterpreterConfig {
    /// IANA timezone the user's expressions are interpreted in
    #[serde(default = "default_timezone")]
    pub timezone: Tz,

    /// Working window used by free-time and busy analysis
    #[serde(default = "default_work_start")]
    pub work_start: NaiveTime,
    #[serde(default = "default_work_end")]
    pub work_end: NaiveTime,

    /// Duration of newly created events, in minutes
    #[serde(default = "default_event_minutes")]
    pub default_event_minutes: i64,

    /// Animation hint durations, in milliseconds
    #[serde(default = "default_slide_ms")]
    pub slide_duration_ms: u32,
    #[serde(default = "default_fade_ms")]
    pub fade_duration_ms: u32,
    #[serde(default = "default_zoom_ms")]
    pub zoom_duration_ms: u32,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            timezone: default_timezone(),
            work_start: default_work_start(),
            work_end: default_work_end(),
            default_event_minutes: default_event_minutes(),
            slide_duration_ms: default_slide_ms(),
            fade_duration_ms: default_fade_ms(),
            zoom_duration_ms: default_zoom_ms(),
        }
    }
}

impl InterpreterConfig {
    /// Default config for a zone given by IANA name.
    pub fn from_tz_name(name: &str) -> HaruResult<Self> {
        let timezone: Tz = name
            .parse()
            .map_err(|_| HaruError::UnknownTimezone(name.to_string()))?;
        Ok(InterpreterConfig {
            timezone,
            ..InterpreterConfig::default()
        })
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> HaruResult<()> {
        if self.work_start >= self.work_end {
            return Err(HaruError::InvalidWorkingWindow(format!(
                "{} >= {}",
                self.work_start, self.work_end
            )));
        }
        Ok(())
    }
}
