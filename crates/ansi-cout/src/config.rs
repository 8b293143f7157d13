use std::env;
use std::fmt;
use std::str::FromStr;

pub const ON_WRITE_FAILURE_ENV: &str = "ANSI_COUT_ON_WRITE_FAILURE";
pub const AUTO_FLUSH_ENV: &str = "ANSI_COUT_AUTO_FLUSH";

/// What the emitter does when its sink rejects a write or flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteFailurePolicy {
    /// Return the error to the caller.
    #[default]
    Propagate,
    /// Log it at warn level and report success.
    Ignore,
}

impl FromStr for WriteFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(WriteFailurePolicy::Propagate),
            "ignore" => Ok(WriteFailurePolicy::Ignore),
            other => Err(format!("unknown write failure policy '{other}'")),
        }
    }
}

impl fmt::Display for WriteFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteFailurePolicy::Propagate => f.write_str("propagate"),
            WriteFailurePolicy::Ignore => f.write_str("ignore"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    pub on_write_failure: WriteFailurePolicy,
    /// Flush the sink after every sequence.
    pub auto_flush: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl EmitterConfig {
    /// Built-in defaults, ignoring the environment.
    pub fn new() -> Self {
        Self {
            on_write_failure: WriteFailurePolicy::default(),
            auto_flush: false,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new();
        Self {
            on_write_failure: lookup(ON_WRITE_FAILURE_ENV)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.on_write_failure),
            auto_flush: lookup(AUTO_FLUSH_ENV)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.auto_flush),
        }
    }

    pub fn with_on_write_failure(mut self, policy: WriteFailurePolicy) -> Self {
        self.on_write_failure = policy;
        self
    }

    pub fn with_auto_flush(mut self, auto_flush: bool) -> Self {
        self.auto_flush = auto_flush;
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
