use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Transcripts longer than this (in chars) are rejected with 413
    pub max_transcript_chars: usize,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    /// Replace speaker first names in echoed transcripts
    pub anonymize_transcripts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            max_transcript_chars: 100_000,
            rate_limit_per_second: 5,
            rate_limit_burst: 20,
            anonymize_transcripts: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            port: parse_var("PORT", defaults.port),
            max_transcript_chars: parse_var("MAX_TRANSCRIPT_CHARS", defaults.max_transcript_chars),
            rate_limit_per_second: parse_var("RATE_LIMIT_PER_SECOND", defaults.rate_limit_per_second),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", defaults.rate_limit_burst),
            anonymize_transcripts: env::var("ANONYMIZE_TRANSCRIPTS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.anonymize_transcripts),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = %raw, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_transcript_chars, 100_000);
        assert!(config.anonymize_transcripts);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
    }

    #[test]
    fn test_parse_var_falls_back_on_garbage() {
        env::set_var("NOVA_TEST_PORT_GARBAGE", "not-a-port");
        assert_eq!(parse_var::<u16>("NOVA_TEST_PORT_GARBAGE", 8080), 8080);
        env::set_var("NOVA_TEST_PORT_VALID", "9000");
        assert_eq!(parse_var::<u16>("NOVA_TEST_PORT_VALID", 8080), 9000);
        assert_eq!(parse_var::<u16>("NOVA_TEST_PORT_MISSING", 7), 7);
    }
}
