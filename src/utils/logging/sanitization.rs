use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const SENSITIVE_KEYS: [&str; 6] = [
    "password",
    "token",
    "authtoken",
    "cookie",
    "secret",
    "credential",
];

static REDACT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)password[=:\s]*['\x22]?([^\s'\x22&]+)['\x22]?",
        r"(?i)authtoken[=:\s]*['\x22]?([^\s'\x22;]+)['\x22]?",
        r"(?i)token[=:\s]*['\x22]?([a-zA-Z0-9\-_.]+)['\x22]?",
        r"(?i)secret[=:\s]*['\x22]?([^\s'\x22]+)['\x22]?",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static MASK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    SENSITIVE_KEYS
        .iter()
        .flat_map(|key| {
            [
                format!(r#"(?i)"{}"\s*:\s*"([^"]+)""#, key),
                format!(r#"(?i)'{}'\s*:\s*'([^']+)'"#, key),
                format!(r#"(?i)\b{}[=:]\s*([^\s,;&}}\]]+)"#, key),
            ]
        })
        .filter_map(|p| Regex::new(&p).ok())
        .collect()
});

pub struct Sanitization;

impl Sanitization {
    /// Replace sensitive values entirely
    pub fn sanitize_log_data(data: &str) -> String {
        REDACT_PATTERNS
            .iter()
            .fold(data.to_string(), |acc, re| {
                re.replace_all(&acc, "***REDACTED***").into_owned()
            })
    }

    /// Keep the first and last two characters of long sensitive values
    pub fn mask_sensitive_data(input: &str) -> String {
        MASK_PATTERNS.iter().fold(input.to_string(), |acc, re| {
            re.replace_all(&acc, |caps: &Captures| {
                let full = caps.get(0).map_or("", |m| m.as_str());
                let value = caps.get(1).map_or("", |m| m.as_str());
                if value.is_empty() || value.starts_with("***") || value.contains("***") {
                    return full.to_string();
                }
                full.replacen(value, &Self::mask_value(value), 1)
            })
            .into_owned()
        })
    }

    /// Masked form of a single secret
    pub fn mask_value(value: &str) -> String {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() > 8 {
            let head: String = chars[..2].iter().collect();
            let tail: String = chars[chars.len() - 2..].iter().collect();
            format!("{}***{}", head, tail)
        } else {
            "***".to_string()
        }
    }
}
