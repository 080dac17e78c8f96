use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

const STATIC_CODES: [&str; 5] = ["FZ2025", "ADMIN", "GROWTH", "VIP888", "CAREER-PRO"];

static SERIAL_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^FZ-\d{4,}$").expect("valid serial code regex"));

static ISSUED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^A[A-Z0-9]{7}$").expect("valid issued code regex"));

/// Decides whether a report may be unlocked with a given access code.
#[derive(Debug, Clone, Default)]
pub struct AccessCodeGate {
    extra_codes: BTreeSet<String>,
}

impl AccessCodeGate {
    pub fn new<I, S>(extra_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extra_codes = extra_codes
            .into_iter()
            .map(Into::into)
            .map(|code: String| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        Self { extra_codes }
    }

    /// Case-sensitive check after trimming surrounding whitespace.
    pub fn verify(&self, code: &str) -> bool {
        let code = code.trim();
        if code.is_empty() {
            return false;
        }

        STATIC_CODES.contains(&code)
            || self.extra_codes.contains(code)
            || SERIAL_CODE.is_match(code)
            || ISSUED_CODE.is_match(code)
    }
}
