//! Debug build detection from signing certificate subjects.
//!
//! Reading the certificates of an installed package is left to the host; this
//! module only decides whether one of the reported subjects is the platform
//! debug signer.

use tracing::debug;

/// Subject of the certificate the platform tooling signs debug builds with
pub const DEBUG_SIGNER_DN: &str = "CN=Android Debug,O=Android,C=US";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugState {
    debuggable: bool,
}

impl DebugState {
    pub fn new(debuggable: bool) -> Self {
        Self { debuggable }
    }

    pub fn release() -> Self {
        Self::new(false)
    }

    pub fn debug() -> Self {
        Self::new(true)
    }

    /// Debuggable if any of the signer subjects is the debug signer.
    ///
    /// Subjects that cannot be parsed never match.
    pub fn from_signers<I, S>(subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(expected) = parse_dn(DEBUG_SIGNER_DN) else {
            return Self::release();
        };

        for subject in subjects {
            let subject = subject.as_ref();
            match parse_dn(subject) {
                Some(rdns) if rdns == expected => {
                    debug!("Debug signer found: {}", subject);
                    return Self::debug();
                }
                Some(_) => {}
                None => debug!("Ignoring malformed signer subject: {:?}", subject),
            }
        }

        Self::release()
    }

    pub fn is_debuggable(&self) -> bool {
        self.debuggable
    }
}

/// Split a distinguished name into normalised (type, value) pairs
fn parse_dn(dn: &str) -> Option<Vec<(String, String)>> {
    let mut rdns = Vec::new();

    for part in split_unescaped(dn) {
        let (kind, value) = part.split_once('=')?;
        let kind = kind.trim();
        if kind.is_empty() {
            return None;
        }

        let value = value
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        rdns.push((kind.to_uppercase(), value));
    }

    if rdns.is_empty() {
        None
    } else {
        Some(rdns)
    }
}

fn split_unescaped(dn: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in dn.chars() {
        if escaped {
            current.push(c);
            escaped = false;
        } else if c == '\\' {
            current.push(c);
            escaped = true;
        } else if c == ',' {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
