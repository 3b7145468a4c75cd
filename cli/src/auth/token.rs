//! Access token model.

/// Where an access token came from during acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenProvenance {
    /// Supplied via the token override environment variable.
    Environment,
    /// Read back from the OS keyring.
    Cached,
    /// Minted by the interactive device flow in this invocation.
    FreshlyIssued,
}

impl std::fmt::Display for TokenProvenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Environment => write!(f, "environment"),
            Self::Cached => write!(f, "cached"),
            Self::FreshlyIssued => write!(f, "freshly-issued"),
        }
    }
}

/// An opaque bearer token and its provenance.
///
/// No expiry is tracked; the token lives for a single invocation. Only
/// freshly issued tokens are written back to the secret store.
#[derive(Clone)]
pub struct Token {
    value: String,
    provenance: TokenProvenance,
}

impl Token {
    /// Create a token with the given provenance.
    pub fn new(value: impl Into<String>, provenance: TokenProvenance) -> Self {
        Self {
            value: value.into(),
            provenance,
        }
    }

    /// The raw bearer string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// How this token was obtained.
    #[must_use]
    pub const fn provenance(&self) -> TokenProvenance {
        self.provenance
    }

    /// Whether this token was minted by the device flow in this invocation.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        matches!(self.provenance, TokenProvenance::FreshlyIssued)
    }
}

// Redact the secret in debug output.
impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("value", &"***")
            .field("provenance", &self.provenance)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provenance_display_matches_wire_names() {
        assert_eq!(TokenProvenance::Environment.to_string(), "environment");
        assert_eq!(TokenProvenance::Cached.to_string(), "cached");
        assert_eq!(TokenProvenance::FreshlyIssued.to_string(), "freshly-issued");
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let token = Token::new("ghu_very_secret", TokenProvenance::Cached);
        let debug = format!("{token:?}");
        assert!(!debug.contains("ghu_very_secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn only_freshly_issued_tokens_are_fresh() {
        assert!(Token::new("t", TokenProvenance::FreshlyIssued).is_fresh());
        assert!(!Token::new("t", TokenProvenance::Cached).is_fresh());
        assert!(!Token::new("t", TokenProvenance::Environment).is_fresh());
    }
}
