//! Configuration shared by the share-link helpers.

/// Default origin for share links.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Configuration for building outbound links.
#[derive(Debug, Clone)]
pub struct SobiConfig {
    /// Absolute origin that share links point at.
    pub origin: String,
}

impl Default for SobiConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl SobiConfig {
    /// Set the share-link origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SobiConfig::default();
        assert_eq!(cfg.origin, "http://localhost:3000");
    }

    #[test]
    fn builder_methods() {
        let cfg = SobiConfig::default().with_origin("https://sobitype.example");
        assert_eq!(cfg.origin, "https://sobitype.example");
    }
}
