/// Source of the bearer token both backend endpoints require.
///
/// `None` means there is no signed-in session; callers skip the fetch.
pub trait SessionProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Session backed by a token fixed at startup
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    token: Option<String>,
}

impl StaticSession {
    pub fn new(token: Option<String>) -> Self {
        // Blank tokens count as signed out
        let token = token.filter(|t| !t.trim().is_empty());
        Self { token }
    }
}

impl SessionProvider for StaticSession {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_no_session() {
        assert_eq!(StaticSession::new(Some("  ".to_string())).bearer_token(), None);
        assert_eq!(StaticSession::new(None).bearer_token(), None);
        assert_eq!(
            StaticSession::new(Some("abc".to_string())).bearer_token(),
            Some("abc".to_string())
        );
    }
}
