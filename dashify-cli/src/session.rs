//! Explicit session credentials for the API client.

/// Bearer credentials for one CLI invocation.
///
/// Carried as a value rather than ambient state, so every collaborator
/// that authenticates says so in its signature.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn from_token(token: Option<String>) -> Self {
        Session {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_mean_anonymous() {
        assert_eq!(Session::from_token(None).token(), None);
        assert_eq!(Session::from_token(Some("   ".into())).token(), None);
        assert_eq!(Session::from_token(Some("tok".into())).token(), Some("tok"));
    }
}
