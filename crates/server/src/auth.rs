//! Request authentication for the expense routes.
//!
//! The check runs as a route layer in front of every handler, so handlers
//! never see unauthenticated requests.

/// Decide whether a request may reach the handlers.
///
/// `token` is the bearer token from the `Authorization` header, or `None`
/// when the header is missing or malformed.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, token: Option<&str>) -> bool;
}

/// Accept every request, with or without credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

impl Authenticator for AllowAll {
    fn authenticate(&self, _token: Option<&str>) -> bool {
        true
    }
}

/// Accept only requests carrying one fixed bearer token.
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Authenticator for StaticToken {
    fn authenticate(&self, token: Option<&str>) -> bool {
        !self.token.is_empty() && token == Some(self.token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_all_accepts_anonymous() {
        assert!(AllowAll.authenticate(None));
        assert!(AllowAll.authenticate(Some("anything")));
    }

    #[test]
    fn static_token_matches_exactly() {
        let auth = StaticToken::new("November 10, 2009");

        assert!(auth.authenticate(Some("November 10, 2009")));
        assert!(!auth.authenticate(Some("November 10, 2009wrong_token")));
        assert!(!auth.authenticate(None));
    }

    #[test]
    fn empty_static_token_rejects_everything() {
        let auth = StaticToken::new("");

        assert!(!auth.authenticate(Some("")));
        assert!(!auth.authenticate(None));
    }
}
