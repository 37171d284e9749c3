//! Session Rules
//!
//! Development-bypass credentials, gated behind the `dev-bypass` feature so
//! they are never part of a production build. Bypass tokens carry a fixed
//! prefix the session store recognizes to skip backend verification.

#[cfg(feature = "dev-bypass")]
use crate::models::User;

/// Prefix marking a synthetic token that was never issued by the backend.
pub const BYPASS_TOKEN_PREFIX: &str = "dev-bypass-";

pub fn is_bypass_token(token: &str) -> bool {
    token.starts_with(BYPASS_TOKEN_PREFIX)
}

/// Synthetic identity produced by a bypass login.
#[cfg(feature = "dev-bypass")]
#[derive(Debug, Clone, PartialEq)]
pub struct BypassIdentity {
    pub user: User,
    pub token: String,
}

/// (username, password, role)
#[cfg(feature = "dev-bypass")]
const BYPASS_CREDENTIALS: &[(&str, &str, &str)] = &[
    ("owner", "owner123", "owner"),
    ("admin", "admin123", "admin"),
    ("dev", "dev123", "staff"),
];

/// Try the fixed development credentials. `None` means the caller should fall
/// back to a real backend login.
#[cfg(feature = "dev-bypass")]
pub fn bypass_login(username: &str, password: &str) -> Option<BypassIdentity> {
    BYPASS_CREDENTIALS
        .iter()
        .enumerate()
        .find(|(_, (user, pass, _))| *user == username && *pass == password)
        .map(|(idx, (user, _, role))| BypassIdentity {
            user: User {
                id: idx as u64 + 1,
                username: user.to_string(),
                email: Some(format!("{user}@gymdesk.local")),
                full_name: None,
                role: role.to_string(),
            },
            token: format!("{BYPASS_TOKEN_PREFIX}{user}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "dev-bypass")]
    #[test]
    fn fixed_credentials_yield_a_synthetic_identity() {
        let identity = bypass_login("owner", "owner123").expect("bypass pair should match");
        assert_eq!(identity.user.role, "owner");
        assert!(is_bypass_token(&identity.token));
    }

    #[cfg(feature = "dev-bypass")]
    #[test]
    fn other_credentials_fall_through_to_the_backend() {
        assert!(bypass_login("owner", "wrong").is_none());
        assert!(bypass_login("member", "owner123").is_none());
    }

    #[test]
    fn backend_tokens_are_not_bypass_tokens() {
        assert!(is_bypass_token("dev-bypass-owner"));
        assert!(!is_bypass_token("eyJhbGciOiJIUzI1NiJ9"));
    }
}
