// Authorizer Port - admin gate for queue management
use async_trait::async_trait;

/// Decides whether a user may manage the launch queue
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// True if `username` is a system administrator
    async fn is_system_admin(&self, username: &str) -> bool;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashSet;

    /// Authorizer with a fixed admin list
    pub struct StaticAuthorizer {
        admins: HashSet<String>,
    }

    impl StaticAuthorizer {
        pub fn new<I, S>(admins: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                admins: admins.into_iter().map(Into::into).collect(),
            }
        }
    }

    #[async_trait]
    impl Authorizer for StaticAuthorizer {
        async fn is_system_admin(&self, username: &str) -> bool {
            self.admins.contains(username)
        }
    }
}
