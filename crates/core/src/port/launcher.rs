// Launcher Port - starts the work named by a dequeued group ID
use crate::domain::GroupId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Launch of {group_id} failed: {reason}")]
pub struct LaunchError {
    pub group_id: GroupId,
    pub reason: String,
}

/// Launch a queued request
///
/// Called by the launch worker once per dequeued group ID. Failures are
/// reported, not retried.
#[async_trait]
pub trait Launcher: Send + Sync {
    async fn launch(&self, group_id: &GroupId) -> Result<(), LaunchError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashSet;

    /// Records launched group IDs; optionally fails for chosen IDs
    #[derive(Default)]
    pub struct RecordingLauncher {
        launched: Mutex<Vec<GroupId>>,
        failing: HashSet<GroupId>,
    }

    impl RecordingLauncher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_for<I>(ids: I) -> Self
        where
            I: IntoIterator<Item = GroupId>,
        {
            Self {
                launched: Mutex::new(Vec::new()),
                failing: ids.into_iter().collect(),
            }
        }

        /// Every group ID passed to `launch`, including failed ones
        pub fn launched(&self) -> Vec<GroupId> {
            self.launched.lock().clone()
        }
    }

    #[async_trait]
    impl Launcher for RecordingLauncher {
        async fn launch(&self, group_id: &GroupId) -> Result<(), LaunchError> {
            self.launched.lock().push(group_id.clone());
            if self.failing.contains(group_id) {
                return Err(LaunchError {
                    group_id: group_id.clone(),
                    reason: "mock failure".to_string(),
                });
            }
            Ok(())
        }
    }
}
