// Queue Service - admin use cases over the launch queue

use crate::domain::{GroupId, QueueElement, SwapOutcome};
use crate::error::{AppError, Result};
use crate::port::{Authorizer, LaunchQueue};
use std::sync::Arc;
use tracing::{info, warn};

/// Page used when the caller does not send one
pub const DEFAULT_PAGE: i64 = 0;

/// Page size used when the caller does not send one
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Queue management for system administrators.
///
/// Every call checks the caller first; rejected calls never touch the queue.
pub struct QueueService {
    queue: Arc<dyn LaunchQueue<GroupId>>,
    authorizer: Arc<dyn Authorizer>,
}

impl QueueService {
    pub fn new(queue: Arc<dyn LaunchQueue<GroupId>>, authorizer: Arc<dyn Authorizer>) -> Self {
        Self { queue, authorizer }
    }

    async fn require_admin(&self, user: &str) -> Result<()> {
        if self.authorizer.is_system_admin(user).await {
            Ok(())
        } else {
            warn!(user = %user, "Rejected queue request from non-admin");
            Err(AppError::Unauthorized(format!(
                "{} is not a system administrator",
                user
            )))
        }
    }

    /// One page of the queue.
    ///
    /// Missing values default to page 0 with 10 items per page.
    pub async fn get_all(
        &self,
        user: &str,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<Vec<QueueElement<GroupId>>> {
        self.require_admin(user).await?;
        let page = page.unwrap_or(DEFAULT_PAGE);
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);
        let offset = page.checked_mul(per_page).ok_or_else(|| {
            AppError::Validation(format!("page {} x per_page {} overflows", page, per_page))
        })?;
        Ok(self.queue.get(Some(offset), Some(per_page))?)
    }

    pub async fn count(&self, user: &str) -> Result<usize> {
        self.require_admin(user).await?;
        Ok(self.queue.count())
    }

    pub async fn move_to_front(&self, user: &str, group_id: &str) -> Result<QueueElement<GroupId>> {
        self.require_admin(user).await?;
        let moved = self.queue.move_to_front(&GroupId::new(group_id))?;
        info!(user = %user, group_id = %group_id, "Moved launch request to front");
        Ok(moved)
    }

    pub async fn move_to_back(&self, user: &str, group_id: &str) -> Result<QueueElement<GroupId>> {
        self.require_admin(user).await?;
        let moved = self.queue.move_to_back(&GroupId::new(group_id))?;
        info!(
            user = %user,
            group_id = %group_id,
            position = moved.position,
            "Moved launch request to back"
        );
        Ok(moved)
    }

    pub async fn swap(
        &self,
        user: &str,
        group_id_a: &str,
        group_id_b: &str,
    ) -> Result<SwapOutcome<GroupId>> {
        self.require_admin(user).await?;
        let outcome = self
            .queue
            .swap(&GroupId::new(group_id_a), &GroupId::new(group_id_b))?;
        info!(
            user = %user,
            a = %group_id_a,
            b = %group_id_b,
            "Swapped launch requests"
        );
        Ok(outcome)
    }

    pub async fn remove(&self, user: &str, group_id: &str) -> Result<GroupId> {
        self.require_admin(user).await?;
        let removed = self.queue.remove(&GroupId::new(group_id))?;
        info!(user = %user, group_id = %group_id, "Removed launch request");
        Ok(removed)
    }
}
