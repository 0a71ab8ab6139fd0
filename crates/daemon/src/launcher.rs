// Log-only Launcher
//
// The simulation launch pipeline lives outside this daemon; until it is
// wired in, launches are recorded in the log.

use async_trait::async_trait;
use launchq_core::domain::GroupId;
use launchq_core::port::{LaunchError, Launcher};
use tracing::info;

pub struct LogLauncher;

#[async_trait]
impl Launcher for LogLauncher {
    async fn launch(&self, group_id: &GroupId) -> Result<(), LaunchError> {
        info!(group_id = %group_id, "Launch request handed off");
        Ok(())
    }
}
