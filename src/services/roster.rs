use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Branch, Service, Staff};
use crate::services::platform::PlatformApi;

/// One branch's cached schedule data: opening hours, the staff roster, and
/// the service catalog.
pub struct BranchSchedule {
    pub branch: Branch,
    pub staff: Vec<Staff>,
    pub services: Vec<Service>,
}

impl BranchSchedule {
    pub fn staff_member(&self, staff_id: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == staff_id)
    }
}

/// Session cache for branch schedules, keyed by branch id. Entries live
/// until invalidated (branch switch, explicit refresh). Bookings are never
/// cached here — they are refetched per view and replace each other
/// wholesale.
#[derive(Default)]
pub struct ScheduleCache {
    branches: RwLock<HashMap<String, Arc<BranchSchedule>>>,
}

impl ScheduleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn branch_schedule(
        &self,
        platform: &dyn PlatformApi,
        branch_id: &str,
    ) -> anyhow::Result<Arc<BranchSchedule>> {
        if let Some(cached) = self.branches.read().await.get(branch_id) {
            return Ok(Arc::clone(cached));
        }

        // Fetch outside the lock. Two concurrent misses may both fetch; the
        // later insert replaces the earlier with identical data.
        let branch = platform.fetch_branch(branch_id).await?;
        let staff = platform.fetch_staff(branch_id).await?;
        let services = platform.fetch_services(branch_id).await?;
        tracing::info!(
            branch_id = %branch_id,
            staff = staff.len(),
            services = services.len(),
            "cached branch schedule"
        );

        let schedule = Arc::new(BranchSchedule {
            branch,
            staff,
            services,
        });
        self.branches
            .write()
            .await
            .insert(branch_id.to_string(), Arc::clone(&schedule));
        Ok(schedule)
    }

    pub async fn invalidate(&self, branch_id: &str) {
        self.branches.write().await.remove(branch_id);
    }

    pub async fn clear(&self) {
        self.branches.write().await.clear();
    }
}
