// Read side for listing the whole directory.
//
// Purpose
// - Abstract data access so that different storage backends can implement it.
// - ActivityView is the transport shape served by GET /activities.

use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivityView {
    fn from(activity: Activity) -> Self {
        Self {
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

#[async_trait]
pub trait ActivityQueries {
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, ActivityView>>;
}
