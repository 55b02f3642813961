// In memory activity directory.
//
// Purpose
// - Hold the process wide directory without a database.
// - Serve both the ActivityStore write port and the ActivityQueries read port.
//
// Responsibilities
// - Store activities keyed by name, each with a save counter.
// - Enforce optimistic concurrency by checking the expected version on save.

use crate::modules::activities::adapters::outbound::activity_store::{
    ActivityStore, ActivityStoreError, LoadedActivity,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::seed::default_activities;
use crate::modules::activities::use_cases::list_activities::queries_port::{
    ActivityQueries, ActivityView,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct VersionedActivity {
    activity: Activity,
    version: u64,
}

#[derive(Default)]
pub struct InMemoryActivityStore {
    activities: RwLock<BTreeMap<String, VersionedActivity>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::with_activities(default_activities())
    }

    pub fn with_activities(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let activities = activities
            .into_iter()
            .map(|(name, activity)| {
                (
                    name,
                    VersionedActivity {
                        activity,
                        version: 0,
                    },
                )
            })
            .collect();
        Self {
            activities: RwLock::new(activities),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_save_ms(&self, delay_ms: u64) {
        self.delay_save_ms.store(delay_ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), ActivityStoreError> {
        if self.is_offline {
            return Err(ActivityStoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn load(&self, name: &str) -> Result<Option<LoadedActivity>, ActivityStoreError> {
        self.ensure_online()?;
        let guard = self.activities.read().await;
        Ok(guard.get(name).map(|entry| LoadedActivity {
            activity: entry.activity.clone(),
            version: entry.version,
        }))
    }

    async fn save(
        &self,
        name: &str,
        expected_version: u64,
        activity: Activity,
    ) -> Result<(), ActivityStoreError> {
        self.ensure_online()?;

        let delay_ms = self.delay_save_ms.load(Ordering::Relaxed);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let mut guard = self.activities.write().await;
        let Some(entry) = guard.get_mut(name) else {
            return Err(ActivityStoreError::Backend(format!(
                "activity {name} does not exist"
            )));
        };
        if entry.version != expected_version {
            return Err(ActivityStoreError::VersionMismatch {
                name: name.to_string(),
                expected: expected_version,
                actual: entry.version,
            });
        }
        entry.activity = activity;
        entry.version += 1;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, ActivityView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }

        let guard = self.activities.read().await;
        Ok(guard
            .iter()
            .map(|(name, entry)| (name.clone(), ActivityView::from(entry.activity.clone())))
            .collect())
    }
}
