// Ports define what the use cases need from storage, without implementing it.
//
// Responsibilities
// - Load one activity together with the version it was read at.
// - Save an activity only if nobody saved it since that version.
//
// Testing guidance
// - The in memory adapter implements this port for tests and local development.

use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityStoreError {
    #[error("version mismatch for {name}: expected {expected}, actual {actual}")]
    VersionMismatch {
        name: String,
        expected: u64,
        actual: u64,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: u64,
}

#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn load(&self, name: &str) -> Result<Option<LoadedActivity>, ActivityStoreError>;

    async fn save(
        &self,
        name: &str,
        expected_version: u64,
        activity: Activity,
    ) -> Result<(), ActivityStoreError>;
}
