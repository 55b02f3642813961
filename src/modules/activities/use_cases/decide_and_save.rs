// Load, decide, save loop shared by the mutating use cases.
//
// A save that loses an optimistic concurrency race is retried against a fresh load,
// until it lands or the decision rejects.

use crate::modules::activities::adapters::outbound::activity_store::{
    ActivityStore, ActivityStoreError,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::errors::DecideError;
use crate::modules::activities::use_cases::errors::ApplicationError;

pub async fn decide_and_save<TStore, TDecide>(
    store: &TStore,
    activity_name: &str,
    decide: TDecide,
) -> Result<Activity, ApplicationError>
where
    TStore: ActivityStore + ?Sized,
    TDecide: Fn(Option<&Activity>) -> Result<Activity, DecideError>,
{
    let mut attempt: u32 = 0;
    loop {
        attempt = attempt.saturating_add(1);
        let loaded = store.load(activity_name).await?;
        let version = loaded.as_ref().map_or(0, |l| l.version);
        let updated =
            decide(loaded.as_ref().map(|l| &l.activity)).map_err(ApplicationError::Domain)?;

        match store.save(activity_name, version, updated.clone()).await {
            Ok(()) => return Ok(updated),
            Err(ActivityStoreError::VersionMismatch { .. }) => {
                tracing::debug!(activity = activity_name, attempt, "save conflict, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }
}
