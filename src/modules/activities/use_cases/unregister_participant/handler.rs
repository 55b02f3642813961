use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::use_cases::decide_and_save::decide_and_save;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;
use crate::modules::activities::use_cases::unregister_participant::decide::decide_unregister;
use std::sync::Arc;

pub struct UnregisterParticipantHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterParticipantHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UnregisterParticipant) -> Result<String, ApplicationError> {
        decide_and_save(&*self.store, &command.activity_name, |current| {
            decide_unregister(current, &command)
        })
        .await?;

        tracing::info!(
            activity = %command.activity_name,
            email = %command.email,
            "participant unregistered"
        );
        Ok(format!(
            "Unregistered {} from {}",
            command.email, command.activity_name
        ))
    }
}
