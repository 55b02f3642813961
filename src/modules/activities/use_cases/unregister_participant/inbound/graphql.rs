use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterParticipantMutation;

#[Object]
impl UnregisterParticipantMutation {
    async fn unregister_participant(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = UnregisterParticipant {
            activity_name,
            email,
        };

        state
            .unregister_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
