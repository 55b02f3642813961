use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up::handler::SignUpHandler;
use crate::modules::activities::use_cases::unregister_participant::handler::UnregisterParticipantHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpHandler<InMemoryActivityStore>>,
    pub unregister_handler: Arc<UnregisterParticipantHandler<InMemoryActivityStore>>,
}

impl AppState {
    pub fn in_memory(store: Arc<InMemoryActivityStore>) -> Self {
        Self {
            queries: store.clone(),
            sign_up_handler: Arc::new(SignUpHandler::new(store.clone())),
            unregister_handler: Arc::new(UnregisterParticipantHandler::new(store)),
        }
    }
}
