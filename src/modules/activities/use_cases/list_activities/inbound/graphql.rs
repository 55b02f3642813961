use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::list_activities::queries_port::ActivityView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl From<(String, ActivityView)> for GqlActivity {
    fn from((name, view): (String, ActivityView)) -> Self {
        let taken = u32::try_from(view.participants.len()).unwrap_or(u32::MAX);
        Self {
            name,
            description: view.description,
            schedule: view.schedule,
            max_participants: view.max_participants,
            spots_left: view.max_participants.saturating_sub(taken),
            participants: view.participants,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let activities = state.queries.list_activities().await?;
        Ok(activities.into_iter().map(Into::into).collect())
    }
}
