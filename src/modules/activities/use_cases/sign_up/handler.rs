use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::use_cases::decide_and_save::decide_and_save;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, ApplicationError> {
        decide_and_save(&*self.store, &command.activity_name, |current| {
            decide_sign_up(current, &command)
        })
        .await?;

        tracing::info!(
            activity = %command.activity_name,
            email = %command.email,
            "participant signed up"
        );
        Ok(format!(
            "Signed up {} for {}",
            command.email, command.activity_name
        ))
    }
}

#[cfg(test)]
mod sign_up_handler_tests {
    use crate::modules::activities::adapters::outbound::activity_store::{
        ActivityStore, ActivityStoreError,
    };
    use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
    use crate::modules::activities::core::errors::DecideError;
    use crate::modules::activities::use_cases::errors::ApplicationError;
    use crate::modules::activities::use_cases::sign_up::command::SignUpForActivity;
    use crate::modules::activities::use_cases::sign_up::handler::SignUpHandler;
    use crate::test_support::fixtures::activity::ActivityBuilder;
    use crate::test_support::fixtures::commands::{ACTIVITY_NAME, EMAIL, make_sign_up_command};
    use rstest::{fixture, rstest};
    use std::sync::Arc;
    use tokio::join;
    use tokio::task::JoinSet;

    type BeforeEachReturn = (SignUpForActivity, InMemoryActivityStore);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = InMemoryActivityStore::with_activities([(
            ACTIVITY_NAME.to_string(),
            ActivityBuilder::new().build(),
        )]);
        (make_sign_up_command(), store)
    }

    async fn participants(store: &InMemoryActivityStore) -> Vec<String> {
        store
            .load(ACTIVITY_NAME)
            .await
            .expect("load failed")
            .expect("activity missing")
            .activity
            .participants
    }

    #[rstest]
    #[tokio::test]
    async fn handle_sign_up_appends_the_participant(before_each: BeforeEachReturn) {
        let (command, store) = before_each;
        let store = Arc::new(store);
        let handler = SignUpHandler::new(store.clone());
        let message = handler.handle(command).await.expect("handle failed");
        assert_eq!(message, format!("Signed up {EMAIL} for {ACTIVITY_NAME}"));
        assert!(participants(&store).await.contains(&EMAIL.to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_sign_up_fails_if_already_registered(before_each: BeforeEachReturn) {
        let (command, store) = before_each;
        let store = Arc::new(store);
        let handler = SignUpHandler::new(store.clone());
        handler
            .handle(command.clone())
            .await
            .expect("first handle failed");
        let result = handler.handle(command).await;
        assert_eq!(
            result,
            Err(ApplicationError::Domain(DecideError::AlreadyRegistered))
        );
        let count = participants(&store)
            .await
            .iter()
            .filter(|p| *p == EMAIL)
            .count();
        assert_eq!(count, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_sign_up_fails_if_activity_is_unknown(before_each: BeforeEachReturn) {
        let (_, store) = before_each;
        let handler = SignUpHandler::new(Arc::new(store));
        let command = SignUpForActivity {
            activity_name: "Nonexistent Club".to_string(),
            email: EMAIL.to_string(),
        };
        let result = handler.handle(command).await;
        assert_eq!(
            result,
            Err(ApplicationError::Domain(DecideError::ActivityNotFound))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_sign_up_fails_if_activity_is_full() {
        let store = Arc::new(InMemoryActivityStore::with_activities([(
            ACTIVITY_NAME.to_string(),
            ActivityBuilder::new()
                .max_participants(2)
                .participants(&["michael@mergington.edu", "daniel@mergington.edu"])
                .build(),
        )]));
        let handler = SignUpHandler::new(store.clone());
        let result = handler.handle(make_sign_up_command()).await;
        assert_eq!(
            result,
            Err(ApplicationError::Domain(DecideError::CapacityExceeded))
        );
        assert_eq!(participants(&store).await.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_sign_up_fails_if_store_is_offline(before_each: BeforeEachReturn) {
        let (command, mut store) = before_each;
        store.toggle_offline();
        let handler = SignUpHandler::new(Arc::new(store));
        let result = handler.handle(command).await;
        assert_eq!(
            result,
            Err(ApplicationError::Store(ActivityStoreError::Backend(
                "Activity store offline".into()
            )))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_sign_up_registers_a_racing_duplicate_only_once(before_each: BeforeEachReturn) {
        let (command, store) = before_each;
        store.set_delay_save_ms(10);
        let store = Arc::new(store);
        let handler1 = SignUpHandler::new(store.clone());
        let handler2 = SignUpHandler::new(store.clone());
        let (result1, result2) = join!(
            handler1.handle(command.clone()),
            handler2.handle(command)
        );
        assert!(
            result1.is_ok() ^ result2.is_ok(),
            "exactly one sign up should succeed"
        );
        let err = result1.err().or(result2.err()).unwrap();
        assert_eq!(err, ApplicationError::Domain(DecideError::AlreadyRegistered));
        let count = participants(&store)
            .await
            .iter()
            .filter(|p| *p == EMAIL)
            .count();
        assert_eq!(count, 1);
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn handle_sign_up_accepts_every_concurrent_distinct_participant(
        before_each: BeforeEachReturn,
    ) {
        let (_, store) = before_each;
        store.set_delay_save_ms(5);
        let store = Arc::new(store);
        let handler = Arc::new(SignUpHandler::new(store.clone()));
        let emails: Vec<String> = (0..8)
            .map(|i| format!("student{i}@mergington.edu"))
            .collect();

        let mut tasks = JoinSet::new();
        for email in emails.iter().cloned() {
            let handler = handler.clone();
            tasks.spawn(async move {
                handler
                    .handle(SignUpForActivity {
                        activity_name: ACTIVITY_NAME.to_string(),
                        email,
                    })
                    .await
            });
        }

        let mut failures = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            if let Err(error) = joined.expect("sign up task panicked") {
                failures.push(error);
            }
        }
        assert!(failures.is_empty(), "unexpected failures: {failures:?}");

        let stored = participants(&store).await;
        assert_eq!(stored.len(), 2 + emails.len());
        for email in &emails {
            assert_eq!(stored.iter().filter(|p| *p == email).count(), 1);
        }
    }
}
