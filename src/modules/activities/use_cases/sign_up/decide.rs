// Pure decision function for signing up.
//
// Responsibilities
// - Reject unknown activities, duplicate participants, and full activities.
// - On success return the activity with the email appended.
// - Never perform input or output.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::errors::DecideError;
use crate::modules::activities::use_cases::sign_up::command::SignUpForActivity;

pub fn decide_sign_up(
    current: Option<&Activity>,
    command: &SignUpForActivity,
) -> Result<Activity, DecideError> {
    let activity = current.ok_or(DecideError::ActivityNotFound)?;
    if activity.has_participant(&command.email) {
        return Err(DecideError::AlreadyRegistered);
    }
    if activity.is_full() {
        return Err(DecideError::CapacityExceeded);
    }
    let mut updated = activity.clone();
    updated.participants.push(command.email.clone());
    Ok(updated)
}

#[cfg(test)]
mod sign_up_decide_tests {
    use super::*;
    use crate::test_support::fixtures::activity::ActivityBuilder;
    use crate::test_support::fixtures::commands::{EMAIL, make_sign_up_command};
    use rstest::{fixture, rstest};

    #[fixture]
    fn command() -> SignUpForActivity {
        make_sign_up_command()
    }

    #[rstest]
    fn it_should_append_the_participant(command: SignUpForActivity) {
        let activity = ActivityBuilder::new().build();
        let updated = decide_sign_up(Some(&activity), &command).unwrap();
        assert_eq!(updated.participants.len(), activity.participants.len() + 1);
        assert_eq!(updated.participants.last().map(String::as_str), Some(EMAIL));
        assert_eq!(updated.description, activity.description);
    }

    #[rstest]
    fn it_should_reject_an_unknown_activity(command: SignUpForActivity) {
        assert_eq!(
            decide_sign_up(None, &command),
            Err(DecideError::ActivityNotFound)
        );
    }

    #[rstest]
    fn it_should_reject_a_duplicate_participant(command: SignUpForActivity) {
        let activity = ActivityBuilder::new().participants(&[EMAIL]).build();
        assert_eq!(
            decide_sign_up(Some(&activity), &command),
            Err(DecideError::AlreadyRegistered)
        );
    }

    #[rstest]
    fn it_should_reject_a_full_activity(command: SignUpForActivity) {
        let activity = ActivityBuilder::new()
            .max_participants(1)
            .participants(&["michael@mergington.edu"])
            .build();
        assert_eq!(
            decide_sign_up(Some(&activity), &command),
            Err(DecideError::CapacityExceeded)
        );
    }

    #[rstest]
    fn it_should_report_already_registered_before_full(command: SignUpForActivity) {
        let activity = ActivityBuilder::new()
            .max_participants(1)
            .participants(&[EMAIL])
            .build();
        assert_eq!(
            decide_sign_up(Some(&activity), &command),
            Err(DecideError::AlreadyRegistered)
        );
    }
}
