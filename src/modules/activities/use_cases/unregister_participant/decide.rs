// Pure decision function for removing a participant.
//
// Removing an email that was never signed up is a rejection, not a silent success.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::errors::DecideError;
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;

pub fn decide_unregister(
    current: Option<&Activity>,
    command: &UnregisterParticipant,
) -> Result<Activity, DecideError> {
    let activity = current.ok_or(DecideError::ActivityNotFound)?;
    if !activity.has_participant(&command.email) {
        return Err(DecideError::NotRegistered);
    }
    let mut updated = activity.clone();
    updated.participants.retain(|p| p != &command.email);
    Ok(updated)
}
