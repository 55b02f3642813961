// Shared command fixtures for the sign up and unregister use cases.

use crate::modules::activities::use_cases::sign_up::command::SignUpForActivity;
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;

pub const ACTIVITY_NAME: &str = "Chess Club";
pub const EMAIL: &str = "testuser@mergington.edu";

pub fn make_sign_up_command() -> SignUpForActivity {
    SignUpForActivity {
        activity_name: ACTIVITY_NAME.to_string(),
        email: EMAIL.to_string(),
    }
}

pub fn make_unregister_command() -> UnregisterParticipant {
    UnregisterParticipant {
        activity_name: ACTIVITY_NAME.to_string(),
        email: EMAIL.to_string(),
    }
}
