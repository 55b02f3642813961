// Command data type for removing a participant from an activity.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterParticipant {
    pub activity_name: String,
    pub email: String,
}
