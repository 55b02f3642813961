// Command data type for signing a participant up for an activity.
//
// Responsibilities
// - Carry input data for the decider.
// - Be independent of transport layer details. The activity name is already URL decoded.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: String,
    pub email: String,
}
