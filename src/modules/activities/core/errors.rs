// Domain rejections shared by the sign up and unregister deciders.
//
// The Display strings double as the `detail` returned to HTTP clients.

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DecideError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadyRegistered,

    #[error("Student is not signed up for this activity")]
    NotRegistered,

    #[error("Activity is full")]
    CapacityExceeded,
}
