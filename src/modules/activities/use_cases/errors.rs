use crate::modules::activities::adapters::outbound::activity_store::ActivityStoreError;
use crate::modules::activities::core::errors::DecideError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] ActivityStoreError),

    #[error(transparent)]
    Domain(DecideError),
}
