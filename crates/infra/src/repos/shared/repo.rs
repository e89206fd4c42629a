use spike_reminder_domain::ID;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RepoError {
    #[error("The user with id: {0} was not found")]
    UserNotFound(ID),
}
