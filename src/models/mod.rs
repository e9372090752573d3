mod choice;
mod error;
mod question;

pub use choice::Choice;
pub use error::DomainError;
pub use question::Question;
