use crate::cli::actions::{Action, register, session, users};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Register(args) => register::execute(args).await,
        Action::Session(args) => session::execute(args).await,
        Action::Users(args) => users::execute(args).await,
    }
}
