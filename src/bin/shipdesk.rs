use anyhow::Result;
use shipdesk::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Routes { .. } => actions::routes::handle(action)?,
        Action::Decide { .. } => actions::decide::handle(action)?,
        Action::Resume { .. } => actions::resume::handle(action).await?,
    }

    Ok(())
}
