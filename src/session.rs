// Logout capability, injected into the shell

use dialog::{Choice, DialogBox};

/// Outcome of asking the user whether to end the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutDecision {
    Confirmed,
    Cancelled,
}

/// The shell delegates logout confirmation to this collaborator instead of
/// baking a modal into the view. Tests inject a stub.
pub trait SessionPrompt {
    fn confirm_logout(&self) -> LogoutDecision;
}

/// Production prompt backed by a blocking yes/no dialog
pub struct DialogSession;

impl SessionPrompt for DialogSession {
    fn confirm_logout(&self) -> LogoutDecision {
        if let Ok(choice) = dialog::Question::new("Você quer realmente sair?")
            .title("Logout")
            .show()
        {
            if choice == Choice::Yes {
                return LogoutDecision::Confirmed;
            }
        }
        LogoutDecision::Cancelled
    }
}

#[cfg(test)]
pub struct StubSession(pub LogoutDecision);

#[cfg(test)]
impl SessionPrompt for StubSession {
    fn confirm_logout(&self) -> LogoutDecision {
        self.0
    }
}
