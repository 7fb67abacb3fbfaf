//! Page-level banner message. A page starts with an empty banner, failures
//! set it, and navigating away clears it.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageError {
    message: Option<String>,
}

impl PageError {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the banner. Blank messages are ignored.
    pub fn set(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !message.trim().is_empty() {
            self.message = Some(message);
        }
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_none()
    }
}
