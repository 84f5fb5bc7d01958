//! Events that drive the turn scheduler

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// User submitted a line of text
    UserSubmit { text: String },
    /// The delivery timer for the pending reply elapsed
    DeliveryDue,
}

impl Event {
    pub fn user_submit(text: impl Into<String>) -> Self {
        Event::UserSubmit { text: text.into() }
    }
}
