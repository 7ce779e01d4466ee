pub mod context;
pub mod controversy;
pub mod feedback;
pub mod question;
pub mod rephrase;

pub use context::ArticleContext;
pub use feedback::FeedbackContext;

/// A user prompt paired with the system instruction it is sent with.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub text: String,
    pub system: &'static str,
}
