mod mock;
mod openai;
mod timeout;
mod traits;

pub use mock::MockGenerator;
pub use openai::{OpenAiConfig, OpenAiGenerator};
pub use timeout::TimeoutGenerator;
pub use traits::{ServiceError, TextGenerator};
