pub mod api;
pub mod article;
pub mod controversy;
pub mod error;
pub mod feedback;
pub mod level;
pub mod rephrase;
pub mod screen;

pub use error::NewsquillError;
pub use level::Level;
