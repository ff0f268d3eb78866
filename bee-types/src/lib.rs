pub mod session;
pub mod settings;
pub mod word;

// Re-export all types
pub use session::*;
pub use settings::*;
pub use word::*;
