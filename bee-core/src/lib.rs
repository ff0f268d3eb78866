pub mod events;
pub mod play;
pub mod selection;
pub mod session;
pub mod speech;
pub mod spelling;
pub mod word_bank;

// Re-export main components
pub use events::*;
pub use play::*;
pub use selection::*;
pub use session::*;
pub use speech::*;
pub use spelling::*;
pub use word_bank::*;
