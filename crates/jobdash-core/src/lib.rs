pub mod config;
pub mod debounce;
pub mod error;
pub mod input;
pub mod result;
pub mod selection;

pub use config::AppConfig;
pub use debounce::Debouncer;
pub use error::JobdashError;
pub use input::InputState;
pub use result::JobdashResult;
pub use selection::SelectionState;
