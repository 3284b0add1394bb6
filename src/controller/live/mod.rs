pub mod fallback;
pub mod http_handlers;
pub mod time_processor;

pub use fallback::*;
pub use http_handlers::*;
pub use time_processor::*;
