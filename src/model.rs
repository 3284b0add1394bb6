pub mod live;
pub mod requests;
pub mod roster;
pub mod table;

pub use live::*;
pub use requests::*;
pub use roster::*;
pub use table::*;
