pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use clap::Parser;

#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::from(Args::parse())
}
