//! CLI command handlers. Each command is in its own file.

mod check;
mod export;
mod generate;
mod list;
mod lookup;

pub use check::run_check;
pub use export::run_export;
pub use generate::{run_completions, run_man};
pub use list::run_list;
pub use lookup::{run_lookup, run_resolve};
