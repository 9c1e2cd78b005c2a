pub mod interaction;
pub mod prompts;
pub mod table;

pub use interaction::{Console, Interaction};
pub use table::Table;
