pub mod input;
pub mod layout;
pub mod output;
pub mod summary;
mod wasm;

pub use wasm::*;
