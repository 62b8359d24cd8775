pub mod alphabet;
pub mod api;
pub mod config;
pub mod error;
pub mod key;
pub mod optimizer;
pub mod scorer;

pub use error::{CipherError, CipherResult};
pub use key::Key;
// cmd and reports are binary modules (declared in main.rs)
