//! Greeting logic for the hello_world workspace.

pub mod greeter;

pub use greeter::{DEFAULT_NAME, greet};
