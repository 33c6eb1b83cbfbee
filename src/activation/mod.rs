pub mod sigmoid;

pub use sigmoid::{activate, activate_derivative};
