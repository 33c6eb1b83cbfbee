pub mod backward;
pub mod forward;
pub mod network;
pub mod topology;
pub mod trace;

pub use backward::{backward, error_signals, ErrorSignals};
pub use forward::forward;
pub use network::Network;
pub use topology::Topology;
pub use trace::{ActivationTrace, PassMode};
