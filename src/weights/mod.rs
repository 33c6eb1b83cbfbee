pub mod init;
pub mod store;

pub use init::initialize;
pub use store::{load_json, save_json, WeightFile};
