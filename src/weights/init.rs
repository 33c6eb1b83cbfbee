use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::WeightInit;
use crate::error::Result;
use crate::network::topology::Topology;
use crate::weights::store;

/// Produces the starting topology for `layer_sizes` from the configured
/// source: a uniform random draw, or a weights file that must match the
/// topology exactly.
pub fn initialize(init: &WeightInit, layer_sizes: &[usize]) -> Result<Topology> {
    match init {
        WeightInit::Random { min, max, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            info!("drawing initial weights uniformly from [{min}, {max}] (seed: {seed:?})");
            Topology::random_uniform(layer_sizes, *min, *max, &mut rng)
        }
        WeightInit::Preloaded { path } => {
            info!("loading initial weights from {path}");
            store::load_json(path, layer_sizes)
        }
    }
}
