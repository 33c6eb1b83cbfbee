use rand::Rng;

use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// Ordered stack of fully-connected layers and the weights between them.
///
/// `layer_sizes` is `[n0, n1, ..., nL]`: the input width, each hidden width,
/// then the output width. `weights[l]` connects layer `l` to layer `l + 1`
/// and is always `n_l x n_{l+1}`. Every constructor enforces that shape, and
/// the only mutation path (`set_weight_at`) cannot change it.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    layer_sizes: Vec<usize>,
    weights: Vec<Matrix>,
}

impl Topology {
    /// Builds a topology with every weight set to zero.
    pub fn zeros(layer_sizes: &[usize]) -> Result<Topology> {
        check_layer_sizes(layer_sizes)?;
        let weights = layer_sizes
            .windows(2)
            .map(|pair| Matrix::zeros(pair[0], pair[1]))
            .collect();
        Ok(Topology {
            layer_sizes: layer_sizes.to_vec(),
            weights,
        })
    }

    /// Builds a topology whose weights are drawn independently from
    /// `U[min, max]`, matrix by matrix, in layer order.
    pub fn random_uniform<R: Rng + ?Sized>(
        layer_sizes: &[usize],
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Result<Topology> {
        check_layer_sizes(layer_sizes)?;
        check_weight_range(min, max)?;
        let weights = layer_sizes
            .windows(2)
            .map(|pair| Matrix::random_uniform(pair[0], pair[1], min, max, &mut *rng))
            .collect();
        Ok(Topology {
            layer_sizes: layer_sizes.to_vec(),
            weights,
        })
    }

    /// Accepts externally supplied weights after checking that they fit
    /// `layer_sizes` exactly. Nothing is truncated or padded.
    pub fn from_weights(layer_sizes: &[usize], weights: Vec<Matrix>) -> Result<Topology> {
        check_layer_sizes(layer_sizes)?;
        let expected_count = layer_sizes.len() - 1;
        if weights.len() != expected_count {
            return Err(NetworkError::invalid_config(
                "weights",
                format!(
                    "expected {expected_count} weight matrices, got {}",
                    weights.len()
                ),
            ));
        }

        for (layer, (matrix, pair)) in weights.iter().zip(layer_sizes.windows(2)).enumerate() {
            let expected = (pair[0], pair[1]);
            if matrix.shape() != expected {
                return Err(NetworkError::WeightShapeMismatch {
                    layer,
                    expected,
                    got: matrix.shape(),
                });
            }
            if !matrix.is_well_formed() {
                return Err(NetworkError::MalformedMatrix { layer });
            }
        }

        Ok(Topology {
            layer_sizes: layer_sizes.to_vec(),
            weights,
        })
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn input_size(&self) -> usize {
        self.layer_sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.layer_sizes[self.layer_sizes.len() - 1]
    }

    /// Number of weight matrices, i.e. `L` for `L + 1` layers.
    pub fn depth(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub(crate) fn weight_matrix_mut(&mut self, layer: usize) -> Option<&mut Matrix> {
        self.weights.get_mut(layer)
    }

    pub fn weight_at(&self, layer: usize, from: usize, to: usize) -> Result<f64> {
        self.weights
            .get(layer)
            .and_then(|m| m.get(from, to))
            .ok_or(NetworkError::WeightIndex { layer, from, to })
    }

    pub fn set_weight_at(&mut self, layer: usize, from: usize, to: usize, value: f64) -> Result<()> {
        let slot = self
            .weights
            .get_mut(layer)
            .and_then(|m| m.get_mut(from, to))
            .ok_or(NetworkError::WeightIndex { layer, from, to })?;
        *slot = value;
        Ok(())
    }
}

fn check_layer_sizes(layer_sizes: &[usize]) -> Result<()> {
    if layer_sizes.len() < 2 {
        return Err(NetworkError::TooFewLayers {
            got: layer_sizes.len(),
        });
    }
    if let Some(layer) = layer_sizes.iter().position(|&n| n == 0) {
        return Err(NetworkError::EmptyLayer { layer });
    }
    Ok(())
}

pub(crate) fn check_weight_range(min: f64, max: f64) -> Result<()> {
    // `U[min, max]` also needs a representable width.
    if !(min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()) {
        return Err(NetworkError::InvalidWeightRange { min, max });
    }
    Ok(())
}
