use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Dense row-major matrix of `f64`.
///
/// Weight matrices are addressed as `data[from_unit][to_unit]`, so a matrix
/// connecting a layer of `n` units to a layer of `m` units is `n x m`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills a `rows x cols` matrix with independent draws from `U[min, max]`.
    ///
    /// Draw order is row by row, left to right, so a seeded `rng` always
    /// yields the same matrix.
    pub fn random_uniform<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Matrix {
        let dist = Uniform::new_inclusive(min, max);
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = dist.sample(rng);
            }
        }

        res
    }

    /// Builds a matrix from nested rows. Returns `None` if the rows are ragged.
    pub fn from_data(data: Vec<Vec<f64>>) -> Option<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if data.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Matrix { rows, cols, data })
    }

    /// True when `data` actually has `rows` rows of `cols` entries each.
    ///
    /// Deserialized matrices carry their shape separately from their data, so
    /// the two can disagree.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|row| row.len() == self.cols)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        self.data.get_mut(row).and_then(|r| r.get_mut(col))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            data: vec![],
        }
    }
}
