//! Matrix-pair generation: random `A` and `B` at independent element widths,
//! exact product `C = A * B^t`, and fixed-width hex rendering of all three.

#[cfg(test)]
pub mod tests;

use std::{io::Write, path::Path};

use itertools::Itertools;
use num_bigint::BigUint;
use rand::Rng;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
    config::MatrixParams,
    encode::{hex_field, hex_field_wide},
    error::TestVecError,
    rng::random_element,
};

pub const INPUT_MATRIX_FILE: &str = "input_matrix.mif";
pub const WEIGHT_MATRIX_FILE: &str = "weight_matrix.mif";
pub const OUT_MATRIX_FILE: &str = "out_matrix.mif";

/// Row-major matrix of non-negative elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<u64>>,
}

impl Matrix {
    /// Draws `height * width` elements of `element_width` bits in row-major
    /// order from the given random stream.
    pub fn random(rng: &mut impl Rng, height: usize, width: usize, element_width: u32) -> Self {
        let rows = (0..height)
            .map(|_| {
                (0..width)
                    .map(|_| random_element(rng, element_width))
                    .collect_vec()
            })
            .collect_vec();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }
}

/// Exact dot product of two equal-length rows.
pub fn dot_product(row: &[u64], col: &[u64]) -> BigUint {
    row.iter()
        .zip(col)
        .map(|(&a, &b)| BigUint::from(a) * b)
        .sum()
}

/// Matrices `A` (`m x n`), `B` (`o x n`, stored transposed) and their exact
/// product `C` (`m x o`).
#[derive(Debug, Clone)]
pub struct MatrixPair {
    pub params: MatrixParams,
    pub a: Matrix,
    pub b: Matrix,
    pub c: Vec<Vec<BigUint>>,
}

impl MatrixPair {
    /// Generates `A` fully, then `B`, then computes `C`, consuming the random
    /// stream sequentially so a fixed seed fully determines the output.
    pub fn generate(params: &MatrixParams, rng: &mut impl Rng) -> Result<Self, TestVecError> {
        params.validate()?;

        debug!(m = params.m, n = params.n, "generating matrix A");
        let a = Matrix::random(rng, params.m, params.n, params.width_a);
        debug!(o = params.o, n = params.n, "generating matrix B");
        let b = Matrix::random(rng, params.o, params.n, params.width_b);

        let c = a
            .rows()
            .iter()
            .map(|a_row| {
                b.rows()
                    .iter()
                    .map(|b_col| dot_product(a_row, b_col))
                    .collect_vec()
            })
            .collect_vec();

        Ok(Self {
            params: params.clone(),
            a,
            b,
            c,
        })
    }

    /// Renders all three matrices as fixed-width hex lines, one line per row,
    /// elements concatenated without separators.
    pub fn render(&self) -> MatrixPairRender {
        let c_bits = self.params.product_bits();
        MatrixPairRender {
            input_matrix: hex_lines(self.a.rows(), self.params.width_a),
            weight_matrix: hex_lines(self.b.rows(), self.params.width_b),
            out_matrix: self
                .c
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|el| hex_field_wide(el, c_bits))
                        .collect::<String>()
                })
                .collect_vec(),
        }
    }

    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<(), TestVecError> {
        self.render().write_to_dir(dir)
    }
}

fn hex_lines(rows: &[Vec<u64>], element_width: u32) -> Vec<String> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|&el| hex_field(el, element_width))
                .collect::<String>()
        })
        .collect_vec()
}

/// Rendered text of one matrix-pair run, one entry per output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixPairRender {
    pub input_matrix: Vec<String>,
    pub weight_matrix: Vec<String>,
    pub out_matrix: Vec<String>,
}

impl MatrixPairRender {
    /// Writes `input_matrix.mif`, `weight_matrix.mif` and `out_matrix.mif`
    /// into `dir`. All three are staged as temp files and only persisted once
    /// every write has succeeded, so a failed run leaves no partial set.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<(), TestVecError> {
        let dir = dir.as_ref();
        let files = [
            (INPUT_MATRIX_FILE, &self.input_matrix),
            (WEIGHT_MATRIX_FILE, &self.weight_matrix),
            (OUT_MATRIX_FILE, &self.out_matrix),
        ];

        let mut staged = Vec::with_capacity(files.len());
        for (name, lines) in files {
            let mut tmp = NamedTempFile::new_in(dir).map_err(|source| TestVecError::Write {
                path: dir.join(name),
                source,
            })?;
            for line in lines {
                writeln!(tmp, "{line}").map_err(|source| TestVecError::Write {
                    path: dir.join(name),
                    source,
                })?;
            }
            staged.push((name, tmp));
        }
        for (name, tmp) in staged {
            let path = dir.join(name);
            tmp.persist(&path).map_err(|e| TestVecError::Write {
                path,
                source: e.error,
            })?;
        }

        info!(dir = %dir.display(), "wrote input, weight and out matrix files");
        Ok(())
    }
}
