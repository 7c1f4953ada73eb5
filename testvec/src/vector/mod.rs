//! Vector-pair generation: two equal-length random vectors, their exact dot
//! product, and a testbench-ready rendering.


use num_bigint::BigUint;
use rand::Rng;

use crate::{
    encode::bin_field,
    matrix::dot_product,
    rng::random_vector,
};

/// Two random vectors of `length` elements at a common `width`, plus their
/// exact dot product. Inputs are a caller contract: both must be positive.
#[derive(Debug, Clone)]
pub struct VectorPair {
    pub length: usize,
    pub width: u32,
    pub a: Vec<u64>,
    pub b: Vec<u64>,
    pub dot_product: BigUint,
}

impl VectorPair {
    pub fn generate(length: usize, width: u32, rng: &mut impl Rng) -> Self {
        let a = random_vector(rng, length, width);
        let b = random_vector(rng, length, width);
        let dot_product = dot_product(&a, &b);
        Self {
            length,
            width,
            a,
            b,
            dot_product,
        }
    }

    /// Renders exactly five lines: the two vector assignments as binary
    /// literals, the expected dot product as a comment, and two clock-edge
    /// synchronization placeholders.
    pub fn render(&self) -> Vec<String> {
        let total_bits = self.length * self.width as usize;
        vec![
            format!("A = {}'b{};", total_bits, self.bin_concat(&self.a)),
            format!("B = {}'b{};", total_bits, self.bin_concat(&self.b)),
            format!("// Expected result = {}", self.dot_product),
            "@(posedge Clock)".to_string(),
            "@(posedge Clock)".to_string(),
        ]
    }

    fn bin_concat(&self, vector: &[u64]) -> String {
        vector
            .iter()
            .map(|&el| bin_field(el, self.width))
            .collect()
    }
}
