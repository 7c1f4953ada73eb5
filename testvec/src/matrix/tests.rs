use num_bigint::BigUint;
use rand::rngs::mock::StepRng;

use super::*;
use crate::{
    config::{MatrixParams, ProductWidth},
    encode::{decode_hex_line, hex_digits_ceil},
    rng::seeded_rng,
};

fn params(m: usize, n: usize, o: usize, width_a: u32, width_b: u32) -> MatrixParams {
    MatrixParams::new(m, n, o, width_a, width_b, ProductWidth::Legacy16).unwrap()
}

#[test]
pub fn test_deterministic_rerun_is_identical() {
    let params = params(8, 4, 8, 4, 8);
    let first = MatrixPair::generate(&params, &mut seeded_rng()).unwrap();
    let second = MatrixPair::generate(&params, &mut seeded_rng()).unwrap();
    assert_eq!(first.a, second.a);
    assert_eq!(first.b, second.b);
    assert_eq!(first.c, second.c);
    assert_eq!(first.render(), second.render());
}

#[test]
pub fn test_elements_within_declared_widths() {
    let pair = MatrixPair::generate(&params(4, 3, 5, 8, 12), &mut seeded_rng()).unwrap();
    for row in pair.a.rows() {
        assert_eq!(row.len(), 3);
        for &el in row {
            assert!(el < 1 << 8);
        }
    }
    for row in pair.b.rows() {
        assert_eq!(row.len(), 3);
        for &el in row {
            assert!(el < 1 << 12);
        }
    }
    assert_eq!(pair.a.rows().len(), 4);
    assert_eq!(pair.b.rows().len(), 5);
    assert_eq!(pair.c.len(), 4);
    assert_eq!(pair.c[0].len(), 5);
}

#[test]
pub fn test_legacy_out_matrix_is_product_mod_2_16() {
    // 16-bit inputs overflow the legacy product field with high probability
    let params = params(4, 4, 4, 16, 16);
    let pair = MatrixPair::generate(&params, &mut seeded_rng()).unwrap();
    let render = pair.render();
    let mask = (BigUint::from(1u8) << 16u32) - 1u8;

    for (i, line) in render.out_matrix.iter().enumerate() {
        let fields = decode_hex_line(line, 4).unwrap();
        assert_eq!(fields.len(), 4);
        for (j, field) in fields.iter().enumerate() {
            let exact = dot_product(&pair.a.rows()[i], &pair.b.rows()[j]);
            assert_eq!(pair.c[i][j], exact);
            assert_eq!(*field, &exact & &mask);
        }
    }
}

#[test]
pub fn test_widened_out_matrix_is_exact() {
    let params = MatrixParams::new(4, 4, 4, 16, 16, ProductWidth::Widened).unwrap();
    let pair = MatrixPair::generate(&params, &mut seeded_rng()).unwrap();
    let render = pair.render();
    // 16 + 16 + ceil(log2 4) = 34 bits, 9 hex digits
    assert_eq!(params.product_bits(), 34);
    let digits = hex_digits_ceil(params.product_bits());
    assert_eq!(digits, 9);

    for (i, line) in render.out_matrix.iter().enumerate() {
        let fields = decode_hex_line(line, digits).unwrap();
        for (j, field) in fields.iter().enumerate() {
            let exact = dot_product(&pair.a.rows()[i], &pair.b.rows()[j]);
            assert!(exact < BigUint::from(1u8) << 34u32);
            assert_eq!(*field, exact);
        }
    }
}

#[test]
pub fn test_pinned_output_bytes() {
    // StepRng yields 0, 1, 2, ... for successive u64 draws, so the full
    // output is known: A = [[0,1],[2,3]], B = [[4,5],[6,7]],
    // C = [[0*4+1*5, 0*6+1*7], [2*4+3*5, 2*6+3*7]] = [[5, 7], [23, 39]].
    let mut rng = StepRng::new(0, 1);
    let params = params(2, 2, 2, 4, 4);
    let render = MatrixPair::generate(&params, &mut rng).unwrap().render();
    assert_eq!(render.input_matrix, ["01", "23"]);
    assert_eq!(render.weight_matrix, ["45", "67"]);
    assert_eq!(render.out_matrix, ["00050007", "00170027"]);
}

#[test]
pub fn test_generation_order_is_a_then_b() {
    // with the same stream, a 1x2 A consumes the first two draws and B the
    // next two, matching a row-major single-pass consumption
    let mut rng = StepRng::new(10, 1);
    let pair = MatrixPair::generate(&params(1, 2, 1, 8, 8), &mut rng).unwrap();
    assert_eq!(pair.a.rows(), [[10, 11]]);
    assert_eq!(pair.b.rows(), [[12, 13]]);
}

#[test]
pub fn test_single_element_matrices() {
    let pair = MatrixPair::generate(&params(1, 1, 1, 4, 4), &mut seeded_rng()).unwrap();
    let render = pair.render();
    assert_eq!(render.input_matrix.len(), 1);
    assert_eq!(render.input_matrix[0].len(), 1);
    assert_eq!(render.weight_matrix[0].len(), 1);
    assert_eq!(render.out_matrix[0].len(), 4);
    assert_eq!(
        pair.c[0][0],
        BigUint::from(pair.a.rows()[0][0]) * pair.b.rows()[0][0]
    );
}

#[test]
pub fn test_full_width_elements() {
    let pair = MatrixPair::generate(&params(2, 2, 2, 64, 64), &mut seeded_rng()).unwrap();
    let render = pair.render();
    for line in &render.input_matrix {
        assert_eq!(line.len(), 2 * 16);
    }
}

#[test]
pub fn test_generate_rejects_invalid_params() {
    let mut bad = params(2, 2, 2, 4, 4);
    bad.width_a = 68;
    assert!(MatrixPair::generate(&bad, &mut seeded_rng()).is_err());
    bad.width_a = 4;
    bad.m = 0;
    assert!(MatrixPair::generate(&bad, &mut seeded_rng()).is_err());
}
