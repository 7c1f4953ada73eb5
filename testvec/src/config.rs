use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TestVecError;

/// Elements wider than this cannot be drawn from a single `u64`.
pub const MAX_ELEMENT_WIDTH: u32 = 64;

/// Bit width of one product element in the emitted encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ProductWidth {
    /// Historical testbench format: every product element occupies exactly
    /// 4 hex digits and is emitted as its value mod 2^16, regardless of the
    /// input widths.
    #[default]
    Legacy16,
    /// Worst-case product width `widthA + widthB + ceil(log2 N)`, rounded up
    /// to whole hex digits. No product bits are lost.
    Widened,
}

/// Validated parameters for one matrix-pair run: `A` is `m x n`, `B` is
/// `o x n` (stored transposed), `C = A * B^t` is `m x o`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixParams {
    pub m: usize,
    pub n: usize,
    pub o: usize,
    pub width_a: u32,
    pub width_b: u32,
    #[serde(default)]
    pub product_width: ProductWidth,
}

impl MatrixParams {
    pub fn new(
        m: usize,
        n: usize,
        o: usize,
        width_a: u32,
        width_b: u32,
        product_width: ProductWidth,
    ) -> Result<Self, TestVecError> {
        let params = Self {
            m,
            n,
            o,
            width_a,
            width_b,
            product_width,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), TestVecError> {
        check_dimension("m", self.m)?;
        check_dimension("n", self.n)?;
        check_dimension("o", self.o)?;
        check_element_width(self.width_a)?;
        check_element_width(self.width_b)?;
        Ok(())
    }

    /// Declared bit width of one element of `C`.
    pub fn product_bits(&self) -> u32 {
        match self.product_width {
            ProductWidth::Legacy16 => 16,
            ProductWidth::Widened => self.width_a + self.width_b + log2_ceil(self.n),
        }
    }
}

/// TOML-backed generation parameters.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenConfig {
    pub matrix: MatrixParams,
}

impl GenConfig {
    pub fn read_config_file(file: impl AsRef<Path>) -> Result<Self, TestVecError> {
        let path = file.as_ref();
        let file_str =
            std::fs::read_to_string(path).map_err(|source| TestVecError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config: GenConfig =
            toml::from_str(&file_str).map_err(|source| TestVecError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.matrix.validate()?;
        Ok(config)
    }
}

/// Widths must map to whole hex digits; the historical generator silently
/// truncated `width / 4`, this rejects instead.
pub fn check_element_width(width: u32) -> Result<(), TestVecError> {
    if width == 0 {
        return Err(TestVecError::ZeroWidth);
    }
    if width > MAX_ELEMENT_WIDTH {
        return Err(TestVecError::WidthTooLarge(width));
    }
    if width % 4 != 0 {
        return Err(TestVecError::WidthNotNibbleAligned(width));
    }
    Ok(())
}

fn check_dimension(name: &'static str, value: usize) -> Result<(), TestVecError> {
    if value == 0 {
        return Err(TestVecError::ZeroDimension { name });
    }
    Ok(())
}

fn log2_ceil(n: usize) -> u32 {
    n.next_power_of_two().trailing_zeros()
}

#[test]
pub fn test_width_validation() {
    assert!(check_element_width(4).is_ok());
    assert!(check_element_width(64).is_ok());
    assert!(check_element_width(0).is_err());
    assert!(check_element_width(6).is_err());
    assert!(check_element_width(68).is_err());
}

#[test]
pub fn test_params_validation() {
    assert!(MatrixParams::new(8, 4, 8, 4, 8, ProductWidth::Legacy16).is_ok());
    assert!(MatrixParams::new(0, 4, 8, 4, 8, ProductWidth::Legacy16).is_err());
    assert!(MatrixParams::new(8, 0, 8, 4, 8, ProductWidth::Legacy16).is_err());
    assert!(MatrixParams::new(8, 4, 0, 4, 8, ProductWidth::Legacy16).is_err());
    assert!(MatrixParams::new(8, 4, 8, 68, 8, ProductWidth::Legacy16).is_err());
    assert!(MatrixParams::new(1, 1, 1, 64, 64, ProductWidth::Widened).is_ok());
}

#[test]
pub fn test_product_bits() {
    let legacy = MatrixParams::new(8, 4, 8, 16, 16, ProductWidth::Legacy16).unwrap();
    assert_eq!(legacy.product_bits(), 16);

    let widened = MatrixParams::new(8, 4, 8, 4, 4, ProductWidth::Widened).unwrap();
    assert_eq!(widened.product_bits(), 10);

    let inner_one = MatrixParams::new(1, 1, 1, 8, 8, ProductWidth::Widened).unwrap();
    assert_eq!(inner_one.product_bits(), 16);

    let inner_three = MatrixParams::new(1, 3, 1, 8, 8, ProductWidth::Widened).unwrap();
    assert_eq!(inner_three.product_bits(), 18);
}

#[test]
pub fn test_read_config_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "[matrix]\nm = 2\nn = 4\no = 3\nwidth_a = 4\nwidth_b = 8\nproduct_width = \"Widened\"\n"
    )
    .unwrap();
    let config = GenConfig::read_config_file(file.path()).unwrap();
    assert_eq!(config.matrix.m, 2);
    assert_eq!(config.matrix.n, 4);
    assert_eq!(config.matrix.o, 3);
    assert_eq!(config.matrix.width_a, 4);
    assert_eq!(config.matrix.width_b, 8);
    assert_eq!(config.matrix.product_width, ProductWidth::Widened);

    // product_width defaults to the legacy encoding
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[matrix]\nm = 2\nn = 4\no = 3\nwidth_a = 4\nwidth_b = 8\n").unwrap();
    let config = GenConfig::read_config_file(file.path()).unwrap();
    assert_eq!(config.matrix.product_width, ProductWidth::Legacy16);

    // invalid widths are rejected at load time
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[matrix]\nm = 2\nn = 4\no = 3\nwidth_a = 6\nwidth_b = 8\n").unwrap();
    assert!(GenConfig::read_config_file(file.path()).is_err());
}
