use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use rand::RngCore;
use testvec::{
    config::{GenConfig, MatrixParams, ProductWidth},
    matrix::MatrixPair,
    rng::seeded_rng,
};
use tracing::info;

#[derive(Debug, Parser)]
pub struct MatrixCommand {
    #[arg(
        long = "dst",
        short = 'd',
        help = "Destination directory",
        default_value = "."
    )]
    pub dest_dir: PathBuf,

    #[arg(
        long = "nondet",
        short = 'r',
        help = "Use fresh process entropy instead of the fixed seed"
    )]
    pub nondet: bool,

    #[arg(
        long = "width-a",
        help = "Data width of elements in matrix A",
        default_value_t = 4
    )]
    pub width_a: u32,

    #[arg(
        long = "width-b",
        help = "Data width of elements in matrix B",
        default_value_t = 8
    )]
    pub width_b: u32,

    #[arg(short = 'n', help = "Dimension N if A*B is [MxN]*[NxO]", default_value_t = 4)]
    pub n: usize,

    #[arg(short = 'm', help = "Dimension M if A*B is [MxN]*[NxO]", default_value_t = 8)]
    pub m: usize,

    #[arg(short = 'o', help = "Dimension O if A*B is [MxN]*[NxO]", default_value_t = 8)]
    pub o: usize,

    #[arg(
        long = "widened",
        help = "Emit full-width products instead of the legacy 16-bit fields"
    )]
    pub widened: bool,

    #[arg(
        long = "config",
        short = 'c',
        help = "Read matrix parameters from a TOML file (overrides dimension and width flags)"
    )]
    pub config: Option<PathBuf>,
}

/// `matrix` subcommand
impl MatrixCommand {
    /// Validates the destination and parameters, then generates and writes
    /// the three matrix files.
    pub fn execute(&self) -> Result<()> {
        if !self.dest_dir.is_dir() {
            return Err(eyre!("dst={} is not a valid path", self.dest_dir.display()));
        }
        let params = match &self.config {
            Some(path) => GenConfig::read_config_file(path)?.matrix,
            None => {
                let product_width = if self.widened {
                    ProductWidth::Widened
                } else {
                    ProductWidth::Legacy16
                };
                MatrixParams::new(self.m, self.n, self.o, self.width_a, self.width_b, product_width)?
            }
        };

        let mut rng: Box<dyn RngCore> = if self.nondet {
            Box::new(rand::thread_rng())
        } else {
            Box::new(seeded_rng())
        };
        let pair = MatrixPair::generate(&params, &mut rng)?;
        pair.write_to_dir(&self.dest_dir)?;
        info!(
            m = params.m,
            n = params.n,
            o = params.o,
            dst = %self.dest_dir.display(),
            "generated matrix test vectors"
        );
        Ok(())
    }
}
