use clap::Parser;
use color_eyre::eyre::Result;
use rand::RngCore;
use testvec::{rng::seeded_rng, vector::VectorPair};

#[derive(Debug, Parser)]
pub struct VectorCommand {
    #[arg(
        long = "length",
        short = 'l',
        help = "Number of elements per vector",
        default_value_t = 10
    )]
    pub length: usize,

    #[arg(
        long = "width",
        short = 'w',
        help = "Bit width of one vector element",
        default_value_t = 16
    )]
    pub width: u32,

    #[arg(
        long = "count",
        short = 'k',
        help = "Number of independent vector pairs to generate",
        default_value_t = 10
    )]
    pub count: usize,

    #[arg(
        long = "nondet",
        short = 'r',
        help = "Use fresh process entropy instead of the fixed seed"
    )]
    pub nondet: bool,
}

/// `vector` subcommand
impl VectorCommand {
    /// Prints `count` vector pairs to stdout, five lines each.
    pub fn execute(&self) -> Result<()> {
        let mut rng: Box<dyn RngCore> = if self.nondet {
            Box::new(rand::thread_rng())
        } else {
            Box::new(seeded_rng())
        };
        for _ in 0..self.count {
            let pair = VectorPair::generate(self.length, self.width, &mut rng);
            for line in pair.render() {
                println!("{line}");
            }
        }
        Ok(())
    }
}
