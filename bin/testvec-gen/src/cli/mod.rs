use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

use crate::commands::{matrix::MatrixCommand, vector::VectorCommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Test vector generator for the matrix multiplication unit")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    #[command(name = "matrix", about = "Generate matrix A/B/C memory initialization files")]
    /// Generate matrix A/B/C memory initialization files
    Matrix(MatrixCommand),

    #[command(name = "vector", about = "Generate vector-pair testbench assignments")]
    /// Generate vector-pair testbench assignments
    Vector(VectorCommand),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            CliCommand::Matrix(matrix) => matrix.execute(),
            CliCommand::Vector(vector) => vector.execute(),
        }
    }
}
