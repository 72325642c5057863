//! I/O helpers for assembler output files.

pub mod fasta;
