use crate::io::fasta::open_fasta;
use anyhow::Result;
use bio::io::fasta;
use serde::Serialize;
use std::path::Path;

/// Summary statistics over an assembled contig file, computed for the
/// report shown to the user.
#[derive(Debug, Serialize)]
pub struct ContigStats {
    pub total_contigs: usize,
    pub total_length: usize,
    pub average_length: f64,
    pub n50: usize,
}

/// Parse a contig FASTA file (plain or gzipped) and compute summary stats.
pub fn contig_stats(path: &Path) -> Result<ContigStats> {
    let reader = fasta::Reader::from_bufread(open_fasta(path)?);
    let mut lengths = Vec::new();
    for record in reader.records() {
        let record = record?;
        lengths.push(record.seq().len());
    }
    Ok(ContigStats::from_lengths(lengths))
}

impl ContigStats {
    fn from_lengths(mut lengths: Vec<usize>) -> Self {
        lengths.sort_unstable();
        let total: usize = lengths.iter().sum();
        let total_contigs = lengths.len();
        let average_length = if total_contigs > 0 {
            total as f64 / total_contigs as f64
        } else {
            0.0
        };

        // N50: length of the shortest contig in the minimal set covering
        // half the total assembly length.
        let mut acc = 0;
        let half_total = total / 2;
        let n50 = lengths
            .iter()
            .rev()
            .find(|&&len| {
                acc += len;
                acc >= half_total
            })
            .copied()
            .unwrap_or(0);

        ContigStats {
            total_contigs,
            total_length: total,
            average_length,
            n50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_contig_stats() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">contig_1").unwrap();
        writeln!(file, "ATCGATCGATCGATCGATCG").unwrap(); // 20 bp
        writeln!(file, ">contig_2").unwrap();
        writeln!(file, "GCTAGCTAGCTAGCTAGCTAGCTA").unwrap(); // 24 bp
        writeln!(file, ">contig_3").unwrap();
        writeln!(file, "ATCG").unwrap(); // 4 bp

        let stats = contig_stats(file.path()).unwrap();

        assert_eq!(stats.total_contigs, 3);
        assert_eq!(stats.total_length, 48);
        assert_eq!(stats.average_length, 16.0);
        assert_eq!(stats.n50, 24);
    }

    #[test]
    fn test_multiline_records() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">contig_1").unwrap();
        writeln!(file, "ATCGATCGAT").unwrap();
        writeln!(file, "CGATCGATCG").unwrap(); // one 20 bp record

        let stats = contig_stats(file.path()).unwrap();

        assert_eq!(stats.total_contigs, 1);
        assert_eq!(stats.total_length, 20);
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let stats = contig_stats(file.path()).unwrap();

        assert_eq!(stats.total_contigs, 0);
        assert_eq!(stats.total_length, 0);
        assert_eq!(stats.average_length, 0.0);
        assert_eq!(stats.n50, 0);
    }

    #[test]
    fn test_gzipped_input() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contigs.fa.gz");
        let mut encoder =
            GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
        writeln!(encoder, ">contig_1").unwrap();
        writeln!(encoder, "ATCGATCG").unwrap();
        encoder.finish().unwrap();

        let stats = contig_stats(&path).unwrap();
        assert_eq!(stats.total_contigs, 1);
        assert_eq!(stats.total_length, 8);
    }
}
