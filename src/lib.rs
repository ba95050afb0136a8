use std::io::BufRead;
use std::io::Write;
use std::path::Path;

pub mod reader;
pub mod writer;
pub mod record;
pub mod error;
pub mod cli;


use error::CombineError;
use reader::FastqReader;
use writer::FastqWriter;

// Fixed index read filenames of a run directory.
pub const FORWARD_INDEX_FILE: &str = "Undetermined_S0_L001_I1_001.fastq";
pub const REVERSE_INDEX_FILE: &str = "Undetermined_S0_L001_I2_001.fastq";
pub const COMBINED_INDEX_FILE: &str = "Undetermined_S0_L001_I12_001.fastq";

// Pairs up records positionally and writes the combined barcode of each
// pair. The output ends as soon as either input runs out of records.
pub fn combine<R1: BufRead, R2: BufRead, W: Write>(
    fwd: &mut FastqReader<R1>,
    rev: &mut FastqReader<R2>,
    out: &mut FastqWriter<W>,
) -> Result<(), CombineError>{
    while let Some(fwd_rec) = fwd.read_next()?{
        let rev_rec = match rev.read_next()?{
            Some(rec) => rec,
            None => break,
        };
        out.write(&fwd_rec.combine(&rev_rec))?;
    }
    out.flush()
}

pub fn run(work_dir: &Path) -> Result<(), CombineError>{
    let mut fwd = FastqReader::from_path(&work_dir.join(FORWARD_INDEX_FILE))?;
    let mut rev = FastqReader::from_path(&work_dir.join(REVERSE_INDEX_FILE))?;
    let mut out = FastqWriter::to_path(&work_dir.join(COMBINED_INDEX_FILE))?;
    combine(&mut fwd, &mut rev, &mut out)
}
