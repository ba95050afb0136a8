use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;

use crate::error::CombineError;
use crate::record::SeqRecord;

pub struct FastqReader<R: io::BufRead>{
    pub input: R,
    pub head_buf: Vec<u8>,
    pub seq_buf: Vec<u8>,
    pub plus_buf: Vec<u8>, // For the fastq plus-line
    pub qual_buf: Vec<u8>,
}

impl FastqReader<BufReader<File>>{
    pub fn from_path(path: &Path) -> Result<Self, CombineError>{
        let file = File::open(path).map_err(|e| CombineError::Open{path: path.to_path_buf(), source: e})?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: io::BufRead> FastqReader<R>{
    pub fn new(input: R) -> Self{
        FastqReader{input,
                    head_buf: Vec::<u8>::new(),
                    seq_buf: Vec::<u8>::new(),
                    plus_buf: Vec::<u8>::new(),
                    qual_buf: Vec::<u8>::new()}
    }

    pub fn read_next(&mut self) -> Result<Option<SeqRecord>, CombineError>{
        self.head_buf.clear();
        self.seq_buf.clear();
        self.plus_buf.clear();
        self.qual_buf.clear();

        // Read header line
        if self.input.read_until(b'\n', &mut self.head_buf)? == 0 {return Ok(None)} // End of stream

        // Read sequence line, plus-line and quality line. If the stream runs
        // out inside the group, the incomplete final record is dropped.
        if self.input.read_until(b'\n', &mut self.seq_buf)? == 0 {return Ok(None)}
        if self.input.read_until(b'\n', &mut self.plus_buf)? == 0 {return Ok(None)} // Plus-line contents are ignored
        if self.input.read_until(b'\n', &mut self.qual_buf)? == 0 {return Ok(None)}

        let head = trim_trailing_whitespace(&self.head_buf);
        let head = if head.is_empty() {head} else {&head[1..]}; // Drop the marker byte

        Ok(Some(SeqRecord{head,
                          seq: trim_trailing_whitespace(&self.seq_buf),
                          qual: trim_trailing_whitespace(&self.qual_buf)}))
    }
}

fn trim_trailing_whitespace(line: &[u8]) -> &[u8]{
    match line.iter().rposition(|b| !b.is_ascii_whitespace()){
        Some(i) => &line[..i+1],
        None => &line[..0],
    }
}
