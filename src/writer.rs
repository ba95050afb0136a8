use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::error::CombineError;
use crate::record::Record;

pub struct FastqWriter<W: Write>{
    pub output: BufWriter<W>,
}

impl FastqWriter<File>{
    pub fn to_path(path: &Path) -> Result<Self, CombineError>{
        let file = File::create(path).map_err(|e| CombineError::Create{path: path.to_path_buf(), source: e})?;
        Ok(Self::new(file))
    }
}

impl<W: Write> FastqWriter<W>{
    pub fn new(output: W) -> Self{
        Self{output: BufWriter::<W>::new(output)}
    }

    pub fn write<Rec: Record>(&mut self, rec: &Rec) -> Result<(), CombineError>{
        self.output.write_all(b"@")?;
        self.output.write_all(rec.head())?;
        self.output.write_all(b"\n")?;
        self.output.write_all(rec.seq())?;
        self.output.write_all(b"\n+\n")?;
        self.output.write_all(rec.qual())?;
        self.output.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), CombineError>{
        self.output.flush()?;
        Ok(())
    }
}
