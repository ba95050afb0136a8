pub trait Record{
    fn head(&self) -> &[u8];
    fn seq(&self) -> &[u8];
    fn qual(&self) -> &[u8];
}

// Borrows from the line buffers of the reader that produced it.
#[derive(Debug)]
pub struct SeqRecord<'a>{
    pub head: &'a [u8],
    pub seq: &'a [u8],
    pub qual: &'a [u8],
}

#[derive(Debug)]
pub struct OwnedSeqRecord{
    pub head: Vec<u8>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl<'a> Record for SeqRecord<'a>{
    fn head(&self) -> &[u8]{self.head}
    fn seq(&self) -> &[u8]{self.seq}
    fn qual(&self) -> &[u8]{self.qual}
}

impl Record for OwnedSeqRecord{
    fn head(&self) -> &[u8]{self.head.as_slice()}
    fn seq(&self) -> &[u8]{self.seq.as_slice()}
    fn qual(&self) -> &[u8]{self.qual.as_slice()}
}

impl<'a> SeqRecord<'a>{
    pub fn to_owned(&self) -> OwnedSeqRecord{
        OwnedSeqRecord{
            head: self.head.to_vec(),
            seq: self.seq.to_vec(),
            qual: self.qual.to_vec(),
        }
    }

    // Combines this record with its mate at the same position in the other
    // stream. The mate's head is discarded: the combined record is
    // identified by the head of this record.
    pub fn combine(&self, mate: &SeqRecord) -> OwnedSeqRecord{
        let mut seq = Vec::with_capacity(self.seq.len() + mate.seq.len());
        seq.extend_from_slice(self.seq);
        seq.extend_from_slice(mate.seq);

        let mut qual = Vec::with_capacity(self.qual.len() + mate.qual.len());
        qual.extend_from_slice(self.qual);
        qual.extend_from_slice(mate.qual);

        OwnedSeqRecord{head: self.head.to_vec(), seq, qual}
    }
}
