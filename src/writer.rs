use crate::error::Result;
use crate::order::Receipt;
use std::io::Write;

pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_receipts(&mut self, receipts: impl IntoIterator<Item = Receipt>) -> Result<()> {
        for receipt in receipts {
            self.writer.serialize(receipt)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
