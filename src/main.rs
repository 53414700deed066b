use clap::Parser;
use miette::{IntoDiagnostic, Result};
use orderpay::order::Receipt;
use orderpay::reader::OrderReader;
use orderpay::writer::ReceiptWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OrderReader::new(file);

    let mut receipts = Vec::new();
    for order_result in reader.orders() {
        match order_result {
            Ok(order) => match Receipt::for_order(&order) {
                Ok(receipt) => receipts.push(receipt),
                Err(e) => eprintln!("Error pricing order: {}", e),
            },
            Err(e) => eprintln!("Error reading order: {}", e),
        }
    }

    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());
    writer.write_receipts(receipts).into_diagnostic()?;

    Ok(())
}
