use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::SaleRecord;

/// Write records as CSV (`id,date,product,quantity,unit_price,sales`).
pub fn write_sales<W: io::Write>(rows: &[&SaleRecord], output: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    for rec in rows {
        writer
            .serialize(rec)
            .with_context(|| format!("writing record {}", rec.id))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

/// Export records to a CSV file.
pub fn export_sales(rows: &[&SaleRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_sales(rows, file)
}
