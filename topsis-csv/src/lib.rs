use std::{fs::File, io, path::Path};

use thiserror::Error;
use topsis::{RankedTable, Table};


pub const SCORE_HEADER: &str = "Topsis Score";
pub const RANK_HEADER: &str = "Rank";

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open {path}: {source}")]
    Open { path: String, source: io::Error },

    #[error("malformed delimited file: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Table(#[from] topsis::Error),
}

/// Delimited text layout shared by the reader and the writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub delimiter: u8,
}

impl Default for Options {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Read a table from delimited text. The first record is the header, and the first column holds
/// the alternative labels. Fields are trimmed before criterion values are parsed.
pub fn read_table<R: io::Read>(reader: R, options: &Options) -> Result<Table, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let header = reader.headers()?.clone();
    let records = reader
        .records()
        .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()?;
    tracing::debug!(
        columns = header.len(),
        rows = records.len(),
        "read delimited table"
    );
    Ok(Table::from_records(&header, &records)?)
}

pub fn read_table_path(path: impl AsRef<Path>, options: &Options) -> Result<Table, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_table(file, options)
}

/// Write `ranked` as delimited text: the original header followed by [`SCORE_HEADER`] and
/// [`RANK_HEADER`], then one record per alternative in input order.
pub fn write_ranked<W: io::Write>(
    writer: W,
    ranked: &RankedTable,
    options: &Options,
) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(writer);

    let table = &ranked.table;
    writer.write_record(
        std::iter::once(table.label_header())
            .chain(table.criteria().iter().map(String::as_str))
            .chain([SCORE_HEADER, RANK_HEADER]),
    )?;
    for (row, score, rank) in ranked.iter() {
        writer.write_record(
            std::iter::once(row.label.clone())
                .chain(row.values.iter().map(f64::to_string))
                .chain([score.to_string(), rank.to_string()]),
        )?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_ranked_path(
    path: impl AsRef<Path>,
    ranked: &RankedTable,
    options: &Options,
) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Open {
        path: path.display().to_string(),
        source,
    })?;
    write_ranked(file, ranked, options)?;
    tracing::debug!(path = %path.display(), rows = ranked.table.len(), "wrote ranked table");
    Ok(())
}
