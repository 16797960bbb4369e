use super::RawPoint;
use crate::error::{Error, Result};

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column indices resolved from the header row.
#[derive(Clone, Debug)]
struct ColumnMap {
    x: usize,
    y: usize,
    z: usize,
    intensity: Option<usize>,
    classification: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<ColumnMap> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        Ok(ColumnMap {
            x: find("x").ok_or(Error::MissingColumn("x"))?,
            y: find("y").ok_or(Error::MissingColumn("y"))?,
            z: find("z").ok_or(Error::MissingColumn("z"))?,
            intensity: find("intensity"),
            classification: find("classification"),
        })
    }
}

/// Raw points from a delimited text file with an x,y,z header.
///
/// Intensity and classification columns are optional; an absent column
/// or an empty cell yields an absent field. A row whose present cells do
/// not parse is yielded as an `Err` so the extraction pass can skip and
/// count it without aborting the run.
pub struct CsvPointSource<R: Read> {
    reader: csv::Reader<R>,
    columns: ColumnMap,
}

impl CsvPointSource<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<CsvPointSource<File>> {
        CsvPointSource::from_reader(File::open(path)?)
    }
}

impl<R: Read> CsvPointSource<R> {
    pub fn from_reader(input: R) -> Result<CsvPointSource<R>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let columns = ColumnMap::from_headers(reader.headers()?)?;

        Ok(CsvPointSource { reader, columns })
    }

    pub fn points(&mut self) -> impl Iterator<Item = Result<RawPoint>> + '_ {
        let columns = self.columns.clone();
        self.reader.records().map(move |record| match record {
            Ok(record) => parse_record(&record, &columns),
            Err(e) => Err(e.into()),
        })
    }
}

fn required_field(record: &StringRecord, index: usize, name: &str) -> Result<f64> {
    let cell = record
        .get(index)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| Error::MalformedRecord(format!("missing '{name}' value")))?;
    cell.parse()
        .map_err(|_| Error::MalformedRecord(format!("non-numeric '{name}' value '{cell}'")))
}

fn optional_field<T: std::str::FromStr>(
    record: &StringRecord,
    index: Option<usize>,
    name: &str,
) -> Result<Option<T>> {
    match index.and_then(|i| record.get(i)).filter(|c| !c.is_empty()) {
        Some(cell) => cell
            .parse()
            .map(Some)
            .map_err(|_| Error::MalformedRecord(format!("unparseable '{name}' value '{cell}'"))),
        None => Ok(None),
    }
}

fn parse_record(record: &StringRecord, columns: &ColumnMap) -> Result<RawPoint> {
    Ok(RawPoint {
        x: required_field(record, columns.x, "x")?,
        y: required_field(record, columns.y, "y")?,
        z: required_field(record, columns.z, "z")?,
        intensity: optional_field(record, columns.intensity, "intensity")?,
        classification: optional_field(record, columns.classification, "classification")?,
    })
}
