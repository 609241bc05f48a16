//! Reading the dataset from disk.

use crate::config::ColumnNames;
use crate::dataset::error::LoadError;
use crate::dataset::record::{Dataset, RawTable};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// Anything that can produce the session's dataset.
#[cfg_attr(test, automock)]
pub trait DatasetSource: Send + Sync {
    /// Human-readable origin of the data, for logs.
    fn describe(&self) -> String;

    /// Reads the whole dataset, projecting the configured columns.
    fn load(&self, columns: &ColumnNames) -> Result<Dataset, LoadError>;
}

/// Supported on-disk formats.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileFormat {
    /// Any workbook calamine understands; the first worksheet is read.
    Workbook,
    Csv,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(FileFormat::Workbook),
            "csv" => Ok(FileFormat::Csv),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// A spreadsheet or CSV file at a fixed path.
#[derive(Debug, Clone)]
pub struct SpreadsheetSource {
    path: PathBuf,
}

impl SpreadsheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_table(&self) -> Result<RawTable, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::NotFound {
                path: self.path.clone(),
            });
        }
        match FileFormat::from_path(&self.path)? {
            FileFormat::Workbook => read_workbook(&self.path),
            FileFormat::Csv => read_csv(&self.path),
        }
    }
}

impl DatasetSource for SpreadsheetSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self, columns: &ColumnNames) -> Result<Dataset, LoadError> {
        let table = self.read_table()?;
        log::debug!(
            "Read {} rows and {} columns from {}",
            table.rows.len(),
            table.headers.len(),
            self.path.display()
        );
        Dataset::from_table(table, columns)
    }
}

fn read_workbook(path: &Path) -> Result<RawTable, LoadError> {
    let workbook_error = |source| LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(workbook_error)?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());
    let headers = rows.next().unwrap_or_default();
    Ok(RawTable {
        headers,
        rows: rows.collect(),
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn read_csv(path: &Path) -> Result<RawTable, LoadError> {
    let csv_error = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::Record;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;
    use zip::CompressionMethod;
    use zip::write::SimpleFileOptions;

    const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

    const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

    const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

    const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

    enum Cell {
        Text(&'static str),
        Number(f64),
    }

    /// Writes a single-sheet xlsx. `rows` are (1-based row number, cells from
    /// column A); rows left out are blank in the sheet.
    fn write_workbook(path: &Path, rows: &[(u32, Vec<Cell>)]) {
        let mut sheet_data = String::new();
        for (row, cells) in rows {
            sheet_data.push_str(&format!(r#"<row r="{row}">"#));
            for (i, cell) in cells.iter().enumerate() {
                let reference = format!("{}{}", char::from(b'A' + i as u8), row);
                match cell {
                    Cell::Text(text) => sheet_data.push_str(&format!(
                        r#"<c r="{reference}" t="inlineStr"><is><t>{text}</t></is></c>"#
                    )),
                    Cell::Number(value) => {
                        sheet_data.push_str(&format!(r#"<c r="{reference}"><v>{value}</v></c>"#))
                    }
                }
            }
            sheet_data.push_str("</row>");
        }
        let sheet = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{sheet_data}</sheetData></worksheet>"#
        );

        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, body) in [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", ROOT_RELS),
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/worksheets/sheet1.xml", sheet.as_str()),
        ] {
            zip.start_file(name, options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn detects_formats_by_extension() {
        assert_eq!(
            FileFormat::from_path(Path::new("a/brics.XLSX")).unwrap(),
            FileFormat::Workbook
        );
        assert_eq!(
            FileFormat::from_path(Path::new("data.csv")).unwrap(),
            FileFormat::Csv
        );
        assert!(matches!(
            FileFormat::from_path(Path::new("data.json")),
            Err(LoadError::UnsupportedFormat { extension, .. }) if extension == "json"
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let source = SpreadsheetSource::new(dir.path().join("missing.xlsx"));
        let err = source.load(&ColumnNames::default()).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn loads_csv_with_quoted_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(
            &path,
            "sentimen,stemming_text,stopwords_text\n\
             Positif,\"bagus sekali, mantap\",bagus sekali mantap\n\
             Negatif,buruk,buruk\n",
        )
        .unwrap();

        let dataset = SpreadsheetSource::new(&path)
            .load(&ColumnNames::default())
            .unwrap();
        assert_eq!(
            dataset.records(),
            &[
                Record::new("Positif", "bagus sekali, mantap", "bagus sekali mantap"),
                Record::new("Negatif", "buruk", "buruk"),
            ]
        );
    }

    #[test]
    fn csv_without_required_column_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "sentimen,stemming_text\nPositif,bagus\n").unwrap();

        let err = SpreadsheetSource::new(&path)
            .load(&ColumnNames::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { column } if column == "stopwords_text"));
    }

    #[test]
    fn loads_first_sheet_of_a_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brics_processing.xlsx");
        write_workbook(
            &path,
            &[
                (
                    1,
                    vec![
                        Cell::Text("sentimen"),
                        Cell::Text("stemming_text"),
                        Cell::Text("stopwords_text"),
                    ],
                ),
                (
                    2,
                    vec![
                        Cell::Text("Positif"),
                        Cell::Text("ekonomi tumbuh"),
                        Cell::Text("ekonomi tumbuh pesat"),
                    ],
                ),
                (
                    3,
                    vec![
                        Cell::Text("Negatif"),
                        Cell::Number(2024.0),
                        Cell::Text("harga naik"),
                    ],
                ),
                // Row 4 is blank and must be skipped.
                (
                    5,
                    vec![Cell::Text("Netral"), Cell::Text("biasa"), Cell::Number(0.5)],
                ),
            ],
        );

        let dataset = SpreadsheetSource::new(&path)
            .load(&ColumnNames::default())
            .unwrap();
        assert_eq!(
            dataset.records(),
            &[
                Record::new("Positif", "ekonomi tumbuh", "ekonomi tumbuh pesat"),
                Record::new("Negatif", "2024", "harga naik"),
                Record::new("Netral", "biasa", "0.5"),
            ]
        );
    }

    #[test]
    fn workbook_headers_come_from_the_first_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("renamed.xlsx");
        write_workbook(
            &path,
            &[
                (
                    1,
                    vec![Cell::Text("label"), Cell::Text("stem"), Cell::Text("clean")],
                ),
                (
                    2,
                    vec![Cell::Text("Positif"), Cell::Text("bagus"), Cell::Text("bagus")],
                ),
            ],
        );

        let source = SpreadsheetSource::new(&path);
        let err = source.load(&ColumnNames::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { column } if column == "sentimen"));

        let columns = ColumnNames {
            sentiment: "label".to_string(),
            stemmed_text: "stem".to_string(),
            filtered_text: "clean".to_string(),
        };
        let dataset = source.load(&columns).unwrap();
        assert_eq!(dataset.records(), &[Record::new("Positif", "bagus", "bagus")]);
    }

    #[test]
    fn corrupt_workbook_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        fs::write(&path, b"not a zip archive").unwrap();

        let err = SpreadsheetSource::new(&path)
            .load(&ColumnNames::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::Workbook { .. }));
    }
}
