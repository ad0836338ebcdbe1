//! CSV Cost Catalog Adapter
//!
//! Reads the treatment cost table from a CSV export of the catalog
//! spreadsheet. Header names are trimmed before matching, so exports with
//! stray spaces around column titles still load.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::estimate::{
    CatalogError, CostRecord, CATEGORY_COLUMN, DISEASE_COLUMN, MAX_COST_COLUMN,
    MIN_COST_COLUMN, PROCEDURE_COLUMN, REQUIRED_COLUMNS,
};
use crate::ports::CostCatalogSource;

/// Catalog source backed by a CSV file.
#[derive(Debug, Clone)]
pub struct CsvCostCatalogSource {
    path: PathBuf,
}

impl CsvCostCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CostCatalogSource for CsvCostCatalogSource {
    async fn load(&self) -> Result<Vec<CostRecord>, CatalogError> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let records = parse_catalog(&contents)?;
        tracing::info!(
            path = %self.path.display(),
            rows = records.len(),
            "Cost catalog loaded"
        );
        Ok(records)
    }
}

/// Column positions of the required headers.
struct ColumnIndex {
    category: usize,
    disease: usize,
    procedure: usize,
    min_cost: usize,
    max_cost: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Result<Self, CatalogError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&c| position(c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CatalogError::MissingColumns {
                missing,
                present: headers.to_vec(),
            });
        }

        let index = |name: &str| {
            position(name).ok_or_else(|| CatalogError::Malformed(format!("no column {}", name)))
        };
        Ok(Self {
            category: index(CATEGORY_COLUMN)?,
            disease: index(DISEASE_COLUMN)?,
            procedure: index(PROCEDURE_COLUMN)?,
            min_cost: index(MIN_COST_COLUMN)?,
            max_cost: index(MAX_COST_COLUMN)?,
        })
    }
}

/// Parses catalog CSV text into records.
///
/// Blank lines and rows whose cells are all empty are skipped.
pub fn parse_catalog(contents: &str) -> Result<Vec<CostRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(contents.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CatalogError::Malformed(e.to_string()))?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(|e| CatalogError::Malformed(e.to_string()))?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        // Header is line 1.
        let line = i + 2;
        let text = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();
        let cost = |idx: usize, column: &str| {
            let raw = row.get(idx).unwrap_or("");
            parse_cost(raw).ok_or_else(|| CatalogError::InvalidNumber {
                row: line,
                column: column.to_string(),
                value: raw.to_string(),
            })
        };

        records.push(CostRecord::new(
            text(columns.category),
            text(columns.disease),
            text(columns.procedure),
            cost(columns.min_cost, MIN_COST_COLUMN)?,
            cost(columns.max_cost, MAX_COST_COLUMN)?,
        ));
    }

    Ok(records)
}

/// Parses a Rupiah amount.
///
/// Accepts plain numbers (`3000000`, `2500000.5`), an optional `Rp` prefix,
/// and digit groups separated by `.` or `,` (`3.000.000`, `3,000,000`).
pub fn parse_cost(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let value = trimmed
        .strip_prefix("Rp")
        .or_else(|| trimmed.strip_prefix("rp"))
        .unwrap_or(trimmed)
        .trim();
    if value.is_empty() {
        return None;
    }

    let parsed = if is_grouped(value) {
        value
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse::<f64>()
            .ok()
    } else {
        value.parse::<f64>().ok()
    };
    parsed.filter(|v| v.is_finite())
}

/// True for `1.234.567` or `1,234,567` style numbers.
fn is_grouped(value: &str) -> bool {
    let separator = match value.chars().find(|c| *c == '.' || *c == ',') {
        Some(sep) => sep,
        None => return false,
    };
    let mut groups = value.split(separator);
    let head_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && g.chars().all(|c| c.is_ascii_digit()));
    let mut rest = groups.peekable();
    head_ok
        && rest.peek().is_some()
        && rest.all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Kategori,Penyakit,Tindakan Medis Utama,Estimasi Min (Rp),Estimasi Max (Rp)";

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn loads_records_from_file() {
        let file = write_csv(&format!(
            "{}\nInfeksi,Tifus,Rawat Inap,3000000,7000000\nKebidanan,Caesar,Operasi Caesar,\"15.000.000\",\"30.000.000\"\n",
            HEADER
        ));
        let source = CsvCostCatalogSource::new(file.path());

        let records = source.load().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1],
            CostRecord::new("Kebidanan", "Caesar", "Operasi Caesar", 15_000_000.0, 30_000_000.0)
        );
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvCostCatalogSource::new(dir.path().join("nope.csv"));
        assert!(matches!(source.load().await, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn headers_are_trimmed() {
        let csv = " Kategori , Penyakit ,Tindakan Medis Utama ,Estimasi Min (Rp), Estimasi Max (Rp)\nA,Tifus,B,1,2\n";
        let records = parse_catalog(csv).unwrap();
        assert_eq!(records[0].disease, "Tifus");
    }

    #[test]
    fn missing_columns_report_missing_and_present() {
        let csv = "Kategori,Penyakit,Estimasi Min (Rp)\nA,B,1\n";
        match parse_catalog(csv) {
            Err(CatalogError::MissingColumns { missing, present }) => {
                assert_eq!(
                    missing,
                    vec!["Tindakan Medis Utama".to_string(), "Estimasi Max (Rp)".to_string()]
                );
                assert_eq!(present, vec!["Kategori", "Penyakit", "Estimasi Min (Rp)"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn invalid_number_reports_row_and_column() {
        let csv = format!("{}\nA,Tifus,B,1,2\nA,Caesar,B,banyak,2\n", HEADER);
        assert_eq!(
            parse_catalog(&csv),
            Err(CatalogError::InvalidNumber {
                row: 3,
                column: "Estimasi Min (Rp)".to_string(),
                value: "banyak".to_string(),
            })
        );
    }

    #[test]
    fn blank_rows_are_skipped() {
        let csv = format!("{}\nA,Tifus,B,1,2\n,,,,\n", HEADER);
        assert_eq!(parse_catalog(&csv).unwrap().len(), 1);
    }

    #[test]
    fn parse_cost_accepts_common_formats() {
        assert_eq!(parse_cost("3000000"), Some(3_000_000.0));
        assert_eq!(parse_cost(" 3.000.000 "), Some(3_000_000.0));
        assert_eq!(parse_cost("3,000,000"), Some(3_000_000.0));
        assert_eq!(parse_cost("Rp 1.500.000"), Some(1_500_000.0));
        assert_eq!(parse_cost("2500000.5"), Some(2_500_000.5));
        assert_eq!(parse_cost(""), None);
        assert_eq!(parse_cost("abc"), None);
        assert_eq!(parse_cost("NaN"), None);
    }
}
