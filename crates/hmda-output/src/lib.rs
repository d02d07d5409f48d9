//! Cleaned-frame CSV serialization.
//!
//! One header row plus one record per surviving input row, in the frame's
//! current column order. Null cells serialize as empty fields and boolean
//! indicator columns as `true`/`false`.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use polars::prelude::{AnyValue, DataFrame};

use hmda_ingest::any_to_string;

/// Write the cleaned frame to `path`. Failure is fatal to the run; a
/// partially-written file is not guaranteed to be valid.
pub fn write_clean_csv(path: &Path, df: &DataFrame) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("create csv: {}", path.display()))?;
    let header: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer
        .write_record(&header)
        .with_context(|| format!("write header: {}", path.display()))?;

    let columns = df.get_columns();
    let mut record = Vec::with_capacity(columns.len());
    for idx in 0..df.height() {
        record.clear();
        for column in columns {
            record.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
        }
        writer
            .write_record(&record)
            .with_context(|| format!("write row {}: {}", idx + 1, path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    #[test]
    fn writes_header_nulls_and_booleans() {
        let df = DataFrame::new(vec![
            Series::new(
                "county_code".into(),
                vec![Some("Albany".to_string()), None],
            )
            .into_column(),
            Series::new("is_site_built".into(), vec![true, false]).into_column(),
        ])
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.csv");
        write_clean_csv(&path, &df).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines, vec![
            "county_code,is_site_built",
            "Albany,true",
            ",false",
        ]);
    }

    #[test]
    fn unwritable_path_is_fatal() {
        let df = DataFrame::new(vec![
            Series::new("a".into(), vec!["1".to_string()]).into_column(),
        ])
        .unwrap();
        let result = write_clean_csv(Path::new("/nonexistent/dir/out.csv"), &df);
        assert!(result.is_err());
    }
}
