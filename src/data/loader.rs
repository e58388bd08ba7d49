use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{AngleMatrix, ARM_COUNT};

/// Input file name, resolved against the current working directory.
pub const DEFAULT_INPUT: &str = "arm_angles.csv";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a joint rotation trace from a CSV file.
pub fn load_csv(path: &Path) -> Result<AngleMatrix> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_angles(file).with_context(|| format!("reading {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// Parse headerless CSV with one row per time step and exactly three
/// angle columns (arm 1..3, radians).
///
/// Fields are parsed to `f64` eagerly so malformed data fails here, at load
/// time, rather than surfacing later inside the plot. An input with zero
/// rows is valid and yields an empty matrix.
pub fn read_angles(input: impl Read) -> Result<AngleMatrix> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        if record.len() != ARM_COUNT {
            bail!(
                "CSV row {row_no}: expected {ARM_COUNT} fields, got {}",
                record.len()
            );
        }

        let mut row = [0.0; ARM_COUNT];
        for (col, field) in record.iter().enumerate() {
            row[col] = field.parse::<f64>().with_context(|| {
                format!("Row {row_no}, column {col}: '{field}' is not a number")
            })?;
        }
        rows.push(row);
    }

    Ok(AngleMatrix::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_input() {
        let csv = "0.1,0.2,0.3\n0.4,0.5,0.6\n";
        let m = read_angles(csv.as_bytes()).unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.series(0), vec![0.1, 0.4]);
        assert_eq!(m.series(1), vec![0.2, 0.5]);
        assert_eq!(m.series(2), vec![0.3, 0.6]);
    }

    #[test]
    fn empty_input_yields_empty_matrix() {
        let m = read_angles("".as_bytes()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn non_numeric_field_is_an_error() {
        let err = read_angles("0.1,abc,0.3\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("'abc' is not a number"));
    }

    #[test]
    fn wrong_field_count_is_an_error() {
        let err = read_angles("0.1,0.2\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("expected 3 fields, got 2"));

        let err = read_angles("0.1,0.2,0.3,0.4\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("expected 3 fields, got 4"));
    }

    #[test]
    fn error_names_the_offending_row() {
        let err = read_angles("0.1,0.2,0.3\n0.4,oops,0.6\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("Row 1, column 1"));
    }

    #[test]
    fn whitespace_around_fields_is_trimmed() {
        let m = read_angles(" 0.1 , 0.2 ,0.3\n".as_bytes()).unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.series(1), vec![0.2]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_csv(&dir.path().join(DEFAULT_INPUT));
        assert!(result.is_err());
    }

    #[test]
    fn load_is_a_pure_function_of_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INPUT);
        std::fs::write(&path, "0.1,0.2,0.3\n0.4,0.5,0.6\n").unwrap();

        let first = load_csv(&path).unwrap();
        let second = load_csv(&path).unwrap();
        assert_eq!(first, second);
    }
}
