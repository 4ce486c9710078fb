mod parser;

use crate::common::{AlmaPaths, ParsePolicy};
use crate::domain::{AlmaError, AlmaResult, LoveNumberKind, LoveSeries};
use parser::parse_output_lines;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads one ALMA3 Love-number output file.
///
/// With `complex` unset the rows are `period value`; with it set they are
/// `period real imaginary`. `#` comments and blank lines are ignored.
pub fn read_output(data_file: &Path, complex: bool, policy: ParsePolicy) -> AlmaResult<LoveSeries> {
    let file = File::open(data_file).map_err(|source| {
        AlmaError::io_system(
            "IO.OUTPUT_READ",
            format!(
                "failed to open ALMA3 output '{}': {}",
                data_file.display(),
                source
            ),
        )
    })?;

    let origin = data_file.display().to_string();
    let parsed = parse_output_lines(BufReader::new(file), &origin, complex, policy)?;
    if parsed.skipped_lines > 0 {
        tracing::debug!(
            output = %origin,
            skipped = parsed.skipped_lines,
            "skipped ALMA3 output lines with unexpected column counts"
        );
    }
    Ok(parsed.series)
}

pub fn read_love_numbers(
    paths: &AlmaPaths,
    kind: LoveNumberKind,
    complex: bool,
    policy: ParsePolicy,
) -> AlmaResult<LoveSeries> {
    read_output(paths.output_file(kind), complex, policy)
}

#[cfg(test)]
mod tests {
    use super::{read_love_numbers, read_output};
    use crate::common::{AlmaPaths, ParsePolicy};
    use crate::domain::LoveNumberKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_output_parses_file_on_disk() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("k.dat");
        fs::write(&path, "# ALMA3 k\n1.0 0.3\n2.0 0.28\n").expect("output should be written");

        let (periods, k) = read_output(&path, false, ParsePolicy::Lenient)
            .expect("output should parse")
            .into_pair();
        assert_eq!(periods, vec![1.0, 2.0]);
        assert_eq!(k, vec![0.3, 0.28]);
    }

    #[test]
    fn missing_output_is_an_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let error = read_output(&temp.path().join("absent.dat"), false, ParsePolicy::Lenient)
            .expect_err("file is missing");
        assert_eq!(error.placeholder(), "IO.OUTPUT_READ");
    }

    #[test]
    fn love_numbers_are_read_from_the_kind_specific_file() {
        let temp = TempDir::new().expect("tempdir should be created");
        let paths = AlmaPaths::with_layout(temp.path(), temp.path());
        fs::write(&paths.output_h, "1.0 0.6 0.02\n").expect("h output should be written");

        let series = read_love_numbers(&paths, LoveNumberKind::H, true, ParsePolicy::Strict)
            .expect("h output should parse");
        assert_eq!(series.real, vec![0.6]);
        assert_eq!(series.imaginary, Some(vec![0.02]));
    }
}
