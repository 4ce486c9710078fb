mod parameters;

pub use parameters::{
    MODEL_FILE_PATH, NO_LAYERS, OUTPUT_FILE_H, OUTPUT_FILE_K, OUTPUT_FILE_L, ParameterTable,
};

use crate::domain::{AlmaError, AlmaResult};
use std::fs;
use std::path::Path;

pub(crate) const VALUE_COLUMN_WIDTH: usize = 30;
pub(crate) const MIN_VALUE_PADDING: usize = 5;

/// Rewrites every configuration line carrying the marker of `name`.
///
/// `value` is written verbatim, so callers choose the textual form of
/// numbers (`1e+21` rather than `1000000000000000000000`).
/// The parameter table is read on every call. An unknown `name` fails
/// before the configuration file is opened, so the file is left untouched.
pub fn change_param(
    name: &str,
    value: &str,
    config_file: &Path,
    parameter_file: &Path,
) -> AlmaResult<()> {
    change_params(&[(name, value)], config_file, parameter_file)
}

/// Applies several edits with one table load and one rewrite of the
/// configuration file. Edits are applied in order, line by line, so the
/// result equals successive [`change_param`] calls.
pub fn change_params<S>(
    edits: &[(&str, S)],
    config_file: &Path,
    parameter_file: &Path,
) -> AlmaResult<()>
where
    S: AsRef<str>,
{
    let table = ParameterTable::load(parameter_file)?;
    let mut resolved: Vec<(&str, &str)> = Vec::with_capacity(edits.len());
    for (name, value) in edits {
        resolved.push((table.marker(name)?, value.as_ref()));
    }

    let source = fs::read_to_string(config_file).map_err(|source| {
        AlmaError::io_system(
            "IO.CONFIG_READ",
            format!(
                "failed to read ALMA3 configuration '{}': {}",
                config_file.display(),
                source
            ),
        )
    })?;

    let (rewritten, replaced) = rewrite_config(&source, &resolved);
    for (index, (name, _)) in edits.iter().enumerate() {
        tracing::debug!(
            parameter = *name,
            value = resolved[index].1,
            lines = replaced[index],
            config = %config_file.display(),
            "updated ALMA3 configuration parameter"
        );
    }

    fs::write(config_file, rewritten).map_err(|source| {
        AlmaError::io_system(
            "IO.CONFIG_WRITE",
            format!(
                "failed to write ALMA3 configuration '{}': {}",
                config_file.display(),
                source
            ),
        )
    })
}

/// Returns the new file content and the number of lines each edit replaced.
pub(crate) fn rewrite_config(source: &str, edits: &[(&str, &str)]) -> (String, Vec<usize>) {
    let mut replaced = vec![0; edits.len()];
    let mut output = String::with_capacity(source.len());

    for line in source.split_inclusive('\n') {
        let mut current: Option<String> = None;
        for (index, (marker, value)) in edits.iter().enumerate() {
            let candidate = current.as_deref().unwrap_or(line);
            if candidate.contains(marker) {
                current = Some(format_param_line(value, marker));
                replaced[index] += 1;
            }
        }
        output.push_str(current.as_deref().unwrap_or(line));
    }

    (output, replaced)
}

/// ` <value><padding>! <marker>` where the padding fills the value field to
/// the comment column but never drops below five spaces.
pub fn format_param_line(value: &str, marker: &str) -> String {
    let padding = VALUE_COLUMN_WIDTH
        .saturating_sub(value.chars().count())
        .max(MIN_VALUE_PADDING);
    format!(" {}{}! {}\n", value, " ".repeat(padding), marker)
}

#[cfg(test)]
mod tests {
    use super::{change_param, change_params, format_param_line, rewrite_config};
    use crate::domain::AlmaErrorCategory;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const PARAMETERS: &str = r#"{
        "no_layers": "Number of layers",
        "model_file_path": "Model file",
        "output_file_k": "Output file for k"
    }"#;

    const CONFIG: &str = "\
! ALMA3 configuration
 8                             ! Number of digits
 3                             ! Number of layers
 model.dat                     ! Model file
 k.dat                         ! Output file for k
 ! trailing line without newline";

    fn stage(temp: &TempDir) -> (PathBuf, PathBuf) {
        let config = temp.path().join("config.dat");
        let params = temp.path().join("parameters.json");
        fs::write(&config, CONFIG).expect("config should be written");
        fs::write(&params, PARAMETERS).expect("parameters should be written");
        (config, params)
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).expect("file should be readable")
    }

    #[test]
    fn param_line_pads_value_to_comment_column() {
        assert_eq!(
            format_param_line("2", "Number of layers"),
            format!(" 2{}! Number of layers\n", " ".repeat(29))
        );
        let long = "x".repeat(40);
        assert_eq!(
            format_param_line(&long, "Model file"),
            format!(" {}     ! Model file\n", long)
        );
        let near = "y".repeat(27);
        assert_eq!(
            format_param_line(&near, "m"),
            format!(" {}     ! m\n", near)
        );
    }

    #[test]
    fn change_param_rewrites_only_marker_lines() {
        let temp = TempDir::new().expect("tempdir should be created");
        let (config, params) = stage(&temp);

        change_param("no_layers", "2", &config, &params).expect("edit should succeed");

        let updated = read(&config);
        let before_lines: Vec<&str> = CONFIG.split_inclusive('\n').collect();
        let updated_lines: Vec<&str> = updated.split_inclusive('\n').collect();
        assert_eq!(before_lines.len(), updated_lines.len());
        for (index, (before, after)) in before_lines.iter().zip(&updated_lines).enumerate() {
            if index == 2 {
                assert_eq!(*after, format_param_line("2", "Number of layers"));
            } else {
                assert_eq!(before, after, "line {} should be byte-identical", index);
            }
        }
        assert!(updated.ends_with("! trailing line without newline"));
    }

    #[test]
    fn value_text_is_written_verbatim() {
        let temp = TempDir::new().expect("tempdir should be created");
        let (config, params) = stage(&temp);

        change_param("no_layers", "1e+21", &config, &params).expect("edit should succeed");

        let updated = read(&config);
        assert!(updated.contains(" 1e+21                         ! Number of layers\n"));
        assert!(!updated.contains("1000000000000000000000"));
    }

    #[test]
    fn every_matching_line_is_rewritten() {
        let (output, counts) = rewrite_config(
            "a Model file\nb\nc Model file\n",
            &[("Model file", "/tmp/m.dat")],
        );
        assert_eq!(counts, vec![2]);
        assert_eq!(
            output,
            format!(
                "{}b\n{}",
                format_param_line("/tmp/m.dat", "Model file"),
                format_param_line("/tmp/m.dat", "Model file")
            )
        );
    }

    #[test]
    fn no_matching_line_leaves_content_unchanged() {
        let (output, counts) = rewrite_config(CONFIG, &[("Gravity", "9.81")]);
        assert_eq!(output, CONFIG);
        assert_eq!(counts, vec![0]);
    }

    #[test]
    fn unknown_parameter_fails_without_touching_config() {
        let temp = TempDir::new().expect("tempdir should be created");
        let (config, params) = stage(&temp);

        let error = change_param("gravity", "9.81", &config, &params).expect_err("unknown name");
        assert_eq!(error.category(), AlmaErrorCategory::InputValidationError);
        assert_eq!(error.placeholder(), "INPUT.PARAMETER_LOOKUP");
        assert_eq!(read(&config), CONFIG);
    }

    #[test]
    fn batched_edits_match_successive_single_edits() {
        let temp = TempDir::new().expect("tempdir should be created");
        let (config, params) = stage(&temp);
        change_param("model_file_path", "/run/model.dat", &config, &params).unwrap();
        change_param("output_file_k", "/run/k.dat", &config, &params).unwrap();
        let sequential = read(&config);

        let (config, params) = stage(&temp);
        change_params(
            &[
                ("model_file_path", "/run/model.dat"),
                ("output_file_k", "/run/k.dat"),
            ],
            &config,
            &params,
        )
        .unwrap();

        assert_eq!(read(&config), sequential);
    }

    #[test]
    fn batched_edits_fail_before_writing_when_any_name_is_unknown() {
        let temp = TempDir::new().expect("tempdir should be created");
        let (config, params) = stage(&temp);

        let result = change_params(
            &[("no_layers", "4"), ("missing", "1")],
            &config,
            &params,
        );
        assert!(result.is_err());
        assert_eq!(read(&config), CONFIG);
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let (_, params) = stage(&temp);

        let error = change_param("no_layers", "2", &temp.path().join("absent.dat"), &params)
            .expect_err("config is missing");
        assert_eq!(error.placeholder(), "IO.CONFIG_READ");
    }
}
