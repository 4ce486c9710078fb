use crate::common::ParsePolicy;
use crate::domain::{AlmaError, LoveSeries, ParserResult};
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq)]
pub(super) struct ParsedOutput {
    pub(super) series: LoveSeries,
    pub(super) skipped_lines: usize,
}

pub(super) fn parse_output_lines(
    reader: impl BufRead,
    origin: &str,
    complex: bool,
    policy: ParsePolicy,
) -> ParserResult<ParsedOutput> {
    let expected_columns = if complex { 3 } else { 2 };
    let mut series = if complex {
        LoveSeries::complex()
    } else {
        LoveSeries::real_only()
    };
    let mut skipped_lines = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| {
            AlmaError::io_system(
                "IO.OUTPUT_READ",
                format!(
                    "failed to read ALMA3 output '{}' at line {}: {}",
                    origin, line_number, source
                ),
            )
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != expected_columns {
            if policy == ParsePolicy::Strict {
                return Err(AlmaError::input_validation(
                    "INPUT.OUTPUT_COLUMNS",
                    format!(
                        "ALMA3 output '{}' line {} has {} columns, expected {}",
                        origin,
                        line_number,
                        tokens.len(),
                        expected_columns
                    ),
                ));
            }
            skipped_lines += 1;
            continue;
        }

        let values = tokens
            .iter()
            .map(|token| parse_number(token, origin, line_number))
            .collect::<ParserResult<Vec<f64>>>()?;
        series.periods.push(values[0]);
        series.real.push(values[1]);
        if let Some(imaginary) = series.imaginary.as_mut() {
            imaginary.push(values[2]);
        }
    }

    if policy == ParsePolicy::Strict && series.is_empty() {
        return Err(AlmaError::input_validation(
            "INPUT.OUTPUT_EMPTY",
            format!("ALMA3 output '{}' contains no data rows", origin),
        ));
    }

    Ok(ParsedOutput {
        series,
        skipped_lines,
    })
}

fn parse_number(token: &str, origin: &str, line_number: usize) -> ParserResult<f64> {
    token.parse::<f64>().map_err(|_| {
        AlmaError::input_validation(
            "INPUT.OUTPUT_NUMBER",
            format!(
                "ALMA3 output '{}' line {}: '{}' is not a number",
                origin, line_number, token
            ),
        )
    })
}
