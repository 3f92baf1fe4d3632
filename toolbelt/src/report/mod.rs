use std::fmt::Write as _;
use serde::Serialize;
use toolbelt_lib::{capitalize, chunk, kebab_case, sum, unique, UtilError};
use crate::error::DemoError;
use crate::format::OutputFormat;

pub const DEFAULT_NAMES: [&str; 4] = ["john doe", "jane smith", "bob johnson", "alice brown"];
pub const DEFAULT_NUMBERS: [i64; 7] = [1, 2, 2, 3, 4, 4, 5];
pub const DEFAULT_SUM_VALUES: [i64; 2] = [1, 10];
pub const DEFAULT_CHUNK_SIZE: usize = 2;

/// Sample data fed through each helper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoInput {
    pub names: Vec<String>,
    pub numbers: Vec<i64>,
    pub sum_values: Vec<i64>,
    pub chunk_size: usize,
}

impl Default for DemoInput {
    fn default() -> Self {
        DemoInput {
            names: DEFAULT_NAMES.iter().map(ToString::to_string).collect(),
            numbers: DEFAULT_NUMBERS.to_vec(),
            sum_values: DEFAULT_SUM_VALUES.to_vec(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// An input string next to its transformed form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

impl Conversion {
    #[must_use] 
    pub fn new(input: &str, output: String) -> Self {
        Conversion {
            input: input.to_string(),
            output,
        }
    }
}

/// Results of running every helper over a [`DemoInput`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub sum_values: Vec<i64>,
    pub sum: i64,
    pub capitalized: Vec<Conversion>,
    pub kebab_cased: Vec<Conversion>,
    pub chunk_size: usize,
    pub chunks: Vec<Vec<String>>,
    pub numbers: Vec<i64>,
    pub unique_numbers: Vec<i64>,
}

/// Run each helper over the input, in demo order
///
/// # Errors
///
/// Returns an error if the chunk size is zero.
pub fn build_report(input: &DemoInput) -> Result<DemoReport, UtilError> {
    let chunks = chunk(&input.names, input.chunk_size)?;

    Ok(DemoReport {
        sum_values: input.sum_values.clone(),
        sum: sum(input.sum_values.iter().copied()),
        capitalized: input
            .names
            .iter()
            .map(|name| Conversion::new(name, capitalize(name)))
            .collect(),
        kebab_cased: input
            .names
            .iter()
            .map(|name| Conversion::new(name, kebab_case(name)))
            .collect(),
        chunk_size: input.chunk_size,
        chunks,
        numbers: input.numbers.clone(),
        unique_numbers: unique(&input.numbers),
    })
}

/// Render the report as human-readable console text
#[must_use] 
pub fn to_text(report: &DemoReport) -> String {
    let mut output = String::new();
    output.push_str("=== Toolbelt Demo ===\n");
    let _ = writeln!(output, "Sum {}", report.sum);

    output.push_str("\nCapitalized names:\n");
    for conversion in &report.capitalized {
        let _ = writeln!(output, "{} -> {}", conversion.input, conversion.output);
    }

    output.push_str("\nKebab case names:\n");
    for conversion in &report.kebab_cased {
        let _ = writeln!(output, "{} -> {}", conversion.input, conversion.output);
    }

    let _ = writeln!(output, "\nChunked names (size {}):", report.chunk_size);
    for (index, names) in report.chunks.iter().enumerate() {
        let _ = writeln!(output, "Chunk {}: {:?}", index + 1, names);
    }

    output.push_str("\nUnique numbers:\n");
    let _ = writeln!(output, "Original: {:?}", report.numbers);
    let _ = writeln!(output, "Unique: {:?}", report.unique_numbers);

    output.push_str("\n=== Demo Complete ===\n");
    output
}

/// Render the report in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &DemoReport, format: OutputFormat) -> Result<String, DemoError> {
    match format {
        OutputFormat::Text => Ok(to_text(report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input() {
        let input = DemoInput::default();
        assert_eq!(input.names.len(), 4);
        assert_eq!(input.numbers, vec![1, 2, 2, 3, 4, 4, 5]);
        assert_eq!(input.sum_values, vec![1, 10]);
        assert_eq!(input.chunk_size, 2);
    }

    #[test]
    fn test_build_report_defaults() {
        let report = build_report(&DemoInput::default()).unwrap();
        assert_eq!(report.sum, 11);
        assert_eq!(report.capitalized[0], Conversion::new("john doe", "John doe".to_string()));
        assert_eq!(report.kebab_cased[3], Conversion::new("alice brown", "alice-brown".to_string()));
        assert_eq!(report.chunks.len(), 2);
        assert_eq!(report.unique_numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_build_report_zero_chunk_size() {
        let input = DemoInput {
            chunk_size: 0,
            ..DemoInput::default()
        };
        assert_eq!(
            build_report(&input),
            Err(UtilError::InvalidChunkSize { size: 0 })
        );
    }

    #[test]
    fn test_build_report_empty_input() {
        let input = DemoInput {
            names: vec![],
            numbers: vec![],
            sum_values: vec![],
            chunk_size: 3,
        };
        let report = build_report(&input).unwrap();
        assert_eq!(report.sum, 0);
        assert!(report.capitalized.is_empty());
        assert!(report.chunks.is_empty());
        assert!(report.unique_numbers.is_empty());
    }

    #[test]
    fn test_to_text_sections() {
        let report = build_report(&DemoInput::default()).unwrap();
        let text = to_text(&report);
        assert!(text.starts_with("=== Toolbelt Demo ===\n"));
        assert!(text.contains("Sum 11\n"));
        assert!(text.contains("john doe -> John doe\n"));
        assert!(text.contains("bob johnson -> bob-johnson\n"));
        assert!(text.contains("Chunked names (size 2):\n"));
        assert!(text.contains("Chunk 1: [\"john doe\", \"jane smith\"]\n"));
        assert!(text.contains("Chunk 2: [\"bob johnson\", \"alice brown\"]\n"));
        assert!(text.contains("Original: [1, 2, 2, 3, 4, 4, 5]\n"));
        assert!(text.contains("Unique: [1, 2, 3, 4, 5]\n"));
        assert!(text.ends_with("=== Demo Complete ===\n"));
    }

    #[test]
    fn test_render_json() {
        let report = build_report(&DemoInput::default()).unwrap();
        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sum"], 11);
        assert_eq!(value["chunk_size"], 2);
        assert_eq!(value["capitalized"][1]["output"], "Jane smith");
        assert_eq!(value["unique_numbers"], serde_json::json!([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_render_text_matches_to_text() {
        let report = build_report(&DemoInput::default()).unwrap();
        assert_eq!(render(&report, OutputFormat::Text).unwrap(), to_text(&report));
    }
}
