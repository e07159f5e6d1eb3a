use crate::{Error, Result};
use nalgebra::DMatrix;
use std::io::prelude::*;

/// How each matrix entry is rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumberFormat {
    /// Fixed number of decimals, `{:.p}`.
    Fixed(usize),
    /// Scientific notation with `p` decimals in the mantissa, `{:.pe}`.
    Scientific(usize),
    /// Shortest round-trip representation, `{}`.
    Plain,
}

impl NumberFormat {
    pub fn format(&self, value: f64) -> String {
        match *self {
            NumberFormat::Fixed(p) => format!("{value:.p$}"),
            NumberFormat::Scientific(p) => format!("{value:.p$e}"),
            NumberFormat::Plain => format!("{value}"),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Fixed(4)
    }
}

/// Render a matrix one row per line, entries separated by `", "`.
///
/// When a label is given every line starts with `label:`, and a separator
/// follows it as it would any other entry (`E:, 1.0000, 2.0000`). Lines are
/// joined by newlines with no trailing newline.
pub fn format_matrix(
    data: &DMatrix<f64>,
    format: NumberFormat,
    label: Option<&str>,
) -> String {
    let mut lines = Vec::with_capacity(data.nrows());
    for row in data.row_iter() {
        let mut line = String::new();
        if let Some(label) = label {
            line.push_str(label);
            line.push(':');
        }
        for v in row.iter() {
            if !line.is_empty() {
                line.push_str(", ");
            }
            line.push_str(&format.format(*v));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Write a formatted matrix to `path` (if any) and to stdout (if `on_screen`).
///
/// The file content ends with a newline.
pub fn matrix_output<P: AsRef<std::path::Path>>(
    path: Option<P>,
    data: &DMatrix<f64>,
    format: NumberFormat,
    label: Option<&str>,
    on_screen: bool,
) -> Result<()> {
    let text = format_matrix(data, format, label);

    if let Some(path) = path {
        let path = path.as_ref();
        log::info!("Writing: {:?}", path);
        let file =
            std::fs::File::create(path).map_err(|e| Error::io(path, e))?;
        let mut output = std::io::BufWriter::new(file);
        writeln!(output, "{text}").map_err(|e| Error::io(path, e))?;
        output.flush().map_err(|e| Error::io(path, e))?;
    }

    if on_screen {
        println!("{text}");
    }
    Ok(())
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use nalgebra::dmatrix;

    #[test]
    fn number_format_test() {
        assert_eq!(NumberFormat::Fixed(2).format(1.0), "1.00");
        assert_eq!(NumberFormat::Fixed(4).format(-0.123456), "-0.1235");
        assert_eq!(NumberFormat::Scientific(2).format(1234.5), "1.23e3");
        assert_eq!(NumberFormat::Plain.format(0.5), "0.5");
    }

    #[test]
    fn format_matrix_test() {
        let m = dmatrix![1.0, 2.0; 3.0, 4.5];
        assert_eq!(
            format_matrix(&m, NumberFormat::Fixed(1), None),
            "1.0, 2.0\n3.0, 4.5"
        );
    }

    #[test]
    fn format_matrix_label_test() {
        let m = dmatrix![1.0, 2.0];
        assert_eq!(
            format_matrix(&m, NumberFormat::Fixed(2), Some("T")),
            "T:, 1.00, 2.00"
        );
    }

    #[test]
    fn matrix_output_file_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");
        let m = dmatrix![0.25; 0.5];
        matrix_output(Some(&path), &m, NumberFormat::Fixed(2), None, false)
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "0.25\n0.50\n");
    }

    #[test]
    fn matrix_output_bad_path_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("m.txt");
        let m = dmatrix![1.0];
        let result =
            matrix_output(Some(&path), &m, NumberFormat::Plain, None, false);
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
