use std::io::prelude::*;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Write a timestamped marker line and flush `out`.
pub fn write_flush_step<W: Write>(out: &mut W) -> std::io::Result<()> {
    let now = chrono::Local::now();
    writeln!(out, "My flush: {}", now.format(TIMESTAMP_FORMAT))?;
    out.flush()
}

/// Step callback for long runs: stamp stdout and flush it so progress
/// shows up immediately when the output is piped or buffered.
pub fn flush_step() -> std::io::Result<()> {
    write_flush_step(&mut std::io::stdout().lock())
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn flush_step_format_test() {
        let mut out = Vec::new();
        write_flush_step(&mut out).unwrap();
        let line = String::from_utf8(out).unwrap();

        let stamp = line
            .strip_prefix("My flush: ")
            .and_then(|l| l.strip_suffix('\n'))
            .unwrap();
        assert!(
            chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
                .is_ok()
        );
    }

    #[test]
    fn flush_step_stdout_test() {
        assert!(flush_step().is_ok());
    }
}
