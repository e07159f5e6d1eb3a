//! Line oriented text edits for simulation input files.
//!
//! Every edit reads the whole source file, transforms it in memory and
//! writes the whole result to the destination, which may be the source
//! itself. Writes are not atomic.

use crate::{Error, Result};
use regex::Regex;
use std::path::Path;

/// A compiled `(pattern, replacement)` pair.
///
/// Replacements use `regex` syntax, so capture groups are `$1` or `${name}`.
#[derive(Debug, Clone)]
pub struct SubRule {
    pub pattern: Regex,
    pub replacement: String,
}

impl SubRule {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(SubRule {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }
}

/// Where to insert a new line.
///
/// * `before`: the first line matching this pattern gets pushed down.
/// * `after`: the new line goes right after the first line matching this.
/// * `number`: zero based index the new line ends up at.
///
/// Conditions that are set must agree on the index. If `number` and
/// `before` disagree, `after` alone decides.
#[derive(Debug, Clone, Default)]
pub struct LineInsertion {
    pub before: Option<Regex>,
    pub after: Option<Regex>,
    pub number: Option<usize>,
}

impl LineInsertion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before(mut self, pattern: &str) -> Result<Self> {
        self.before = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn after(mut self, pattern: &str) -> Result<Self> {
        self.after = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn number(mut self, number: usize) -> Self {
        self.number = Some(number);
        self
    }

    /// Resolve the insertion index for `lines`, `None` if the conditions
    /// can't all be met.
    /// Lines may carry their terminators; `$` still matches at line end.
    pub fn resolve(&self, lines: &[&str]) -> Option<usize> {
        let first_match = |pattern: &Option<Regex>| {
            pattern.as_ref().and_then(|re| {
                lines
                    .iter()
                    .position(|l| re.is_match(split_terminator(l).0))
            })
        };
        let before_line = first_match(&self.before);
        let after_line = first_match(&self.after);

        let idx = match (self.number, before_line) {
            (Some(n), Some(b)) if b != n => None,
            (Some(n), _) => Some(n),
            (None, b) => b,
        };

        match (idx, after_line) {
            (Some(i), Some(a)) if a + 1 != i => None,
            (Some(i), _) => Some(i),
            (None, a) => a.map(|a| a + 1),
        }
    }
}

/// Split a line into its content and its `\n` or `\r\n` terminator.
fn split_terminator(line: &str) -> (&str, &str) {
    let content = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    line.split_at(content.len())
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    log::info!("Writing: {:?}", path);
    std::fs::write(path, text).map_err(|e| Error::io(path, e))
}

/// Apply every rule, in order, to each line of `text`.
///
/// Rules see each line without its terminator, so `$` anchors at the end
/// of the line. The terminator is kept as is.
pub fn substitute_lines(text: &str, rules: &[SubRule]) -> String {
    let mut result = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let (content, terminator) = split_terminator(line);
        let mut content = content.to_string();
        for rule in rules {
            content = rule
                .pattern
                .replace_all(&content, rule.replacement.as_str())
                .into_owned();
        }
        result.push_str(&content);
        result.push_str(terminator);
    }
    result
}

/// Insert `new_line` into `text` where `insertion` resolves.
///
/// Returns the text unchanged if the conditions can't be met. An index past
/// the last line appends.
pub fn insert_line(
    text: &str,
    new_line: &str,
    insertion: &LineInsertion,
) -> String {
    let new_line = format!("{new_line}\n");
    let mut lines: Vec<&str> = text.split_inclusive('\n').collect();
    let Some(idx) = insertion.resolve(&lines) else {
        log::debug!("insert_line: no line satisfies the insertion conditions");
        return text.to_string();
    };
    log::debug!("insert_line: inserting at line {idx}");

    let idx = idx.min(lines.len());
    lines.insert(idx, &new_line);
    lines.concat()
}

/// Regex substitution from the file at `src` into the file at `dst`.
pub fn file_re_sub<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
    rules: &[SubRule],
) -> Result<()> {
    let text = read_text(src.as_ref())?;
    log::debug!(
        "file_re_sub: {} rule(s) on {:?}",
        rules.len(),
        src.as_ref()
    );
    write_text(dst.as_ref(), &substitute_lines(&text, rules))
}

/// Copy the file at `src` to `dst` with `new_line` inserted.
///
/// The destination is written even when no line was inserted.
pub fn file_add_line<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
    new_line: &str,
    insertion: &LineInsertion,
) -> Result<()> {
    let text = read_text(src.as_ref())?;
    write_text(dst.as_ref(), &insert_line(&text, new_line, insertion))
}
