//! Build C headers line by line.
//!
//! every construct comes in two flavours:
//! - a free function, e.g. [`define`], that only formats the construct
//! - a method on [`CFile`], e.g. [`CFile::add_define`], that formats the
//!   construct and appends it to the lines of the file
use std::{
    collections::VecDeque,
    fmt::Display,
    path::{Path, PathBuf},
};

use crate::{error::DatasetError, fs};

/// number of elements on each line of a static array when the caller has no
/// preference, the dataset itself uses
/// [`DEFAULT_ELEMENTS_PER_LINE`](crate::config::DEFAULT_ELEMENTS_PER_LINE)
pub const ELEMENTS_PER_LINE: usize = 16;
/// width each element of a static array is right-aligned to
const ELEMENT_WIDTH: usize = 8;

/// `#define <symbol>` or `#define <symbol> <value>`
pub fn define(symbol: &str, value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => format!("#define {} {}", symbol, value),
        _ => format!("#define {}", symbol),
    }
}

/// `typedef <type> <name> ;`
pub fn typedef(type_: &str, name: &str) -> String {
    format!("typedef {} {} ;", type_, name)
}

/// formats the declaration of a fixed-size array
///
/// `size` is written as is and is not checked against the number of
/// `elements`. the last row is shorter when the elements do not fill it.
///
/// # Example
/// ```
/// # use stride_dataset::cfile::static_array;
/// let lines = static_array("data_t", "xs", 3, &[1, 22, 333], 2).unwrap();
/// assert_eq!(
///     lines,
///     vec![
///         "static data_t xs[3] =",
///         "{",
///         "       1,      22,",
///         "     333,",
///         "};",
///     ]
/// );
/// ```
pub fn static_array<T: Display>(
    type_: &str,
    name: &str,
    size: usize,
    elements: &[T],
    elements_per_line: usize,
) -> Result<Vec<String>, DatasetError> {
    if elements_per_line == 0 {
        return Err(DatasetError::InvalidRowWidth);
    }

    let mut lines = Vec::with_capacity(elements.len().div_ceil(elements_per_line) + 3);
    lines.push(format!("static {} {}[{}] =", type_, name, size));
    lines.push("{".to_string());
    for row in elements.chunks(elements_per_line) {
        lines.push(
            row.iter()
                .map(|e| format!("{:>width$},", e, width = ELEMENT_WIDTH))
                .collect::<String>(),
        );
    }
    lines.push("};".to_string());

    Ok(lines)
}

/// `// <text>`
pub fn comment(text: &str) -> String {
    format!("// {}", text)
}

pub fn empty_line() -> String {
    String::new()
}

/// the three lines of an include guard: the `#ifndef`, the `#define` and the
/// closing `#endif`
pub fn header_guard(name: &str) -> [String; 3] {
    [
        format!("#ifndef {}", name),
        define(name, None),
        format!("#endif // {}", name),
    ]
}

/// a C file being built in memory, before it is emitted to the disk
#[derive(Debug, Clone, PartialEq)]
pub struct CFile {
    path: PathBuf,
    lines: VecDeque<String>,
}

impl CFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lines: VecDeque::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn prepend_line(&mut self, line: String) {
        self.lines.push_front(line);
    }

    pub fn append_line(&mut self, line: String) {
        self.lines.push_back(line);
    }

    pub fn add_define(&mut self, symbol: &str, value: Option<&str>) {
        self.append_line(define(symbol, value));
    }

    pub fn add_typedef(&mut self, type_: &str, name: &str) {
        self.append_line(typedef(type_, name));
    }

    pub fn add_static_array<T: Display>(
        &mut self,
        type_: &str,
        name: &str,
        size: usize,
        elements: &[T],
        elements_per_line: usize,
    ) -> Result<(), DatasetError> {
        self.lines
            .extend(static_array(type_, name, size, elements, elements_per_line)?);
        Ok(())
    }

    pub fn add_comment(&mut self, text: &str) {
        self.append_line(comment(text));
    }

    pub fn add_empty_line(&mut self) {
        self.append_line(empty_line());
    }

    /// wraps everything added so far into an include guard
    pub fn add_header_guard(&mut self, name: &str) {
        let [open, def, close] = header_guard(name);
        self.prepend_line(def);
        self.prepend_line(open);
        self.append_line(close);
    }

    /// writes all the lines to [`Self::path`], overwriting whatever was there
    pub fn emit(&self) -> Result<(), DatasetError> {
        fs::dump_lines(&self.lines, &self.path)
    }
}
