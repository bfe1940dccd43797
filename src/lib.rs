//! Stride dataset: generate the input header of the strided-access benchmark
//!
//! the header, usually named `dataset.h`, declares a `source_data` array of
//! random elements, a `verify_data` array holding the same elements and a few
//! definitions describing how the benchmark should walk them.
use std::path::PathBuf;

use tracing::{debug, info};

pub mod cfile;
pub mod config;
pub mod error;
pub mod fs;
pub mod random;

use crate::{
    cfile::CFile,
    config::Config,
    error::DatasetError,
    random::{Generator, MAX_ELEMENT, MIN_ELEMENT},
};

/// symbol guarding the generated header against multiple inclusions
pub const HEADER_GUARD: &str = "__DATASET_H";
/// alias of the element type in the generated header
pub const DATA_TYPE_ALIAS: &str = "data_t";

/// builds the whole dataset header in memory without touching the disk
///
/// `command` is recorded at the top of the header, so that a dataset can be
/// traced back to the invocation that produced it.
pub fn build(
    config: &Config,
    command: &str,
    output: impl Into<PathBuf>,
) -> Result<CFile, DatasetError> {
    info!(
        "generating {} {} elements with a stride of {}",
        config.array_size, config.data_type, config.stride
    );

    let mut rng = Generator::seed(config.seed);
    let source = rng.generate(config.array_size, MIN_ELEMENT, MAX_ELEMENT)?;
    // the benchmark copies `source_data` and compares the result against
    // `verify_data`, both arrays have to be equal
    let verify = source.clone();

    debug!("formatting the header");
    let mut file = CFile::new(output);
    file.add_comment(&format!("Command: {}", command));
    file.add_define("STRIDE", Some(&config.stride.to_string()));
    file.add_define("ARRAY_SIZE", Some(&config.array_size.to_string()));
    file.add_define("VERIFY_FUNCTION", Some(config.data_type.verify_function()));
    file.add_typedef(config.data_type.c_name(), DATA_TYPE_ALIAS);
    file.add_static_array(
        DATA_TYPE_ALIAS,
        "source_data",
        config.array_size,
        &source,
        config.elements_per_line,
    )?;
    file.add_static_array(
        DATA_TYPE_ALIAS,
        "verify_data",
        config.array_size,
        &verify,
        config.elements_per_line,
    )?;
    file.add_header_guard(HEADER_GUARD);

    Ok(file)
}

/// builds the dataset header and writes it to `output`
///
/// > **Note**
/// > this is a wrapper around [`build`] and [`CFile::emit`].
pub fn generate(
    config: &Config,
    command: &str,
    output: impl Into<PathBuf>,
) -> Result<CFile, DatasetError> {
    let file = build(config, command, output)?;
    file.emit()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use crate::{
        build,
        config::{Config, DataType},
        error::DatasetError,
        generate,
        random::{MAX_ELEMENT, MIN_ELEMENT},
    };

    /// the elements of the array called `name`, in order
    fn array_elements(lines: &[&str], name: &str) -> (usize, Vec<i64>) {
        let header = lines
            .iter()
            .position(|l| l.starts_with(&format!("static data_t {}[", name)))
            .unwrap_or_else(|| panic!("no array called {}", name));
        let size = lines[header]
            .trim_start_matches(&format!("static data_t {}[", name))
            .trim_end_matches("] =")
            .parse()
            .unwrap();

        assert_eq!(lines[header + 1], "{");
        let elements = lines[header + 2..]
            .iter()
            .take_while(|l| **l != "};")
            .flat_map(|l| {
                l.split(',')
                    .filter(|e| !e.is_empty())
                    .map(|e| e.trim().parse::<i64>().unwrap())
                    .collect::<Vec<_>>()
            })
            .collect();

        (size, elements)
    }

    #[test]
    fn small_dataset() {
        let config = Config::new(2, 4, DataType::Int).unwrap();
        let file = build(&config, "gen --stride 4", "dataset.h").unwrap();
        let lines = file.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 2 + 5 + 4 + 4 + 1);
        assert_eq!(
            &lines[..7],
            &[
                "#ifndef __DATASET_H",
                "#define __DATASET_H",
                "// Command: gen --stride 4",
                "#define STRIDE 4",
                "#define ARRAY_SIZE 8",
                "#define VERIFY_FUNCTION verifyWithStride",
                "typedef int data_t ;",
            ]
        );
        assert_eq!(lines[7], "static data_t source_data[8] =");
        assert_eq!(lines[10], "};");
        assert_eq!(lines[11], "static data_t verify_data[8] =");
        assert_eq!(lines[14], "};");
        assert_eq!(lines[15], "#endif // __DATASET_H");
    }

    #[test]
    fn source_and_verify_are_equal() {
        for (elements, stride, data_type) in [
            (2, 4, DataType::Int),
            (13, 3, DataType::Short),
            (100, 1, DataType::Long),
            (0, 8, DataType::Int),
        ] {
            let config = Config::new(elements, stride, data_type).unwrap();
            let file = build(&config, "", "dataset.h").unwrap();
            let lines = file.lines().collect::<Vec<_>>();

            let (source_size, source) = array_elements(&lines, "source_data");
            let (verify_size, verify) = array_elements(&lines, "verify_data");

            assert_eq!(source_size, elements * stride);
            assert_eq!(verify_size, elements * stride);
            assert_eq!(source.len(), elements * stride);
            assert_eq!(source, verify);
            assert!(source.iter().all(|e| (MIN_ELEMENT..=MAX_ELEMENT).contains(e)));
            assert!(lines.contains(&format!("typedef {} data_t ;", data_type).as_str()));
        }
    }

    #[test]
    fn deterministic() {
        let config = Config::new(50, 2, DataType::Long).unwrap();
        let a = build(&config, "cmd", "dataset.h").unwrap();
        let b = build(&config, "cmd", "dataset.h").unwrap();
        assert_eq!(a, b);

        let c = build(&config.clone().with_seed(1), "cmd", "dataset.h").unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn row_width() {
        let config = Config::new(5, 4, DataType::Int).unwrap();
        let file = build(&config, "cmd", "dataset.h").unwrap();
        let lines = file.lines().collect::<Vec<_>>();
        // 20 elements at 8 per line
        assert_eq!(lines[9].len(), 8 * 9);
        assert_eq!(lines[10].len(), 8 * 9);
        assert_eq!(lines[11].len(), 4 * 9);
        assert_eq!(lines[12], "};");

        let config = config.with_elements_per_line(0);
        assert!(matches!(
            build(&config, "cmd", "dataset.h"),
            Err(DatasetError::InvalidRowWidth)
        ));
    }

    #[test]
    fn written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.h");

        let config = Config::new(3, 3, DataType::Short).unwrap();
        let file = generate(&config, "cmd", &path).unwrap();

        let expected = file.lines().collect::<Vec<_>>().join("\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
        assert!(expected.starts_with("#ifndef __DATASET_H\n"));
        assert!(expected.ends_with("\n#endif // __DATASET_H"));
    }
}
