//! Describe the dataset to generate.
use std::{fmt, str::FromStr};

use crate::error::DatasetError;

/// seed used when none is given
pub const DEFAULT_SEED: u64 = 154;
/// number of elements on each line of the dataset arrays
pub const DEFAULT_ELEMENTS_PER_LINE: usize = 8;

/// the C type of the elements of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    Short,
    Long,
}

impl DataType {
    /// the name of the type in C
    pub fn c_name(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Short => "short",
            DataType::Long => "long",
        }
    }

    /// the benchmark routine that checks arrays of this type
    pub fn verify_function(&self) -> &'static str {
        match self {
            DataType::Int => "verifyWithStride",
            DataType::Short => "verifyShortWithStride",
            DataType::Long => "verifyLongWithStride",
        }
    }
}

impl FromStr for DataType {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(DataType::Int),
            "short" => Ok(DataType::Short),
            "long" => Ok(DataType::Long),
            _ => Err(DatasetError::UnknownDataType(s.to_string())),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.c_name())
    }
}

/// everything needed to generate a dataset, fixed once built
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: u64,
    pub array_size: usize,
    pub stride: usize,
    pub data_type: DataType,
    pub elements_per_line: usize,
}

impl Config {
    /// the array holds `num_accessed_elements` strided accesses, i.e.
    /// `num_accessed_elements * stride` elements
    pub fn new(
        num_accessed_elements: usize,
        stride: usize,
        data_type: DataType,
    ) -> Result<Self, DatasetError> {
        let array_size = num_accessed_elements.checked_mul(stride).ok_or(
            DatasetError::ArraySizeOverflow {
                elements: num_accessed_elements,
                stride,
            },
        )?;

        Ok(Self {
            seed: DEFAULT_SEED,
            array_size,
            stride,
            data_type,
            elements_per_line: DEFAULT_ELEMENTS_PER_LINE,
        })
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn with_elements_per_line(self, elements_per_line: usize) -> Self {
        Self {
            elements_per_line,
            ..self
        }
    }
}
