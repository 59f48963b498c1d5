use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::{Error, Result};

/// Flat, typed element buffer of a [`NumericArray`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    Bool(Vec<bool>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    U64(Vec<u64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl ArrayData {
    pub fn len(&self) -> usize {
        match self {
            ArrayData::Bool(v) => v.len(),
            ArrayData::I32(v) => v.len(),
            ArrayData::I64(v) => v.len(),
            ArrayData::U64(v) => v.len(),
            ArrayData::F32(v) => v.len(),
            ArrayData::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn serialize_element<S: SerializeSeq>(&self, seq: &mut S, idx: usize) -> core::result::Result<(), S::Error> {
        match self {
            ArrayData::Bool(v) => seq.serialize_element(&v[idx]),
            ArrayData::I32(v) => seq.serialize_element(&v[idx]),
            ArrayData::I64(v) => seq.serialize_element(&v[idx]),
            ArrayData::U64(v) => seq.serialize_element(&v[idx]),
            ArrayData::F32(v) => seq.serialize_element(&v[idx]),
            ArrayData::F64(v) => seq.serialize_element(&v[idx]),
        }
    }

    fn serialize_scalar<S: Serializer>(&self, idx: usize, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self {
            ArrayData::Bool(v) => serializer.serialize_bool(v[idx]),
            ArrayData::I32(v) => serializer.serialize_i32(v[idx]),
            ArrayData::I64(v) => serializer.serialize_i64(v[idx]),
            ArrayData::U64(v) => serializer.serialize_u64(v[idx]),
            ArrayData::F32(v) => serializer.serialize_f32(v[idx]),
            ArrayData::F64(v) => serializer.serialize_f64(v[idx]),
        }
    }
}

/// Row-major n-dimensional numeric buffer, written as nested JSON arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
    shape: Vec<usize>,
    data: ArrayData,
}

impl NumericArray {
    pub fn new(shape: Vec<usize>, data: ArrayData) -> Result<Self> {
        let Some(expected) = element_count(&shape) else {
            return Err(Error::ShapeOverflow { shape });
        };
        if expected != data.len() {
            return Err(Error::InvalidShape {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// One-dimensional array over the whole buffer.
    pub fn from_data(data: ArrayData) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }
}

// Nonzero extents are multiplied separately so that every row stride taken
// while writing fits in usize, even when another axis is empty.
fn element_count(shape: &[usize]) -> Option<usize> {
    let nonzero = shape
        .iter()
        .filter(|&&n| n != 0)
        .try_fold(1usize, |acc, &n| acc.checked_mul(n))?;
    if shape.contains(&0) { Some(0) } else { Some(nonzero) }
}

impl Serialize for NumericArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        if self.shape.is_empty() {
            // zero-dimensional: a single element
            return self.data.serialize_scalar(0, serializer);
        }
        Axis {
            array: self,
            dim: 0,
            offset: 0,
        }
        .serialize(serializer)
    }
}

struct Axis<'a> {
    array: &'a NumericArray,
    dim: usize,
    offset: usize,
}

impl Serialize for Axis<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let len = self.array.shape[self.dim];
        let mut seq = serializer.serialize_seq(Some(len))?;
        if self.dim + 1 == self.array.shape.len() {
            for i in 0..len {
                self.array.data.serialize_element(&mut seq, self.offset + i)?;
            }
        } else {
            let stride: usize = self.array.shape[self.dim + 1..].iter().product();
            for i in 0..len {
                seq.serialize_element(&Axis {
                    array: self.array,
                    dim: self.dim + 1,
                    offset: self.offset + i * stride,
                })?;
            }
        }
        seq.end()
    }
}

macro_rules! data_from {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<Vec<$t>> for ArrayData {
            fn from(v: Vec<$t>) -> Self { ArrayData::$variant(v) }
        }
    )*};
}

data_from!(bool => Bool, i32 => I32, i64 => I64, u64 => U64, f32 => F32, f64 => F64);
