//! Named metadata fields attached to a loaded volume

use std::collections::BTreeMap;
use std::fmt;

pub const NIFTI_NDIM: &str = "nifti-ndim";
pub const NIFTI_NX: &str = "nifti-nx";
pub const NIFTI_NY: &str = "nifti-ny";
pub const NIFTI_NZ: &str = "nifti-nz";
pub const NIFTI_NT: &str = "nifti-nt";
pub const NIFTI_DX: &str = "nifti-dx";
pub const NIFTI_DY: &str = "nifti-dy";
pub const NIFTI_DZ: &str = "nifti-dz";
pub const NIFTI_DATATYPE: &str = "nifti-datatype";
pub const NIFTI_SCL_SLOPE: &str = "nifti-scl_slope";
pub const NIFTI_SCL_INTER: &str = "nifti-scl_inter";
pub const NIFTI_QFORM_CODE: &str = "nifti-qform_code";
pub const NIFTI_SFORM_CODE: &str = "nifti-sform_code";
pub const NIFTI_DESCRIP: &str = "nifti-descrip";

#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl MetadataValue {
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for MetadataValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for MetadataValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for MetadataValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Ordered key/value metadata of a volume
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    fields: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.fields.insert(key.into(), value.into());
    }

    #[inline]
    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.fields.get(key)
    }

    /// Integer field; `None` when absent or of another type
    #[inline]
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(MetadataValue::as_int)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
