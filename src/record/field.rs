use std::fmt;

/// A decoded column value.
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FieldValue {
    Int(i64),
    UInt(u64),
    Str(String),
    Bytes(Vec<u8>),
    Null,
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "int",
            FieldValue::UInt(_) => "uint",
            FieldValue::Str(_) => "string",
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Renders the inspected form: strings quoted, bytes in hex.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::UInt(value) => write!(f, "{}", value),
            FieldValue::Str(value) => write!(f, "{:?}", value),
            FieldValue::Bytes(value) => {
                f.write_str("0x")?;
                value.iter().try_for_each(|byte| write!(f, "{:02x}", byte))
            }
            FieldValue::Null => f.write_str("NULL"),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::UInt(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        FieldValue::Bytes(value)
    }
}

/// A named column value and its position within the record's column list.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Field {
    pub position: usize,
    pub name: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(position: usize, name: &str, value: impl Into<FieldValue>) -> Self {
        Field {
            position,
            name: name.to_owned(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
