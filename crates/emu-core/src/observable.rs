//! Read-only state inspection.
//!
//! Machines expose internal state by dotted path for debugging and tests.
//! Queries never affect emulation state.

use std::fmt;

/// A dynamically-typed value returned by a state query.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 8-bit unsigned integer (memory bytes, matrix rows).
    U8(u8),
    /// 16-bit unsigned integer (addresses, pointers).
    U16(u16),
    /// 64-bit unsigned integer (counters).
    U64(u64),
    /// Array of values.
    Array(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U8(v) => write!(f, "{v:#04X}"),
            Value::U16(v) => write!(f, "{v:#06X}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

/// A component whose state can be inspected.
pub trait Observable {
    /// Query a specific property by path.
    ///
    /// Paths are hierarchical, separated by dots (`memory.0x400C`,
    /// `keyboard.3`). Returns `None` if the path is not recognised.
    fn query(&self, path: &str) -> Option<Value>;

    /// List all available query paths.
    fn query_paths(&self) -> &'static [&'static str];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_hex_widths() {
        assert_eq!(Value::U8(0x1F).to_string(), "0x1F");
        assert_eq!(Value::U16(0x400C).to_string(), "0x400C");
        assert_eq!(Value::U64(65_000).to_string(), "65000");
    }

    #[test]
    fn display_array() {
        let v = Value::Array(vec![Value::U8(0xFF), Value::U8(0xFE)]);
        assert_eq!(v.to_string(), "[0xFF, 0xFE]");
    }
}
