// src/error.rs
//! Error types for array operations

use std::fmt;

/// Errors that can occur during array operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Index is not below the array length
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length at the time of the access
        len: usize,
    },
    /// Requested capacity overflows `usize` or the allocator's layout limit
    CapacityOverflow {
        /// Number of slots that was asked for, saturated at `usize::MAX`
        requested: usize,
    },
    /// The allocator refused the request
    AllocationFailed {
        /// Number of slots that was asked for, saturated at `usize::MAX`
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "Capacity overflow requesting {} elements", requested)
            }
            Self::AllocationFailed { requested } => {
                write!(f, "Allocation of {} elements failed", requested)
            }
        }
    }
}

impl std::error::Error for ArrayError {}

/// Result type alias for array operations
///
/// Note: When using with other Result types (like anyhow::Result),
/// either qualify the type (`ctvec::Result<T>`) or use [`ResultExt`].
pub type Result<T> = std::result::Result<T, ArrayError>;

/// Extension trait for converting array Results into other error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to a boxed trait-object error
    fn into_boxed(self) -> std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_boxed(self) -> std::result::Result<T, Box<dyn std::error::Error + Send + Sync>> {
        self.map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ArrayError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Index 7 out of range for length 3");

        let err = ArrayError::CapacityOverflow { requested: usize::MAX };
        assert!(err.to_string().starts_with("Capacity overflow"));
    }

    #[test]
    fn test_result_ext_boxed() {
        let result: Result<u32> = Err(ArrayError::IndexOutOfRange { index: 1, len: 0 });
        let boxed = result.into_boxed().unwrap_err();
        assert!(boxed.to_string().contains("out of range"));
    }

    #[cfg(feature = "anyhow")]
    #[test]
    fn test_anyhow_conversion() {
        let err = ArrayError::AllocationFailed { requested: 16 };
        let anyhow_err: anyhow::Error = err.into();
        assert!(anyhow_err.to_string().contains("Allocation of 16"));
        assert_eq!(
            anyhow_err.downcast_ref::<ArrayError>(),
            Some(&ArrayError::AllocationFailed { requested: 16 })
        );
    }

    #[cfg(feature = "anyhow")]
    #[test]
    fn test_question_mark_into_anyhow() {
        fn read_past_end() -> anyhow::Result<i32> {
            let a = crate::IntArray::from(vec![1, 2]);
            let v = a.value(5)?;
            Ok(v)
        }

        fn read_via_ext() -> anyhow::Result<i32> {
            let a = crate::IntArray::from(vec![1, 2]);
            a.value(1).into_anyhow()
        }

        let err = read_past_end().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ArrayError>(),
            Some(&ArrayError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(read_via_ext().unwrap(), 2);
    }
}
