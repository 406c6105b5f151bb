// src/exit.rs
//! Standardized process exit codes for `spanforest`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::ClusterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SpanforestExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input validation failed (malformed point, invalid target, coordinate overflow, bad edge index).
    InvalidInput = 2,
    /// The edge list ran out before the target component count was reached.
    TargetUnreachable = 3,
}

impl SpanforestExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Classifies an error from the command layer.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ClusterError>() {
            Some(
                ClusterError::Parse { .. }
                | ClusterError::InvalidTarget { .. }
                | ClusterError::CoordinateOverflow { .. }
                | ClusterError::EdgeOutOfRange { .. },
            ) => Self::InvalidInput,
            Some(ClusterError::TargetUnreachable { .. }) => Self::TargetUnreachable,
            Some(
                ClusterError::Io { .. } | ClusterError::Config(_) | ClusterError::ProductOverflow { .. },
            )
            | None => Self::Error,
        }
    }
}

impl From<&anyhow::Result<()>> for SpanforestExit {
    fn from(res: &anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => Self::from_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let cases = [
            (ClusterError::Parse { line: 1, content: "x".into() }, SpanforestExit::InvalidInput),
            (ClusterError::InvalidTarget { target: 0, points: 3 }, SpanforestExit::InvalidInput),
            (ClusterError::CoordinateOverflow { u: 0, v: 1 }, SpanforestExit::InvalidInput),
            (ClusterError::TargetUnreachable { target: 1, remaining: 2 }, SpanforestExit::TargetUnreachable),
            (ClusterError::EdgeOutOfRange { u: 0, v: 9, points: 3 }, SpanforestExit::InvalidInput),
            (ClusterError::Config("bad".into()), SpanforestExit::Error),
            (ClusterError::ProductOverflow { largest: 100 }, SpanforestExit::Error),
        ];
        for (err, expected) in cases {
            let err = anyhow::Error::new(err);
            assert_eq!(SpanforestExit::from_error(&err), expected);
        }
        assert_eq!(SpanforestExit::from_error(&anyhow::anyhow!("other")), SpanforestExit::Error);
    }

    #[test]
    fn test_codes_distinct() {
        let codes = [
            SpanforestExit::Success.code(),
            SpanforestExit::Error.code(),
            SpanforestExit::InvalidInput.code(),
            SpanforestExit::TargetUnreachable.code(),
        ];
        assert_eq!(codes, [0, 1, 2, 3]);
        let ok: anyhow::Result<()> = Ok(());
        assert_eq!(SpanforestExit::from(&ok), SpanforestExit::Success);
    }
}
