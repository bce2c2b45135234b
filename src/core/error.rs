//=========================================================================
// Bridge Errors
//=========================================================================
//
// Every failure is returned synchronously from the call that caused it.
// Nothing is retried and nothing is deferred.
//
// Taxonomy:
// - InitError class: `Init` (subsystem) and `ObjectInit` (constructor)
// - `Argument`: rejected before any native call
// - `NotInitialized`: the lifecycle gate is closed
// - `Invalidated`: handle outlived the subsystem epoch it was made in
// - `Native`: a status-returning native call reported failure
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== BridgeError =========================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Subsystem bootstrap failed. `code` is the native status verbatim.
    #[error("subsystem initialization failed (status {code}): {message}")]
    Init { code: i32, message: String },

    /// A native constructor returned null.
    #[error("{object} creation failed: {message}")]
    ObjectInit { object: &'static str, message: String },

    /// Caller supplied a value the native call cannot accept.
    #[error("invalid argument `{name}`: {reason}")]
    Argument { name: &'static str, reason: String },

    /// Operation needs an initialized subsystem.
    #[error("subsystem is not initialized")]
    NotInitialized,

    /// The subsystem quit after this handle was created; the native layer
    /// has already released it.
    #[error("{object} handle was invalidated by subsystem quit")]
    Invalidated { object: &'static str },

    /// A status-returning native call failed.
    #[error("native call `{call}` failed (status {code}): {message}")]
    Native {
        call: &'static str,
        code: i32,
        message: String,
    },
}

impl BridgeError {
    pub(crate) fn argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Argument {
            name,
            reason: reason.into(),
        }
    }

    /// `true` for subsystem and object construction failures.
    pub fn is_init_error(&self) -> bool {
        matches!(self, Self::Init { .. } | Self::ObjectInit { .. })
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_class_groups_both_construction_failures() {
        let init = BridgeError::Init {
            code: -1,
            message: "no video".into(),
        };
        let object = BridgeError::ObjectInit {
            object: "Window",
            message: "too large".into(),
        };
        assert!(init.is_init_error());
        assert!(object.is_init_error());
        assert!(!BridgeError::NotInitialized.is_init_error());
        assert!(!BridgeError::argument("w", "must be positive").is_init_error());
    }

    #[test]
    fn display_keeps_native_code_and_message() {
        let err = BridgeError::Init {
            code: -7,
            message: "No available video device".into(),
        };
        let text = err.to_string();
        assert!(text.contains("-7"));
        assert!(text.contains("No available video device"));
    }

    #[test]
    fn argument_display_names_the_parameter() {
        let err = BridgeError::argument("title", "contains an interior NUL byte");
        assert_eq!(err.to_string(), "invalid argument `title`: contains an interior NUL byte");
    }

    #[test]
    fn is_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<BridgeError>();
    }
}
