//! Locator query errors.

use thiserror::Error;

use crate::types::NodeId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl LocatorError {
    /// The container handle does not refer to a live element.
    pub fn missing_container(id: NodeId) -> Self {
        LocatorError::InvalidArgument(format!("container {} is not an element in the tree", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = LocatorError::InvalidArgument("root is null".to_string());
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("root is null"));
    }

    #[test]
    fn test_missing_container_names_node() {
        let err = LocatorError::missing_container(NodeId(42));
        assert!(err.to_string().contains("#42"));
    }

    #[test]
    fn test_locator_error_debug() {
        let err = LocatorError::missing_container(NodeId(1));
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidArgument"));
    }
}
