use crate::types::TypeDescriptor;
use serde::{Deserialize, Serialize};

/// A method, identified by its declaring type and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub declaring_type: TypeDescriptor,
    pub name: String,
}

impl MethodDescriptor {
    pub fn new(declaring_type: TypeDescriptor, name: impl Into<String>) -> Self {
        Self {
            declaring_type,
            name: name.into(),
        }
    }
}
