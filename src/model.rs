// src/model.rs
//! The entity model: an immutable view of a parsed source file.
//!
//! Produced by the external parser service and consumed read-only here.
//! Missing or null fields are normalized at deserialization time so the
//! graph pipeline never sees a partial entity.

use serde::{Deserialize, Serialize};

/// A parsed top-level function, or a method when owned by a class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionEntity {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub returns: Option<String>,
    #[serde(default)]
    pub docstring: Option<String>,
}

/// A parsed class with its superclass names (as text, possibly unresolved)
/// and its methods. Methods have no identity outside the owning class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntity {
    pub name: String,
    #[serde(default)]
    pub bases: Vec<String>,
    #[serde(default)]
    pub docstring: Option<String>,
    #[serde(default)]
    pub methods: Vec<FunctionEntity>,
}

/// A call from one top-level function to another. The caller is optional:
/// calls discovered at module scope have no enclosing function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default)]
    pub caller: Option<String>,
    pub callee: String,
}

/// A call through an object to a named method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    pub object: String,
    pub method: String,
}

/// An attribute read or write on an object. Accepted for contract
/// compatibility with the parser; never converted to edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeAccess {
    pub object: String,
    pub attribute: String,
}

/// The four relationship collections the parser may attach.
/// `class_inheritance` is carried in the wire contract but inheritance is
/// resolved from `ClassEntity::bases`, so the field is accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationships {
    #[serde(default)]
    pub function_calls: Vec<FunctionCall>,
    #[serde(default)]
    pub class_inheritance: Vec<serde_json::Value>,
    #[serde(default)]
    pub method_calls: Vec<MethodCall>,
    #[serde(default)]
    pub attribute_access: Vec<AttributeAccess>,
}

/// One analysis request's worth of parsed entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityModel {
    #[serde(default)]
    pub functions: Vec<FunctionEntity>,
    #[serde(default)]
    pub classes: Vec<ClassEntity>,
    #[serde(default)]
    pub relationships: Relationships,
}

impl EntityModel {
    /// Parses the JSON contract emitted by the parser service.
    ///
    /// # Errors
    /// Returns error if the payload is not valid JSON for the contract.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty()
    }
}
