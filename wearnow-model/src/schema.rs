use crate::ModelError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Runtime description of an entity type: ordered field list, identity
/// field, and pass-through authorization metadata.
///
/// The staged builders carry the same facts in the type system; this
/// descriptor exists for the layers that need them as plain data, such as
/// indexing and access control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySchema {
    pub entity_type: String,
    pub plural_name: String,
    pub version: u32,
    pub identity_field: String,
    pub fields: Vec<FieldDef>,
    pub auth: AuthRule,
}

impl EntitySchema {
    /// Looks up a declared field by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks a stored record against the declared fields.
    ///
    /// Intended for the persistence layer before writing a record back into
    /// the store; the typed construction paths never need it. Keys not
    /// declared in the schema (system columns, the owner field) are
    /// ignored. Reports the first missing required field or mistyped value.
    pub fn check_record(&self, record: &Map<String, Value>) -> Result<(), ModelError> {
        for field in &self.fields {
            match record.get(&field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(ModelError::MissingField {
                            entity_type: self.entity_type.clone(),
                            field: field.name.clone(),
                        });
                    }
                }
                Some(value) => {
                    if !field.accepts(value) {
                        return Err(ModelError::TypeMismatch {
                            entity_type: self.entity_type.clone(),
                            field: field.name.clone(),
                            expected: field.field_type,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// One declared field: wire name, semantic type, and the
/// required/read-only flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub read_only: bool,
    /// Allowed wire values. Only meaningful when the type is Enum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_options: Option<Vec<String>>,
}

impl FieldDef {
    /// An optional, writable field of the given type.
    #[must_use]
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            read_only: false,
            enum_options: None,
        }
    }

    /// An enum field constrained to the given wire values.
    #[must_use]
    pub fn enumeration(name: &str, options: &[&str]) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Enum,
            required: false,
            read_only: false,
            enum_options: Some(options.iter().map(|o| (*o).into()).collect()),
        }
    }

    /// Marks the field as required for fully-built entities.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as owned by the persistence layer. Read-only fields
    /// are never assigned by the construction or copy protocols.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    fn accepts(&self, value: &Value) -> bool {
        match self.field_type {
            FieldType::Id | FieldType::Text | FieldType::Json => value.is_string(),
            FieldType::Integer | FieldType::Timestamp => value.as_i64().is_some(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Enum => match (value.as_str(), &self.enum_options) {
                (Some(s), Some(options)) => options.iter().any(|o| o == s),
                (Some(_), None) => true,
                (None, _) => false,
            },
        }
    }
}

/// The semantic type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Id,
    Text,
    Integer,
    Bool,
    Timestamp,
    Json,
    Enum,
}

/// Ownership-based access rule attached to an entity type.
///
/// Carried as opaque metadata for the external access-control layer;
/// nothing in this crate evaluates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthRule {
    pub strategy: AuthStrategy,
    pub owner_field: String,
    pub operations: Vec<Operation>,
}

impl AuthRule {
    /// An owner-based rule over the given operations.
    #[must_use]
    pub fn owner(owner_field: &str, operations: &[Operation]) -> Self {
        Self {
            strategy: AuthStrategy::Owner,
            owner_field: owner_field.into(),
            operations: operations.to_vec(),
        }
    }
}

/// How the access-control layer ties a rule to a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStrategy {
    Owner,
}

/// Operations an access rule may grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}
