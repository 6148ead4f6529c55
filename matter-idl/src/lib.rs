//! Types describing the Matter data model, plus a parser for the textual
//! IDL that carries it (see [`idl`]).
//!
//! The model is deliberately plain data: clusters own their enums, bitmaps,
//! structs, attributes, commands and events, and every member records the
//! identifier, numeric code and qualities the specification assigns to it.
//! Code generation over these types lives in a separate crate.

pub mod idl;

/// The standard clusters shipped with this workspace, in IDL form.
///
/// This is the input the offline generator runs over to produce the
/// channel registry and cluster modules.
pub const SAMPLE_CLUSTERS_IDL: &str = include_str!("../sample-clusters.matter");

/// How mature/usable a member of the data model is.
///
/// Most things should be stable, however while the underlying specification
/// is developed we expect provisional entries as well.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Default)]
pub enum ApiMaturity {
    #[default]
    Stable,
    Provisional,
    Internal,
    Deprecated,
}

/// The privilege a caller needs in order to read/write/invoke a member.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Default)]
pub enum AccessPrivilege {
    #[default]
    View,
    Operate,
    Manage,
    Administer,
}

/// Priority the specification assigns to an event.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Default)]
pub enum EventPriority {
    #[default]
    Debug,
    Info,
    Critical,
}

/// A named numeric constant: one enum variant or one bitmap bit.
#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct ConstantEntry {
    pub maturity: ApiMaturity,
    pub id: String,
    pub code: u64,
}

/// The type of a field: a base or derived IDL type name, an optional
/// maximum length (strings) and a list marker.
#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct DataType {
    pub name: String,
    pub is_list: bool,
    pub max_length: Option<u64>,
}

impl DataType {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_list: false,
            max_length: None,
        }
    }

    pub fn list_of(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_list: true,
            max_length: None,
        }
    }
}

/// A typed, coded member of a struct, event or attribute declaration.
#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct Field {
    pub data_type: DataType,
    pub id: String,
    pub code: u64,
}

/// A [`Field`] together with the qualities the IDL can attach to it.
#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct StructField {
    pub field: Field,
    pub maturity: ApiMaturity,
    pub is_optional: bool,
    pub is_nullable: bool,
    pub is_fabric_sensitive: bool,
}

/// What role a struct plays within its cluster.
#[derive(Debug, PartialEq, PartialOrd, Copy, Clone, Default)]
pub enum StructType {
    #[default]
    Regular,
    Request,
    /// Response struct, with the command-response code it answers with.
    Response(u64),
}

#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct Struct {
    pub doc_comment: Option<String>,
    pub maturity: ApiMaturity,
    pub struct_type: StructType,
    pub id: String,
    pub fields: Vec<StructField>,
    pub is_fabric_scoped: bool,
}

#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct Enum {
    pub doc_comment: Option<String>,
    pub maturity: ApiMaturity,
    pub id: String,
    pub base_type: String,
    pub entries: Vec<ConstantEntry>,
}

#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct Bitmap {
    pub doc_comment: Option<String>,
    pub maturity: ApiMaturity,
    pub id: String,
    pub base_type: String,
    pub entries: Vec<ConstantEntry>,
}

/// One attribute of a cluster: the underlying field plus access control
/// and the attribute-only qualities.
#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct Attribute {
    pub doc_comment: Option<String>,
    pub maturity: ApiMaturity,
    pub field: StructField,
    pub read_acl: AccessPrivilege,
    pub write_acl: AccessPrivilege,
    pub is_read_only: bool,
    pub is_no_subscribe: bool,
    pub is_timed_write: bool,
}

/// One command accepted by a cluster. `input` names a request struct of
/// the same cluster (if any); `output` names the response.
#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct Command {
    pub doc_comment: Option<String>,
    pub maturity: ApiMaturity,
    pub access: AccessPrivilege,
    pub id: String,
    pub input: Option<String>,
    pub output: String,
    pub code: u64,
    pub is_timed: bool,
    pub is_fabric_scoped: bool,
}

/// One event emitted by a cluster.
#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct Event {
    pub doc_comment: Option<String>,
    pub maturity: ApiMaturity,
    pub priority: EventPriority,
    pub access: AccessPrivilege,
    pub id: String,
    pub code: u64,
    pub fields: Vec<StructField>,
    pub is_fabric_sensitive: bool,
}

/// A full cluster definition.
#[derive(Debug, PartialEq, PartialOrd, Clone, Default)]
pub struct Cluster {
    pub doc_comment: Option<String>,
    pub maturity: ApiMaturity,
    pub id: String,
    pub code: u64,
    pub revision: u64,
    pub bitmaps: Vec<Bitmap>,
    pub enums: Vec<Enum>,
    pub structs: Vec<Struct>,
    pub attributes: Vec<Attribute>,
    pub commands: Vec<Command>,
    pub events: Vec<Event>,
}

impl Cluster {
    /// Find an attribute by its IDL name.
    pub fn attribute(&self, id: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.field.field.id == id)
    }

    /// Find a struct by its IDL name.
    pub fn struct_named(&self, id: &str) -> Option<&Struct> {
        self.structs.iter().find(|s| s.id == id)
    }
}
