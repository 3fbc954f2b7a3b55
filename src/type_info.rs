//! PostgreSQL type descriptors.
//!
//! A `TypeInfo` mirrors the `pg_type` row a client discovers for each
//! parameter or result column. The codec dispatches on the `typsend` /
//! `typreceive` function names rather than OIDs, so a catalog lookup is all
//! a caller needs to drive encoding for user-defined domains too. The
//! descriptor is plain data; the dispatch logic lives in
//! [`protocol::encoder`](crate::protocol::encoder) and
//! [`protocol::decoder`](crate::protocol::decoder).

use serde::{Deserialize, Serialize};

/// Descriptor for one PostgreSQL type.
///
/// Built from an OID with [`TypeInfo::new`], then filled in through the
/// consuming setters, each returning the modified descriptor:
///
/// ```
/// use pgcodec::TypeInfo;
///
/// let int4 = TypeInfo::new(23)
///     .name("int4")
///     .typesend("int4send")
///     .typereceive("int4recv")
///     .typelen(4);
/// assert_eq!(int4.typesend, "int4send");
/// ```
///
/// `elem_type` must be populated on array descriptors; it is the sole
/// source of element-type dispatch during array coding. `base_oid`,
/// `comp_oids`, and `comp_types` are carried for domain and composite types
/// but the codec does not encode those.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeInfo {
    pub oid: u32,
    pub name: String,
    pub typesend: String,
    pub typereceive: String,
    pub typelen: i32,
    pub output: String,
    pub input: String,
    pub elem_oid: u32,
    pub elem_type: Option<Box<TypeInfo>>,
    pub base_oid: u32,
    pub comp_oids: Vec<u32>,
    pub comp_types: Option<Vec<TypeInfo>>,
}

impl TypeInfo {
    /// A descriptor knowing only its OID; every other field is empty.
    pub fn new(oid: u32) -> Self {
        Self {
            oid,
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn typesend(mut self, typesend: impl Into<String>) -> Self {
        self.typesend = typesend.into();
        self
    }

    pub fn typereceive(mut self, typereceive: impl Into<String>) -> Self {
        self.typereceive = typereceive.into();
        self
    }

    pub fn typelen(mut self, typelen: i32) -> Self {
        self.typelen = typelen;
        self
    }

    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn elem_oid(mut self, elem_oid: u32) -> Self {
        self.elem_oid = elem_oid;
        self
    }

    pub fn elem_type(mut self, elem_type: TypeInfo) -> Self {
        self.elem_type = Some(Box::new(elem_type));
        self
    }

    pub fn base_oid(mut self, base_oid: u32) -> Self {
        self.base_oid = base_oid;
        self
    }

    pub fn comp_oids(mut self, comp_oids: Vec<u32>) -> Self {
        self.comp_oids = comp_oids;
        self
    }

    pub fn comp_types(mut self, comp_types: Vec<TypeInfo>) -> Self {
        self.comp_types = Some(comp_types);
        self
    }
}
