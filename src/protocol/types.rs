//! Well-known PostgreSQL type OIDs and ready-made descriptors.
//!
//! Reference: https://github.com/postgres/postgres/blob/master/src/include/catalog/pg_type.dat
//!
//! Catalog discovery is the caller's job: anything beyond the built-ins
//! needs a `pg_type` query. The built-in scalar and array types never
//! change, so their descriptors can be had without a round trip via
//! [`builtin`].

use crate::type_info::TypeInfo;

/// PostgreSQL type OIDs.
pub mod oid {
    // Boolean
    pub const BOOL: u32 = 16;

    // Bytes
    pub const BYTEA: u32 = 17;

    // Characters
    pub const CHAR: u32 = 18;
    pub const NAME: u32 = 19;

    // Integers
    pub const INT8: u32 = 20; // bigint
    pub const INT2: u32 = 21; // smallint
    pub const INT4: u32 = 23; // integer

    // Text
    pub const TEXT: u32 = 25;
    pub const VARCHAR: u32 = 1043;

    // OID
    pub const OID: u32 = 26;

    // Float
    pub const FLOAT4: u32 = 700;
    pub const FLOAT8: u32 = 701;

    // Date/Time
    pub const DATE: u32 = 1082;
    pub const TIME: u32 = 1083;
    pub const TIMESTAMP: u32 = 1114;
    pub const TIMESTAMPTZ: u32 = 1184;
    pub const INTERVAL: u32 = 1186;

    // UUID
    pub const UUID: u32 = 2950;

    // Arrays
    pub const BOOL_ARRAY: u32 = 1000;
    pub const BYTEA_ARRAY: u32 = 1001;
    pub const INT2_ARRAY: u32 = 1005;
    pub const INT4_ARRAY: u32 = 1007;
    pub const INT8_ARRAY: u32 = 1016;
    pub const TEXT_ARRAY: u32 = 1009;
    pub const VARCHAR_ARRAY: u32 = 1015;
    pub const FLOAT4_ARRAY: u32 = 1021;
    pub const FLOAT8_ARRAY: u32 = 1022;
    pub const DATE_ARRAY: u32 = 1182;
    pub const TIMESTAMP_ARRAY: u32 = 1115;
    pub const UUID_ARRAY: u32 = 2951;
}

/// Map an OID to a human-readable type name.
pub fn oid_to_name(oid_val: u32) -> &'static str {
    match oid_val {
        oid::BOOL => "bool",
        oid::BYTEA => "bytea",
        oid::CHAR => "char",
        oid::NAME => "name",
        oid::INT8 => "int8",
        oid::INT2 => "int2",
        oid::INT4 => "int4",
        oid::TEXT => "text",
        oid::VARCHAR => "varchar",
        oid::OID => "oid",
        oid::FLOAT4 => "float4",
        oid::FLOAT8 => "float8",
        oid::DATE => "date",
        oid::TIME => "time",
        oid::TIMESTAMP => "timestamp",
        oid::TIMESTAMPTZ => "timestamptz",
        oid::INTERVAL => "interval",
        oid::UUID => "uuid",
        oid::BOOL_ARRAY => "bool[]",
        oid::BYTEA_ARRAY => "bytea[]",
        oid::INT2_ARRAY => "int2[]",
        oid::INT4_ARRAY => "int4[]",
        oid::INT8_ARRAY => "int8[]",
        oid::TEXT_ARRAY => "text[]",
        oid::VARCHAR_ARRAY => "varchar[]",
        oid::FLOAT4_ARRAY => "float4[]",
        oid::FLOAT8_ARRAY => "float8[]",
        oid::DATE_ARRAY => "date[]",
        oid::TIMESTAMP_ARRAY => "timestamp[]",
        oid::UUID_ARRAY => "uuid[]",
        _ => "unknown",
    }
}

/// Check if an OID represents a built-in array type.
pub fn is_array_oid(oid_val: u32) -> bool {
    matches!(
        oid_val,
        oid::BOOL_ARRAY
            | oid::BYTEA_ARRAY
            | oid::INT2_ARRAY
            | oid::INT4_ARRAY
            | oid::INT8_ARRAY
            | oid::TEXT_ARRAY
            | oid::VARCHAR_ARRAY
            | oid::FLOAT4_ARRAY
            | oid::FLOAT8_ARRAY
            | oid::DATE_ARRAY
            | oid::TIMESTAMP_ARRAY
            | oid::UUID_ARRAY
    )
}

fn scalar(
    oid_val: u32,
    name: &str,
    send: &str,
    recv: &str,
    len: i32,
    out: &str,
    input: &str,
) -> TypeInfo {
    TypeInfo::new(oid_val)
        .name(name)
        .typesend(send)
        .typereceive(recv)
        .typelen(len)
        .output(out)
        .input(input)
}

fn array(oid_val: u32, name: &str, elem: TypeInfo) -> TypeInfo {
    let elem_oid = elem.oid;
    TypeInfo::new(oid_val)
        .name(name)
        .typesend("array_send")
        .typereceive("array_recv")
        .typelen(-1)
        .output("array_out")
        .input("array_in")
        .elem_oid(elem_oid)
        .elem_type(elem)
}

/// A fully populated descriptor for a built-in type, or `None` when the OID
/// is not one the codec knows statically. Array descriptors come with their
/// element descriptor attached.
pub fn builtin(oid_val: u32) -> Option<TypeInfo> {
    let info = match oid_val {
        oid::BOOL => scalar(oid_val, "bool", "boolsend", "boolrecv", 1, "boolout", "boolin"),
        oid::BYTEA => scalar(oid_val, "bytea", "byteasend", "bytearecv", -1, "byteaout", "byteain"),
        oid::CHAR => scalar(oid_val, "char", "charsend", "charrecv", 1, "charout", "charin"),
        oid::NAME => scalar(oid_val, "name", "namesend", "namerecv", 64, "nameout", "namein"),
        oid::INT8 => scalar(oid_val, "int8", "int8send", "int8recv", 8, "int8out", "int8in"),
        oid::INT2 => scalar(oid_val, "int2", "int2send", "int2recv", 2, "int2out", "int2in"),
        oid::INT4 => scalar(oid_val, "int4", "int4send", "int4recv", 4, "int4out", "int4in"),
        oid::TEXT => scalar(oid_val, "text", "textsend", "textrecv", -1, "textout", "textin"),
        oid::VARCHAR => scalar(
            oid_val, "varchar", "varcharsend", "varcharrecv", -1, "varcharout", "varcharin",
        ),
        oid::OID => scalar(oid_val, "oid", "oidsend", "oidrecv", 4, "oidout", "oidin"),
        oid::FLOAT4 => scalar(
            oid_val, "float4", "float4send", "float4recv", 4, "float4out", "float4in",
        ),
        oid::FLOAT8 => scalar(
            oid_val, "float8", "float8send", "float8recv", 8, "float8out", "float8in",
        ),
        oid::DATE => scalar(oid_val, "date", "date_send", "date_recv", 4, "date_out", "date_in"),
        oid::TIME => scalar(oid_val, "time", "time_send", "time_recv", 8, "time_out", "time_in"),
        oid::TIMESTAMP => scalar(
            oid_val, "timestamp", "timestamp_send", "timestamp_recv", 8, "timestamp_out", "timestamp_in",
        ),
        oid::TIMESTAMPTZ => scalar(
            oid_val, "timestamptz", "timestamptz_send", "timestamptz_recv", 8, "timestamptz_out", "timestamptz_in",
        ),
        oid::INTERVAL => scalar(
            oid_val, "interval", "interval_send", "interval_recv", 16, "interval_out", "interval_in",
        ),
        oid::UUID => scalar(oid_val, "uuid", "uuid_send", "uuid_recv", 16, "uuid_out", "uuid_in"),
        oid::BOOL_ARRAY => array(oid_val, "_bool", builtin(oid::BOOL)?),
        oid::BYTEA_ARRAY => array(oid_val, "_bytea", builtin(oid::BYTEA)?),
        oid::INT2_ARRAY => array(oid_val, "_int2", builtin(oid::INT2)?),
        oid::INT4_ARRAY => array(oid_val, "_int4", builtin(oid::INT4)?),
        oid::INT8_ARRAY => array(oid_val, "_int8", builtin(oid::INT8)?),
        oid::TEXT_ARRAY => array(oid_val, "_text", builtin(oid::TEXT)?),
        oid::VARCHAR_ARRAY => array(oid_val, "_varchar", builtin(oid::VARCHAR)?),
        oid::FLOAT4_ARRAY => array(oid_val, "_float4", builtin(oid::FLOAT4)?),
        oid::FLOAT8_ARRAY => array(oid_val, "_float8", builtin(oid::FLOAT8)?),
        oid::DATE_ARRAY => array(oid_val, "_date", builtin(oid::DATE)?),
        oid::TIMESTAMP_ARRAY => array(oid_val, "_timestamp", builtin(oid::TIMESTAMP)?),
        oid::UUID_ARRAY => array(oid_val, "_uuid", builtin(oid::UUID)?),
        _ => return None,
    };
    Some(info)
}
