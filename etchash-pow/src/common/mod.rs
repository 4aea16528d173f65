/// Shared value types and host utilities

pub mod endian;
pub mod hash_types;
pub mod paths;
