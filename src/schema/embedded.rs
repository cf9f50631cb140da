//! Standard LDAP schemas embedded as JSON documents.
//!
//! The documents live under `schemas/` at the crate root and are compiled in,
//! so the default loader works without any schema files at runtime.

/// The system schema: syntax checkers, normalizers, comparators, syntaxes,
/// matching rules and the operational attributes every server needs.
pub fn system_schema() -> &'static str {
    include_str!("../../schemas/system.json")
}

/// The core schema (RFC 4519 user attributes and object classes).
pub fn core_schema() -> &'static str {
    include_str!("../../schemas/core.json")
}

/// The COSINE pilot schema (RFC 4524).
pub fn cosine_schema() -> &'static str {
    include_str!("../../schemas/cosine.json")
}

/// The inetOrgPerson schema (RFC 2798).
pub fn inetorgperson_schema() -> &'static str {
    include_str!("../../schemas/inetorgperson.json")
}

/// Collective attributes (RFC 3671).
pub fn collective_schema() -> &'static str {
    include_str!("../../schemas/collective.json")
}

/// The NIS schema (RFC 2307). Disabled by default.
pub fn nis_schema() -> &'static str {
    include_str!("../../schemas/nis.json")
}

/// Empty schema receiving objects added without an explicit schema.
pub fn other_schema() -> &'static str {
    include_str!("../../schemas/other.json")
}

/// Every embedded document.
pub fn documents() -> [&'static str; 7] {
    [
        system_schema(),
        core_schema(),
        cosine_schema(),
        inetorgperson_schema(),
        collective_schema(),
        nis_schema(),
        other_schema(),
    ]
}
