//! SQL text for invoking remote procedures.
//!
//! Procedures are Postgres set-returning functions called with named
//! notation (`"Param" => $n`). Identifiers are always double-quoted so
//! mixed-case procedure and parameter names survive case folding.

use shopfloor_core::params::ProcedureCall;

/// Quote an identifier, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `"P1" => $1, "P2" => $2, ...` for the call's arguments.
pub fn named_arguments(call: &ProcedureCall) -> String {
    call.args
        .iter()
        .enumerate()
        .map(|(index, (name, _))| format!("{} => ${}", quote_ident(name), index + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Query returning every row of a single-set procedure as one JSONB value.
pub fn set_query(call: &ProcedureCall) -> String {
    format!(
        "SELECT to_jsonb(r) FROM {}({}) AS r",
        quote_ident(call.procedure),
        named_arguments(call)
    )
}

/// Query returning the cursor names of a multi-set procedure, which
/// returns `SETOF refcursor`.
pub fn cursor_query(call: &ProcedureCall) -> String {
    format!(
        "SELECT c::text FROM {}({}) AS c",
        quote_ident(call.procedure),
        named_arguments(call)
    )
}

/// Statement draining an open cursor.
pub fn fetch_cursor(cursor: &str) -> String {
    format!("FETCH ALL FROM {}", quote_ident(cursor))
}
