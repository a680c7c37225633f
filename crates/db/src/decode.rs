//! Generic row → JSON decoding for result sets whose shape is not known
//! in advance (cursor results).

use serde_json::Value;
use shopfloor_core::types::Row;
use sqlx::postgres::PgRow;
use sqlx::{Column, Row as _, TypeInfo, ValueRef};

/// Decode every column of `row` into a JSON object keyed by column name.
///
/// Columns that fail to decode become `null`.
pub fn row_to_json(row: &PgRow) -> Row {
    let mut out = Row::new();
    for (index, column) in row.columns().iter().enumerate() {
        let type_name = column.type_info().name();
        let value = decode_column(row, index, type_name).unwrap_or_else(|e| {
            tracing::warn!(
                column = column.name(),
                type_name,
                error = %e,
                "Could not decode column, returning null"
            );
            Value::Null
        });
        out.insert(column.name().to_string(), value);
    }
    out
}

fn decode_column(row: &PgRow, index: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    let value = match type_name {
        "BOOL" => row.try_get::<Option<bool>, _>(index)?.map(Value::Bool),
        "INT2" => row.try_get::<Option<i16>, _>(index)?.map(Value::from),
        "INT4" => row.try_get::<Option<i32>, _>(index)?.map(Value::from),
        "INT8" => row.try_get::<Option<i64>, _>(index)?.map(Value::from),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)?
            .map(|v| Value::from(f64::from(v))),
        "FLOAT8" => row.try_get::<Option<f64>, _>(index)?.map(Value::from),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
            row.try_get::<Option<String>, _>(index)?.map(Value::String)
        }
        "JSON" | "JSONB" => row.try_get::<Option<Value>, _>(index)?,
        "UUID" => row
            .try_get::<Option<uuid::Uuid>, _>(index)?
            .map(|v| Value::String(v.to_string())),
        "DATE" => row
            .try_get::<Option<chrono::NaiveDate>, _>(index)?
            .map(|v| Value::String(v.to_string())),
        "TIMESTAMP" => row
            .try_get::<Option<chrono::NaiveDateTime>, _>(index)?
            .map(|v| Value::String(v.format("%Y-%m-%d %H:%M:%S").to_string())),
        "TIMESTAMPTZ" => row
            .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(index)?
            .map(|v| Value::String(v.to_rfc3339())),
        _ => return raw_text(row, index),
    };
    Ok(value.unwrap_or(Value::Null))
}

/// Fall back to the text representation the server sent. Cursor results
/// are fetched over the simple query protocol, so values arrive as text.
fn raw_text(row: &PgRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    raw.as_str()
        .map(|s| Value::String(s.to_string()))
        .map_err(|source| sqlx::Error::ColumnDecode {
            index: index.to_string(),
            source,
        })
}
