//! Invocation of named remote procedures.
//!
//! [`ProcedureCaller`] is the seam between the gateway and the database.
//! [`PgProcedures`] implements it on top of the [`ConnectionManager`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use shopfloor_core::params::{ParamValue, ProcedureCall};
use shopfloor_core::types::{RecordSet, Row};
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, Postgres};

use crate::connection::ConnectionManager;
use crate::decode::row_to_json;
use crate::error::DbError;
use crate::{health_check, sql};

/// Executes remote procedures and returns their result sets.
#[async_trait]
pub trait ProcedureCaller: Send + Sync {
    /// Run a procedure and return its primary result set.
    async fn call(&self, call: &ProcedureCall) -> Result<RecordSet, DbError>;

    /// Run a procedure that yields several result sets, in order.
    async fn call_multi(&self, call: &ProcedureCall) -> Result<Vec<RecordSet>, DbError>;

    /// Check that the database is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}

/// Postgres-backed procedure caller.
pub struct PgProcedures {
    connections: Arc<ConnectionManager>,
}

impl PgProcedures {
    pub fn new(connections: Arc<ConnectionManager>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl ProcedureCaller for PgProcedures {
    async fn call(&self, call: &ProcedureCall) -> Result<RecordSet, DbError> {
        let pool = self.connections.acquire().await?;
        let query = sql::set_query(call);
        let arguments = build_arguments(call)?;

        let values = sqlx::query_scalar_with::<Postgres, Value, _>(&query, arguments)
            .fetch_all(&pool)
            .await
            .map_err(|e| call_failed(call, e))?;

        tracing::debug!(
            procedure = call.procedure,
            rows = values.len(),
            "Procedure executed"
        );
        Ok(values.into_iter().map(into_row).collect())
    }

    async fn call_multi(&self, call: &ProcedureCall) -> Result<Vec<RecordSet>, DbError> {
        let pool = self.connections.acquire().await?;
        let query = sql::cursor_query(call);
        let arguments = build_arguments(call)?;

        // Cursors only live until the end of the transaction.
        let mut tx = pool.begin().await.map_err(|e| call_failed(call, e))?;

        let cursors = sqlx::query_scalar_with::<Postgres, String, _>(&query, arguments)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| call_failed(call, e))?;

        let mut sets = Vec::with_capacity(cursors.len());
        for cursor in &cursors {
            let fetch = sql::fetch_cursor(cursor);
            let rows = sqlx::query(&fetch)
                .fetch_all(&mut *tx)
                .await
                .map_err(|e| call_failed(call, e))?;
            sets.push(rows.iter().map(row_to_json).collect());
        }

        tx.commit().await.map_err(|e| call_failed(call, e))?;

        tracing::debug!(
            procedure = call.procedure,
            result_sets = sets.len(),
            "Procedure executed"
        );
        Ok(sets)
    }

    async fn ping(&self) -> Result<(), DbError> {
        let pool = self.connections.acquire().await?;
        health_check(&pool).await.map_err(DbError::Connection)
    }
}

/// Bind the call's arguments in declaration order.
///
/// Integers that fit in 32 bits are sent as `int4` so they resolve against
/// both `integer` and `bigint` procedure parameters.
pub fn build_arguments(call: &ProcedureCall) -> Result<PgArguments, DbError> {
    let mut arguments = PgArguments::default();
    for (name, value) in &call.args {
        let added = match value {
            ParamValue::Null => arguments.add(None::<String>),
            ParamValue::Bool(b) => arguments.add(*b),
            ParamValue::Int(i) => match i32::try_from(*i) {
                Ok(small) => arguments.add(small),
                Err(_) => arguments.add(*i),
            },
            ParamValue::Float(f) => arguments.add(*f),
            ParamValue::Text(s) => arguments.add(s.clone()),
        };
        added.map_err(|e| DbError::Procedure {
            procedure: call.procedure.to_string(),
            message: format!("cannot bind parameter {name}: {e}"),
        })?;
    }
    Ok(arguments)
}

fn call_failed(call: &ProcedureCall, err: sqlx::Error) -> DbError {
    let err = DbError::from_call(call.procedure, err);
    tracing::error!(procedure = call.procedure, error = %err, "Procedure call failed");
    err
}

/// Scalar-returning procedures yield bare values; wrap them so every row
/// is an object.
fn into_row(value: Value) -> Row {
    match value {
        Value::Object(row) => row,
        other => {
            let mut row = Row::new();
            row.insert("value".to_string(), other);
            row
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shopfloor_core::procedures::COMPLETE_PRODUCTION;
    use sqlx::Arguments;

    use super::*;

    #[test]
    fn scalar_results_are_wrapped() {
        let row = into_row(json!(42));
        assert_eq!(row.get("value"), Some(&json!(42)));

        let row = into_row(json!({ "id": 1 }));
        assert_eq!(row.get("id"), Some(&json!(1)));
    }

    #[test]
    fn every_argument_is_bound() {
        let call = COMPLETE_PRODUCTION
            .bind(vec![ParamValue::Int(7), ParamValue::Float(12.5)])
            .unwrap();

        let arguments = build_arguments(&call).unwrap();

        assert_eq!(arguments.len(), 2);
    }
}
