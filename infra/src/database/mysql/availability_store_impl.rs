//! MySQL implementation of the AvailabilityStore contract.
//!
//! Persists availability slots in the `disponibilidad` table and eagerly
//! joins the associated `interconsulta` row on every read. Filter fields are
//! forwarded as column equality conditions; a field the schema does not know
//! surfaces as a database error, which is the backend-defined behavior the
//! repository documents.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool, Row};
use uuid::Uuid;

use agenda_core::domain::entities::{Availability, ConsultationRequest};
use agenda_core::errors::{DomainResult, RepositoryError};
use agenda_core::repositories::availability::AvailabilityStore;
use agenda_shared::types::{Filters, Page};

/// Columns selected on every read, relation included
const SELECT_COLUMNS: &str = "d.id, d.uuid, d.dia, d.hora_inicio, d.hora_fin, \
     i.id AS interconsulta_id, i.folio AS interconsulta_folio";

const FROM_JOINED: &str =
    "FROM disponibilidad d INNER JOIN interconsulta i ON i.id = d.nid_interconsulta";

/// MySQL implementation of AvailabilityStore
pub struct MySqlAvailabilityStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAvailabilityStore {
    /// Create a new MySQL availability store
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a joined database row to an Availability entity
    fn row_to_availability(row: &MySqlRow) -> Result<Availability, RepositoryError> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| RepositoryError::database(format!("Failed to get id: {}", e)))?;

        let uuid: String = row
            .try_get("uuid")
            .map_err(|e| RepositoryError::database(format!("Failed to get uuid: {}", e)))?;

        Ok(Availability {
            id: Some(id),
            uuid: Uuid::parse_str(&uuid)
                .map_err(|e| RepositoryError::database(format!("Invalid stored UUID: {}", e)))?,
            day: row
                .try_get::<NaiveDate, _>("dia")
                .map_err(|e| RepositoryError::database(format!("Failed to get dia: {}", e)))?,
            start_time: row
                .try_get::<NaiveTime, _>("hora_inicio")
                .map_err(|e| {
                    RepositoryError::database(format!("Failed to get hora_inicio: {}", e))
                })?,
            end_time: row
                .try_get::<NaiveTime, _>("hora_fin")
                .map_err(|e| RepositoryError::database(format!("Failed to get hora_fin: {}", e)))?,
            consultation: ConsultationRequest {
                id: row.try_get("interconsulta_id").map_err(|e| {
                    RepositoryError::database(format!("Failed to get interconsulta id: {}", e))
                })?,
                folio: row.try_get("interconsulta_folio").map_err(|e| {
                    RepositoryError::database(format!("Failed to get interconsulta folio: {}", e))
                })?,
            },
        })
    }

    /// Map a filter field to a qualified column reference
    ///
    /// Field names go into the statement text, so only plain lowercase
    /// identifiers are accepted. Whether the column exists is left to the
    /// database.
    fn column_for(field: &str) -> DomainResult<String> {
        let valid = !field.is_empty()
            && field
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(format!("d.{}", field))
        } else {
            Err(RepositoryError::database(format!(
                "invalid filter field name: {:?}",
                field
            )))
        }
    }

    /// Build the WHERE clause for a filter map
    fn where_clause(filters: &Filters) -> DomainResult<String> {
        if filters.is_empty() {
            return Ok(String::new());
        }
        let conditions: Vec<String> = filters
            .iter()
            .map(|(field, _)| Ok(format!("{} = ?", Self::column_for(field)?)))
            .collect::<DomainResult<_>>()?;
        Ok(format!(" WHERE {}", conditions.join(" AND ")))
    }

    /// Bind a filter value according to its JSON type
    fn bind_filter_value<'q>(
        query: Query<'q, MySql, MySqlArguments>,
        value: &'q Value,
    ) -> DomainResult<Query<'q, MySql, MySqlArguments>> {
        match value {
            Value::String(s) => Ok(query.bind(s.as_str())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(query.bind(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(query.bind(f))
                } else {
                    Err(RepositoryError::database(format!(
                        "unsupported numeric filter value: {}",
                        n
                    )))
                }
            }
            Value::Bool(b) => Ok(query.bind(*b)),
            other => Err(RepositoryError::database(format!(
                "unsupported filter value: {}",
                other
            ))),
        }
    }

    /// Canonical read-back of a row after a write, relation included
    async fn fetch_by_id(&self, id: i64) -> DomainResult<Availability> {
        let sql = format!(
            "SELECT {} {} WHERE d.id = ?",
            SELECT_COLUMNS, FROM_JOINED
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::database(format!("Database query failed: {}", e)))?;

        match row {
            Some(row) => Self::row_to_availability(&row),
            None => Err(RepositoryError::NotFound {
                resource: "availability",
            }),
        }
    }
}

#[async_trait]
impl AvailabilityStore for MySqlAvailabilityStore {
    async fn save(&self, availability: Availability) -> DomainResult<Availability> {
        match availability.id {
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO disponibilidad (uuid, dia, hora_inicio, hora_fin, nid_interconsulta)
                    VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .bind(availability.uuid.to_string())
                .bind(availability.day)
                .bind(availability.start_time)
                .bind(availability.end_time)
                .bind(availability.consultation.id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    RepositoryError::database(format!("Failed to create availability: {}", e))
                })?;

                self.fetch_by_id(result.last_insert_id() as i64).await
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE disponibilidad SET
                        uuid = ?,
                        dia = ?,
                        hora_inicio = ?,
                        hora_fin = ?,
                        nid_interconsulta = ?
                    WHERE id = ?
                    "#,
                )
                .bind(availability.uuid.to_string())
                .bind(availability.day)
                .bind(availability.start_time)
                .bind(availability.end_time)
                .bind(availability.consultation.id)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    RepositoryError::database(format!("Failed to update availability: {}", e))
                })?;

                if result.rows_affected() == 0 {
                    return Err(RepositoryError::NotFound {
                        resource: "availability",
                    });
                }

                self.fetch_by_id(id).await
            }
        }
    }

    async fn find(&self, filters: &Filters, page: Page) -> DomainResult<Vec<Availability>> {
        let mut sql = format!(
            "SELECT {} {}{} ORDER BY d.id",
            SELECT_COLUMNS,
            FROM_JOINED,
            Self::where_clause(filters)?
        );
        if !page.is_unrestricted() {
            sql.push_str(" LIMIT ? OFFSET ?");
        }

        let mut query = sqlx::query(&sql);
        for (_, value) in filters.iter() {
            query = Self::bind_filter_value(query, value)?;
        }
        if !page.is_unrestricted() {
            query = query
                .bind(page.limit_i64().unwrap_or(i64::MAX))
                .bind(page.offset_i64());
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_availability).collect()
    }

    async fn count(&self, filters: &Filters) -> DomainResult<u64> {
        let sql = format!(
            "SELECT COUNT(*) AS total {}{}",
            FROM_JOINED,
            Self::where_clause(filters)?
        );

        let mut query = sqlx::query(&sql);
        for (_, value) in filters.iter() {
            query = Self::bind_filter_value(query, value)?;
        }

        let row = query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to count: {}", e)))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| RepositoryError::database(format!("Failed to get count: {}", e)))?;

        Ok(total as u64)
    }
}
