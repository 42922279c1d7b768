use anyhow::Result;
use rusqlite::{params, Row};

use crate::db::{helpers::parse_datetime, models::StatusCheck, Database};

fn row_to_status_check(row: &Row) -> Result<StatusCheck> {
    let timestamp: String = row.get("timestamp")?;

    Ok(StatusCheck {
        id: row.get("id")?,
        client_name: row.get("client_name")?,
        timestamp: parse_datetime(&timestamp, "timestamp")?,
    })
}

impl Database {
    pub async fn insert_status_check(&self, check: &StatusCheck) -> Result<()> {
        let record = check.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO status_checks (id, client_name, timestamp)
                 VALUES (?1, ?2, ?3)",
                params![record.id, record.client_name, record.timestamp.to_rfc3339()],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, client_name, timestamp
                 FROM status_checks",
            )?;

            let mut rows = stmt.query([])?;
            let mut checks = Vec::new();
            while let Some(row) = rows.next()? {
                checks.push(row_to_status_check(row)?);
            }

            Ok(checks)
        })
        .await
    }
}
