use anyhow::Result;
use rusqlite::{params, Row};

use crate::db::{
    helpers::{parse_datetime, parse_json_column, to_json_column},
    models::PlanoEstudos,
    Database,
};

fn row_to_plano(row: &Row) -> Result<PlanoEstudos> {
    let criado_em: String = row.get("criado_em")?;
    let disciplinas_ids: String = row.get("disciplinas_ids")?;

    Ok(PlanoEstudos {
        id: row.get("id")?,
        nome: row.get("nome")?,
        disciplinas_ids: parse_json_column(&disciplinas_ids, "disciplinas_ids")?,
        criado_em: parse_datetime(&criado_em, "criado_em")?,
    })
}

impl Database {
    pub async fn insert_plano(&self, plano: &PlanoEstudos) -> Result<()> {
        let record = plano.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO planos_estudos (id, nome, disciplinas_ids, criado_em)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    record.id,
                    record.nome,
                    to_json_column(&record.disciplinas_ids, "disciplinas_ids")?,
                    record.criado_em.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn list_planos(&self) -> Result<Vec<PlanoEstudos>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, nome, disciplinas_ids, criado_em
                 FROM planos_estudos",
            )?;

            let mut rows = stmt.query([])?;
            let mut planos = Vec::new();
            while let Some(row) = rows.next()? {
                planos.push(row_to_plano(row)?);
            }

            Ok(planos)
        })
        .await
    }

    pub async fn get_plano(&self, plano_id: &str) -> Result<Option<PlanoEstudos>> {
        let plano_id = plano_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, nome, disciplinas_ids, criado_em
                 FROM planos_estudos
                 WHERE id = ?1",
            )?;

            let mut rows = stmt.query(params![plano_id])?;
            let plano = match rows.next()? {
                Some(row) => Some(row_to_plano(row)?),
                None => None,
            };
            Ok(plano)
        })
        .await
    }
}
