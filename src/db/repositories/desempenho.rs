use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Row};

use crate::db::{
    helpers::{parse_date, parse_datetime, parse_json_column, to_json_column},
    models::DesempenhoSemanal,
    Database,
};

fn row_to_desempenho(row: &Row) -> Result<DesempenhoSemanal> {
    let semana_inicio: String = row.get("semana_inicio")?;
    let criado_em: String = row.get("criado_em")?;

    Ok(DesempenhoSemanal {
        id: row.get("id")?,
        semana_inicio: parse_date(&semana_inicio, "semana_inicio")?,
        segunda: parse_json_column(&row.get::<_, String>("segunda")?, "segunda")?,
        terca: parse_json_column(&row.get::<_, String>("terca")?, "terca")?,
        quarta: parse_json_column(&row.get::<_, String>("quarta")?, "quarta")?,
        quinta: parse_json_column(&row.get::<_, String>("quinta")?, "quinta")?,
        sexta: parse_json_column(&row.get::<_, String>("sexta")?, "sexta")?,
        sabado: parse_json_column(&row.get::<_, String>("sabado")?, "sabado")?,
        domingo: parse_json_column(&row.get::<_, String>("domingo")?, "domingo")?,
        criado_em: parse_datetime(&criado_em, "criado_em")?,
    })
}

/// Day lists flattened to their JSON column form.
struct DesempenhoColunas {
    id: String,
    semana_inicio: String,
    dias: [String; 7],
    criado_em: String,
}

fn to_colunas(desempenho: &DesempenhoSemanal) -> Result<DesempenhoColunas> {
    Ok(DesempenhoColunas {
        id: desempenho.id.clone(),
        semana_inicio: desempenho.semana_inicio.to_string(),
        dias: [
            to_json_column(&desempenho.segunda, "segunda")?,
            to_json_column(&desempenho.terca, "terca")?,
            to_json_column(&desempenho.quarta, "quarta")?,
            to_json_column(&desempenho.quinta, "quinta")?,
            to_json_column(&desempenho.sexta, "sexta")?,
            to_json_column(&desempenho.sabado, "sabado")?,
            to_json_column(&desempenho.domingo, "domingo")?,
        ],
        criado_em: desempenho.criado_em.to_rfc3339(),
    })
}

const SELECT_COLUMNS: &str = "id, semana_inicio, segunda, terca, quarta, quinta, sexta, \
                              sabado, domingo, criado_em";

impl Database {
    pub async fn list_desempenhos(&self) -> Result<Vec<DesempenhoSemanal>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SELECT_COLUMNS}
                 FROM desempenho_semanal
                 ORDER BY semana_inicio DESC"
            ))?;

            let mut rows = stmt.query([])?;
            let mut desempenhos = Vec::new();
            while let Some(row) = rows.next()? {
                desempenhos.push(row_to_desempenho(row)?);
            }

            Ok(desempenhos)
        })
        .await
    }

    /// Side-effecting read: returns the week's record, inserting an empty
    /// one first when the week has never been touched. Select and insert
    /// share one closure, so the lazy insert cannot race another caller.
    pub async fn get_or_create_desempenho(
        &self,
        semana_inicio: NaiveDate,
    ) -> Result<DesempenhoSemanal> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SELECT_COLUMNS}
                 FROM desempenho_semanal
                 WHERE semana_inicio = ?1"
            ))?;

            let mut rows = stmt.query(params![semana_inicio.to_string()])?;
            if let Some(row) = rows.next()? {
                return row_to_desempenho(row);
            }
            drop(rows);
            drop(stmt);

            let novo = DesempenhoSemanal::vazio(semana_inicio);
            let colunas = to_colunas(&novo)?;
            conn.execute(
                "INSERT INTO desempenho_semanal
                     (id, semana_inicio, segunda, terca, quarta, quinta, sexta,
                      sabado, domingo, criado_em)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    colunas.id,
                    colunas.semana_inicio,
                    colunas.dias[0],
                    colunas.dias[1],
                    colunas.dias[2],
                    colunas.dias[3],
                    colunas.dias[4],
                    colunas.dias[5],
                    colunas.dias[6],
                    colunas.criado_em,
                ],
            )?;
            Ok(novo)
        })
        .await
    }

    /// Whole-document replacement keyed by `semana_inicio`.
    pub async fn upsert_desempenho(&self, desempenho: DesempenhoSemanal) -> Result<()> {
        self.execute(move |conn| {
            let colunas = to_colunas(&desempenho)?;
            conn.execute(
                "INSERT INTO desempenho_semanal
                     (id, semana_inicio, segunda, terca, quarta, quinta, sexta,
                      sabado, domingo, criado_em)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                 ON CONFLICT (semana_inicio) DO UPDATE SET
                     id = excluded.id,
                     segunda = excluded.segunda,
                     terca = excluded.terca,
                     quarta = excluded.quarta,
                     quinta = excluded.quinta,
                     sexta = excluded.sexta,
                     sabado = excluded.sabado,
                     domingo = excluded.domingo,
                     criado_em = excluded.criado_em",
                params![
                    colunas.id,
                    colunas.semana_inicio,
                    colunas.dias[0],
                    colunas.dias[1],
                    colunas.dias[2],
                    colunas.dias[3],
                    colunas.dias[4],
                    colunas.dias[5],
                    colunas.dias[6],
                    colunas.criado_em,
                ],
            )?;
            Ok(())
        })
        .await
    }
}
