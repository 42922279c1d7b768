use anyhow::Result;
use rusqlite::{params, Row};

use crate::db::{
    helpers::parse_datetime,
    models::{Disciplina, DisciplinaUpdate},
    Database,
};

fn row_to_disciplina(row: &Row) -> Result<Disciplina> {
    let criado_em: String = row.get("criado_em")?;

    Ok(Disciplina {
        id: row.get("id")?,
        nome: row.get("nome")?,
        horario_inicio: row.get("horario_inicio")?,
        horario_fim: row.get("horario_fim")?,
        criado_em: parse_datetime(&criado_em, "criado_em")?,
    })
}

impl Database {
    pub async fn insert_disciplina(&self, disciplina: &Disciplina) -> Result<()> {
        let record = disciplina.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO disciplinas (id, nome, horario_inicio, horario_fim, criado_em)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.id,
                    record.nome,
                    record.horario_inicio,
                    record.horario_fim,
                    record.criado_em.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn list_disciplinas(&self) -> Result<Vec<Disciplina>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, nome, horario_inicio, horario_fim, criado_em
                 FROM disciplinas",
            )?;

            let mut rows = stmt.query([])?;
            let mut disciplinas = Vec::new();
            while let Some(row) = rows.next()? {
                disciplinas.push(row_to_disciplina(row)?);
            }

            Ok(disciplinas)
        })
        .await
    }

    pub async fn get_disciplina(&self, disciplina_id: &str) -> Result<Option<Disciplina>> {
        let disciplina_id = disciplina_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, nome, horario_inicio, horario_fim, criado_em
                 FROM disciplinas
                 WHERE id = ?1",
            )?;

            let mut rows = stmt.query(params![disciplina_id])?;
            let disciplina = match rows.next()? {
                Some(row) => Some(row_to_disciplina(row)?),
                None => None,
            };
            Ok(disciplina)
        })
        .await
    }

    /// Partial schedule update: fields left as `None` keep their stored
    /// value. Returns the updated record, or `None` when the discipline
    /// does not exist.
    pub async fn update_disciplina_horarios(
        &self,
        disciplina_id: &str,
        update: DisciplinaUpdate,
    ) -> Result<Option<Disciplina>> {
        let disciplina_id = disciplina_id.to_string();
        self.execute(move |conn| {
            let rows_affected = conn.execute(
                "UPDATE disciplinas
                 SET horario_inicio = COALESCE(?1, horario_inicio),
                     horario_fim = COALESCE(?2, horario_fim)
                 WHERE id = ?3",
                params![update.horario_inicio, update.horario_fim, disciplina_id],
            )?;

            if rows_affected == 0 {
                return Ok(None);
            }

            let mut stmt = conn.prepare(
                "SELECT id, nome, horario_inicio, horario_fim, criado_em
                 FROM disciplinas
                 WHERE id = ?1",
            )?;
            let mut rows = stmt.query(params![disciplina_id])?;
            let disciplina = match rows.next()? {
                Some(row) => Some(row_to_disciplina(row)?),
                None => None,
            };
            Ok(disciplina)
        })
        .await
    }
}
