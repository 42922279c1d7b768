use anyhow::Result;
use log::info;
use rusqlite::params;

use crate::db::{models::Disciplina, Database};

/// The 19 disciplines of the Brazilian law-exam syllabus seeded on first
/// boot.
pub const DISCIPLINAS_BRASILEIRAS: [&str; 19] = [
    "Direito Constitucional",
    "Direito Civil",
    "Direito Penal",
    "Direito Processual Civil",
    "Direito Processual Penal",
    "Direito Administrativo",
    "Direito Tributário",
    "Direito Trabalhista",
    "Direito Processual Trabalhista",
    "Direito Empresarial",
    "Direito do Consumidor",
    "Direito Ambiental",
    "Direito Internacional",
    "Direito Previdenciário",
    "Direito Eleitoral",
    "Direito da Criança e Adolescente",
    "Direito de Família",
    "Direito das Sucessões",
    "Filosofia do Direito",
];

/// Seeds the discipline table on an empty store. The count check and the
/// inserts run in one closure, so restarts can never duplicate the seed
/// data.
pub async fn initialize_disciplinas(db: &Database) -> Result<()> {
    let inserted = db
        .execute(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM disciplinas", [], |row| row.get(0))?;
            if count > 0 {
                return Ok(0usize);
            }

            let mut stmt = conn.prepare(
                "INSERT INTO disciplinas (id, nome, horario_inicio, horario_fim, criado_em)
                 VALUES (?1, ?2, NULL, NULL, ?3)",
            )?;
            for nome in DISCIPLINAS_BRASILEIRAS {
                let disciplina = Disciplina::nova(nome);
                stmt.execute(params![
                    disciplina.id,
                    disciplina.nome,
                    disciplina.criado_em.to_rfc3339(),
                ])?;
            }

            Ok(DISCIPLINAS_BRASILEIRAS.len())
        })
        .await?;

    if inserted > 0 {
        info!("Initialized {inserted} disciplines");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn seed_e_idempotente() {
        let dir = TempDir::new().unwrap();
        let db = Database::new(dir.path().join("estudos.sqlite3")).unwrap();

        initialize_disciplinas(&db).await.unwrap();
        let disciplinas = db.list_disciplinas().await.unwrap();
        assert_eq!(disciplinas.len(), 19);
        assert!(disciplinas.iter().all(|d| d.horario_inicio.is_none()));

        // Second boot leaves the table untouched.
        initialize_disciplinas(&db).await.unwrap();
        assert_eq!(db.list_disciplinas().await.unwrap().len(), 19);

        // Non-empty but partial tables are also left alone.
        let db2_dir = TempDir::new().unwrap();
        let db2 = Database::new(db2_dir.path().join("estudos.sqlite3")).unwrap();
        db2.insert_disciplina(&crate::db::models::Disciplina::nova("Direito Civil"))
            .await
            .unwrap();
        initialize_disciplinas(&db2).await.unwrap();
        assert_eq!(db2.list_disciplinas().await.unwrap().len(), 1);
    }
}
