use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use crate::db::{
    helpers::{parse_datetime, parse_optional_datetime},
    models::{ResumoSemanalItem, SessaoEstudo},
    Database,
};

/// Outcome of an atomic start attempt.
#[derive(Debug)]
pub enum InicioSessao {
    Criada(SessaoEstudo),
    JaAtiva,
    DisciplinaInexistente,
}

fn row_to_sessao(row: &Row) -> Result<SessaoEstudo> {
    let inicio: String = row.get("inicio")?;
    let fim: Option<String> = row.get("fim")?;
    let criado_em: String = row.get("criado_em")?;

    Ok(SessaoEstudo {
        id: row.get("id")?,
        disciplina_id: row.get("disciplina_id")?,
        inicio: parse_datetime(&inicio, "inicio")?,
        fim: parse_optional_datetime(fim, "fim")?,
        duracao_segundos: row.get("duracao_segundos")?,
        ativa: row.get("ativa")?,
        criado_em: parse_datetime(&criado_em, "criado_em")?,
    })
}

const SELECT_COLUMNS: &str =
    "id, disciplina_id, inicio, fim, duracao_segundos, ativa, criado_em";

impl Database {
    /// Starts a session for a discipline. The existence check, the
    /// no-active-session check and the insert all run in one closure on the
    /// serialized connection, so two concurrent starts for the same
    /// discipline cannot both succeed; the partial unique index on
    /// `(disciplina_id) WHERE ativa = 1` backstops the invariant.
    pub async fn iniciar_sessao(
        &self,
        disciplina_id: &str,
        inicio: DateTime<Utc>,
    ) -> Result<InicioSessao> {
        let disciplina_id = disciplina_id.to_string();
        self.execute(move |conn| {
            let disciplina_existe: bool = conn.query_row(
                "SELECT EXISTS (SELECT 1 FROM disciplinas WHERE id = ?1)",
                params![disciplina_id],
                |row| row.get(0),
            )?;
            if !disciplina_existe {
                return Ok(InicioSessao::DisciplinaInexistente);
            }

            let ja_ativa: bool = conn.query_row(
                "SELECT EXISTS (SELECT 1 FROM sessoes_estudo
                  WHERE disciplina_id = ?1 AND ativa = 1)",
                params![disciplina_id],
                |row| row.get(0),
            )?;
            if ja_ativa {
                return Ok(InicioSessao::JaAtiva);
            }

            let sessao = SessaoEstudo::iniciar(disciplina_id, inicio);
            conn.execute(
                "INSERT INTO sessoes_estudo
                     (id, disciplina_id, inicio, fim, duracao_segundos, ativa, criado_em)
                 VALUES (?1, ?2, ?3, NULL, NULL, 1, ?4)",
                params![
                    sessao.id,
                    sessao.disciplina_id,
                    sessao.inicio.to_rfc3339(),
                    sessao.criado_em.to_rfc3339(),
                ],
            )?;

            Ok(InicioSessao::Criada(sessao))
        })
        .await
    }

    /// Stops the active session, recording `fim` and the whole-second
    /// duration. Returns `None` when no session is active for the
    /// discipline.
    pub async fn parar_sessao(
        &self,
        disciplina_id: &str,
        fim: DateTime<Utc>,
    ) -> Result<Option<SessaoEstudo>> {
        let disciplina_id = disciplina_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SELECT_COLUMNS}
                 FROM sessoes_estudo
                 WHERE disciplina_id = ?1 AND ativa = 1"
            ))?;

            let mut rows = stmt.query(params![disciplina_id])?;
            let mut sessao = match rows.next()? {
                Some(row) => row_to_sessao(row)?,
                None => return Ok(None),
            };
            drop(rows);
            drop(stmt);

            let duracao = (fim - sessao.inicio).num_seconds();
            conn.execute(
                "UPDATE sessoes_estudo
                 SET fim = ?1,
                     duracao_segundos = ?2,
                     ativa = 0
                 WHERE id = ?3",
                params![fim.to_rfc3339(), duracao, sessao.id],
            )?;

            sessao.fim = Some(fim);
            sessao.duracao_segundos = Some(duracao);
            sessao.ativa = false;
            Ok(Some(sessao))
        })
        .await
    }

    pub async fn get_sessao_ativa(&self, disciplina_id: &str) -> Result<Option<SessaoEstudo>> {
        let disciplina_id = disciplina_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SELECT_COLUMNS}
                 FROM sessoes_estudo
                 WHERE disciplina_id = ?1 AND ativa = 1"
            ))?;

            let mut rows = stmt.query(params![disciplina_id])?;
            let sessao = match rows.next()? {
                Some(row) => Some(row_to_sessao(row)?),
                None => None,
            };
            Ok(sessao)
        })
        .await
    }

    pub async fn list_sessoes_por_disciplina(
        &self,
        disciplina_id: &str,
    ) -> Result<Vec<SessaoEstudo>> {
        let disciplina_id = disciplina_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SELECT_COLUMNS}
                 FROM sessoes_estudo
                 WHERE disciplina_id = ?1
                 ORDER BY inicio DESC"
            ))?;

            let mut rows = stmt.query(params![disciplina_id])?;
            let mut sessoes = Vec::new();
            while let Some(row) = rows.next()? {
                sessoes.push(row_to_sessao(row)?);
            }

            Ok(sessoes)
        })
        .await
    }

    /// Per-discipline duration totals over completed sessions started in
    /// `[janela_inicio, janela_fim)`. The inner join drops sessions whose
    /// discipline no longer resolves. RFC 3339 UTC strings compare
    /// lexicographically in chronological order, so the range predicate is
    /// sound on the text column.
    pub async fn resumo_semanal(
        &self,
        janela_inicio: DateTime<Utc>,
        janela_fim: DateTime<Utc>,
    ) -> Result<Vec<ResumoSemanalItem>> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT s.disciplina_id,
                        d.nome,
                        SUM(s.duracao_segundos) AS total_segundos
                 FROM sessoes_estudo s
                 JOIN disciplinas d ON d.id = s.disciplina_id
                 WHERE s.ativa = 0
                   AND s.duracao_segundos IS NOT NULL
                   AND s.inicio >= ?1
                   AND s.inicio < ?2
                 GROUP BY s.disciplina_id, d.nome",
            )?;

            let mut rows = stmt.query(params![
                janela_inicio.to_rfc3339(),
                janela_fim.to_rfc3339()
            ])?;

            let mut resumo = Vec::new();
            while let Some(row) = rows.next()? {
                let total_segundos: i64 = row.get("total_segundos")?;
                resumo.push(ResumoSemanalItem {
                    disciplina_id: row.get("disciplina_id")?,
                    nome_disciplina: row.get("nome")?,
                    total_segundos,
                    total_horas: (total_segundos as f64 / 3600.0 * 100.0).round() / 100.0,
                    total_minutos: total_segundos / 60,
                });
            }

            Ok(resumo)
        })
        .await
    }
}
