mod desempenho;
mod disciplinas;
mod planos;
mod sessoes;
mod status_checks;

pub use sessoes::InicioSessao;
