pub mod db;
pub mod error;
pub mod rest;
pub mod seed;
pub mod timer;

use db::Database;
use timer::TimerController;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub timer: TimerController,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        let timer = TimerController::new(db.clone());
        Self { db, timer }
    }
}
