pub mod controller;

pub use controller::{ParadaSessao, StatusSessao, TimerController};
