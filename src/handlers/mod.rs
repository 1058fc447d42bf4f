pub mod highscores;
pub mod quiz;
pub mod settings;
