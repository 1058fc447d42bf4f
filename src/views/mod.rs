pub mod components;
pub mod highscores;
pub mod layout;
pub mod quiz;
pub mod settings;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled};
