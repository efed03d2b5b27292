pub mod chart;
pub mod hangman;
