//! Wordle Scores
//!
//! Records daily Wordle results and renders each guess as colored feedback,
//! using the game's duplicate-letter rules.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_scores::core::{DayDate, LetterResult, Score, evaluate};
//!
//! // Evaluate a guess
//! let feedback = evaluate("eerie", "sweet").unwrap();
//! assert_eq!(feedback[0], LetterResult::WrongPosition);
//!
//! // Record a result typed in by hand
//! let score = Score::from_entry("sweet", "corgi,pause,sleds,sweet", DayDate::new(2022, 3, 8)).unwrap();
//! assert_eq!(score.id, 262);
//! ```

// Core domain types
pub mod core;

// Merging and ordering result sets
pub mod scores;

// Remote score storage
pub mod backend;

// Backend settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
