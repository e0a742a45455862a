//! Embedded sample results
//!
//! Compiled into the binary so the client is usable offline and tests have a
//! fixed data set.

use crate::core::{DayDate, Score};

/// Raw sample rows: (id, (year, month, day), word, tries)
const SAMPLES: &[(i64, (i32, u32, u32), &str, &[&str])] = &[
    (
        261,
        (2022, 3, 9),
        "craze",
        &["grail", "track", "cramp", "crabs", "crazy", "craze"],
    ),
    (
        262,
        (2022, 3, 8),
        "sweet",
        &["corgi", "pause", "sleds", "sweet"],
    ),
    (
        263,
        (2022, 3, 9),
        "month",
        &["stair", "tuned", "monty", "month"],
    ),
    (264, (2022, 3, 10), "lapse", &["stair", "peony", "lapse"]),
];

/// The sample results, in declaration order
#[must_use]
pub fn sample_scores() -> Vec<Score> {
    SAMPLES
        .iter()
        .map(|&(id, (year, month, day), word, tries)| {
            Score::new(
                id,
                DayDate::new(year, month, day),
                word,
                tries.iter().map(|&t| t.to_string()).collect(),
            )
        })
        .collect()
}
