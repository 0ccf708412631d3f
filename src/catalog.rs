//! Synthetic catalog generation. Everything here is a pure function of the
//! fixed subject and level lists, so the same inputs always reproduce the
//! same ten records in the same order. The only side effect lives in
//! [`seed_catalog`], which hands the generated records to the store one at a
//! time.

use crate::db::{CourseStore, StoreError};
use crate::models::CourseRecord;

/// Department codes seeded into the catalog, in generation order.
pub const SUBJECTS: [&str; 2] = ["ENG", "SDEV"];

/// Course levels seeded for every subject: 100 up to but excluding 600,
/// stepped by 100.
const LEVEL_START: i64 = 100;
const LEVEL_STOP: i64 = 600;
const LEVEL_STEP: i64 = 100;

/// Institution name appended to every generated title.
const INSTITUTION: &str = "UMGC";

/// Build the dummy course title for a subject/level pair.
///
/// The tier checks run in ascending threshold order and each later check
/// overwrites the earlier one, so a level above both thresholds ends up with
/// the highest tier (last match wins). Reordering the checks would silently
/// change the result for levels in (200, 400], so the sequence below must
/// stay as-is.
pub fn derive_title(subject: &str, level: i64) -> String {
    let mut prefix = "Introduction to ";
    if level > 200 {
        prefix = "Intermediate ";
    }
    if level > 400 {
        prefix = "Advanced ";
    }

    format!("{prefix}{subject} at {INSTITUTION}")
}

/// Credit count for a course level: upper-level courses carry 4 credits,
/// everything at or below 300 carries 3.
pub fn derive_credits(level: i64) -> i64 {
    if level > 300 {
        4
    } else {
        3
    }
}

/// Produce the full catalog as the Cartesian product of subjects and levels,
/// outer loop over subjects, inner loop over levels. The `course_id` of each
/// record is its 0-based position in that product sequence.
pub fn generate_catalog() -> Vec<CourseRecord> {
    let levels: Vec<i64> = (LEVEL_START..LEVEL_STOP).step_by(LEVEL_STEP as usize).collect();

    let mut records = Vec::with_capacity(SUBJECTS.len() * levels.len());
    for subject in SUBJECTS {
        for &level in &levels {
            records.push(CourseRecord {
                course_id: records.len() as i64,
                subject: subject.to_string(),
                catalog_nbr: level.to_string(),
                title: derive_title(subject, level),
                num_credits: derive_credits(level),
            });
        }
    }

    records
}

/// Generate the catalog and submit every record to the store in product
/// order. Submission is one `put` per record with no batching or transaction;
/// the first failure aborts the sequence and propagates, leaving whatever was
/// already written in place.
pub fn seed_catalog(store: &impl CourseStore) -> Result<(), StoreError> {
    for record in generate_catalog() {
        store.put_course(&record)?;
    }
    Ok(())
}
