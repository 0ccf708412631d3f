//! Domain model that mirrors the `Courses` table and gets passed between the
//! generator, the persistence layer, and the search loop. The type stays a
//! light-weight data holder so the other layers can focus on derivation and
//! presentation logic.

/// One row of the synthetic course catalog. Instances are built in-memory by
/// the generator, handed to the store for persistence, and never mutated
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    /// Sequential identifier assigned by enumeration order at generation
    /// time. Unique and contiguous from 0 within one generation run, but not
    /// stable if the generation inputs change.
    pub course_id: i64,
    /// Department code, one of a fixed enumerated set.
    pub subject: String,
    /// Numeric course level encoded as text ("100" through "500").
    pub catalog_nbr: String,
    /// Display title derived from subject and level by the tiering rule in
    /// `catalog::derive_title`.
    pub title: String,
    /// Credit count derived from the level by `catalog::derive_credits`;
    /// always 3 or 4.
    pub num_credits: i64,
}
