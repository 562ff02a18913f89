//! Domain model for CSV validation.
//!
//! Field rules are immutable and defined once per column. Errors, results and
//! progress values are created fresh for every scan and never mutated after
//! they are emitted.

mod field;
mod reason;
mod report;
mod row;

pub use field::{FieldKind, FieldPredicate, FieldRule};
pub use reason::ValidationReason;
pub use report::{
    ChunkProgress, STRUCTURAL_FIELD, ValidationError, ValidationResult, ValidationTally,
};
pub use row::{DataRow, TokenizedDocument};
