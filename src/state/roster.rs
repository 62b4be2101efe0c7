use thiserror::Error;

use super::data::{Extremum, StudentRecord, Summary};

/// Reasons a form submission is turned away.
///
/// The messages are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both name and grade.")]
    EmptyField,
    #[error("Grade must be a number.")]
    NotANumber,
}

/// The Roster holds every student recorded in this session.
///
/// Records are kept in insertion order and can only be appended.
/// Nothing here knows about widgets, so the whole thing is testable
/// without a window.
#[derive(Debug, Clone)]
pub struct Roster<P> {
    records: Vec<StudentRecord<P>>,
}

impl<P> Default for Roster<P> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<P> Roster<P> {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the raw form inputs and append a new record.
    ///
    /// Both inputs are trimmed first. On error the roster is left untouched.
    pub fn add_student(
        &mut self,
        name_input: &str,
        grade_input: &str,
        portrait: Option<P>,
    ) -> Result<&StudentRecord<P>, ValidationError> {
        let name = name_input.trim();
        let grade_text = grade_input.trim();

        if name.is_empty() || grade_text.is_empty() {
            return Err(ValidationError::EmptyField);
        }

        let grade = parse_grade(grade_text)?;

        self.records.push(StudentRecord {
            name: name.to_string(),
            grade,
            portrait,
        });

        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Compute average, highest and lowest over the current records.
    ///
    /// Returns `None` when there is nothing to summarise. Extremes only move
    /// on a strict comparison, so on a tie the earliest record keeps it.
    /// NaN grades count toward the average but never hold an extreme,
    /// unless every grade is NaN.
    pub fn compute_summary(&self) -> Option<Summary> {
        if self.is_empty() {
            return None;
        }

        let mut total = 0.0;
        let mut highest: Option<&StudentRecord<P>> = None;
        let mut lowest: Option<&StudentRecord<P>> = None;

        for record in &self.records {
            total += record.grade;
            if record.grade.is_nan() {
                continue;
            }
            if highest.map_or(true, |h| record.grade > h.grade) {
                highest = Some(record);
            }
            if lowest.map_or(true, |l| record.grade < l.grade) {
                lowest = Some(record);
            }
        }

        let first = &self.records[0];
        let highest = highest.unwrap_or(first);
        let lowest = lowest.unwrap_or(first);

        Some(Summary {
            count: self.records.len(),
            average: total / self.records.len() as f64,
            highest: Extremum {
                grade: highest.grade,
                name: highest.name.clone(),
            },
            lowest: Extremum {
                grade: lowest.grade,
                name: lowest.name.clone(),
            },
        })
    }

    /// All records in insertion order
    pub fn records(&self) -> &[StudentRecord<P>] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse trimmed grade text. Anything `f64` accepts is a grade,
/// including `NaN`, `inf` and values that overflow to infinity.
fn parse_grade(text: &str) -> Result<f64, ValidationError> {
    text.parse::<f64>().map_err(|_| ValidationError::NotANumber)
}
