/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the roster and the UI layer.

use std::fmt;

/// Represents a single student in the roster
///
/// `P` is the portrait handle type. The roster never looks inside it;
/// the UI stores an image handle, tests can store anything.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord<P> {
    /// Name as entered, with surrounding whitespace removed
    pub name: String,
    /// Parsed grade, any finite value
    pub grade: f64,
    /// Display-size thumbnail, if one was selected before adding
    pub portrait: Option<P>,
}

impl<P> fmt::Display for StudentRecord<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, format_grade(self.grade))
    }
}

/// A grade together with the name of the first student who reached it
#[derive(Debug, Clone, PartialEq)]
pub struct Extremum {
    pub grade: f64,
    pub name: String,
}

/// Derived report over the current roster
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of records summarised
    pub count: usize,
    pub average: f64,
    pub highest: Extremum,
    pub lowest: Extremum,
}

impl Summary {
    pub fn average_line(&self) -> String {
        format!("Average Score: {}", two_places(self.average))
    }

    pub fn highest_line(&self) -> String {
        format!("Highest Score: {} ({})", two_places(self.highest.grade), self.highest.name)
    }

    pub fn lowest_line(&self) -> String {
        format!("Lowest Score: {} ({})", two_places(self.lowest.grade), self.lowest.name)
    }
}

/// Render a grade the way the form echoes it back.
///
/// Magnitudes in [1e-3, 1e7) print as decimals, whole numbers keeping one
/// place ("90.0"). Anything else, except zero, uses scientific notation
/// with at least one mantissa decimal ("1.0E10", "2.5E-4").
pub fn format_grade(grade: f64) -> String {
    if grade.is_nan() {
        return String::from("NaN");
    }
    if grade.is_infinite() {
        return String::from(if grade > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let magnitude = grade.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return if grade.fract() == 0.0 {
            format!("{:.1}", grade)
        } else {
            format!("{}", grade)
        };
    }

    let scientific = format!("{:e}", grade);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{}E{}", mantissa, exponent),
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

/// Fixed two decimals for the summary lines; non-finite values fall back
/// to their word form.
fn two_places(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        format_grade(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grade() {
        assert_eq!(format_grade(90.0), "90.0");
        assert_eq!(format_grade(-3.0), "-3.0");
        assert_eq!(format_grade(83.25), "83.25");
        assert_eq!(format_grade(0.5), "0.5");
        assert_eq!(format_grade(0.0), "0.0");
        assert_eq!(format_grade(9_999_999.0), "9999999.0");
        assert_eq!(format_grade(0.001), "0.001");
    }

    #[test]
    fn test_format_grade_scientific() {
        assert_eq!(format_grade(1e10), "1.0E10");
        assert_eq!(format_grade(1e7), "1.0E7");
        assert_eq!(format_grade(1e-5), "1.0E-5");
        assert_eq!(format_grade(-1.25e8), "-1.25E8");
        assert_eq!(format_grade(2.5e-4), "2.5E-4");
    }

    #[test]
    fn test_format_grade_non_finite() {
        assert_eq!(format_grade(f64::NAN), "NaN");
        assert_eq!(format_grade(f64::INFINITY), "Infinity");
        assert_eq!(format_grade(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_record_display() {
        let record: StudentRecord<()> = StudentRecord {
            name: "Alice".to_string(),
            grade: 90.0,
            portrait: None,
        };
        assert_eq!(record.to_string(), "Alice: 90.0");
    }

    #[test]
    fn test_summary_lines() {
        let summary = Summary {
            count: 3,
            average: 250.0 / 3.0,
            highest: Extremum { grade: 90.0, name: "Alice".to_string() },
            lowest: Extremum { grade: 70.0, name: "Bob".to_string() },
        };

        assert_eq!(summary.average_line(), "Average Score: 83.33");
        assert_eq!(summary.highest_line(), "Highest Score: 90.00 (Alice)");
        assert_eq!(summary.lowest_line(), "Lowest Score: 70.00 (Bob)");
    }

    #[test]
    fn test_summary_lines_non_finite() {
        let summary = Summary {
            count: 2,
            average: f64::NAN,
            highest: Extremum { grade: f64::INFINITY, name: "Max".to_string() },
            lowest: Extremum { grade: 1.0, name: "Min".to_string() },
        };

        assert_eq!(summary.average_line(), "Average Score: NaN");
        assert_eq!(summary.highest_line(), "Highest Score: Infinity (Max)");
    }
}
