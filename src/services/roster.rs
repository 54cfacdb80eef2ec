//! Roster and grade CSV parsing.
//!
//! Both importers share the same policy: fields are comma-separated and
//! trimmed, blank lines are ignored, and malformed rows are collected as
//! per-line errors (1-based line numbers) without aborting the batch.

use crate::api::{GradeReport, GradeRow, LineError, RosterReport, RosterRow};

/// Parse a student roster file: one `name,surname,email` row per line.
pub fn parse_roster(content: &str) -> RosterReport {
    let mut report = RosterReport::default();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let name = fields.next().unwrap_or("");
        let surname = fields.next().unwrap_or("");
        let email = fields.next().unwrap_or("");

        if name.is_empty() || surname.is_empty() || email.is_empty() {
            report.errors.push(LineError {
                line: index + 1,
                message: "Dati mancanti.".to_string(),
            });
            continue;
        }

        report.rows.push(RosterRow {
            line: index + 1,
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
        });
    }

    report
}

/// Parse a grades file: one `email,grade` row per line, grade numeric.
pub fn parse_grades(content: &str) -> GradeReport {
    let mut report = GradeReport::default();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let email = fields.next().unwrap_or("");
        let grade = fields.next().unwrap_or("").parse::<f64>();

        match grade {
            Ok(grade) if !email.is_empty() => {
                report.rows.push(GradeRow {
                    email: email.to_string(),
                    grade,
                });
            }
            _ => {
                report.errors.push(LineError {
                    line: index + 1,
                    message: "Dati mancanti o voto non numerico.".to_string(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_well_formed() {
        let report = parse_roster("Mario,Rossi,mario.rossi@example.com\nAnna, Bianchi , anna@example.com");
        assert_eq!(report.rows.len(), 2);
        assert!(report.errors.is_empty());
        assert_eq!(report.rows[1].surname, "Bianchi");
    }

    #[test]
    fn test_roster_blank_lines_ignored() {
        let report = parse_roster("\n\nMario,Rossi,m@example.com\n\n");
        assert_eq!(report.rows.len(), 1);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_roster_missing_fields_reported_per_line() {
        let content = "Mario,Rossi,m@example.com\nSoloNome\n,Bianchi,b@example.com";
        let report = parse_roster(content);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].line, 2);
        assert_eq!(report.errors[1].line, 3);
    }

    #[test]
    fn test_roster_error_does_not_abort_batch() {
        let content = "bad line\nMario,Rossi,m@example.com";
        let report = parse_roster(content);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_grades_well_formed() {
        let report = parse_grades("m@example.com,7.5\na@example.com, 6");
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].grade, 7.5);
    }

    #[test]
    fn test_grades_non_numeric_reported() {
        let report = parse_grades("m@example.com,sette\n,8.0");
        assert!(report.rows.is_empty());
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].line, 1);
    }
}
