//! # Roster Views
//!
//! Turns roster data into what the user sees on stdout.
//!
//! Two modes share the same data:
//! - `Text`: the human layout with the Portuguese section headers
//! - `Json`: one pretty-printed JSON document per view

use crate::shell::ShellError;
use classbook_core::{ClassReport, ReportEntry, Roster, Standing, StudentRecord};
use serde::Serialize;
use std::io::Write;

/// How listing, search and report views are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

// =============================================================================
// MENU & MESSAGES
// =============================================================================

pub const WELCOME: &str = "Bem-vindo ao Sistema de Gerenciamento de Estudantes!";
pub const PROMPT_CHOICE: &str = "Escolha uma opção: ";
pub const PROMPT_NAME: &str = "Nome do estudante: ";
pub const PROMPT_AGE: &str = "Idade: ";
pub const PROMPT_GRADES: &str = "Notas (separadas por vírgula): ";
pub const PROMPT_SEARCH: &str = "Digite o nome para buscar: ";
pub const REGISTERED: &str = "Estudante cadastrado com sucesso!";
pub const NO_STUDENTS: &str = "Nenhum estudante cadastrado.";
pub const NOT_FOUND: &str = "Nenhum estudante encontrado.";
pub const INVALID_OPTION: &str = "Opção inválida!";
pub const GOODBYE: &str = "Saindo do sistema...";
pub const NO_BEST_STUDENT: &str = "Nenhum";

/// Print the main menu.
pub fn write_menu<W: Write>(out: &mut W) -> Result<(), ShellError> {
    writeln!(out, "SISTEMA DE ESTUDANTES - Escolha uma opção:")?;
    writeln!(out, "1. Cadastrar novo estudante")?;
    writeln!(out, "2. Listar estudantes")?;
    writeln!(out, "3. Buscar estudante")?;
    writeln!(out, "4. Gerar relatórios")?;
    writeln!(out, "5. Sair")?;
    Ok(())
}

/// Grades joined by `, ` with the shortest decimal form (`8`, `8.5`).
pub fn format_grades(grades: &[f64]) -> String {
    grades
        .iter()
        .map(|grade| grade.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Average with two decimals, an exact half rounding up (`7.125` -> `7.13`).
///
/// `{:.2}` rounds exact halves to even, so halves are found on the exact
/// decimal expansion and moved to the next hundredth.
pub fn format_average(average: f64) -> String {
    let exact = format!("{:.40}", average.abs());
    let is_half = exact
        .split_once('.')
        .and_then(|(_, frac)| frac.get(2..))
        .is_some_and(|rest| rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0'));

    if is_half {
        let hundredths = (average.abs() * 100.0).ceil().copysign(average);
        format!("{:.2}", hundredths / 100.0)
    } else {
        format!("{:.2}", average)
    }
}

// =============================================================================
// JSON SHAPES
// =============================================================================

#[derive(Serialize)]
struct StudentJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    name: &'a str,
    age: f64,
    grades: &'a [f64],
    average: f64,
}

impl<'a> StudentJson<'a> {
    fn new(index: Option<usize>, student: &'a StudentRecord) -> Self {
        Self {
            index,
            name: student.name(),
            age: student.age(),
            grades: student.grades(),
            average: student.average(),
        }
    }
}

#[derive(Serialize)]
struct ListingJson<'a> {
    students: Vec<StudentJson<'a>>,
}

#[derive(Serialize)]
struct SearchJson<'a> {
    term: &'a str,
    matches: Vec<StudentJson<'a>>,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), ShellError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

// =============================================================================
// VIEWS
// =============================================================================

fn write_student<W: Write>(
    out: &mut W,
    index: Option<usize>,
    student: &StudentRecord,
) -> Result<(), ShellError> {
    match index {
        Some(index) => {
            writeln!(out, "{}. {} - {} anos", index, student.name(), student.age())?;
            writeln!(out, "   Notas: {}", format_grades(student.grades()))?;
            writeln!(out, "   Média: {}", format_average(student.average()))?;
        }
        None => {
            writeln!(out, "{} - {} anos", student.name(), student.age())?;
            writeln!(out, "Notas: {}", format_grades(student.grades()))?;
            writeln!(out, "Média: {}", format_average(student.average()))?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Print every student with a 1-based index.
pub fn write_listing<W: Write>(
    out: &mut W,
    mode: OutputMode,
    roster: &Roster,
) -> Result<(), ShellError> {
    if mode == OutputMode::Json {
        let students = roster
            .all()
            .iter()
            .enumerate()
            .map(|(i, s)| StudentJson::new(Some(i + 1), s))
            .collect();
        return write_json(out, &ListingJson { students });
    }

    if roster.is_empty() {
        writeln!(out, "{}", NO_STUDENTS)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "=== LISTA DE ESTUDANTES ===")?;
    for (i, student) in roster.all().iter().enumerate() {
        write_student(out, Some(i + 1), student)?;
    }
    Ok(())
}

/// Print the result of a name search.
pub fn write_search<W: Write>(
    out: &mut W,
    mode: OutputMode,
    term: &str,
    matches: &[&StudentRecord],
) -> Result<(), ShellError> {
    if mode == OutputMode::Json {
        let matches = matches.iter().map(|s| StudentJson::new(None, s)).collect();
        return write_json(out, &SearchJson { term, matches });
    }

    if matches.is_empty() {
        writeln!(out, "{}", NOT_FOUND)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "=== RESULTADO DA BUSCA ===")?;
    for student in matches {
        write_student(out, None, student)?;
    }
    Ok(())
}

/// Print the class report.
pub fn write_report<W: Write>(
    out: &mut W,
    mode: OutputMode,
    report: &ClassReport,
) -> Result<(), ShellError> {
    if mode == OutputMode::Json {
        return write_json(out, report);
    }

    writeln!(out)?;
    writeln!(out, " RELATÓRIOS")?;
    writeln!(
        out,
        "Média geral da turma: {}",
        format_average(report.class_average)
    )?;
    match &report.best_student {
        Some(ReportEntry { name, average }) => {
            writeln!(out, "Melhor estudante: {} ({})", name, format_average(*average))?;
        }
        None => writeln!(out, "Melhor estudante: {}", NO_BEST_STUDENT)?,
    }

    for standing in [Standing::Approved, Standing::Recovery, Standing::Failed] {
        writeln!(out)?;
        writeln!(out, " {}", standing.title())?;
        for entry in report.bucket(standing) {
            writeln!(out, "{}: {}", entry.name, format_average(entry.average))?;
        }
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), ShellError>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn roster_with_ana() -> Roster {
        let mut roster = Roster::new();
        roster.append(StudentRecord::new("Ana", 20.0, vec![8.0, 9.0, 7.0]).unwrap());
        roster
    }

    #[test]
    fn grades_use_shortest_form() {
        assert_eq!(format_grades(&[8.0, 9.5, 7.0]), "8, 9.5, 7");
        assert_eq!(format_grades(&[]), "");
    }

    #[test]
    fn average_rounds_exact_half_up() {
        assert_eq!(format_average(7.125), "7.13");
        assert_eq!(format_average(0.125), "0.13");
        assert_eq!(format_average(4.5), "4.50");
        assert_eq!(format_average(8.0), "8.00");
        assert_eq!(format_average(0.0), "0.00");
    }

    #[test]
    fn average_near_half_keeps_nearest() {
        // 1.005 is stored just below the half
        assert_eq!(format_average(1.005), "1.00");
        assert_eq!(format_average(18.5 / 3.0), "6.17");
        assert_eq!(format_average(7.124), "7.12");
    }

    #[test]
    fn negative_zero_grade_prints_as_zero() {
        let grades = classbook_core::parse_grades("-0, 7").unwrap();
        assert_eq!(format_grades(&grades), "0, 7");
    }

    #[test]
    fn listing_text_layout() {
        let roster = roster_with_ana();
        let text = render(|out| write_listing(out, OutputMode::Text, &roster));

        assert!(text.contains("=== LISTA DE ESTUDANTES ==="));
        assert!(text.contains("1. Ana - 20 anos"));
        assert!(text.contains("   Notas: 8, 9, 7"));
        assert!(text.contains("   Média: 8.00"));
    }

    #[test]
    fn empty_listing_message() {
        let text = render(|out| write_listing(out, OutputMode::Text, &Roster::new()));
        assert_eq!(text, "Nenhum estudante cadastrado.\n\n");
    }

    #[test]
    fn search_entries_have_no_index() {
        let roster = roster_with_ana();
        let matches = roster.search("an");
        let text = render(|out| write_search(out, OutputMode::Text, "an", &matches));

        assert!(text.contains("=== RESULTADO DA BUSCA ==="));
        assert!(text.contains("\nAna - 20 anos\n"));
        assert!(!text.contains("1. Ana"));
    }

    #[test]
    fn empty_report_shows_none_sentinel() {
        let report = ClassReport::from_roster(&Roster::new());
        let text = render(|out| write_report(out, OutputMode::Text, &report));

        assert!(text.contains("Média geral da turma: 0.00"));
        assert!(text.contains("Melhor estudante: Nenhum"));
        assert!(text.contains("Aprovados (média >= 7)"));
        assert!(text.contains("Recuperação (5.0 - 6.9)"));
        assert!(text.contains("Reprovados (média < 5)"));
    }

    #[test]
    fn listing_json_document() {
        let roster = roster_with_ana();
        let text = render(|out| write_listing(out, OutputMode::Json, &roster));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["students"][0]["index"], 1);
        assert_eq!(value["students"][0]["name"], "Ana");
        assert_eq!(value["students"][0]["average"], 8.0);
    }

    #[test]
    fn report_json_document() {
        let report = ClassReport::from_roster(&roster_with_ana());
        let text = render(|out| write_report(out, OutputMode::Json, &report));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["best_student"]["name"], "Ana");
        assert_eq!(value["approved"].as_array().map(Vec::len), Some(1));
    }
}
