//! Parser for compound catalog files.
//!
//! # Format
//! ```text
//! # oxides
//! Water = H2O
//! Carbon dioxide = CO2
//! ```
//!
//! One compound per line as `name = formula`; `#` comments and blank lines
//! are skipped.

use crate::compound::Compound;
use crate::error::ParseError;
use std::collections::HashSet;

/// Parse catalog text into compounds.
pub fn parse(content: &str) -> Result<Vec<Compound>, ParseError> {
    let mut compounds = Vec::new();
    let mut seen_names = HashSet::new();
    let mut seen_formulas = HashSet::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (name, formula) = trimmed
            .split_once('=')
            .ok_or(ParseError::MissingSeparator { line: line_num })?;
        let name = name.trim();
        let formula = formula.trim();

        if name.is_empty() {
            return Err(ParseError::MissingName { line: line_num });
        }
        if formula.is_empty() {
            return Err(ParseError::MissingFormula { line: line_num });
        }
        if !is_formula(formula) {
            return Err(ParseError::InvalidFormula {
                line: line_num,
                value: formula.to_string(),
            });
        }
        if !seen_names.insert(name.to_lowercase()) {
            return Err(ParseError::DuplicateName {
                name: name.to_string(),
                line: line_num,
            });
        }
        if !seen_formulas.insert(formula.to_string()) {
            return Err(ParseError::DuplicateFormula {
                formula: formula.to_string(),
                line: line_num,
            });
        }

        compounds.push(Compound::new(name, formula));
    }

    Ok(compounds)
}

/// Formulas are ASCII letters, digits and parentheses (`C6H12O6`, `Ca(OH)2`).
fn is_formula(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '(' || c == ')')
}
