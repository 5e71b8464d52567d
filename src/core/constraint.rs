//! Version constraint compilation.
//!
//! Turns a free-form constraint string (`1.2.3`, `1.2.3..<2.0.0`, `>=1.0.0`)
//! into the requirement expression passed to `.package(url:...)`.
//!
//! No semantic checking happens here: malformed or contradictory bounds are
//! rendered structurally and left for the Swift toolchain to reject.

use std::ops::Range;

use crate::util::render::quoted;

/// Recognized range operators, in match order.
///
/// Longer operators come before the shorter ones they contain, so `..<` and
/// `<=` claim their text before `<` is considered.
pub const RANGE_OPERATORS: [&str; 8] = ["!=", "==", "...", "..<", "<=", ">=", "<", ">"];

/// An operator found in a constraint, at its first unclaimed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorMatch {
    pub operator: &'static str,
    pub position: usize,
}

/// Compile a constraint string into a version requirement expression.
///
/// Without any operator the input is a lower bound: `from: "1.2.3"`.
/// Otherwise each matched operator renders in `RANGE_OPERATORS` order and
/// the pieces are concatenated.
pub fn compile(constraint: &str) -> String {
    let matches = match_operators(constraint);
    if matches.is_empty() {
        return format!("from: {}", quoted(constraint));
    }

    if matches.len() > 1 {
        tracing::debug!(
            "version constraint `{}` matched {} operators: {}",
            constraint,
            matches.len(),
            matches
                .iter()
                .map(|m| m.operator)
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    matches
        .iter()
        .map(|m| render_match(constraint, m))
        .collect()
}

/// Find every operator occurring in `constraint`.
///
/// An occurrence overlapping text already claimed by an earlier operator is
/// not a separate match. Operators contain no letters, so matching is
/// unaffected by case.
pub fn match_operators(constraint: &str) -> Vec<OperatorMatch> {
    let mut claimed: Vec<Range<usize>> = Vec::new();
    let mut matches = Vec::new();

    for operator in RANGE_OPERATORS {
        let mut first = None;
        for (position, _) in constraint.match_indices(operator) {
            let span = position..position + operator.len();
            if claimed.iter().any(|c| overlaps(c, &span)) {
                continue;
            }
            if first.is_none() {
                first = Some(position);
            }
            claimed.push(span);
        }
        if let Some(position) = first {
            matches.push(OperatorMatch { operator, position });
        }
    }

    matches
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Render one operator occurrence.
///
/// The prefix form is used when the occurrence sits at position 0. Position
/// is judged after overlap claiming, so an operator whose only leading
/// occurrence was claimed by an earlier operator renders in infix form.
fn render_match(constraint: &str, m: &OperatorMatch) -> String {
    if m.position == 0 {
        return format!("{}{}", m.operator, quoted(&constraint[m.operator.len()..]));
    }

    let left = &constraint[..m.position];
    let right = &constraint[m.position + m.operator.len()..];
    let mut out = format!("{}{}", quoted(left), m.operator);
    if !right.is_empty() {
        out.push_str(&quoted(right));
    }
    out
}
