//! Plain-text and JSON rendering of comparison results.

use serde::Serialize;
use std::io::{self, Write};

use dups_compare::MatchSummary;
use dups_core::MatchResult;

/// Everything a comparison command prints.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub file_a: &'a str,
    pub file_b: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    pub summary: MatchSummary,
    pub matches: &'a [MatchResult],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub not_found: &'a [String],
}

impl<'a> Report<'a> {
    pub fn new(file_a: &'a str, file_b: &'a str, matches: &'a [MatchResult], len_a: usize, len_b: usize) -> Self {
        Self {
            file_a,
            file_b,
            threshold: None,
            summary: MatchSummary::from_results(matches, len_a, len_b),
            matches,
            not_found: &[],
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_not_found(mut self, not_found: &'a [String]) -> Self {
        self.not_found = not_found;
        self
    }
}

/// Left-aligned columns separated by at least two spaces.
pub fn write_table<W: Write>(out: &mut W, rows: &[Vec<String>]) -> io::Result<()> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in rows {
        let mut line = String::new();
        for (c, cell) in row.iter().enumerate() {
            if c + 1 == row.len() {
                line.push_str(cell);
            } else {
                let pad = widths[c] - cell.chars().count() + 2;
                line.push_str(cell);
                line.extend(std::iter::repeat(' ').take(pad));
            }
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, report: &Report<'_>) -> io::Result<()> {
    let rows = vec![
        vec!["File".to_string(), "Number of sentences".to_string(), "Percentage of matched sentences".to_string()],
        vec![
            report.file_a.to_string(),
            report.summary.a.total_units.to_string(),
            report.summary.a.percentage.to_string(),
        ],
        vec![
            report.file_b.to_string(),
            report.summary.b.total_units.to_string(),
            report.summary.b.percentage.to_string(),
        ],
    ];
    write_table(out, &rows)
}

/// Summary table followed by every exact match in discovery order.
pub fn write_exact<W: Write>(out: &mut W, report: &Report<'_>) -> io::Result<()> {
    write_summary(out, report)?;
    writeln!(out, "\n\n{} matched sentences.\n", report.matches.len())?;
    for m in report.matches {
        writeln!(
            out,
            "{} sentence number {}\n\n\t{}\n\nmatched to {} sentence number {}\n\n\t{}\n",
            report.file_a, m.a_index, m.pair.original_a, report.file_b, m.b_index, m.pair.original_b,
        )?;
    }
    Ok(())
}

/// Summary table followed by the ranked matches with their scores.
pub fn write_ranked<W: Write>(out: &mut W, report: &Report<'_>) -> io::Result<()> {
    write_summary(out, report)?;
    match report.threshold {
        Some(t) => writeln!(out, "\n\n{} matches with score >= {t}.\n", report.matches.len())?,
        None => writeln!(out, "\n\n{} matches.\n", report.matches.len())?,
    }
    for m in report.matches {
        writeln!(
            out,
            "{:.4}  {} sentence number {} / {} sentence number {}\n\t{}\n\t{}\n",
            m.pair.score, report.file_a, m.a_index, report.file_b, m.b_index, m.pair.original_a, m.pair.original_b,
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &Report<'_>) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
