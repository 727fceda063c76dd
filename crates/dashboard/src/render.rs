//! Plain-text rendering of the results table and the dataset explorer.

use crate::commit;
use crate::views::{DatasetView, ResultsView};
use data_loader::BenchmarkResult;
use pipeline::{RatedEntry, SortField, stars};

const GITHUB_PREFIX: &str = "https://github.com/";

/// Widest a free-text cell may get before it is cut with `…`
const MAX_CELL_WIDTH: usize = 48;

/// Issue URL as shown in the expanded results row
pub fn issue_label(url: &str) -> &str {
    url.strip_prefix(GITHUB_PREFIX).unwrap_or(url)
}

/// True-positive rate as a whole percentage, e.g. `0.425` -> `43%`
pub fn percent(rate: f64) -> String {
    format!("{:.0}%", (rate * 100.0).round())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Left-aligned columns separated by two spaces, header first
pub fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(headers);
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

// =============================================================================
// Results table
// =============================================================================

fn results_headers(sorted_by: SortField) -> Vec<String> {
    let mut headers = vec!["Agent".to_string(), "Run Date".to_string()];
    for field in SortField::ALL {
        let marker = if field == sorted_by { " ▼" } else { "" };
        headers.push(format!("{}{}", field.title(), marker));
    }
    headers
}

fn results_row(result: &BenchmarkResult) -> Vec<String> {
    vec![
        result.agent.clone(),
        result.run_date.clone(),
        result.needle_in_haystack.len().to_string(),
        result.pr_review.len().to_string(),
        percent(result.true_positive_rate),
        result.remediated.len().to_string(),
    ]
}

/// Detail block for an expanded result: the three URL groups
pub fn expanded_details(result: &BenchmarkResult) -> String {
    let groups = [
        ("Needle in Haystack Results", &result.needle_in_haystack),
        ("PR Review Results", &result.pr_review),
        ("Remediated Issues", &result.remediated),
    ];

    let mut out = String::new();
    for (title, urls) in groups {
        out.push_str(&format!("  {} ({})\n", title, urls.len()));
        for url in urls {
            out.push_str(&format!("    {}\n", issue_label(url)));
        }
    }
    out
}

/// The results table in its current sort order, with the expanded row's
/// details appended underneath.
pub fn results_table(view: &ResultsView) -> String {
    if view.is_loading() {
        return "Loading results...\n".to_string();
    }

    let rows = view.rows();
    let cells: Vec<Vec<String>> = rows.iter().map(|r| results_row(r)).collect();
    let mut out = format_table(&results_headers(view.sort_field()), &cells);

    if let Some(result) = view.expanded() {
        out.push('\n');
        out.push_str(&format!("{} ({})\n", result.agent, result.run_date));
        out.push_str(&expanded_details(result));
    }
    out
}

// =============================================================================
// Dataset explorer
// =============================================================================

fn dataset_headers() -> Vec<String> {
    ["ID", "Language", "Implication", "Avg Rating", "Introduced By", "Source"]
        .iter()
        .map(|h| h.to_string())
        .collect()
}

/// One explorer row
pub fn dataset_row(row: &RatedEntry<'_>) -> Vec<String> {
    let entry = row.entry;
    let ratings = format!(
        "Sev: {} Exp: {} Diff: {}",
        stars(row.ratings.severity),
        stars(row.ratings.domain_expertise),
        stars(row.ratings.difficulty_to_find)
    );
    vec![
        truncate(&entry.id, MAX_CELL_WIDTH),
        entry.language.clone(),
        truncate(&entry.implication, MAX_CELL_WIDTH),
        ratings,
        commit::render(entry.introduced_by.as_ref(), &entry.url).to_string(),
        entry.source.clone(),
    ]
}

/// Summary line followed by the visible rows
pub fn dataset_table(view: &DatasetView) -> String {
    if view.is_loading() {
        return "Loading dataset...\n".to_string();
    }

    let visible = view.visible();
    let cells: Vec<Vec<String>> = visible.iter().map(dataset_row).collect();

    let mut out = format!("{}\n\n", view.summary());
    out.push_str(&format_table(&dataset_headers(), &cells));
    out
}
