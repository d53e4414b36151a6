use std::fmt::Write;

use crate::model::OrderOfMeritEntry;

/// Whole points print without decimals, anything else with one.
#[must_use]
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        format!("{points:.1}")
    }
}

#[must_use]
pub fn render_order_of_merit(entries: &[OrderOfMeritEntry]) -> String {
    let mut out = String::new();
    if entries.is_empty() {
        out.push_str("No Order of Merit points recorded yet.\n");
        return out;
    }

    let _ = writeln!(out, "{:>4}  {:<24} {:>7} {:>4} {:>6}", "Pos", "Member", "Points", "Wins", "Played");
    for (i, entry) in entries.iter().enumerate() {
        // tied positions print as "=3"; ranks are sorted so ties are neighbours
        let tied = (i > 0 && entries[i - 1].rank == entry.rank)
            || entries.get(i + 1).is_some_and(|next| next.rank == entry.rank);
        let position = if tied {
            format!("={}", entry.rank)
        } else {
            entry.rank.to_string()
        };
        let _ = writeln!(
            out,
            "{position:>4}  {:<24} {:>7} {:>4} {:>6}",
            entry.member_name,
            format_points(entry.total_points),
            entry.wins,
            entry.played,
        );
    }
    out
}
