use std::fmt::Write;

use crate::handicap::format_handicap;
use crate::tee_sheet::TeeSheet;

#[must_use]
pub fn render_tee_sheet(sheet: &TeeSheet) -> String {
    let mut out = String::new();
    let page_count = sheet.pages.len();

    for (page_idx, page) in sheet.pages.iter().enumerate() {
        if page_count > 1 {
            let _ = writeln!(out, "== Page {} of {page_count} ==", page_idx + 1);
        }
        for group in page {
            let _ = writeln!(
                out,
                "Group {}  {}",
                group.group_number,
                group.tee_time_display()
            );
            for player in &group.players {
                let _ = writeln!(
                    out,
                    "  {:<24} HI {:>5}  CH {:>3}  PH {:>3}",
                    player.name,
                    format_handicap(player.handicap_index, 1),
                    format_handicap(player.course_handicap, 0),
                    format_handicap(player.playing_handicap, 0),
                );
            }
        }
    }
    out
}
