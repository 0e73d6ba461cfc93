//! Output formatting utilities

use crate::domain::{mood, Entry, Summary, WeekStart};
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

/// Format a single entry for display
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "{}  {:>2}/10 ({})  {}\n",
        entry.date.format("%Y-%m-%d"),
        entry.mood_score.value(),
        entry.mood_score.label(),
        entry.content
    )
}

/// Format a month's entries as a list, oldest first
pub fn format_month_list(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    entries.iter().map(|entry| format_entry(entry)).collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryView<'a> {
    date: NaiveDate,
    content: &'a str,
    mood_score: u8,
    label: &'static str,
    color: &'static str,
}

/// Entries as a JSON array, each with its mood label and calendar color
pub fn format_entries_json(entries: &[&Entry]) -> serde_json::Result<String> {
    let views: Vec<EntryView> = entries
        .iter()
        .map(|entry| EntryView {
            date: entry.date,
            content: &entry.content,
            mood_score: entry.mood_score.value(),
            label: entry.mood_score.label(),
            color: entry.mood_score.color(),
        })
        .collect();
    serde_json::to_string_pretty(&views)
}

/// Format a month as a calendar grid.
///
/// Days with an entry show their score in brackets, e.g. `15[7]`.
pub fn format_month_calendar(
    year: i32,
    month0: u32,
    entries: &[&Entry],
    week_start: WeekStart,
) -> String {
    let Some(first) = month0
        .checked_add(1)
        .and_then(|month| NaiveDate::from_ymd_opt(year, month, 1))
    else {
        return "No such month".to_string();
    };
    let days_in_month = first
        .checked_add_months(Months::new(1))
        .map(|next| (next - first).num_days() as u32)
        .unwrap_or(31);

    let mut output = format!("{}\n", first.format("%B %Y"));

    let header_start = week_start.week_start_for(first);
    let header: Vec<String> = (0..7)
        .map(|i| format!("{:<5}", (header_start + Duration::days(i)).format("%a").to_string()))
        .collect();
    output.push_str(header.join(" ").trim_end());
    output.push('\n');

    let leading = (first - header_start).num_days() as usize;
    let mut cells: Vec<String> = vec![" ".repeat(5); leading];
    for day in 1..=days_in_month {
        let score = entries
            .iter()
            .find(|e| e.date.day() == day)
            .map(|e| e.mood_score.value());
        cells.push(match score {
            Some(score) => format!("{:>2}[{}]", day, score),
            None => format!("{:>2}   ", day),
        });
    }

    for week in cells.chunks(7) {
        output.push_str(week.join(" ").trim_end());
        output.push('\n');
    }

    output
}

pub fn format_streak(streak: u32) -> String {
    match streak {
        0 => "No current streak".to_string(),
        1 => "1 day streak".to_string(),
        n => format!("{} day streak", n),
    }
}

/// Format headline statistics
pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Current streak:   {}\n", summary.streak));
    output.push_str(&format!("Total entries:    {}\n", summary.total_entries));
    output.push('\n');
    output.push_str("Average mood\n");
    output.push_str(&format!(
        "  week:     {:.1} ({})\n",
        summary.week.average_mood,
        average_label(summary.week.average_mood)
    ));
    output.push_str(&format!(
        "  month:    {:.1} ({})\n",
        summary.month.average_mood,
        average_label(summary.month.average_mood)
    ));
    output.push_str(&format!(
        "  all time: {:.1} ({})\n",
        summary.average_mood,
        average_label(summary.average_mood)
    ));
    output.push('\n');
    output.push_str("Completion\n");
    output.push_str(&format!(
        "  week:     {:.0}% ({}/{} days)\n",
        summary.week.completion_rate(),
        summary.week.recorded,
        summary.week.days()
    ));
    output.push_str(&format!(
        "  month:    {:.0}% ({}/{} days)\n",
        summary.month.completion_rate(),
        summary.month.recorded,
        summary.month.days()
    ));

    output
}

/// Label for a fractional average, using the nearest whole score
fn average_label(average: f64) -> &'static str {
    mood::mood_label(average.round())
}
