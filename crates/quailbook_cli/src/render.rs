//! Plain-text views of store contents and aggregations.
//!
//! Every function returns the full text of one view; nothing here reads the
//! store or the clock.

use quailbook_core::{
    ActivityEntry, AssistantSettings, CalendarMonth, DashboardSummary, EggHistogram, EggRecord,
    Quail, Task, WEEKDAY_HEADERS,
};

const CHART_WIDTH: f64 = 20.0;
const MASK_MIN_KEY_LEN: usize = 8;

pub fn render_dashboard(
    summary: &DashboardSummary,
    today_tasks: &[&Task],
    activity: &[ActivityEntry],
) -> String {
    let mut lines = vec![
        format!("Quails:          {}", summary.total_quails),
        format!("Eggs today:      {}", summary.eggs_today),
        format!("Tasks today:     {}", summary.open_tasks_today),
        format!("Healthy quails:  {}", summary.healthy_quails),
        String::new(),
        "Today's tasks".to_string(),
    ];
    lines.push(render_tasks(today_tasks));
    lines.push(String::new());
    lines.push("Recent activity".to_string());
    if activity.is_empty() {
        lines.push("  No activity yet".to_string());
    }
    lines.extend(
        activity
            .iter()
            .map(|entry| format!("  {} ({})", entry.kind.headline(), entry.date.display_long())),
    );
    lines.join("\n")
}

pub fn render_quails(quails: &[Quail]) -> String {
    if quails.is_empty() {
        return "No quails yet. Add the first one to start keeping records.".to_string();
    }

    quails
        .iter()
        .map(|quail| {
            let mut lines = vec![format!(
                "#{} {} [{}]",
                quail.id,
                quail.name,
                quail.health.label()
            )];
            if !quail.breed.is_empty() {
                lines.push(format!("  Breed: {}", quail.breed));
            }
            lines.push(format!("  Sex:   {}", quail.sex.label()));
            lines.push(format!("  Date:  {}", quail.date.display_long()));
            if !quail.notes.is_empty() {
                lines.push(format!("  Notes: {}", quail.notes));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_egg_history(records: &[&EggRecord]) -> String {
    if records.is_empty() {
        return "No records".to_string();
    }

    records
        .iter()
        .map(|record| {
            let mut detail = record.time.map(|time| time.to_string()).unwrap_or_default();
            if !record.notes.is_empty() {
                detail.push_str(&format!(" - {}", record.notes));
            }
            format!(
                "{:<18} {:>4} eggs  {}",
                record.date.display_long(),
                record.count,
                detail.trim()
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Horizontal bar chart; `has_records` is false when no eggs were ever logged.
pub fn render_egg_chart(histogram: &EggHistogram, has_records: bool) -> String {
    if !has_records {
        return "No data to display".to_string();
    }

    histogram
        .buckets
        .iter()
        .map(|bucket| {
            let width = (histogram.bar_height_percent(bucket) / 100.0 * CHART_WIDTH).round();
            format!(
                "{:>7} | {:<20} {}",
                bucket.date.display_short(),
                "#".repeat(width as usize),
                bucket.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_tasks(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "  No tasks for today".to_string();
    }

    tasks
        .iter()
        .map(|task| {
            let when = task
                .time
                .map_or_else(|| "All day".to_string(), |time| time.to_string());
            let mut line = format!("  {when:<7} {} [{}]", task.title, task.kind.label());
            if !task.notes.is_empty() {
                line.push_str(&format!(" - {}", task.notes));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sunday-first month grid. `*` marks today, `(n)` the task count.
pub fn render_calendar(month: &CalendarMonth) -> String {
    let mut cells: Vec<String> = WEEKDAY_HEADERS
        .iter()
        .map(|header| format!("{header:>6}"))
        .collect();
    cells.extend((0..month.leading_blanks).map(|_| format!("{:>6}", "")));
    cells.extend(month.days.iter().map(|day| {
        let marker = if day.is_today { "*" } else { "" };
        let tasks = if day.has_tasks() {
            format!("({})", day.task_count)
        } else {
            String::new()
        };
        format!("{:>6}", format!("{marker}{}{tasks}", day.day))
    }));

    let mut lines = vec![month.title()];
    lines.extend(cells.chunks(7).map(|week| week.concat().trim_end().to_string()));
    lines.join("\n")
}

pub fn render_settings(settings: &AssistantSettings) -> String {
    let key = settings
        .api_key
        .as_deref()
        .map_or_else(|| "not set".to_string(), mask_key);
    format!(
        "API key:        {key}\nUse assistant:  {}",
        if settings.use_assistant { "on" } else { "off" }
    )
}

/// Keys too short to hide a suffix print as `****` alone.
fn mask_key(key: &str) -> String {
    if key.chars().count() <= MASK_MIN_KEY_LEN {
        return "****".to_string();
    }
    let visible: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{visible}")
}

#[cfg(test)]
mod tests {
    use super::{render_calendar, render_egg_chart, render_quails, render_settings};
    use quailbook_core::aggregate::egg_histogram;
    use quailbook_core::calendar::calendar_month;
    use quailbook_core::{
        AssistantSettings, CalendarCursor, CalendarDate, EggDraft, EggRecord, Quail, QuailDraft,
    };

    fn date(text: &str) -> CalendarDate {
        text.parse().unwrap()
    }

    #[test]
    fn empty_quail_list_shows_empty_state() {
        assert!(render_quails(&[]).starts_with("No quails yet"));
    }

    #[test]
    fn quail_card_omits_blank_optional_fields() {
        let quail = Quail::from_draft(1, QuailDraft::new("Pepper"), date("2024-03-10"));
        let text = render_quails(&[quail]);
        assert!(text.contains("#1 Pepper [Healthy]"));
        assert!(text.contains("10 March 2024"));
        assert!(!text.contains("Breed"));
        assert!(!text.contains("Notes"));
    }

    #[test]
    fn chart_draws_seven_rows_with_minimum_bar() {
        let today = date("2024-03-10");
        let eggs = vec![EggRecord::from_draft(1, EggDraft::new(4), today)];
        let text = render_egg_chart(&egg_histogram(&eggs, today), true);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 7);
        assert!(rows[6].contains(&"#".repeat(20)));
        assert!(rows[0].contains("| ## "));
        assert_eq!(render_egg_chart(&egg_histogram(&[], today), false), "No data to display");
    }

    #[test]
    fn calendar_marks_today_and_task_counts() {
        let today = date("2024-02-10");
        let month = calendar_month(CalendarCursor::containing(today), &[], today);
        let text = render_calendar(&month);
        assert!(text.starts_with("February 2024"));
        assert!(text.contains("*10"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn settings_mask_the_key() {
        let text = render_settings(&AssistantSettings {
            api_key: Some("sk-abcdef1234".to_string()),
            use_assistant: true,
        });
        assert!(text.contains("****1234"));
        assert!(!text.contains("abcdef"));
    }

    #[test]
    fn short_keys_are_fully_masked() {
        for key in ["abc", "wxyz", "12345678"] {
            let text = render_settings(&AssistantSettings {
                api_key: Some(key.to_string()),
                use_assistant: false,
            });
            assert!(text.contains("API key:        ****\n"), "{text}");
            assert!(!text.contains(key));
        }
    }
}
