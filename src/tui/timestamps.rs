use chrono::{DateTime, Datelike, Local, Utc};

/// Format a session time by calendar day, in local time:
/// - Same day: "Today 14:05"
/// - Previous day: "Yesterday"
/// - Within a week: "3 days ago"
/// - Older: "Jan 15", or "Dec 3, 2024" in another year
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_at(&timestamp.with_timezone(&Local), &Local::now())
}

fn format_timestamp_at<Tz: chrono::TimeZone>(timestamp: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let days = now.date_naive().signed_duration_since(timestamp.date_naive()).num_days();

    match days {
        0 => format!("Today {}", timestamp.format("%H:%M")),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ if timestamp.year() == now.year() => timestamp.format("%b %-d").to_string(),
        _ => timestamp.format("%b %-d, %Y").to_string(),
    }
}
