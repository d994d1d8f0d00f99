//! Text renderings of each dashboard page.

use super::boxes::{icons, push_field, push_header, push_line, push_section, push_text};
use crate::dashboard::DashboardStats;
use crate::health_check::{ComponentStatus, HealthCheckResult};
use crate::models::{ActDetails, CommentResponse, WORD_PREVIEW_LIMIT};
use crate::sentiment::{SentimentBadge, SentimentCategory, SentimentTally};

/// Act list, optionally filtered.
pub fn render_acts(acts: &[&str], total: usize, search: Option<&str>) -> String {
    let mut out = String::new();
    push_header(&mut out, "LEGISLATIVE ACTS");

    match search {
        Some(term) => {
            out.push_str(&format!(
                "{} of {} acts match \"{}\"\n",
                acts.len(),
                total,
                term
            ));
        }
        None => {
            out.push_str(&format!("{} acts\n", total));
        }
    }
    out.push('\n');

    if acts.is_empty() {
        push_line(&mut out, icons::WARNING, "No acts found");
    }
    for act in acts {
        push_line(&mut out, icons::BULLET, act);
    }
    out
}

/// Detail page for one act.
pub fn render_act_details(details: &ActDetails) -> String {
    let mut out = String::new();
    push_header(&mut out, &details.act);

    let overall = SentimentBadge::new(details.overall_sentiment.clone());
    push_field(&mut out, "Overall", &overall.to_string());
    push_field(&mut out, "Comments", &details.comments.len().to_string());
    push_field(&mut out, "Key terms", &details.word_list.len().to_string());

    push_section(&mut out, "SUMMARY");
    if details.summary.trim().is_empty() {
        push_text(&mut out, "No summary available.");
    } else {
        push_text(&mut out, &details.summary);
    }

    let words = details.top_words(WORD_PREVIEW_LIMIT);
    if !words.is_empty() {
        push_section(&mut out, "KEY TERMS");
        push_text(&mut out, &words.join(", "));
    }

    push_section(&mut out, "PUBLIC COMMENTS");
    if details.comments.is_empty() {
        push_text(&mut out, "No comments yet.");
    } else {
        for entry in &details.comments {
            let badge = SentimentBadge::new(entry.sentiment.clone());
            push_line(&mut out, badge.glyph(), &format!("{} [{}]", entry.comment, badge.label));
        }
        out.push('\n');
        push_tally(&mut out, &SentimentTally::from_labels(details.comment_labels()));
    }
    out
}

/// Result of a comment submission.
pub fn render_submission(responses: &[CommentResponse]) -> String {
    let mut out = String::new();
    push_header(&mut out, "ANALYSIS RESULT");

    if responses.is_empty() {
        push_line(
            &mut out,
            icons::WARNING,
            "The server accepted the request but returned no analysis.",
        );
        return out;
    }

    for response in responses {
        let badge = SentimentBadge::new(response.sentiment.clone());
        push_field(&mut out, "Act", &response.act);
        push_field(&mut out, "Sentiment", &badge.to_string());
        push_field(&mut out, "Comment", &response.comment);
        out.push('\n');
    }
    push_line(
        &mut out,
        icons::SUCCESS,
        "Your comment has been recorded and will contribute to the overall sentiment analysis.",
    );
    out
}

/// Health page. Unknown and unhealthy read differently.
pub fn render_health(result: &HealthCheckResult, base_url: &str) -> String {
    let mut out = String::new();
    push_header(&mut out, "SYSTEM HEALTH");

    let icon = if result.report.is_healthy() {
        icons::SUCCESS
    } else {
        icons::FAILURE
    };
    push_line(&mut out, icon, result.report.title());
    push_text(&mut out, result.report.description());

    push_section(&mut out, "SERVICES");
    let status = result.report.status();
    push_component(
        &mut out,
        "API Service",
        result.report.api_status(),
        status.map(|s| s.api.as_str()),
    );
    push_component(
        &mut out,
        "Database",
        result.report.database_status(),
        status.map(|s| s.database.as_str()),
    );

    push_section(&mut out, "DETAILS");
    push_field(&mut out, "Endpoint", base_url);
    push_field(
        &mut out,
        "Last checked",
        &result.checked_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    let response_time = match result.response_time_ms {
        Some(ms) => format!("{}ms", ms),
        None => "n/a".to_string(),
    };
    push_field(&mut out, "Response time", &response_time);
    out
}

fn push_component(out: &mut String, name: &str, status: ComponentStatus, reported: Option<&str>) {
    let (icon, text) = match (status, reported) {
        (ComponentStatus::Up, Some(value)) => (icons::SUCCESS, value.to_uppercase()),
        (ComponentStatus::Down, Some(value)) => (icons::FAILURE, value.to_uppercase()),
        _ => (icons::UNKNOWN, "UNKNOWN".to_string()),
    };
    push_line(out, icon, &format!("{}: {}", name, text));
}

/// Aggregate statistics page.
pub fn render_dashboard(stats: &DashboardStats) -> String {
    let mut out = String::new();
    push_header(&mut out, "SENTIMENT DASHBOARD");

    push_field(&mut out, "Acts", &stats.total_acts.to_string());
    push_field(&mut out, "Comments", &stats.total_comments.to_string());
    out.push('\n');
    push_tally(&mut out, &stats.tally);

    if !stats.per_act.is_empty() {
        push_section(&mut out, "ACTS");
        for row in &stats.per_act {
            push_line(
                &mut out,
                row.overall.glyph(),
                &format!("{} ({} comments)", row.act, row.comment_count),
            );
        }
    }

    if !stats.failed_acts.is_empty() {
        push_section(&mut out, "UNAVAILABLE");
        for (act, err) in &stats.failed_acts {
            push_line(&mut out, icons::WARNING, &format!("{}: {}", act, err.user_message()));
        }
    }
    out
}

/// Offline classification of a single label.
pub fn render_badge(badge: &SentimentBadge) -> String {
    format!(
        "{}\n  category: {}\n  style:    {}\n",
        badge,
        badge.category,
        badge.style()
    )
}

fn push_tally(out: &mut String, tally: &SentimentTally) {
    for category in SentimentCategory::ALL {
        push_line(
            out,
            category.glyph(),
            &format!(
                "{:<9}{:>5}  ({}%)",
                category.as_str(),
                tally.count(category),
                tally.percent(category)
            ),
        );
    }
}
