//! Browser-facing diary form.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::pipeline::MoodReport;

use super::AppState;

const PLACEHOLDER: &str =
    "e.g. Today was amazing! I got a promotion at work and celebrated with friends.";
const EMPTY_WARNING: &str = "Please write something about your day first!";

#[derive(Debug, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub entry: String,
}

/// GET /
pub async fn form() -> Html<String> {
    Html(render_page("", None, None))
}

/// POST /
///
/// Blank entries get the form back with a warning instead of a result.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Html<String>> {
    if form.entry.trim().is_empty() {
        return Ok(Html(render_page("", Some(EMPTY_WARNING), None)));
    }

    let report = state.pipeline.analyze(&form.entry)?;
    info!(mood = %report.mood, "Mood classified from form");

    Ok(Html(render_page(&form.entry, None, Some(&report))))
}

fn render_page(entry: &str, warning: Option<&str>, report: Option<&MoodReport>) -> String {
    let entry = escape_html(entry);
    let warning = warning
        .map(|w| format!(r#"<p class="warning">{}</p>"#, escape_html(w)))
        .unwrap_or_default();
    let result = report.map(render_result).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>MoodPlaylist</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 720px;
            margin: 0 auto;
            padding: 20px;
        }}
        textarea {{ width: 100%; height: 150px; }}
        button {{ width: 100%; padding: 10px; margin-top: 8px; }}
        .warning {{ color: #b26a00; background: #fff4e0; padding: 8px; border-radius: 4px; }}
        .result {{ display: flex; gap: 20px; align-items: center; border-left: 6px solid; padding-left: 16px; }}
        .emoji {{ font-size: 80px; }}
        .details {{ margin-top: 16px; }}
    </style>
</head>
<body>
    <h1>🎵 MoodPlaylist</h1>
    <h3>Mood-based playlist generator</h3>
    <p>Write a few sentences about your day, and get a soundtrack for your emotions!</p>
    <hr>
    <form method="post" action="/">
        <label for="entry">How was your day? Tell me about it:</label>
        <textarea id="entry" name="entry" placeholder="{PLACEHOLDER}">{entry}</textarea>
        <button type="submit">🎶 Analyze my mood</button>
    </form>
    {warning}
    {result}
</body>
</html>
"#
    )
}

fn render_result(report: &MoodReport) -> String {
    let playlist = &report.playlist;
    format!(
        r#"<hr>
    <div class="result" style="border-color: {color}">
        <div class="emoji">{emoji}</div>
        <div>
            <h3>Detected mood: {mood}</h3>
            <p><strong>Suggested playlist:</strong> {genres} 🎶</p>
            <p><em>{description}</em></p>
        </div>
    </div>
    <details class="details">
        <summary>📊 Sentiment analysis details</summary>
        <p>Polarity: {polarity:.2} <small>(range: -1 negative to +1 positive)</small></p>
        <p>Subjectivity: {subjectivity:.2} <small>(range: 0 objective to 1 subjective)</small></p>
    </details>"#,
        color = playlist.color,
        emoji = playlist.emoji,
        mood = report.mood.display_name(),
        genres = playlist.genres,
        description = playlist.description,
        polarity = report.sentiment.polarity,
        subjectivity = report.sentiment.subjectivity,
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::MoodPipeline;
    use crate::sentiment::{LexiconAnalyzer, SentimentScore};
    use std::sync::Arc;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_empty_page_has_form_only() {
        let page = render_page("", None, None);
        assert!(page.contains(r#"<form method="post" action="/">"#));
        assert!(!page.contains("Detected mood"));
        assert!(!page.contains("class=\"warning\""));
    }

    #[test]
    fn test_page_with_warning() {
        let page = render_page("", Some(EMPTY_WARNING), None);
        assert!(page.contains(EMPTY_WARNING));
    }

    #[test]
    fn test_page_with_result() {
        let pipeline = MoodPipeline::new(Arc::new(LexiconAnalyzer::default()));
        let report = pipeline.analyze("").unwrap();
        assert_eq!(report.sentiment, SentimentScore::neutral());

        let page = render_page("<b>hi</b>", None, Some(&report));
        assert!(page.contains("Detected mood: Calm"));
        assert!(page.contains("Classical, Jazz, Chill"));
        assert!(page.contains("#90EE90"));
        assert!(page.contains("Polarity: 0.00"));
        assert!(page.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!page.contains("<b>hi</b>"));
    }
}
