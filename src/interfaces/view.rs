//! HTML rendering for the prediction form.
//!
//! One control per entry of [`FIELD_NAMES`]: categorical fields become a
//! `<select>` whose option values are encoder indices, everything else a
//! numeric `<input>`. The result banner is only rendered when a request was
//! actually scored.

use std::collections::HashMap;
use std::fmt::Write;

use crate::application::prediction_service::PredictionOutcome;
use crate::domain::ml::encoder::{EncoderSet, LabelEncoder};
use crate::domain::ml::feature_registry::{FIELD_NAMES, is_categorical};

/// Everything one page render needs.
pub struct PageContext<'a> {
    pub encoders: &'a EncoderSet,
    /// Values from the last submission, echoed back into the controls
    pub submitted: Option<&'a HashMap<String, String>>,
    pub outcome: Option<&'a PredictionOutcome>,
}

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; background: linear-gradient(90deg, #1d4ed8, #111827); min-height: 100vh; display: flex; align-items: center; justify-content: center; margin: 0; padding: 24px; }
        .card { background: #fff; border-radius: 16px; box-shadow: 0 20px 40px rgba(0,0,0,.35); max-width: 760px; width: 100%; padding: 40px; }
        h1 { text-align: center; color: #eab308; margin-top: 0; }
        .subtitle { text-align: center; color: #4b5563; margin-bottom: 32px; }
        form { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }
        label { display: block; font-size: 14px; color: #374151; margin-bottom: 4px; }
        input, select { width: 100%; box-sizing: border-box; padding: 8px; border: 1px solid #d1d5db; border-radius: 6px; }
        .actions { grid-column: span 2; text-align: center; margin-top: 12px; }
        button { padding: 12px 32px; background: #2563eb; color: #fff; font-weight: bold; border: none; border-radius: 12px; cursor: pointer; }
        .result { margin-top: 32px; padding: 16px; border-radius: 8px; text-align: center; font-weight: bold; font-size: 18px; }
        .result.success { background: #dcfce7; color: #166534; }
        .result.error { background: #fee2e2; color: #991b1b; }
"#;

/// Text shown in the result banner.
pub fn format_outcome(outcome: &PredictionOutcome) -> String {
    match outcome {
        Ok(value) => format!("{:.2}", value),
        Err(e) => format!("Error: {}", e),
    }
}

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("    <title>Electricity Bill Prediction</title>\n");
    let _ = writeln!(html, "    <style>{}    </style>", STYLE);
    html.push_str("</head>\n<body>\n<div class=\"card\">\n");
    html.push_str("    <h1>&#9889; Electricity Bill Prediction &#9889;</h1>\n");
    html.push_str(
        "    <p class=\"subtitle\">Enter appliance usage and details below to predict your monthly electricity bill.</p>\n",
    );

    html.push_str("    <form method=\"POST\" action=\"/\">\n");
    for field in FIELD_NAMES {
        let previous = ctx
            .submitted
            .and_then(|form| form.get(*field))
            .map(String::as_str);
        render_field(&mut html, field, ctx.encoders, previous);
    }
    html.push_str(
        "        <div class=\"actions\"><button type=\"submit\">Predict &#9889;</button></div>\n",
    );
    html.push_str("    </form>\n");

    if let Some(outcome) = ctx.outcome {
        render_banner(&mut html, outcome);
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_field(html: &mut String, field: &str, encoders: &EncoderSet, previous: Option<&str>) {
    let name = escape_html(field);
    html.push_str("        <div>\n");
    let _ = writeln!(html, "            <label>{}</label>", name);

    match encoders.get(field).filter(|_| is_categorical(field)) {
        Some(encoder) => render_select(html, &name, encoder, previous),
        None => {
            let value = previous
                .map(|v| format!(" value=\"{}\"", escape_html(v)))
                .unwrap_or_default();
            let _ = writeln!(
                html,
                "            <input type=\"number\" step=\"any\" name=\"{}\"{} required>",
                name, value
            );
        }
    }

    html.push_str("        </div>\n");
}

fn render_select(html: &mut String, name: &str, encoder: &LabelEncoder, previous: Option<&str>) {
    let _ = writeln!(html, "            <select name=\"{}\" required>", name);
    for (index, class) in encoder.classes().iter().enumerate() {
        let selected = match previous {
            Some(p) if p.trim() == index.to_string() => " selected",
            _ => "",
        };
        let _ = writeln!(
            html,
            "                <option value=\"{}\"{}>{}</option>",
            index,
            selected,
            escape_html(class)
        );
    }
    html.push_str("            </select>\n");
}

fn render_banner(html: &mut String, outcome: &PredictionOutcome) {
    let text = escape_html(&format_outcome(outcome));
    match outcome {
        Ok(_) => {
            let _ = writeln!(
                html,
                "    <div id=\"result\" class=\"result success\">&#128161; Predicted Electricity Bill: &#8377; {}</div>",
                text
            );
        }
        Err(_) => {
            let _ = writeln!(html, "    <div id=\"result\" class=\"result error\">{}</div>", text);
        }
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
