use dioxus::prelude::*;
use serde_json::{Map, Value};
use crate::backend::participant::Participant;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: String,
    pub items: Vec<String>,
}

/// Rows for every field of the record the modal header does not already show.
pub fn detail_rows(participant: &Participant) -> Vec<DetailRow> {
    let mut rows = rows_from(&participant.profile.other);
    rows.extend(rows_from(&participant.details));
    rows
}

fn rows_from(fields: &Map<String, Value>) -> Vec<DetailRow> {
    fields
        .iter()
        .filter(|(key, _)| !key.starts_with('_'))
        .filter_map(|(key, value)| {
            let items = value_items(value);
            (!items.is_empty()).then(|| DetailRow { label: humanize_key(key), items })
        })
        .collect()
}

fn value_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(values) => values.iter().filter_map(format_value).collect(),
        Value::Object(map) => map
            .iter()
            .filter_map(|(k, v)| format_value(v).map(|v| format!("{}: {}", humanize_key(k), v)))
            .collect(),
        other => format_value(other).into_iter().collect(),
    }
}

pub fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(if *b { "Yes" } else { "No" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(values) => {
            let parts: Vec<String> = values.iter().filter_map(format_value).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .filter_map(|(k, v)| format_value(v).map(|v| format!("{}: {}", humanize_key(k), v)))
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
    }
}

/// `spokenLanguages` / `spoken_languages` -> "Spoken languages".
pub fn humanize_key(key: &str) -> String {
    let mut words = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for c in key.chars() {
        if c == '_' || c == '-' {
            if !words.ends_with(' ') && !words.is_empty() {
                words.push(' ');
            }
            prev_lower = false;
        } else if c.is_uppercase() {
            if prev_lower {
                words.push(' ');
            }
            words.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            words.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }

    let words = words.trim();
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn RecruitmentProfileInfo(participant: Participant) -> Element {
    let rows = detail_rows(&participant);

    rsx! {
        div { class: "profile-info card",
            if rows.is_empty() {
                p { class: "text-[var(--text-muted)]", "No further details provided." }
            }
            for row in rows {
                DetailRowView { key: "{row.label}", row: row.clone() }
            }
        }
    }
}

#[component]
fn DetailRowView(row: DetailRow) -> Element {
    let single = (row.items.len() == 1).then(|| row.items[0].clone());

    rsx! {
        div { class: "profile-info-row",
            h6 { class: "profile-info-label", "{row.label}" }
            if let Some(value) = single {
                p { class: "profile-info-value", "{value}" }
            } else {
                ul { class: "profile-info-list",
                    for item in row.items.iter() {
                        li { "{item}" }
                    }
                }
            }
        }
    }
}
