//! Summary formatter
//!
//! Renders the filtered catalog subsets into the fixed German message posted
//! to Slack. The output uses Slack's mrkdwn conventions: `*bold*`,
//! `_emphasis_`, `<url|label>` links and `>` quote prefixes.

use crate::catalog::{DatasetRecord, RecentDatasets};

/// Prefix of the portal's search URL; the record title is appended with
/// whitespace percent-encoded.
const SEARCH_URL_PREFIX: &str = "https://daten.berlin.de/search/node/";

/// Placeholder for a missing date value in the rendered text.
const UNKNOWN_DATE: &str = "unbekannt";

/// Render the summary message for one filter pass.
pub fn render_summary(selected: &RecentDatasets, days: i64) -> String {
    let mut text = String::new();

    if selected.newest.is_empty() {
        text.push_str(&format!(
            "*Keine neuen Datensätze!*\nIn den letzten {days} Tagen wurden keine neuen \
             Datensätze im Berliner Datenportal veröffentlicht.\n"
        ));
    } else {
        text.push_str(&format!(
            "*Neue offene Datensätze!* :star:\nIn den letzten {days} Tagen wurden folgende \
             neue Datensätze im Berliner Datenportal veröffentlicht:\n"
        ));
        for record in &selected.newest {
            text.push_str(&format!(
                ">*{}*\n>{}\n>_{}_\n",
                title_link(record),
                record.display_author(),
                record.date_released.as_deref().unwrap_or(UNKNOWN_DATE),
            ));
        }
    }

    if selected.updated.is_empty() {
        text.push_str(&format!(
            "\nIn den letzten {days} Tagen wurden keine der bereits veröffentlichten \
             Datensätze im Berliner Datenportal geupdated."
        ));
    } else {
        text.push_str(&format!(
            "\n*Datensatz-Updates!*\nIn den letzten {days} Tagen wurden folgende bereits \
             veröffentlichte Datensätze geupdated:\n"
        ));
        for record in &selected.updated {
            text.push_str(&format!(
                ">*{}* _{} (Erstveröffentlichung: {})_\n",
                title_link(record),
                record.date_updated.as_deref().unwrap_or(UNKNOWN_DATE),
                record.date_released.as_deref().unwrap_or(UNKNOWN_DATE),
            ));
        }
    }

    text
}

/// Build the `<search-url|title>` link for a record.
fn title_link(record: &DatasetRecord) -> String {
    let title = record.display_title();
    format!("<{}{}|{}>", SEARCH_URL_PREFIX, encode_search_title(title), title)
}

/// Replace every whitespace character with `%20`, matching what the portal's
/// search URLs expect. No other characters are escaped.
fn encode_search_title(title: &str) -> String {
    let mut encoded = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_whitespace() {
            encoded.push_str("%20");
        } else {
            encoded.push(c);
        }
    }
    encoded
}
