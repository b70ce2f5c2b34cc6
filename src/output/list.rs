//! Flat list output formatter: one path per line, nothing else.

use crate::config::Config;
use crate::data::Record;

/// Renders one path per record, relative or absolute per `config.relative`.
pub fn render(records: &[Record], config: &Config) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.display_path(config.relative).to_string_lossy());
        out.push('\n');
    }
    out
}
