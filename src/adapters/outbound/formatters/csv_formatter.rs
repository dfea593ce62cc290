use crate::conversion::domain::DependencyRecord;
use crate::ports::outbound::TableFormatter;
use crate::shared::Result;
use anyhow::Context;

/// Column headers, in output order
pub const CSV_HEADERS: [&str; 9] = [
    "Packages",
    "Current Version",
    "Latest Version",
    "Integrity",
    "Requires",
    "Dependencies",
    "hasDependencies",
    "Description",
    "License",
];

/// CsvFormatter adapter rendering the dependency table as CSV
///
/// Absent values become empty cells, booleans render as `True`/`False`
/// and list values render as a bracketed list of quoted strings in a single
/// cell (`['ms: 2.0.0', 'debug: ^4.0.0']`). Records end with `\n`.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn row(record: &DependencyRecord) -> [String; 9] {
        [
            record.name().to_string(),
            cell(record.current_version()),
            cell(record.latest_version()),
            cell(record.integrity()),
            record.requires().map(list_literal).unwrap_or_default(),
            record.dependencies().map(list_literal).unwrap_or_default(),
            bool_literal(record.has_dependencies()).to_string(),
            cell(record.description()),
            cell(record.license()),
        ]
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for CsvFormatter {
    fn format(&self, records: &[DependencyRecord]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(Vec::new());

        writer
            .write_record(CSV_HEADERS)
            .context("Failed to write CSV header")?;
        for record in records {
            writer
                .write_record(Self::row(record))
                .with_context(|| format!("Failed to write CSV row for '{}'", record.name()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn bool_literal(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Renders `items` as a bracketed list of quoted strings.
///
/// Strings are single-quoted unless they contain a single quote and no
/// double quote, in which case they are double-quoted. Backslashes and the
/// chosen quote character are backslash-escaped.
fn list_literal(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| quote_item(item)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote_item(item: &str) -> String {
    let quote = if item.contains('\'') && !item.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(item.len() + 2);
    out.push(quote);
    for c in item.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    out
}
