//! Markdown export of the corpus
//!
//! Renders every record as a question heading followed by its answer, grouped
//! under the page it was found on. Pages appear in the order they first
//! contributed a record.

use crate::corpus::FaqRecord;
use crate::output::OutputResult;
use std::path::Path;

/// Writes the markdown rendering of `records` to `output_path`
///
/// # Arguments
///
/// * `records` - The corpus records, in corpus order
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(OutputError)` - Failed to write summary
pub fn generate_markdown_summary(records: &[FaqRecord], output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(records);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, markdown)?;

    tracing::info!(
        "Wrote markdown summary of {} FAQs to {}",
        records.len(),
        output_path.display()
    );
    Ok(())
}

/// Formats the corpus as markdown
pub fn format_markdown_summary(records: &[FaqRecord]) -> String {
    let mut md = String::new();

    md.push_str("# FAQ Summary\n\n");

    let groups = group_by_source(records);
    md.push_str(&format!(
        "- **Total FAQs**: {}\n- **Source Pages**: {}\n\n",
        records.len(),
        groups.len()
    ));

    for (source, items) in groups {
        md.push_str(&format!("## {}\n\n", source));
        for record in items {
            md.push_str(&format!("### {}\n\n", record.question));
            md.push_str(&record.answer);
            md.push_str("\n\n");
        }
    }

    md
}

fn group_by_source(records: &[FaqRecord]) -> Vec<(&str, Vec<&FaqRecord>)> {
    let mut groups: Vec<(&str, Vec<&FaqRecord>)> = Vec::new();
    for record in records {
        match groups
            .iter_mut()
            .find(|(source, _)| *source == record.source_url)
        {
            Some((_, items)) => items.push(record),
            None => groups.push((record.source_url.as_str(), vec![record])),
        }
    }
    groups
}
