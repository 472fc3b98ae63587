use serde::Serialize;
use std::io::{self, Write};

use crate::i18n::{status_line, Strings};
use crate::rename::ExecutionReport;
use crate::view::{Facet, PageView, PreviewRow};

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, to: usize) -> String {
    let mut out = s.to_string();
    out.extend(std::iter::repeat(' ').take(to.saturating_sub(width(s))));
    out
}

/// Display the extension tags, active ones in brackets
pub fn display_facets(facets: &[Facet], strings: &Strings, writer: &mut impl Write) -> io::Result<()> {
    let tags: Vec<String> = facets
        .iter()
        .map(|f| {
            if f.active {
                format!("[{}]", f.label())
            } else {
                f.label().to_string()
            }
        })
        .collect();

    if tags.is_empty() {
        writeln!(writer, "{}: -", strings.filter)
    } else {
        writeln!(writer, "{}: {}", strings.filter, tags.join("  "))
    }
}

fn write_rows(rows: &[PreviewRow], strings: &Strings, writer: &mut impl Write) -> io::Result<()> {
    let old_w = rows
        .iter()
        .map(|r| width(&r.name))
        .chain(std::iter::once(width(strings.old)))
        .max()
        .unwrap_or(0);
    let new_w = rows
        .iter()
        .map(|r| width(&r.new_name))
        .chain(std::iter::once(width(strings.new)))
        .max()
        .unwrap_or(0);

    writeln!(
        writer,
        "  {}  {}  {}",
        pad(strings.old, old_w),
        pad(strings.new, new_w),
        strings.time
    )?;

    for row in rows {
        let marker = if row.invalid.is_some() {
            "!"
        } else if row.changed {
            "*"
        } else {
            " "
        };
        writeln!(
            writer,
            "{} {}  {}  {}",
            marker,
            pad(&row.name, old_w),
            pad(&row.new_name, new_w),
            row.modified
        )?;
    }

    Ok(())
}

/// Display one page of the preview table with page info and status line
pub fn display_page(view: &PageView, strings: &Strings, writer: &mut impl Write) -> io::Result<()> {
    if !view.rows.is_empty() {
        write_rows(&view.rows, strings, writer)?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "{} {} / {}    {}",
        strings.page,
        view.page,
        view.page_count,
        status_line(strings, view.total, view.filtered)
    )?;

    Ok(())
}

/// Display the full planned batch without touching the filesystem
pub fn display_dry_run(
    rows: &[PreviewRow],
    mode: &str,
    strings: &Strings,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "{}: {}", strings.mode, mode)?;
    writeln!(writer, "Files:      {}", rows.len())?;
    writeln!(writer)?;

    if rows.is_empty() {
        writeln!(writer, "{}", strings.nothing)?;
        return Ok(());
    }

    writeln!(writer, "Planned changes:")?;
    writeln!(writer)?;

    let changing: Vec<&PreviewRow> = rows.iter().filter(|r| r.changed).collect();

    for (i, row) in changing.iter().enumerate() {
        writeln!(writer, "  {}. {}", i + 1, row.name)?;
        writeln!(writer, "     To:   {}", row.new_name)?;
        if let Some(reason) = &row.invalid {
            writeln!(writer, "     [!] Would be refused: {}", reason)?;
        }
        writeln!(writer)?;
    }

    let invalid = changing.iter().filter(|r| r.invalid.is_some()).count();

    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(writer, "  {} files would be renamed", changing.len())?;
    writeln!(writer, "  {} files unchanged", rows.len() - changing.len())?;
    if invalid > 0 {
        writeln!(writer, "  {} names are invalid", invalid)?;
    }
    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(
    report: &ExecutionReport,
    strings: &Strings,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    if report.is_success() {
        writeln!(writer, "{}", strings.done)?;
    }
    writeln!(writer, "Renamed {} files.", report.renamed.len())?;

    if report.skipped > 0 {
        writeln!(writer, "  {} files already had the target name.", report.skipped)?;
    }

    if !report.failures.is_empty() {
        writeln!(writer, "  {} files failed:", report.failures.len())?;
        for failure in &report.failures {
            writeln!(
                writer,
                "    {} -> {}: {}",
                failure.from, failure.to, failure.reason
            )?;
        }
    }

    Ok(())
}

/// Pretty JSON for scripting
pub fn display_json<T: Serialize>(value: &T, writer: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)
}
