use crate::error::SplitResult;
use crate::page_range::{expand_named_ranges, expand_page_set, parse_page_ranges, PageRange};
use crate::pdf::PdfDocument;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Placed between the prefix and the range label in multi-output file names.
pub const LABEL_SEPARATOR: &str = "_paginas_";

/// Extract `ranges` from `input` into the single file `output`.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    ranges: &str,
    output: Q,
) -> SplitResult<()> {
    let ranges = parse_page_ranges(ranges)?;

    let output = ensure_pdf_extension(output.as_ref());
    let extracted = split_single(input, &ranges, &output)?;

    println!("Extracted {} page(s)", extracted);
    println!("Done! PDF created: {}", output.display());
    Ok(())
}

/// Extract every range of `ranges` from `input` into a file of its own.
pub fn run_multi<P: AsRef<Path>>(
    input: P,
    ranges: &str,
    prefix: Option<&str>,
) -> SplitResult<()> {
    let written = split_multiple(input, ranges, prefix)?;

    println!("Created {} file(s):", written.len());
    for path in &written {
        println!("  - {}", path.display());
    }
    Ok(())
}

/// Write every page selected by `ranges` to `output`, once each and in
/// ascending page order, returning the number of pages written.
///
/// Nothing is written unless every range is inside the document.
pub fn split_single<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    ranges: &[PageRange],
    output: Q,
) -> SplitResult<usize> {
    let doc = open_source(input.as_ref())?;
    let pages = expand_page_set(ranges, doc.page_count())?;
    write_pages(&doc, &pages, output.as_ref())?;
    Ok(pages.len())
}

/// Write one file per range token, named
/// `{prefix}_paginas_{label}.pdf`, and return the paths in range order.
///
/// Every range is checked against the document before the first file is
/// written, so a bad range leaves no output behind. A token repeated with
/// the same text names the same file and is written once.
pub fn split_multiple<P: AsRef<Path>>(
    input: P,
    ranges: &str,
    prefix: Option<&str>,
) -> SplitResult<Vec<PathBuf>> {
    let input = input.as_ref();
    let ranges = parse_page_ranges(ranges)?;
    let doc = open_source(input)?;

    let mut ranges = expand_named_ranges(&ranges, doc.page_count())?;
    let mut labels = HashSet::new();
    ranges.retain(|range| {
        let first = labels.insert(range.label.clone());
        if !first {
            warn!("Range {} given more than once, writing it once", range.label);
        }
        first
    });

    let prefix = match prefix {
        Some(prefix) => prefix.to_string(),
        None => default_prefix(input),
    };

    let mut written = Vec::with_capacity(ranges.len());
    for range in &ranges {
        let output = multi_output_path(&prefix, &range.label);
        info!("Range {}", range.label);
        write_pages(&doc, &range.indices, &output)?;
        written.push(output);
    }

    Ok(written)
}

fn open_source(input: &Path) -> SplitResult<PdfDocument> {
    info!("Reading file: {}", input.display());
    let doc = PdfDocument::open(input)?;
    info!("Total pages in the PDF: {}", doc.page_count());
    Ok(doc)
}

fn write_pages(doc: &PdfDocument, indices: &[i64], output: &Path) -> SplitResult<()> {
    info!("Extracting {} page(s) from {}", indices.len(), doc.path);
    let mut new_doc = doc.extract_pages(indices)?;

    info!("Saving file: {}", output.display());
    PdfDocument::save(&mut new_doc, output)?;
    Ok(())
}

/// Append `.pdf` unless the path already ends in it (in any case).
pub fn ensure_pdf_extension(path: &Path) -> PathBuf {
    let has_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if has_pdf {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".pdf");
    PathBuf::from(name)
}

/// The input's file name without its extension.
pub fn default_prefix(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string()
}

pub fn multi_output_path(prefix: &str, label: &str) -> PathBuf {
    PathBuf::from(format!("{}{}{}.pdf", prefix, LABEL_SEPARATOR, label))
}
