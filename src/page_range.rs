use crate::error::{SplitError, SplitResult};
use std::collections::BTreeSet;

/// One comma-separated token of a range specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRange {
    /// The token as written, surrounding whitespace removed
    pub label: String,
    pub start: u32,
    pub end: Option<u32>,
}

/// A token paired with the zero-based pages it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRange {
    pub label: String,
    pub indices: Vec<i64>,
}

impl PageRange {
    /// Parse a page range specification like "1-5" or "7"
    pub fn parse(s: &str) -> SplitResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SplitError::parse(s, "empty page range"));
        }

        if let Some((start_str, end_str)) = s.split_once('-') {
            let start = parse_page_number(s, start_str, "start")?;
            let end = parse_page_number(s, end_str, "end")?;

            if start > end {
                return Err(SplitError::parse(
                    s,
                    format!("start page {} is after end page {}", start, end),
                ));
            }

            Ok(PageRange {
                label: s.to_string(),
                start,
                end: Some(end),
            })
        } else {
            let page = parse_page_number(s, s, "page")?;
            Ok(PageRange {
                label: s.to_string(),
                start: page,
                end: None,
            })
        }
    }

    /// Expand this range into zero-based page indices, ascending.
    ///
    /// Bounds are checked before anything is allocated, so a range far past
    /// the end of the document fails without being materialized.
    pub fn expand(&self, total_pages: usize) -> SplitResult<Vec<i64>> {
        let end = self.end.unwrap_or(self.start);

        if self.start == 0 {
            return Err(SplitError::Range {
                page: 0,
                total: total_pages,
            });
        }

        if end as usize > total_pages {
            let first_missing = (self.start as usize).max(total_pages + 1);
            return Err(SplitError::Range {
                page: first_missing as i64,
                total: total_pages,
            });
        }

        Ok((self.start..=end).map(|page| i64::from(page) - 1).collect())
    }
}

fn parse_page_number(token: &str, s: &str, what: &str) -> SplitResult<u32> {
    let s = s.trim();
    if s.is_empty() {
        return Err(SplitError::parse(token, format!("missing {} page", what)));
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SplitError::parse(
            token,
            format!("invalid page number: {}", s),
        ));
    }
    s.parse::<u32>()
        .map_err(|_| SplitError::parse(token, format!("page number too large: {}", s)))
}

/// Parse a comma-separated list of page ranges like "1-5,10,15-20"
pub fn parse_page_ranges(s: &str) -> SplitResult<Vec<PageRange>> {
    s.split(',').map(PageRange::parse).collect()
}

/// Merge every range into one ascending, duplicate-free list of zero-based
/// indices.
pub fn expand_page_set(ranges: &[PageRange], total_pages: usize) -> SplitResult<Vec<i64>> {
    let mut pages = BTreeSet::new();
    for range in ranges {
        pages.extend(range.expand(total_pages)?);
    }
    Ok(pages.into_iter().collect())
}

/// Keep each range separate, in input order, labelled by its own text.
pub fn expand_named_ranges(
    ranges: &[PageRange],
    total_pages: usize,
) -> SplitResult<Vec<NamedRange>> {
    ranges
        .iter()
        .map(|range| {
            Ok(NamedRange {
                label: range.label.clone(),
                indices: range.expand(total_pages)?,
            })
        })
        .collect()
}
