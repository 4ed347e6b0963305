//! Shared query parameter types for API handlers.

use std::num::IntErrorKind;

use casting_core::pagination::PageRequest;
use serde::Deserialize;

/// Pagination parameters (`?page=`), 1-based.
///
/// `page` is read leniently: missing, blank or non-numeric values mean page 1,
/// zero and negative numbers select an empty page, and numbers too large for a
/// page index saturate to the last one, which is empty as well.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page_request(&self) -> PageRequest {
        let Some(raw) = self.page.as_deref() else {
            return PageRequest::default();
        };
        match raw.trim().parse::<i64>() {
            Ok(n) if n < 1 => PageRequest::new(0),
            Ok(n) => PageRequest::new(u32::try_from(n).unwrap_or(u32::MAX)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => PageRequest::new(u32::MAX),
                IntErrorKind::NegOverflow => PageRequest::new(0),
                _ => PageRequest::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(raw: &str) -> u32 {
        PageParams {
            page: Some(raw.to_string()),
        }
        .page_request()
        .page()
    }

    #[test]
    fn missing_page_defaults_to_first() {
        assert_eq!(PageParams::default().page_request(), PageRequest::new(1));
        assert_eq!(page("3"), 3);
    }

    #[test]
    fn unreadable_page_falls_back_to_first() {
        assert_eq!(page(""), 1);
        assert_eq!(page("two"), 1);
        assert_eq!(page("1.5"), 1);
    }

    #[test]
    fn non_positive_page_is_empty() {
        assert_eq!(page("0"), 0);
        assert_eq!(page("-1"), 0);
        assert_eq!(page("-99999999999999999999"), 0);
    }

    #[test]
    fn huge_page_saturates() {
        assert_eq!(page("4294967296"), u32::MAX);
        assert_eq!(page("99999999999999999999999"), u32::MAX);
        assert_eq!(PageRequest::new(u32::MAX).limit(), 10);
    }
}
