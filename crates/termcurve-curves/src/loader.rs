//! Tabular rate release loader.
//!
//! Rows arrive already split into fields. Row 0 is the header and is
//! ignored; every other row is `date, v_1, ..., v_k` with `v_i` belonging
//! to the catalog's `i`-th maturity.
//!
//! Date selection is a fold over the rows:
//!
//! - with a date filter, scanning stops at the first row whose date
//!   matches; the date is found only if that row yields an observation
//! - without a filter, the last row that yields an observation wins
//!
//! Bad input never aborts a load. Unusable rows and cells are skipped,
//! logged at `warn`, and recorded in the [`LoadReport`]. Rows with fewer
//! value columns than the catalog are still used but are counted as short.

use tracing::{debug, warn};

use crate::catalog::MaturityCatalog;
use crate::curve::YieldCurve;
use crate::error::{CurveError, CurveResult};
use crate::observation::YieldObservation;

/// Diagnostics collected while scanning a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Data rows examined (header excluded).
    pub rows_read: usize,
    /// Rows skipped as malformed.
    pub rows_skipped: usize,
    /// Individual yield cells skipped.
    pub cells_skipped: usize,
    /// Rows with fewer value columns than the catalog.
    pub short_rows: usize,
    /// Recovered errors in scan order.
    pub issues: Vec<CurveError>,
}

impl LoadReport {
    /// True if nothing was skipped and every row was complete.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.short_rows == 0
    }

    fn note_short_row(&mut self, line: usize, columns: usize, expected: usize) {
        warn!(line, columns, expected, "row has fewer yield columns than the catalog");
        self.short_rows += 1;
    }

    fn skip_row(&mut self, line: usize, reason: &str) {
        warn!(line, reason, "skipping malformed row");
        self.rows_skipped += 1;
        self.issues.push(CurveError::malformed_row(line, reason));
    }

    fn skip_cell(&mut self, line: usize, label: &str, value: &str) {
        warn!(line, label, value, "skipping unparsable yield cell");
        self.cells_skipped += 1;
        self.issues.push(CurveError::unparsable_cell(line, label, value));
    }
}

/// Result of a load: the curve, whether a date was found, and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    curve: YieldCurve,
    found: bool,
    filter: String,
    report: LoadReport,
}

impl LoadOutcome {
    /// True if a row was selected. A selected row always carries at least
    /// one observation.
    pub fn found(&self) -> bool {
        self.found
    }

    /// The loaded curve (empty when nothing matched).
    pub fn curve(&self) -> &YieldCurve {
        &self.curve
    }

    /// Consumes the outcome, returning the curve.
    pub fn into_curve(self) -> YieldCurve {
        self.curve
    }

    /// Scan diagnostics.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Converts a miss into [`CurveError::NoMatchingDate`].
    pub fn into_result(self) -> CurveResult<YieldCurve> {
        if self.found {
            Ok(self.curve)
        } else {
            Err(CurveError::no_matching_date(self.filter))
        }
    }
}

/// How one data row fared during a scan.
enum RowScan {
    /// The date is missing or does not match the filter.
    Unmatched,
    /// The date matches but the row yields no curve.
    Rejected,
    /// The date matches and the row yields a curve.
    Parsed(YieldCurve),
}

/// Builds [`YieldCurve`]s from tabular rate rows.
#[derive(Debug, Clone, Default)]
pub struct CurveLoader {
    catalog: MaturityCatalog,
}

impl CurveLoader {
    /// Creates a loader interpreting value columns with `catalog`.
    pub fn new(catalog: MaturityCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog used to interpret value columns.
    pub fn catalog(&self) -> &MaturityCatalog {
        &self.catalog
    }

    /// Loads the curve for one date.
    ///
    /// `date_filter` matches a row whose date equals it or starts with it; an
    /// empty filter is the same as `None`. The first matching row ends a
    /// filtered scan, even when none of its cells parse.
    pub fn load<I, R, S>(&self, rows: I, date_filter: Option<&str>) -> LoadOutcome
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let filter = date_filter.map(str::trim).filter(|f| !f.is_empty());
        let mut report = LoadReport::default();

        let selected = {
            let mut scans = rows
                .into_iter()
                .enumerate()
                .skip(1)
                .map(|(index, row)| self.parse_row(index + 1, row.as_ref(), filter, &mut report));

            match filter {
                Some(_) => scans
                    .find_map(|scan| match scan {
                        RowScan::Unmatched => None,
                        RowScan::Rejected => Some(None),
                        RowScan::Parsed(curve) => Some(Some(curve)),
                    })
                    .flatten(),
                None => scans
                    .filter_map(|scan| match scan {
                        RowScan::Parsed(curve) => Some(curve),
                        RowScan::Unmatched | RowScan::Rejected => None,
                    })
                    .last(),
            }
        };

        let found = selected.is_some();
        match &selected {
            Some(curve) => debug!(
                date = curve.date(),
                observations = curve.len(),
                rows_read = report.rows_read,
                "selected curve row"
            ),
            None => debug!(filter = filter.unwrap_or(""), "no curve row matched"),
        }

        LoadOutcome {
            curve: selected.unwrap_or_else(|| YieldCurve::empty("")),
            found,
            filter: filter.unwrap_or_default().to_string(),
            report,
        }
    }

    /// Parses one data row against the filter.
    fn parse_row<S: AsRef<str>>(
        &self,
        line: usize,
        fields: &[S],
        filter: Option<&str>,
        report: &mut LoadReport,
    ) -> RowScan {
        report.rows_read += 1;

        let date = fields.first().map_or("", |f| f.as_ref().trim());
        if date.is_empty() {
            report.skip_row(line, "missing date field");
            return RowScan::Unmatched;
        }
        if filter.is_some_and(|f| !date.starts_with(f)) {
            return RowScan::Unmatched;
        }

        let values = &fields[1..];
        if values.is_empty() {
            report.skip_row(line, "no yield columns");
            return RowScan::Rejected;
        }
        if values.len() < self.catalog.len() {
            report.note_short_row(line, values.len(), self.catalog.len());
        }

        let mut observations = Vec::with_capacity(values.len().min(self.catalog.len()));
        for (tenor, cell) in self.catalog.tenors().iter().zip(values) {
            let raw = cell.as_ref().trim();
            match raw
                .parse::<f64>()
                .ok()
                .and_then(|y| YieldObservation::new(tenor.years, y, tenor.label.as_str()).ok())
            {
                Some(observation) => observations.push(observation),
                None => report.skip_cell(line, &tenor.label, raw),
            }
        }

        if observations.is_empty() {
            report.skip_row(line, "no parsable yields");
            return RowScan::Rejected;
        }

        match YieldCurve::new(date, observations) {
            Ok(curve) => RowScan::Parsed(curve),
            Err(e) => {
                report.skip_row(line, &e.to_string());
                RowScan::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [&str; 12] = [
        "date", "1MO", "3MO", "6MO", "1Y", "2Y", "3Y", "5Y", "7Y", "10Y", "20Y", "30Y",
    ];

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(ToString::to_string).collect()
    }

    fn table() -> Vec<Vec<String>> {
        vec![
            row(&HEADER),
            row(&[
                "2025-09-16", "4.20", "4.02", "3.85", "3.66", "3.52", "3.47", "3.61", "3.80", "4.06",
                "4.64", "4.67",
            ]),
            row(&[
                "2025-09-17", "4.18", "4.00", "3.83", "3.64", "3.55", "3.50", "3.64", "3.83", "4.09",
                "4.66", "4.68",
            ]),
        ]
    }

    #[test]
    fn test_unfiltered_last_row_wins() {
        let outcome = CurveLoader::default().load(table(), None);
        assert!(outcome.found());
        assert_eq!(outcome.curve().date(), "2025-09-17");
        assert_eq!(outcome.curve().len(), 11);
        assert_eq!(outcome.report().rows_read, 2);
        assert!(outcome.report().is_clean());
    }

    #[test]
    fn test_filtered_first_match_stops() {
        let mut rows = table();
        rows.insert(
            2,
            row(&["2025-09-16", "9.99", "9.99", "9.99", "9.99", "9.99"]),
        );

        let outcome = CurveLoader::default().load(rows, Some("2025-09-16"));
        assert!(outcome.found());
        assert_eq!(outcome.curve().date(), "2025-09-16");
        assert_eq!(outcome.curve().yield_at(10.0), 4.06);
        assert_eq!(outcome.report().rows_read, 1);
    }

    #[test]
    fn test_prefix_filter() {
        let outcome = CurveLoader::default().load(table(), Some("2025-09"));
        assert_eq!(outcome.curve().date(), "2025-09-16");

        let blank = CurveLoader::default().load(table(), Some("   "));
        assert_eq!(blank.curve().date(), "2025-09-17");
    }

    #[test]
    fn test_no_match() {
        let outcome = CurveLoader::default().load(table(), Some("2024-01-02"));
        assert!(!outcome.found());
        assert!(outcome.curve().is_empty());
        assert_eq!(
            outcome.into_result().unwrap_err(),
            CurveError::no_matching_date("2024-01-02")
        );
    }

    #[test]
    fn test_unparsable_cells_skipped_individually() {
        let rows = vec![
            row(&HEADER),
            row(&["2025-09-17", "ND", "4.00", "", "3.64", "abc", "3.50"]),
        ];
        let outcome = CurveLoader::default().load(rows, None);

        let labels: Vec<&str> = outcome.curve().observations().iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["3MO", "1Y", "3Y"]);
        assert_eq!(outcome.report().cells_skipped, 3);
        assert_eq!(
            outcome.report().issues[0],
            CurveError::unparsable_cell(2, "1MO", "ND")
        );
    }

    #[test]
    fn test_non_finite_cells_rejected() {
        let rows = vec![row(&HEADER), row(&["2025-09-17", "NaN", "inf", "3.83"])];
        let outcome = CurveLoader::default().load(rows, None);
        assert_eq!(outcome.curve().len(), 1);
        assert_eq!(outcome.report().cells_skipped, 2);
    }

    #[test]
    fn test_malformed_rows_do_not_abort() {
        let rows = vec![
            row(&HEADER),
            row(&["2025-09-16", "4.20", "4.02"]),
            row(&["2025-09-17"]),
            row(&["", "4.1", "4.2"]),
            row(&["2025-09-18", "ND", "ND"]),
        ];
        let outcome = CurveLoader::default().load(rows, None);

        // the last parsable row wins even though later rows are broken
        assert!(outcome.found());
        assert_eq!(outcome.curve().date(), "2025-09-16");
        assert_eq!(outcome.report().rows_skipped, 3);
        assert!(matches!(
            outcome.report().issues[0],
            CurveError::MalformedRow { line: 3, .. }
        ));
    }

    #[test]
    fn test_all_cells_bad_is_not_found() {
        let rows = vec![row(&HEADER), row(&["2025-09-17", "ND", "ND", "ND"])];
        let outcome = CurveLoader::default().load(rows, Some("2025-09-17"));
        assert!(!outcome.found());
        assert!(outcome.curve().is_empty());
    }

    #[test]
    fn test_filtered_scan_stops_at_unparsable_match() {
        let rows = vec![
            row(&["date", "1MO", "3MO", "6MO"]),
            row(&["2025-09-16", "ND", "ND", "ND"]),
            row(&["2025-09-17", "4.1", "4.0", "3.9"]),
        ];
        let outcome = CurveLoader::default().load(rows.clone(), Some("2025-09"));
        assert!(!outcome.found());
        assert!(outcome.curve().is_empty());
        assert_eq!(outcome.report().rows_read, 1);
        assert_eq!(outcome.report().rows_skipped, 1);

        // without a filter the bad row is passed over
        let outcome = CurveLoader::default().load(rows, None);
        assert!(outcome.found());
        assert_eq!(outcome.curve().date(), "2025-09-17");
    }

    #[test]
    fn test_short_rows_are_used_and_reported() {
        let rows = vec![
            row(&HEADER),
            row(&["2025-09-17", "4.18", "4.00", "3.83", "3.64", "3.55"]),
        ];
        let outcome = CurveLoader::default().load(rows, None);
        assert!(outcome.found());
        assert_eq!(outcome.curve().len(), 5);
        assert_eq!(outcome.report().short_rows, 1);
        assert!(outcome.report().issues.is_empty());
        assert!(!outcome.report().is_clean());
    }

    #[test]
    fn test_extra_columns_ignored() {
        let catalog = MaturityCatalog::new(vec![("2Y", 2.0), ("10Y", 10.0)]).unwrap();
        let rows = vec![row(&["date", "2Y", "10Y"]), row(&["2025-09-17", "3.52", "4.06", "9.9"])];
        let outcome = CurveLoader::new(catalog).load(rows, None);
        assert_eq!(outcome.curve().len(), 2);
        assert!(outcome.report().is_clean());
    }

    #[test]
    fn test_header_only_table() {
        let outcome = CurveLoader::default().load(vec![row(&HEADER)], None);
        assert!(!outcome.found());
        assert_eq!(outcome.report().rows_read, 0);

        let nothing: Vec<Vec<String>> = Vec::new();
        assert!(!CurveLoader::default().load(nothing, None).found());
    }
}
