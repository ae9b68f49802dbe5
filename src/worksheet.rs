use std::{fmt, fs, path::Path};

use tracing::{debug, info};

use crate::{
    ast::Interpretation,
    error::Error,
    interpreter::{evaluator::core::eval, parse},
};

/// The per-interpretation sums over every line of a worksheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum under [`Interpretation::Swapped`].
    pub swapped:        u64,
    /// Sum under [`Interpretation::AdditionFirst`].
    pub addition_first: u64,
}

impl Totals {
    /// Returns the total for one interpretation.
    #[must_use]
    pub const fn get(&self, interpretation: Interpretation) -> u64 {
        match interpretation {
            Interpretation::Swapped => self.swapped,
            Interpretation::AdditionFirst => self.addition_first,
        }
    }

    fn get_mut(&mut self, interpretation: Interpretation) -> &mut u64 {
        match interpretation {
            Interpretation::Swapped => &mut self.swapped,
            Interpretation::AdditionFirst => &mut self.addition_first,
        }
    }
}

/// Two lines, swapped total first.
impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.swapped)?;
        write!(f, "{}", self.addition_first)
    }
}

/// Evaluates one expression under one interpretation.
///
/// `line` is the 1-based line number attached to any error.
///
/// # Errors
/// [`Error::Parse`] for malformed input, [`Error::Runtime`] on overflow.
pub fn evaluate_line(source: &str, interpretation: Interpretation, line: usize) -> Result<u64, Error> {
    let expr = parse(source, interpretation).map_err(|source| Error::Parse { line, source })?;
    let value = eval(&expr).map_err(|source| Error::Runtime { line, source })?;
    debug!(line, %interpretation, source, value, "evaluated");
    Ok(value)
}

/// Sums every non-blank line of `text` under both interpretations.
///
/// Lines are trimmed before evaluation and blank lines are skipped wherever
/// they appear. The first malformed line aborts the whole sum.
///
/// # Errors
/// Any error from [`evaluate_line`], or [`Error::TotalOverflow`].
///
/// # Example
/// ```
/// use swapcalc::worksheet::sum_source;
///
/// let totals = sum_source("2 + 3\n2 * 3\n").unwrap();
/// assert_eq!((totals.swapped, totals.addition_first), (11, 11));
/// ```
pub fn sum_source(text: &str) -> Result<Totals, Error> {
    let mut totals = Totals::default();
    let mut evaluated = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let source = raw.trim();
        if source.is_empty() {
            continue;
        }
        let line = index + 1;

        for interpretation in Interpretation::ALL {
            let value = evaluate_line(source, interpretation, line)?;
            let total = totals.get_mut(interpretation);
            *total = total.checked_add(value)
                          .ok_or(Error::TotalOverflow { interpretation, line })?;
        }
        evaluated += 1;
    }

    debug!(lines = evaluated, "worksheet summed");
    Ok(totals)
}

/// Reads a file and sums it with [`sum_source`].
///
/// # Errors
/// [`Error::Io`] if the file cannot be read as UTF-8 text, otherwise any
/// error from [`sum_source`].
pub fn sum_file(path: impl AsRef<Path>) -> Result<Totals, Error> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading worksheet");

    let text = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(),
                                                                      source })?;
    let totals = sum_source(&text)?;

    info!(swapped = totals.swapped,
          addition_first = totals.addition_first,
          "totals computed");
    Ok(totals)
}
