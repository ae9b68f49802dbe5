use std::{fs, io::Write};

use swapcalc::{Error, Interpretation, Totals, evaluate, sum_file, sum_source};
use walkdir::WalkDir;

fn assert_values(src: &str, swapped: u64, addition_first: u64) {
    assert_eq!(evaluate(src, Interpretation::Swapped).unwrap_or_else(|e| panic!("{src}: {e}")),
               swapped,
               "swapped value of {src:?}");
    assert_eq!(evaluate(src, Interpretation::AdditionFirst).unwrap_or_else(|e| panic!("{src}: {e}")),
               addition_first,
               "addition-first value of {src:?}");
}

fn assert_failure(src: &str) {
    for interpretation in Interpretation::ALL {
        if evaluate(src, interpretation).is_ok() {
            panic!("{src:?} evaluated under {interpretation} but was expected to fail")
        }
    }
}

#[test]
fn fixtures_match_expected_totals() {
    let mut count = 0;

    for entry in WalkDir::new("tests/fixtures").into_iter()
                                               .filter_map(Result::ok)
                                               .filter(|e| {
                                                   e.path()
                                                    .extension()
                                                    .is_some_and(|ext| ext == "txt")
                                               })
    {
        let path = entry.path();
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        let totals = sum_file(path).unwrap_or_else(|e| panic!("{path:?} failed: {e}"));
        assert_eq!(format!("{totals}\n"), expected, "totals for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No fixtures found in tests/fixtures");
}

#[test]
fn plus_and_star_swap_under_swapped() {
    for a in [0, 1, 2, 7, 13, 250] {
        for b in [0, 1, 3, 9, 1000] {
            assert_eq!(evaluate(&format!("{a} + {b}"), Interpretation::Swapped).unwrap(), a * b);
            assert_eq!(evaluate(&format!("{a} * {b}"), Interpretation::Swapped).unwrap(), a + b);
        }
    }
}

#[test]
fn addition_binds_tighter_under_addition_first() {
    for (a, b, c) in [(0, 0, 0), (1, 2, 3), (4, 0, 5), (11, 7, 2), (100, 1, 100)] {
        assert_eq!(evaluate(&format!("{a} + {b} * {c}"), Interpretation::AdditionFirst).unwrap(),
                   (a + b) * c);
        assert_eq!(evaluate(&format!("{a} * {b} + {c}"), Interpretation::AdditionFirst).unwrap(),
                   a * (b + c));
    }
}

#[test]
fn concrete_scenarios() {
    assert_values("2 + 3", 6, 5);
    assert_values("2 * 3", 5, 6);
    assert_values("1 + 2 * 3 + 4 * 5 + 6", 150, 231);
    assert_values("5 + 9 * 8 * 7 + 3", 180, 1120);
    assert_values("1+2*3", 5, 9);
}

#[test]
fn single_operand_is_its_own_value() {
    assert_values("0", 0, 0);
    assert_values("  42\t", 42, 42);
    assert_values("(((9)))", 9, 9);
}

#[test]
fn parenthesised_groups() {
    assert_values("1 + (2 * 3) + (4 * (5 + 6))", 170, 51);
    assert_values("2 * 3 + (4 * 5)", 45, 46);
}

#[test]
fn malformed_expressions_fail() {
    assert_failure("");
    assert_failure("2 +");
    assert_failure("+ 2");
    assert_failure("2 3");
    assert_failure("2 - 3");
    assert_failure("(2 + 3");
    assert_failure("2 + 3)");
    assert_failure("()");
    assert_failure("x * 2");
}

#[test]
fn two_line_file_prints_both_totals() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2 + 3").unwrap();
    writeln!(file, "2 * 3").unwrap();

    let totals = sum_file(file.path()).unwrap();
    assert_eq!(totals,
               Totals { swapped:        11,
                        addition_first: 11, });
    assert_eq!(totals.to_string(), "11\n11");
}

#[test]
fn summing_is_idempotent() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "1 + 2 * 3 + 4 * 5 + 6\n2 * 3 + 4\n\n").unwrap();

    let first = sum_file(file.path()).unwrap();
    let second = sum_file(file.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, sum_source(&fs::read_to_string(file.path()).unwrap()).unwrap());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    match sum_file(&missing) {
        Err(Error::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn malformed_file_fails_the_whole_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "2 + 3\n2 ^ 3\n2 * 3\n").unwrap();

    let err = sum_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }), "{err:?}");
    assert_eq!(err.to_string(), "Error on line 2");
    let cause = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(cause.as_deref(), Some("Unexpected character '^' at column 2."));
}

#[test]
fn empty_file_sums_to_zero() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert_eq!(sum_file(file.path()).unwrap(), Totals::default());
}
