use assert_fs::prelude::*;
use planex_fs::{join_lines, read_lines, split_lines};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case("")]
#[case("\n")]
#[case("no newline")]
#[case("a\nb\nc\n")]
#[case("a\r\nb\r\n")]
#[case("tab\tline\n\n\ntrailing")]
fn test_split_join_is_identity(#[case] input: &str) {
    assert_eq!(join_lines(&split_lines(input)), input);
}

#[test]
fn test_read_lines_round_trips_through_disk() {
    let temp = assert_fs::TempDir::new().unwrap();
    let makefile = temp.child("Makefile");
    makefile.write_str("all:\n\techo hi\n").unwrap();

    let lines = read_lines(makefile.path()).unwrap();
    assert_eq!(lines.len(), 2);

    planex_fs::write_atomic(makefile.path(), join_lines(&lines).as_bytes()).unwrap();
    makefile.assert(predicate::str::diff("all:\n\techo hi\n"));
}
