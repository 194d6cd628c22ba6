use planex_fs::{join_lines, split_lines};
use planex_stanza::{END_MARKER, INCLUDE_LINE, START_MARKER, StanzaTemplate, update_lines};
use proptest::prelude::*;

/// Arbitrary Makefile-ish lines that are never marker lines.
fn user_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9#:=?$() \t._-]{0,40}\n"
}

fn user_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(user_line(), 0..12)
}

fn update(content: &str) -> String {
    let lines = split_lines(content);
    join_lines(&update_lines(&lines, &StanzaTemplate::default()).unwrap())
}

proptest! {
    #[test]
    fn test_update_preserves_prefix_and_suffix(
        before in user_lines(),
        payload in user_lines(),
        after in user_lines(),
    ) {
        let prefix = format!("{}{START_MARKER}", before.concat());
        let suffix = format!("{END_MARKER}{}", after.concat());
        let input = format!("{prefix}{}{suffix}", payload.concat());

        let output = update(&input);

        prop_assert_eq!(output, format!("{prefix}{INCLUDE_LINE}{suffix}"));
    }

    #[test]
    fn test_update_is_idempotent(
        before in user_lines(),
        payload in user_lines(),
        after in user_lines(),
    ) {
        let input = format!(
            "{}{START_MARKER}{}{END_MARKER}{}",
            before.concat(),
            payload.concat(),
            after.concat()
        );

        let once = update(&input);
        let twice = update(&once);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_surrounding_lines_survive_repeated_updates(
        before in user_lines(),
        after in user_lines(),
        runs in 1usize..5,
    ) {
        let mut content = format!(
            "{}{START_MARKER}{END_MARKER}{}",
            before.concat(),
            after.concat()
        );
        for _ in 0..runs {
            content = update(&content);
        }

        let lines = split_lines(&content);
        prop_assert_eq!(&lines[..before.len()], &before[..]);
        prop_assert_eq!(&lines[lines.len() - after.len()..], &after[..]);
        prop_assert_eq!(lines.len(), before.len() + after.len() + 3);
    }
}
