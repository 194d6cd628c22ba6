use planex_stanza::{StanzaTemplate, render_new};

#[test]
fn snapshot_new_makefile_lines() {
    let content = render_new(&StanzaTemplate::default());
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    insta::assert_snapshot!(format!("{:?}", lines), @r###"[".PHONY: default\n", "default: rpms\n", "DIST?=.fc21\n", "# FETCH_EXTRA_FLAGS=--no-package-name-check\n", "# DEPEND_EXTRA_FLAGS=--no-package-name-check\n", "# Start generated by planex-init\n", "include $(shell planex-init --rules)\n", "# End generated by planex-init\n"]"###);
}

#[test]
fn test_new_makefile_is_recognised() {
    let template = StanzaTemplate::default();
    let content = render_new(&template);
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let stanza = planex_stanza::Stanza::locate(&lines, &template).unwrap();
    assert_eq!(stanza.start(), 5);
    assert_eq!(stanza.end(), 7);
    assert_eq!(stanza.payload(&lines), &[template.include_line.as_str()]);
}
