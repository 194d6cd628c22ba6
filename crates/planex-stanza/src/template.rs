//! The literal lines making up a generated Makefile.

/// First line of the managed stanza.
pub const START_MARKER: &str = "# Start generated by planex-init\n";

/// Last line of the managed stanza.
pub const END_MARKER: &str = "# End generated by planex-init\n";

/// The single payload line written between the markers.
pub const INCLUDE_LINE: &str = "include $(shell planex-init --rules)\n";

/// Boilerplate written above the stanza when a Makefile is first created.
pub const DEFAULT_PREAMBLE: [&str; 5] = [
    ".PHONY: default\n",
    "default: rpms\n",
    "DIST?=.fc21\n",
    "# FETCH_EXTRA_FLAGS=--no-package-name-check\n",
    "# DEPEND_EXTRA_FLAGS=--no-package-name-check\n",
];

/// The lines a stanza is built from.
///
/// Every value carries its own `'\n'`; markers are matched against whole
/// lines including the terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StanzaTemplate {
    /// Written only when the file is created, never reconciled afterwards.
    pub preamble: Vec<String>,
    pub start_marker: String,
    pub include_line: String,
    pub end_marker: String,
}

impl Default for StanzaTemplate {
    fn default() -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.iter().map(|l| l.to_string()).collect(),
            start_marker: START_MARKER.to_string(),
            include_line: INCLUDE_LINE.to_string(),
            end_marker: END_MARKER.to_string(),
        }
    }
}
