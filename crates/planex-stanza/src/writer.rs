//! Producing stanza content: fresh files and in-place payload replacement.

use crate::stanza::{Stanza, StanzaError};
use crate::template::StanzaTemplate;

/// Full content of a newly created Makefile.
///
/// The preamble, then the start marker, the include line and the end marker.
///
/// # Example
/// ```
/// use planex_stanza::{StanzaTemplate, render_new};
///
/// let content = render_new(&StanzaTemplate::default());
/// assert!(content.starts_with(".PHONY: default\n"));
/// assert!(content.ends_with("# End generated by planex-init\n"));
/// ```
pub fn render_new(template: &StanzaTemplate) -> String {
    let mut out = String::new();
    for line in &template.preamble {
        out.push_str(line);
    }
    out.push_str(&template.start_marker);
    out.push_str(&template.include_line);
    out.push_str(&template.end_marker);
    out
}

/// Replace the payload of `stanza` with the template's include line.
///
/// `stanza` must have been located in `lines`. Lines up to and including the
/// start marker, and from the end marker on, are copied unchanged.
pub fn splice<S: AsRef<str>>(lines: &[S], stanza: &Stanza, template: &StanzaTemplate) -> Vec<String> {
    let head = &lines[..=stanza.start()];
    let tail = &lines[stanza.end()..];

    let mut out = Vec::with_capacity(head.len() + 1 + tail.len());
    out.extend(head.iter().map(|l| l.as_ref().to_owned()));
    out.push(template.include_line.clone());
    out.extend(tail.iter().map(|l| l.as_ref().to_owned()));
    out
}

/// Locate the stanza and splice a fresh payload into it.
///
/// # Errors
/// Returns a [`StanzaError`] if the markers cannot be found; nothing is
/// produced in that case.
///
/// # Example
/// ```
/// use planex_stanza::{StanzaTemplate, update_lines};
///
/// let lines = [
///     "A\n",
///     "# Start generated by planex-init\n",
///     "old stuff\n",
///     "# End generated by planex-init\n",
///     "B\n",
/// ];
/// let updated = update_lines(&lines, &StanzaTemplate::default()).unwrap();
/// assert_eq!(updated[2], "include $(shell planex-init --rules)\n");
/// assert_eq!(updated.len(), 5);
/// ```
pub fn update_lines<S: AsRef<str>>(
    lines: &[S],
    template: &StanzaTemplate,
) -> Result<Vec<String>, StanzaError> {
    let stanza = Stanza::locate(lines, template)?;
    Ok(splice(lines, &stanza, template))
}
