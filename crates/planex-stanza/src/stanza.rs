//! Locating the marker-delimited stanza in a line sequence.

use crate::template::StanzaTemplate;

/// Why a line sequence holds no usable stanza.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StanzaError {
    #[error("start marker not found")]
    MissingStart,

    #[error("end marker not found")]
    MissingEnd,

    /// An end marker exists, but only above the start marker.
    #[error("end marker only appears before start marker")]
    EndBeforeStart,
}

/// Marker positions of a stanza within a line sequence.
///
/// Only [`Stanza::locate`] builds one, so `start < end` always holds and
/// both indices are in range for the lines it was located in. The payload
/// is `start + 1..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stanza {
    start: usize,
    end: usize,
}

impl Stanza {
    /// Find the stanza: the first start marker, then the first end marker
    /// after it. Matching is exact, terminator included.
    ///
    /// An end marker appearing only before the start marker does not count.
    pub fn locate<S: AsRef<str>>(
        lines: &[S],
        template: &StanzaTemplate,
    ) -> Result<Self, StanzaError> {
        let is_start = |l: &S| l.as_ref() == template.start_marker;
        let is_end = |l: &S| l.as_ref() == template.end_marker;

        let start = lines
            .iter()
            .position(is_start)
            .ok_or(StanzaError::MissingStart)?;

        let end = lines[start + 1..]
            .iter()
            .position(is_end)
            .map(|offset| start + 1 + offset)
            .ok_or_else(|| {
                if lines[..start].iter().any(is_end) {
                    StanzaError::EndBeforeStart
                } else {
                    StanzaError::MissingEnd
                }
            })?;

        Ok(Self { start, end })
    }

    /// Index of the start marker line.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index of the end marker line.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The lines strictly between the markers.
    pub fn payload<'a, S>(&self, lines: &'a [S]) -> &'a [S] {
        &lines[self.start + 1..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{END_MARKER, START_MARKER};

    fn template() -> StanzaTemplate {
        StanzaTemplate::default()
    }

    #[test]
    fn test_locate_adjacent_markers() {
        let lines = [START_MARKER, END_MARKER];
        let stanza = Stanza::locate(&lines, &template()).unwrap();
        assert_eq!(stanza, Stanza { start: 0, end: 1 });
        assert!(stanza.payload(&lines).is_empty());
    }

    #[test]
    fn test_locate_uses_first_start() {
        let lines = ["x\n", START_MARKER, START_MARKER, "y\n", END_MARKER];
        let stanza = Stanza::locate(&lines, &template()).unwrap();
        assert_eq!(stanza.start(), 1);
        assert_eq!(stanza.payload(&lines), &[START_MARKER, "y\n"]);
    }

    #[test]
    fn test_located_indices_bound_the_payload() {
        let lines = ["a\n", START_MARKER, "x\n", "y\n", END_MARKER, "b\n"];
        let stanza = Stanza::locate(&lines, &template()).unwrap();
        assert_eq!((stanza.start(), stanza.end()), (1, 4));
        assert!(stanza.start() < stanza.end());
        assert_eq!(stanza.payload(&lines), &["x\n", "y\n"]);
    }

    #[test]
    fn test_end_before_start_is_ignored() {
        let lines = [END_MARKER, START_MARKER, "old\n", END_MARKER];
        let stanza = Stanza::locate(&lines, &template()).unwrap();
        assert_eq!(stanza, Stanza { start: 1, end: 3 });
    }

    #[test]
    fn test_only_stray_end() {
        let lines = [END_MARKER, START_MARKER, "old\n"];
        let err = Stanza::locate(&lines, &template()).unwrap_err();
        assert_eq!(err, StanzaError::EndBeforeStart);
        assert_eq!(
            err.to_string(),
            "end marker only appears before start marker"
        );
    }

    #[test]
    fn test_marker_without_newline_does_not_match() {
        let lines = [START_MARKER, "# End generated by planex-init"];
        let err = Stanza::locate(&lines, &template()).unwrap_err();
        assert_eq!(err, StanzaError::MissingEnd);
    }
}
