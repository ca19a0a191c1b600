//! Repair of the one encoding artifact known to appear in weather reports.

use std::borrow::Cow;

use crate::constants::ENCODING_ARTIFACT;

/// Remove every stray `Â` from a line
///
/// Borrows the input when there is nothing to remove.
pub fn normalize(line: &str) -> Cow<'_, str> {
    if line.contains(ENCODING_ARTIFACT) {
        Cow::Owned(line.replace(ENCODING_ARTIFACT, ""))
    } else {
        Cow::Borrowed(line)
    }
}
