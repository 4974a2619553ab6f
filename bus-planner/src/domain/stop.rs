//! Bus stop names.

use std::borrow::Cow;
use std::fmt;

/// The alias spelling used on signage near the JR station.
const TONDA_ALIAS: &str = "JR摂津富田";

/// The dataset's canonical key for the same stop.
const TONDA_CANONICAL: &str = "JR富田駅";

/// A canonicalized bus stop name.
///
/// The dataset keys its tables by one canonical spelling per stop, but
/// users can enter alias spellings (the JR station stop is signed both
/// as 摂津富田 and 富田). Construction resolves known aliases, so any
/// `StopName` value can be used directly as a dataset key.
///
/// Canonicalization is total and idempotent: unknown names pass through
/// unchanged, and canonicalizing a canonical name is a no-op.
///
/// # Examples
///
/// ```
/// use bus_planner::domain::StopName;
///
/// let stop = StopName::canonicalize("JR摂津富田");
/// assert_eq!(stop.as_str(), "JR富田駅");
///
/// // Already-canonical names pass through
/// let stop = StopName::canonicalize("関西大学");
/// assert_eq!(stop.as_str(), "関西大学");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopName(String);

impl StopName {
    /// Canonicalize a raw stop name.
    ///
    /// Never fails: names without a known alias are used as-is.
    pub fn canonicalize(name: &str) -> Self {
        StopName(resolve_alias(name).into_owned())
    }

    /// Returns the canonical name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopName({})", self.0)
    }
}

impl fmt::Display for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map an alias spelling to its canonical dataset key.
fn resolve_alias(name: &str) -> Cow<'_, str> {
    if name == TONDA_ALIAS {
        Cow::Borrowed(TONDA_CANONICAL)
    } else {
        Cow::Borrowed(name)
    }
}
