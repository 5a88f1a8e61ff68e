//! Currency names used in printed totals.

use std::borrow::Cow;

/// Plural names of the major unit and its subunit, as printed after the words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub major: Cow<'static, str>,
    pub minor: Cow<'static, str>,
}

impl Currency {
    /// UAE dirham: `Dirhams` / `Fils`.
    pub const AED: Currency = Currency {
        major: Cow::Borrowed("Dirhams"),
        minor: Cow::Borrowed("Fils"),
    };

    pub fn new(major: impl Into<Cow<'static, str>>, minor: impl Into<Cow<'static, str>>) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::AED
    }
}
