//! Document number value object (`YYMMDDTSSS`).

use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use akmdocs_core::{DocumentType, DomainError, ValueObject};

/// Width of the zero-padded sequence segment. Longer sequences widen the number.
pub const SEQUENCE_WIDTH: usize = 3;

/// Length of a document number whose sequence fits [`SEQUENCE_WIDTH`].
pub const NUMBER_WIDTH: usize = 7 + SEQUENCE_WIDTH;

/// Human-readable document number: 2-digit year, month, day, 1-digit type code and a
/// zero-padded sequence, e.g. `2610161007`.
///
/// Sequences above 999 are rendered in full (`26101611000`), so the string is only
/// fixed-width while the counter stays below 1000. Numbers are not coordinated with
/// the remote document store and may repeat across devices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentNumber {
    value: String,
    date: NaiveDate,
    doc_type: DocumentType,
    sequence: u64,
}

impl ValueObject for DocumentNumber {}

impl DocumentNumber {
    pub fn new(date: NaiveDate, doc_type: DocumentType, sequence: u64) -> Self {
        let value = format!(
            "{}{}{:0width$}",
            date.format("%y%m%d"),
            doc_type.code(),
            sequence,
            width = SEQUENCE_WIDTH
        );
        Self {
            value,
            date,
            doc_type,
            sequence,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Whether the sequence overflowed the three-digit segment.
    pub fn is_widened(&self) -> bool {
        self.value.len() > NUMBER_WIDTH
    }

    /// Row id used by the external document store, e.g. `INV-2610161007`.
    pub fn unique_id(&self) -> String {
        format!("{}{}", self.doc_type.id_prefix(), self.value)
    }
}

impl core::fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for DocumentNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < NUMBER_WIDTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "document number '{s}' must be at least {NUMBER_WIDTH} digits"
            )));
        }

        let date = NaiveDate::parse_from_str(&s[..6], "%y%m%d").map_err(|e| {
            DomainError::validation(format!("document number '{s}' has an invalid date: {e}"))
        })?;

        let code = s[6..7].chars().next().unwrap_or_default();
        let doc_type = DocumentType::from_code(code).ok_or_else(|| {
            DomainError::validation(format!("document number '{s}' has unknown type code '{code}'"))
        })?;

        let sequence: u64 = s[7..].parse().map_err(|e| {
            DomainError::validation(format!("document number '{s}' has an invalid sequence: {e}"))
        })?;
        if sequence == 0 {
            return Err(DomainError::validation(format!(
                "document number '{s}' has a zero sequence"
            )));
        }

        let number = DocumentNumber::new(date, doc_type, sequence);
        if number.value != s {
            // e.g. "26101610001": a widened sequence must not carry leading zeros.
            return Err(DomainError::validation(format!(
                "document number '{s}' is not in canonical form"
            )));
        }
        Ok(number)
    }
}

impl TryFrom<String> for DocumentNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentNumber> for String {
    fn from(value: DocumentNumber) -> Self {
        value.value
    }
}
