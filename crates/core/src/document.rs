//! Business document types and their fixed metadata.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Kind of business document that receives a sequential number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Invoice,
    Quotation,
    Delivery,
}

impl ValueObject for DocumentType {}

impl DocumentType {
    /// Every document type, in display order.
    pub const ALL: [DocumentType; 3] = [
        DocumentType::Invoice,
        DocumentType::Quotation,
        DocumentType::Delivery,
    ];

    /// Lower-case key used in URLs and storage keys.
    pub fn key(self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::Quotation => "quotation",
            DocumentType::Delivery => "delivery",
        }
    }

    /// Single digit embedded in the document number.
    pub fn code(self) -> char {
        match self {
            DocumentType::Invoice => '1',
            DocumentType::Quotation => '4',
            DocumentType::Delivery => '8',
        }
    }

    /// Inverse of [`DocumentType::code`].
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Storage key of the sequence counter, e.g. `invoice-sequence`.
    pub fn sequence_key(self) -> String {
        format!("{}-sequence", self.key())
    }

    /// Sheet (table) name the external document store files this type under.
    pub fn sheet_name(self) -> &'static str {
        match self {
            DocumentType::Invoice => "Invoices",
            DocumentType::Quotation => "Quotations",
            DocumentType::Delivery => "Deliveries",
        }
    }

    /// Prefix of the row id in the external document store.
    pub fn id_prefix(self) -> &'static str {
        match self {
            DocumentType::Invoice => "INV-",
            DocumentType::Quotation => "QTN-",
            DocumentType::Delivery => "DLV-",
        }
    }

    /// Resolve an optional `?doc=` selector. A missing selector means an invoice.
    pub fn from_query(value: Option<&str>) -> DomainResult<Self> {
        match value {
            None => Ok(DocumentType::Invoice),
            Some(v) if v.trim().is_empty() => Ok(DocumentType::Invoice),
            Some(v) => v.parse(),
        }
    }
}

impl core::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DocumentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "invoice" => Ok(DocumentType::Invoice),
            "quotation" => Ok(DocumentType::Quotation),
            "delivery" => Ok(DocumentType::Delivery),
            other => Err(DomainError::invalid_argument(format!(
                "unknown document type '{other}' (expected invoice, quotation or delivery)"
            ))),
        }
    }
}
