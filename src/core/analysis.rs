use crate::core::settlement::ReceiptItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitError {
    MalformedResponse(String),
    InvalidShape(String),
    DuplicatePeopleError(String),
    InvalidAbbreviation(String),
    InvalidArgument(String),
    DecimalParsingError(String),
    IoError(String),
}

impl From<serde_json::Error> for SplitError {
    fn from(e: serde_json::Error) -> SplitError {
        SplitError::MalformedResponse(format!("extraction failed: {}", e))
    }
}

impl From<rust_decimal::Error> for SplitError {
    fn from(e: rust_decimal::Error) -> SplitError {
        SplitError::DecimalParsingError(e.to_string())
    }
}

impl From<std::io::Error> for SplitError {
    fn from(e: std::io::Error) -> SplitError {
        SplitError::IoError(e.to_string())
    }
}

// Required for main and Box<dyn std::error::Error>> returns to not complain
impl Error for SplitError {}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedResponse(msg) => write!(f, "{}", msg),
            Self::InvalidShape(msg) => write!(f, "{}", msg),
            Self::DuplicatePeopleError(msg) => write!(f, "{}", msg),
            Self::InvalidAbbreviation(msg) => write!(f, "{}", msg),
            Self::InvalidArgument(msg) => write!(f, "{}", msg),
            Self::DecimalParsingError(msg) => write!(f, "{}", msg),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

// What the extractor hands over once its response parses: an ordered item
// list plus the receipt's stated grand total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAnalysis")]
pub struct ReceiptAnalysis {
    pub items: Vec<ReceiptItem>,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

// Wire shape of the extractor output. Items may arrive without an id; a
// positional one is backfilled so allocations have something stable to
// reference.
#[derive(Clone, Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    id: Option<String>,
    name: String,
    price: Decimal,
    #[serde(default)]
    quantity: Option<u32>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawAnalysis {
    items: Vec<RawItem>,
    total: Decimal,
    #[serde(default)]
    currency: Option<String>,
}

impl TryFrom<RawAnalysis> for ReceiptAnalysis {
    type Error = SplitError;

    fn try_from(raw: RawAnalysis) -> Result<ReceiptAnalysis, SplitError> {
        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if item.price < Decimal::ZERO {
                    return Err(SplitError::InvalidShape(format!(
                        "item '{}' has a negative price {}",
                        item.name, item.price
                    )));
                }
                Ok(ReceiptItem {
                    id: item
                        .id
                        .filter(|id| !id.is_empty())
                        .unwrap_or_else(|| format!("item-{}", index)),
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(ReceiptAnalysis {
            items,
            total: raw.total,
            currency: raw.currency,
        })
    }
}

impl ReceiptAnalysis {
    // Parses the raw text of an extractor response. Vision models routinely
    // wrap their JSON in markdown code fences, so those are stripped first.
    pub fn from_response(text: &str) -> Result<ReceiptAnalysis, SplitError> {
        let cleaned = strip_code_fences(text);
        Ok(serde_json::from_str(cleaned)?)
    }
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let body = match trimmed.strip_prefix("```") {
        Some(rest) => rest.strip_prefix("json").unwrap_or(rest),
        None => return trimmed,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
