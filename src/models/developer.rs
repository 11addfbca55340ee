//! Developer record and experience level.

use serde::{Deserialize, Serialize};

/// Experience level, determines which tax rate applies at creation.
///
/// Wire format uses the uppercase tags `"JUNIOR"`, `"MID"`, `"SENIOR"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Experience {
    Junior,
    Mid,
    Senior,
}

impl Experience {
    /// Parse a wire tag. Returns `None` for anything outside the three
    /// known tags; there is no fourth variant and no fallback.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "JUNIOR" => Some(Self::Junior),
            "MID" => Some(Self::Mid),
            "SENIOR" => Some(Self::Senior),
            _ => None,
        }
    }

    /// The wire tag for this level.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Junior => "JUNIOR",
            Self::Mid => "MID",
            Self::Senior => "SENIOR",
        }
    }
}

/// A registered developer.
///
/// `salary` is the net amount: tax is deducted once, at creation time.
/// Updates store whatever salary the caller supplies, verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Developer {
    pub id: i64,
    pub name: String,
    pub salary: f64,
    pub experience: Experience,
}

/// Validated input for creating a developer.
///
/// `salary` here is the gross amount; the service applies the tax
/// deduction for the given experience level before storing.
#[derive(Debug, Clone)]
pub struct CreateDeveloper {
    pub id: i64,
    pub name: String,
    pub salary: f64,
    pub experience: Experience,
}
