use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BibError;

/// ORCID iD in its canonical `0000-0000-0000-000X` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrcidId(String);

impl OrcidId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrcidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrcidId {
    type Err = BibError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let normalized = trimmed
            .strip_prefix("https://orcid.org/")
            .or_else(|| trimmed.strip_prefix("http://orcid.org/"))
            .unwrap_or(trimmed)
            .to_uppercase();

        let groups = normalized.split('-').collect::<Vec<_>>();
        let well_formed = normalized.is_ascii()
            && groups.len() == 4
            && groups.iter().all(|group| group.len() == 4);
        if !well_formed {
            return Err(BibError::InvalidOrcidId(value.to_string()));
        }

        let chars = groups.concat().chars().collect::<Vec<_>>();
        let (body, check) = chars.split_at(15);
        if !body.iter().all(|ch| ch.is_ascii_digit()) {
            return Err(BibError::InvalidOrcidId(value.to_string()));
        }
        if check[0] != checksum(body) {
            return Err(BibError::InvalidOrcidId(value.to_string()));
        }
        Ok(Self(normalized))
    }
}

impl TryFrom<String> for OrcidId {
    type Error = BibError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrcidId> for String {
    fn from(id: OrcidId) -> Self {
        id.0
    }
}

// ISO 7064 MOD 11-2 over the first 15 digits.
fn checksum(digits: &[char]) -> char {
    let total = digits
        .iter()
        .filter_map(|ch| ch.to_digit(10))
        .fold(0u32, |acc, digit| (acc + digit) * 2);
    match (12 - total % 11) % 11 {
        10 => 'X',
        n => char::from_digit(n, 10).unwrap_or('?'),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Article,
    InProceedings,
}

impl EntryType {
    /// Coarse mapping from an ORCID work type such as `JOURNAL_ARTICLE`.
    pub fn from_work_type(work_type: &str) -> Self {
        if work_type.contains("ARTICLE") {
            EntryType::Article
        } else {
            EntryType::InProceedings
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Article => "article",
            EntryType::InProceedings => "inproceedings",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
