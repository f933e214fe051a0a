//! Shapes of the ORCID v3.0 `works` and `work` documents.
//!
//! Only the fields the converter reads are modelled; everything is optional
//! because the registry omits or nulls fields freely.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValueField {
    #[serde(default)]
    pub value: Option<String>,
}

impl ValueField {
    fn non_empty(field: &Option<ValueField>) -> Option<&str> {
        field
            .as_ref()
            .and_then(|field| field.value.as_deref())
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkTitle {
    #[serde(default)]
    pub title: Option<ValueField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicationDate {
    #[serde(default)]
    pub year: Option<ValueField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Contributor {
    #[serde(default)]
    pub credit_name: Option<ValueField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contributors {
    #[serde(default)]
    pub contributor: Option<Vec<Contributor>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalId {
    #[serde(default)]
    pub external_id_type: Option<String>,
    #[serde(default)]
    pub external_id_value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalIds {
    #[serde(default)]
    pub external_id: Option<Vec<ExternalId>>,
}

/// A single work detail record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkRecord {
    #[serde(default)]
    pub put_code: Option<u64>,
    #[serde(default)]
    pub title: Option<WorkTitle>,
    #[serde(default)]
    pub publication_date: Option<PublicationDate>,
    #[serde(default, rename = "type")]
    pub work_type: Option<String>,
    #[serde(default)]
    pub contributors: Option<Contributors>,
    #[serde(default)]
    pub journal_title: Option<ValueField>,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    #[serde(default)]
    pub url: Option<ValueField>,
}

impl WorkRecord {
    pub fn title(&self) -> Option<&str> {
        self.title
            .as_ref()
            .and_then(|title| ValueField::non_empty(&title.title))
    }

    pub fn year(&self) -> &str {
        self.publication_date
            .as_ref()
            .and_then(|date| ValueField::non_empty(&date.year))
            .unwrap_or("")
    }

    /// Declared work type; untyped records count as journal articles.
    pub fn work_type(&self) -> &str {
        self.work_type.as_deref().unwrap_or("JOURNAL_ARTICLE")
    }

    /// Credit names in contributor order. Contributors without one are dropped.
    pub fn authors(&self) -> Vec<&str> {
        self.contributors
            .as_ref()
            .and_then(|contributors| contributors.contributor.as_ref())
            .map(|list| {
                list.iter()
                    .filter_map(|contributor| ValueField::non_empty(&contributor.credit_name))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn journal(&self) -> Option<&str> {
        ValueField::non_empty(&self.journal_title)
    }

    /// Value of the last external id of the given type (`doi`, `arxiv`, ...).
    pub fn external_id(&self, id_type: &str) -> Option<&str> {
        self.external_ids
            .as_ref()
            .and_then(|ids| ids.external_id.as_ref())
            .and_then(|ids| {
                ids.iter()
                    .rev()
                    .find(|id| id.external_id_type.as_deref() == Some(id_type))
            })
            .and_then(|id| id.external_id_value.as_deref())
            .filter(|value| !value.is_empty())
    }

    pub fn url(&self) -> Option<&str> {
        ValueField::non_empty(&self.url)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkSummary {
    pub put_code: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkGroup {
    #[serde(default)]
    pub work_summary: Option<Vec<WorkSummary>>,
}

/// The `works` listing: one group per deduplicated work.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorksResponse {
    #[serde(default)]
    pub group: Option<Vec<WorkGroup>>,
}

impl WorksResponse {
    /// Put-code of the first summary in each non-empty group.
    pub fn put_codes(&self) -> Vec<u64> {
        self.group
            .iter()
            .flatten()
            .filter_map(|group| group.work_summary.as_ref()?.first())
            .map(|summary| summary.put_code)
            .collect()
    }
}
