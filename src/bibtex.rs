use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::citation::citation_key;
use crate::domain::EntryType;
use crate::latex::transliterate;
use crate::work::WorkRecord;

/// A BibTeX entry built from one ORCID work. Field values are stored raw and
/// escaped when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibEntry {
    pub entry_type: EntryType,
    pub key: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub journal: Option<String>,
    pub doi: Option<String>,
    pub url: Option<String>,
    pub arxiv: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    MissingTitle,
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingTitle => write!(f, "missing title"),
            SkipReason::Malformed(detail) => write!(f, "malformed record: {detail}"),
        }
    }
}

impl BibEntry {
    /// Returns `None` when the work has no title.
    pub fn from_work(work: &WorkRecord) -> Option<Self> {
        let title = work.title()?;
        let year = work.year();
        let authors = work.authors();
        let author = if authors.is_empty() {
            "Unknown".to_string()
        } else {
            authors.join(" and ")
        };
        let first_author = authors.first().copied().unwrap_or("unknown");

        let doi = work.external_id("doi").map(str::to_string);
        let url = work
            .url()
            .map(str::to_string)
            .or_else(|| doi.as_ref().map(|doi| format!("https://doi.org/{doi}")));

        Some(Self {
            entry_type: EntryType::from_work_type(work.work_type()),
            key: citation_key(first_author, year, title),
            title: title.to_string(),
            author,
            year: year.to_string(),
            journal: work.journal().map(str::to_string),
            doi,
            url,
            arxiv: work.external_id("arxiv").map(str::to_string),
        })
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BibEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@{}{{{},", self.entry_type, self.key)?;
        writeln!(f, "  title={{{}}},", transliterate(&self.title))?;
        writeln!(f, "  author={{{}}},", transliterate(&self.author))?;
        writeln!(f, "  year={{{}}},", self.year)?;
        if let Some(journal) = &self.journal {
            writeln!(f, "  journal={{{}}},", transliterate(journal))?;
        }
        if let Some(doi) = &self.doi {
            writeln!(f, "  doi={{{doi}}},")?;
        }
        if let Some(url) = &self.url {
            writeln!(f, "  url={{{url}}},")?;
        }
        if let Some(arxiv) = &self.arxiv {
            writeln!(f, "  arxiv={{{arxiv}}},")?;
        }
        writeln!(f, "}}")
    }
}

/// Converts one raw work detail document.
pub fn convert_work(raw: &Value) -> Result<BibEntry, SkipReason> {
    let work: WorkRecord = serde_json::from_value(raw.clone())
        .map_err(|err| SkipReason::Malformed(err.to_string()))?;
    BibEntry::from_work(&work).ok_or(SkipReason::MissingTitle)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn deep_learning() -> Value {
        json!({
            "title": { "title": { "value": "Deep Learning" } },
            "publication-date": { "year": { "value": "2020" } },
            "type": "JOURNAL_ARTICLE",
            "contributors": { "contributor": [ { "credit-name": { "value": "Jane Doe" } } ] },
            "external-ids": { "external-id": [
                { "external-id-type": "doi", "external-id-value": "10.1/x" }
            ]}
        })
    }

    #[test]
    fn renders_exact_entry() {
        let entry = convert_work(&deep_learning()).unwrap();
        assert_eq!(
            entry.render(),
            "@article{doe2020deep,\n  title={Deep Learning},\n  author={Jane Doe},\n  year={2020},\n  doi={10.1/x},\n  url={https://doi.org/10.1/x},\n}\n"
        );
    }

    #[test]
    fn missing_title_is_skipped() {
        let mut raw = deep_learning();
        raw["title"] = Value::Null;
        assert_eq!(convert_work(&raw), Err(SkipReason::MissingTitle));

        raw["title"] = json!({ "title": { "value": "" } });
        assert_eq!(convert_work(&raw), Err(SkipReason::MissingTitle));
    }

    #[test]
    fn wrong_field_type_is_malformed() {
        let mut raw = deep_learning();
        raw["contributors"] = json!({ "contributor": "Jane Doe" });
        assert_matches!(convert_work(&raw), Err(SkipReason::Malformed(_)));
    }

    #[test]
    fn all_optional_fields_in_order() {
        let raw = json!({
            "title": { "title": { "value": "Café Society" } },
            "publication-date": { "year": { "value": "2018" } },
            "type": "CONFERENCE_PAPER",
            "contributors": { "contributor": [
                { "credit-name": { "value": "José Müller" } },
                { "credit-name": { "value": "Ann Lee" } }
            ]},
            "journal-title": { "value": "Proc. Señales" },
            "external-ids": { "external-id": [
                { "external-id-type": "doi", "external-id-value": "10.2/y" },
                { "external-id-type": "arxiv", "external-id-value": "1801.00002" }
            ]},
            "url": { "value": "https://example.org/cafe" }
        });
        let entry = convert_work(&raw).unwrap();
        assert_eq!(
            entry.render(),
            concat!(
                "@inproceedings{mller2018café,\n",
                "  title={Caf{\\'e} Society},\n",
                "  author={Jos{\\'e} M{\\\"u}ller and Ann Lee},\n",
                "  year={2018},\n",
                "  journal={Proc. Se{\\~n}ales},\n",
                "  doi={10.2/y},\n",
                "  url={https://example.org/cafe},\n",
                "  arxiv={1801.00002},\n",
                "}\n",
            )
        );
    }

    #[test]
    fn bare_record_gets_defaults() {
        let raw = json!({ "title": { "title": { "value": "Notes" } } });
        let entry = convert_work(&raw).unwrap();
        assert_eq!(entry.entry_type, EntryType::Article);
        assert_eq!(entry.author, "Unknown");
        assert_eq!(entry.key, "unknownnotes");
        assert_eq!(
            entry.render(),
            "@article{unknownnotes,\n  title={Notes},\n  author={Unknown},\n  year={},\n}\n"
        );
    }

    #[test]
    fn direct_url_wins_over_doi_link() {
        let mut raw = deep_learning();
        raw["url"] = json!({ "value": "https://example.org/dl" });
        let entry = convert_work(&raw).unwrap();
        assert_eq!(entry.url.as_deref(), Some("https://example.org/dl"));
    }

    #[test]
    fn colliding_keys_are_not_disambiguated() {
        let first = convert_work(&deep_learning()).unwrap();
        let mut raw = deep_learning();
        raw["title"] = json!({ "title": { "value": "Deep Reinforcement Learning" } });
        let second = convert_work(&raw).unwrap();
        assert_eq!(first.key, "doe2020deep");
        assert_eq!(first.key, second.key);
    }
}
