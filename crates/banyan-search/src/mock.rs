//! Templated mock search results.
//!
//! Pure string construction from the query; no randomness and no external
//! calls, so the same query always yields byte-identical output.

use serde::{Deserialize, Serialize};

/// Domains consulted by the trusted-site variant, in preference order.
pub const TRUSTED_SITES: &[&str] = &[
    "stackoverflow.com",
    "github.com",
    "docs.python.org",
    "fastapi.tiangolo.com",
    "reactjs.org",
    "developer.mozilla.org",
    "w3schools.com",
    "geeksforgeeks.org",
];

/// Trusted-site results are capped at this many domains.
const TRUSTED_SITE_LIMIT: usize = 5;

/// One mock search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub source: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
}

/// General web search: three templated hits.
pub fn general_results(query: &str) -> Vec<SearchHit> {
    vec![
        SearchHit {
            title: format!("Comprehensive Guide to {}", query),
            url: format!("https://example.com/guide/{}", slug(query, '-')),
            snippet: format!(
                "This comprehensive guide covers everything you need to know about {}, \
                 including best practices, examples, and implementation details.",
                query
            ),
            source: "General Web".to_string(),
            doc_type: None,
        },
        SearchHit {
            title: format!("{} - Complete Tutorial and Documentation", query),
            url: format!("https://tutorial-site.com/{}", slug(query, '-')),
            snippet: format!(
                "Step-by-step tutorial and complete documentation for {} with practical \
                 examples and code snippets.",
                query
            ),
            source: "General Web".to_string(),
            doc_type: None,
        },
        SearchHit {
            title: format!("Advanced {} Techniques and Solutions", query),
            url: format!("https://advanced-tech.com/solutions/{}", slug(query, '_')),
            snippet: format!(
                "Explore advanced techniques and professional solutions for {}. Learn from \
                 industry experts and real-world case studies.",
                query
            ),
            source: "General Web".to_string(),
            doc_type: None,
        },
    ]
}

/// Trusted-site search: one hit per trusted domain, capped.
pub fn trusted_site_results(query: &str) -> Vec<SearchHit> {
    TRUSTED_SITES
        .iter()
        .take(TRUSTED_SITE_LIMIT)
        .map(|site| SearchHit {
            title: format!("{} - Official Documentation | {}", query, title_case(site)),
            url: format!("https://{}/docs/{}", site, slug(query, '-')),
            snippet: format!(
                "Official documentation and authoritative information about {} from {}. \
                 Trusted source with accurate and up-to-date content.",
                query, site
            ),
            source: site.to_string(),
            doc_type: None,
        })
        .collect()
}

/// Trusted-document search: one hit per document flavor.
pub fn document_results(query: &str) -> Vec<SearchHit> {
    const DOCUMENT_TYPES: &[(&str, &str, &str)] = &[
        ("PDF", "pdf", "comprehensive manual"),
        ("Excel", "xlsx", "data analysis workbook"),
        ("Word", "docx", "detailed specification document"),
        ("PowerPoint", "pptx", "presentation slides"),
    ];

    DOCUMENT_TYPES
        .iter()
        .map(|(doc_type, ext, desc)| SearchHit {
            title: format!("{} - {}", query, title_case(desc)),
            url: format!(
                "https://docs.repository.com/{}/{}.{}",
                doc_type.to_lowercase(),
                slug(query, '_'),
                ext
            ),
            snippet: format!(
                "A {} {} containing detailed information, specifications, and analysis \
                 about {}",
                doc_type, desc, query
            ),
            source: "Document Repository".to_string(),
            doc_type: Some(doc_type.to_string()),
        })
        .collect()
}

/// Lowercase the query and replace spaces with the given separator.
fn slug(query: &str, sep: char) -> String {
    query.replace(' ', &sep.to_string()).to_lowercase()
}

/// Uppercase the first letter of each word, lowercasing the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_results_are_deterministic() {
        let a = general_results("Python FastAPI tutorial");
        let b = general_results("Python FastAPI tutorial");
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_general_urls_are_slugged() {
        let hits = general_results("Linear Actuators");
        assert_eq!(hits[0].url, "https://example.com/guide/linear-actuators");
        assert_eq!(
            hits[2].url,
            "https://advanced-tech.com/solutions/linear_actuators"
        );
    }

    #[test]
    fn test_trusted_sites_capped_at_five() {
        let hits = trusted_site_results("rust");
        assert_eq!(hits.len(), 5);
        assert_eq!(hits[0].source, "stackoverflow.com");
        assert_eq!(hits[4].source, "reactjs.org");
    }

    #[test]
    fn test_document_results_cover_four_flavors() {
        let hits = document_results("bearing specs");
        assert_eq!(hits.len(), 4);
        let types: Vec<_> = hits.iter().filter_map(|h| h.doc_type.as_deref()).collect();
        assert_eq!(types, vec!["PDF", "Excel", "Word", "PowerPoint"]);
        assert_eq!(
            hits[0].url,
            "https://docs.repository.com/pdf/bearing_specs.pdf"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("comprehensive manual"), "Comprehensive Manual");
        assert_eq!(title_case("stackoverflow.com"), "Stackoverflow.Com");
    }
}
