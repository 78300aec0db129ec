use std::collections::HashSet;

use sha2::{Digest, Sha256};

use crate::citation::{is_no_citation_message, parse_citation};
use crate::domain::{CitationCard, RetrievedMaterial};
use crate::format::material_content;
use crate::matching::{citation_from_material, match_material_to_citation};

fn opt_u32(v: Option<u32>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "none".to_string(),
    }
}

// Identity of a material within one response: title plus page/slide position.
fn material_key(material: &RetrievedMaterial) -> String {
    format!(
        "{}-{}-{}",
        material.document_title.as_deref().unwrap_or(""),
        opt_u32(material.page_number),
        opt_u32(material.slide_number)
    )
}

fn content_digest(material: Option<&RetrievedMaterial>) -> String {
    let content = material.map(material_content).unwrap_or("");
    hex::encode(Sha256::digest(content.as_bytes()))
}

// Exact source + slide/page + content identity. Cards whose excerpts differ
// must stay separate, so the content participates as a digest.
fn dedupe_key(card: &CitationCard) -> String {
    format!(
        "{}-{}-{}-{}",
        card.citation.document_title.to_lowercase(),
        opt_u32(card.citation.page_number),
        opt_u32(card.citation.slide_number),
        content_digest(card.material.as_ref())
    )
}

/// Assemble the ordered, de-duplicated citation cards for one chat response.
///
/// - When the citation list is a "no course materials" message, there is
///   nothing to render and the result is empty.
/// - Each raw citation is parsed and paired with the first matching material;
///   each material backs at most one card.
/// - Leftover materials that carry a title become synthetic cards after the
///   cited ones.
/// - Duplicates collapse to their first occurrence.
pub fn assemble_citation_cards(
    raw_citations: &[String],
    materials: &[RetrievedMaterial],
) -> Vec<CitationCard> {
    if is_no_citation_message(raw_citations) {
        return Vec::new();
    }

    let mut matched_keys: HashSet<String> = HashSet::new();
    let mut cards: Vec<CitationCard> = Vec::new();

    for raw in raw_citations {
        let citation = parse_citation(raw);
        let material = match_material_to_citation(&citation, materials).cloned();
        if let Some(m) = material.as_ref() {
            matched_keys.insert(material_key(m));
        }
        cards.push(CitationCard { citation, material });
    }

    for material in materials {
        if material.document_title.is_none() {
            continue;
        }
        // Also drops leftover materials that share a key with each other.
        if !matched_keys.insert(material_key(material)) {
            continue;
        }
        cards.push(CitationCard {
            citation: citation_from_material(material),
            material: Some(material.clone()),
        });
    }

    let mut seen: HashSet<String> = HashSet::new();
    cards.retain(|card| seen.insert(dedupe_key(card)));
    cards
}
