use crate::domain::{ParsedCitation, RetrievedMaterial, SourceType};

// Course code prefix the pipeline prepends to citation titles but not to
// material titles.
const COURSE_PREFIX: &str = "elec3120 ";

/// Find the excerpt supporting a citation.
///
/// First material satisfying all three checks wins; the list order is part of
/// the contract (materials are not re-sorted by similarity), so callers must
/// pass the list exactly as the pipeline returned it.
pub fn match_material_to_citation<'a>(
    citation: &ParsedCitation,
    materials: &'a [RetrievedMaterial],
) -> Option<&'a RetrievedMaterial> {
    let lowered = citation.document_title.to_lowercase();
    let cit_title = lowered.strip_prefix(COURSE_PREFIX).unwrap_or(&lowered);

    materials.iter().find(|m| {
        title_matches(cit_title, m) && page_matches(citation, m) && chapter_matches(citation, m)
    })
}

// Case-insensitive substring match in either direction. A material with no
// title can never match.
fn title_matches(cit_title: &str, material: &RetrievedMaterial) -> bool {
    match material.document_title.as_deref() {
        Some(t) => {
            let mat_title = t.to_lowercase();
            mat_title.contains(cit_title) || cit_title.contains(&mat_title)
        }
        None => false,
    }
}

// Vacuously true when the citation names no page.
fn page_matches(citation: &ParsedCitation, material: &RetrievedMaterial) -> bool {
    match citation.page_number {
        None => true,
        Some(p) => material.page_number == Some(p),
    }
}

// Vacuously true when the citation names no chapter; otherwise substring
// match in either direction, case-insensitive.
fn chapter_matches(citation: &ParsedCitation, material: &RetrievedMaterial) -> bool {
    let Some(cit_chapter) = citation.chapter.as_deref() else {
        return true;
    };
    match material.chapter.as_deref() {
        Some(mc) => {
            let a = mc.to_lowercase();
            let b = cit_chapter.to_lowercase();
            a.contains(&b) || b.contains(&a)
        }
        None => false,
    }
}

/// Build a synthetic citation card entry from a material that no raw citation
/// claimed. Fields map across directly; the source type is inferred from the
/// title like everywhere else.
pub fn citation_from_material(material: &RetrievedMaterial) -> ParsedCitation {
    let document_title = material
        .document_title
        .clone()
        .unwrap_or_else(|| "Unknown Source".to_string());
    let source_type = SourceType::infer(&document_title);
    ParsedCitation {
        document_title,
        chapter: material.chapter.clone(),
        page_number: material.page_number,
        slide_number: material.slide_number,
        source_type,
    }
}
