use pacer_core::domain::{RetrievedMaterial, SourceType};
use pacer_core::section::assemble_citation_cards;

fn lines(raws: &[&str]) -> Vec<String> {
    raws.iter().map(|s| s.to_string()).collect()
}

fn material(title: &str, page: Option<u32>, excerpt: &str) -> RetrievedMaterial {
    RetrievedMaterial {
        document_title: Some(title.to_string()),
        page_number: page,
        excerpt: Some(excerpt.to_string()),
        ..Default::default()
    }
}

#[test]
fn no_citation_message_renders_nothing() {
    let materials = vec![material("Textbook", Some(1), "excerpt")];
    let cards = assemble_citation_cards(
        &lines(&["This answer is based on general knowledge."]),
        &materials,
    );
    assert!(cards.is_empty());

    let cards = assemble_citation_cards(&[], &materials);
    assert!(cards.is_empty());
}

#[test]
fn cited_cards_come_first_and_carry_their_material() {
    let mut cited = material("Textbook", Some(199), "congestion window text");
    cited.chapter = Some("Chapter 3".to_string());
    let materials = vec![cited, material("Extra Notes", None, "unclaimed excerpt")];
    let cards = assemble_citation_cards(
        &lines(&["- ELEC3120 Textbook, Chapter 3: Transport Layer, Page 199 (LOCAL_UPLOAD)"]),
        &materials,
    );
    assert_eq!(cards.len(), 2);

    assert_eq!(cards[0].citation.document_title, "ELEC3120 Textbook");
    let backing = cards[0].material.as_ref().expect("matched material");
    assert_eq!(backing.excerpt.as_deref(), Some("congestion window text"));

    // The unclaimed material folds into a synthetic card after the cited one.
    assert_eq!(cards[1].citation.document_title, "Extra Notes");
    assert_eq!(cards[1].citation.source_type, SourceType::Unknown);
}

#[test]
fn matched_material_is_not_folded_again() {
    let materials = vec![material("Textbook", Some(199), "excerpt")];
    let cards = assemble_citation_cards(
        &lines(&["- ELEC3120 Textbook, Page 199"]),
        &materials,
    );
    assert_eq!(cards.len(), 1);
}

#[test]
fn untitled_materials_are_dropped() {
    let materials = vec![RetrievedMaterial {
        excerpt: Some("orphan excerpt".to_string()),
        ..Default::default()
    }];
    let cards = assemble_citation_cards(&lines(&["- Lecture 1, Slide 2"]), &materials);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].citation.document_title, "Lecture 1");
}

#[test]
fn duplicate_cards_collapse_to_first_occurrence() {
    let cards = assemble_citation_cards(
        &lines(&[
            "- ELEC3120 Textbook, Page 199 (LOCAL_UPLOAD)",
            "- ELEC3120 Textbook, Page 199",
        ]),
        &[],
    );
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].citation.page_number, Some(199));
}

#[test]
fn leftover_materials_with_identical_keys_fold_once() {
    let materials = vec![
        material("Lecture 6", None, "first copy"),
        material("Lecture 6", None, "second copy"),
    ];
    let cards = assemble_citation_cards(&lines(&["- Unrelated Reading"]), &materials);
    assert_eq!(cards.len(), 2);
    let synth = cards[1].material.as_ref().expect("synthetic material");
    assert_eq!(synth.excerpt.as_deref(), Some("first copy"));
}

#[test]
fn same_position_with_different_excerpts_stays_separate() {
    // Content identity is part of the dedupe key.
    let materials = vec![
        material("Lecture 6", None, "slide three text"),
        RetrievedMaterial {
            document_title: Some("Lecture 6".to_string()),
            slide_number: Some(4),
            excerpt: Some("slide four text".to_string()),
            ..Default::default()
        },
    ];
    let cards = assemble_citation_cards(&lines(&["- Other Reading"]), &materials);
    // Other Reading (unmatched) + two distinct Lecture 6 cards.
    assert_eq!(cards.len(), 3);
}
