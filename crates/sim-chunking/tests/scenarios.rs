//! End-to-end chunking scenarios through the public API

use sim_chunking::{
    chunk_documents, classify_chunk, create_chunks, ChunkType, ChunkingOptions, ChunkingStrategy,
    Error, ProcessingConfig, SourceDocument,
};

const HELLO: &str = "Hello world. This is a test.";

#[test]
fn test_fixed_without_snapping() {
    let options = ChunkingOptions::new(ChunkingStrategy::Fixed, 15, 0);
    let chunks = create_chunks(HELLO, &options).unwrap();

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, "Hello world. Th");
    assert_eq!(chunks[0].index, 0);
    assert_eq!(chunks[1].index, 1);
    assert!(chunks[0].end_char <= chunks[1].start_char);
}

#[test]
fn test_fixed_with_sentence_snapping() {
    let options = ChunkingOptions::new(ChunkingStrategy::Fixed, 15, 0).with_sentence_boundary(true);
    let chunks = create_chunks(HELLO, &options).unwrap();

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, "Hello world.");
    assert_eq!(chunks[1].text, "This is a test.");
}

#[test]
fn test_semantic_joins_small_paragraphs() {
    let text = "My Sim greets every visitor.\n\nIt answers questions about pricing.";
    let options = ChunkingOptions::new(ChunkingStrategy::Semantic, 1000, 200);
    let chunks = create_chunks(text, &options).unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(
        chunks[0].text,
        "My Sim greets every visitor.\n\nIt answers questions about pricing."
    );
}

#[test]
fn test_adaptive_heading_then_content() {
    let options = ChunkingOptions {
        strategy: ChunkingStrategy::Adaptive,
        ..Default::default()
    };
    let chunks = create_chunks("# Title\n\nSome content here.", &options).unwrap();

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].chunk_type, ChunkType::Heading);
    assert!(chunks[0].char_len() <= 300);
    assert_eq!(chunks[1].chunk_type, ChunkType::Content);
}

#[test]
fn test_empty_input_returns_nothing() {
    for strategy in ChunkingStrategy::ALL {
        let options = ChunkingOptions::new(strategy, 100, 20);
        assert!(create_chunks("", &options).unwrap().is_empty());
    }
}

#[test]
fn test_list_classification() {
    let text = "- item one\n- item two\n- item three";
    assert_eq!(classify_chunk(text), ChunkType::List);

    let chunks = create_chunks(text, &ChunkingOptions::default()).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].chunk_type, ChunkType::List);
}

#[test]
fn test_sliding_window_count() {
    let text = "abcdefghijklmnopqrstuvwxy";
    let options = ChunkingOptions::new(ChunkingStrategy::Sliding, 10, 0);
    let chunks = create_chunks(text, &options).unwrap();

    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| c.char_len() <= 10));
}

#[test]
fn test_overlap_not_smaller_than_max_is_rejected() {
    for strategy in ChunkingStrategy::ALL {
        let options = ChunkingOptions::new(strategy, 100, 100);
        let err = create_chunks("Some text to chunk.", &options).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }
}

#[test]
fn test_adaptive_multi_section_document_with_periods_near_boundaries() {
    let text = "Intro sentence one. Intro two.\n## Setup.\n- install.\n- run.\n> Quote ends.\n```\nlet a = b.c;\n```\nDone.";
    let options = ChunkingOptions::new(ChunkingStrategy::Adaptive, 24, 4).with_sentence_boundary(true);
    let chunks = create_chunks(text, &options).unwrap();

    let kinds: Vec<ChunkType> = chunks.iter().map(|c| c.chunk_type).collect();
    assert!(kinds.contains(&ChunkType::Heading));
    assert!(kinds.contains(&ChunkType::List));
    assert!(kinds.contains(&ChunkType::Quote));
    assert!(kinds.contains(&ChunkType::Code));

    let heading = chunks
        .iter()
        .find(|c| c.chunk_type == ChunkType::Heading)
        .unwrap();
    assert_eq!(heading.text, "## Setup.");

    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.index, i);
        assert!(chunk.start_char < chunk.end_char);
        assert!(chunk.end_char <= text.chars().count());
    }
}

#[test]
fn test_unicode_text_is_chunked_by_characters() {
    let text = "Ünïcödé täxt ïs spłit by chäracters, nöt bytes.";
    let options = ChunkingOptions::new(ChunkingStrategy::Fixed, 10, 2);
    let chunks = create_chunks(text, &options).unwrap();

    assert!(chunks.iter().all(|c| c.char_len() <= 10));
    assert_eq!(chunks.last().unwrap().end_char, text.chars().count());
}

#[test]
fn test_batch_preserves_document_order() {
    let documents: Vec<SourceDocument> = ["alpha", "bravo", "charlie"]
        .iter()
        .map(|id| SourceDocument::new(*id, format!("{} document text. ", id).repeat(10)))
        .collect();
    let options = ChunkingOptions::new(ChunkingStrategy::Sliding, 60, 10);
    let processing = ProcessingConfig { parallelism: Some(2) };

    let results = chunk_documents(&documents, &options, &processing).unwrap();
    let ids: Vec<&str> = results.iter().map(|r| r.document_id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "bravo", "charlie"]);
    assert!(results.iter().all(|r| !r.chunks.is_empty()));
}
