//! Integration tests for the page summary pipeline.
//!
//! Exercises the complete flow: filtering an annotation set, clustering per
//! page, aggregating region metadata and serializing the results.

use annot_summary::geometry::Rect;
use annot_summary::pipeline::{CancelToken, DocumentAccess, RegionId, SummaryPipeline};
use annot_summary::{AnnotationFilter, AnnotationRecord, Error, Result, SummaryConfig};

/// Document stub with identical US-letter pages.
struct LetterDoc {
    page_count: usize,
}

impl DocumentAccess for LetterDoc {
    fn page_rect(&self, page_index: usize) -> Result<Rect> {
        if page_index < self.page_count {
            Ok(Rect::new(0.0, 0.0, 612.0, 792.0))
        } else {
            Err(Error::PageOutOfRange(page_index))
        }
    }
}

fn annot(
    page_index: usize,
    id: &str,
    author: &str,
    date: Option<&str>,
    bbox: Rect,
) -> AnnotationRecord {
    AnnotationRecord {
        page_index,
        page_label: format!("Sheet {}", page_index + 1),
        id: id.to_string(),
        author: author.to_string(),
        stroke_color: vec![1.0, 0.0, 0.0],
        last_modified: date.map(|d| annot_summary::parse_mod_date(d).unwrap()),
        bbox,
    }
}

/// Two nearby markups and one distant markup on the same page: the nearby
/// pair shares a region, the distant one gets its own.
#[test]
fn test_single_page_two_regions() {
    let doc = LetterDoc { page_count: 1 };
    let annots = vec![
        annot(
            0,
            "n1",
            "Alice",
            Some("D:20230301101500+00'00'"),
            Rect::new(100.0, 100.0, 140.0, 120.0),
        ),
        annot(
            0,
            "n2",
            "Bob",
            Some("D:20230315083000+00'00'"),
            Rect::new(150.0, 100.0, 190.0, 120.0),
        ),
        annot(
            0,
            "n3",
            "Alice",
            None,
            Rect::new(450.0, 650.0, 490.0, 680.0),
        ),
    ];

    let results = SummaryPipeline::new().run(&doc, &annots).unwrap();
    assert_eq!(results.len(), 1);

    let page = &results[0];
    assert_eq!(page.page_label, "Sheet 1");
    assert!(page.refined);
    assert_eq!(page.regions.len(), 2);

    let pair = page
        .regions
        .values()
        .find(|c| c.annot_ids.contains(&"n1".to_string()))
        .unwrap();
    assert_eq!(pair.annot_ids, vec!["n1", "n2"]);
    assert_eq!(pair.author_label(), "Alice, Bob");
    assert_eq!(
        pair.last_modified,
        Some(annot_summary::parse_mod_date("D:20230315083000+00'00'").unwrap())
    );

    let lone = page
        .regions
        .values()
        .find(|c| c.annot_ids.contains(&"n3".to_string()))
        .unwrap();
    assert_eq!(lone.annot_ids, vec!["n3"]);
    assert_eq!(lone.last_modified, None);
}

/// Pages come back in ascending index order no matter the input order.
#[test]
fn test_multi_page_ordering() {
    let doc = LetterDoc { page_count: 20 };
    let annots = vec![
        annot(11, "c", "Alice", None, Rect::new(50.0, 50.0, 90.0, 70.0)),
        annot(3, "a", "Alice", None, Rect::new(50.0, 50.0, 90.0, 70.0)),
        annot(19, "d", "Bob", None, Rect::new(50.0, 50.0, 90.0, 70.0)),
        annot(3, "b", "Bob", None, Rect::new(400.0, 400.0, 440.0, 420.0)),
    ];

    let results = SummaryPipeline::new().run(&doc, &annots).unwrap();
    let pages: Vec<usize> = results.iter().map(|r| r.page_index).collect();
    assert_eq!(pages, vec![3, 11, 19]);
    assert_eq!(results[0].regions.len(), 2);
    assert_eq!(results[1].regions.len(), 1);
}

/// Every final region stays inside its page, even for annotations hugging
/// the page edge.
#[test]
fn test_regions_clamped_to_page() {
    let doc = LetterDoc { page_count: 1 };
    let annots = vec![
        annot(0, "e1", "Alice", None, Rect::new(2.0, 2.0, 40.0, 30.0)),
        annot(0, "e2", "Alice", None, Rect::new(580.0, 760.0, 610.0, 790.0)),
    ];

    let results = SummaryPipeline::new().run(&doc, &annots).unwrap();
    let page_rect = doc.page_rect(0).unwrap();
    for cluster in results[0].regions.values() {
        assert!(page_rect.contains(&cluster.rect));
    }
}

/// Filtering feeds the pipeline: only the selected author's pages appear.
#[test]
fn test_filtered_input() {
    let doc = LetterDoc { page_count: 5 };
    let annots = vec![
        annot(0, "a", "Alice", None, Rect::new(50.0, 50.0, 90.0, 70.0)),
        annot(1, "b", "Bob", None, Rect::new(50.0, 50.0, 90.0, 70.0)),
        annot(2, "c", "Alice", None, Rect::new(50.0, 50.0, 90.0, 70.0)),
    ];

    let filtered = AnnotationFilter::all().by_author("Bob").apply(&annots);
    let results = SummaryPipeline::new().run(&doc, &filtered).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].page_index, 1);
}

/// A cancelled token stops processing between pages.
#[test]
fn test_cancellation() {
    let doc = LetterDoc { page_count: 5 };
    let annots = vec![annot(0, "a", "Alice", None, Rect::new(50.0, 50.0, 90.0, 70.0))];

    let cancel = CancelToken::new();
    cancel.cancel();
    let err = SummaryPipeline::new()
        .run_with_cancel(&doc, &annots, &cancel)
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

/// A page whose regions cannot refine down to the target count is reported
/// as unrefined, not as an error.
#[test]
fn test_unrefinable_page_is_non_fatal() {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = LetterDoc { page_count: 1 };
    // Boundary gap of 12 units: growth's 8-unit step closes it in a single
    // pass (target count one), while refinement's 3-unit step needs two
    // passes and is cut off by the pass cap below.
    let annots = vec![
        annot(0, "m1", "Alice", None, Rect::new(100.0, 100.0, 160.0, 160.0)),
        annot(0, "m2", "Bob", None, Rect::new(208.0, 100.0, 268.0, 160.0)),
    ];
    let config = SummaryConfig::new().with_max_refine_passes(1);

    let results = SummaryPipeline::with_config(config)
        .run(&doc, &annots)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert!(!results[0].refined);
    assert_eq!(results[0].regions.len(), 2);
}

/// Results serialize to JSON for downstream rendering tooling.
#[test]
fn test_results_serialize() {
    let doc = LetterDoc { page_count: 1 };
    let annots = vec![annot(
        0,
        "a",
        "Alice",
        Some("D:20230301101500+00'00'"),
        Rect::new(100.0, 100.0, 140.0, 120.0),
    )];

    let results = SummaryPipeline::new().run(&doc, &annots).unwrap();
    let json = serde_json::to_string(&results).unwrap();
    assert!(json.contains("\"page_label\":\"Sheet 1\""));
    assert!(json.contains("\"annot_ids\":[\"a\"]"));
    assert!(results[0].regions.contains_key(&RegionId(0)));
}
