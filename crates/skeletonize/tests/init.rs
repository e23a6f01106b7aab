//! Integration tests for `init` on realistic documents.

use skeletonize::dom::{Document, NodeId};
use skeletonize::{init, Settings, SkeletonError, SkeletonOptions, Skeletonizer, Target};

fn trace_logs() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("skeletonize=trace")
        .try_init();
}

/// `<body><main><ul id="feed">` with one `li.post` per entry in `posts`.
fn feed(posts: &[&[(&str, &str)]]) -> (Document, NodeId, Vec<NodeId>) {
    let mut document = Document::new();
    let body = document.body();
    let main = document.append_element(body, "main", &[]).unwrap();
    let list = document.append_element(main, "ul", &[("id", "feed")]).unwrap();

    let mut items = Vec::new();
    for attributes in posts {
        let mut all = vec![("class", "post")];
        all.extend_from_slice(attributes);
        let item = document.append_element(list, "li", &all).unwrap();
        document.append_text(item, "Lorem ipsum").unwrap();
        items.push(item);
    }
    (document, list, items)
}

fn style_elements(document: &Document) -> usize {
    document.get_elements_by_tag_name(document.root(), "style").len()
}

#[test]
fn test_overlapping_inits_register_one_stylesheet() {
    trace_logs();
    let (mut document, _, _) = feed(&[&[], &[]]);

    init(&mut document, ".post", None);
    init(&mut document, "#feed li", None);

    assert_eq!(style_elements(&document), 1);
    let style = document.get_element_by_id("skeletonjs-style").unwrap();
    assert_eq!(document.parent(style), Some(document.head()));
    assert!(document.text_content(style).contains("@keyframes shimmer"));
}

#[test]
fn test_caller_options_override_annotations_per_field() {
    trace_logs();
    let (mut document, _, items) = feed(&[&[
        ("data-skeleton-background-color", "#111"),
        ("data-skeleton-border-radius", "4px"),
    ]]);
    let caller = SkeletonOptions::new()
        .with_background_color("#222")
        .with_animation_type("pulse");

    init(&mut document, items[0], Some(&caller));

    let style = document.style(items[0]);
    assert_eq!(style.get_property_value("--skeleton-background-color"), Some("#222"));
    assert_eq!(style.get_property_value("--skeleton-border-radius"), Some("4px"));
    assert_eq!(style.get_property_value("--skeleton-animation-type"), Some("pulse"));
    assert_eq!(style.get_property_value("--skeleton-animation-duration"), None);
}

#[test]
fn test_lowercase_background_color_annotation() {
    let (mut document, _, items) = feed(&[&[("data-skeleton-backgroundcolor", "tomato")]]);

    init(&mut document, items[0], None);

    assert_eq!(
        document.style(items[0]).get_property_value("--skeleton-background-color"),
        Some("tomato")
    );
}

#[test]
fn test_count_three_produces_three_siblings_in_place() {
    trace_logs();
    let (mut document, list, items) = feed(&[&[], &[("data-skeletons-count", "3")], &[]]);

    init(&mut document, Target::Element(items[1]), None);

    let children = document.element_children(list);
    assert_eq!(children.len(), 5);
    assert_eq!(children[0], items[0]);
    assert_eq!(children[4], items[2]);
    for &copy in &children[1..4] {
        assert!(document.has_class(copy, "skeletonJS"));
        assert_eq!(document.text_content(copy), "Lorem ipsum");
    }
    assert!(!document.has_class(items[0], "skeletonJS"));
}

#[test]
fn test_unparseable_count_leaves_single_element() {
    let (mut document, list, items) = feed(&[&[("data-skeletons-count", "abc")]]);

    init(&mut document, ".post", None);

    assert_eq!(document.element_children(list), items);
    assert!(document.has_class(items[0], "skeletonJS"));
}

#[test]
fn test_nested_images_become_spans() {
    let (mut document, _, items) = feed(&[&[]]);
    let figure = document.append_element(items[0], "figure", &[]).unwrap();
    document
        .append_element(figure, "img", &[("src", "a.jpg"), ("style", "width: 64px; height: 64px")])
        .unwrap();
    document.append_element(items[0], "img", &[("src", "b.jpg")]).unwrap();

    init(&mut document, ".post", None);

    assert!(document.get_elements_by_tag_name(items[0], "img").is_empty());
    let spans = document.get_elements_by_tag_name(items[0], "span");
    assert_eq!(spans.len(), 2);
    let first = document.style(spans[0]);
    assert_eq!(first.get_property_value("width"), Some("64px"));
    assert_eq!(first.get_property_value("height"), Some("64px"));
    assert_eq!(first.get_property_value("display"), Some("inline-block"));
    assert_eq!(document.style(spans[1]).get_property_value("display"), Some("inline-block"));
}

#[test]
fn test_zero_matches_change_nothing() {
    let (mut document, _, _) = feed(&[&[]]);
    let before = document.outer_html(document.root());

    init(&mut document, ".missing", None);
    init(&mut document, Target::None, None);
    init(&mut document, Vec::<NodeId>::new(), None);

    assert_eq!(document.outer_html(document.root()), before);
}

#[test]
fn test_invalid_selector_is_a_no_op() {
    trace_logs();
    let (mut document, _, _) = feed(&[&[]]);
    let before = document.outer_html(document.root());

    init(&mut document, "li::before", None);

    assert_eq!(document.outer_html(document.root()), before);
    assert!(matches!(
        Skeletonizer::new().try_init(&mut document, "li::before", None),
        Err(SkeletonError::Selector(_))
    ));
}

#[test]
fn test_handle_from_another_document_is_ignored() {
    let (_, _, items) = feed(&[&[], &[], &[]]);
    let mut blank = Document::new();
    let before = blank.outer_html(blank.root());

    init(&mut blank, items[2], None);
    init(&mut blank, items.clone(), None);

    assert_eq!(blank.outer_html(blank.root()), before);
    assert!(Skeletonizer::new()
        .try_init(&mut blank, items[2], None)
        .unwrap()
        .is_empty());
}

#[test]
fn test_detached_element_is_transformed_in_place() {
    let mut document = Document::new();
    let card = document.create_element("div");
    document.set_attribute(card, "data-skeletons-count", "").unwrap();
    document.set_attribute(card, "data-skeleton-color", "gray").unwrap();

    init(&mut document, card, None);

    assert!(document.parent(card).is_none());
    assert!(document.has_class(card, "skeletonJS"));
    assert_eq!(document.style(card).get_property_value("--skeleton-color"), Some("gray"));
    assert_eq!(style_elements(&document), 1);
}

#[test]
fn test_collection_targets_in_order() {
    let (mut document, _, items) = feed(&[&[], &[], &[]]);

    let reports = Skeletonizer::new()
        .try_init(&mut document, vec![items[2], items[0]], None)
        .unwrap();

    let transformed: Vec<_> = reports.iter().map(|report| report.element).collect();
    assert_eq!(transformed, vec![items[2], items[0]]);
    assert!(!document.has_class(items[1], "skeletonJS"));
}

#[test]
fn test_settings_from_yaml_drive_the_transformation() {
    let settings = Settings::from_yaml(
        "markerClass: placeholder\nstyleId: placeholder-css\nmaxClones: 2\nrootDefaults:\n  backgroundColor: '#f5f5f5'\n",
    )
    .unwrap();
    let skeletonizer = Skeletonizer::with_settings(settings).unwrap();
    let (mut document, list, _) = feed(&[&[("data-skeletons-count", "10")]]);

    skeletonizer.init(&mut document, ".post", None);

    let children = document.element_children(list);
    assert_eq!(children.len(), 2);
    assert!(children.iter().all(|&child| document.has_class(child, "placeholder")));
    let style = document.get_element_by_id("placeholder-css").unwrap();
    let css = document.text_content(style);
    assert!(css.contains("--skeleton-background-color: #f5f5f5"));
    assert!(css.contains(".placeholder .placeholder *"));
}

#[test]
fn test_serialized_output() {
    let mut document = Document::new();
    let body = document.body();
    let card = document
        .append_element(body, "p", &[("data-skeleton-border-radius", "2px")])
        .unwrap();
    document.append_text(card, "Hi").unwrap();

    init(&mut document, "p", None);

    assert_eq!(
        document.outer_html(card),
        r#"<p data-skeleton-border-radius="2px" class="skeletonJS" style="--skeleton-border-radius: 2px;">Hi</p>"#
    );
}
