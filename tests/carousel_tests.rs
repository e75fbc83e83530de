mod common;
use common::record;
use flinta_space::carousel::{
    CarouselOptions, CarouselState, Direction, Phase, SlideDeck, SlideKind, render_carousel,
    render_page,
};
use flinta_space::models::{EventRecord, EventSource};

fn picnic_and_open_mic() -> Vec<EventRecord> {
    vec![
        record("Picnic", "2025-06-14", EventSource::Official),
        record("Open Mic", "2025-07-02", EventSource::User),
    ]
}

/// Slide titles in displayed order.
fn h2_titles(html: &str) -> Vec<String> {
    html.split("<h2>")
        .skip(1)
        .filter_map(|s| s.split("</h2>").next())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_deck_wraps_real_slides_with_clones() {
    let deck = SlideDeck::build(&picnic_and_open_mic());

    let order: Vec<(usize, SlideKind)> = deck.slides().iter().map(|s| (s.event, s.kind)).collect();
    assert_eq!(
        order,
        vec![
            (1, SlideKind::CloneOfLast),
            (0, SlideKind::Real),
            (1, SlideKind::Real),
            (0, SlideKind::CloneOfFirst),
        ]
    );
}

#[test]
fn test_deck_size_is_real_count_plus_two() {
    for n in 1..=7 {
        let deck = SlideDeck::with_real_count(n);
        assert_eq!(deck.len(), n + 2);
        assert_eq!(deck.real_count(), n);
        assert_eq!(deck.slides().iter().filter(|s| s.kind.is_clone()).count(), 2);
    }
}

#[test]
fn test_empty_deck_has_no_state() {
    let deck = SlideDeck::build(&[]);
    assert!(deck.is_empty());
    assert!(deck.state().is_none());
    assert!(CarouselState::new(0).is_none());
}

#[test]
fn test_initial_index_shows_first_event() {
    let state = SlideDeck::build(&picnic_and_open_mic()).state().unwrap();
    assert_eq!(state.index(), 1);
    assert_eq!(state.real_position(), 0);
    assert_eq!(state.phase(), Phase::Normal);
}

#[test]
fn test_next_past_last_snaps_to_start() {
    let mut state = CarouselState::new(2).unwrap();

    assert_eq!(state.advance(Direction::Next), 2);
    assert_eq!(state.phase(), Phase::Normal);

    // clone of the first event
    assert_eq!(state.advance(Direction::Next), 3);
    assert_eq!(state.phase(), Phase::SnappingToStart);
    assert_eq!(state.real_position(), 0);

    assert_eq!(state.finish_transition(), Some(1));
    assert_eq!(state.index(), 1);
    assert_eq!(state.phase(), Phase::Normal);
    assert_eq!(state.finish_transition(), None);
}

#[test]
fn test_previous_from_first_snaps_to_end() {
    let mut state = CarouselState::new(3).unwrap();

    assert_eq!(state.advance(Direction::Previous), 0);
    assert_eq!(state.phase(), Phase::SnappingToEnd);
    assert_eq!(state.real_position(), 2);

    assert_eq!(state.finish_transition(), Some(3));
    assert_eq!(state.real_position(), 2);
}

#[test]
fn test_single_event_loops_onto_itself() {
    let mut state = CarouselState::new(1).unwrap();

    assert_eq!(state.advance(Direction::Next), 2);
    assert_eq!(state.finish_transition(), Some(1));
    assert_eq!(state.advance(Direction::Previous), 0);
    assert_eq!(state.finish_transition(), Some(1));
}

#[test]
fn test_index_stays_in_bounds_without_transition_end() {
    // rapid clicks: the transition never completes between moves
    for n in 1..=4 {
        let mut state = CarouselState::new(n).unwrap();
        let moves = [1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, -1, 1, -1, 1, 1];

        for m in moves {
            let idx = state.advance(Direction::try_from(m).unwrap());
            assert!(idx <= n + 1, "index {idx} out of range for n={n}");
        }

        state.finish_transition();
        assert!((1..=n).contains(&state.index()));
    }
}

#[test]
fn test_full_cycle_returns_to_start() {
    let n = 5;
    let mut state = CarouselState::new(n).unwrap();

    for _ in 0..n {
        state.advance(Direction::Next);
        state.finish_transition();
    }
    assert_eq!(state.index(), 1);

    for _ in 0..n {
        state.advance(Direction::Previous);
        state.finish_transition();
    }
    assert_eq!(state.index(), 1);
}

#[test]
fn test_direction_accepts_only_unit_steps() {
    assert_eq!(Direction::try_from(-1).unwrap(), Direction::Previous);
    assert_eq!(Direction::try_from(1).unwrap(), Direction::Next);
    assert!(Direction::try_from(0).is_err());
    assert!(Direction::try_from(2).is_err());
}

#[test]
fn test_render_orders_slides_with_clones() {
    let html = render_carousel(&picnic_and_open_mic(), &CarouselOptions::default());

    assert_eq!(h2_titles(&html), ["Open Mic", "Picnic", "Open Mic", "Picnic"]);
    assert_eq!(html.matches("carousel-clone").count(), 2);
    assert_eq!(html.matches(r#"aria-hidden="true""#).count(), 2);
    assert!(html.contains("Official Event"));
    assert!(html.contains("User-Submitted Event"));
    assert!(html.contains("2025-06-14"));
    assert!(html.contains("moveSlide(-1)"));
    assert!(html.contains("transitionend"));
}

#[test]
fn test_render_escapes_event_text() {
    let mut ev = record("Rave", "2025-09-01", EventSource::User);
    ev.title = "<b>Rave & Rally</b>".to_string();
    ev.description = "<script>alert(1)</script>".to_string();

    let html = render_carousel(&[ev], &CarouselOptions::default());

    assert!(html.contains("&lt;b&gt;Rave &amp; Rally&lt;/b&gt;"));
    assert!(!html.contains("<b>Rave"));
    assert!(!html.contains("<script>alert(1)"));
}

#[test]
fn test_render_empty_state() {
    let opts = CarouselOptions {
        empty_message: "Nothing planned yet".to_string(),
        ..CarouselOptions::default()
    };

    let html = render_carousel(&[], &opts);

    assert!(html.contains("carousel-empty"));
    assert!(html.contains("Nothing planned yet"));
    assert!(!html.contains("<script>"));
    assert!(!html.contains("carousel-slide"));
}

#[test]
fn test_render_uses_configured_timing_and_height() {
    let opts = CarouselOptions {
        slide_height: 420,
        transition_ms: 250,
        ..CarouselOptions::default()
    };

    let html = render_carousel(&picnic_and_open_mic(), &opts);

    assert!(html.contains("height: 420px"));
    assert!(html.contains("transform 250ms ease-in-out"));
}

#[test]
fn test_render_page_wraps_fragment() {
    let fragment = render_carousel(&picnic_and_open_mic(), &CarouselOptions::default());
    let page = render_page(&fragment, "Events");

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Events</title>"));
    assert!(page.contains(&fragment));
}
