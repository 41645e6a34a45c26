use std::cell::RefCell;
use std::rc::Rc;

use upwidgets::{
    marker_geometry, ConfigError, FixedClock, PageChange, PageTransition, Pager, PagerConfig,
    PagerState, ResultRange, TakeOption, TodayLine, TodayLineProps,
};

fn recording_pager(config: PagerConfig) -> (Pager, Rc<RefCell<Vec<(u64, u64, u64)>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let pager = Pager::new(config, move |change: PageChange| {
        sink.borrow_mut().push(change.as_tuple());
    })
    .expect("valid config");
    (pager, calls)
}

#[test]
fn test_walk_95_items_by_20() {
    let config = PagerConfig::with_total(95).default_take(20).unwrap();
    let (mut pager, calls) = recording_pager(config);

    assert_eq!(pager.max_page(), 5);
    assert_eq!(pager.state().page(), 1);
    assert_eq!(pager.state().skip(), 0);

    for _ in 0..4 {
        assert!(pager.next_page().is_some());
    }
    assert_eq!(pager.state().page(), 5);
    assert_eq!(pager.state().skip(), 80);

    // Already on the last page
    assert_eq!(pager.next_page(), None);
    assert_eq!(pager.state().page(), 5);

    assert_eq!(
        calls.borrow().as_slice(),
        &[(2, 20, 20), (3, 20, 40), (4, 20, 60), (5, 20, 80)]
    );

    assert_eq!(
        pager.result_range(),
        ResultRange::Range { from: 81, to: 95, total: 95 }
    );
}

#[test]
fn test_page_size_change_snaps_to_last_page() {
    let config = PagerConfig::with_total(95)
        .default_take(20)
        .unwrap()
        .default_page(5);
    let (mut pager, calls) = recording_pager(config);
    assert_eq!(pager.state().skip(), 80);

    let fifty = TakeOption::new(50, "50").unwrap();
    pager.change_take(fifty.clone());
    assert_eq!(pager.state().page(), 2);
    assert_eq!(pager.state().skip(), 50);
    assert_eq!(pager.state().take().get(), 50);

    // Same size again is a no-op
    assert_eq!(pager.change_take(fifty), None);
    assert_eq!(calls.borrow().as_slice(), &[(2, 50, 50)]);
}

#[test]
fn test_empty_result_set() {
    let (mut pager, calls) = recording_pager(PagerConfig::with_total(0));

    assert_eq!(pager.max_page(), 0);
    assert_eq!(pager.result_range(), ResultRange::NoResults);
    assert_eq!(pager.summary_text(), "Aucun résultat");

    assert_eq!(pager.previous_page(), None);
    assert_eq!(pager.next_page(), None);
    assert_eq!(pager.go_to(3), None);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_pure_apply_matches_pager() {
    let config = PagerConfig::with_total(333).default_take(20).unwrap();
    let (mut pager, _) = recording_pager(config);
    let mut state = pager.state();

    let transitions = vec![
        PageTransition::Next,
        PageTransition::JumpTo(10),
        PageTransition::ChangeTake(TakeOption::new(100, "100").unwrap()),
        PageTransition::Previous,
        PageTransition::JumpTo(99),
    ];

    for transition in transitions {
        let expected = state.apply(333, &transition);
        let emitted = pager.dispatch(transition);
        assert_eq!(emitted, expected.map(|(_, change)| change));
        if let Some((next, _)) = expected {
            state = next;
        }
        assert_eq!(pager.state(), state);
        assert_eq!(state.skip(), (state.page() - 1) * state.take().get());
    }
}

#[test]
fn test_config_from_json_drives_pager() {
    let json = r#"{
        "total": 40,
        "default_take": 10,
        "default_page": 2,
        "default_skip": 10,
        "takes": [{"id": 10, "text": "10"}, {"id": 25, "text": "25"}],
        "no_result_message": "Nothing here",
        "result_prefix": "Results",
        "range_separator": "to",
        "total_separator": "of"
    }"#;
    let config = PagerConfig::from_json_str(json).unwrap();
    let (pager, _) = recording_pager(config);

    assert_eq!(pager.state(), PagerState::at_page(2, std::num::NonZeroU64::new(10).unwrap()));
    assert_eq!(pager.summary_text(), "Results 11 to 20 of 40");
}

#[test]
fn test_inconsistent_defaults_rejected() {
    let json = r#"{"total": 40, "default_take": 10, "default_page": 2, "default_skip": 5}"#;
    let config = PagerConfig::from_json_str(json).unwrap();
    let result = Pager::new(config, |_| {});
    assert!(matches!(result, Err(ConfigError::InconsistentSkip { .. })));
}

#[test]
fn test_today_line_scenarios() {
    let props = TodayLineProps {
        canvas_time_start: 1000,
        canvas_time_end: 2000,
        canvas_width: 500.0,
        header_height: 20.0,
        height: 120.0,
    };

    let inside = marker_geometry(&props, 1500).unwrap();
    assert_eq!(inside.left, 250.0);
    assert_eq!(inside.top, 20.0);
    assert_eq!(inside.height, 100.0);

    assert_eq!(marker_geometry(&props, 2500), None);
    assert_eq!(marker_geometry(&props, 500), None);

    let line = TodayLine::with_clock(props, FixedClock(1250)).unwrap();
    assert_eq!(line.geometry().map(|g| g.left), Some(125.0));
}

#[test]
fn test_today_line_rejects_reversed_window() {
    let props = TodayLineProps {
        canvas_time_start: 2000,
        canvas_time_end: 1000,
        canvas_width: 500.0,
        header_height: 20.0,
        height: 120.0,
    };
    assert!(matches!(
        TodayLine::with_clock(props, FixedClock(1500)),
        Err(ConfigError::EmptyTimeWindow { start: 2000, end: 1000 })
    ));
}
