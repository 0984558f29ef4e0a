use coopnet_core::prelude::*;
use coopnet_core::{MemorySink, SessionError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn setup_with(edges: &[&str]) -> ExperimentSetup {
    let mut setup = ExperimentSetup::new();
    for e in edges {
        setup.activate(e.parse::<EdgeId>().unwrap());
    }
    setup
}

#[test]
fn repeated_probability_walk_completes_in_scenario_order() {
    let setup = setup_with(&["HA-RA", "HB-RB"]);
    let mut session = SurveySession::start(&setup).unwrap();

    for _ in 0..4 {
        assert!(!session.is_complete());
        session.record_and_advance(0.7).unwrap();
    }
    assert!(session.is_complete());

    let results = session.finish().unwrap();
    let ids: Vec<u32> = results.iter().map(|r| r.scenario_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert!(results.iter().all(|r| r.cooperation_probability == 0.7));
}

#[test]
fn completed_batch_flows_to_sink() {
    let setup = setup_with(&["RA-HB"]);
    let mut session = SurveySession::start(&setup).unwrap();
    session.record_percent(10).unwrap();
    session.record_percent(90).unwrap();

    let mut sink = MemorySink::default();
    sink.deliver(&session.finish().unwrap()).unwrap();

    assert_eq!(sink.batches.len(), 1);
    assert_eq!(sink.batches[0].len(), 2);
    assert_eq!(sink.batches[0][0].cooperation_probability, 0.1);
    assert_eq!(sink.batches[0][1].cooperation_probability, 0.9);
}

#[test]
fn every_scenario_renders_with_activation_order_annotations() {
    let setup = setup_with(&["HA-RA", "RB-HA", "HB-RB"]);
    let mut session = SurveySession::start(&setup).unwrap();

    while !session.is_complete() {
        let scenario = session.current_scenario().unwrap();
        let annotations = annotate(&setup, scenario).unwrap();
        assert_eq!(annotations.len(), 3);
        for (annotation, active) in annotations.iter().zip(&setup.active_edge_ids) {
            assert_eq!(annotation.edge, *active);
            assert_eq!(annotation.state, scenario.state(*active).unwrap());
            let expected = if annotation.state.is_high() {
                annotation.high
            } else {
                annotation.low
            };
            assert_eq!(annotation.meaning(), expected);
        }
        session.record_and_advance(0.5).unwrap();
    }
}

#[test]
fn scenario_list_matches_generator_output() {
    // The session must present exactly the matrix generated from the
    // activation order frozen at start.
    let setup = setup_with(&["HB-HA", "HA-HB"]);
    let expected = generate(&setup.active_edge_ids).unwrap();

    let mut session = SurveySession::start(&setup).unwrap();
    for scenario in &expected {
        assert_eq!(session.current_scenario().unwrap(), scenario);
        session.record_and_advance(0.0).unwrap();
    }
    assert!(session.is_complete());
}

proptest! {
    #[test]
    fn prop_valid_probabilities_complete_exactly_once(
        probabilities in prop::collection::vec(0.0f64..=1.0, 8..=8)
    ) {
        let setup = setup_with(&["HA-RA", "HA-HB", "HA-RB"]);
        let mut session = SurveySession::start(&setup).unwrap();

        for (i, p) in probabilities.iter().enumerate() {
            prop_assert_eq!(session.progress().answered, i);
            session.record_and_advance(*p).unwrap();
        }
        prop_assert!(session.is_complete());
        prop_assert_eq!(
            session.record_and_advance(0.5),
            Err(SessionError::AlreadyComplete)
        );

        let results = session.finish().unwrap();
        for (result, p) in results.iter().zip(&probabilities) {
            prop_assert_eq!(result.cooperation_probability, *p);
        }
    }

    #[test]
    fn prop_slider_percent_scales_to_unit_interval(percent in 0u8..=100) {
        let result = SurveyResult::from_percent(3, percent).unwrap();
        prop_assert_eq!(result.scenario_id, 3);
        prop_assert_eq!(result.cooperation_probability, f64::from(percent) / 100.0);
    }
}
