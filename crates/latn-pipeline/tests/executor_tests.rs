//! Layer executor behavior: entry points, failure propagation,
//! configuration knobs and ranking invariants.

use latn_core::{Dimension, SemanticVector};
use latn_pipeline::{ExecutorConfig, LatnExecutor, SceneModel, SceneObject};
use latn_vocab::Vocabulary;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn red_box_scene() -> SceneModel {
    let mut scene = SceneModel::new();
    let vector = SemanticVector::from_values(&[(Dimension::Noun, 1.0), (Dimension::Red, 1.0)]);
    scene.add_object(SceneObject::with_id("box", vector, "red_box_1"));
    scene
}

#[test]
fn layer1_reports_input_and_confidence() {
    init_tracing();
    let executor = LatnExecutor::new();
    let result = executor.execute_layer1("the red box");
    assert!(result.success);
    assert!(!result.hypotheses.is_empty());
    assert!(result.confidence > 0.0);
    assert!(result.description.contains("the red box"));
}

#[test]
fn layer2_without_scene_parses_but_does_not_ground() {
    let executor = LatnExecutor::new();
    let result = executor.execute_layer2("the red box", true, true);
    assert!(result.success);
    assert!(result.layer1.success);
    assert_eq!(result.noun_phrases.len(), 1);
    assert!(result.grounding_results.is_empty());
    assert!(!result.noun_phrases[0].parts()[0].is_resolved());
}

#[test]
fn layer2_with_scene_grounds_the_np() {
    let mut executor = LatnExecutor::new();
    executor.attach_scene(red_box_scene());

    let result = executor.execute_layer2("the red box", true, true);
    assert!(result.success);
    assert_eq!(result.grounding_results.len(), 1);

    let record = &result.grounding_results[0];
    assert!(record.success);
    assert_eq!(record.entity_id.as_deref(), Some("red_box_1"));

    let np = &result.noun_phrases[0].parts()[0];
    assert!(np.is_resolved());
    assert_eq!(np.resolved_entity().unwrap().entity_id(), "red_box_1");
    assert!(np.vector.isa(Dimension::So));
}

#[test]
fn grounding_disabled_leaves_nps_unresolved() {
    let mut executor = LatnExecutor::new();
    executor.attach_scene(red_box_scene());
    let result = executor.execute_layer2("the red box", false, true);
    assert!(result.grounding_results.is_empty());
    assert!(!result.noun_phrases[0].parts()[0].is_resolved());
}

#[test]
fn grounding_failure_is_not_fatal() {
    let mut executor = LatnExecutor::new();
    executor.attach_scene(red_box_scene());
    // No pyramid in the scene.
    let result = executor.execute_layer2("the pyramid", true, true);
    assert!(result.success);
    assert_eq!(result.grounding_results.len(), 1);
    assert!(!result.grounding_results[0].success);
    assert!(!result.noun_phrases[0].parts()[0].is_resolved());
}

#[test]
fn empty_input_fails_and_propagates() {
    let executor = LatnExecutor::new();

    let layer1 = executor.execute_layer1("");
    assert!(!layer1.success);
    assert!(layer1.hypotheses.is_empty());

    let layer2 = executor.execute_layer2("", true, true);
    assert!(!layer2.success);
    assert!(!layer2.layer1.success);
    assert!(layer2.description.contains("Layer 1 failure"));

    let layer5 = executor.execute_layer5("", false);
    assert!(!layer5.success);
    assert!(!layer5.layer4.layer3.layer2.layer1.success);
}

#[test]
fn scanner_errors_surface_in_layer1() {
    let executor = LatnExecutor::new();
    let result = executor.execute_layer1("move the cube to [3,4");
    assert!(!result.success);
    assert!(result.error.is_some());
    assert!(result.description.contains("vector literal"));
}

#[test]
fn pronoun_it_grounds_to_most_recent() {
    let mut executor = LatnExecutor::new();
    let mut scene = SceneModel::new();
    scene.add_object(SceneObject::with_id(
        "box",
        SemanticVector::from_features(&[Dimension::Noun]),
        "b1",
    ));
    scene.add_object(SceneObject::with_id(
        "sphere",
        SemanticVector::from_features(&[Dimension::Noun]),
        "s1",
    ));
    executor.attach_scene(scene);

    let result = executor.execute_layer2("it", true, true);
    assert!(result.success);
    let np = &result.noun_phrases[0].parts()[0];
    assert_eq!(np.resolved_entity().unwrap().entity_id(), "s1");
}

#[test]
fn plural_pronoun_multiplies_across_entities() {
    let mut executor = LatnExecutor::new();
    let mut scene = SceneModel::new();
    scene.add_object(SceneObject::with_id(
        "box",
        SemanticVector::from_features(&[Dimension::Noun]),
        "b1",
    ));
    scene.add_object(SceneObject::with_id(
        "sphere",
        SemanticVector::from_features(&[Dimension::Noun]),
        "s1",
    ));
    executor.attach_scene(scene);

    let result = executor.execute_layer2("them", true, true);
    assert_eq!(result.hypotheses.len(), 2);
}

#[test]
fn max_hypotheses_caps_every_layer() {
    let mut executor = LatnExecutor::new().with_config(ExecutorConfig {
        max_hypotheses: Some(1),
        ..ExecutorConfig::default()
    });
    let mut scene = SceneModel::new();
    for id in ["b1", "b2", "b3"] {
        scene.add_object(SceneObject::with_id(
            "box",
            SemanticVector::from_features(&[Dimension::Noun]),
            id,
        ));
    }
    executor.attach_scene(scene);

    let result = executor.execute_layer2("a box", true, true);
    assert_eq!(result.hypotheses.len(), 1);
}

#[test]
fn max_matches_per_np_bounds_grounding() {
    let mut executor = LatnExecutor::new().with_config(ExecutorConfig {
        max_matches_per_np: Some(2),
        ..ExecutorConfig::default()
    });
    let mut scene = SceneModel::new();
    for id in ["b1", "b2", "b3", "b4"] {
        scene.add_object(SceneObject::with_id(
            "box",
            SemanticVector::from_features(&[Dimension::Noun]),
            id,
        ));
    }
    executor.attach_scene(scene);

    let result = executor.execute_layer2("a box", true, true);
    assert_eq!(result.hypotheses.len(), 2);
}

#[test]
fn best_match_mode_collapses_to_one_binding() {
    let mut executor = LatnExecutor::new();
    let mut scene = SceneModel::new();
    for id in ["b1", "b2"] {
        scene.add_object(SceneObject::with_id(
            "box",
            SemanticVector::from_features(&[Dimension::Noun]),
            id,
        ));
    }
    executor.attach_scene(scene);

    let result = executor.execute_layer2("a box", true, false);
    assert_eq!(result.hypotheses.len(), 1);
    assert!(result.noun_phrases[0].parts()[0].is_resolved());
}

#[test]
fn ranking_is_monotonic_at_every_layer() {
    let mut executor = LatnExecutor::new();
    executor.add_vocabulary_entry(
        "light",
        SemanticVector::from_values(&[(Dimension::Adj, 1.0), (Dimension::Transparency, 1.0)]),
    );
    executor.add_vocabulary_entry(
        "house",
        SemanticVector::from_features(&[Dimension::Noun, Dimension::Singular]),
    );
    executor.add_vocabulary_entry(
        "light house",
        SemanticVector::from_features(&[Dimension::Noun, Dimension::Singular]),
    );

    let input = "draw a light house at [0,0,0]";
    let result = executor.execute_layer5(input, false);
    assert!(result.success);

    let check = |hyps: &[latn_core::Hypothesis]| {
        for pair in hyps.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    };
    check(&result.layer4.layer3.layer2.layer1.hypotheses);
    check(&result.layer4.layer3.layer2.hypotheses);
    check(&result.layer4.layer3.hypotheses);
    check(&result.layer4.hypotheses);
    check(&result.hypotheses);
}

#[test]
fn folded_tokens_match_the_replacement_log() {
    let executor = LatnExecutor::new();
    let result = executor.execute_layer2("the red box above the table", true, true);
    for hypothesis in &result.hypotheses {
        let np_tokens = hypothesis
            .tokens
            .iter()
            .filter(|t| t.isa(Dimension::Np))
            .count();
        assert!(np_tokens >= hypothesis.replacements.len());
        for replacement in &hypothesis.replacements {
            assert!(replacement.start <= replacement.end);
            assert!(replacement.token.isa(Dimension::Np));
        }
    }
}

#[test]
fn report_mode_includes_provenance() {
    let executor = LatnExecutor::new();
    let quiet = executor.execute_layer5("draw a red cube", false);
    let verbose = executor.execute_layer5("draw a red cube", true);
    assert!(verbose.description.len() > quiet.description.len());
    assert!(verbose.description.contains("Layer 5"));
}

#[test]
fn detach_scene_stops_grounding() {
    let mut executor = LatnExecutor::new();
    executor.attach_scene(red_box_scene());
    assert!(executor.scene().is_some());

    let detached = executor.detach_scene();
    assert!(detached.is_some());
    assert!(executor.scene().is_none());

    let result = executor.execute_layer2("the red box", true, true);
    assert!(result.grounding_results.is_empty());
}

#[test]
fn validation_flags_incomplete_commands() {
    let executor = LatnExecutor::new();

    let complete = executor.execute_layer5("move the cube to [1,2,3]", false);
    let reports = executor.validate(&complete);
    assert!(reports.iter().all(|r| r.is_executable()));

    let incomplete = executor.execute_layer5("move the cube", false);
    let reports = executor.validate(&incomplete);
    assert!(reports.iter().any(|r| !r.is_executable()));
}

#[test]
fn layer_analysis_summarizes_every_layer() {
    let executor = LatnExecutor::new();

    let summary = executor.layer_analysis("draw a red cube", 5);
    assert_eq!(summary.len(), 5);
    assert!(summary.iter().all(|s| s.success));
    assert_eq!(summary[0].layer, 1);
    assert_eq!(summary[0].phrase_count, 4); // draw a red cube
    assert_eq!(summary[1].phrase_count, 1); // one NP
    assert_eq!(summary[4].phrase_count, 1); // one sentence

    let partial = executor.layer_analysis("draw a red cube", 2);
    assert_eq!(partial.len(), 2);
}

#[test]
fn lookup_vocabulary_round_trips_custom_entries() {
    let mut executor = LatnExecutor::new();
    assert!(executor.lookup_vocabulary("glorp").is_none());
    executor.add_vocabulary_entry(
        "glorp",
        SemanticVector::from_features(&[Dimension::Noun, Dimension::Singular]),
    );
    let found = executor.lookup_vocabulary("glorp").unwrap();
    assert!(found.isa(Dimension::Noun));
    assert_eq!(found.word(), Some("glorp"));
}

#[test]
fn custom_vocabulary_constructor_is_honored() {
    let mut vocab = Vocabulary::new();
    vocab.insert(
        "zonk",
        SemanticVector::from_features(&[Dimension::Verb, Dimension::Action]),
    );
    let executor = LatnExecutor::with_vocabulary(vocab);
    let result = executor.execute_layer1("zonk");
    assert!(result.success);
    assert!(result.hypotheses[0].tokens[0].isa(Dimension::Verb));
}
