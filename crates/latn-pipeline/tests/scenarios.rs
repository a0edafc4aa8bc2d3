//! End-to-end scenarios through the layer executor.

use latn_core::{Constituent, Dimension, SentenceKind, VerbKind};
use latn_pipeline::{ExecutorConfig, LatnExecutor, SceneModel, SceneObject};
use latn_vocab::Vocabulary;

fn scene_object(name: &str, id: &str, pos: [f32; 3]) -> SceneObject {
    let vocab = Vocabulary::builtin();
    let mut vector = vocab.vector_from_word(name).unwrap();
    vector.set(Dimension::LocX, pos[0]);
    vector.set(Dimension::LocY, pos[1]);
    vector.set(Dimension::LocZ, pos[2]);
    vector.set(Dimension::ScaleX, 1.0);
    vector.set(Dimension::ScaleY, 1.0);
    vector.set(Dimension::ScaleZ, 1.0);
    SceneObject::with_id(name, vector, id)
}

fn first_sentence(result: &latn_pipeline::Layer5Result) -> latn_core::SentencePhrase {
    match result.sentence_phrases[0].as_ref() {
        Constituent::Single(sp) => sp.clone(),
        Constituent::Coordinated(conj) => conj.children[0].clone(),
    }
}

#[test]
fn plain_imperative() {
    let executor = LatnExecutor::new();
    let result = executor.execute_layer5("draw a red cube", false);
    assert!(result.success);

    let sentence = first_sentence(&result);
    assert_eq!(sentence.kind, SentenceKind::Imperative);

    let vp = match sentence.predicate.unwrap().as_ref() {
        Constituent::Single(vp) => vp.clone(),
        Constituent::Coordinated(_) => panic!("expected a single verb phrase"),
    };
    assert_eq!(vp.verb_word(), Some("draw"));
    assert_eq!(vp.kind, VerbKind::Create);

    let object = vp.object.unwrap();
    let np = &object.parts()[0];
    assert_eq!(np.head_noun(), Some("cube"));
    assert_eq!(np.vector.get(Dimension::Red), 1.0);
    assert_eq!(
        np.determiner.as_ref().and_then(|d| d.word()),
        Some("a")
    );
}

#[test]
fn vector_literal_destination() {
    let executor = LatnExecutor::new();
    let result = executor.execute_layer5("move the cube to [3,4,5]", false);
    assert!(result.success);

    let sentence = first_sentence(&result);
    let vp = match sentence.predicate.unwrap().as_ref() {
        Constituent::Single(vp) => vp.clone(),
        Constituent::Coordinated(_) => panic!("expected a single verb phrase"),
    };
    assert_eq!(vp.verb_word(), Some("move"));
    assert_eq!(vp.object.as_ref().unwrap().parts()[0].head_noun(), Some("cube"));

    assert_eq!(vp.preps.len(), 1);
    let pp = &vp.preps[0].parts()[0];
    assert_eq!(pp.preposition_word(), Some("to"));
    let destination = &pp.object.parts()[0];
    assert_eq!(destination.head_noun(), Some("vector"));
    assert_eq!(destination.vector.get(Dimension::LocX), 3.0);
    assert_eq!(destination.vector.get(Dimension::LocY), 4.0);
    assert_eq!(destination.vector.get(Dimension::LocZ), 5.0);
}

#[test]
fn compound_ambiguity_is_preserved_and_ranked() {
    let mut executor = LatnExecutor::new();
    executor.add_vocabulary_entry(
        "light",
        latn_core::SemanticVector::from_values(&[
            (Dimension::Adj, 1.0),
            (Dimension::Transparency, 1.0),
        ]),
    );
    executor.add_vocabulary_entry(
        "house",
        latn_core::SemanticVector::from_features(&[Dimension::Noun, Dimension::Singular]),
    );
    executor.add_vocabulary_entry(
        "light house",
        latn_core::SemanticVector::from_features(&[Dimension::Noun, Dimension::Singular]),
    );

    let result = executor.execute_layer1("draw a light house at [0,0,0]");
    assert!(result.success);
    assert!(result.hypotheses.len() >= 2);

    let compound = result
        .hypotheses
        .iter()
        .find(|h| h.words().contains(&"light house"))
        .expect("compound reading");
    let split = result
        .hypotheses
        .iter()
        .find(|h| h.words().contains(&"light") && h.words().contains(&"house"))
        .expect("split reading");
    assert!(compound.confidence > split.confidence);
    assert_eq!(result.hypotheses[0].words(), compound.words());
}

#[test]
fn cartesian_grounding_multiplies_hypotheses() {
    let mut executor = LatnExecutor::new();
    let mut scene = SceneModel::new();
    scene.add_object(scene_object("box", "b1", [0.0, 0.0, 0.0]));
    scene.add_object(scene_object("box", "b2", [2.0, 0.0, 0.0]));
    scene.add_object(scene_object("sphere", "s1", [0.0, 2.0, 0.0]));
    scene.add_object(scene_object("sphere", "s2", [2.0, 2.0, 0.0]));
    executor.attach_scene(scene);

    let result = executor.execute_layer2("a box under a sphere", true, true);
    assert!(result.success);
    assert_eq!(result.hypotheses.len(), 4);

    for hypothesis in &result.hypotheses {
        let grounded: Vec<&str> = hypothesis
            .tokens
            .iter()
            .filter_map(|t| t.noun_phrase())
            .flat_map(|c| c.parts())
            .filter_map(|np| np.grounding.as_ref().map(|g| g.entity_id()))
            .collect();
        assert_eq!(grounded.len(), 2, "both NPs grounded");
    }

    // One hypothesis per (box, sphere) pair.
    let mut pairs: Vec<(String, String)> = result
        .hypotheses
        .iter()
        .map(|h| {
            let ids: Vec<String> = h
                .tokens
                .iter()
                .filter_map(|t| t.noun_phrase())
                .flat_map(|c| c.parts())
                .filter_map(|np| np.grounding.as_ref().map(|g| g.entity_id().to_string()))
                .collect();
            (ids[0].clone(), ids[1].clone())
        })
        .collect();
    pairs.sort();
    pairs.dedup();
    assert_eq!(pairs.len(), 4);
}

#[test]
fn spatial_contradiction_lands_in_the_lowest_band() {
    let mut executor = LatnExecutor::new();
    let mut scene = SceneModel::new();
    // The only box sits above the table, contradicting "under".
    scene.add_object(scene_object("box", "box-1", [0.0, 1.0, 0.0]));
    scene.add_object(scene_object("table", "table-1", [0.0, 0.0, 0.0]));
    executor.attach_scene(scene);

    let result = executor.execute_layer3("the box under the table", true);
    assert!(result.success);
    assert_eq!(result.spatial_results.len(), 1);
    assert_eq!(result.spatial_results[0].score, 0.1);

    let pp = &result.prepositional_phrases[0].parts()[0];
    assert_eq!(pp.spatial_score, Some(0.1));
}

#[test]
fn spatial_cutoff_prunes_the_contradiction() {
    let mut executor = LatnExecutor::new().with_config(ExecutorConfig {
        pp_score_cutoff: Some(0.3),
        ..ExecutorConfig::default()
    });
    let mut scene = SceneModel::new();
    scene.add_object(scene_object("box", "box-1", [0.0, 1.0, 0.0]));
    scene.add_object(scene_object("table", "table-1", [0.0, 0.0, 0.0]));
    executor.attach_scene(scene);

    let result = executor.execute_layer3("the box under the table", true);
    assert!(!result.success);
    assert!(result.hypotheses.is_empty());
    // The lower layers survive for diagnosis.
    assert!(result.layer2.success);
    assert_eq!(result.spatial_results[0].score, 0.1);
}

#[test]
fn runtime_vocabulary_learning_round_trip() {
    let mut executor = LatnExecutor::new();

    let result = executor.execute_layer5("'huge' is very large", false);
    assert!(result.success);
    let sentence = first_sentence(&result);
    assert_eq!(sentence.kind, SentenceKind::Definition);
    executor.apply_definition(sentence.definition.as_ref().unwrap());

    let result = executor.execute_layer5("'sky blue' is blue and green", false);
    let sentence = first_sentence(&result);
    assert_eq!(sentence.kind, SentenceKind::Definition);
    assert_eq!(sentence.definition.as_ref().unwrap().word, "sky blue");
    executor.apply_definition(sentence.definition.as_ref().unwrap());

    let result = executor.execute_layer5("draw a huge sky blue box", false);
    assert!(result.success);
    let sentence = first_sentence(&result);
    assert_eq!(sentence.kind, SentenceKind::Imperative);

    let vp = match sentence.predicate.unwrap().as_ref() {
        Constituent::Single(vp) => vp.clone(),
        Constituent::Coordinated(_) => panic!("expected a single verb phrase"),
    };
    let object = vp.object.unwrap();
    let np = &object.parts()[0];
    assert_eq!(np.head_noun(), Some("box"));
    // huge: large (2.0) boosted by very (1.5)
    assert_eq!(np.vector.get(Dimension::ScaleX), 3.0);
    // sky blue: blended blue and green
    assert_eq!(np.vector.get(Dimension::Blue), 1.0);
    assert_eq!(np.vector.get(Dimension::Green), 1.0);
    assert_eq!(np.vector.get(Dimension::Red), 0.0);
}
