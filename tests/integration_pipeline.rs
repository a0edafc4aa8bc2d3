//! Whole-stack integration through the root crate.

use latn::latn_core::{Constituent, Dimension, SentenceKind};
use latn::latn_vocab::Vocabulary;
use latn::{LatnExecutor, SceneModel, SceneObject};

fn positioned(name: &str, id: &str, pos: [f32; 3]) -> SceneObject {
    let vocab = Vocabulary::builtin();
    let mut vector = vocab.vector_from_word(name).unwrap();
    vector.set(Dimension::LocX, pos[0]);
    vector.set(Dimension::LocY, pos[1]);
    vector.set(Dimension::LocZ, pos[2]);
    for dim in [Dimension::ScaleX, Dimension::ScaleY, Dimension::ScaleZ] {
        vector.set(dim, 1.0);
    }
    SceneObject::with_id(name, vector, id)
}

#[test]
fn multi_pp_command_parses_and_grounds() {
    let mut executor = LatnExecutor::new();
    let mut scene = SceneModel::new();
    scene.add_object(positioned("table", "table-1", [0.0, 0.0, 0.0]));
    scene.add_object(positioned("box", "box-1", [0.0, 2.0, 0.0]));
    scene.add_object(positioned("pyramid", "pyramid-1", [2.0, 0.0, 0.0]));
    executor.attach_scene(scene);

    let result = executor.execute_layer5("move the box above the table to [3,4,5]", false);
    assert!(result.success, "{}", result.description);

    let sentence = match result.sentence_phrases[0].as_ref() {
        Constituent::Single(sp) => sp.clone(),
        Constituent::Coordinated(_) => panic!("expected one sentence"),
    };
    assert_eq!(sentence.kind, SentenceKind::Imperative);

    let vp = match sentence.predicate.unwrap().as_ref() {
        Constituent::Single(vp) => vp.clone(),
        Constituent::Coordinated(_) => panic!("expected one verb phrase"),
    };
    assert_eq!(vp.verb_word(), Some("move"));

    // Direct object grounded against the scene.
    let object = vp.object.as_ref().unwrap();
    let np = &object.parts()[0];
    assert_eq!(np.resolved_entity().unwrap().entity_id(), "box-1");

    // Both adjuncts survive: the spatial constraint and the destination.
    assert_eq!(vp.preps.len(), 2);
    let above = &vp.preps[0].parts()[0];
    assert_eq!(above.preposition_word(), Some("above"));
    assert_eq!(above.spatial_score, Some(1.0));
    let to = &vp.preps[1].parts()[0];
    assert_eq!(to.preposition_word(), Some("to"));
    assert!(to.has_literal_object());
}

#[test]
fn identification_and_declarative_coexist() {
    let executor = LatnExecutor::new();

    let identification = executor.execute_layer5("the red cube", false);
    assert!(identification.success);
    let sentence = match identification.sentence_phrases[0].as_ref() {
        Constituent::Single(sp) => sp.clone(),
        Constituent::Coordinated(_) => panic!(),
    };
    assert_eq!(sentence.kind, SentenceKind::Identification);

    let declarative = executor.execute_layer5("the cube is very large", false);
    assert!(declarative.success);
    let sentence = match declarative.sentence_phrases[0].as_ref() {
        Constituent::Single(sp) => sp.clone(),
        Constituent::Coordinated(_) => panic!(),
    };
    assert_eq!(sentence.kind, SentenceKind::Declarative);
    let adj = sentence.predicate_adjective.unwrap();
    assert_eq!(adj.get(Dimension::ScaleX), 3.0);
}

#[test]
fn coordinated_command_folds_both_verb_phrases() {
    let executor = LatnExecutor::new();
    let result = executor.execute_layer5("draw a cube and move it to [1,2,3]", false);
    assert!(result.success);

    let sentence = match result.sentence_phrases[0].as_ref() {
        Constituent::Single(sp) => sp.clone(),
        Constituent::Coordinated(_) => panic!("coordination lives inside the VP"),
    };
    assert_eq!(sentence.kind, SentenceKind::Imperative);
    match sentence.predicate.unwrap().as_ref() {
        Constituent::Coordinated(conj) => {
            assert_eq!(conj.children.len(), 2);
            assert_eq!(conj.children[0].verb_word(), Some("draw"));
            assert_eq!(conj.children[1].verb_word(), Some("move"));
        }
        Constituent::Single(_) => panic!("expected coordinated verb phrases"),
    }
}

#[test]
fn unknown_words_degrade_gracefully_end_to_end() {
    let executor = LatnExecutor::new();
    let result = executor.execute_layer5("draw a frobnicated cube", false);
    // The unknown adjective blocks the NP parse, but the pipeline still
    // reports the lower layers instead of failing hard.
    assert!(result.layer4.layer3.layer2.layer1.success);
    let unknowns: Vec<_> = result.layer4.layer3.layer2.layer1.hypotheses[0]
        .tokens
        .iter()
        .filter(|t| t.isa(Dimension::Unknown))
        .collect();
    assert_eq!(unknowns.len(), 1);
}
