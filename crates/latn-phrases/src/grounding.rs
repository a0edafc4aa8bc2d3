//! Scene-dependent grounding stages.
//!
//! Layer 2 grounding binds noun phrases to scene entities, multiplying
//! hypotheses across matches; Layer 3 grounding scores prepositional
//! phrases for spatial plausibility. Both are optional: without a scene the
//! folded hypotheses pass through untouched, and a failure to ground is
//! never fatal to the parse.

use crate::np_layer::np_token;
use crate::pp_layer::pp_token;
use latn_core::{
    Dimension, GroundedEntity, Hypothesis, NounPhrase, dedup_hypotheses, sort_hypotheses,
};
use latn_scene::{SceneEntity, SceneModel, spatial};
use std::sync::Arc;

/// Outcome of one noun-phrase grounding attempt.
#[derive(Debug, Clone)]
pub struct NpGroundingRecord {
    /// Display form of the noun phrase.
    pub phrase: String,
    /// Best-matching entity, when any matched.
    pub entity_id: Option<String>,
    /// Similarity of the best match.
    pub similarity: f32,
    /// Number of alternative matches considered.
    pub alternatives: usize,
    pub success: bool,
}

/// Outcome of one prepositional-phrase spatial validation.
#[derive(Debug, Clone)]
pub struct PpGroundingRecord {
    pub preposition: String,
    pub moving_id: String,
    pub reference_id: String,
    pub score: f32,
}

/// One bindable noun phrase inside a hypothesis.
struct Site {
    token_idx: usize,
    part_idx: usize,
    matches: Vec<(f32, Arc<SceneEntity>)>,
}

/// Bind ungrounded noun phrases in each hypothesis to scene entities.
///
/// With `return_all = true` a hypothesis with `k` noun phrases matching
/// `m_1..m_k` entities becomes `m_1 * ... * m_k` grounded hypotheses; with
/// `return_all = false` each phrase binds its single best match. Phrases
/// with no match stay ungrounded and the hypothesis survives.
pub fn ground_noun_phrases(
    hypotheses: &[Hypothesis],
    scene: &SceneModel,
    return_all: bool,
    max_matches: Option<usize>,
) -> (Vec<Hypothesis>, Vec<NpGroundingRecord>) {
    let mut grounded = Vec::new();
    let mut records = Vec::new();

    for hypothesis in hypotheses {
        let sites = collect_sites(hypothesis, scene, return_all, max_matches, &mut records);
        if sites.is_empty() {
            grounded.push(hypothesis.clone());
            continue;
        }

        let mut expansions = vec![hypothesis.clone()];
        for site in &sites {
            let mut next = Vec::with_capacity(expansions.len() * site.matches.len());
            for expansion in &expansions {
                for (similarity, entity) in &site.matches {
                    next.push(bind(expansion, site, *similarity, Arc::clone(entity)));
                }
            }
            expansions = next;
        }
        grounded.extend(expansions);
    }

    dedup_hypotheses(&mut grounded);
    sort_hypotheses(&mut grounded);
    (grounded, records)
}

fn collect_sites(
    hypothesis: &Hypothesis,
    scene: &SceneModel,
    return_all: bool,
    max_matches: Option<usize>,
    records: &mut Vec<NpGroundingRecord>,
) -> Vec<Site> {
    let mut sites = Vec::new();

    for (token_idx, token) in hypothesis.tokens.iter().enumerate() {
        let Some(constituent) = token.noun_phrase() else {
            continue;
        };
        for (part_idx, np) in constituent.parts().into_iter().enumerate() {
            if np.is_resolved() || np.vector.isa(Dimension::VectorLit) {
                continue;
            }
            let mut matches = find_matches(np, scene, return_all);
            if let Some(cap) = max_matches {
                matches.truncate(cap);
            }
            records.push(NpGroundingRecord {
                phrase: np.source_text(),
                entity_id: matches.first().map(|(_, e)| e.entity_id().to_string()),
                similarity: matches.first().map_or(0.0, |(s, _)| *s),
                alternatives: matches.len(),
                success: !matches.is_empty(),
            });
            if matches.is_empty() {
                tracing::debug!(phrase = %np.source_text(), "noun phrase grounding failed");
                continue;
            }
            sites.push(Site {
                token_idx,
                part_idx,
                matches,
            });
        }
    }

    sites
}

fn find_matches(
    np: &NounPhrase,
    scene: &SceneModel,
    return_all: bool,
) -> Vec<(f32, Arc<SceneEntity>)> {
    if let Some(pronoun) = &np.pronoun {
        let word = pronoun.word().unwrap_or_default();
        return match scene.resolve_pronoun(word) {
            Ok(entities) => {
                let mut matches: Vec<(f32, Arc<SceneEntity>)> =
                    entities.into_iter().map(|e| (1.0, e)).collect();
                if !return_all {
                    matches.truncate(1);
                }
                matches
            }
            Err(_) => Vec::new(),
        };
    }
    scene.find_noun_phrase(np, return_all)
}

fn bind(hypothesis: &Hypothesis, site: &Site, similarity: f32, entity: Arc<SceneEntity>) -> Hypothesis {
    let mut bound = hypothesis.clone();
    let mut constituent = bound.tokens[site.token_idx]
        .noun_phrase()
        .expect("site indexes a noun phrase token")
        .as_ref()
        .clone();

    let entity_id = entity.entity_id().to_string();
    let handle: Arc<dyn GroundedEntity> = entity;
    constituent.parts_mut()[site.part_idx].resolve_to(handle, similarity);

    let arc = Arc::new(constituent);
    bound.tokens[site.token_idx] = np_token(&arc);
    bound.confidence = (bound.confidence * (0.5 + 0.5 * similarity)).min(1.0);
    bound.description = format!("{} + SO -> {}", bound.description, entity_id);
    bound
}

/// Score spatially-constrained prepositional phrases against the scene.
///
/// Each PP with a grounded reference and a grounded moving entity (the
/// nearest preceding grounded noun phrase) is annotated with its spatial
/// score, and the hypothesis confidence is scaled by it. When `cutoff` is
/// set, hypotheses whose worst-scoring PP falls below it are pruned.
pub fn ground_prep_phrases(
    hypotheses: &[Hypothesis],
    cutoff: Option<f32>,
) -> (Vec<Hypothesis>, Vec<PpGroundingRecord>) {
    let mut scored = Vec::new();
    let mut records = Vec::new();

    for hypothesis in hypotheses {
        let (annotated, worst) = annotate_hypothesis(hypothesis, &mut records);
        match (cutoff, worst) {
            (Some(cutoff), Some(worst)) if worst < cutoff => {
                tracing::debug!(worst, cutoff, "hypothesis pruned by spatial cutoff");
            }
            _ => scored.push(annotated),
        }
    }

    dedup_hypotheses(&mut scored);
    sort_hypotheses(&mut scored);
    (scored, records)
}

fn annotate_hypothesis(
    hypothesis: &Hypothesis,
    records: &mut Vec<PpGroundingRecord>,
) -> (Hypothesis, Option<f32>) {
    let mut annotated = hypothesis.clone();
    let mut worst: Option<f32> = None;

    for token_idx in 0..annotated.tokens.len() {
        if annotated.tokens[token_idx].prep_phrase().is_none() {
            continue;
        }
        let moving = nearest_grounded_np(&annotated.tokens[..token_idx]);
        let mut constituent = annotated.tokens[token_idx]
            .prep_phrase()
            .expect("checked above")
            .as_ref()
            .clone();
        let mut changed = false;

        for pp in constituent.parts_mut() {
            if pp.spatial_score.is_some() {
                continue;
            }
            if pp.has_literal_object() {
                *pp = pp.with_spatial_score(spatial::SCORE_EXACT);
                changed = true;
                continue;
            }
            let spatial_prep = pp.preposition.isa(Dimension::SpatialLocation)
                || pp.preposition.isa(Dimension::SpatialProximity);
            if !spatial_prep {
                continue;
            }
            let reference = pp
                .object
                .parts()
                .iter()
                .find_map(|np| np.resolved_entity().cloned());
            let (Some(moving), Some(reference)) = (moving.clone(), reference) else {
                continue;
            };

            let score = spatial::spatial_score(moving.as_ref(), reference.as_ref(), &pp.preposition);
            records.push(PpGroundingRecord {
                preposition: pp.preposition_word().unwrap_or("?").to_string(),
                moving_id: moving.entity_id().to_string(),
                reference_id: reference.entity_id().to_string(),
                score,
            });
            *pp = pp.with_spatial_score(score);
            annotated.confidence *= score.max(spatial::SCORE_POOR);
            worst = Some(worst.map_or(score, |w: f32| w.min(score)));
            changed = true;
        }

        if changed {
            let arc = Arc::new(constituent);
            annotated.tokens[token_idx] = pp_token(&arc);
            annotated.description =
                format!("{} + PP validated", annotated.description);
        }
    }

    (annotated, worst)
}

/// The nearest preceding grounded noun phrase token: the moving entity of a
/// spatial relation.
fn nearest_grounded_np(tokens: &[latn_core::Token]) -> Option<Arc<dyn GroundedEntity>> {
    tokens.iter().rev().find_map(|token| {
        token
            .noun_phrase()?
            .parts()
            .iter()
            .find_map(|np| np.resolved_entity().cloned())
    })
}
