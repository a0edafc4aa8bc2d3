//! The scene model: an ordered collection of entities with noun-phrase
//! matching and pronoun resolution.

use crate::entity::{SceneAssembly, SceneEntity, SceneObject};
use crate::{SceneError, SceneResult};
use latn_core::NounPhrase;
use std::sync::Arc;

/// The universal noun: matches any entity name.
const UNIVERSAL_NOUN: &str = "object";

/// A read-queryable 3D scene. The parser never mutates it; the host mutates
/// between parses.
#[derive(Debug, Clone, Default)]
pub struct SceneModel {
    entities: Vec<Arc<SceneEntity>>,
    recent: Vec<Arc<SceneEntity>>,
}

impl SceneModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an atomic object; it becomes the most recent entity.
    pub fn add_object(&mut self, object: SceneObject) -> Arc<SceneEntity> {
        self.add_entity(SceneEntity::Object(object))
    }

    /// Add an assembly; it becomes the most recent entity.
    pub fn add_assembly(&mut self, assembly: SceneAssembly) -> Arc<SceneEntity> {
        self.add_entity(SceneEntity::Assembly(assembly))
    }

    pub fn add_entity(&mut self, entity: SceneEntity) -> Arc<SceneEntity> {
        let handle = Arc::new(entity);
        self.entities.push(Arc::clone(&handle));
        self.recent = vec![Arc::clone(&handle)];
        handle
    }

    /// All entities, in insertion order.
    #[must_use]
    pub fn entities(&self) -> &[Arc<SceneEntity>] {
        &self.entities
    }

    /// Standalone objects only.
    pub fn objects(&self) -> impl Iterator<Item = &Arc<SceneEntity>> {
        self.entities.iter().filter(|e| !e.is_assembly())
    }

    /// Assemblies only.
    pub fn assemblies(&self) -> impl Iterator<Item = &Arc<SceneEntity>> {
        self.entities.iter().filter(|e| e.is_assembly())
    }

    /// Find a top-level entity, or an object nested in an assembly, by id.
    #[must_use]
    pub fn find_entity(&self, entity_id: &str) -> Option<Arc<SceneEntity>> {
        for entity in &self.entities {
            if entity.entity_id() == entity_id {
                return Some(Arc::clone(entity));
            }
            if let SceneEntity::Assembly(assembly) = entity.as_ref() {
                for member in assembly.objects() {
                    if member.entity_id() == entity_id {
                        return Some(Arc::clone(member));
                    }
                }
            }
        }
        None
    }

    /// Remove a top-level entity by id; returns whether anything was removed.
    pub fn remove_entity(&mut self, entity_id: &str) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| e.entity_id() != entity_id);
        self.recent.retain(|e| e.entity_id() != entity_id);
        self.entities.len() != before
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.recent.clear();
    }

    /// Move a standalone object into an assembly. Returns whether both ends
    /// of the move existed.
    pub fn move_object_to_assembly(&mut self, object_id: &str, assembly_id: &str) -> bool {
        let Some(object) = self.entities.iter().find_map(|e| match e.as_ref() {
            SceneEntity::Object(o) if o.object_id == object_id => Some(o.clone()),
            _ => None,
        }) else {
            return false;
        };
        let Some(assembly) = self
            .entities
            .iter_mut()
            .find(|e| e.is_assembly() && e.entity_id() == assembly_id)
        else {
            return false;
        };
        match Arc::make_mut(assembly) {
            SceneEntity::Assembly(a) => a.add_object(object),
            SceneEntity::Object(_) => return false,
        }
        self.entities
            .retain(|e| e.is_assembly() || e.entity_id() != object_id);
        self.recent.retain(|e| e.entity_id() != object_id);
        true
    }

    /// Pull an object out of whichever assembly holds it and make it
    /// standalone again.
    pub fn extract_object_from_assembly(&mut self, object_id: &str) -> bool {
        let mut extracted = None;
        for entity in &mut self.entities {
            let holds_member = matches!(
                entity.as_ref(),
                SceneEntity::Assembly(a)
                    if a.objects().iter().any(|m| m.entity_id() == object_id)
            );
            if !holds_member {
                continue;
            }
            if let SceneEntity::Assembly(assembly) = Arc::make_mut(entity) {
                if let Some(member) = assembly
                    .objects()
                    .iter()
                    .find(|m| m.entity_id() == object_id)
                {
                    if let SceneEntity::Object(object) = member.as_ref() {
                        extracted = Some(object.clone());
                    }
                }
                assembly.remove_object(object_id);
            }
            break;
        }
        match extracted {
            Some(object) => {
                self.entities.push(Arc::new(SceneEntity::Object(object)));
                true
            }
            None => false,
        }
    }

    /// Match a noun phrase against the scene.
    ///
    /// Requires an exact name match first (`"object"` matches anything),
    /// then ranks candidates by semantic similarity on the NP's vector.
    /// Assemblies are searched before standalone objects, then objects
    /// nested inside assemblies. Only positive-similarity candidates are
    /// returned; with `return_all = false` the list is truncated to the best
    /// match.
    #[must_use]
    pub fn find_noun_phrase(
        &self,
        np: &NounPhrase,
        return_all: bool,
    ) -> Vec<(f32, Arc<SceneEntity>)> {
        let noun = np.head_noun().map(str::to_lowercase);
        let mut candidates: Vec<(f32, Arc<SceneEntity>)> = Vec::new();

        let mut consider = |entity: &Arc<SceneEntity>| {
            if let Some(noun) = &noun {
                if noun != UNIVERSAL_NOUN && entity.name() != noun {
                    return;
                }
            }
            let similarity = np.vector.semantic_similarity(entity.vector());
            if similarity > 0.0 {
                candidates.push((similarity, Arc::clone(entity)));
            }
        };

        for assembly in self.assemblies() {
            consider(assembly);
        }
        for object in self.objects() {
            consider(object);
        }
        for assembly in self.assemblies() {
            if let SceneEntity::Assembly(a) = assembly.as_ref() {
                for member in a.objects() {
                    consider(member);
                }
            }
        }

        candidates.sort_by(|a, b| b.0.total_cmp(&a.0));
        tracing::debug!(
            noun = noun.as_deref().unwrap_or("<none>"),
            matches = candidates.len(),
            "noun phrase query"
        );
        if !return_all {
            candidates.truncate(1);
        }
        candidates
    }

    /// Resolve a pronoun: `it` is the most recently added entity;
    /// `they`/`them` are all entities.
    pub fn resolve_pronoun(&self, word: &str) -> SceneResult<Vec<Arc<SceneEntity>>> {
        match word.to_lowercase().as_str() {
            "it" => Ok(self.recent.last().map(Arc::clone).into_iter().collect()),
            "they" | "them" => Ok(self.entities.to_vec()),
            other => Err(SceneError::UnknownPronoun(other.to_string())),
        }
    }
}
