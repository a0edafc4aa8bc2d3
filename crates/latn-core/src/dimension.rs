//! The closed enumeration of semantic vector dimensions.
//!
//! Every vocabulary entry, stream token, phrase and scene entity carries a
//! feature vector indexed by [`Dimension`]. The set of dimensions is fixed at
//! build time; string names exist only at the serialization and diagnostic
//! boundary, so indexed access can never fail.

use crate::CoreError;
use serde::{Deserialize, Serialize};

macro_rules! dimensions {
    ($($variant:ident => $name:literal,)+) => {
        /// A named slot in the fixed-width feature vector.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(usize)]
        pub enum Dimension {
            $(#[serde(rename = $name)] $variant,)+
        }

        impl Dimension {
            /// Every dimension, in index order.
            pub const ALL: &'static [Dimension] = &[$(Dimension::$variant,)+];

            /// Total number of dimensions.
            pub const COUNT: usize = Dimension::ALL.len();

            /// The serialized / diagnostic name of this dimension.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(Dimension::$variant => $name,)+
                }
            }
        }

        impl std::str::FromStr for Dimension {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Dimension::$variant),)+
                    _ => Err(CoreError::UnknownDimension(s.to_string())),
                }
            }
        }
    };
}

dimensions! {
    // Part of speech
    Noun => "noun",
    Verb => "verb",
    Adj => "adj",
    Adv => "adv",
    Det => "det",
    Prep => "prep",
    Conj => "conj",
    Disj => "disj",
    Neg => "neg",
    Modal => "modal",
    Question => "question",
    Tobe => "tobe",
    Pronoun => "pronoun",
    Quoted => "quoted",
    Unknown => "unknown",
    VectorLit => "vector",
    Np => "np",
    Pp => "pp",
    Vp => "vp",
    Sp => "sp",
    So => "so",
    Assembly => "assembly",
    Unit => "unit",
    Comma => "comma",
    // Agreement and number
    Singular => "singular",
    Plural => "plural",
    Def => "def",
    Number => "number",
    // Morphological inflection
    Comp => "comp",
    Super => "super",
    VerbPast => "verb_past",
    VerbPastPart => "verb_past_part",
    VerbPresentPart => "verb_present_part",
    // Color
    Red => "red",
    Green => "green",
    Blue => "blue",
    // Position
    LocX => "loc_x",
    LocY => "loc_y",
    LocZ => "loc_z",
    // Scale
    ScaleX => "scale_x",
    ScaleY => "scale_y",
    ScaleZ => "scale_z",
    // Rotation
    RotX => "rot_x",
    RotY => "rot_y",
    RotZ => "rot_z",
    // Preposition direction factors (kept apart from loc_*: a preposition's
    // direction and a literal's position never share a slot)
    DirX => "dir_x",
    DirY => "dir_y",
    DirZ => "dir_z",
    // Surface
    Texture => "texture",
    Transparency => "transparency",
    // Verb semantics
    Action => "action",
    Create => "create",
    Edit => "edit",
    Organize => "organize",
    Select => "select",
    Style => "style",
    Move => "move",
    Rotate => "rotate",
    ScaleVerb => "scale_v",
    Transform => "transform",
    Naming => "naming",
    // Preposition semantics
    SpatialLocation => "spatial_location",
    SpatialVertical => "spatial_vertical",
    SpatialProximity => "spatial_proximity",
    DirectionalTarget => "directional_target",
    DirectionalAgency => "directional_agency",
    RelationalPossession => "relational_possession",
    RelationalComparison => "relational_comparison",
    // Adverb intensifier
    Adverb => "adverb",
}

impl Dimension {
    /// The semantic payload dimensions of an adjective: the slots scaled by
    /// comparative/superlative inflection and by adverb intensifiers.
    pub const ADJECTIVE_SEMANTICS: &'static [Dimension] = &[
        Dimension::ScaleX,
        Dimension::ScaleY,
        Dimension::ScaleZ,
        Dimension::Red,
        Dimension::Green,
        Dimension::Blue,
        Dimension::Texture,
        Dimension::Transparency,
    ];

    /// The sub-vector used for semantic similarity between a noun phrase and
    /// a scene entity.
    pub const SIMILARITY: &'static [Dimension] = &[
        Dimension::Noun,
        Dimension::Red,
        Dimension::Green,
        Dimension::Blue,
        Dimension::ScaleX,
        Dimension::ScaleY,
        Dimension::ScaleZ,
        Dimension::Texture,
        Dimension::Transparency,
    ];

    /// Phrase-type marker dimensions introduced by the folding layers.
    pub const PHRASE_MARKERS: &'static [Dimension] = &[
        Dimension::Np,
        Dimension::Pp,
        Dimension::Vp,
        Dimension::Sp,
    ];
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
