//! The structured film plan produced from a synopsis.
//!
//! A [`FilmPlan`] is only ever persisted in full: every field is required at
//! the type level, so a partially populated plan cannot be represented. The
//! generation client deserializes provider output into this type, which is
//! the defensive shape check the provider's schema guarantee is verified
//! against.

use serde::{Deserialize, Serialize};

/// One principal character of the film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Narrative role (e.g. protagonist, antagonist).
    pub role: String,
    /// Short description: psychology and appearance.
    pub description: String,
}

/// Structured plan generated from a synopsis.
///
/// The prompt asks for 3-5 characters and 5-10 scenes, but those
/// cardinalities are not enforced here: an empty sequence is a degenerate
/// but structurally valid result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmPlan {
    /// Principal characters, in the order the model proposed them.
    pub characters: Vec<Character>,
    /// Narrative-arc summary: tone, stakes, progression.
    pub storytelling: String,
    /// Key scenes in sequence order.
    pub script_plan: Vec<String>,
}
