//! Prompt construction for the plan-generation call.

/// Language the model is instructed to answer in.
const TARGET_LANGUAGE: &str = "Français";

/// Build the single natural-language instruction sent to the model.
///
/// Embeds the synopsis verbatim and directs the model to invent 3-5
/// principal characters, a coherent narrative arc, and a numbered 5-10
/// scene sequence, answering only in the target language. The cardinality
/// bounds live here and only here -- the response schema does not enforce
/// them.
pub fn build_plan_prompt(synopsis: &str) -> String {
    format!(
        "Tu es un producteur et scénariste de cinéma primé. \
         Ton objectif est de transformer ce synopsis brut en un plan de film \
         structuré et captivant.\n\n\
         SYNOPSIS : \"{synopsis}\"\n\n\
         Invente 3 à 5 personnages principaux (nom, rôle, description : \
         psychologie et apparence), résume l'arc narratif (ton et enjeux \
         dramatiques), et propose un séquencier de 5 à 10 scènes clés \
         numérotées. Réponds uniquement en {TARGET_LANGUAGE}."
    )
}
