//! File-name to model-name conversion.
//!
//! `combat_parameters.xml` becomes `CombatParameters`. A handful of files do not follow
//! the snake-case rule or collide with common type names and are looked up in a table.

use heck::ToUpperCamelCase;

const SPECIAL_MAPPINGS: &[(&str, &str)] = &[
    ("action", "ActionType"),
    ("actions", "ActionTypes"),
    ("object", "GameObjectType"),
    ("objects", "GameObjects"),
    ("mp_crafting_pieces", "MpCraftingPieces"),
    ("mpbodypropertytemplates", "MpBodyPropertyTemplates"),
    ("mpclassdivisions", "MpClassDivisions"),
    ("mpcosmetics", "MpCosmetics"),
    ("before_transparents_graph", "BeforeTransparentsGraph"),
    ("thumbnail_postfx_graphs", "ThumbnailPostfxGraphs"),
    ("particle_systems2", "ParticleSystems2"),
    ("particle_systems_hardcoded_misc1", "ParticleSystemsHardcodedMisc1"),
    ("particle_systems_hardcoded_misc2", "ParticleSystemsHardcodedMisc2"),
    ("looknfeel", "LookAndFeel"),
    ("flora_layer_sets", "FloraLayerSets"),
    ("prebaked_animations", "PrebakedAnimations"),
    ("prerender", "Prerender"),
];

/// Language string tables share one model regardless of their file name.
const LANGUAGE_PREFIX: &str = "std_";
const LANGUAGE_MODEL: &str = "LanguageBase";

/// Strips a trailing `.xml` in any case.
pub fn base_name(file_name: &str) -> &str {
    let len = file_name.len();
    match file_name.get(len.saturating_sub(4)..) {
        Some(ext) if len >= 4 && ext.eq_ignore_ascii_case(".xml") => &file_name[..len - 4],
        _ => file_name,
    }
}

/// Converts an XML file name (with or without the `.xml` extension) to its model name.
///
/// Returns an empty string for empty input.
pub fn convert_to_model_name(file_name: &str) -> String {
    let lower = base_name(file_name).to_lowercase();
    if lower.is_empty() {
        return String::new();
    }
    if let Some(name) = special_mapping(&lower) {
        return name.to_string();
    }
    if lower.starts_with(LANGUAGE_PREFIX) {
        return LANGUAGE_MODEL.to_string();
    }
    lower.to_upper_camel_case()
}

/// Returns `true` when the name is resolved through the lookup table rather than the
/// snake-case rule.
pub fn requires_special_handling(file_name: &str) -> bool {
    let lower = base_name(file_name).to_lowercase();
    special_mapping(&lower).is_some() || lower.starts_with(LANGUAGE_PREFIX)
}

fn special_mapping(lower: &str) -> Option<&'static str> {
    SPECIAL_MAPPINGS
        .iter()
        .find(|(file, _)| *file == lower)
        .map(|(_, model)| *model)
}
