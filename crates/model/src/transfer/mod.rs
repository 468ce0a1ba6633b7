//! Transfer objects: defaulted, presence-free mirrors of the domain types.
//!
//! Scalars are plain `String`s (empty when the attribute was missing), collections are
//! `Vec`s, and nested structures are `Option`s. Wrapped collections are
//! `Option<Vec<_>>` so that `None` and `Some(vec![])` keep the absent and empty states
//! apart when a DTO travels through JSON.

pub mod attributes;
pub mod banner_icons;
pub mod combat_parameters;
pub mod item_modifiers;
pub mod skills;

pub use attributes::{AttributeDataDto, AttributesDto};
pub use banner_icons::{
    BackgroundDto, BannerColorsDto, BannerIconDataDto, BannerIconGroupDto, BannerIconsDto,
    ColorEntryDto, IconDto,
};
pub use combat_parameters::{
    CombatParameterDto, CombatParametersDto, CustomCollisionCapsuleDto, DefDto,
};
pub use item_modifiers::{ItemModifierDto, ItemModifiersDto};
pub use skills::{AttributeModifierDto, SkillDataDto, SkillsDto};
