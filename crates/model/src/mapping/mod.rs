//! Conversions between domain objects and transfer objects.
//!
//! The conversions are pure: no I/O, no logging, no failure. `None` maps to `None`, and
//! lists map element-wise in order. Going from DO to DTO drops presence markers; going
//! back marks every populated field present.

mod attributes;
mod banner_icons;
mod combat_parameters;
mod item_modifiers;
mod skills;

use modforge_xml_mapping::{Presence, XmlModel, is_populated};

/// A domain object with a transfer-object counterpart.
pub trait Transfer: Sized {
    type Dto;

    fn to_dto(&self) -> Self::Dto;

    fn from_dto(dto: &Self::Dto) -> Self;
}

pub fn to_dto<D: Transfer>(source: Option<&D>) -> Option<D::Dto> {
    source.map(D::to_dto)
}

pub fn to_do<D, T>(source: Option<&T>) -> Option<D>
where
    D: Transfer<Dto = T>,
{
    source.map(D::from_dto)
}

/// Maps each item in order. A missing list maps to an empty one.
pub fn to_dto_list<D: Transfer>(source: Option<&[D]>) -> Vec<D::Dto> {
    source
        .map(|items| items.iter().map(D::to_dto).collect())
        .unwrap_or_default()
}

/// Maps each item in order. A missing list maps to an empty one.
pub fn to_do_list<D, T>(source: Option<&[T]>) -> Vec<D>
where
    D: Transfer<Dto = T>,
{
    source
        .map(|items| items.iter().map(D::from_dto).collect())
        .unwrap_or_default()
}

pub(crate) fn text_to_dto(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub(crate) fn text_to_do(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// A present-but-empty element becomes a default DTO so the element survives the trip.
pub(crate) fn element_to_dto<D: Transfer + Default>(value: &Presence<D>) -> Option<D::Dto> {
    match value {
        Presence::Absent => None,
        Presence::Empty => Some(D::default().to_dto()),
        Presence::Value(value) => Some(value.to_dto()),
    }
}

pub(crate) fn element_to_do<D, T>(value: &Option<T>) -> Presence<D>
where
    D: Transfer<Dto = T> + XmlModel,
{
    match value {
        None => Presence::Absent,
        Some(dto) => {
            let value = D::from_dto(dto);
            if is_populated(&value) {
                Presence::Value(value)
            } else {
                Presence::Empty
            }
        }
    }
}

pub(crate) fn wrapped_to_dto<D: Transfer>(value: &Presence<Vec<D>>) -> Option<Vec<D::Dto>> {
    match value {
        Presence::Absent => None,
        Presence::Empty => Some(Vec::new()),
        Presence::Value(items) => Some(items.iter().map(D::to_dto).collect()),
    }
}

pub(crate) fn wrapped_to_do<D, T>(value: &Option<Vec<T>>) -> Presence<Vec<D>>
where
    D: Transfer<Dto = T>,
{
    match value {
        None => Presence::Absent,
        Some(items) if items.is_empty() => Presence::Empty,
        Some(items) => Presence::Value(items.iter().map(D::from_dto).collect()),
    }
}

pub(crate) fn list_to_dto<D: Transfer>(items: &[D]) -> Vec<D::Dto> {
    items.iter().map(D::to_dto).collect()
}

pub(crate) fn list_to_do<D, T>(items: &[T]) -> Vec<D>
where
    D: Transfer<Dto = T>,
{
    items.iter().map(D::from_dto).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_conversion() {
        assert_eq!(text_to_dto(&None), "");
        assert_eq!(text_to_dto(&Some("x".to_string())), "x");
        assert_eq!(text_to_do(""), None);
        assert_eq!(text_to_do("x"), Some("x".to_string()));
    }
}
