use super::{Transfer, list_to_do, list_to_dto, text_to_do, text_to_dto};
use crate::domain::{AttributeDataDo, AttributesDo};
use crate::transfer::{AttributeDataDto, AttributesDto};

impl Transfer for AttributesDo {
    type Dto = AttributesDto;

    fn to_dto(&self) -> AttributesDto {
        AttributesDto {
            attributes: list_to_dto(&self.attributes),
        }
    }

    fn from_dto(dto: &AttributesDto) -> Self {
        Self {
            attributes: list_to_do(&dto.attributes),
        }
    }
}

impl Transfer for AttributeDataDo {
    type Dto = AttributeDataDto;

    fn to_dto(&self) -> AttributeDataDto {
        AttributeDataDto {
            id: text_to_dto(&self.id),
            name: text_to_dto(&self.name),
            source: text_to_dto(&self.source),
            documentation: text_to_dto(&self.documentation),
        }
    }

    fn from_dto(dto: &AttributeDataDto) -> Self {
        Self {
            id: text_to_do(&dto.id),
            name: text_to_do(&dto.name),
            source: text_to_do(&dto.source),
            documentation: text_to_do(&dto.documentation),
        }
    }
}
