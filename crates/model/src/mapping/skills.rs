use super::{
    Transfer, list_to_do, list_to_dto, text_to_do, text_to_dto, wrapped_to_do, wrapped_to_dto,
};
use crate::domain::{AttributeModifierDo, SkillDataDo, SkillsDo};
use crate::transfer::{AttributeModifierDto, SkillDataDto, SkillsDto};

impl Transfer for SkillsDo {
    type Dto = SkillsDto;

    fn to_dto(&self) -> SkillsDto {
        SkillsDto {
            skills: list_to_dto(&self.skills),
        }
    }

    fn from_dto(dto: &SkillsDto) -> Self {
        Self {
            skills: list_to_do(&dto.skills),
        }
    }
}

impl Transfer for SkillDataDo {
    type Dto = SkillDataDto;

    fn to_dto(&self) -> SkillDataDto {
        SkillDataDto {
            id: text_to_dto(&self.id),
            name: text_to_dto(&self.name),
            modifiers: wrapped_to_dto(&self.modifiers),
            documentation: text_to_dto(&self.documentation),
        }
    }

    fn from_dto(dto: &SkillDataDto) -> Self {
        Self {
            id: text_to_do(&dto.id),
            name: text_to_do(&dto.name),
            modifiers: wrapped_to_do(&dto.modifiers),
            documentation: text_to_do(&dto.documentation),
        }
    }
}

impl Transfer for AttributeModifierDo {
    type Dto = AttributeModifierDto;

    fn to_dto(&self) -> AttributeModifierDto {
        AttributeModifierDto {
            attrib_code: text_to_dto(&self.attrib_code),
            modification: text_to_dto(&self.modification),
            value: text_to_dto(&self.value),
        }
    }

    fn from_dto(dto: &AttributeModifierDto) -> Self {
        Self {
            attrib_code: text_to_do(&dto.attrib_code),
            modification: text_to_do(&dto.modification),
            value: text_to_do(&dto.value),
        }
    }
}
