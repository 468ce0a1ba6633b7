use super::{
    Transfer, element_to_do, element_to_dto, list_to_do, list_to_dto, text_to_do, text_to_dto,
};
use crate::domain::{
    BackgroundDo, BannerColorsDo, BannerIconDataDo, BannerIconGroupDo, BannerIconsDo,
    ColorEntryDo, IconDo,
};
use crate::transfer::{
    BackgroundDto, BannerColorsDto, BannerIconDataDto, BannerIconGroupDto, BannerIconsDto,
    ColorEntryDto, IconDto,
};

impl Transfer for BannerIconsDo {
    type Dto = BannerIconsDto;

    fn to_dto(&self) -> BannerIconsDto {
        BannerIconsDto {
            kind: text_to_dto(&self.kind),
            banner_icon_data: element_to_dto(&self.banner_icon_data),
        }
    }

    fn from_dto(dto: &BannerIconsDto) -> Self {
        Self {
            kind: text_to_do(&dto.kind),
            banner_icon_data: element_to_do(&dto.banner_icon_data),
        }
    }
}

impl Transfer for BannerIconDataDo {
    type Dto = BannerIconDataDto;

    fn to_dto(&self) -> BannerIconDataDto {
        BannerIconDataDto {
            icon_groups: list_to_dto(&self.icon_groups),
            banner_colors: element_to_dto(&self.banner_colors),
        }
    }

    fn from_dto(dto: &BannerIconDataDto) -> Self {
        Self {
            icon_groups: list_to_do(&dto.icon_groups),
            banner_colors: element_to_do(&dto.banner_colors),
        }
    }
}

impl Transfer for BannerIconGroupDo {
    type Dto = BannerIconGroupDto;

    fn to_dto(&self) -> BannerIconGroupDto {
        BannerIconGroupDto {
            id: text_to_dto(&self.id),
            name: text_to_dto(&self.name),
            is_pattern: text_to_dto(&self.is_pattern),
            backgrounds: list_to_dto(&self.backgrounds),
            icons: list_to_dto(&self.icons),
        }
    }

    fn from_dto(dto: &BannerIconGroupDto) -> Self {
        Self {
            id: text_to_do(&dto.id),
            name: text_to_do(&dto.name),
            is_pattern: text_to_do(&dto.is_pattern),
            backgrounds: list_to_do(&dto.backgrounds),
            icons: list_to_do(&dto.icons),
        }
    }
}

impl Transfer for BackgroundDo {
    type Dto = BackgroundDto;

    fn to_dto(&self) -> BackgroundDto {
        BackgroundDto {
            id: text_to_dto(&self.id),
            mesh_name: text_to_dto(&self.mesh_name),
            is_base_background: text_to_dto(&self.is_base_background),
        }
    }

    fn from_dto(dto: &BackgroundDto) -> Self {
        Self {
            id: text_to_do(&dto.id),
            mesh_name: text_to_do(&dto.mesh_name),
            is_base_background: text_to_do(&dto.is_base_background),
        }
    }
}

impl Transfer for IconDo {
    type Dto = IconDto;

    fn to_dto(&self) -> IconDto {
        IconDto {
            id: text_to_dto(&self.id),
            material_name: text_to_dto(&self.material_name),
            texture_index: text_to_dto(&self.texture_index),
            is_reserved: text_to_dto(&self.is_reserved),
        }
    }

    fn from_dto(dto: &IconDto) -> Self {
        Self {
            id: text_to_do(&dto.id),
            material_name: text_to_do(&dto.material_name),
            texture_index: text_to_do(&dto.texture_index),
            is_reserved: text_to_do(&dto.is_reserved),
        }
    }
}

impl Transfer for BannerColorsDo {
    type Dto = BannerColorsDto;

    fn to_dto(&self) -> BannerColorsDto {
        BannerColorsDto {
            colors: list_to_dto(&self.colors),
        }
    }

    fn from_dto(dto: &BannerColorsDto) -> Self {
        Self {
            colors: list_to_do(&dto.colors),
        }
    }
}

impl Transfer for ColorEntryDo {
    type Dto = ColorEntryDto;

    fn to_dto(&self) -> ColorEntryDto {
        ColorEntryDto {
            id: text_to_dto(&self.id),
            hex: text_to_dto(&self.hex),
            player_can_choose_for_background: text_to_dto(&self.player_can_choose_for_background),
            player_can_choose_for_sigil: text_to_dto(&self.player_can_choose_for_sigil),
        }
    }

    fn from_dto(dto: &ColorEntryDto) -> Self {
        Self {
            id: text_to_do(&dto.id),
            hex: text_to_do(&dto.hex),
            player_can_choose_for_background: text_to_do(&dto.player_can_choose_for_background),
            player_can_choose_for_sigil: text_to_do(&dto.player_can_choose_for_sigil),
        }
    }
}
