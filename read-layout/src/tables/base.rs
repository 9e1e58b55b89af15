//! The [BASE](https://learn.microsoft.com/typography/opentype/spec/base)
//! (baseline) table.

use layout_types::{GlyphId, Offset16, Offset32, Tag};

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// The baseline table, versions 1.0 and 1.1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Base {
    /// Y values for horizontal text layout.
    pub horizontal_axis: Option<Axis>,
    /// X values for vertical text layout.
    pub vertical_axis: Option<Axis>,
}

impl FontRead for Base {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let major: u16 = cursor.read()?;
        let minor: u16 = cursor.read()?;
        if major != 1 || minor > 1 {
            return Err(ReadError::InvalidFormat(
                ((major as i64) << 16) | minor as i64,
            ));
        }
        let horiz_axis_offset: Offset16 = cursor.read()?;
        let vert_axis_offset: Offset16 = cursor.read()?;
        if minor == 1 {
            let item_var_store: Offset32 = cursor.read()?;
            if !item_var_store.is_null() {
                log::warn!("BASE: ItemVariationStore is not supported; ignoring");
            }
        }
        Ok(Base {
            horizontal_axis: data.resolve_opt(horiz_axis_offset)?,
            vertical_axis: data.resolve_opt(vert_axis_offset)?,
        })
    }
}

impl Base {
    /// The [`BaseScript`] for a script tag on the given axis, if present.
    pub fn base_script(&self, vertical: bool, script: Tag) -> Option<&BaseScript> {
        let axis = if vertical {
            self.vertical_axis.as_ref()?
        } else {
            self.horizontal_axis.as_ref()?
        };
        axis.scripts
            .iter()
            .find(|record| record.tag == script)
            .map(|record| &record.script)
    }
}

/// Baseline data for one layout direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    /// Registered baseline tags, alphabetical.
    pub baseline_tags: Vec<Tag>,
    pub scripts: Vec<BaseScriptRecord>,
}

impl FontRead for Axis {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let base_tag_list_offset: Offset16 = cursor.read()?;
        let base_script_list_offset: Offset16 = cursor.read()?;
        let baseline_tags = match base_tag_list_offset.non_null() {
            Some(offset) => {
                let tag_data = data.split_off(offset).ok_or(ReadError::OutOfBounds)?;
                let mut tag_cursor = tag_data.cursor();
                let count: u16 = tag_cursor.read()?;
                tag_cursor.read_array(count as usize)?
            }
            None => Vec::new(),
        };
        let scripts = match base_script_list_offset.non_null() {
            Some(offset) => {
                let list_data = data.split_off(offset).ok_or(ReadError::OutOfBounds)?;
                read_base_script_list(list_data)?
            }
            None => Vec::new(),
        };
        Ok(Axis {
            baseline_tags,
            scripts,
        })
    }
}

fn read_base_script_list(data: FontData) -> Result<Vec<BaseScriptRecord>, ReadError> {
    let mut cursor = data.cursor();
    let count: u16 = cursor.read()?;
    let mut offsets = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let tag: Tag = cursor.read()?;
        let offset: Offset16 = cursor.read()?;
        offsets.push((tag, offset));
    }
    let mut records = Vec::with_capacity(offsets.len());
    for (tag, offset) in offsets {
        records.push(BaseScriptRecord {
            tag,
            script: data.resolve(offset)?,
        });
    }
    Ok(records)
}

/// A script tag and its baseline data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseScriptRecord {
    pub tag: Tag,
    pub script: BaseScript,
}

/// Baseline and min/max extent data for one script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseScript {
    pub base_values: Option<BaseValues>,
    pub default_min_max: Option<MinMax>,
    pub lang_sys_records: Vec<BaseLangSysRecord>,
}

impl FontRead for BaseScript {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let base_values_offset: Offset16 = cursor.read()?;
        let default_min_max_offset: Offset16 = cursor.read()?;
        let lang_sys_count: u16 = cursor.read()?;
        let mut lang_sys_offsets = Vec::with_capacity(lang_sys_count as usize);
        for _ in 0..lang_sys_count {
            let tag: Tag = cursor.read()?;
            let offset: Offset16 = cursor.read()?;
            lang_sys_offsets.push((tag, offset));
        }
        let mut lang_sys_records = Vec::with_capacity(lang_sys_offsets.len());
        for (tag, offset) in lang_sys_offsets {
            lang_sys_records.push(BaseLangSysRecord {
                tag,
                min_max: data.resolve(offset)?,
            });
        }
        Ok(BaseScript {
            base_values: data.resolve_opt(base_values_offset)?,
            default_min_max: data.resolve_opt(default_min_max_offset)?,
            lang_sys_records,
        })
    }
}

/// Min/max extents for one language system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseLangSysRecord {
    pub tag: Tag,
    pub min_max: MinMax,
}

/// The baseline coordinates for one script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseValues {
    /// Index of the script's default baseline in the axis baseline tag list.
    pub default_baseline_index: u16,
    /// One coordinate per axis baseline tag, in tag-list order.
    pub base_coords: Vec<BaseCoord>,
}

impl FontRead for BaseValues {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let default_baseline_index: u16 = cursor.read()?;
        let coord_count: u16 = cursor.read()?;
        let coord_offsets: Vec<Offset16> = cursor.read_array(coord_count as usize)?;
        let mut base_coords = Vec::with_capacity(coord_offsets.len());
        for offset in coord_offsets {
            base_coords.push(data.resolve(offset)?);
        }
        Ok(BaseValues {
            default_baseline_index,
            base_coords,
        })
    }
}

/// A single baseline or extent coordinate, in design units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseCoord {
    /// Format 1: design units only.
    Coordinate(i16),
    /// Format 2: design units plus a hinted contour point.
    ContourPoint {
        coordinate: i16,
        reference_glyph: GlyphId,
        point_index: u16,
    },
    /// Format 3: design units plus a device table offset (not evaluated).
    DeviceAdjusted { coordinate: i16, device: Offset16 },
}

impl BaseCoord {
    /// The design-unit coordinate, whatever the format.
    pub fn coordinate(self) -> i16 {
        match self {
            BaseCoord::Coordinate(coordinate)
            | BaseCoord::ContourPoint { coordinate, .. }
            | BaseCoord::DeviceAdjusted { coordinate, .. } => coordinate,
        }
    }
}

impl FontRead for BaseCoord {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u16 = cursor.read()?;
        match format {
            1 => Ok(BaseCoord::Coordinate(cursor.read()?)),
            2 => Ok(BaseCoord::ContourPoint {
                coordinate: cursor.read()?,
                reference_glyph: cursor.read()?,
                point_index: cursor.read()?,
            }),
            3 => {
                log::warn!("BASE: coord format 3 device adjustment is not evaluated");
                Ok(BaseCoord::DeviceAdjusted {
                    coordinate: cursor.read()?,
                    device: cursor.read()?,
                })
            }
            other => Err(ReadError::InvalidFormat(other.into())),
        }
    }
}

/// Min/max glyph extents for a script, language system or feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinMax {
    pub min_coord: Option<BaseCoord>,
    pub max_coord: Option<BaseCoord>,
    pub feature_records: Vec<FeatMinMaxRecord>,
}

impl FontRead for MinMax {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let min_coord_offset: Offset16 = cursor.read()?;
        let max_coord_offset: Offset16 = cursor.read()?;
        let feat_count: u16 = cursor.read()?;
        let mut feat_offsets = Vec::with_capacity(feat_count as usize);
        for _ in 0..feat_count {
            let tag: Tag = cursor.read()?;
            let min_offset: Offset16 = cursor.read()?;
            let max_offset: Offset16 = cursor.read()?;
            feat_offsets.push((tag, min_offset, max_offset));
        }
        let mut feature_records = Vec::with_capacity(feat_offsets.len());
        for (tag, min_offset, max_offset) in feat_offsets {
            feature_records.push(FeatMinMaxRecord {
                tag,
                min_coord: data.resolve_opt(min_offset)?,
                max_coord: data.resolve_opt(max_offset)?,
            });
        }
        Ok(MinMax {
            min_coord: data.resolve_opt(min_coord_offset)?,
            max_coord: data.resolve_opt(max_coord_offset)?,
            feature_records,
        })
    }
}

/// Feature-specific extents within a [`MinMax`] table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatMinMaxRecord {
    pub tag: Tag,
    pub min_coord: Option<BaseCoord>,
    pub max_coord: Option<BaseCoord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_test_data::base as test_data;

    #[test]
    fn horizontal_axis_baselines() {
        let base = Base::read(FontData::new(test_data::HORIZONTAL)).unwrap();
        let axis = base.horizontal_axis.as_ref().unwrap();
        assert_eq!(axis.baseline_tags, vec![Tag::new(b"ideo"), Tag::new(b"romn")]);
        assert!(base.vertical_axis.is_none());

        let script = base.base_script(false, Tag::new(b"latn")).unwrap();
        let values = script.base_values.as_ref().unwrap();
        assert_eq!(values.default_baseline_index, 1);
        assert_eq!(
            values.base_coords,
            vec![BaseCoord::Coordinate(-120), BaseCoord::Coordinate(0)]
        );
        assert!(base.base_script(false, Tag::new(b"grek")).is_none());
        assert!(base.base_script(true, Tag::new(b"latn")).is_none());
    }

    #[test]
    fn coordinate_accessor_spans_formats() {
        assert_eq!(BaseCoord::Coordinate(-7).coordinate(), -7);
        let coord = BaseCoord::ContourPoint {
            coordinate: 40,
            reference_glyph: GlyphId::new(3),
            point_index: 2,
        };
        assert_eq!(coord.coordinate(), 40);
    }

    #[test]
    fn idempotent_load() {
        let data = FontData::new(test_data::HORIZONTAL);
        assert_eq!(Base::read(data).unwrap(), Base::read(data).unwrap());
    }
}
