//! The [JSTF](https://learn.microsoft.com/typography/opentype/spec/jstf)
//! (justification) table.
//!
//! Justification suggestions are kept as raw lookup-modification offset
//! decks; interpreting them against GSUB/GPOS is left to the caller.

use layout_types::{GlyphId, Offset16, Tag};

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// The justification table, version 1.0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jstf {
    pub scripts: Vec<JstfScriptRecord>,
}

impl FontRead for Jstf {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let major: u16 = cursor.read()?;
        let minor: u16 = cursor.read()?;
        if major != 1 || minor != 0 {
            return Err(ReadError::InvalidFormat(
                ((major as i64) << 16) | minor as i64,
            ));
        }
        let script_count: u16 = cursor.read()?;
        let mut offsets = Vec::with_capacity(script_count as usize);
        for _ in 0..script_count {
            let tag: Tag = cursor.read()?;
            let offset: Offset16 = cursor.read()?;
            offsets.push((tag, offset));
        }
        let mut scripts = Vec::with_capacity(offsets.len());
        for (tag, offset) in offsets {
            scripts.push(JstfScriptRecord {
                tag,
                script: data.resolve(offset)?,
            });
        }
        Ok(Jstf { scripts })
    }
}

impl Jstf {
    /// The [`JstfScript`] for a script tag, if present.
    pub fn script(&self, tag: Tag) -> Option<&JstfScript> {
        self.scripts
            .iter()
            .find(|record| record.tag == tag)
            .map(|record| &record.script)
    }
}

/// A script tag and its justification data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JstfScriptRecord {
    pub tag: Tag,
    pub script: JstfScript,
}

/// Justification data for a single script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JstfScript {
    /// Glyphs, such as kashidas, a client may insert to extend a line.
    pub extender_glyphs: Vec<GlyphId>,
    pub default_lang_sys: Option<JstfLangSys>,
    pub lang_sys_records: Vec<JstfLangSysRecord>,
}

impl FontRead for JstfScript {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let extender_glyph_offset: Offset16 = cursor.read()?;
        let def_lang_sys_offset: Offset16 = cursor.read()?;
        let lang_sys_count: u16 = cursor.read()?;
        let mut lang_sys_offsets = Vec::with_capacity(lang_sys_count as usize);
        for _ in 0..lang_sys_count {
            let tag: Tag = cursor.read()?;
            let offset: Offset16 = cursor.read()?;
            lang_sys_offsets.push((tag, offset));
        }
        let extender_glyphs = match extender_glyph_offset.non_null() {
            Some(offset) => {
                let glyph_data = data.split_off(offset).ok_or(ReadError::OutOfBounds)?;
                let mut glyph_cursor = glyph_data.cursor();
                let count: u16 = glyph_cursor.read()?;
                glyph_cursor.read_array(count as usize)?
            }
            None => Vec::new(),
        };
        let mut lang_sys_records = Vec::with_capacity(lang_sys_offsets.len());
        for (tag, offset) in lang_sys_offsets {
            lang_sys_records.push(JstfLangSysRecord {
                tag,
                lang_sys: data.resolve(offset)?,
            });
        }
        Ok(JstfScript {
            extender_glyphs,
            default_lang_sys: data.resolve_opt(def_lang_sys_offset)?,
            lang_sys_records,
        })
    }
}

impl JstfScript {
    /// The justification suggestions for a language system, falling back to
    /// the default when the tag is absent or `None`.
    pub fn lang_sys(&self, tag: Option<Tag>) -> Option<&JstfLangSys> {
        if let Some(tag) = tag {
            if let Some(record) = self.lang_sys_records.iter().find(|record| record.tag == tag) {
                return Some(&record.lang_sys);
            }
        }
        self.default_lang_sys.as_ref()
    }
}

/// A language system tag and its justification suggestions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JstfLangSysRecord {
    pub tag: Tag,
    pub lang_sys: JstfLangSys,
}

/// Justification suggestions for one language system, in priority order.
///
/// A client starts at priority 0 and applies increasing priorities until
/// the text is justified; each level stands alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JstfLangSys {
    pub priorities: Vec<JstfPriority>,
}

impl FontRead for JstfLangSys {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let count: u16 = cursor.read()?;
        let offsets: Vec<Offset16> = cursor.read_array(count as usize)?;
        let mut priorities = Vec::with_capacity(offsets.len());
        for offset in offsets {
            priorities.push(data.resolve(offset)?);
        }
        Ok(JstfLangSys { priorities })
    }
}

/// One priority level: ten offsets to lookup-modification and max decks,
/// any of which may be null.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JstfPriority {
    pub shrinkage_enable_gsub: Offset16,
    pub shrinkage_disable_gsub: Offset16,
    pub shrinkage_enable_gpos: Offset16,
    pub shrinkage_disable_gpos: Offset16,
    pub shrinkage_jstf_max: Offset16,
    pub extension_enable_gsub: Offset16,
    pub extension_disable_gsub: Offset16,
    pub extension_enable_gpos: Offset16,
    pub extension_disable_gpos: Offset16,
    pub extension_jstf_max: Offset16,
}

impl FontRead for JstfPriority {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        Ok(JstfPriority {
            shrinkage_enable_gsub: cursor.read()?,
            shrinkage_disable_gsub: cursor.read()?,
            shrinkage_enable_gpos: cursor.read()?,
            shrinkage_disable_gpos: cursor.read()?,
            shrinkage_jstf_max: cursor.read()?,
            extension_enable_gsub: cursor.read()?,
            extension_disable_gsub: cursor.read()?,
            extension_enable_gpos: cursor.read()?,
            extension_disable_gpos: cursor.read()?,
            extension_jstf_max: cursor.read()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_test_data::jstf as test_data;

    #[test]
    fn arabic_extenders_and_priorities() {
        let jstf = Jstf::read(FontData::new(test_data::SIMPLE)).unwrap();
        let script = jstf.script(Tag::new(b"arab")).unwrap();
        assert_eq!(script.extender_glyphs, vec![GlyphId::new(5)]);

        let lang_sys = script.lang_sys(None).unwrap();
        assert_eq!(lang_sys.priorities.len(), 1);
        let priority = &lang_sys.priorities[0];
        assert!(priority.extension_enable_gsub.is_null());
        assert_eq!(priority.shrinkage_enable_gpos, Offset16::new(0x00AA));

        assert!(jstf.script(Tag::new(b"latn")).is_none());
        // unknown langsys falls back to the default
        assert!(script.lang_sys(Some(Tag::new(b"URD "))).is_some());
    }

    #[test]
    fn idempotent_load() {
        let data = FontData::new(test_data::SIMPLE);
        assert_eq!(Jstf::read(data).unwrap(), Jstf::read(data).unwrap());
    }
}
