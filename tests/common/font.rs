//! Writes minimal TrueType files: just the tables needed to read vertical
//! metrics and the advance widths of `a`–`z`.

/// `.notdef` plus one glyph per lowercase letter.
const NUM_GLYPHS: u16 = 27;

#[derive(Debug, Clone, Copy)]
pub struct TestFont {
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
    pub units_per_em: u16,
    /// Advance width of every glyph.
    pub advance: u16,
}

impl TestFont {
    /// Same `a`–`z` width and em size as Courier New.
    pub fn mono() -> Self {
        Self {
            ascender: 1900,
            descender: -500,
            line_gap: 0,
            units_per_em: 2048,
            advance: 1229,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        // Table records must be sorted by tag.
        let tables: [(&[u8; 4], Vec<u8>); 5] = [
            (b"cmap", cmap()),
            (b"head", self.head()),
            (b"hhea", self.hhea()),
            (b"hmtx", self.hmtx()),
            (b"maxp", maxp()),
        ];

        let mut font = Vec::new();
        font.extend(0x0001_0000u32.to_be_bytes());
        font.extend((tables.len() as u16).to_be_bytes());
        font.extend([0u8; 6]); // searchRange, entrySelector, rangeShift

        let mut offset = 12 + 16 * tables.len();
        let mut data = Vec::new();
        for (tag, table) in &tables {
            font.extend(tag.iter());
            font.extend(0u32.to_be_bytes()); // checksum
            font.extend((offset as u32).to_be_bytes());
            font.extend((table.len() as u32).to_be_bytes());

            data.extend(table);
            while data.len() % 4 != 0 {
                data.push(0);
            }
            offset = 12 + 16 * tables.len() + data.len();
        }
        font.extend(data);
        font
    }

    fn head(&self) -> Vec<u8> {
        let mut t = Vec::with_capacity(54);
        t.extend(0x0001_0000u32.to_be_bytes()); // version
        t.extend(0x0001_0000u32.to_be_bytes()); // fontRevision
        t.extend(0u32.to_be_bytes()); // checkSumAdjustment
        t.extend(0x5F0F_3CF5u32.to_be_bytes()); // magicNumber
        t.extend(0u16.to_be_bytes()); // flags
        t.extend(self.units_per_em.to_be_bytes());
        t.extend([0u8; 16]); // created, modified
        t.extend([0u8; 8]); // bounding box
        t.extend(0u16.to_be_bytes()); // macStyle
        t.extend(8u16.to_be_bytes()); // lowestRecPPEM
        t.extend(2i16.to_be_bytes()); // fontDirectionHint
        t.extend(0i16.to_be_bytes()); // indexToLocFormat
        t.extend(0i16.to_be_bytes()); // glyphDataFormat
        t
    }

    fn hhea(&self) -> Vec<u8> {
        let mut t = Vec::with_capacity(36);
        t.extend(0x0001_0000u32.to_be_bytes());
        t.extend(self.ascender.to_be_bytes());
        t.extend(self.descender.to_be_bytes());
        t.extend(self.line_gap.to_be_bytes());
        t.extend([0u8; 24]);
        t.extend(NUM_GLYPHS.to_be_bytes()); // numberOfHMetrics
        t
    }

    fn hmtx(&self) -> Vec<u8> {
        (0..NUM_GLYPHS)
            .flat_map(|_| {
                let mut metric = self.advance.to_be_bytes().to_vec();
                metric.extend(0i16.to_be_bytes());
                metric
            })
            .collect()
    }
}

fn maxp() -> Vec<u8> {
    let mut t = Vec::with_capacity(6);
    t.extend(0x0000_5000u32.to_be_bytes());
    t.extend(NUM_GLYPHS.to_be_bytes());
    t
}

/// A single Windows full-repertoire format 12 subtable mapping `a`–`z` to
/// glyphs 1–26.
fn cmap() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend(0u16.to_be_bytes()); // version
    t.extend(1u16.to_be_bytes()); // numTables
    t.extend(3u16.to_be_bytes()); // platformID: Windows
    t.extend(10u16.to_be_bytes()); // encodingID: full repertoire
    t.extend(12u32.to_be_bytes()); // subtable offset

    t.extend(12u16.to_be_bytes()); // format
    t.extend(0u16.to_be_bytes()); // reserved
    t.extend(28u32.to_be_bytes()); // length
    t.extend(0u32.to_be_bytes()); // language
    t.extend(1u32.to_be_bytes()); // numGroups
    t.extend(u32::from('a').to_be_bytes());
    t.extend(u32::from('z').to_be_bytes());
    t.extend(1u32.to_be_bytes()); // startGlyphID
    t
}
