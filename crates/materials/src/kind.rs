use serde::{Deserialize, Serialize};

/// Discriminant of a material.
///
/// Declaration order is the reporting order (`Ord` is derived from it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Book,
    Ebook,
    Magazine,
}

impl MaterialKind {
    /// Every kind, in reporting order.
    pub const ALL: [MaterialKind; 3] = [MaterialKind::Book, MaterialKind::Ebook, MaterialKind::Magazine];

    /// Numeric code used by source rows (1 = book, 2 = ebook, 3 = magazine).
    pub fn code(self) -> u8 {
        match self {
            MaterialKind::Book => 1,
            MaterialKind::Ebook => 2,
            MaterialKind::Magazine => 3,
        }
    }

    /// Map a numeric source code to a kind; `None` for codes outside 1..=3.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(MaterialKind::Book),
            2 => Some(MaterialKind::Ebook),
            3 => Some(MaterialKind::Magazine),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaterialKind::Book => "Book",
            MaterialKind::Ebook => "Ebook",
            MaterialKind::Magazine => "Magazine",
        }
    }
}

impl TryFrom<i64> for MaterialKind {
    type Error = i64;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

impl core::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
