use serde::Serialize;

/// Static colour/label pair used to mark cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub color: &'static str,
    pub label: &'static str,
}

static CATALOG: [Tag; 6] = [
    Tag {
        color: "#BEE3F8",
        label: "دانیال خسروی",
    },
    Tag {
        color: "#FED7D7",
        label: "علی گرم‌رودی",
    },
    Tag {
        color: "#EDF2F7",
        label: "مهدی فیروزیان",
    },
    Tag {
        color: "#FEEBC8",
        label: "عباس قادری",
    },
    Tag {
        color: "#C6F6D5",
        label: "علی محسنی",
    },
    Tag {
        color: "#FED7E2",
        label: "ابوذر غفاری",
    },
];

impl Tag {
    pub fn catalog() -> &'static [Tag] {
        &CATALOG
    }

    /// Colour comparison is case-insensitive
    pub fn lookup(color: &str) -> Option<&'static Tag> {
        CATALOG
            .iter()
            .find(|tag| tag.color.eq_ignore_ascii_case(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::DEFAULT_TAG_COLOR;

    #[test]
    fn test_catalog_has_unique_colors() {
        let catalog = Tag::catalog();
        assert_eq!(catalog.len(), 6);
        for (i, tag) in catalog.iter().enumerate() {
            assert!(catalog[i + 1..].iter().all(|other| other.color != tag.color));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Tag::lookup("#fed7d7").map(|t| t.color), Some("#FED7D7"));
        assert!(Tag::lookup(DEFAULT_TAG_COLOR).is_some());
        assert!(Tag::lookup("#000000").is_none());
    }
}
