//! Sound effect list grouped by category.

use serde::Serialize;
use std::collections::BTreeMap;

/// A sound effect path with the `SE/` prefix and `.wav` suffix removed for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundEntry {
    pub path: String,
    /// First folder after `SE/`
    pub category: String,
    /// Segments after the category
    pub name: String,
    /// Segments after the repeated category folder
    pub display_name: String,
}

impl SoundEntry {
    pub fn parse(path: &str) -> Self {
        let clean = path.strip_prefix("SE/").unwrap_or(path);
        let clean = clean.strip_suffix(".wav").unwrap_or(clean);
        let parts: Vec<&str> = clean.split('/').collect();

        Self {
            path: path.to_string(),
            category: parts[0].to_string(),
            name: parts.get(1..).unwrap_or_default().join("/"),
            display_name: parts.get(2..).unwrap_or_default().join("/"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundGroup {
    pub category: String,
    pub items: Vec<SoundEntry>,
}

/// Group sounds by category; categories ascend and items sort by display name.
pub fn group_sounds<S: AsRef<str>>(paths: &[S]) -> Vec<SoundGroup> {
    let mut groups: BTreeMap<String, Vec<SoundEntry>> = BTreeMap::new();
    for path in paths {
        let entry = SoundEntry::parse(path.as_ref());
        groups.entry(entry.category.clone()).or_default().push(entry);
    }

    groups
        .into_iter()
        .map(|(category, mut items)| {
            items.sort_by(|a, b| a.display_name.cmp(&b.display_name));
            SoundGroup { category, items }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sound() {
        let sound = SoundEntry::parse("SE/Battle/Battle/hit_01.wav");
        assert_eq!(sound.category, "Battle");
        assert_eq!(sound.name, "Battle/hit_01");
        assert_eq!(sound.display_name, "hit_01");
        assert_eq!(sound.path, "SE/Battle/Battle/hit_01.wav");
    }

    #[test]
    fn test_parse_without_prefix() {
        let sound = SoundEntry::parse("Voice/x.ogg");
        assert_eq!(sound.category, "Voice");
        assert_eq!(sound.name, "x.ogg");
        assert_eq!(sound.display_name, "");
    }

    #[test]
    fn test_group_sounds() {
        let groups = group_sounds(&[
            "SE/UI/UI/tap_b.wav",
            "SE/Battle/Battle/hit.wav",
            "SE/UI/UI/tap_a.wav",
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Battle");
        assert_eq!(groups[1].category, "UI");
        let names: Vec<&str> = groups[1].items.iter().map(|s| s.display_name.as_str()).collect();
        assert_eq!(names, vec!["tap_a", "tap_b"]);
    }
}
