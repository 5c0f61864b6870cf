//! Include/exclude token search over the flat asset list.
//!
//! A query is lower-cased and split on whitespace. Plain words must appear in
//! the lower-cased path as substrings; words prefixed with `!` must not.
//!
//! ```
//! use konofan_assets::assets::is_image;
//! use konofan_assets::search::{search, SearchOutcome};
//!
//! let paths = ["Unit/thmb.png", "Unit/full.png"];
//! let outcome = search(&paths, "unit !thmb", is_image);
//! assert_eq!(outcome, SearchOutcome::Matched(vec!["Unit/full.png".to_string()]));
//! ```

use crate::utils::format_count;
use serde::Serialize;

/// Example queries offered when no search has run yet.
pub const EXAMPLE_QUERIES: &[&str] = &[
    "CharacterImage",
    "top_bg",
    "stage_info_",
    "BattleBG bg_battle",
    "EnemyImage",
    "IconEnemy",
    "IconWeapon",
    "IconAccessory",
    "IconMaterial",
    "IconAssist",
    "IconBackground",
    "IconStill",
    "StoryChapterImage",
    "MainQuestBg",
    "IconQuestStageBg",
    "CharacterEnhance_Stage",
    "IconHonor",
    "stamp",
    "Num",
    "IconSkill",
    "IconPiece",
    "IconExchange",
    "Icon Ticket",
    "UnitIcon",
    "shop_item",
    "eyecatching",
    "EyecatchLoading",
    "GachaAnim4Star !Default-ParticleSystem !eft_star !eyecatch",
    "GachaAnim4Star eyecatch",
    "GachaContinuationWindow",
    "loginbonus_logo_",
    "dungeon_banner",
    "bg_dungeon",
    "WindowAnime",
    "/Unit/",
    "boss button",
    "grade",
    "event btn",
    "StateIconList",
    "/Screen",
];

/// Tokenized search query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl SearchQuery {
    /// Tokenize a query. Returns `None` for an empty or whitespace-only query.
    pub fn parse(query: &str) -> Option<Self> {
        let lowered = query.to_lowercase();
        let mut parsed = SearchQuery::default();

        for word in lowered.split_whitespace() {
            match word.strip_prefix('!') {
                Some(term) => parsed.exclude.push(term.to_string()),
                None => parsed.include.push(word.to_string()),
            }
        }

        if parsed.include.is_empty() && parsed.exclude.is_empty() {
            None
        } else {
            Some(parsed)
        }
    }

    /// Token check on a single path (case-insensitive substring match)
    pub fn matches(&self, path: &str) -> bool {
        let path_lower = path.to_lowercase();
        self.include.iter().all(|term| path_lower.contains(term.as_str()))
            && !self.exclude.iter().any(|term| path_lower.contains(term.as_str()))
    }
}

/// Result of running a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "results", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The query was blank, nothing ran
    NotExecuted,
    /// Matching paths in input order (possibly empty)
    Matched(Vec<String>),
}

impl SearchOutcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, SearchOutcome::Matched(_))
    }

    /// Matched paths; empty when the search did not run
    pub fn results(&self) -> &[String] {
        match self {
            SearchOutcome::NotExecuted => &[],
            SearchOutcome::Matched(results) => results,
        }
    }
}

/// Filter `paths` by `query`, keeping only paths accepted by `is_included`.
pub fn search<S, F>(paths: &[S], query: &str, is_included: F) -> SearchOutcome
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let Some(parsed) = SearchQuery::parse(query) else {
        return SearchOutcome::NotExecuted;
    };

    let results: Vec<String> = paths
        .iter()
        .map(|path| path.as_ref())
        .filter(|path| parsed.matches(path) && is_included(*path))
        .map(str::to_string)
        .collect();

    tracing::debug!(
        "Search '{}' matched {} of {} paths",
        query.trim(),
        results.len(),
        paths.len()
    );
    SearchOutcome::Matched(results)
}

/// Heading shown above search results, e.g. `1,234 Search Results for "unit"`
pub fn results_title(count: usize, query: &str) -> String {
    format!("{} Search Results for \"{}\"", format_count(count as u64), query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::is_image;

    fn matched(outcome: SearchOutcome) -> Vec<String> {
        match outcome {
            SearchOutcome::Matched(results) => results,
            SearchOutcome::NotExecuted => panic!("search did not run"),
        }
    }

    #[test]
    fn test_parse_splits_include_and_exclude() {
        let q = SearchQuery::parse("  GachaAnim4Star   !Default-ParticleSystem !eft_star ").unwrap();
        assert_eq!(q.include, vec!["gachaanim4star"]);
        assert_eq!(q.exclude, vec!["default-particlesystem", "eft_star"]);
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert_eq!(SearchQuery::parse(""), None);
        assert_eq!(SearchQuery::parse(" \t\n "), None);
    }

    #[test]
    fn test_include_exclude() {
        let paths = ["Unit/thmb.png", "Unit/full.png"];
        let results = matched(search(&paths, "unit !thmb", is_image));
        assert_eq!(results, vec!["Unit/full.png"]);
    }

    #[test]
    fn test_empty_query_is_not_executed() {
        let paths = ["Unit/thmb.png"];
        let blank = search(&paths, "", is_image);
        let no_match = search(&paths, "zzz_no_match", is_image);

        assert_eq!(blank, SearchOutcome::NotExecuted);
        assert!(!blank.is_executed());
        assert_eq!(no_match, SearchOutcome::Matched(vec![]));
        assert!(no_match.is_executed());
        assert_ne!(blank, no_match);
    }

    #[test]
    fn test_case_insensitive() {
        let paths = ["IconWeapon/Sword.png"];
        let results = matched(search(&paths, "iconweapon", is_image));
        assert_eq!(results, vec!["IconWeapon/Sword.png"]);

        let results = matched(search(&paths, "ICONWEAPON sword", is_image));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_exclude_only_query() {
        let paths = ["a/thmb.png", "a/full.png", "b/other.png"];
        let results = matched(search(&paths, "!thmb", is_image));
        assert_eq!(results, vec!["a/full.png", "b/other.png"]);
    }

    #[test]
    fn test_substring_anywhere() {
        let paths = ["Home/top_bg_01.png", "Home/top.png", "Event/xtop_bgx.png"];
        let results = matched(search(&paths, "top_bg", is_image));
        assert_eq!(results, vec!["Home/top_bg_01.png", "Event/xtop_bgx.png"]);
    }

    #[test]
    fn test_predicate_filters_non_images() {
        let paths = ["Unit/a.png", "Unit/a.txt", "Unit/a.atlas"];
        let results = matched(search(&paths, "unit", is_image));
        assert_eq!(results, vec!["Unit/a.png"]);

        let results = matched(search(&paths, "unit", |_| true));
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_preserves_input_order() {
        let paths = ["z/icon.png", "a/icon.png", "m/icon.png"];
        let results = matched(search(&paths, "icon", is_image));
        assert_eq!(results, vec!["z/icon.png", "a/icon.png", "m/icon.png"]);
    }

    #[test]
    fn test_lone_bang_excludes_everything() {
        let paths = ["a.png"];
        let results = matched(search(&paths, "!", is_image));
        assert!(results.is_empty());
    }

    #[test]
    fn test_slash_tokens() {
        let paths = ["Chara/Unit/a.png", "UnitIcon/b.png"];
        let results = matched(search(&paths, "/Unit/", is_image));
        assert_eq!(results, vec!["Chara/Unit/a.png"]);
    }

    #[test]
    fn test_results_title() {
        assert_eq!(results_title(1234, "unit"), "1,234 Search Results for \"unit\"");
    }

    #[test]
    fn test_example_queries_all_parse() {
        for query in EXAMPLE_QUERIES {
            assert!(SearchQuery::parse(query).is_some(), "{query}");
        }
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(SearchOutcome::NotExecuted).unwrap();
        assert_eq!(json["status"], "not_executed");
        let json = serde_json::to_value(SearchOutcome::Matched(vec!["a.png".into()])).unwrap();
        assert_eq!(json["status"], "matched");
        assert_eq!(json["results"][0], "a.png");
    }
}
