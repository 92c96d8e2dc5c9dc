//! Command tokens, canonical actions, and the legality table.
//!
//! Front ends speak in short tokens (`dd`, `db`, `rc`, `dc`). The
//! [`LegalityTable`] resolves a token to its canonical [`CommandAction`] and
//! checks it against the [`ActionCategory`] the caller is asking about.
//! The table is built once and handed to the engine; nothing reads it as
//! global state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::GameError;

/// Canonical action names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    /// Take the visible bin card.
    DrawFromBin,
    /// Take a random card from the pool.
    DrawFromDeck,
    /// Place the pending card on the grid.
    ReplaceCard,
    /// Discard the pending card and reveal a hidden cell.
    DiscoverCard,
}

impl CommandAction {
    /// The canonical snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CommandAction::DrawFromBin => "draw_from_bin",
            CommandAction::DrawFromDeck => "draw_from_deck",
            CommandAction::ReplaceCard => "replace_card",
            CommandAction::DiscoverCard => "discover_card",
        }
    }
}

impl std::fmt::Display for CommandAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which part of a turn a command belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    /// Choosing where to draw from.
    Draw,
    /// Choosing what to do with the drawn card.
    Play,
}

impl ActionCategory {
    /// The category's name as used by front ends.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionCategory::Draw => "draw",
            ActionCategory::Play => "play",
        }
    }
}

impl FromStr for ActionCategory {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draw" => Ok(ActionCategory::Draw),
            "play" => Ok(ActionCategory::Play),
            other => Err(GameError::UnknownCategory(other.to_string())),
        }
    }
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable token → action lookup, partitioned by category.
///
/// ## Example
///
/// ```
/// use skyjo_engine::core::{ActionCategory, CommandAction, LegalityTable};
///
/// let table = LegalityTable::standard();
/// assert!(table.check("dd", "draw"));
/// assert!(!table.check("rc", "draw"));
/// assert_eq!(
///     table.resolve("dc", ActionCategory::Play).unwrap(),
///     CommandAction::DiscoverCard,
/// );
/// ```
#[derive(Clone, Debug)]
pub struct LegalityTable {
    tokens: FxHashMap<&'static str, CommandAction>,
    categories: FxHashMap<ActionCategory, SmallVec<[CommandAction; 2]>>,
}

impl LegalityTable {
    /// The stable token set: `db`, `dd` for drawing; `rc`, `dc` for playing.
    #[must_use]
    pub fn standard() -> Self {
        let mut tokens = FxHashMap::default();
        tokens.insert("db", CommandAction::DrawFromBin);
        tokens.insert("dd", CommandAction::DrawFromDeck);
        tokens.insert("rc", CommandAction::ReplaceCard);
        tokens.insert("dc", CommandAction::DiscoverCard);

        let mut categories = FxHashMap::default();
        categories.insert(
            ActionCategory::Draw,
            SmallVec::from_buf([CommandAction::DrawFromBin, CommandAction::DrawFromDeck]),
        );
        categories.insert(
            ActionCategory::Play,
            SmallVec::from_buf([CommandAction::ReplaceCard, CommandAction::DiscoverCard]),
        );

        Self { tokens, categories }
    }

    /// Look up the canonical action for a token, ignoring category.
    #[must_use]
    pub fn action_for(&self, token: &str) -> Option<CommandAction> {
        self.tokens.get(token.trim()).copied()
    }

    /// Actions legal in a category.
    #[must_use]
    pub fn actions_in(&self, category: ActionCategory) -> &[CommandAction] {
        self.categories
            .get(&category)
            .map(|actions| actions.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve a token within a category.
    ///
    /// Fails with `IllegalMove` for unknown tokens and for tokens that belong
    /// to another category.
    pub fn resolve(&self, token: &str, category: ActionCategory) -> Result<CommandAction, GameError> {
        self.action_for(token)
            .filter(|action| self.actions_in(category).contains(action))
            .ok_or_else(|| GameError::IllegalMove {
                token: token.to_string(),
                category: category.to_string(),
            })
    }

    /// Whether `token` is legal for the named category (`"draw"` or `"play"`).
    ///
    /// Never fails: unknown tokens and unknown categories are simply illegal.
    #[must_use]
    pub fn check(&self, token: &str, category: &str) -> bool {
        category
            .parse::<ActionCategory>()
            .and_then(|category| self.resolve(token, category))
            .is_ok()
    }
}

impl Default for LegalityTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tokens() {
        let table = LegalityTable::standard();
        assert_eq!(table.action_for("db"), Some(CommandAction::DrawFromBin));
        assert_eq!(table.action_for("dd"), Some(CommandAction::DrawFromDeck));
        assert_eq!(table.action_for("rc"), Some(CommandAction::ReplaceCard));
        assert_eq!(table.action_for("dc"), Some(CommandAction::DiscoverCard));
        assert_eq!(table.action_for("zz"), None);
    }

    #[test]
    fn test_check() {
        let table = LegalityTable::standard();
        assert!(table.check("dd", "draw"));
        assert!(table.check("db", "draw"));
        assert!(table.check("rc", "play"));
        assert!(table.check("dc", "play"));

        assert!(!table.check("rc", "draw"));
        assert!(!table.check("dd", "play"));
        assert!(!table.check("zz", "draw"));
        assert!(!table.check("zz", "play"));
        assert!(!table.check("dd", "shuffle"));
    }

    #[test]
    fn test_resolve_errors() {
        let table = LegalityTable::standard();
        let err = table.resolve("dc", ActionCategory::Draw).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove { token: "dc".into(), category: "draw".into() }
        );
        assert_eq!(
            "shuffle".parse::<ActionCategory>(),
            Err(GameError::UnknownCategory("shuffle".into()))
        );
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(CommandAction::DrawFromBin.to_string(), "draw_from_bin");
        assert_eq!(
            serde_json::to_string(&CommandAction::DiscoverCard).unwrap(),
            "\"discover_card\""
        );
    }
}
