//! Trade-idea feed state: sample posts, the liked set, and comment counters.

use std::collections::HashSet;

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Buy,
    Sell,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// A static sample trade-idea post. Immutable apart from its like/comment
/// counters; never persisted.
#[derive(Debug, Clone)]
pub struct TradeIdea {
    pub id: String,
    pub author: String,
    /// Opaque avatar reference, displayed as given.
    pub avatar: String,
    pub pair: String,
    pub direction: Direction,
    pub entry: String,
    pub stop_loss: String,
    pub take_profit: String,
    pub reasoning: String,
    pub likes: u64,
    pub comments: u64,
    pub time_ago: String,
    /// XP the author earned from this post.
    pub xp_earned: u64,
}

/// The static sample feed.
pub fn sample_ideas() -> Vec<TradeIdea> {
    vec![
        TradeIdea {
            id: "1".to_string(),
            author: "Alex_Trader".to_string(),
            avatar: "avatars/alex_trader.jpeg".to_string(),
            pair: "EUR/USD".to_string(),
            direction: Direction::Buy,
            entry: "1.0850".to_string(),
            stop_loss: "1.0800".to_string(),
            take_profit: "1.0920".to_string(),
            reasoning: "Strong support at 1.0840, bullish divergence on RSI, \
                        ECB dovish stance priced in"
                .to_string(),
            likes: 127,
            comments: 23,
            time_ago: "2h".to_string(),
            xp_earned: 45,
        },
        TradeIdea {
            id: "2".to_string(),
            author: "MarketMaven".to_string(),
            avatar: "avatars/market_maven.jpeg".to_string(),
            pair: "GBP/JPY".to_string(),
            direction: Direction::Sell,
            entry: "185.40".to_string(),
            stop_loss: "186.00".to_string(),
            take_profit: "184.20".to_string(),
            reasoning: "Break of ascending trendline, bearish engulfing pattern, \
                        risk-off sentiment"
                .to_string(),
            likes: 89,
            comments: 18,
            time_ago: "4h".to_string(),
            xp_earned: 32,
        },
    ]
}

/// State for the ideas feed.
#[derive(Debug)]
pub struct IdeasState {
    /// Feed posts.
    pub ideas: Vec<TradeIdea>,
    /// Ids already liked this session. Grows monotonically.
    pub liked: HashSet<String>,
    /// Currently selected post.
    pub selected_index: Option<usize>,
}

impl Default for IdeasState {
    fn default() -> Self {
        Self {
            ideas: sample_ideas(),
            liked: HashSet::new(),
            selected_index: Some(0),
        }
    }
}

impl IdeasState {
    /// Like an idea. Idempotent: returns true only the first time, when the
    /// id enters the liked set and the post's like count is bumped.
    pub fn like(&mut self, idea_id: &str) -> bool {
        if self.liked.contains(idea_id) {
            return false;
        }
        let Some(idea) = self.ideas.iter_mut().find(|i| i.id == idea_id) else {
            return false;
        };
        idea.likes += 1;
        self.liked.insert(idea_id.to_string());
        true
    }

    /// Comment on an idea. NOT idempotent: every call bumps the counter.
    /// Returns true if the idea exists.
    pub fn comment(&mut self, idea_id: &str) -> bool {
        let Some(idea) = self.ideas.iter_mut().find(|i| i.id == idea_id) else {
            return false;
        };
        idea.comments += 1;
        true
    }

    /// The currently selected idea.
    pub fn selected_idea(&self) -> Option<&TradeIdea> {
        self.selected_index.and_then(|i| self.ideas.get(i))
    }

    /// Whether an idea has been liked this session.
    pub fn is_liked(&self, idea_id: &str) -> bool {
        self.liked.contains(idea_id)
    }

    /// Move the feed selection by delta, clamped.
    pub fn move_selection(&mut self, delta: i32) {
        let current = self.selected_index.unwrap_or(0) as i32;
        let max = self.ideas.len().saturating_sub(1);
        self.selected_index = Some(((current + delta).max(0) as usize).min(max));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_like_is_idempotent() {
        let mut state = IdeasState::default();
        let before = state.ideas[0].likes;

        assert!(state.like("1"));
        assert!(!state.like("1"));

        assert_eq!(state.ideas[0].likes, before + 1);
        assert_eq!(state.liked.len(), 1);
        assert!(state.is_liked("1"));
    }

    #[test]
    fn test_like_unknown_id_is_noop() {
        let mut state = IdeasState::default();
        assert!(!state.like("999"));
        assert!(state.liked.is_empty());
    }

    #[test]
    fn test_comment_is_repeatable() {
        let mut state = IdeasState::default();
        let before = state.ideas[1].comments;
        for _ in 0..3 {
            assert!(state.comment("2"));
        }
        assert_eq!(state.ideas[1].comments, before + 3);
    }

    #[test]
    fn test_selection_clamped() {
        let mut state = IdeasState::default();
        state.move_selection(10);
        assert_eq!(state.selected_index, Some(state.ideas.len() - 1));
        state.move_selection(-10);
        assert_eq!(state.selected_index, Some(0));
    }
}
