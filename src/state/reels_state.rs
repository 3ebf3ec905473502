//! Placeholder reels state. Non-functional video posts, display only.

/// A placeholder short-video post.
#[derive(Debug, Clone)]
pub struct Reel {
    pub author: &'static str,
    pub caption: &'static str,
    pub likes_label: &'static str,
    pub comments_label: &'static str,
    pub xp_label: &'static str,
}

pub fn sample_reels() -> Vec<Reel> {
    // The source renders the same placeholder card four times.
    vec![
        Reel {
            author: "@trader_pro",
            caption: "How I made 300 pips on EUR/USD today",
            likes_label: "2.1K likes",
            comments_label: "34 comments",
            xp_label: "+45 XP",
        };
        4
    ]
}

/// State for the reels tab.
#[derive(Debug)]
pub struct ReelsState {
    pub reels: Vec<Reel>,
    pub selected_index: usize,
}

impl Default for ReelsState {
    fn default() -> Self {
        Self {
            reels: sample_reels(),
            selected_index: 0,
        }
    }
}

impl ReelsState {
    /// Move the selection by delta, clamped.
    pub fn move_selection(&mut self, delta: i32) {
        let max = self.reels.len().saturating_sub(1);
        self.selected_index = ((self.selected_index as i32 + delta).max(0) as usize).min(max);
    }
}
