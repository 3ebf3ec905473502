//! XP ledger state: balance, award catalog, and the store purchase gate.

/// XP-earning actions and their fixed amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XpAward {
    UseTool,
    LikeIdea,
    CommentIdea,
    ShareIdea,
    UploadReel,
    DailyLogin,
    ReferFriend,
}

impl XpAward {
    /// All awards, in the order the store's "earn more XP" table lists them.
    pub const ALL: [XpAward; 7] = [
        XpAward::DailyLogin,
        XpAward::UseTool,
        XpAward::ShareIdea,
        XpAward::UploadReel,
        XpAward::LikeIdea,
        XpAward::CommentIdea,
        XpAward::ReferFriend,
    ];

    /// XP credited for this action.
    pub fn amount(&self) -> u64 {
        match self {
            XpAward::UseTool => 5,
            XpAward::LikeIdea => 2,
            XpAward::CommentIdea => 3,
            XpAward::ShareIdea => 10,
            XpAward::UploadReel => 20,
            XpAward::DailyLogin => 10,
            XpAward::ReferFriend => 100,
        }
    }

    /// Toast message for this action.
    pub fn label(&self) -> &'static str {
        match self {
            XpAward::UseTool => "Used trading tool",
            XpAward::LikeIdea => "Liked a trade idea",
            XpAward::CommentIdea => "Added a comment",
            XpAward::ShareIdea => "Shared a trade idea",
            XpAward::UploadReel => "Uploaded a reel",
            XpAward::DailyLogin => "Daily login bonus",
            XpAward::ReferFriend => "Referred a friend",
        }
    }

    /// Short description for the "earn more XP" table.
    pub fn description(&self) -> &'static str {
        match self {
            XpAward::UseTool => "Use tools",
            XpAward::LikeIdea => "Like ideas",
            XpAward::CommentIdea => "Comment on ideas",
            XpAward::ShareIdea => "Share trade idea",
            XpAward::UploadReel => "Upload reel",
            XpAward::DailyLogin => "Daily login",
            XpAward::ReferFriend => "Refer friend",
        }
    }
}

/// Store item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XpItemCategory {
    Premium,
    Boost,
    Cosmetic,
}

/// An item in the XP store catalog.
#[derive(Debug, Clone)]
pub struct XpItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub category: XpItemCategory,
}

/// The static store catalog.
pub fn catalog() -> Vec<XpItem> {
    vec![
        XpItem {
            id: "ad-free-24h",
            title: "Ad-Free 24H",
            description: "Remove all ads for 24 hours",
            cost: 500,
            category: XpItemCategory::Premium,
        },
        XpItem {
            id: "boost-post",
            title: "Boost Post",
            description: "Move your trade idea to top of feed",
            cost: 300,
            category: XpItemCategory::Boost,
        },
        XpItem {
            id: "creator-badge",
            title: "Creator Badge",
            description: "Show your expertise with a special badge",
            cost: 5000,
            category: XpItemCategory::Cosmetic,
        },
    ]
}

/// State for the XP ledger and store.
#[derive(Debug)]
pub struct XpState {
    /// Current XP balance. Never goes below zero; purchases are gated.
    pub balance: u64,
    /// Remaining ad-free hours. Zero when inactive.
    pub ad_free_hours_remaining: u64,
    /// Hours granted by the ad-free item.
    pub ad_free_hours: u64,
    /// Store catalog.
    pub items: Vec<XpItem>,
    /// Currently selected catalog item.
    pub selected_index: usize,
}

impl Default for XpState {
    fn default() -> Self {
        Self {
            balance: 1250,
            ad_free_hours_remaining: 0,
            ad_free_hours: 24,
            items: catalog(),
            selected_index: 0,
        }
    }
}

impl XpState {
    /// Credit XP to the balance. Always succeeds.
    pub fn credit(&mut self, amount: u64) {
        self.balance += amount;
    }

    /// Whether the balance covers the given cost.
    pub fn can_afford(&self, cost: u64) -> bool {
        self.balance >= cost
    }

    /// Attempt to purchase an item. Returns true on success.
    ///
    /// Failure is silent: the UI disables the affordance, and an unaffordable
    /// purchase leaves the balance untouched.
    pub fn purchase(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if !self.can_afford(item.cost) {
            return false;
        }
        self.balance -= item.cost;
        if item.id == "ad-free-24h" {
            self.ad_free_hours_remaining = self.ad_free_hours;
        }
        true
    }

    /// The currently selected catalog item.
    pub fn selected_item(&self) -> Option<&XpItem> {
        self.items.get(self.selected_index)
    }

    /// Move the catalog selection by delta, clamped.
    pub fn move_selection(&mut self, delta: i32) {
        let max = self.items.len().saturating_sub(1);
        let next = (self.selected_index as i32 + delta).max(0) as usize;
        self.selected_index = next.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_credit_sums_from_start() {
        let mut xp = XpState::default();
        let awards = [
            XpAward::UseTool,
            XpAward::LikeIdea,
            XpAward::CommentIdea,
            XpAward::ShareIdea,
            XpAward::UploadReel,
        ];
        let total: u64 = awards.iter().map(|a| a.amount()).sum();
        for award in awards {
            xp.credit(award.amount());
        }
        assert_eq!(xp.balance, 1250 + total);
    }

    #[test]
    fn test_purchase_scenario() {
        // Start 1250; buy the 500 item -> 750 and ad-free set;
        // attempt the 5000 item -> unchanged.
        let mut xp = XpState::default();
        let ad_free = xp.items.iter().position(|i| i.cost == 500).unwrap();
        let badge = xp.items.iter().position(|i| i.cost == 5000).unwrap();

        assert!(xp.purchase(ad_free));
        assert_eq!(xp.balance, 750);
        assert_eq!(xp.ad_free_hours_remaining, 24);

        assert!(!xp.can_afford(5000));
        assert!(!xp.purchase(badge));
        assert_eq!(xp.balance, 750);
    }

    #[test]
    fn test_purchase_only_ad_free_sets_flag() {
        let mut xp = XpState::default();
        let boost = xp.items.iter().position(|i| i.cost == 300).unwrap();
        assert!(xp.purchase(boost));
        assert_eq!(xp.balance, 950);
        assert_eq!(xp.ad_free_hours_remaining, 0);
    }

    #[test]
    fn test_purchase_out_of_range_is_noop() {
        let mut xp = XpState::default();
        assert!(!xp.purchase(99));
        assert_eq!(xp.balance, 1250);
    }

    #[test]
    fn test_award_amounts() {
        assert_eq!(XpAward::UseTool.amount(), 5);
        assert_eq!(XpAward::LikeIdea.amount(), 2);
        assert_eq!(XpAward::CommentIdea.amount(), 3);
        assert_eq!(XpAward::ShareIdea.amount(), 10);
        assert_eq!(XpAward::UploadReel.amount(), 20);
        assert_eq!(XpAward::DailyLogin.amount(), 10);
        assert_eq!(XpAward::ReferFriend.amount(), 100);
    }

    #[test]
    fn test_catalog_costs() {
        let items = catalog();
        let mut costs: Vec<u64> = items.iter().map(|i| i.cost).collect();
        costs.sort_unstable();
        assert_eq!(costs, vec![300, 500, 5000]);
    }
}
