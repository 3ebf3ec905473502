//! Trading-tool panel state.
//!
//! Eight placeholder tools; at most one open at a time. The calculators
//! display fixed placeholder results regardless of input, and the numeric
//! text fields are not validated. Preserving that absence is deliberate.

/// The eight tool panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    PipCalculator,
    PositionSize,
    EconomicCalendar,
    MarketSentiment,
    CurrencyStrength,
    CorrelationMatrix,
    PriceAlerts,
    StatisticalArbitrage,
}

impl Tool {
    /// All tools in grid order.
    pub const ALL: [Tool; 8] = [
        Tool::PipCalculator,
        Tool::PositionSize,
        Tool::EconomicCalendar,
        Tool::MarketSentiment,
        Tool::CurrencyStrength,
        Tool::CorrelationMatrix,
        Tool::PriceAlerts,
        Tool::StatisticalArbitrage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::PipCalculator => "Pip Calculator",
            Tool::PositionSize => "Position Size",
            Tool::EconomicCalendar => "Economic Calendar",
            Tool::MarketSentiment => "Market Sentiment",
            Tool::CurrencyStrength => "Currency Strength",
            Tool::CorrelationMatrix => "Correlation Matrix",
            Tool::PriceAlerts => "Price Alerts",
            Tool::StatisticalArbitrage => "Statistical Arbitrage",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tool::PipCalculator => "Calculate pip values",
            Tool::PositionSize => "Calculate position sizes",
            Tool::EconomicCalendar => "Track economic events",
            Tool::MarketSentiment => "View market sentiment",
            Tool::CurrencyStrength => "Monitor currency strength",
            Tool::CorrelationMatrix => "View pair correlations",
            Tool::PriceAlerts => "Monitor price alerts",
            Tool::StatisticalArbitrage => "Advanced pair trading tools",
        }
    }

    /// Label for the tool's "+5 XP" action button.
    pub fn action_label(&self) -> &'static str {
        match self {
            Tool::PipCalculator | Tool::PositionSize => "Calculate",
            Tool::EconomicCalendar => "Set Notifications",
            Tool::MarketSentiment => "Refresh Data",
            Tool::CurrencyStrength => "Update Strength",
            Tool::CorrelationMatrix => "Update Correlations",
            Tool::PriceAlerts => "Set Alert",
            Tool::StatisticalArbitrage => "Run Statistical Arbitrage Analysis",
        }
    }
}

/// Price alert trigger kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Above,
    Below,
    Crosses,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::Above => "Price Above",
            AlertKind::Below => "Price Below",
            AlertKind::Crosses => "Price Crosses",
        }
    }

    pub fn next(&self) -> AlertKind {
        match self {
            AlertKind::Above => AlertKind::Below,
            AlertKind::Below => AlertKind::Crosses,
            AlertKind::Crosses => AlertKind::Above,
        }
    }
}

/// Which chart explainer modal is open in the stat-arb panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartInfo {
    ZScore,
    Garch,
    Percentage,
}

/// Economic event impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// A calendar entry. Static sample data.
#[derive(Debug, Clone)]
pub struct EconomicEvent {
    pub time: &'static str,
    pub currency: &'static str,
    pub event: &'static str,
    pub impact: Impact,
    pub forecast: &'static str,
    pub previous: &'static str,
}

/// Sentiment split for a pair. Percentages sum to 100 in the sample data.
#[derive(Debug, Clone, Copy)]
pub struct SentimentEntry {
    pub pair: &'static str,
    pub bullish: u8,
    pub bearish: u8,
}

/// Currency strength score with a change label.
#[derive(Debug, Clone, Copy)]
pub struct StrengthEntry {
    pub currency: &'static str,
    pub strength: u8,
    pub change: &'static str,
}

/// Correlation coefficient between two pairs.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationEntry {
    pub pairs: &'static str,
    pub correlation: f64,
}

pub fn economic_events() -> Vec<EconomicEvent> {
    vec![
        EconomicEvent {
            time: "14:30",
            currency: "USD",
            event: "Non-Farm Payrolls",
            impact: Impact::High,
            forecast: "180K",
            previous: "175K",
        },
        EconomicEvent {
            time: "16:00",
            currency: "EUR",
            event: "ECB Interest Rate Decision",
            impact: Impact::High,
            forecast: "4.50%",
            previous: "4.50%",
        },
    ]
}

pub fn market_sentiment() -> Vec<SentimentEntry> {
    vec![
        SentimentEntry { pair: "EUR/USD", bullish: 68, bearish: 32 },
        SentimentEntry { pair: "GBP/USD", bullish: 45, bearish: 55 },
        SentimentEntry { pair: "USD/JPY", bullish: 72, bearish: 28 },
    ]
}

pub fn currency_strength() -> Vec<StrengthEntry> {
    vec![
        StrengthEntry { currency: "USD", strength: 85, change: "+2.3%" },
        StrengthEntry { currency: "EUR", strength: 72, change: "-1.1%" },
        StrengthEntry { currency: "GBP", strength: 68, change: "+0.8%" },
    ]
}

pub fn correlation_data() -> Vec<CorrelationEntry> {
    vec![
        CorrelationEntry { pairs: "EUR/USD vs GBP/USD", correlation: 0.78 },
        CorrelationEntry { pairs: "USD/JPY vs USD/CHF", correlation: -0.34 },
        CorrelationEntry { pairs: "AUD/USD vs NZD/USD", correlation: 0.72 },
    ]
}

/// Selectable pairs for the alert and stat-arb forms.
pub const PAIRS: [&str; 6] = [
    "EUR/USD", "GBP/USD", "USD/JPY", "AUD/USD", "USD/CHF", "USD/CAD",
];

/// Lookback period labels for the stat-arb panel.
pub const PERIODS: [&str; 3] = ["20", "50", "100"];

/// State for the tools tab.
#[derive(Debug)]
pub struct ToolsState {
    /// Open tool panel, if any. None shows the grid.
    pub selected_tool: Option<Tool>,
    /// Grid cursor when no tool is open.
    pub grid_index: usize,

    // Price-alert form.
    pub alert_pair: usize,
    pub alert_kind: AlertKind,
    pub alert_price: String,

    // Statistical-arbitrage sub-widget.
    pub stat_arb_pair1: usize,
    pub stat_arb_pair2: usize,
    pub stat_arb_period: usize,
    /// Main "what is statistical arbitrage" explainer.
    pub show_stat_arb_info: bool,
    /// Per-chart explainer, if open.
    pub chart_info: Option<ChartInfo>,
}

impl Default for ToolsState {
    fn default() -> Self {
        Self {
            selected_tool: None,
            grid_index: 0,
            alert_pair: 0,
            alert_kind: AlertKind::Above,
            alert_price: String::new(),
            stat_arb_pair1: 0,
            stat_arb_pair2: 1,
            stat_arb_period: 0,
            show_stat_arb_info: false,
            chart_info: None,
        }
    }
}

impl ToolsState {
    /// The tool under the grid cursor.
    pub fn grid_tool(&self) -> Tool {
        Tool::ALL[self.grid_index.min(Tool::ALL.len() - 1)]
    }

    /// Move the grid cursor by delta, clamped.
    pub fn move_grid(&mut self, delta: i32) {
        let max = Tool::ALL.len() - 1;
        self.grid_index = ((self.grid_index as i32 + delta).max(0) as usize).min(max);
    }

    /// Close the open tool and any of its modals.
    pub fn close_tool(&mut self) {
        self.selected_tool = None;
        self.close_modals();
    }

    /// Close stat-arb modals.
    pub fn close_modals(&mut self) {
        self.show_stat_arb_info = false;
        self.chart_info = None;
    }

    /// Whether any tools-owned modal is open.
    pub fn modal_open(&self) -> bool {
        self.show_stat_arb_info || self.chart_info.is_some()
    }

    pub fn alert_pair_name(&self) -> &'static str {
        PAIRS[self.alert_pair % PAIRS.len()]
    }

    pub fn stat_arb_pair1_name(&self) -> &'static str {
        PAIRS[self.stat_arb_pair1 % PAIRS.len()]
    }

    pub fn stat_arb_pair2_name(&self) -> &'static str {
        PAIRS[self.stat_arb_pair2 % PAIRS.len()]
    }

    pub fn period_label(&self) -> &'static str {
        PERIODS[self.stat_arb_period % PERIODS.len()]
    }

    pub fn cycle_alert_pair(&mut self) {
        self.alert_pair = (self.alert_pair + 1) % PAIRS.len();
    }

    pub fn cycle_stat_arb_pair1(&mut self) {
        self.stat_arb_pair1 = (self.stat_arb_pair1 + 1) % PAIRS.len();
    }

    pub fn cycle_stat_arb_pair2(&mut self) {
        self.stat_arb_pair2 = (self.stat_arb_pair2 + 1) % PAIRS.len();
    }

    pub fn cycle_period(&mut self) {
        self.stat_arb_period = (self.stat_arb_period + 1) % PERIODS.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grid_cursor_clamped() {
        let mut tools = ToolsState::default();
        tools.move_grid(100);
        assert_eq!(tools.grid_tool(), Tool::StatisticalArbitrage);
        tools.move_grid(-100);
        assert_eq!(tools.grid_tool(), Tool::PipCalculator);
    }

    #[test]
    fn test_close_tool_closes_modals() {
        let mut tools = ToolsState::default();
        tools.selected_tool = Some(Tool::StatisticalArbitrage);
        tools.show_stat_arb_info = true;
        tools.close_tool();
        assert_eq!(tools.selected_tool, None);
        assert!(!tools.modal_open());
    }

    #[test]
    fn test_alert_kind_cycles() {
        let kind = AlertKind::Above;
        assert_eq!(kind.next(), AlertKind::Below);
        assert_eq!(kind.next().next(), AlertKind::Crosses);
        assert_eq!(kind.next().next().next(), AlertKind::Above);
    }

    #[test]
    fn test_pair_cycling_wraps() {
        let mut tools = ToolsState::default();
        for _ in 0..PAIRS.len() {
            tools.cycle_stat_arb_pair1();
        }
        assert_eq!(tools.stat_arb_pair1_name(), "EUR/USD");
    }

    #[test]
    fn test_sentiment_fixture_sums_to_100() {
        for entry in market_sentiment() {
            assert_eq!(entry.bullish as u16 + entry.bearish as u16, 100);
        }
    }
}
