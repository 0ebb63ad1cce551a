use const_format::concatcp;
use ratatui::style::palette::tailwind;

pub const PALETTES: [tailwind::Palette; 4] = [
    tailwind::EMERALD,
    tailwind::BLUE,
    tailwind::INDIGO,
    tailwind::RED,
];

pub const INFO_TEXT: [&str; 2] = [
    "(Esc) quit | (↑/↓) move row | (←/→) move col | (Enter) sort | (f) filter",
    "(a) analyze | (/) chat | (Shift + →/←) cycle color",
];

pub const ITEM_HEIGHT: usize = 2;
pub const POLL_DURATION_MS: u64 = 50;
pub const DEBUG_LOG_PATH: &str = "/tmp/cryptobuddy_debug.log";

// Scoring
pub const SUSTAINABILITY_THRESHOLD: f64 = 0.7;
pub const LOW_SUSTAINABILITY: f64 = 0.5;
pub const RISING_WEIGHT: f64 = 3.0;
pub const HIGH_CAP_WEIGHT: f64 = 2.0;
pub const MEDIUM_CAP_WEIGHT: f64 = 1.0;
pub const SUSTAINABILITY_WEIGHT: f64 = 3.0;

// Bot texts
pub const BOT_NAME: &str = "CryptoBuddy";
pub const BOT_MARKER: &str = "🤖";
pub const USER_PROMPT: &str = "You: ";
pub const GREETING: &str = "Hey there! Let's find you a green and growing crypto! 🌱🚀";
pub const DISCLAIMER: &str =
    "⚠️  Disclaimer: Crypto is risky—always do your own research! This is not financial advice.";
pub const GOODBYE: &str = concatcp!("Goodbye! Remember: ", DISCLAIMER);
pub const EXIT_WORDS: &[&str] = &["exit", "quit", "bye"];

pub const GREETING_REPLY: &str = concatcp!(
    GREETING,
    "\n\nI can help you with:\n",
    "• Trending cryptocurrencies \n",
    "• Sustainable coins \n",
    "• Investment recommendations \n",
    "• Crypto analysis \n\n",
    "What would you like to know?"
);

pub const HELP_REPLY: &str = concat!(
    "I'm not sure I understand. Try asking me:\n",
    "• \"Which cryptos are trending?\"\n",
    "• \"What's the most sustainable coin?\"\n",
    "• \"Recommend an investment\"\n",
    "• \"Analyze Bitcoin\"\n",
    "• \"List available cryptos\"\n\n",
    "Or type 'exit' to end our chat."
);

// Keyword sets, matched against the lower-cased input
pub const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "greetings"];
pub const TREND_WORDS: &[&str] = &["trend", "rising", "going up", "profit"];
pub const SUSTAINABILITY_WORDS: &[&str] = &["sustainable", "eco", "green", "environment"];
pub const RECOMMEND_WORDS: &[&str] = &["recommend", "suggest", "advice", "investment"];
pub const ANALYSIS_WORDS: &[&str] = &["analyze", "analysis", "info about"];
pub const LISTING_WORDS: &[&str] = &["list", "show all", "available"];
pub const THANKS_WORDS: &[&str] = &["thank", "thanks"];
