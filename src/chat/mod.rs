//! Keyword-driven chat replies.
//!
//! Input is lower-cased and checked for keyword substrings against an
//! ordered intent table. The first matching intent wins.

mod console;

pub use console::run_console;

use std::fmt::Write;

use crate::config::{
    ANALYSIS_WORDS, DISCLAIMER, EXIT_WORDS, GOODBYE, GREETING_REPLY, GREETING_WORDS, HELP_REPLY,
    LISTING_WORDS, RECOMMEND_WORDS, SUSTAINABILITY_THRESHOLD, SUSTAINABILITY_WORDS, THANKS_WORDS,
    TREND_WORDS,
};
use crate::engine::RecommendationEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Trend,
    Sustainability,
    Recommendation,
    Analysis,
    Listing,
    Thanks,
    Exit,
    Unknown,
}

/// Checked top to bottom; the first intent with a matching keyword wins.
const INTENTS: [(Intent, &[&str]); 8] = [
    (Intent::Greeting, GREETING_WORDS),
    (Intent::Trend, TREND_WORDS),
    (Intent::Sustainability, SUSTAINABILITY_WORDS),
    (Intent::Recommendation, RECOMMEND_WORDS),
    (Intent::Analysis, ANALYSIS_WORDS),
    (Intent::Listing, LISTING_WORDS),
    (Intent::Thanks, THANKS_WORDS),
    (Intent::Exit, EXIT_WORDS),
];

/// Classify already lower-cased text.
pub fn detect_intent(text: &str) -> Intent {
    INTENTS
        .iter()
        .find(|(_, words)| contains_any(text, words))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Unknown)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

#[derive(Clone, Debug, Default)]
pub struct ChatBot {
    engine: RecommendationEngine,
}

impl ChatBot {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    pub fn respond(&self, input: &str) -> String {
        let text = input.to_lowercase();
        let intent = detect_intent(&text);
        log::debug!("'{}' -> {:?}", text, intent);

        match intent {
            Intent::Greeting => GREETING_REPLY.to_string(),
            Intent::Trend => self.trending_reply(),
            Intent::Sustainability => self.sustainable_reply(),
            Intent::Recommendation => self.recommendation_reply(),
            Intent::Analysis => self.analysis_reply(&text),
            Intent::Listing => self.listing_reply(),
            Intent::Thanks => "You're welcome! Happy investing! 🚀".to_string(),
            Intent::Exit => GOODBYE.to_string(),
            Intent::Unknown => HELP_REPLY.to_string(),
        }
    }

    fn trending_reply(&self) -> String {
        let rising = self.engine.rising();
        if rising.is_empty() {
            return "No cryptocurrencies are currently showing strong upward trends.".to_string();
        }
        let mut reply = String::from(" Currently trending cryptocurrencies:\n");
        for name in rising {
            let _ = writeln!(reply, "• {}", name);
        }
        let _ = write!(reply, "\n{}", DISCLAIMER);
        reply
    }

    fn sustainable_reply(&self) -> String {
        let picks = self.engine.sustainable(SUSTAINABILITY_THRESHOLD);
        if picks.is_empty() {
            return "No highly sustainable cryptocurrencies found.".to_string();
        }
        let mut reply = String::from("🌱 Most sustainable cryptocurrencies:\n");
        for (name, score) in picks {
            let _ = writeln!(reply, "• {} (Score: {:.1}/10)", name, score * 10.0);
        }
        let _ = write!(reply, "\n{}", DISCLAIMER);
        reply
    }

    fn recommendation_reply(&self) -> String {
        let Some(top) = self.engine.recommend() else {
            log::warn!("Recommendation requested with an empty asset table");
            return "I don't have any cryptocurrencies to recommend right now.".to_string();
        };
        let mut reply =
            String::from("💡 Based on profitability and sustainability, I recommend:\n\n");
        let _ = writeln!(reply, "🏆 {}!", top.name);
        let _ = writeln!(reply, "• Price Trend: {}", top.price_trend);
        let _ = writeln!(reply, "• Market Cap: {}", top.market_cap);
        let _ = writeln!(reply, "• Sustainability: {}", top.score_out_of_ten());
        let _ = writeln!(reply, "• Energy Use: {}\n", top.energy_use);
        reply.push_str("🌟 Why? It balances growth potential with environmental responsibility!\n\n");
        reply.push_str(DISCLAIMER);
        reply
    }

    fn analysis_reply(&self, text: &str) -> String {
        let table = self.engine.table();
        match table.iter().find(|a| text.contains(&a.name.to_lowercase())) {
            Some(asset) => self
                .engine
                .analyze(&asset.name)
                .unwrap_or_else(|e| e.to_string()),
            None => format!(
                "Which cryptocurrency would you like me to analyze? Try: {}",
                table.joined_names()
            ),
        }
    }

    fn listing_reply(&self) -> String {
        let mut reply = String::from("📋 Available cryptocurrencies in my database:\n");
        for name in self.engine.table().names() {
            let _ = writeln!(reply, "• {}", name);
        }
        reply.push_str("\nAsk me about any of them!");
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AssetTable;

    #[test]
    fn intent_priority() {
        assert_eq!(detect_intent("hello there"), Intent::Greeting);
        assert_eq!(detect_intent("what is going up?"), Intent::Trend);
        assert_eq!(detect_intent("most profitable coin"), Intent::Trend);
        assert_eq!(detect_intent("eco friendly coins"), Intent::Sustainability);
        assert_eq!(detect_intent("any advice?"), Intent::Recommendation);
        assert_eq!(detect_intent("analyze solana"), Intent::Analysis);
        assert_eq!(detect_intent("show all coins"), Intent::Listing);
        assert_eq!(detect_intent("thanks a lot"), Intent::Thanks);
        assert_eq!(detect_intent("bye now"), Intent::Exit);
        assert_eq!(detect_intent("what's the weather"), Intent::Unknown);
    }

    #[test]
    fn keywords_match_inside_words() {
        // "which" contains "hi"
        assert_eq!(detect_intent("which cryptos are trending?"), Intent::Greeting);
        // "recommend" contains "eco"
        assert_eq!(detect_intent("recommend an investment"), Intent::Sustainability);
        assert_eq!(detect_intent("sustainable investment"), Intent::Sustainability);
    }

    #[test]
    fn respond_lowercases_input() {
        let bot = ChatBot::default();
        assert_eq!(bot.respond("HELLO"), GREETING_REPLY);
    }

    #[test]
    fn trending_reply_lists_rising_coins() {
        let reply = ChatBot::default().respond("show me rising coins");
        assert!(reply.starts_with(" Currently trending cryptocurrencies:\n"));
        assert!(reply.contains("• Bitcoin\n• Cardano\n• Solana\n"));
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[test]
    fn sustainable_reply_scores_out_of_ten() {
        let reply = ChatBot::default().respond("green coins please");
        assert!(reply.contains("• Cardano (Score: 8.0/10)\n• Solana (Score: 7.0/10)\n• Polkadot (Score: 7.0/10)\n"));
    }

    #[test]
    fn recommendation_picks_cardano() {
        let reply = ChatBot::default().respond("Investment advice?");
        assert!(reply.contains("🏆 Cardano!"));
        assert!(reply.contains("• Price Trend: rising"));
        assert!(reply.contains("• Market Cap: medium"));
        assert!(reply.contains("• Sustainability: 8.0/10"));
        assert!(reply.contains("• Energy Use: low"));
    }

    #[test]
    fn recommendation_with_empty_table() {
        let engine = RecommendationEngine::new(AssetTable::new(Vec::new()).unwrap());
        let reply = ChatBot::new(engine).respond("suggest a coin");
        assert_eq!(reply, "I don't have any cryptocurrencies to recommend right now.");
    }

    #[test]
    fn analysis_finds_named_coin() {
        let reply = ChatBot::default().respond("Analyze Bitcoin");
        assert!(reply.contains("Analysis for Bitcoin:"));
        assert!(reply.contains("Currently trending upward!"));
    }

    #[test]
    fn analysis_without_known_coin_prompts() {
        let reply = ChatBot::default().respond("analyze ripple");
        assert!(reply.starts_with("Which cryptocurrency would you like me to analyze?"));
        assert!(reply.contains("Bitcoin, Ethereum, Cardano, Solana, Polkadot"));
    }

    #[test]
    fn listing_and_fallbacks() {
        let bot = ChatBot::default();
        let listing = bot.respond("list");
        assert!(listing.contains("• Polkadot\n"));
        assert!(listing.ends_with("Ask me about any of them!"));
        assert_eq!(bot.respond("quit"), GOODBYE);
        assert_eq!(bot.respond("zzz"), HELP_REPLY);
    }
}
