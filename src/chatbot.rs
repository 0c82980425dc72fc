// src/chatbot.rs
//! Canned conversational reply keyed by the predicted sentiment label.

/// Three-way lookup. Unknown or unexpected labels (including `neutral`)
/// get the generic acknowledgment.
pub fn respond(sentiment: &str) -> &'static str {
    match sentiment.trim().to_lowercase().as_str() {
        "negative" => "💡 I'm sorry to hear that. Stay strong!",
        "positive" => "🎉 That's awesome! Keep going!",
        _ => "🙂 Got it! Thanks for sharing.",
    }
}
