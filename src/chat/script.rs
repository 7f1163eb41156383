//! Fixed assistant lines and the recipe walkthrough builder.

use super::types::ChatMessage;
use crate::catalog::Recipe;

/// First message of every session.
pub const WELCOME: &str =
    "Hello! I'm your cooking assistant. Ask me anything about recipes, cooking techniques, or meal planning!";

/// Delayed reply to typed input when voice mode is off. Context-blind.
pub const CANNED_REPLY: &str =
    "I'd be happy to help with that! What specific ingredients do you have or what type of dish are you looking to make?";

pub const VOICE_ON_STATUS: &str =
    "Voice mode activated with Eleven Labs. You can speak with the assistant directly!";

pub const VOICE_OFF_STATUS: &str = "Voice mode deactivated. You can type your messages now.";

/// Seed message sent to the voice widget shortly after voice mode turns on.
pub const VOICE_GREETING: &str = "Hello, I'd like to talk about cooking.";

/// Builds the four-message walkthrough that replaces the log when a recipe
/// is selected: acknowledgment, bulleted ingredients, numbered instructions,
/// follow-up prompt.
pub fn recipe_walkthrough(recipe: &Recipe) -> Vec<ChatMessage> {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| format!("• {}", ingredient))
        .collect::<Vec<_>>()
        .join("\n");

    let instructions = recipe
        .instructions
        .iter()
        .enumerate()
        .map(|(index, step)| format!("{}. {}", index + 1, step))
        .collect::<Vec<_>>()
        .join("\n\n");

    vec![
        ChatMessage::bot(format!(
            "I'd be happy to help you make {}! Here's what you'll need:",
            recipe.title
        )),
        ChatMessage::bot(format!("**Ingredients:**\n{}", ingredients)),
        ChatMessage::bot(format!("**Instructions:**\n{}", instructions)),
        ChatMessage::bot("Do you have any questions about this recipe? I'm here to help!"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Difficulty, Recipe};
    use crate::chat::types::Role;

    fn sample_recipe() -> Recipe {
        Recipe::new("test-1", "Garlic Bread", "10 mins", "2 servings", Difficulty::Easy)
            .with_ingredients(&["1 baguette", "2 cloves garlic", "Butter"])
            .with_instructions(&["Slice the baguette.", "Spread garlic butter.", "Toast until golden."])
    }

    #[test]
    fn test_walkthrough_is_four_bot_messages() {
        let messages = recipe_walkthrough(&sample_recipe());
        assert_eq!(messages.len(), 4);
        assert!(messages.iter().all(|m| m.role == Role::Bot));
    }

    #[test]
    fn test_walkthrough_names_the_recipe() {
        let messages = recipe_walkthrough(&sample_recipe());
        assert!(messages[0].content.contains("Garlic Bread"));
    }

    #[test]
    fn test_ingredients_are_bulleted_in_order() {
        let messages = recipe_walkthrough(&sample_recipe());
        let lines: Vec<&str> = messages[1].content.lines().collect();
        assert_eq!(lines[0], "**Ingredients:**");
        assert_eq!(lines[1], "• 1 baguette");
        assert_eq!(lines[2], "• 2 cloves garlic");
        assert_eq!(lines[3], "• Butter");
    }

    #[test]
    fn test_instructions_are_numbered_with_blank_lines() {
        let messages = recipe_walkthrough(&sample_recipe());
        let body = &messages[2].content;
        assert!(body.starts_with("**Instructions:**\n1. Slice the baguette."));
        assert!(body.contains("\n\n2. Spread garlic butter."));
        assert!(body.contains("\n\n3. Toast until golden."));
    }
}
