use serde::{Deserialize, Serialize};

/// Symbolic icon attached to a category, rendered as a glyph in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryIcon {
    Pizza,
    Cake,
    Salad,
    Soup,
    Coffee,
    Drumstick,
    Fish,
    Apple,
    Sandwich,
    Book,
}

impl CategoryIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::Pizza => "🍕",
            CategoryIcon::Cake => "🍰",
            CategoryIcon::Salad => "🥗",
            CategoryIcon::Soup => "🍲",
            CategoryIcon::Coffee => "☕",
            CategoryIcon::Drumstick => "🍗",
            CategoryIcon::Fish => "🐟",
            CategoryIcon::Apple => "🍎",
            CategoryIcon::Sandwich => "🥪",
            CategoryIcon::Book => "📖",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub icon: CategoryIcon,
}

impl Category {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: CategoryIcon) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: Difficulty,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        cook_time: impl Into<String>,
        servings: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cook_time: cook_time.into(),
            servings: servings.into(),
            difficulty,
            image_url: "/placeholder.svg?height=200&width=300".to_string(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    pub fn with_ingredients(mut self, items: &[&str]) -> Self {
        self.ingredients = items.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_instructions(mut self, steps: &[&str]) -> Self {
        self.instructions = steps.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_recipe_builder() {
        let recipe = Recipe::new("test-1", "Test Dish", "10 mins", "2 servings", Difficulty::Easy)
            .with_ingredients(&["1 egg", "Salt"])
            .with_instructions(&["Crack the egg.", "Season with salt."]);

        assert_eq!(recipe.id, "test-1");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.instructions[1], "Season with salt.");
    }
}
