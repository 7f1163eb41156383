pub mod category_grid;
pub mod input_bar;
pub mod message_list;
pub mod recipe_card;

pub use category_grid::CategoryGrid;
pub use input_bar::InputBar;
pub use message_list::MessageList;
pub use recipe_card::RecipeCard;
