pub use super::medical_conditions::Entity as MedicalConditions;
pub use super::recipe_recommendations::Entity as RecipeRecommendations;
pub use super::recipes::Entity as Recipes;
pub use super::user_favorites::Entity as UserFavorites;
pub use super::user_medical_conditions::Entity as UserMedicalConditions;
pub use super::users::Entity as Users;
