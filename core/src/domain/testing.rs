//! In-memory port implementations shared by the service tests.

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    chat::entities::AssistantConfig,
    common::{
        context::RequestContext, entities::app_errors::CoreError, generate_uuid_v7,
        services::Service,
    },
    generation::{
        entities::{ChatMessage, GenerationRequest},
        ports::{LLMClient, RecipeGenerator},
    },
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    medical_condition::{
        entities::MedicalCondition, ports::MedicalConditionRepository,
        value_objects::CreateMedicalConditionInput,
    },
    nutrition::{NutrientMap, NutrientPriority, NutrientProfile},
    recipe::{
        entities::{
            Difficulty, Favorite, FavoriteRecipe, Recipe, RecipeDraft, RecommendationHistoryEntry,
            RecommendationLog,
        },
        ports::{FavoriteRepository, RecipeRepository, RecommendationLogRepository},
        value_objects::TAG_MATCH_LIMIT,
    },
    user::{
        entities::{User, UserCondition, UserConditionDetail},
        ports::{UserConditionRepository, UserRepository},
    },
};

#[derive(Default)]
pub struct State {
    pub users: Vec<User>,
    pub conditions: Vec<MedicalCondition>,
    pub user_conditions: Vec<UserCondition>,
    pub recipes: Vec<Recipe>,
    pub favorites: Vec<Favorite>,
    pub logs: Vec<RecommendationLog>,
    /// Recipe titles whose insert fails.
    pub failing_titles: HashSet<String>,
    pub fail_logs: bool,
}

/// Every repository port over one shared in-memory state.
#[derive(Clone, Default)]
pub struct InMemoryDb {
    pub state: Arc<Mutex<State>>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        let mut state = self.state.lock().unwrap();
        f(&mut state)
    }

    pub fn seed_condition(&self, name: &str, nutrients: &[(&str, NutrientPriority)]) -> Uuid {
        let map: NutrientMap = nutrients
            .iter()
            .map(|(n, p)| (n.to_string(), *p))
            .collect();
        let condition = MedicalCondition::new(name.to_string(), format!("{} diet", name), map);
        let id = condition.id;
        self.with_state(|s| s.conditions.push(condition));
        id
    }

    pub fn seed_user(&self, email: &str) -> Uuid {
        let user = User::new(email.to_string(), "Test User".to_string());
        let id = user.id;
        self.with_state(|s| s.users.push(user));
        id
    }

    pub fn seed_recipe(&self, title: &str, tags: &[&str]) -> Recipe {
        let recipe = Recipe::from_draft(draft(title, tags));
        self.with_state(|s| s.recipes.push(recipe.clone()));
        recipe
    }

    pub fn recipe_count(&self) -> usize {
        self.with_state(|s| s.recipes.len())
    }

    pub fn logs(&self) -> Vec<RecommendationLog> {
        self.with_state(|s| s.logs.clone())
    }
}

pub fn draft(title: &str, tags: &[&str]) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        description: format!("{} description", title),
        ingredients: vec![],
        instructions: vec!["Cook".to_string()],
        nutritional_info: serde_json::Map::new(),
        prep_time: 10,
        cook_time: 20,
        servings: 4,
        difficulty: Difficulty::Easy,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn newest_first(mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recipes
}

impl UserRepository for InMemoryDb {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        self.with_state(|s| {
            if s.users.iter().any(|u| u.email == user.email) {
                return Err(CoreError::Conflict("email taken".to_string()));
            }
            s.users.push(user.clone());
            Ok(user)
        })
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self.with_state(|s| s.users.iter().find(|u| u.id == user_id).cloned()))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        Ok(self.with_state(|s| s.users.iter().find(|u| u.email == email).cloned()))
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        self.with_state(|s| {
            if s.users.iter().any(|u| u.email == user.email && u.id != user.id) {
                return Err(CoreError::Conflict("email taken".to_string()));
            }
            let existing = s
                .users
                .iter_mut()
                .find(|u| u.id == user.id)
                .ok_or(CoreError::InternalServerError)?;
            *existing = user.clone();
            Ok(user)
        })
    }
}

impl UserConditionRepository for InMemoryDb {
    async fn add_condition(&self, condition: UserCondition) -> Result<UserCondition, CoreError> {
        self.with_state(|s| {
            let duplicate = s.user_conditions.iter().any(|c| {
                c.user_id == condition.user_id
                    && c.medical_condition_id == condition.medical_condition_id
            });
            if duplicate {
                return Err(CoreError::Conflict("duplicate".to_string()));
            }
            s.user_conditions.push(condition.clone());
            Ok(condition)
        })
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<UserConditionDetail>, CoreError> {
        Ok(self.with_state(|s| {
            s.user_conditions
                .iter()
                .rev()
                .filter(|uc| uc.user_id == user_id)
                .filter_map(|uc| {
                    let condition = s
                        .conditions
                        .iter()
                        .find(|c| c.id == uc.medical_condition_id)?;
                    Some(UserConditionDetail {
                        id: uc.id,
                        severity: uc.severity,
                        diagnosed_at: uc.diagnosed_at,
                        notes: uc.notes.clone(),
                        condition_id: condition.id,
                        condition_name: condition.name.clone(),
                        description: condition.description.clone(),
                        recommended_nutrients: condition.recommended_nutrients.clone(),
                    })
                })
                .collect()
        }))
    }

    async fn remove_condition(
        &self,
        user_id: Uuid,
        condition_id: Uuid,
    ) -> Result<Option<UserCondition>, CoreError> {
        Ok(self.with_state(|s| {
            let position = s
                .user_conditions
                .iter()
                .position(|c| c.user_id == user_id && c.medical_condition_id == condition_id)?;
            Some(s.user_conditions.remove(position))
        }))
    }
}

impl MedicalConditionRepository for InMemoryDb {
    async fn fetch_all(&self) -> Result<Vec<MedicalCondition>, CoreError> {
        Ok(self.with_state(|s| {
            let mut all = s.conditions.clone();
            all.sort_by(|a, b| a.name.cmp(&b.name));
            all
        }))
    }

    async fn get_by_id(&self, condition_id: Uuid) -> Result<Option<MedicalCondition>, CoreError> {
        Ok(self.with_state(|s| s.conditions.iter().find(|c| c.id == condition_id).cloned()))
    }

    async fn get_by_name(&self, name: String) -> Result<Option<MedicalCondition>, CoreError> {
        Ok(self.with_state(|s| {
            s.conditions
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(&name))
                .cloned()
        }))
    }

    async fn search(&self, term: String) -> Result<Vec<MedicalCondition>, CoreError> {
        let term = term.to_lowercase();
        Ok(self.with_state(|s| {
            s.conditions
                .iter()
                .filter(|c| {
                    c.name.to_lowercase().contains(&term)
                        || c.description.to_lowercase().contains(&term)
                })
                .cloned()
                .collect()
        }))
    }

    async fn create(
        &self,
        input: CreateMedicalConditionInput,
    ) -> Result<MedicalCondition, CoreError> {
        let condition =
            MedicalCondition::new(input.name, input.description, input.recommended_nutrients);
        self.with_state(|s| s.conditions.push(condition.clone()));
        Ok(condition)
    }
}

impl RecipeRepository for InMemoryDb {
    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, CoreError> {
        self.with_state(|s| {
            if s.failing_titles.contains(&draft.title) {
                return Err(CoreError::InternalServerError);
            }
            let recipe = Recipe::from_draft(draft);
            s.recipes.push(recipe.clone());
            Ok(recipe)
        })
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        Ok(self.with_state(|s| s.recipes.iter().find(|r| r.id == recipe_id).cloned()))
    }

    async fn find_by_nutrient_tags(
        &self,
        profile: NutrientProfile,
    ) -> Result<Vec<Recipe>, CoreError> {
        let tags = profile.high_priority_tags();
        if tags.is_empty() {
            return Ok(vec![]);
        }
        let matching = self.with_state(|s| {
            s.recipes
                .iter()
                .filter(|r| r.has_any_tag(&tags))
                .cloned()
                .collect()
        });
        Ok(newest_first(matching)
            .into_iter()
            .take(TAG_MATCH_LIMIT as usize)
            .collect())
    }

    async fn get_by_tags(&self, tags: Vec<String>) -> Result<Vec<Recipe>, CoreError> {
        let matching = self.with_state(|s| {
            s.recipes
                .iter()
                .filter(|r| tags.iter().all(|t| r.tags.contains(t)))
                .cloned()
                .collect()
        });
        Ok(newest_first(matching))
    }

    async fn search(&self, term: String, limit: u64) -> Result<Vec<Recipe>, CoreError> {
        let term = term.to_lowercase();
        let matching = self.with_state(|s| {
            s.recipes
                .iter()
                .filter(|r| {
                    r.title.to_lowercase().contains(&term)
                        || r.description.to_lowercase().contains(&term)
                })
                .cloned()
                .collect()
        });
        Ok(newest_first(matching)
            .into_iter()
            .take(limit as usize)
            .collect())
    }

    async fn get_all(&self, limit: u64, offset: u64) -> Result<Vec<Recipe>, CoreError> {
        let all = self.with_state(|s| s.recipes.clone());
        Ok(newest_first(all)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

impl FavoriteRepository for InMemoryDb {
    async fn add_favorite(&self, favorite: Favorite) -> Result<Favorite, CoreError> {
        Ok(self.with_state(|s| {
            if let Some(existing) = s
                .favorites
                .iter()
                .find(|f| f.user_id == favorite.user_id && f.recipe_id == favorite.recipe_id)
            {
                return existing.clone();
            }
            s.favorites.push(favorite.clone());
            favorite
        }))
    }

    async fn remove_favorite(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Option<Favorite>, CoreError> {
        Ok(self.with_state(|s| {
            let position = s
                .favorites
                .iter()
                .position(|f| f.user_id == user_id && f.recipe_id == recipe_id)?;
            Some(s.favorites.remove(position))
        }))
    }

    async fn get_user_favorites(&self, user_id: Uuid) -> Result<Vec<FavoriteRecipe>, CoreError> {
        Ok(self.with_state(|s| {
            s.favorites
                .iter()
                .rev()
                .filter(|f| f.user_id == user_id)
                .filter_map(|f| {
                    let recipe = s.recipes.iter().find(|r| r.id == f.recipe_id)?.clone();
                    Some(FavoriteRecipe {
                        recipe,
                        favorited_at: f.created_at,
                    })
                })
                .collect()
        }))
    }

    async fn is_favorited(&self, user_id: Uuid, recipe_id: Uuid) -> Result<bool, CoreError> {
        Ok(self.with_state(|s| {
            s.favorites
                .iter()
                .any(|f| f.user_id == user_id && f.recipe_id == recipe_id)
        }))
    }
}

impl RecommendationLogRepository for InMemoryDb {
    async fn log_recommendation(
        &self,
        log: RecommendationLog,
    ) -> Result<RecommendationLog, CoreError> {
        self.with_state(|s| {
            if s.fail_logs {
                return Err(CoreError::InternalServerError);
            }
            s.logs.push(log.clone());
            Ok(log)
        })
    }

    async fn get_user_recommendations(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<RecommendationHistoryEntry>, CoreError> {
        Ok(self.with_state(|s| {
            s.logs
                .iter()
                .rev()
                .filter(|l| l.user_id == user_id)
                .filter_map(|l| {
                    let recipe = s.recipes.iter().find(|r| r.id == l.recipe_id)?;
                    Some(RecommendationHistoryEntry {
                        log: l.clone(),
                        recipe_title: recipe.title.clone(),
                        recipe_description: recipe.description.clone(),
                    })
                })
                .take(limit as usize)
                .collect()
        }))
    }
}

impl HealthCheckRepository for InMemoryDb {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            database: "up".to_string(),
            latency_ms: 0,
        })
    }
}

/// Generator returning a fixed result and counting calls.
pub struct FakeGenerator {
    result: Result<Vec<RecipeDraft>, CoreError>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl FakeGenerator {
    pub fn returning(drafts: Vec<RecipeDraft>) -> Self {
        Self {
            result: Ok(drafts),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: CoreError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl RecipeGenerator for FakeGenerator {
    async fn generate(
        &self,
        _ctx: RequestContext,
        request: GenerationRequest,
    ) -> Result<Vec<RecipeDraft>, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let count = request.count;
        self.requests.lock().unwrap().push(request);
        self.result
            .clone()
            .map(|drafts| drafts.into_iter().take(count).collect())
    }
}

/// LLM replaying scripted responses and recording the model of each call.
#[derive(Default)]
pub struct ScriptedLlm {
    responses: Mutex<VecDeque<Result<String, CoreError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    pub fn new(responses: Vec<Result<String, CoreError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, model: String) -> Result<String, CoreError> {
        self.calls.lock().unwrap().push(model);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CoreError::ExternalServiceError("script ended".to_string())))
    }
}

impl LLMClient for ScriptedLlm {
    async fn generate_with_text(
        &self,
        model: String,
        _prompt: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.next(model)
    }

    async fn chat(
        &self,
        model: String,
        _system_instruction: String,
        _messages: Vec<ChatMessage>,
    ) -> Result<String, CoreError> {
        self.next(model)
    }
}

pub type TestService = Service<
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    FakeGenerator,
    ScriptedLlm,
    InMemoryDb,
>;

pub fn service(db: &InMemoryDb, generator: FakeGenerator, llm: Arc<ScriptedLlm>) -> TestService {
    Service::new(
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        generator,
        llm,
        db.clone(),
        AssistantConfig {
            model: "chat-model".to_string(),
            max_attempts: 3,
            retry_delay: Duration::ZERO,
        },
    )
}

pub fn new_id() -> Uuid {
    generate_uuid_v7()
}

pub fn today() -> chrono::NaiveDate {
    Utc::now().date_naive()
}
