use crate::domain::{
    chat::entities::{CookingAssistanceInput, RecipeContext},
    common::entities::app_errors::CoreError,
    generation::entities::ChatRole,
};

/// Checks the conversation before it is sent to the model.
pub fn validate_assistance_input(input: &CookingAssistanceInput) -> Result<&str, CoreError> {
    let last = input.messages.last().ok_or_else(|| {
        CoreError::Validation("Messages array is required and must not be empty".to_string())
    })?;

    let title = input
        .recipe_context
        .as_ref()
        .and_then(|ctx| ctx.title.as_deref())
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(|| CoreError::Validation("Recipe context with title is required".to_string()))?;

    if last.role != ChatRole::User {
        return Err(CoreError::Validation(
            "Last message must be from user".to_string(),
        ));
    }

    Ok(title)
}

pub fn build_system_instruction(context: &RecipeContext) -> String {
    let title = context.title.as_deref().unwrap_or_default();
    let description = context
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("A delicious recipe");

    let ingredients = context
        .ingredients
        .as_ref()
        .and_then(|i| serde_json::to_string_pretty(i).ok())
        .unwrap_or_else(|| "[]".to_string());

    let instructions = match &context.instructions {
        Some(steps) if !steps.is_empty() => steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => "Follow the recipe steps".to_string(),
    };

    format!(
        "You are a helpful, encouraging cooking assistant. The user is making this recipe:\n\n\
         Title: {title}\n\
         Description: {description}\n\n\
         Ingredients:\n{ingredients}\n\n\
         Instructions:\n{instructions}\n\n\
         Answer their cooking questions clearly and concisely. Be supportive and give practical tips. \
         If they ask about substitutions, timing, or techniques, provide helpful guidance."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::entities::ChatMessage;

    fn context(title: Option<&str>) -> Option<RecipeContext> {
        Some(RecipeContext {
            title: title.map(str::to_string),
            instructions: Some(vec!["Boil water".to_string(), "Add pasta".to_string()]),
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_messages_rejected() {
        let input = CookingAssistanceInput {
            messages: vec![],
            recipe_context: context(Some("Pasta")),
        };
        assert!(matches!(
            validate_assistance_input(&input),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_title_rejected() {
        let input = CookingAssistanceInput {
            messages: vec![ChatMessage::user("How long?")],
            recipe_context: context(None),
        };
        assert!(validate_assistance_input(&input).is_err());
    }

    #[test]
    fn test_last_message_must_be_from_user() {
        let input = CookingAssistanceInput {
            messages: vec![ChatMessage::user("Hi"), ChatMessage::assistant("Hello!")],
            recipe_context: context(Some("Pasta")),
        };
        let err = validate_assistance_input(&input).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation("Last message must be from user".to_string())
        );
    }

    #[test]
    fn test_system_instruction_numbers_steps() {
        let instruction = build_system_instruction(&context(Some("Pasta")).unwrap());
        assert!(instruction.contains("Title: Pasta"));
        assert!(instruction.contains("Description: A delicious recipe"));
        assert!(instruction.contains("1. Boil water\n2. Add pasta"));
    }
}
