// Dragon registry
//
// Immutable id -> persona table built once at startup from the embedded
// TOML files under data/dragons/.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::EvalError;

/// A single evaluator persona
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dragon {
    /// Lookup identifier (e.g., "skylar")
    pub id: String,

    /// Full display name (e.g., `Skylar "Moonshot" Visionnaire`)
    pub name: String,

    /// One-line description of the evaluation angle
    pub description: String,

    /// System prompt constraining the model to the JSON feedback shape
    pub system_prompt: String,
}

pub struct DragonRegistry {
    dragons: HashMap<String, Dragon>,
}

impl DragonRegistry {
    /// Build the registry from the embedded persona files.
    pub fn builtin() -> Result<Self> {
        let sources = [
            include_str!("../../data/dragons/skylar.toml"),
            include_str!("../../data/dragons/morgan.toml"),
            include_str!("../../data/dragons/alex.toml"),
            include_str!("../../data/dragons/terra.toml"),
            include_str!("../../data/dragons/zara.toml"),
            include_str!("../../data/dragons/phoenix.toml"),
            include_str!("../../data/dragons/jobs.toml"),
            include_str!("../../data/dragons/christensen.toml"),
            include_str!("../../data/dragons/blakely.toml"),
        ];

        let mut dragons = HashMap::new();
        for source in sources {
            let dragon: Dragon =
                toml::from_str(source).context("Failed to parse builtin dragon")?;
            dragons.insert(dragon.id.clone(), dragon);
        }

        Ok(Self { dragons })
    }

    /// Look up a dragon by identifier.
    pub fn lookup(&self, id: &str) -> Result<&Dragon, EvalError> {
        self.dragons
            .get(id)
            .ok_or_else(|| EvalError::UnknownDragon(id.to_string()))
    }

    /// All registered identifiers, sorted for stable display.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.dragons.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.dragons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dragons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_loads_all_dragons() {
        let registry = DragonRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 9);

        for id in registry.ids() {
            let dragon = registry.lookup(id).unwrap();
            assert_eq!(dragon.id, id);
            assert!(
                !dragon.system_prompt.is_empty(),
                "dragon {} has an empty prompt",
                id
            );
        }
    }

    #[test]
    fn test_prompts_request_the_feedback_json_shape() {
        let registry = DragonRegistry::builtin().unwrap();
        for id in registry.ids() {
            let prompt = &registry.lookup(id).unwrap().system_prompt;
            for field in ["\"rating\"", "\"critique\"", "\"question\""] {
                assert!(
                    prompt.contains(field),
                    "dragon {} prompt does not request {}",
                    id,
                    field
                );
            }
        }
    }

    #[test]
    fn test_lookup_known_dragon() {
        let registry = DragonRegistry::builtin().unwrap();
        let dragon = registry.lookup("skylar").unwrap();
        assert_eq!(dragon.id, "skylar");
        assert!(dragon.name.contains("Skylar"));
    }

    #[test]
    fn test_lookup_unknown_dragon_fails() {
        let registry = DragonRegistry::builtin().unwrap();
        let error = registry.lookup("smaug").unwrap_err();
        assert!(matches!(error, EvalError::UnknownDragon(ref id) if id == "smaug"));
    }
}
