#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::common::validate_text;
use crate::text::fold_name;
use crate::{ContractViolation, Validate};

/// One canonical attribute dimension with the producer-specific names it is known by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeKey {
    pub key: String,
    pub label: String,
    pub aliases: Vec<String>,
}

impl AttributeKey {
    pub fn new(key: &str, label: &str, aliases: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        }
    }

    /// Key first, then aliases, then the display label.
    pub fn lookup_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.key.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .chain(std::iter::once(self.label.as_str()))
    }
}

impl Validate for AttributeKey {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text("attribute_key.key", &self.key, 128)?;
        validate_text("attribute_key.label", &self.label, 128)?;
        for alias in &self.aliases {
            validate_text("attribute_key.alias", alias, 128)?;
        }
        Ok(())
    }
}

/// Every key must carry printable names; keys must be unique.
pub fn validate_registry(registry: &dyn CanonicalRegistry) -> Result<(), ContractViolation> {
    let mut seen = BTreeSet::new();
    for key in registry.keys() {
        key.validate()?;
        if !seen.insert(key.key.as_str()) {
            return Err(ContractViolation::InvalidValue {
                field: "attribute_key.key",
                reason: "must be unique within the registry",
            });
        }
    }
    Ok(())
}

/// Read-only source of the canonical attribute set. Key order is part of the
/// output contract: chart axes and gap tables index by position.
pub trait CanonicalRegistry {
    fn keys(&self) -> &[AttributeKey];

    fn score_for(&self, key: &AttributeKey, scores: &BTreeMap<String, f64>) -> Option<f64> {
        lookup_score(key, scores)
    }

    fn len(&self) -> usize {
        self.keys().len()
    }

    fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}

/// Resolves a canonical key against a loosely-keyed score mapping.
pub fn lookup_score(key: &AttributeKey, scores: &BTreeMap<String, f64>) -> Option<f64> {
    let folded: Vec<(String, f64)> = scores
        .iter()
        .filter(|(_, score)| score.is_finite())
        .map(|(name, score)| (fold_name(name), *score))
        .collect();

    key.lookup_names().find_map(|name| {
        if let Some(score) = scores.get(name).filter(|score| score.is_finite()) {
            return Some(*score);
        }
        let wanted = fold_name(name);
        folded
            .iter()
            .find(|(candidate, _)| *candidate == wanted)
            .map(|(_, score)| *score)
    })
}

const BUILTIN_KEYS: &[(&str, &str, &[&str])] = &[
    ("empathy", "Empatia", &["empatia", "empathy"]),
    (
        "practical_thinking",
        "Pensamento Prático",
        &["pensamento_pratico", "practical_thinking", "practical"],
    ),
    (
        "systems_judgment",
        "Julgamento Sistêmico",
        &[
            "julgamento_sistemico",
            "systems_judgment",
            "systems_judgement",
        ],
    ),
    (
        "self_esteem",
        "Autoestima",
        &["autoestima", "auto_estima", "self_esteem"],
    ),
    (
        "role_awareness",
        "Consciência de Papel",
        &["consciencia_de_papel", "consciencia_papel", "role_awareness"],
    ),
    (
        "self_direction",
        "Autodireção",
        &["autodirecao", "auto_direcao", "self_direction"],
    ),
    (
        "decision_making",
        "Tomada de Decisão",
        &["tomada_de_decisao", "decision_making"],
    ),
    (
        "problem_solving",
        "Resolução de Problemas",
        &["resolucao_de_problemas", "problem_solving"],
    ),
    (
        "conflict_management",
        "Gestão de Conflitos",
        &["gestao_de_conflitos", "conflict_management"],
    ),
    ("leadership", "Liderança", &["lideranca", "leadership"]),
    (
        "results_orientation",
        "Orientação a Resultados",
        &[
            "orientacao_a_resultados",
            "orientacao_para_resultados",
            "results_orientation",
        ],
    ),
    (
        "emotional_control",
        "Controle Emocional",
        &["controle_emocional", "emotional_control"],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRegistry {
    keys: Vec<AttributeKey>,
}

impl StaticRegistry {
    pub fn new(keys: Vec<AttributeKey>) -> Self {
        Self { keys }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_KEYS
                .iter()
                .map(|(key, label, aliases)| AttributeKey::new(key, label, aliases))
                .collect(),
        )
    }
}

impl Default for StaticRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CanonicalRegistry for StaticRegistry {
    fn keys(&self) -> &[AttributeKey] {
        &self.keys
    }
}
