//! Chain declaration model and parser (`chain.yml` / `chain.toml`).

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::domain::order::OrderConstraint;
use crate::domain::{AppError, StageId};

/// On-disk shape of a chain declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChainFile {
    #[serde(default)]
    stages: Vec<String>,
    #[serde(default)]
    order: Vec<OrderEntry>,
}

/// One `order` entry. Valid shapes are `{ stage, depends_on }` and `{ last }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OrderEntry {
    stage: Option<String>,
    depends_on: Option<String>,
    last: Option<String>,
}

impl OrderEntry {
    fn into_constraint(self, position: usize) -> Result<OrderConstraint<StageId>, AppError> {
        match (self.stage, self.depends_on, self.last) {
            (Some(stage), Some(depends_on), None) => {
                let stage = StageId::new(&stage)?;
                Ok(OrderConstraint::of(stage).depends_on(StageId::new(&depends_on)?))
            }
            (None, None, Some(last)) => Ok(OrderConstraint::last(StageId::new(&last)?)),
            _ => Err(AppError::parse_error(
                "chain file",
                format!(
                    "order entry {}: expected either 'stage' with 'depends_on', or 'last' alone",
                    position + 1
                ),
            )),
        }
    }
}

/// Serialization format of a chain declaration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFormat {
    Yaml,
    Toml,
}

impl ChainFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Ok(ChainFormat::Yaml),
            Some("toml") => Ok(ChainFormat::Toml),
            _ => Err(AppError::UnsupportedChainFormat(path.display().to_string())),
        }
    }
}

/// A validated chain: stages in declared order plus their constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub stages: Vec<StageId>,
    pub constraints: Vec<OrderConstraint<StageId>>,
}

impl ChainConfig {
    /// Parse and validate chain declaration content.
    pub fn parse(content: &str, format: ChainFormat) -> Result<Self, AppError> {
        let file: ChainFile = match format {
            ChainFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| AppError::parse_error("chain file (YAML)", e))?,
            ChainFormat::Toml => {
                toml::from_str(content).map_err(|e| AppError::parse_error("chain file (TOML)", e))?
            }
        };
        Self::from_file(file)
    }

    fn from_file(file: ChainFile) -> Result<Self, AppError> {
        if file.stages.is_empty() {
            return Err(AppError::Validation(
                "No stages declared in chain file. Add stages to the 'stages' list.".into(),
            ));
        }

        let mut seen = HashSet::new();
        let mut stages = Vec::with_capacity(file.stages.len());
        for name in &file.stages {
            let id = StageId::new(name)?;
            if !seen.insert(id.clone()) {
                return Err(AppError::Validation(format!(
                    "Stage '{}' is declared more than once",
                    id
                )));
            }
            stages.push(id);
        }

        let constraints = file
            .order
            .into_iter()
            .enumerate()
            .map(|(position, entry)| entry.into_constraint(position))
            .collect::<Result<Vec<_>, AppError>>()?;

        let config = Self { stages, constraints };
        for unknown in config.unknown_references() {
            warn!("order constraint names '{}', which is not a declared stage", unknown);
        }
        Ok(config)
    }

    /// Stages named by constraints but absent from `stages`, without repeats.
    pub fn unknown_references(&self) -> Vec<&StageId> {
        let mut unknown: Vec<&StageId> = Vec::new();
        for constraint in &self.constraints {
            let named = match constraint {
                OrderConstraint::Last(stage) => vec![stage],
                OrderConstraint::DependsOn { stage, dependency } => vec![stage, dependency],
            };
            for id in named {
                if !self.stages.contains(id) && !unknown.contains(&id) {
                    unknown.push(id);
                }
            }
        }
        unknown
    }
}
