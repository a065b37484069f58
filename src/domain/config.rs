//! Config - Application Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_QUICK_ADD_TAGS;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Ticket form options
    pub ticket: TicketConfig,
    /// Calculator form options
    pub calculator: CalculatorConfig,
}

/// Ticket form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketConfig {
    /// Accessory labels offered as quick-add buttons
    pub quick_add_tags: Vec<String>,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            quick_add_tags: DEFAULT_QUICK_ADD_TAGS
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
        }
    }
}

/// Calculator form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalculatorConfig {
    /// Newline-delimited suggestion resource for the item-name datalist
    pub suggestions_file: Option<PathBuf>,
}
