use crate::model::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Serving temperature of a drink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Temperature {
    #[default]
    Ice,
    Hot,
}

impl Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Temperature::Ice => write!(f, "ICE"),
            Temperature::Hot => write!(f, "HOT"),
        }
    }
}

/// A finished drink descriptor, e.g. `아메리카노 (HOT)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Drink {
    pub menu_name: String,
    pub temperature: Temperature,
}

impl Display for Drink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.menu_name, self.temperature)
    }
}

/// A menu item picked in a draft, with the temperature chosen so far (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkSelection {
    pub item: MenuItem,
    pub temperature: Option<Temperature>,
}

impl DrinkSelection {
    pub fn new(item: MenuItem) -> Self {
        Self {
            item,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.choose(temperature);
        self
    }

    /// Records a temperature choice. Choosing HOT for an ice-only item is ignored.
    pub fn choose(&mut self, temperature: Temperature) {
        if temperature == Temperature::Hot && self.item.is_ice_only() {
            return;
        }
        self.temperature = Some(temperature);
    }

    /// Resolves the final descriptor: ICE when nothing was chosen, and never HOT
    /// for an ice-only item even if the field was set directly.
    pub fn resolve(&self) -> Drink {
        let temperature = match self.temperature {
            Some(Temperature::Hot) if !self.item.is_ice_only() => Temperature::Hot,
            _ => Temperature::Ice,
        };
        Drink {
            menu_name: self.item.name.clone(),
            temperature,
        }
    }
}
