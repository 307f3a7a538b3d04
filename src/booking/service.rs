use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Cabelo,
    Unhas,
    Sobrancelhas,
    Pele,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Cabelo,
        ServiceCategory::Unhas,
        ServiceCategory::Sobrancelhas,
        ServiceCategory::Pele,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label_pt().eq_ignore_ascii_case(input))
    }

    pub fn label_pt(self) -> &'static str {
        match self {
            ServiceCategory::Cabelo => "Cabelo",
            ServiceCategory::Unhas => "Unhas",
            ServiceCategory::Sobrancelhas => "Sobrancelhas",
            ServiceCategory::Pele => "Pele",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price: f64,
    pub original_price: f64,
    pub discount_percent: u32,
    pub category: ServiceCategory,
    pub available: bool,
}

impl Service {
    pub fn savings(&self) -> f64 {
        (self.original_price - self.price).max(0.0)
    }

    /// Case-insensitive match on name or description.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salon {
    pub id: String,
    pub name: String,
    pub address: String,
    pub rating: f32,
    pub distance_km: f32,
    pub is_open: bool,
    pub next_available_slot: String,
}

/// Services whose name or description contains `query` and, when given,
/// that belong to `category`. An empty query matches everything.
pub fn filter_services<'a>(
    services: &'a [Service],
    query: &str,
    category: Option<ServiceCategory>,
) -> Vec<&'a Service> {
    services
        .iter()
        .filter(|service| service.matches_query(query))
        .filter(|service| category.is_none_or(|c| service.category == c))
        .collect()
}

pub fn format_price(value: f64) -> String {
    format!("R$ {:.2}", value).replace('.', ",")
}
