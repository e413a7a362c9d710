use serde::{Deserialize, Serialize};
use strum::Display;

/// The free-text filter inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum FilterField {
    Name,
    Country,
    Industry,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Name, FilterField::Country, FilterField::Industry];

    /// Query parameter name sent to the API
    pub fn param(&self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Country => "country",
            FilterField::Industry => "industry",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FilterField::Name => "Search company...",
            FilterField::Country => "Filter by location",
            FilterField::Industry => "Filter by industry",
        }
    }

    pub fn next(&self) -> FilterField {
        match self {
            FilterField::Name => FilterField::Country,
            FilterField::Country => FilterField::Industry,
            FilterField::Industry => FilterField::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

impl SortOrder {
    pub fn cycle(&self) -> SortOrder {
        match self {
            SortOrder::None => SortOrder::Asc,
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::None => "Sort by name",
            SortOrder::Asc => "A → Z",
            SortOrder::Desc => "Z → A",
        }
    }
}

/// The query-relevant part of the filters. Equality on this type decides whether a
/// settled change starts a new filter epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyFilter {
    pub name: String,
    pub country: String,
    pub industry: String,
}

impl CompanyFilter {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Country => &self.country,
            FilterField::Industry => &self.industry,
        }
    }

    /// Non-empty filters in API parameter order
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> {
        FilterField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
            .filter(|(_, value)| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

/// Raw values of every filter input, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub name: String,
    pub country: String,
    pub industry: String,
    pub sort_order: SortOrder,
}

impl FilterState {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Country => &self.country,
            FilterField::Industry => &self.industry,
        }
    }

    /// Snapshot with one field replaced
    pub fn with_field(&self, field: FilterField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            FilterField::Name => &mut next.name,
            FilterField::Country => &mut next.country,
            FilterField::Industry => &mut next.industry,
        };
        *slot = value.into();
        next
    }

    pub fn with_sort_order(&self, sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..self.clone()
        }
    }

    pub fn query_filter(&self) -> CompanyFilter {
        CompanyFilter {
            name: self.name.clone(),
            country: self.country.clone(),
            industry: self.industry.clone(),
        }
    }
}
