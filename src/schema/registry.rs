use std::{str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use super::{
    CalendricalSchema, Coptic12Schema, Coptic13Schema, Egyptian12Schema, Egyptian13Schema, GregorianSchema,
    HebrewSchema, InternationalFixedSchema, JulianSchema, PaxSchema, PositivistSchema, TabularIslamicSchema,
    Tropicalia3031Schema, Tropicalia3130Schema, TropicaliaSchema, WorldSchema,
};
use crate::{
    day_number::{DayNumber, epochs},
    prelude::*,
};

/// Identifies one of the built-in schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaId {
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "julian")]
    Julian,
    #[display(fmt = "tropicalia")]
    Tropicalia,
    #[display(fmt = "tropicalia3031")]
    Tropicalia3031,
    #[display(fmt = "tropicalia3130")]
    Tropicalia3130,
    #[display(fmt = "coptic12")]
    Coptic12,
    #[display(fmt = "coptic13")]
    Coptic13,
    #[display(fmt = "egyptian12")]
    Egyptian12,
    #[display(fmt = "egyptian13")]
    Egyptian13,
    #[display(fmt = "tabular_islamic")]
    TabularIslamic,
    #[display(fmt = "hebrew")]
    Hebrew,
    #[display(fmt = "international_fixed")]
    InternationalFixed,
    #[display(fmt = "positivist")]
    Positivist,
    #[display(fmt = "world")]
    World,
    #[display(fmt = "pax")]
    Pax,
}

/// Error returned when parsing an unknown schema name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown schema: {0}")]
pub struct UnknownSchemaError(String);

impl SchemaId {
    pub const ALL: [Self; 15] = [
        Self::Gregorian,
        Self::Julian,
        Self::Tropicalia,
        Self::Tropicalia3031,
        Self::Tropicalia3130,
        Self::Coptic12,
        Self::Coptic13,
        Self::Egyptian12,
        Self::Egyptian13,
        Self::TabularIslamic,
        Self::Hebrew,
        Self::InternationalFixed,
        Self::Positivist,
        Self::World,
        Self::Pax,
    ];

    /// Returns a shared instance of the schema.
    pub fn schema(self) -> Arc<dyn CalendricalSchema> {
        match self {
            Self::Gregorian => Arc::new(GregorianSchema::new()),
            Self::Julian => Arc::new(JulianSchema::new()),
            Self::Tropicalia => Arc::new(TropicaliaSchema::new()),
            Self::Tropicalia3031 => Arc::new(Tropicalia3031Schema::new()),
            Self::Tropicalia3130 => Arc::new(Tropicalia3130Schema::new()),
            Self::Coptic12 => Arc::new(Coptic12Schema::new()),
            Self::Coptic13 => Arc::new(Coptic13Schema::new()),
            Self::Egyptian12 => Arc::new(Egyptian12Schema::new()),
            Self::Egyptian13 => Arc::new(Egyptian13Schema::new()),
            Self::TabularIslamic => Arc::new(TabularIslamicSchema::new()),
            Self::Hebrew => Arc::new(HebrewSchema::new()),
            Self::InternationalFixed => Arc::new(InternationalFixedSchema::new()),
            Self::Positivist => Arc::new(PositivistSchema::new()),
            Self::World => Arc::new(WorldSchema::new()),
            Self::Pax => Arc::new(PaxSchema::new()),
        }
    }

    /// The conventional epoch of the calendar built on this schema.
    pub const fn default_epoch(self) -> DayNumber {
        match self {
            Self::Gregorian
            | Self::Tropicalia
            | Self::Tropicalia3031
            | Self::Tropicalia3130
            | Self::InternationalFixed
            | Self::World => epochs::GREGORIAN,
            Self::Julian => epochs::JULIAN,
            Self::Coptic12 | Self::Coptic13 => epochs::COPTIC,
            Self::Egyptian12 | Self::Egyptian13 => epochs::EGYPTIAN,
            Self::TabularIslamic => epochs::TABULAR_ISLAMIC,
            Self::Hebrew => epochs::HEBREW,
            Self::Positivist => epochs::POSITIVIST,
            Self::Pax => epochs::PAX,
        }
    }
}

impl FromStr for SchemaId {
    type Err = UnknownSchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownSchemaError(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for id in SchemaId::ALL {
            let name = id.to_string();
            assert_eq!(name.parse::<SchemaId>().unwrap(), id);
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{name}\""));
            assert_eq!(serde_json::from_str::<SchemaId>(&json).unwrap(), id);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("  Hebrew ".parse::<SchemaId>().unwrap(), SchemaId::Hebrew);
        let err = "mayan".parse::<SchemaId>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown schema: mayan");
    }

    #[test]
    fn test_every_schema_starts_at_its_epoch() {
        for id in SchemaId::ALL {
            let schema = id.schema();
            assert_eq!(schema.get_start_of_year(1), 0, "{id}");
            assert_eq!(schema.get_date_parts(0), (1, 1, 1), "{id}");
            assert!(schema.supported_years().contains(9999));
        }
    }

    #[test]
    fn test_default_epochs() {
        assert_eq!(SchemaId::Gregorian.default_epoch(), DayNumber::ZERO);
        assert_eq!(SchemaId::Julian.default_epoch(), DayNumber::new(-2));
        assert_eq!(SchemaId::Coptic13.default_epoch(), SchemaId::Coptic12.default_epoch());
    }
}
