// crates/core/src/entity.rs
//! The entity catalogue: field order, formatting rules, default file names
//! and date-time policy for each seedable entity kind.
//!
//! One `EntitySpec` here replaces one of the legacy per-entity scripts;
//! the field lists and default file names are exactly theirs.

use crate::error::UnknownEntity;
use crate::format::{DateTimePolicy, SemanticType};
use crate::generator::FieldSpec;
use crate::template::Template;
use std::fmt;
use std::str::FromStr;

/// The six entity kinds the tourism database seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    Image,
    Location,
    Review,
    Schedule,
    Tour,
}

/// Everything needed to generate one entity kind's seed block.
#[derive(Debug)]
pub struct EntitySpec {
    /// C# entity type name, as it appears in `Entity<...>()` and `new ...`.
    pub name: &'static str,
    /// Emitted columns, in output order.
    pub fields: &'static [FieldSpec],
    /// How malformed date-and-time values are handled for this entity.
    pub datetime_policy: DateTimePolicy,
    /// Fixture file name the legacy script read.
    pub input_file: &'static str,
    /// Output file name the legacy script wrote.
    pub output_file: &'static str,
    /// Default key field for duplicate scanning.
    pub key_field: &'static str,
}

impl EntitySpec {
    pub fn template(&self) -> Template {
        Template::has_data(self.name)
    }
}

static CATEGORY: EntitySpec = EntitySpec {
    name: "Category",
    fields: &[
        FieldSpec::new("Id", SemanticType::Text),
        FieldSpec::new("Name", SemanticType::Text),
        FieldSpec::new("Description", SemanticType::Text),
    ],
    datetime_policy: DateTimePolicy::Strict,
    input_file: "cate.json",
    output_file: "category_migration_code.txt",
    key_field: "Id",
};

static IMAGE: EntitySpec = EntitySpec {
    name: "Image",
    fields: &[
        FieldSpec::new("Id", SemanticType::Text),
        FieldSpec::new("Tour_Id", SemanticType::Text),
        FieldSpec::new("Url", SemanticType::Text),
    ],
    datetime_policy: DateTimePolicy::Strict,
    input_file: "image_data.json",
    output_file: "image_migration.txt",
    key_field: "Id",
};

static LOCATION: EntitySpec = EntitySpec {
    name: "Location",
    fields: &[
        FieldSpec::new("Id", SemanticType::Text),
        FieldSpec::new("Name", SemanticType::Text),
    ],
    datetime_policy: DateTimePolicy::Strict,
    input_file: "loc.json",
    output_file: "location_migration_code.txt",
    key_field: "Id",
};

static REVIEW: EntitySpec = EntitySpec {
    name: "Review",
    fields: &[
        FieldSpec::new("Id", SemanticType::Text),
        FieldSpec::new("Tour_Id", SemanticType::Text),
        // The review fixture carries no customer column; the source data
        // pins every review to one seeded customer.
        FieldSpec::constant("Customer_Id", "CUS001", SemanticType::Text),
        FieldSpec::new("Rating", SemanticType::Integer),
        FieldSpec::new("Comment", SemanticType::VerbatimText),
        FieldSpec::new("Create_at", SemanticType::DateTime),
    ],
    datetime_policy: DateTimePolicy::Strict,
    input_file: "review.json",
    output_file: "review_migration_code.txt",
    key_field: "Id",
};

static SCHEDULE: EntitySpec = EntitySpec {
    name: "Schedule",
    fields: &[
        FieldSpec::new("Id", SemanticType::Text),
        FieldSpec::new("Start_date", SemanticType::Date),
        FieldSpec::new("Available", SemanticType::Integer),
        FieldSpec::new("Status", SemanticType::Raw),
        FieldSpec::new("Adult_price", SemanticType::Decimal),
        FieldSpec::new("Children_price", SemanticType::Decimal),
        FieldSpec::new("Discount", SemanticType::Percent),
        FieldSpec::new("Create_at", SemanticType::DateTime),
        FieldSpec::new("Tour_Id", SemanticType::Text),
    ],
    datetime_policy: DateTimePolicy::Strict,
    input_file: "schedule.json",
    output_file: "schedule_migration.txt",
    key_field: "Id",
};

static TOUR: EntitySpec = EntitySpec {
    name: "Tour",
    fields: &[
        FieldSpec::new("Id", SemanticType::Text),
        FieldSpec::new("Name", SemanticType::Text),
        FieldSpec::new("Short_description", SemanticType::Text),
        FieldSpec::new("Detail_description", SemanticType::VerbatimText),
        FieldSpec::new("Schedule_description", SemanticType::VerbatimText),
        FieldSpec::new("Category_Id", SemanticType::Text),
        FieldSpec::new("Duration", SemanticType::Text),
        FieldSpec::new("Price", SemanticType::Decimal),
        FieldSpec::new("Max_capacity", SemanticType::Integer),
        // The tour fixture spells this field with a lowercase d.
        FieldSpec::renamed("Location_Id", "Location_id", SemanticType::Text),
        FieldSpec::new("Create_at", SemanticType::DateTime),
        FieldSpec::new("Update_at", SemanticType::DateTime),
    ],
    datetime_policy: DateTimePolicy::NullOnError,
    input_file: "tour.json",
    output_file: "tour_migration_code.txt",
    key_field: "Id",
};

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Category,
        EntityKind::Image,
        EntityKind::Location,
        EntityKind::Review,
        EntityKind::Schedule,
        EntityKind::Tour,
    ];

    pub fn spec(self) -> &'static EntitySpec {
        match self {
            EntityKind::Category => &CATEGORY,
            EntityKind::Image => &IMAGE,
            EntityKind::Location => &LOCATION,
            EntityKind::Review => &REVIEW,
            EntityKind::Schedule => &SCHEDULE,
            EntityKind::Tour => &TOUR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::Image => "image",
            EntityKind::Location => "location",
            EntityKind::Review => "review",
            EntityKind::Schedule => "schedule",
            EntityKind::Tour => "tour",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownEntity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "category" => Ok(EntityKind::Category),
            "image" => Ok(EntityKind::Image),
            "location" => Ok(EntityKind::Location),
            "review" => Ok(EntityKind::Review),
            "schedule" => Ok(EntityKind::Schedule),
            "tour" => Ok(EntityKind::Tour),
            other => Err(UnknownEntity(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
        assert_eq!("Tour".parse::<EntityKind>().unwrap(), EntityKind::Tour);
        assert!("hotel".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_tour_uses_null_substitution_others_strict() {
        assert_eq!(
            EntityKind::Tour.spec().datetime_policy,
            DateTimePolicy::NullOnError
        );
        for kind in EntityKind::ALL {
            if kind != EntityKind::Tour {
                assert_eq!(kind.spec().datetime_policy, DateTimePolicy::Strict);
            }
        }
    }

    #[test]
    fn test_field_counts_match_original_scripts() {
        assert_eq!(EntityKind::Category.spec().fields.len(), 3);
        assert_eq!(EntityKind::Image.spec().fields.len(), 3);
        assert_eq!(EntityKind::Location.spec().fields.len(), 2);
        assert_eq!(EntityKind::Review.spec().fields.len(), 6);
        assert_eq!(EntityKind::Schedule.spec().fields.len(), 9);
        assert_eq!(EntityKind::Tour.spec().fields.len(), 12);
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(EntityKind::Category.spec().input_file, "cate.json");
        assert_eq!(EntityKind::Image.spec().input_file, "image_data.json");
        assert_eq!(
            EntityKind::Tour.spec().output_file,
            "tour_migration_code.txt"
        );
    }
}
