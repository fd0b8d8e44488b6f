use serde::{Deserialize, Serialize};

use super::ParseEnumError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            pub const ALL: &'static [$name] = &[$(Self::$variant),+];
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Role {
    User => "user",
    Bot => "bot",
});

str_enum!(Page {
    Chatbot => "Chatbot",
    News => "News",
    ImageRecognition => "Image Recognition",
    SavedResponses => "Saved Responses",
    FoodAdulteration => "Food Adulteration",
});

str_enum!(NewsCategory {
    Recalls => "Recalls",
    Advisories => "Advisories",
    Guidelines => "Guidelines",
    Research => "Research",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips() {
        for role in Role::ALL {
            assert_eq!(&Role::from_str(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn page_round_trips() {
        for page in Page::ALL {
            assert_eq!(&Page::from_str(page.as_str()).unwrap(), page);
        }
    }

    #[test]
    fn page_names_match_sidebar_labels() {
        assert_eq!(Page::ImageRecognition.as_str(), "Image Recognition");
        assert_eq!(Page::FoodAdulteration.as_str(), "Food Adulteration");
        assert_eq!(Page::ALL.len(), 5);
    }

    #[test]
    fn unknown_page_rejected() {
        let err = Page::from_str("Settings").unwrap_err();
        assert_eq!(err.field, "Page");
        assert_eq!(err.value, "Settings");
    }

    #[test]
    fn news_category_round_trips() {
        for category in NewsCategory::ALL {
            assert_eq!(&NewsCategory::from_str(category.as_str()).unwrap(), category);
        }
    }

    #[test]
    fn all_is_not_a_category() {
        // "All" means "no filter" and is handled at the API layer.
        assert!(NewsCategory::from_str("All").is_err());
    }
}
