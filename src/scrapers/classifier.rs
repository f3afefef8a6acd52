use crate::models::Classification;

/// Phrases suggesting the host runs their own listings
pub const OWNER_KEYWORDS: &[&str] = &[
    "my home",
    "our home",
    "owner",
    "we own",
    "my villa",
    "my business",
    "local",
    "own and operate",
    "owner-operated",
    "locally owned",
    "family-owned",
    "manager",
    "managing",
    "property management",
    "pm company",
    "real estate",
    "llc",
    "ltd",
    "corp",
    "inc.",
    "business",
    "operator",
];

/// Phrases suggesting a management company.
/// Overlaps with `OWNER_KEYWORDS` ("llc", "real estate", "property management").
pub const COMPANY_KEYWORDS: &[&str] = &[
    "property management",
    "management group",
    "hospitality",
    "vacation rental",
    "short-term rental",
    "airbnb management",
    "llc",
    "real estate",
    "realty",
    "properties",
];

/// Case-insensitive substring match of the bio and host name against both keyword sets.
/// No negation handling: "not an owner" still matches "owner".
pub fn classify_host(bio: &str, host_name: &str) -> Classification {
    let combined = format!("{} {}", bio, host_name).to_lowercase();
    Classification {
        is_property_manager: contains_any(&combined, COMPANY_KEYWORDS),
        is_owner_operator: contains_any(&combined, OWNER_KEYWORDS),
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BusinessType;

    #[test]
    fn test_every_company_keyword_flags_property_manager() {
        for kw in COMPANY_KEYWORDS {
            let bio = format!("Welcome! {} here.", kw.to_uppercase());
            assert!(classify_host(&bio, "").is_property_manager, "keyword {kw}");
        }
    }

    #[test]
    fn test_every_owner_keyword_flags_owner() {
        for kw in OWNER_KEYWORDS {
            let bio = format!("Hi, {} speaking", kw);
            assert!(classify_host(&bio, "").is_owner_operator, "keyword {kw}");
        }
    }

    #[test]
    fn test_overlapping_keywords_set_both_flags() {
        let result = classify_host("Blue Ridge Stays LLC", "");
        assert!(result.is_property_manager);
        assert!(result.is_owner_operator);
        assert_eq!(result.business_type(), Some(BusinessType::PropertyManager));
    }

    #[test]
    fn test_host_name_is_searched() {
        let result = classify_host("", "Coastal Realty");
        assert!(result.is_property_manager);
        assert!(!result.is_owner_operator);
    }

    #[test]
    fn test_owner_only_bio() {
        let result = classify_host("We own this little cabin and love hosting", "Sam");
        assert!(result.is_owner_operator);
        assert!(!result.is_property_manager);
        assert_eq!(result.business_type(), Some(BusinessType::OwnerOperator));
    }

    #[test]
    fn test_no_keywords_rejects_host() {
        let result = classify_host("I love hiking and coffee", "Sam");
        assert_eq!(result, Classification::default());
        assert_eq!(result.business_type(), None);
    }

    #[test]
    fn test_negation_is_not_handled() {
        assert!(classify_host("I am not an owner", "").is_owner_operator);
    }
}
