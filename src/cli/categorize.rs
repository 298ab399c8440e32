use crate::config::Config;

/// One "name: category" line per ingredient
#[tracing::instrument(skip(config))]
pub fn categorize_command(config: &Config, names: &[String]) -> String {
    let catalog = config.catalog();

    names
        .iter()
        .map(|name| format!("{}: {}\n", name.trim(), catalog.determine_category(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_names() {
        let names = vec![
            "pepper".to_string(),
            "Red Bell Pepper - Medium".to_string(),
            "durian".to_string(),
        ];

        let output = categorize_command(&Config::default(), &names);

        assert_eq!(
            output,
            "pepper: Seasoning/Spices/Sauces\nRed Bell Pepper - Medium: Produce\ndurian: Other\n"
        );
    }
}
