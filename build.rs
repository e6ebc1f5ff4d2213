use std::path::Path;

fn main() {
    let registry_path = Path::new("registries/patterns.json");
    validate_registry_file(registry_path);
    set_build_dependencies();
}

fn validate_registry_file(registry_path: &Path) {
    // Ensure registry exists at build time
    assert!(
        registry_path.exists(),
        "\n\nREGISTRY BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the registry file before building.\n",
        registry_path.display()
    );

    // Read registry file
    let registry_contents = std::fs::read_to_string(registry_path).unwrap_or_else(|e| {
        panic!(
            "\n\nREGISTRY BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            registry_path.display()
        );
    });

    // Parse and validate JSON
    let registry: serde_json::Value = serde_json::from_str(&registry_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nREGISTRY BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            registry_path.display()
        );
    });

    validate_registry_structure(&registry);
}

fn validate_registry_structure(registry: &serde_json::Value) {
    assert!(
        registry.get("version").and_then(|v| v.as_str()).is_some(),
        "\n\nREGISTRY BUILD ERROR: Missing 'version' string field\n"
    );

    let rules = registry
        .get("rules")
        .and_then(|v| v.as_array())
        .unwrap_or_else(|| {
            panic!("\n\nREGISTRY BUILD ERROR: Missing 'rules' array field\n");
        });

    assert!(
        !rules.is_empty(),
        "\n\nREGISTRY BUILD ERROR: 'rules' array is empty\n"
    );

    for (index, rule) in rules.iter().enumerate() {
        validate_rule_fields(rule, index);
    }
}

fn validate_rule_fields(rule: &serde_json::Value, index: usize) {
    assert!(
        rule.get("manufacturer").is_some(),
        "\n\nREGISTRY BUILD ERROR: Rule {index} missing 'manufacturer' field\n"
    );

    assert!(
        rule.get("category").and_then(|v| v.as_str()).is_some(),
        "\n\nREGISTRY BUILD ERROR: Rule {index} missing 'category' field\n"
    );

    let pattern = rule
        .get("pattern")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!("\n\nREGISTRY BUILD ERROR: Rule {index} missing 'pattern' field\n");
        });

    // Every extraction pattern must capture at least a series
    assert!(
        pattern.contains("(?P<series>"),
        "\n\nREGISTRY BUILD ERROR: Rule {index} pattern has no 'series' capture group\n\
         Pattern: {pattern}\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the registry changes
    println!("cargo:rerun-if-changed=registries/patterns.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
