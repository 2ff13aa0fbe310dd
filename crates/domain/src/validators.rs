pub fn validate_pattern_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Pattern name cannot be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Pattern name cannot exceed 100 characters".to_string());
    }
    Ok(())
}

pub fn validate_pattern_text(name: &str, pattern: &str) -> Result<(), String> {
    if pattern.is_empty() {
        return Err(format!("Pattern '{name}' cannot be empty"));
    }
    Ok(())
}
