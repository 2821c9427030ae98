use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` with an optional `| default("fallback")` tail
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern is valid")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw config text
///
/// Runs before deserialization so config structs stay plain strings. A
/// `default("…")` tail substitutes when the variable is unset; without one
/// an unset variable is an error. TOML comment lines pass through
/// untouched.
pub fn expand_env(input: &str) -> anyhow::Result<String> {
    let mut output = String::with_capacity(input.len());

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            let mut missing: Option<String> = None;

            let expanded = placeholder().replace_all(line, |captures: &Captures<'_>| {
                let name = &captures[1];
                std::env::var(name).unwrap_or_else(|_| match captures.get(2) {
                    Some(default) => default.as_str().to_owned(),
                    None => {
                        missing.get_or_insert_with(|| name.to_owned());
                        String::new()
                    }
                })
            });

            if let Some(name) = missing {
                anyhow::bail!("environment variable not found: `{name}`");
            }

            output.push_str(&expanded);
        }
        output.push('\n');
    }

    if !input.ends_with('\n') {
        output.pop();
    }

    Ok(output)
}
