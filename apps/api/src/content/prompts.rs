// All LLM prompt templates for the content components.
// Placeholders are `{name}` and are filled by `fill_template`.

/// Article generation prompt.
/// Fill: {title}, {category_name}, {target_word_count}, {description}
pub const ARTICLE_PROMPT_TEMPLATE: &str = r#"Write a comprehensive article about: {title}
Category: {category_name}
Target word count: {target_word_count}

Requirements:
- Write in markdown format
- Include a compelling introduction
- Use appropriate subheadings
- Include a conclusion
- Focus on providing valuable insights
- Be engaging, simple, and informative
- Be humorous when appropriate

Additional context: {description}"#;

/// SEO analysis prompt. The braces of the JSON shape are literal.
/// Fill: {title}, {content}
pub const SEO_PROMPT_TEMPLATE: &str = r#"Analyze this article for SEO optimization:
Title: {title}

Provide feedback in JSON format:
{
    "seo_score": float (1-10),
    "meta_description": "compelling 155-character description",
    "keywords": ["list", "of", "relevant", "keywords"],
    "seo_feedback": "detailed feedback and suggestions"
}

Content to analyze: {content}"#;

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, and braces that do not name a
/// known placeholder are copied through unchanged.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
