//! Missing-ingredient export document.
//!
//! Turning this into an actual PDF is left to whatever renders it (jsPDF in
//! the browser); this module only fixes the content and the filename.

use crate::types::RecipeCandidate;

/// A printable list of the ingredients a recipe still needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingIngredientsExport {
    pub heading: String,
    pub lines: Vec<String>,
    pub filename: String,
}

impl MissingIngredientsExport {
    pub fn for_recipe(recipe: &RecipeCandidate) -> Self {
        let lines = if recipe.missed_ingredients.is_empty() {
            vec!["None".to_string()]
        } else {
            recipe
                .missed_ingredients
                .iter()
                .map(|i| format!("• {}", i.name))
                .collect()
        };

        Self {
            heading: format!("Missing Ingredients for {}", recipe.title),
            lines,
            filename: format!("{}_MissingIngredients.pdf", underscore_whitespace(&recipe.title)),
        }
    }

    /// The filename with a different extension, e.g. for a plain-text copy.
    pub fn filename_with_extension(&self, extension: &str) -> String {
        match self.filename.rsplit_once('.') {
            Some((stem, _)) => format!("{}.{}", stem, extension),
            None => format!("{}.{}", self.filename, extension),
        }
    }

    /// Heading and lines as plain text.
    pub fn to_text(&self) -> String {
        let mut text = self.heading.clone();
        text.push_str("\n\n");
        text.push_str(&self.lines.join("\n"));
        text.push('\n');
        text
    }
}

/// Replace each run of whitespace with a single underscore.
fn underscore_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
