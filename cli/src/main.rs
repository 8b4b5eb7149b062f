mod client;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client::ApiClient;
use pantry_core::view::{
    video_search_url, MissingIngredientsExport, RecipeDetail, SearchOutcome, SearchState, Theme,
    ThemeStore,
};
use pantry_core::{FindRecipesResponse, RecipeCandidate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Find recipes for the ingredients you have", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes by ingredients, e.g. "chicken, rice"
    Search {
        /// Comma-separated ingredients
        ingredients: String,
        /// Server URL (default: http://localhost:5000)
        #[arg(long, default_value = "http://localhost:5000")]
        server: String,
        /// Show the detail view of result N (1-based)
        #[arg(long, value_name = "N")]
        open: Option<usize>,
        /// Write the missing-ingredient list of result N to a file
        #[arg(long, value_name = "N")]
        export_missing: Option<usize>,
        /// Directory for --export-missing output
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Print a video search link for result N
        #[arg(long, value_name = "N")]
        video: Option<usize>,
        /// Print the raw JSON response instead of rendered cards
        #[arg(long)]
        json: bool,
    },
    /// Show or change the light/dark theme preference
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Show,
    Light,
    Dark,
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            ingredients,
            server,
            open,
            export_missing,
            out_dir,
            video,
            json,
        } => {
            let actions = ResultActions {
                open,
                export_missing,
                out_dir,
                video,
            };
            search(&server, &ingredients, json, &actions).await?;
        }
        Commands::Theme { action } => {
            theme(action)?;
        }
    }

    Ok(())
}

struct ResultActions {
    open: Option<usize>,
    export_missing: Option<usize>,
    out_dir: PathBuf,
    video: Option<usize>,
}

async fn search(server: &str, input: &str, json: bool, actions: &ResultActions) -> Result<()> {
    let mut state = SearchState::default();
    let query = match state.begin(input) {
        Ok(query) => query,
        Err(message) => anyhow::bail!(message),
    };

    if !json {
        eprint!("{}", render::render_state(&state));
    }

    let client = ApiClient::new(server)?;
    let outcome = match client.find_recipes(&query).await {
        Ok(response) => SearchOutcome::Loaded(response),
        Err(e) => SearchOutcome::Failed(format!("{:#}", e)),
    };
    state.finish(outcome);

    if let SearchState::Failed { message } = &state {
        anyhow::bail!(message.clone());
    }

    if json {
        let response = state
            .response()
            .cloned()
            .unwrap_or_else(FindRecipesResponse::empty);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print!("{}", render::render_state(&state));

    let Some(response) = state.response() else {
        return Ok(());
    };

    if let Some(n) = actions.open {
        let recipe = pick(response, n)?;
        println!();
        print!("{}", render::render_detail(&RecipeDetail::from(recipe)));
    }

    if let Some(n) = actions.export_missing {
        let recipe = pick(response, n)?;
        let path = export_missing(recipe, &actions.out_dir)?;
        println!("\nSaved missing ingredients to {}", path.display());
    }

    if let Some(n) = actions.video {
        let recipe = pick(response, n)?;
        println!("\nVideo: {}", video_search_url(&recipe.title));
    }

    Ok(())
}

/// Result N, 1-based as printed on the cards.
fn pick(response: &FindRecipesResponse, n: usize) -> Result<&RecipeCandidate> {
    n.checked_sub(1)
        .and_then(|i| response.recipes.get(i))
        .with_context(|| {
            format!(
                "No result {} (got {} recipes)",
                n,
                response.recipes.len()
            )
        })
}

/// Write the missing-ingredient list as plain text and return its path.
fn export_missing(recipe: &RecipeCandidate, out_dir: &std::path::Path) -> Result<PathBuf> {
    let export = MissingIngredientsExport::for_recipe(recipe);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let path = out_dir.join(export.filename_with_extension("txt"));
    std::fs::write(&path, export.to_text())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), "exported missing ingredients");
    Ok(path)
}

fn theme(action: ThemeAction) -> Result<()> {
    let store = ThemeStore::from_env();
    let prefers_dark = system_prefers_dark(std::env::var("COLORFGBG").ok().as_deref());

    let theme = match action {
        ThemeAction::Show => store.current(prefers_dark)?,
        ThemeAction::Toggle => store.toggle(prefers_dark)?,
        ThemeAction::Light => {
            store.save(Theme::Light)?;
            Theme::Light
        }
        ThemeAction::Dark => {
            store.save(Theme::Dark)?;
            Theme::Dark
        }
    };

    println!("{}", theme.as_str());
    Ok(())
}

/// Guess the terminal's preference from `COLORFGBG` ("fg;bg"). Background
/// colours 0-6 and 8 are the dark ANSI colours.
fn system_prefers_dark(colorfgbg: Option<&str>) -> bool {
    colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::IngredientRef;

    fn response() -> FindRecipesResponse {
        FindRecipesResponse {
            recipes: vec![RecipeCandidate {
                id: 1,
                title: "Mac & Cheese".to_string(),
                image: None,
                used_ingredient_count: 1,
                missed_ingredient_count: 1,
                used_ingredients: vec![IngredientRef::named("macaroni")],
                missed_ingredients: vec![IngredientRef::named("cheddar")],
                likes: 0,
                instructions: "Bake.".to_string(),
                score: 1.0,
            }],
            agentic: None,
        }
    }

    #[test]
    fn test_system_prefers_dark() {
        assert!(system_prefers_dark(Some("15;0")));
        assert!(system_prefers_dark(Some("7;default;8")));
        assert!(!system_prefers_dark(Some("0;15")));
        assert!(!system_prefers_dark(Some("garbage")));
        assert!(!system_prefers_dark(None));
    }

    #[test]
    fn test_pick_is_one_based() {
        let response = response();
        assert_eq!(pick(&response, 1).unwrap().id, 1);
        assert!(pick(&response, 0).is_err());
        assert!(pick(&response, 2).is_err());
    }

    #[test]
    fn test_export_missing_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let response = response();

        let path = export_missing(&response.recipes[0], dir.path()).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Mac_&_Cheese_MissingIngredients.txt"
        );
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("Missing Ingredients for Mac & Cheese"));
        assert!(text.contains("• cheddar"));
    }

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::try_parse_from([
            "pantry",
            "search",
            "chicken, rice",
            "--open",
            "2",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Search {
                ingredients,
                server,
                open,
                json,
                ..
            } => {
                assert_eq!(ingredients, "chicken, rice");
                assert_eq!(server, "http://localhost:5000");
                assert_eq!(open, Some(2));
                assert!(json);
            }
            Commands::Theme { .. } => panic!("expected search"),
        }
    }
}
