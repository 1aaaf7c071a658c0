use anyhow::{bail, Context, Result};
use foodplanner::config::Config;
use foodplanner::ingredient_formatter::join_lines;
use foodplanner::sync_plan::{load_ingredient_records, plan_pantry_subtraction, plan_shopping_list_merge};
use log::info;
use std::env;
use std::fs;
use std::path::Path;

const USAGE: &str = "Usage:
  foodplanner parse <ingredients.txt>
  foodplanner format <records.json>
  foodplanner merge <shopping_list.json>
  foodplanner subtract <shopping_list.json> <pantry.json>";

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["parse", path] => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read ingredient text from {path}"))?;
            let ingredients = config.parser().parse_text(&text);
            info!("Parsed {} ingredients from {}", ingredients.len(), path);
            println!("{}", serde_json::to_string_pretty(&ingredients)?);
        }
        ["format", path] => {
            let records = load_ingredient_records(Path::new(path))?;
            println!("{}", join_lines(&records));
        }
        ["merge", list] => {
            let records = load_ingredient_records(Path::new(list))?;
            let plan = plan_shopping_list_merge(&records)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        ["subtract", list, pantry] => {
            let records = load_ingredient_records(Path::new(list))?;
            let stock = load_ingredient_records(Path::new(pantry))?;
            let plan = plan_pantry_subtraction(&records, &stock)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        _ => bail!("{USAGE}"),
    }

    Ok(())
}
