//! Search command implementation

use console::Style;

use crate::cli::SearchArgs;
use crate::commands::helpers::Library;
use crate::error::{Result, io_error};
use crate::search::{SearchResult, SearchSession, to_sentence_case};

/// Run search command
pub fn run(root: Option<std::path::PathBuf>, args: SearchArgs) -> Result<()> {
    let library = Library::open(root)?;
    let data = library.catalog()?;

    let mut session = SearchSession::new();
    session.set_term(&data, &args.term);

    if args.json {
        let json = serde_json::to_string_pretty(session.results())
            .map_err(|e| io_error(e.to_string()))?;
        println!("{json}");
        return Ok(());
    }

    if session.results().is_empty() {
        println!("No results found");
        return Ok(());
    }

    println!("Results ({}):", session.results().len());
    println!();
    for result in session.results() {
        display_result(result);
    }
    Ok(())
}

fn display_result(result: &SearchResult) {
    println!(
        "  {}",
        Style::new()
            .bold()
            .yellow()
            .apply_to(to_sentence_case(&result.title))
    );
    println!(
        "    {} / {} / {}",
        result.category,
        to_sentence_case(&result.category_name),
        result.asset_type
    );
    if !result.description.is_empty() {
        println!("    {}", result.description);
    }
    println!("    {}", Style::new().cyan().apply_to(&result.url));
    println!();
}
