//! Render a metadata file as an HTML table.

use metatablelib::{ClassNamer, EscapedMarkdown, HtmlRenderer, Metadata, MetadataTable, SearchQuery};
use std::env;
use std::fs;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "note.json".to_string());
    let query = SearchQuery::from_option(env::args().nth(2).as_deref());

    let input = fs::read_to_string(&path).expect("Failed to read metadata file");
    let metadata = Metadata::from_json_str(&input).expect("Failed to parse metadata");
    let table = MetadataTable::build(Some(&metadata), &query);

    let markdown = EscapedMarkdown;
    let html = HtmlRenderer::new(&markdown, ClassNamer::default()).render(&table, &query);

    println!("{}", html);
    println!();
    println!(
        "{} rows, {} matching",
        table.len(),
        table.rows.iter().filter(|row| row.has_match()).count()
    );
}
