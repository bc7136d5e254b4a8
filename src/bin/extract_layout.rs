//! Extract Two-Column Layouts
//!
//! Runs the layout pipeline over a JSON page dump and prints normalized
//! snapshot JSON.
//!
//! Usage:
//!   cargo run --release --bin extract_layout -- <dump.json> <pages> [options]
//!
//! Pages: `3`, `1,4,7` or `2-5`.
//!
//! Options:
//!   --strategy NAME     preset (line-boundary, percentage, colored-footer, question-paper)
//!                       or classifier (line-boundary, percentage, colored-background, keyword)
//!   --output FILE       write the JSON to FILE instead of stdout
//!   --questions         print numbered items instead of page layouts
//!   --markdown FILE     also write a Markdown rendering to FILE
//!   --raw               skip snapshot normalization

use std::fs;
use std::path::PathBuf;
use std::process;

use column_oxide::converters::MarkdownConverter;
use column_oxide::pipeline::{ClassifierKind, ColumnLayoutPipeline, LayoutConfig, LayoutExtractor, LayoutPreset};
use column_oxide::tester::{extract_with_implementation, PageSelection};

struct CliConfig {
    input: PathBuf,
    pages: String,
    strategy: Option<String>,
    output: Option<PathBuf>,
    markdown: Option<PathBuf>,
    questions: bool,
    normalize: bool,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut positional = Vec::new();
        let mut strategy = None;
        let mut output = None;
        let mut markdown = None;
        let mut questions = false;
        let mut normalize = true;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--strategy" | "-s" => {
                    i += 1;
                    strategy = Some(args.get(i).ok_or("--strategy needs a value")?.clone());
                },
                "--output" | "-o" => {
                    i += 1;
                    output = Some(PathBuf::from(args.get(i).ok_or("--output needs a value")?));
                },
                "--markdown" => {
                    i += 1;
                    markdown = Some(PathBuf::from(args.get(i).ok_or("--markdown needs a value")?));
                },
                "--questions" | "-q" => {
                    questions = true;
                },
                "--raw" => {
                    normalize = false;
                },
                flag if flag.starts_with("--") => {
                    return Err(format!("Unknown option: {}", flag));
                },
                value => positional.push(value.to_string()),
            }
            i += 1;
        }

        if positional.len() != 2 {
            return Err("expected <dump.json> <pages>".to_string());
        }
        let pages = positional.pop().unwrap_or_default();
        let input = PathBuf::from(positional.pop().unwrap_or_default());

        Ok(Self {
            input,
            pages,
            strategy,
            output,
            markdown,
            questions,
            normalize,
        })
    }

    fn layout_config(&self) -> Result<LayoutConfig, column_oxide::Error> {
        let Some(name) = &self.strategy else {
            return Ok(LayoutConfig::default());
        };
        match name.parse::<LayoutPreset>() {
            Ok(preset) => Ok(preset.create_config()),
            Err(_) => Ok(LayoutConfig::default().with_classifier_kind(name.parse::<ClassifierKind>()?)),
        }
    }
}

fn run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let layout_config = config.layout_config()?;
    let selection: PageSelection = config.pages.parse()?;

    let (json, markdown) = if config.questions {
        let pages = selection.to_pages()?;
        let mut pipeline = ColumnLayoutPipeline::open(&config.input, layout_config.with_items(true))?;
        let mut questions = Vec::new();
        for page in pages {
            match pipeline.items_of_page(page.saturating_sub(1) as usize) {
                Ok(items) => questions.extend(items),
                Err(e) => eprintln!("  ⚠ Page {}: {}", page, e),
            }
        }
        let set = column_oxide::items::QuestionSet::new(pipeline.document_name(), questions);
        pipeline.close()?;

        let markdown = MarkdownConverter::new().convert_questions(&set, "Questions");
        eprintln!("Found {} question(s)", set.total_questions);
        (set.to_json()?, markdown)
    } else {
        let result = extract_with_implementation(&config.input, &selection, &layout_config)?;
        let pages = if config.normalize {
            result.normalized().pages
        } else {
            result.pages.clone()
        };
        let markdown = MarkdownConverter::new().convert_layouts(&pages);
        eprintln!(
            "Extracted {} page(s) with {} ({} failed)",
            result.total_pages,
            result.extractor,
            result.failed_pages()
        );
        (result.to_json(config.normalize)?, markdown)
    };

    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &json)?;
            eprintln!("  ✅ JSON written to: {}", path.display());
        },
        None => println!("{}", json),
    }

    if let Some(path) = &config.markdown {
        fs::write(path, markdown)?;
        eprintln!("  ✅ Markdown written to: {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let config = match CliConfig::from_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: extract_layout <dump.json> <pages> [--strategy NAME] [--output FILE] [--questions] [--markdown FILE] [--raw]");
            process::exit(2);
        },
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
