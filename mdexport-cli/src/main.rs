// Command-line interface for mdexport
//
// This binary converts markdown files to the formats registered in the
// mdexport library (plain text, RTF, ODT, HTML, optionally PDF) and can
// print the preview HTML for a file.
//
// Converting:
//
// The input is always markdown; only the target format varies.
// Usage:
//  mdexport <input> --to <format> [--output-dir <dir>]   - Convert (default command)
//  mdexport convert <input> --to <format> [...]          - Same as above (explicit)
//  mdexport preview <input>                              - Print the preview HTML
//  mdexport tree <input>                                 - Print the document tree as JSON
//  mdexport --list-formats                               - List registered formats
//
// Without --output-dir, text formats go to stdout and binary formats
// (odt, pdf) are refused. With it, the file is written under the name
// derived from the document's first line.

use clap::{Arg, ArgAction, Command, ValueHint};
use mdexport::{
    publish, Converter, FormatRegistry, PublishArtifact, PublishOutcome, PublishSpec,
    SerializedDocument,
};
use mdexport_config::{Loader, MdexportConfig};
use std::fs;

fn build_cli() -> Command {
    Command::new("mdexport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown files to text, RTF, ODT, HTML and PDF")
        .long_about(
            "mdexport converts a markdown file into several document formats.\n\n\
            Commands:\n  \
            - convert: Convert a markdown file to a target format (default)\n  \
            - preview: Print the rendered preview HTML\n  \
            - tree:    Print the parsed document tree as JSON\n\n\
            Examples:\n  \
            mdexport notes.md --to txt                  # Plain text to stdout\n  \
            mdexport notes.md --to rtf -o exports/      # Write exports/<title>.rtf\n  \
            mdexport notes.md --to odt -o .             # ODT next to the input\n  \
            mdexport preview notes.md                   # Preview HTML to stdout",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List registered output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdexport.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a markdown file to a target format (default command)")
                .long_about(
                    "Convert a markdown file to one of the registered formats.\n\n\
                    Supported formats:\n  \
                    - txt:  Plain text with typographic structure\n  \
                    - rtf:  Rich Text Format\n  \
                    - odt:  OpenDocument Text\n  \
                    - html: Standalone HTML document\n  \
                    - pdf:  PDF via a headless browser (requires Chrome)\n\n\
                    Text formats print to stdout by default. Use --output-dir to\n\
                    write a file named after the document's first line instead.\n\n\
                    Examples:\n  \
                    mdexport convert notes.md --to txt\n  \
                    mdexport convert notes.md --to odt --output-dir exports\n  \
                    mdexport notes.md --to rtf                 # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to convert.default_format)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .short('o')
                        .help("Directory to write the converted file into")
                        .long_help(
                            "Directory to write the converted file into.\n\n\
                            The filename is derived from the document's first line.\n\
                            Without this option, text formats print to stdout and\n\
                            binary formats are refused.",
                        )
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Print the rendered preview HTML for a markdown file")
                .arg(
                    Arg::new("input")
                        .help("Input markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the parsed document tree as JSON")
                .long_about(
                    "Parse a markdown file and print the intermediate document\n\
                    tree that every format projects from, as JSON. Useful for\n\
                    debugging why a format renders a construct the way it does.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // If the first argument looks like a file rather than a subcommand,
    // inject "convert" so `mdexport notes.md --to txt` works.
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "preview"
                && args[1] != "tree"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches
                .get_one::<String>("to")
                .map(|s| s.as_str())
                .unwrap_or(&config.convert.default_format);
            let output_dir = sub_matches.get_one::<String>("output-dir").map(|s| s.as_str());
            handle_convert_command(input, to, output_dir);
        }
        Some(("preview", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_preview_command(input);
        }
        Some(("tree", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_tree_command(input);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn handle_convert_command(input: &str, to: &str, output_dir: Option<&str>) {
    let source = read_source(input);
    let converter = Converter::new();

    match output_dir {
        Some(dir) => {
            let spec = PublishSpec::new(&source, to).with_output_dir(dir);
            match publish(&converter, spec) {
                Ok(PublishOutcome::Published(PublishArtifact::File(path))) => {
                    eprintln!("Wrote {}", path.display());
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            // Without an output directory, only text formats make sense.
            let registry = FormatRegistry::with_defaults();
            let doc = match mdexport::parse(&source) {
                Ok(doc) => doc,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            match registry.serialize(&doc, to) {
                Ok(SerializedDocument::Text(text)) => print!("{text}"),
                Ok(SerializedDocument::Binary(_)) => {
                    eprintln!(
                        "Binary formats (like ODT and PDF) require an output directory. \
                        Use -o <dir>."
                    );
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn handle_preview_command(input: &str) {
    let source = read_source(input);
    let mut preview = mdexport::PreviewController::new();
    preview.update(&source);
    print!("{}", preview.current());
}

fn handle_tree_command(input: &str) {
    let source = read_source(input);
    let doc = match mdexport::parse(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    match serde_json::to_string_pretty(&doc.tree) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn handle_list_formats_command() {
    println!("Registered formats:");
    let registry = FormatRegistry::with_defaults();
    for name in registry.list_formats() {
        println!("  {name}");
    }
}

fn read_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>) -> MdexportConfig {
    let loader = Loader::new().with_optional_file("mdexport.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
