//! json2xml - convert JSON to XML from the command line.
//!
//! Input comes from, in priority order: `--url`, `--string`, the positional
//! file argument (`-` for stdin), or stdin when it is not a terminal.

use clap::{ArgAction, Parser};
use json2xml::read::{read_from_json_file, read_from_string};
use json2xml::{Json2Xml, Value};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

const EXAMPLES: &str = "\
Examples:
  json2xml data.json
  json2xml -w root data.json
  json2xml -u https://api.example.com/data.json
  json2xml -s '{\"name\": \"John\", \"age\": 30}'
  cat data.json | json2xml -
  json2xml -o output.xml data.json
  json2xml -x data.json
  json2xml -p=false -t=false data.json";

#[derive(Parser, Debug)]
#[command(name = "json2xml")]
#[command(about = "Convert JSON to XML")]
#[command(version, disable_version_flag = true, after_help = EXAMPLES)]
struct Cli {
    /// JSON file to read (use - for stdin)
    input: Option<PathBuf>,

    /// Read JSON from URL
    #[arg(short, long)]
    url: Option<String>,

    /// Read JSON from string
    #[arg(short, long)]
    string: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrapper element name
    #[arg(short, long, default_value = "all")]
    wrapper: String,

    /// Include root element
    #[arg(short, long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    root: bool,

    /// Pretty print output
    #[arg(short, long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pretty: bool,

    /// Include type attributes
    #[arg(short = 't', long = "type", action = ArgAction::Set, default_value_t = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    attr_type: bool,

    /// Wrap list items in <item> elements
    #[arg(short, long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    item_wrap: bool,

    /// Use XPath 3.1 json-to-xml format
    #[arg(short = 'x', long)]
    xpath: bool,

    /// Wrap string values in CDATA sections
    #[arg(short, long)]
    cdata: bool,

    /// Repeat headers for each list item
    #[arg(short, long)]
    list_headers: bool,

    /// Show version information
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let data = match read_input(&cli) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let converter = Json2Xml::new(data)
        .with_wrapper(cli.wrapper.clone())
        .with_root(cli.root)
        .with_pretty(cli.pretty)
        .with_attr_type(cli.attr_type)
        .with_item_wrap(cli.item_wrap)
        .with_xpath_format(cli.xpath)
        .with_cdata(cli.cdata)
        .with_list_headers(cli.list_headers);

    let xml = match converter.to_xml() {
        Ok(xml) => xml.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error converting to XML: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_output(&cli, &xml) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_input(cli: &Cli) -> json2xml::Result<Value> {
    if let Some(url) = cli.url.as_deref().filter(|u| !u.is_empty()) {
        return read_url(url);
    }

    if let Some(json) = cli.string.as_deref().filter(|s| !s.is_empty()) {
        tracing::debug!("reading JSON from --string");
        return read_from_string(json);
    }

    if let Some(path) = &cli.input {
        if path.as_os_str() == "-" {
            return read_stdin();
        }
        return read_from_json_file(path);
    }

    if !std::io::stdin().is_terminal() {
        return read_stdin();
    }

    Err(json2xml::Error::custom("no input provided. Use -h for help"))
}

#[cfg(feature = "http")]
fn read_url(url: &str) -> json2xml::Result<Value> {
    json2xml::read::read_from_url(url, &[])
}

#[cfg(not(feature = "http"))]
fn read_url(_url: &str) -> json2xml::Result<Value> {
    Err(json2xml::Error::fetch("built without the `http` feature"))
}

fn read_stdin() -> json2xml::Result<Value> {
    tracing::debug!("reading JSON from stdin");
    let mut data = String::new();
    std::io::stdin()
        .read_to_string(&mut data)
        .map_err(|e| json2xml::Error::io(&format!("failed to read from stdin: {}", e)))?;

    let json = data.trim();
    if json.is_empty() {
        return Err(json2xml::Error::parse("empty input"));
    }
    read_from_string(json)
}

fn write_output(cli: &Cli, xml: &str) -> std::io::Result<()> {
    match &cli.output {
        Some(path) => {
            tracing::debug!(path = %path.display(), bytes = xml.len(), "writing XML file");
            std::fs::write(path, xml)
        }
        None => {
            println!("{}", xml);
            Ok(())
        }
    }
}
