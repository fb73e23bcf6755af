use clap::{Parser, Subcommand};
use restyle_core::{output, BrowserVersion, Page};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "restyle", about = "Resolve computed CSS values the way a given browser would")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an HTML file and print resolved property values
    Resolve {
        /// The HTML file to parse (use - for stdin)
        file: String,

        /// Built-in browser profile: chrome, firefox, edge, ie
        #[arg(long, default_value = "chrome")]
        browser: String,

        /// JSON browser profile; overrides --browser
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Only report elements matching this selector list
        #[arg(long, default_value = "*")]
        select: String,

        /// Property to resolve (repeatable)
        #[arg(long = "property", short = 'p', default_values_t = default_properties())]
        properties: Vec<String>,

        /// Also convert each value to pixels
        #[arg(long)]
        pixels: bool,

        /// Output as JSON instead of compact format
        #[arg(long)]
        json: bool,
    },
    /// Convert a single length value to pixels
    Pixels {
        /// A length such as 2em or 10pt
        value: String,
    },
}

fn default_properties() -> Vec<String> {
    ["display", "color", "font-size", "width", "height"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            file,
            browser,
            profile,
            select,
            properties,
            pixels,
            json,
        } => {
            if let Err(e) = resolve(&file, &browser, profile, &select, &properties, pixels, json) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Pixels { value } => {
            println!("{}", restyle_core::css::pixel_value(&value));
        }
    }
}

fn resolve(
    file: &str,
    browser: &str,
    profile: Option<PathBuf>,
    select: &str,
    properties: &[String],
    pixels: bool,
    as_json: bool,
) -> Result<(), restyle_core::Error> {
    let browser = match profile {
        Some(path) => BrowserVersion::from_file(&path)?,
        None => BrowserVersion::from_name(browser)?,
    };
    let html = if file == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)?
    };
    log::info!("resolving {} properties for {}", properties.len(), browser.nickname);

    let page = Page::parse(&html, browser);
    let nodes = page.query_selector_all(select);
    let snapshot = output::generate_snapshot(&page, &nodes, properties, pixels);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("browser: {}", snapshot.browser);
        println!("vp: {}x{}", snapshot.vp[0], snapshot.vp[1]);
        println!("els: {}", snapshot.els.len());
        println!("---");
        print!("{}", output::to_compact_string(&snapshot));
    }
    Ok(())
}
