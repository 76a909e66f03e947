use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::info;
use quicli::prelude::*;
use structopt::StructOpt;

use unicode_names_rle::{escape, load_index, range_label, Config, NameIndex};

mod messages;

#[derive(Debug, StructOpt)]
#[structopt(name = "unicode-names", raw(about = "messages::ABOUT_MESSAGE"))]
struct Cli {
    /// TOML config file
    #[structopt(long = "config", short = "c", parse(from_os_str))]
    config: Option<PathBuf>,
    /// Gzipped names dataset
    #[structopt(long = "names", parse(from_os_str))]
    names: Option<PathBuf>,
    /// Gzipped control-character names
    #[structopt(long = "control", parse(from_os_str))]
    control: Option<PathBuf>,
    /// Don't load control-character names
    #[structopt(long = "no-control")]
    no_control: bool,
    /// Fail on malformed datasets instead of truncating them
    #[structopt(long = "strict")]
    strict: bool,
    /// Look up a single hex code point, e.g. U+1F980
    #[structopt(long = "codepoint", short = "u")]
    codepoint: Option<String>,
    /// Print the whole name table
    #[structopt(long = "dump")]
    dump: bool,
    #[structopt(flatten)]
    verbosity: Verbosity,
    /// Text to break down. Prompts for input when empty.
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> CliResult {
    let args = Cli::from_args();
    args.verbosity.setup_env_logger("unicode_names_rle")?;

    let config = config_from(&args)?;
    info!("loading names from {}", config.names.display());
    let mut index = load_index(&config.names, config.control_path(), config.validation())?
        .with_yield_every(config.yield_every);

    let stdout = io::stdout();

    if args.dump {
        let mut entries: Vec<_> = index.full_table_async().await.iter().collect();
        entries.sort_by_key(|&(cp, _)| *cp);
        let mut out = stdout.lock();
        for (cp, name) in entries {
            writeln!(out, "U+{:04X}\t{}", cp, name)?;
        }
        return Ok(());
    }

    if let Some(codepoint) = &args.codepoint {
        match parse_code_point(codepoint) {
            Some(cp) => println!("U+{:04X}: {}", cp, describe(&mut index, cp)),
            None => eprintln!("{}", messages::INVALID_CODEPOINT),
        }
        return Ok(());
    }

    if !args.text.is_empty() {
        for text in &args.text {
            print!("{}", breakdown(&mut index, &escape::unescape_or_raw(text)));
        }
        return Ok(());
    }

    let stdin = io::stdin();
    loop {
        print!("{}", messages::PROMPT);
        stdout.lock().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(|c| c == '\n' || c == '\r');
        print!("{}", breakdown(&mut index, &escape::unescape_or_raw(text)));
    }

    Ok(())
}

fn config_from(args: &Cli) -> Result<Config, Error> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(names) = &args.names {
        config.names = names.clone();
    }
    if let Some(control) = &args.control {
        config.control = Some(control.clone());
        config.no_control = false;
    }
    if args.no_control {
        config.no_control = true;
    }
    if args.strict {
        config.strict = true;
    }
    Ok(config)
}

/// One line per character: the character quoted, its code point and name.
fn breakdown(index: &mut NameIndex, text: &str) -> String {
    let mut msg = String::new();

    for c in text.chars() {
        let quoted = serde_json::to_string(&c.to_string()).unwrap_or_default();
        msg.push_str(&format!(
            "{} (U+{:04X}): {}\n",
            quoted,
            c as u32,
            describe(index, c as u32)
        ));
    }

    msg
}

fn describe(index: &mut NameIndex, cp: u32) -> String {
    match index.get_by_code_point(cp) {
        Some(name) => name.to_string(),
        None => match range_label(cp) {
            Some(label) => format!("<{}>", label),
            None => messages::NONCHARACTER.to_string(),
        },
    }
}

fn parse_code_point(input: &str) -> Option<u32> {
    let input = input.trim();
    let digits = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| input.strip_prefix(*prefix))
        .unwrap_or(input);
    if digits.is_empty() || digits.len() > 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_names_rle::{Run, RunSequence};

    fn index() -> NameIndex {
        let runs = RunSequence::new(vec![
            Run::new(10, 1, "<control>"),
            Run::new(54, 1, "LATIN CAPITAL LETTER A"),
        ]);
        NameIndex::new(runs, vec![vec![(10, "LINE FEED")]])
    }

    #[test]
    fn breakdown_lists_every_character() {
        let mut index = index();
        assert_eq!(
            breakdown(&mut index, "A\n\u{FFFF}\u{4E00}"),
            "\"A\" (U+0041): LATIN CAPITAL LETTER A\n\
             \"\\n\" (U+000A): LINE FEED\n\
             \"\u{FFFF}\" (U+FFFF): Noncharacter\n\
             \"\u{4E00}\" (U+4E00): <CJK Ideograph>\n"
        );
    }

    #[test]
    fn code_point_prefixes() {
        assert_eq!(parse_code_point("U+1F980"), Some(0x1F980));
        assert_eq!(parse_code_point("0x41"), Some(0x41));
        assert_eq!(parse_code_point("e9"), Some(0xE9));
        assert_eq!(parse_code_point("U+"), None);
        assert_eq!(parse_code_point("zz"), None);
        assert_eq!(parse_code_point("+41"), None);
        assert_eq!(parse_code_point("U+-41"), None);
    }
}
