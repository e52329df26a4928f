//! CLI entry point for mkm3u

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use mkm3u::suffix::{AUDIO_SUFFIXES, IMAGE_SUFFIXES, VIDEO_SUFFIXES};
use mkm3u::{
    MediaWalker, NamedSet, OutputSink, Result, ScanConfig, SuffixSet, resolve_suffixes,
    write_playlist,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mkm3u")]
#[command(about = "Create an m3u file of media files in PATH")]
#[command(version)]
#[command(args_override_self = true)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".", value_parser = OsStringValueParser::new().map(PathBuf::from))]
    path: PathBuf,

    /// Recurse into subdirectories of PATH (default)
    #[arg(long, overrides_with = "no_recurse")]
    recurse: bool,

    /// Only scan the top level of PATH
    #[arg(long = "no-recurse", overrides_with = "recurse")]
    no_recurse: bool,

    /// Only include files with suffixes from a comma-separated list, such as ".foo,.bar,.baz".
    /// Takes precedence over --video, --audio and --image
    #[arg(long, value_name = "LIST")]
    suffixes: Option<OsString>,

    /// Only include files with common video suffixes (default set)
    #[arg(long, long_help = named_set_help("video", VIDEO_SUFFIXES))]
    video: bool,

    /// Only include files with common audio suffixes
    #[arg(long, long_help = named_set_help("audio", AUDIO_SUFFIXES))]
    audio: bool,

    /// Only include files with common image suffixes
    #[arg(long, long_help = named_set_help("image", IMAGE_SUFFIXES))]
    image: bool,

    /// Write output to a file at path instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Show debugging information
    #[arg(long, overrides_with = "no_debug")]
    debug: bool,

    /// Hide debugging information (default)
    #[arg(long = "no-debug", overrides_with = "debug")]
    no_debug: bool,
}

fn named_set_help(name: &str, suffixes: &[&str]) -> String {
    format!(
        "Only include files with common {} suffixes. This is the same as \"--suffixes {}\"",
        name,
        suffixes.join(",")
    )
}

/// Named set selectors in the order they appeared in argv.
fn named_selectors(matches: &ArgMatches) -> Vec<NamedSet> {
    let mut selected: Vec<(usize, NamedSet)> = [
        ("video", NamedSet::Video),
        ("audio", NamedSet::Audio),
        ("image", NamedSet::Image),
    ]
    .into_iter()
    .filter(|(id, _)| matches.get_flag(id))
    .filter_map(|(id, set)| matches.index_of(id).map(|i| (i, set)))
    .collect();

    selected.sort_by_key(|(i, _)| *i);
    selected.into_iter().map(|(_, set)| set).collect()
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mkm3u=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// One-line summary of the effective configuration.
fn describe(config: &ScanConfig, output: Option<&Path>) -> String {
    let output_desc = match output {
        None => "on stdout".to_string(),
        Some(path) => format!(
            "at {}",
            std::path::absolute(path)
                .unwrap_or_else(|_| path.to_path_buf())
                .display()
        ),
    };
    format!(
        "Creating an m3u {} of files from {} {}with suffixes {}.",
        output_desc,
        config.root().display(),
        if config.recurse() { "(recursively) " } else { "" },
        config.suffixes()
    )
}

fn run(args: &Args, matches: &ArgMatches) -> Result<()> {
    let custom = args
        .suffixes
        .as_deref()
        .map(SuffixSet::parse_os)
        .transpose()?;
    let suffixes = resolve_suffixes(custom, named_selectors(matches));

    // Validate the root before touching the output so a bad PATH leaves it alone.
    let config = ScanConfig::new(&args.path, suffixes, !args.no_recurse)?;

    let output = args.output.as_deref();
    let sink = OutputSink::open(output)?;

    if args.debug {
        eprintln!("{}", describe(&config, output));
    }

    let sink_name = output.unwrap_or(Path::new("<stdout>"));
    write_playlist(sink, sink_name, MediaWalker::new(&config))?;
    Ok(())
}

fn main() {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging();

    if let Err(e) = run(&args, &matches) {
        eprintln!("mkm3u: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> (Args, ArgMatches) {
        let matches = Args::command()
            .try_get_matches_from(std::iter::once("mkm3u").chain(argv.iter().copied()))
            .unwrap();
        let args = Args::from_arg_matches(&matches).unwrap();
        (args, matches)
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let (args, matches) = parse(&[]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.no_recurse);
        assert!(!args.debug);
        assert!(args.output.is_none());
        assert_eq!(
            resolve_suffixes(None, named_selectors(&matches)),
            NamedSet::Video.to_set()
        );
    }

    #[test]
    fn test_last_named_selector_wins() {
        let (_, matches) = parse(&["--audio", "--image"]);
        assert_eq!(
            named_selectors(&matches),
            vec![NamedSet::Audio, NamedSet::Image]
        );
        let (_, matches) = parse(&["--image", "--video", "--audio"]);
        assert_eq!(
            resolve_suffixes(None, named_selectors(&matches)),
            NamedSet::Audio.to_set()
        );
    }

    #[test]
    fn test_recurse_pair_last_wins() {
        let (args, _) = parse(&["--recurse", "--no-recurse"]);
        assert!(args.no_recurse);
        let (args, _) = parse(&["--no-recurse", "--recurse"]);
        assert!(!args.no_recurse);
    }

    #[test]
    fn test_debug_pair_last_wins() {
        let (args, _) = parse(&["--debug", "--no-debug"]);
        assert!(!args.debug);
        let (args, _) = parse(&["--no-debug", "--debug"]);
        assert!(args.debug);
    }

    #[test]
    fn test_describe() {
        let config = ScanConfig::new(Path::new("."), SuffixSet::parse(".b,.a"), true).unwrap();
        let line = describe(&config, None);
        assert!(line.starts_with("Creating an m3u on stdout of files from /"));
        assert!(line.ends_with("(recursively) with suffixes {.a, .b}."));

        let config = ScanConfig::new(Path::new("."), SuffixSet::parse(".a"), false).unwrap();
        let line = describe(&config, Some(Path::new("out.m3u")));
        assert!(line.contains("at /"));
        assert!(line.contains("out.m3u of files from"));
        assert!(!line.contains("recursively"));
    }
}
