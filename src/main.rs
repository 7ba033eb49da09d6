use clap::{
    builder::NonEmptyStringValueParser, crate_description, crate_name, crate_version, Arg,
    ArgAction, ArgMatches, Command,
};
use colored::Colorize;
use extgen::{config::DEFAULT_ICON_SOURCE, ExtensionSpec, GeneratorConfig, Options};

fn cli() -> Command {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("default-locale")
                .long("default-locale")
                .value_name("LOCALE")
                .help("the default locale for the extension"),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .value_name("TEXT")
                .help("the description for the extension"),
        )
        .arg(
            Arg::new("icon-source")
                .long("icon-source")
                .value_name("URL")
                .default_value(DEFAULT_ICON_SOURCE)
                .help("base url of the placeholder image service, icons are fetched from <URL>/<size>"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Preview the generated tree without writing or downloading anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extension-name")
                .value_parser(NonEmptyStringValueParser::new())
                .help("name of the extension, its directory is the lowercased name with spaces turned into hyphens")
                .required(true),
        )
}

fn init_logger(is_verbose: bool) {
    let default_filter = if is_verbose { "debug" } else { "warn" };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if is_verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();
}

// The CLI layer should only parse inputs and forward them to library code.
#[tokio::main]
async fn main() -> miette::Result<()> {
    let matches = cli().get_matches();

    init_logger(matches.get_flag("verbose"));

    handle_generate(&matches).await
}

async fn handle_generate(args: &ArgMatches) -> miette::Result<()> {
    let name = args
        .get_one::<String>("extension-name")
        .expect("extension-name required");

    let options = Options {
        default_locale: args.get_one::<String>("default-locale").cloned(),
        description: args.get_one::<String>("description").cloned(),
    };

    let spec = ExtensionSpec::new(name.as_str(), &options);

    let icon_source = args
        .get_one::<String>("icon-source")
        .expect("icon-source has a default");

    let config = GeneratorConfig::from_current_dir()?.with_icon_source(icon_source.as_str());

    if args.get_flag("dry-run") {
        extgen::preview(&spec, &config)?;

        return Ok(());
    }

    extgen::generate(&spec, &config).await?;

    println!("{}", extgen::SUCCESS_MESSAGE.green());

    Ok(())
}
