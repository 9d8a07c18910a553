use ghactivity::config::Config;
use ghactivity::console::ConsoleTextReport;
use ghactivity::github::{self, client::ActivityClient};

use atty::Stream;
use colored::Colorize;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ghactivity",
    about = "Recent github user activity in your terminal"
)]
struct Opt {
    //positional param
    username: String,
    #[structopt(short, long, default_value = "1", help = "result page to fetch")]
    page: u32,
    #[structopt(
        short = "n",
        long = "number",
        default_value = "30",
        help = "number of events per page"
    )]
    per_page: u32,
    #[structopt(
        short,
        long,
        default_value = "",
        help = "keep only event types matching this case insensitive pattern, e.g. 'push'"
    )]
    filter: String,
    /// Optional config file
    #[structopt(short, long, parse(from_os_str))]
    config_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    let config = match opt.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if atty::is(Stream::Stdout) {
        println!(
            "Fetching activity for '{}' at page {} with {} per page events...",
            opt.username.bold(),
            opt.page,
            opt.per_page
        );
    }

    let client = ActivityClient::new(config.github);
    let events = client.user_events(&opt.username, opt.page, opt.per_page)?;
    let events = github::filter_events(events, &opt.filter);

    if events.is_empty() && !opt.filter.is_empty() {
        println!("  No result for '{}' filter.", opt.filter);
        return Ok(());
    }

    ConsoleTextReport::stdout().render(&events)
}
