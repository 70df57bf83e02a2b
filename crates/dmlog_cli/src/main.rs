#![allow(missing_docs)]

use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "dmlog", about = "Structured logging projection for data-model documents")]
struct Cli {
	/// Raise log verbosity; repeat for more detail.
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Project a document and print the result.
	Project(cmd::project::Args),
	/// Report the kind and list strategy of a document root.
	Classify(cmd::classify::Args),
	/// Send a document through the tracing sink.
	Log(cmd::log::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> dmlog::datamodel::Result<()> {
	match command {
		Commands::Project(args) => cmd::project::run(args),
		Commands::Classify(args) => cmd::classify::run(args),
		Commands::Log(args) => cmd::log::run(args),
	}
}

fn init_tracing(verbose: u8) {
	let fallback = match verbose {
		0 => "warn,dmlog::datamodel::sink=info",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_env_filter(filter)
		.init();
}
