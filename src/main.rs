use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::{debug, error, info};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use srpn::{exec, run, stdio, IOPair, State};

///Saturating RPN calculator.
///
///Without expressions or files, lines are read from standard input until end of input.
#[derive(Parser)]
#[clap(version, about)]
struct Opt {
	/// Increase the level of verbosity. Can be used multiple times.
	#[clap(short, long, action = ArgAction::Count)]
	verbose: u8,

	/// Execute an expression as one line of input. Can be used multiple times.
	#[clap(short, long = "expr", value_name = "EXPR")]
	expr: Vec<String>,

	/// Read standard input after all expressions and files
	#[clap(short, long, action = ArgAction::SetTrue)]
	interactive: bool,

	/// Files to execute line by line, in order
	#[clap(value_name = "FILE")]
	files: Vec<PathBuf>,
}

impl Opt {
	const fn log_filter(&self) -> &'static str {
		match self.verbose {
			0 => "warn",
			1 => "srpn=debug,info",
			2..=u8::MAX => "srpn=trace,debug",
		}
	}

	fn filter_layer(&self) -> EnvFilter {
		// Parse log level from env, or infer from args
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_filter()))
	}

	///stdin is implied when no other source is given
	fn reads_stdin(&self) -> bool {
		self.interactive || (self.expr.is_empty() && self.files.is_empty())
	}

	///run every source in order on one shared state, `io.input` standing in for stdin
	fn exec(&self, io: &mut IOPair) -> anyhow::Result<()> {
		let mut st = State::default();

		for expr in &self.expr {
			debug!(%expr, "executing expression");
			exec(&mut st, io.output, expr)?;
		}

		for path in &self.files {
			info!(path = %path.display(), "reading file");
			let file = File::open(path).with_context(|| format!("unable to open file \"{}\"", path.display()))?;
			run(&mut st, &mut IOPair {input: &mut BufReader::new(file), output: io.output})
				.with_context(|| format!("while reading \"{}\"", path.display()))?;
		}

		if self.reads_stdin() {
			debug!("reading standard input");
			run(&mut st, io).context("while reading standard input")?;
		}
		Ok(())
	}
}

fn main() {
	let opt = Opt::parse();

	let fmt_layer = tracing_subscriber::fmt::layer()
		.without_time()
		.with_target(false)
		.with_writer(std::io::stderr);
	tracing_subscriber::registry()
		.with(opt.filter_layer())
		.with(fmt_layer)
		.init();

	if let Err(e) = opt.exec(&mut stdio!()) {
		error!("{:#}", e);
		exit(1);
	}
}

#[cfg(test)]
mod tests {
	use std::io::{Cursor, Write};

	use super::*;

	fn session(args: &[&str], stdin: &str) -> anyhow::Result<String> {
		let opt = Opt::parse_from(std::iter::once("srpn").chain(args.iter().copied()));
		let mut input = Cursor::new(stdin);
		let mut output = Vec::new();
		opt.exec(&mut IOPair {input: &mut input, output: &mut output})?;
		Ok(String::from_utf8(output)?)
	}

	#[test]
	fn expressions_share_one_state() {
		assert_eq!(session(&["-e", "r", "-e", "r ="], "").unwrap(), "846930886\n");
		assert_eq!(session(&["-e", "9", "-e", "5 - ="], "").unwrap(), "4\n");
	}

	#[test]
	fn stdin_only_without_other_sources_or_with_flag() {
		assert!(Opt::parse_from(["srpn"]).reads_stdin());
		assert!(!Opt::parse_from(["srpn", "-e", "1"]).reads_stdin());
		assert!(!Opt::parse_from(["srpn", "prog.rpn"]).reads_stdin());
		assert!(Opt::parse_from(["srpn", "-i", "-e", "1"]).reads_stdin());
		assert!(Opt::parse_from(["srpn", "--interactive", "prog.rpn"]).reads_stdin());

		assert_eq!(session(&[], "1 2 + =\n").unwrap(), "3\n");
		assert_eq!(session(&["-e", "1 ="], "2 =\n").unwrap(), "1\n");
		assert_eq!(session(&["-i", "-e", "r"], "r =\n").unwrap(), "846930886\n");
	}

	#[test]
	fn state_carries_from_files_to_stdin() {
		let path = std::env::temp_dir().join(format!("srpn-session-{}.rpn", std::process::id()));
		let mut file = File::create(&path).unwrap();
		writeln!(file, "r\n40 2").unwrap();
		drop(file);

		let out = session(&["-i", "-e", "1", path.to_str().unwrap()], "+ d\n");
		std::fs::remove_file(&path).unwrap();
		assert_eq!(out.unwrap(), "1\n1804289383\n42\n");
	}

	#[test]
	fn missing_file_is_an_error() {
		let err = session(&["/nonexistent/srpn/input.rpn"], "").unwrap_err();
		assert!(err.to_string().contains("unable to open file"));
	}
}
