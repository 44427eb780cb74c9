use std::io::{Write, BufRead};
use tracing::{debug, trace};

pub mod arith;
pub mod error;
pub mod random;
pub mod stack;
pub mod token;

pub use error::CalcError;
pub use random::RandomSequence;
pub use stack::{StackMachine, Outcome, CAPACITY};
pub use token::{Token, Operator, Tokenizer};

///printed for `rachid`
pub const EASTER_EGG: &str = "Rachid is the best unit lecturer.";

///Bundled state storage for one calculator session.
///
///Create one per process: the random sequence must not restart between lines or input sources.
#[derive(Default)]
pub struct State {
	///operand stack
	pub machine: StackMachine,
	///source for `r`
	pub random: RandomSequence
}
impl State {
	///replace random sequence with custom one
	pub fn custom_random(mut self, random: RandomSequence) -> Self {
		self.random = random;
		self
	}
}

///Bundle of generic IO streams, for brevity.
pub struct IOPair<'a> {
	pub input: &'a mut dyn BufRead,
	pub output: &'a mut dyn Write
}
#[macro_export]
///Default IO pair using stdin, stdout
macro_rules! stdio {
	() => {
		::srpn::IOPair {
			input: &mut ::std::io::stdin().lock(),
			output: &mut ::std::io::stdout().lock()
		}
	}
}

///Executes one line of input on given state.
///
///Results and all calculator messages (overflow, underflow, unrecognised input, ...) go to `output`,
///in the order the tokens producing them appear on the line.
///
///Terminates with `Err` only if a write fails.
pub fn exec(st: &mut State, output: &mut dyn Write, line: &str) -> std::io::Result<()> {
	let State {machine, random} = st;
	for token in Tokenizer::new(line, random) {
		trace!(?token, "executing");
		match machine.apply(token) {
			Ok(Outcome::Quiet) => {},
			Ok(Outcome::Top(v)) => {
				writeln!(output, "{v}")?;
			},
			Ok(Outcome::Listing(values)) => {
				for v in values {
					writeln!(output, "{v}")?;
				}
			},
			Ok(Outcome::Easter) => {
				writeln!(output, "{EASTER_EGG}")?;
			},
			Err(err) => {
				debug!(?token, %err, "recovered");
				writeln!(output, "{err}")?;
			}
		}
	}
	output.flush()
}

///Reads lines from `io.input` and executes each until end of input.
///
///Line terminators (`\n` or `\r\n`) are stripped before execution.
///Invalid UTF-8 is decoded with replacement characters, which then show up as unrecognised input.
///Terminates with `Err` if a read or write fails.
pub fn run(st: &mut State, io: &mut IOPair) -> std::io::Result<()> {
	let mut buf = Vec::new();
	let mut count = 0_usize;
	loop {
		buf.clear();
		if io.input.read_until(b'\n', &mut buf)? == 0 {
			debug!(lines = count, "end of input");
			return Ok(());
		}
		count += 1;
		let line = String::from_utf8_lossy(&buf);
		let cmds = line.strip_suffix('\n').map_or(&*line, |l| l.strip_suffix('\r').unwrap_or(l));
		exec(st, io.output, cmds)?;
	}
}
