use phf::phf_map;

use crate::arith::saturate;
use crate::random::RandomSequence;

///binary arithmetic operators
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
	Add,
	Sub,
	Mul,
	Div,
	Rem,
	Pow
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
	///decoded literal, already saturated
	Number(i32),
	///value drawn from the random sequence by `r`
	Random(i32),
	Operator(Operator),
	///`d`
	Display,
	///`=`
	Evaluate,
	///`rachid`
	Easter,
	Unrecognized(char)
}

///single-character commands
static SYMBOLS: phf::Map<char, Token> = phf_map! {
	'+' => Token::Operator(Operator::Add),
	'-' => Token::Operator(Operator::Sub),
	'*' => Token::Operator(Operator::Mul),
	'/' => Token::Operator(Operator::Div),
	'%' => Token::Operator(Operator::Rem),
	'^' => Token::Operator(Operator::Pow),
	'd' => Token::Display,
	'=' => Token::Evaluate,
};

///what has to follow `r` to trigger the easter egg instead of a random number
const EASTER_TAIL: &str = "achid";

///upper bound on accumulated literal magnitudes, beyond both i32 bounds
const MAGNITUDE_CAP: i64 = 1 << 32;

///Splits one line into tokens, left to right.
///
///Lazy: a value is only drawn from the random sequence when the `r` producing it is reached.
pub struct Tokenizer<'a, 'r> {
	///unscanned remainder of the line
	rest: &'a str,
	random: &'r mut RandomSequence
}
impl<'a, 'r> Tokenizer<'a, 'r> {
	pub fn new(line: &'a str, random: &'r mut RandomSequence) -> Self {
		Self {rest: line, random}
	}
}
impl Iterator for Tokenizer<'_, '_> {
	type Item = Token;

	fn next(&mut self) -> Option<Token> {
		loop {
			let mut chars = self.rest.chars();
			let c = chars.next()?;
			let after = chars.as_str();

			//literal, a '-' directly before a digit is a sign rather than subtraction
			if c.is_ascii_digit() || (c == '-' && after.starts_with(|n: char| n.is_ascii_digit())) {
				let end = 1 + after.find(|n: char| !n.is_ascii_digit()).unwrap_or(after.len());
				let (literal, rest) = self.rest.split_at(end);
				self.rest = rest;
				return Some(Token::Number(decode_literal(literal)));
			}

			self.rest = after;
			match c {
				//comment until end of line
				'#' => {
					self.rest = "";
					return None;
				},
				'r' => {
					if let Some(rest) = after.strip_prefix(EASTER_TAIL) {
						self.rest = rest;
						return Some(Token::Easter);
					}
					return Some(Token::Random(self.random.next_value()));
				},
				_ if c.is_whitespace() => {},
				_ => {
					return Some(SYMBOLS.get(&c).copied().unwrap_or(Token::Unrecognized(c)));
				}
			}
		}
	}
}

///Decode a literal of ASCII digits with optional leading '-'.
///
///A leading `0` (after the sign) on a literal longer than one character selects base 8,
///in which case everything from the first `8` or `9` on is dropped.
///Out-of-range values saturate, whatever their length.
pub fn decode_literal(literal: &str) -> i32 {
	let (neg, digits) = match literal.strip_prefix('-') {
		Some(d) => (true, d),
		None => (false, literal)
	};
	let radix: i64 = if literal.len() > 1 && digits.starts_with('0') {8} else {10};
	let digits = if radix == 8 {
		&digits[..digits.find(['8', '9']).unwrap_or(digits.len())]
	}
	else {digits};

	let magnitude = digits.bytes()
		.fold(0_i64, |acc, d| (acc * radix + i64::from(d - b'0')).min(MAGNITUDE_CAP));
	saturate(if neg {-magnitude} else {magnitude})
}
