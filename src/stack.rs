use crate::arith;
use crate::error::CalcError;
use crate::token::{Operator, Token};

///maximum number of values on the stack
pub const CAPACITY: usize = 23;

///what the caller has to print after a successful token
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<'a> {
	///nothing to show
	Quiet,
	///single value, from `=`
	Top(i32),
	///whole stack bottom to top, from `d`
	Listing(&'a [i32]),
	Easter
}

impl Operator {
	///apply to `a` (pushed first) and `b` (on top)
	fn apply(self, a: i32, b: i32) -> Result<i32, CalcError> {
		match self {
			Operator::Add => Ok(arith::add(a, b)),
			Operator::Sub => Ok(arith::sub(a, b)),
			Operator::Mul => Ok(arith::mul(a, b)),
			Operator::Div => arith::div(a, b).ok_or(CalcError::DivideByZero),
			Operator::Rem => arith::rem(a, b).ok_or(CalcError::DivideByZero),
			Operator::Pow => {
				let exp = u32::try_from(b).map_err(|_| CalcError::NegativePower)?;
				Ok(arith::pow(a, exp))
			}
		}
	}
}

///Bounded operand stack, top is the last element.
#[derive(Debug, Default)]
pub struct StackMachine {
	values: Vec<i32>
}
impl StackMachine {
	///execute one token
	///
	///On error the stack is exactly as before the call.
	pub fn apply(&mut self, token: Token) -> Result<Outcome<'_>, CalcError> {
		match token {
			Token::Number(v)|Token::Random(v) => {
				self.push(v)?;
				Ok(Outcome::Quiet)
			},
			Token::Operator(op) => {
				let [a, b] = self.operands()?;
				let res = op.apply(a, b)?;	//operands stay in place on failure
				self.values.truncate(self.values.len() - 2);
				self.values.push(res);
				Ok(Outcome::Quiet)
			},
			Token::Display => Ok(Outcome::Listing(&self.values)),
			Token::Evaluate => self.values.last().map(|&v| Outcome::Top(v)).ok_or(CalcError::StackEmpty),
			Token::Easter => Ok(Outcome::Easter),
			Token::Unrecognized(c) => Err(CalcError::Unrecognised(c))
		}
	}

	///push with capacity check
	pub fn push(&mut self, v: i32) -> Result<(), CalcError> {
		if self.values.len() >= CAPACITY {
			return Err(CalcError::StackOverflow);
		}
		self.values.push(v);
		Ok(())
	}

	///second and top values, without removing them
	fn operands(&self) -> Result<[i32; 2], CalcError> {
		match self.values[..] {
			[.., a, b] => Ok([a, b]),
			_ => Err(CalcError::StackUnderflow)
		}
	}

	///current contents, bottom first
	pub fn values(&self) -> &[i32] {
		&self.values
	}
}
