use thiserror::Error;

///Recoverable calculator errors, displayed exactly as they are printed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
	#[error("Stack overflow.")]
	StackOverflow,

	#[error("Stack underflow.")]
	StackUnderflow,

	#[error("Divide by 0.")]
	DivideByZero,

	#[error("Negative power.")]
	NegativePower,

	#[error("Stack empty.")]
	StackEmpty,

	#[error("Unrecognised operator or operand \"{0}\".")]
	Unrecognised(char),
}
