//! Headless engine of rpnline.
//!
//! The calculator (scanner, stack, evaluator), the line editor (line buffer,
//! history, viewport) and the session and keymap glue between them. Nothing
//! in here touches the terminal.

pub mod error;
pub mod eval;
pub mod history;
pub mod input;
pub mod keymap;
pub mod line_buffer;
pub mod scanner;
pub mod session;
pub mod stack;
pub mod viewport;

pub use error::{CalcError, PowerError};
pub use eval::evaluate;
pub use line_buffer::LineBuffer;
pub use session::{Outcome, Session};
pub use stack::Stack;
