mod debug;

pub mod console;
pub mod session;
pub mod sort;
pub mod stack;
pub mod terminal_io;

pub use console::{Console, ScriptedConsole};
pub use debug::DisplayList;
pub use session::{Options, Session};
pub use sort::{bubble_sort, bubble_sort_with, SortReport, Termination};
pub use stack::Stack;
pub use terminal_io::TerminalConsole;
