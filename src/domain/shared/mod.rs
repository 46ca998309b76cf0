pub mod poll;

pub use poll::{poll_until, PollPolicy, PollStatus};
