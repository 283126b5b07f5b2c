mod common;

mod advisory;
mod intake;
