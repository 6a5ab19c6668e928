// Services pair a store mutation or backend call with its user-facing side
// effects: loading indicator while a call runs, notification banner on the
// way out. Errors are shown and then returned so callers can abort.

pub mod email;
pub mod files;
pub mod linkedin;
pub mod parse;
pub mod photo;
pub mod preview;
