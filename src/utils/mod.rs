pub(crate) mod debug;

pub(crate) use debug::{debug_log, set_debug};
